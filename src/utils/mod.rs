pub mod input;
pub mod progress_bar_builder;
