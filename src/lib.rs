pub mod annotate;
pub mod cli;
pub mod commands;
pub mod metadata;
pub mod sequence;
pub mod utils;

// Re-export main API
pub use annotate::{annotate, AnnotateOptions, AnnotationStats};
