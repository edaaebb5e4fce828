use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressBarBuilder {
    template: &'static str,
    message: String,
    tick: Option<Duration>,
    hidden: bool,
}

impl ProgressBarBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            template: "{spinner:.green} {msg}",
            message: message.into(),
            tick: None,
            hidden: false,
        }
    }

    pub fn with_template(mut self, template: &'static str) -> Self {
        self.template = template;
        self
    }

    pub fn with_tick(mut self, interval: Duration) -> Self {
        self.tick = Some(interval);
        self
    }

    /// Build a bar that never draws; used by library callers and tests.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn build(self) -> Result<ProgressBar> {
        if self.hidden {
            return Ok(ProgressBar::hidden());
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template(self.template)?);
        pb.set_message(self.message);

        if let Some(interval) = self.tick {
            pb.enable_steady_tick(interval);
        }

        Ok(pb)
    }
}
