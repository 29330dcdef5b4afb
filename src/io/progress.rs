//! Stage progress display for the generation pipeline

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Displays one spinner per pipeline stage
///
/// Completed stages stay visible with a check mark so the overall sequence
/// remains readable while later stages run.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    current: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            current: None,
        }
    }

    /// Begin a new stage, finishing any stage still running
    pub fn start_stage(&mut self, message: &str) {
        self.finish_current();

        let bar = ProgressBar::new_spinner();
        bar.set_style(STAGE_STYLE.clone());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.current = Some(self.multi_progress.add(bar));
    }

    /// Mark the running stage as completed
    pub fn complete_stage(&mut self, message: &str) {
        if let Some(bar) = self.current.take() {
            bar.finish_with_message(format!("✓ {message}"));
        }
    }

    /// Leave the running stage visible in its failed state
    pub fn abandon_stage(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.abandon();
        }
    }

    /// Stop any remaining stage display
    pub fn finish(&mut self) {
        self.finish_current();
    }

    fn finish_current(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish();
        }
    }
}
