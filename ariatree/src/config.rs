//! Tree controller configuration.

use std::time::Duration;

/// Per-controller configuration.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// How long [`settle`](crate::TreeController::settle) waits for native
    /// disclosure toggles to land before running scheduled work.
    pub settle_delay: Duration,

    /// When true, a pointer click that leaves the clicked item's group
    /// closed also closes every group nested beneath it.
    pub close_subfolders: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(10),
            close_subfolders: true,
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the settle delay.
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Enable or disable closing nested groups after a pointer collapse.
    pub fn close_subfolders(mut self, enabled: bool) -> Self {
        self.close_subfolders = enabled;
        self
    }
}
