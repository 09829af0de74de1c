//! Monitor configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::render::DisplayMode;

/// Default pause between poll cycles.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(500);

/// Monitor configuration.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Directory holding the status files
    pub dir: PathBuf,
    /// Pause between poll cycles
    pub refresh: Duration,
    /// Rendering mode, fixed for the process lifetime
    pub mode: DisplayMode,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            refresh: DEFAULT_REFRESH_INTERVAL,
            mode: DisplayMode::InPlace,
        }
    }
}

impl MonitorConfig {
    /// Create config for a directory with default refresh and mode.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Set the refresh interval.
    pub fn with_refresh(mut self, refresh: Duration) -> Self {
        self.refresh = refresh;
        self
    }

    /// Set the display mode.
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }
}
