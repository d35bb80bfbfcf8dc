use std::path::PathBuf;
use std::time::Duration;

/// Wait applied to `ask` when the caller does not pass one.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(6);

/// Upper bound accepted for the post-submit wait.
pub const MAX_WAIT: Duration = Duration::from_secs(3600);

/// Runtime knobs for talking to the desktop app.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Application and process name as seen by System Events.
    pub app_name: String,
    /// Program used to execute AppleScript.
    pub osascript: PathBuf,
    /// Waits passed to `ask` are clamped to this value.
    pub max_wait: Duration,
    /// Delay after launching the app before the first interaction.
    pub launch_settle: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            app_name: "ChatGPT".to_string(),
            osascript: PathBuf::from("osascript"),
            max_wait: MAX_WAIT,
            launch_settle: Duration::from_secs(2),
        }
    }
}

impl BridgeConfig {
    /// Clamp a requested wait into `[0, max_wait]`.
    pub fn clamp_wait(&self, wait: Duration) -> Duration {
        wait.min(self.max_wait)
    }
}
