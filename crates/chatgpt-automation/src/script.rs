//! Execution of AppleScript through `osascript`.

use crate::errors::AutomationError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

/// Runs a script body and returns its textual result.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, script: &str) -> Result<String, AutomationError>;
}

/// Production runner: one `osascript -e <script>` process per call.
#[derive(Debug, Clone)]
pub struct OsaScriptRunner {
    program: PathBuf,
}

impl OsaScriptRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OsaScriptRunner {
    fn default() -> Self {
        Self::new("osascript")
    }
}

#[async_trait]
impl ScriptRunner for OsaScriptRunner {
    async fn run(&self, script: &str) -> Result<String, AutomationError> {
        debug!("[osascript] Running script ({} bytes)", script.len());
        trace!(
            preview = %script.chars().take(200).collect::<String>(),
            "[osascript] Script preview"
        );

        // stdin is the MCP channel, the child must not inherit it
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                AutomationError::Spawn(format!("{}: {e}", self.program.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!("[osascript] Script failed: {}", stderr);
            return Err(AutomationError::Script(if stderr.is_empty() {
                format!("{} exited with {}", self.program.display(), output.status)
            } else {
                stderr
            }));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("[osascript] Script returned {} bytes", stdout.len());
        Ok(stdout)
    }
}
