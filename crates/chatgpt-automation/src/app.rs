use crate::applescript;
use crate::config::BridgeConfig;
use crate::errors::AutomationError;
use crate::outcome::{Diagnostic, Outcome};
use crate::script::{OsaScriptRunner, ScriptRunner};
use crate::wait::{FixedDelay, ResponseWait};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Separator osascript uses when printing a list result.
pub const LIST_SEPARATOR: &str = ", ";

/// Entry returned by `get_conversations` when listing fails.
pub const CONVERSATIONS_ERROR: &str = "Error retrieving conversations";

/// Result of `ask` when the caller asked for no wait.
pub const PROMPT_SENT: &str = "Prompt sent. Response retrieval skipped (time_to_wait was 0).";

/// Handle on the ChatGPT desktop app.
///
/// Holds no UI state: every operation re-checks that the app is running
/// and drives it from scratch.
#[derive(Clone)]
pub struct ChatGptApp {
    config: BridgeConfig,
    runner: Arc<dyn ScriptRunner>,
    waiter: Arc<dyn ResponseWait>,
}

impl ChatGptApp {
    pub fn new(
        config: BridgeConfig,
        runner: Arc<dyn ScriptRunner>,
        waiter: Arc<dyn ResponseWait>,
    ) -> Self {
        Self {
            config,
            runner,
            waiter,
        }
    }

    /// App backed by `osascript` and a fixed post-submit delay.
    pub fn from_config(config: BridgeConfig) -> Self {
        let runner = Arc::new(OsaScriptRunner::new(config.osascript.clone()));
        Self::new(config, runner, Arc::new(FixedDelay))
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Make sure the app process exists, launching it when it does not.
    pub async fn ensure_running(&self) -> Result<(), AutomationError> {
        let app = &self.config.app_name;

        let is_running = self
            .runner
            .run(&applescript::process_exists(app))
            .await
            .map_err(|e| {
                error!("{} access check failed: {}", app, e);
                AutomationError::AccessCheck {
                    app: app.clone(),
                    cause: e.cause(),
                }
            })?;

        if is_running != "true" {
            info!("{} app is not running, attempting to launch...", app);
            if let Err(e) = self
                .runner
                .run(&applescript::activate(app, self.config.launch_settle))
                .await
            {
                error!("Error activating {} app: {}", app, e);
                return Err(AutomationError::ActivationFailed(app.clone()));
            }
        }

        Ok(())
    }

    /// Type `prompt` into the app and, when `wait` is non-zero, read the reply.
    pub async fn ask(
        &self,
        prompt: &str,
        conversation_id: Option<&str>,
        wait: Duration,
    ) -> Result<Outcome<String>, AutomationError> {
        self.ensure_running().await?;

        let wait = self.config.clamp_wait(wait);
        let app = &self.config.app_name;

        self.submit_and_read(prompt, conversation_id, wait)
            .await
            .map_err(|e| {
                error!("Error interacting with {}: {}", app, e);
                AutomationError::Ask {
                    app: app.clone(),
                    cause: e.cause(),
                }
            })
    }

    async fn submit_and_read(
        &self,
        prompt: &str,
        conversation_id: Option<&str>,
        wait: Duration,
    ) -> Result<Outcome<String>, AutomationError> {
        let app = &self.config.app_name;
        let mut diagnostics = Vec::new();

        let selection = self
            .runner
            .run(&applescript::submit_prompt(app, prompt, conversation_id))
            .await?;
        debug!("Prompt submitted ({} chars), selection: {}", prompt.chars().count(), selection);

        if let Some(id) = conversation_id {
            if selection != applescript::SELECTION_CLICKED {
                warn!("Conversation '{}' not found, continuing in the open one", id);
                diagnostics.push(Diagnostic::ConversationNotFound {
                    conversation_id: id.to_string(),
                });
            }
        }

        if wait.is_zero() {
            return Ok(Outcome {
                value: PROMPT_SENT.to_string(),
                diagnostics,
            });
        }

        self.waiter.wait_for_response(wait).await;

        let response = self.runner.run(&applescript::read_response(app)).await?;
        let value = if response == applescript::RESPONSE_UNAVAILABLE {
            diagnostics.push(Diagnostic::ResponseUnavailable { waited: wait });
            format!(
                "Could not retrieve the response from {app} after waiting {}s.",
                wait.as_secs_f64()
            )
        } else {
            response
        };

        Ok(Outcome { value, diagnostics })
    }

    /// Titles of the conversations visible in the sidebar.
    ///
    /// Never fails: errors become a single placeholder entry plus a diagnostic.
    pub async fn get_conversations(&self) -> Outcome<Vec<String>> {
        match self.list_conversations().await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error getting {} conversations: {}", self.config.app_name, e);
                Outcome::with_diagnostic(
                    vec![CONVERSATIONS_ERROR.to_string()],
                    Diagnostic::ConversationsUnavailable {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    async fn list_conversations(&self) -> Result<Outcome<Vec<String>>, AutomationError> {
        self.ensure_running().await?;

        let raw = self
            .runner
            .run(&applescript::list_conversations(&self.config.app_name))
            .await?;

        if raw == applescript::CONVERSATIONS_PLACEHOLDER {
            return Ok(Outcome::with_diagnostic(
                vec![raw],
                Diagnostic::EnumerationFallback,
            ));
        }

        Ok(Outcome::exact(parse_conversation_list(&raw)))
    }
}

/// Split osascript's printed list into titles.
///
/// Lossy: a title that itself contains ", " comes back as several entries.
pub fn parse_conversation_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(LIST_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conversation_list() {
        assert_eq!(parse_conversation_list("A, B, C"), vec!["A", "B", "C"]);
        assert_eq!(parse_conversation_list("Only one"), vec!["Only one"]);
        assert!(parse_conversation_list("").is_empty());
    }

    #[test]
    fn test_parse_conversation_list_splits_titles_with_separator() {
        // Known limitation: the title "Rust, Go" cannot be told apart from two titles.
        assert_eq!(
            parse_conversation_list("Rust, Go, Notes"),
            vec!["Rust", "Go", "Notes"]
        );
    }

    #[test]
    fn test_separator_without_space_is_kept() {
        assert_eq!(parse_conversation_list("a,b, c"), vec!["a,b", "c"]);
    }
}
