//! Automation of the ChatGPT desktop app on macOS.
//!
//! All interaction goes through AppleScript: the app is checked and
//! launched through System Events, prompts are typed as keystrokes and
//! replies are read back from the accessibility tree.

pub mod app;
pub mod applescript;
pub mod config;
pub mod errors;
pub mod outcome;
pub mod script;
pub mod wait;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use app::{
    parse_conversation_list, ChatGptApp, CONVERSATIONS_ERROR, LIST_SEPARATOR, PROMPT_SENT,
};
pub use config::{BridgeConfig, DEFAULT_WAIT, MAX_WAIT};
pub use errors::AutomationError;
pub use outcome::{Diagnostic, Outcome};
pub use script::{OsaScriptRunner, ScriptRunner};
pub use wait::{FixedDelay, ResponseWait};

#[cfg(test)]
mod tests;
