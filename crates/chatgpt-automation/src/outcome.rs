use std::fmt;
use std::time::Duration;

/// A fallback taken while producing a successful result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No sidebar button matched the requested conversation; the prompt went
    /// to whichever conversation was open.
    ConversationNotFound { conversation_id: String },
    /// The reply could not be read after waiting.
    ResponseUnavailable { waited: Duration },
    /// The app answered the enumeration with its placeholder entry.
    EnumerationFallback,
    /// Listing conversations failed outright.
    ConversationsUnavailable { reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ConversationNotFound { conversation_id } => write!(
                f,
                "conversation '{conversation_id}' not found, prompt sent to the current conversation"
            ),
            Diagnostic::ResponseUnavailable { waited } => write!(
                f,
                "response not readable after waiting {}s",
                waited.as_secs_f64()
            ),
            Diagnostic::EnumerationFallback => {
                write!(f, "conversation list could not be read from the sidebar")
            }
            Diagnostic::ConversationsUnavailable { reason } => {
                write!(f, "listing conversations failed: {reason}")
            }
        }
    }
}

/// Result value plus the fallbacks taken to get it.
///
/// An empty `diagnostics` list means the operation succeeded exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Outcome<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostic(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_exact(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }
}
