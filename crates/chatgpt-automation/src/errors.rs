use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomationError {
    /// The app was not running and could not be brought up.
    #[error("Could not activate {0} app. Please start it manually.")]
    ActivationFailed(String),

    #[error("Cannot access {app} app. Please make sure {app} is installed and properly configured. Error: {cause}")]
    AccessCheck { app: String, cause: String },

    #[error("Failed to get response from {app}: {cause}")]
    Ask { app: String, cause: String },

    #[error("Script execution failed: {0}")]
    Script(String),

    #[error("Failed to launch script runner: {0}")]
    Spawn(String),
}

impl AutomationError {
    /// Message of the underlying failure, without the variant's prefix.
    pub fn cause(&self) -> String {
        match self {
            AutomationError::Script(cause) | AutomationError::Spawn(cause) => cause.clone(),
            AutomationError::AccessCheck { cause, .. } | AutomationError::Ask { cause, .. } => {
                cause.clone()
            }
            other => other.to_string(),
        }
    }
}
