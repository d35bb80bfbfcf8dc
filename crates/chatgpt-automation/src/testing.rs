//! Scripted fakes for the automation seams.

use crate::errors::AutomationError;
use crate::script::ScriptRunner;
use crate::wait::ResponseWait;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder = dyn Fn(&str) -> Result<String, AutomationError> + Send + Sync;

/// `ScriptRunner` that answers from a closure and records every script.
#[derive(Clone)]
pub struct ScriptedRunner {
    responder: Arc<Responder>,
    scripts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new(
        responder: impl Fn(&str) -> Result<String, AutomationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Arc::new(responder),
            scripts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Runner for an app that is already running and answers every other
    /// script with `reply`.
    pub fn running(
        reply: impl Fn(&str) -> Result<String, AutomationError> + Send + Sync + 'static,
    ) -> Self {
        Self::new(move |script| {
            if script.contains("application process") && script.contains("exists") {
                Ok("true".to_string())
            } else {
                reply(script)
            }
        })
    }

    /// Scripts received so far, in order.
    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn ran(&self, needle: &str) -> bool {
        self.scripts().iter().any(|s| s.contains(needle))
    }
}

#[async_trait]
impl ScriptRunner for ScriptedRunner {
    async fn run(&self, script: &str) -> Result<String, AutomationError> {
        if let Ok(mut scripts) = self.scripts.lock() {
            scripts.push(script.to_string());
        }
        (self.responder)(script)
    }
}

/// `ResponseWait` that returns immediately and records the budgets it saw.
#[derive(Clone, Default)]
pub struct RecordingWait {
    budgets: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingWait {
    pub fn budgets(&self) -> Vec<Duration> {
        self.budgets.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ResponseWait for RecordingWait {
    async fn wait_for_response(&self, budget: Duration) {
        if let Ok(mut budgets) = self.budgets.lock() {
            budgets.push(budget);
        }
    }
}
