use crate::testing::{RecordingWait, ScriptedRunner};
use crate::{AutomationError, BridgeConfig, ChatGptApp};
use std::sync::Arc;

fn app_with(runner: &ScriptedRunner) -> ChatGptApp {
    ChatGptApp::new(
        BridgeConfig::default(),
        Arc::new(runner.clone()),
        Arc::new(RecordingWait::default()),
    )
}

#[tokio::test]
async fn running_app_is_not_relaunched() {
    let runner = ScriptedRunner::running(|_| Ok(String::new()));
    app_with(&runner).ensure_running().await.unwrap();

    assert_eq!(runner.scripts().len(), 1);
    assert!(!runner.ran("to activate"));
}

#[tokio::test]
async fn stopped_app_is_launched_with_settle_delay() {
    let runner = ScriptedRunner::new(|script| {
        if script.contains("exists") {
            Ok("false".to_string())
        } else {
            Ok(String::new())
        }
    });
    app_with(&runner).ensure_running().await.unwrap();

    let scripts = runner.scripts();
    assert_eq!(scripts.len(), 2);
    assert!(scripts[1].contains(r#"tell application "ChatGPT" to activate"#));
    assert!(scripts[1].contains("delay 2"));
}

#[tokio::test]
async fn failed_launch_is_activation_error() {
    let runner = ScriptedRunner::new(|script| {
        if script.contains("exists") {
            Ok("false".to_string())
        } else {
            Err(AutomationError::Script("Application isn't running.".to_string()))
        }
    });
    let err = app_with(&runner).ensure_running().await.unwrap_err();

    assert_eq!(err, AutomationError::ActivationFailed("ChatGPT".to_string()));
    assert_eq!(
        err.to_string(),
        "Could not activate ChatGPT app. Please start it manually."
    );
}

#[tokio::test]
async fn failed_check_embeds_cause() {
    let runner = ScriptedRunner::new(|_| {
        Err(AutomationError::Script(
            "System Events got an error: osascript is not allowed assistive access.".to_string(),
        ))
    });
    let err = app_with(&runner).ensure_running().await.unwrap_err();

    assert!(matches!(err, AutomationError::AccessCheck { .. }));
    let message = err.to_string();
    assert!(message.starts_with("Cannot access ChatGPT app."));
    assert!(message.contains("osascript is not allowed assistive access."));
}

#[tokio::test]
async fn check_is_not_cached() {
    let runner = ScriptedRunner::running(|_| Ok(String::new()));
    let app = app_with(&runner);
    app.ensure_running().await.unwrap();
    app.ensure_running().await.unwrap();

    assert_eq!(runner.scripts().len(), 2);
}

#[tokio::test]
async fn custom_app_name_is_used_in_scripts() {
    let runner = ScriptedRunner::new(|_| Ok("false".to_string()));
    let config = BridgeConfig {
        app_name: "ChatGPT Beta".to_string(),
        ..Default::default()
    };
    let app = ChatGptApp::new(config, Arc::new(runner.clone()), Arc::new(RecordingWait::default()));
    app.ensure_running().await.unwrap();

    assert!(runner.ran(r#"application process "ChatGPT Beta" exists"#));
    assert!(runner.ran(r#"tell application "ChatGPT Beta" to activate"#));
}
