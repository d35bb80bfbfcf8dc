//! AppleScript bodies sent to the desktop app.
//!
//! Every UI path here (`group 1 of group 1 of window 1`, `text area 2`) is
//! tied to the current layout of the ChatGPT app and is best effort.

use std::time::Duration;

/// Returned by the submit script when a conversation button was clicked.
pub const SELECTION_CLICKED: &str = "conversation:selected";
/// Returned by the submit script when no button matched the conversation id.
pub const SELECTION_MISSING: &str = "conversation:missing";
/// Returned by the submit script when no conversation id was given.
pub const SELECTION_NONE: &str = "conversation:none";

/// Returned by the read script when the response text area is not reachable.
pub const RESPONSE_UNAVAILABLE: &str = "response:unavailable";

/// Name of the sidebar button that opens a fresh chat.
pub const NEW_CHAT_LABEL: &str = "New chat";

/// Single-entry list returned by the enumeration script on failure.
pub const CONVERSATIONS_PLACEHOLDER: &str = "Unable to retrieve conversations";

/// Escape text for use inside an AppleScript string literal.
pub fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Format a duration the way AppleScript's `delay` expects it.
fn seconds(duration: Duration) -> String {
    duration.as_secs_f64().to_string()
}

pub fn process_exists(app_name: &str) -> String {
    format!(
        r#"
tell application "System Events"
  return application process "{app}" exists
end tell
"#,
        app = escape_string(app_name)
    )
}

pub fn activate(app_name: &str, settle: Duration) -> String {
    format!(
        r#"
tell application "{app}" to activate
delay {settle}
"#,
        app = escape_string(app_name),
        settle = seconds(settle)
    )
}

/// Bring the app forward, optionally open a conversation, and type `prompt`.
///
/// The script returns one of the `SELECTION_*` markers.
pub fn submit_prompt(app_name: &str, prompt: &str, conversation_id: Option<&str>) -> String {
    let app = escape_string(app_name);
    let selection = match conversation_id {
        Some(id) => format!(
            r#"
      try
        click button "{id}" of group 1 of group 1 of window 1
        delay 1
        set selectionState to "{SELECTION_CLICKED}"
      on error
        set selectionState to "{SELECTION_MISSING}"
      end try
"#,
            id = escape_string(id)
        ),
        None => String::new(),
    };

    format!(
        r#"
tell application "{app}"
  activate
  delay 1

  tell application "System Events"
    tell process "{app}"
      set selectionState to "{SELECTION_NONE}"
{selection}
      keystroke "{prompt}"
      delay 0.5
      keystroke return

      return selectionState
    end tell
  end tell
end tell
"#,
        prompt = escape_string(prompt)
    )
}

/// Read the rendered reply, or `RESPONSE_UNAVAILABLE` when the element is missing.
pub fn read_response(app_name: &str) -> String {
    format!(
        r#"
tell application "System Events"
  tell process "{app}"
    try
      return value of text area 2 of group 1 of group 1 of window 1
    on error
      return "{RESPONSE_UNAVAILABLE}"
    end try
  end tell
end tell
"#,
        app = escape_string(app_name)
    )
}

/// List sidebar conversation titles; osascript prints the list joined by ", ".
pub fn list_conversations(app_name: &str) -> String {
    format!(
        r#"
tell application "{app}"
  activate
  delay 1

  tell application "System Events"
    tell process "{app}"
      set conversationsList to {{}}

      try
        set chatButtons to buttons of group 1 of group 1 of window 1
        repeat with chatButton in chatButtons
          set buttonName to name of chatButton
          if buttonName is not "{NEW_CHAT_LABEL}" then
            set end of conversationsList to buttonName
          end if
        end repeat
      on error
        set conversationsList to {{"{CONVERSATIONS_PLACEHOLDER}"}}
      end try

      return conversationsList
    end tell
  end tell
end tell
"#,
        app = escape_string(app_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "plain");
        assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string(r"C:\temp"), r"C:\\temp");
        assert_eq!(escape_string(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn test_submit_prompt_escapes_prompt() {
        let script = submit_prompt("ChatGPT", r#"what is "rust"?"#, None);
        assert!(script.contains(r#"keystroke "what is \"rust\"?""#));
        assert!(script.contains("keystroke return"));
        assert!(!script.contains("click button"));
    }

    #[test]
    fn test_submit_prompt_with_conversation() {
        let script = submit_prompt("ChatGPT", "hello", Some("Trip planning"));
        assert!(script.contains(r#"click button "Trip planning" of group 1 of group 1 of window 1"#));
        assert!(script.contains(SELECTION_CLICKED));
        assert!(script.contains(SELECTION_MISSING));
    }

    #[test]
    fn test_activate_uses_settle_delay() {
        let script = activate("ChatGPT", Duration::from_millis(1500));
        assert!(script.contains(r#"tell application "ChatGPT" to activate"#));
        assert!(script.contains("delay 1.5"));

        let script = activate("ChatGPT", Duration::from_secs(2));
        assert!(script.contains("delay 2\n"));
    }

    #[test]
    fn test_list_conversations_skips_new_chat() {
        let script = list_conversations("ChatGPT");
        assert!(script.contains(r#"if buttonName is not "New chat" then"#));
        assert!(script.contains(r#"set conversationsList to {"Unable to retrieve conversations"}"#));
    }
}
