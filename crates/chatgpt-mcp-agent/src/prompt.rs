use chrono::Local;
use std::env;

pub fn get_server_instructions() -> String {
    let current_date_time = Local::now().to_string();
    let current_os = env::consts::OS;

    format!(
        "
This server drives the ChatGPT desktop app on macOS through its user interface. It exposes a single tool, `chatgpt`.

**Operations**
*   `ask`: types `prompt` into the app and presses Return. With `time_to_wait` > 0 (default 6, max 3600 seconds) the server waits that long and then reads the reply shown in the window. With `time_to_wait: 0` it only confirms that the prompt was sent.
*   `get_conversations`: lists the conversation titles visible in the sidebar.

**Things to know**
*   The app must be installed. If it is not running it is launched first, which adds a couple of seconds.
*   The wait is fixed: long answers may still be rendering when the reply is read. Use a larger `time_to_wait` for long prompts.
*   `conversation_id` is the title shown in the sidebar. An unknown title is ignored and the prompt goes to the open conversation.
*   Titles that contain \", \" are split into several entries by `get_conversations`.
*   Do not use the app by hand while a call is running; keystrokes go to whatever window has focus.

Contextual information:
- The current date and time is {current_date_time}.
- Current operating system: {current_os}.
"
    )
}
