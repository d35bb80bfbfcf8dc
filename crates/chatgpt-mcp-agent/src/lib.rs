pub mod args;
pub mod prompt;
pub mod server;
pub mod tool;
pub mod utils;

pub use args::{parse_args, ArgsError, ChatGptArgs};
pub use server::ChatGptServer;
pub use tool::{chatgpt_tool, TOOL_NAME};
