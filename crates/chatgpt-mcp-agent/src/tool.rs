use chatgpt_automation::{DEFAULT_WAIT, MAX_WAIT};
use rmcp::model::{JsonObject, Tool};
use serde_json::{json, Value};
use std::sync::Arc;

pub const TOOL_NAME: &str = "chatgpt";

pub const TOOL_DESCRIPTION: &str = "Interact with the ChatGPT desktop app on macOS";

/// JSON Schema of the tool's arguments.
pub fn input_schema() -> JsonObject {
    let schema = json!({
        "type": "object",
        "properties": {
            "operation": {
                "type": "string",
                "description": "Operation to perform: 'ask' or 'get_conversations'",
                "enum": ["ask", "get_conversations"]
            },
            "prompt": {
                "type": "string",
                "description": "The prompt to send to ChatGPT (required for ask operation)"
            },
            "conversation_id": {
                "type": "string",
                "description": "Optional conversation ID to continue a specific conversation"
            },
            "time_to_wait": {
                "type": "number",
                "description": format!(
                    "Time in seconds to wait before retrieving the response (0-{max}). If 0, no response is retrieved. Defaults to {default}.",
                    max = MAX_WAIT.as_secs(),
                    default = DEFAULT_WAIT.as_secs()
                ),
                "minimum": 0,
                "maximum": MAX_WAIT.as_secs(),
                "default": DEFAULT_WAIT.as_secs()
            }
        },
        "required": ["operation"]
    });

    match schema {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// Descriptor advertised by `tools/list`.
pub fn chatgpt_tool() -> Tool {
    Tool::new(TOOL_NAME, TOOL_DESCRIPTION, Arc::new(input_schema()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let tool = chatgpt_tool();
        assert_eq!(tool.name, TOOL_NAME);
        assert_eq!(tool.description.as_deref(), Some(TOOL_DESCRIPTION));

        let schema = &tool.input_schema;
        assert_eq!(schema["required"], json!(["operation"]));
        assert_eq!(
            schema["properties"]["operation"]["enum"],
            json!(["ask", "get_conversations"])
        );
        assert_eq!(schema["properties"]["time_to_wait"]["maximum"], json!(3600));
        assert_eq!(schema["properties"]["time_to_wait"]["default"], json!(6));
    }
}
