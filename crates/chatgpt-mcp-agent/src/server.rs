use crate::args::{parse_args, ChatGptArgs};
use crate::tool::{chatgpt_tool, TOOL_NAME};
use anyhow::anyhow;
use chatgpt_automation::{BridgeConfig, ChatGptApp, Diagnostic};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde_json::Value;
use tracing::{info, warn};

/// MCP handler exposing the ChatGPT desktop app as the `chatgpt` tool.
#[derive(Clone)]
pub struct ChatGptServer {
    app: ChatGptApp,
}

impl ChatGptServer {
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_app(ChatGptApp::from_config(config))
    }

    pub fn with_app(app: ChatGptApp) -> Self {
        Self { app }
    }

    pub fn tools(&self) -> Vec<Tool> {
        vec![chatgpt_tool()]
    }

    /// Run a tool call to completion.
    ///
    /// Failures never escape as protocol errors: unknown tools, bad
    /// arguments and automation errors all come back with `is_error` set.
    pub async fn dispatch_tool(
        &self,
        tool_name: &str,
        arguments: Option<&JsonObject>,
    ) -> CallToolResult {
        if tool_name != TOOL_NAME {
            warn!("Unknown tool called: {}", tool_name);
            return CallToolResult::error(vec![Content::text(format!(
                "Unknown tool: {tool_name}"
            ))]);
        }

        match self.run_chatgpt(arguments).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!("chatgpt tool failed: {:#}", e);
                CallToolResult::error(vec![Content::text(format!("Error: {e}"))])
            }
        }
    }

    async fn run_chatgpt(&self, arguments: Option<&JsonObject>) -> anyhow::Result<String> {
        let arguments = arguments.ok_or_else(|| anyhow!("No arguments provided"))?;
        let args = parse_args(&Value::Object(arguments.clone()))?;
        info!("chatgpt tool called, operation: {}", args.operation());

        match args {
            ChatGptArgs::Ask {
                prompt,
                conversation_id,
                time_to_wait,
            } => {
                let outcome = self
                    .app
                    .ask(&prompt, conversation_id.as_deref(), time_to_wait)
                    .await?;
                log_diagnostics("ask", &outcome.diagnostics);
                Ok(outcome.value)
            }
            ChatGptArgs::GetConversations => {
                let outcome = self.app.get_conversations().await;
                log_diagnostics("get_conversations", &outcome.diagnostics);
                Ok(format_conversations(&outcome.value))
            }
        }
    }
}

fn log_diagnostics(operation: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        warn!(operation, "Completed with fallback: {}", diagnostic);
    }
}

/// Text returned for `get_conversations`.
pub fn format_conversations(conversations: &[String]) -> String {
    if conversations.is_empty() {
        "No conversations found in ChatGPT.".to_string()
    } else {
        format!(
            "Found {} conversation(s):\n\n{}",
            conversations.len(),
            conversations.join("\n")
        )
    }
}

impl ServerHandler for ChatGptServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(crate::prompt::get_server_instructions()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .dispatch_tool(&request.name, request.arguments.as_ref())
            .await)
    }
}
