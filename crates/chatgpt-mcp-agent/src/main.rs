use anyhow::Result;
use chatgpt_automation::BridgeConfig;
use chatgpt_mcp_agent::server::ChatGptServer;
use chatgpt_mcp_agent::utils::init_logging;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ChatGPT MCP Server - drive the ChatGPT desktop app via Model Context Protocol"
)]
struct Args {
    /// Name of the desktop app and its process
    #[arg(long, env = "CHATGPT_APP_NAME", default_value = "ChatGPT")]
    app_name: String,

    /// Program used to run AppleScript
    #[arg(long, env = "CHATGPT_OSASCRIPT", default_value = "osascript")]
    osascript: PathBuf,

    /// Upper bound in seconds for the post-submit wait of `ask`
    #[arg(long, env = "CHATGPT_MAX_WAIT_SECS", default_value_t = 3600)]
    max_wait_secs: u64,

    /// Seconds to let the app settle after launching it
    #[arg(long, env = "CHATGPT_LAUNCH_SETTLE_SECS", default_value_t = 2.0)]
    launch_settle_secs: f64,
}

impl Args {
    fn bridge_config(&self) -> Result<BridgeConfig> {
        Ok(BridgeConfig {
            app_name: self.app_name.clone(),
            osascript: self.osascript.clone(),
            max_wait: Duration::from_secs(self.max_wait_secs),
            launch_settle: Duration::try_from_secs_f64(self.launch_settle_secs)?,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Never write to stdout during panic - it corrupts the JSON-RPC stream
    std::panic::set_hook(Box::new(|panic_info| {
        if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            eprintln!("MCP Server Panic: {s}");
        } else {
            eprintln!("MCP Server Panic occurred");
        }
        if let Some(location) = panic_info.location() {
            eprintln!("Panic location: {}:{}", location.file(), location.line());
        }
    }));

    init_logging()?;

    info!("========================================");
    info!("ChatGPT MCP Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Build profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );
    if let Ok(exe_path) = std::env::current_exe() {
        info!("Binary path: {}", exe_path.display());
    }
    info!("========================================");

    if !cfg!(target_os = "macos") {
        tracing::warn!(
            "Running on {}: AppleScript automation is only available on macOS, tool calls will fail",
            std::env::consts::OS
        );
    }

    let config = args.bridge_config()?;
    info!(
        app = %config.app_name,
        osascript = %config.osascript.display(),
        max_wait = ?config.max_wait,
        "Starting stdio transport..."
    );

    let server = ChatGptServer::new(config);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Serving error: {:?}", e);
    })?;

    service.waiting().await?;
    info!("ChatGPT MCP Server stopped");
    Ok(())
}
