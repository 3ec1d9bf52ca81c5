mod cli;
mod script;

use std::io::Read;
use std::process::ExitCode;

use dockframe_common::FrameId;
use dockframe_config::FrameConfig;
use dockframe_layout::{Collaborators, WorkspaceManager};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> FrameConfig {
    let loaded = match &args.config {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            dockframe_config::load_config_from(path)
        }
        None => dockframe_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        FrameConfig::default()
    })
}

fn read_script(args: &cli::Args) -> std::io::Result<String> {
    match &args.script {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn init_logging(directive: &str) {
    let fallback = "dockframe=info";
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| fallback.parse::<Directive>());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // The log level may come from the config, so read it before logging is up.
    let config = load_config(&args);
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(&directive);

    tracing::info!("Dockframe v{} starting...", env!("CARGO_PKG_VERSION"));

    let text = match read_script(&args) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to read script: {e}");
            return ExitCode::FAILURE;
        }
    };
    let commands = match script::parse_script(&text) {
        Ok(commands) => commands,
        Err(e) => {
            tracing::error!("Failed to parse script: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Replaying {} commands", commands.len());

    let frame_id = args
        .frame_id
        .as_deref()
        .map(FrameId::from)
        .unwrap_or_default();
    let mut manager = WorkspaceManager::with_frame_id(frame_id, config, Collaborators::default());

    let mut stdout = std::io::stdout().lock();
    match script::replay(&mut manager, commands, args.fail_fast, &mut stdout).await {
        Ok(summary) => {
            tracing::info!(
                executed = summary.executed,
                failed = summary.failed,
                "Replay complete"
            );
            if summary.failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            tracing::error!("Failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
