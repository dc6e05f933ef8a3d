mod command;
mod config;
mod render;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::Validate;
use tictactoe_engine::{GameMode, Player, log, logger};
use tokio::sync::mpsc;

use crate::command::HELP_TEXT;
use crate::config::{MAX_AI_DELAY_MS, SavedState};
use crate::runner::{GameRunner, spawn_stdin_reader};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe in the terminal")]
struct Args {
    /// State file with scores and last-used choices
    #[arg(long)]
    config: Option<PathBuf>,

    /// pvp or ai
    #[arg(long)]
    mode: Option<GameMode>,

    /// X or O
    #[arg(long)]
    first: Option<Player>,

    /// Pause before the computer moves
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_AI_DELAY_MS))]
    ai_delay_ms: Option<u64>,

    /// Write diagnostics to stderr
    #[arg(long)]
    log: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.log {
        let prefix = if args.use_log_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager = config::get_config_manager(args.config.clone());
    let saved = config_manager.get_config().unwrap_or_else(|e| {
        log!("Ignoring saved state: {}", e);
        SavedState::default()
    });
    let saved = apply_overrides(saved, &args)?;

    println!("{}", HELP_TEXT);

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(command_tx);

    let runner = GameRunner::new(saved, config_manager, std::io::stdout());
    runner.run(command_rx).await?;

    log!("Client shut down");
    Ok(())
}

/// Layers command-line choices over the saved record. The result must still be storable.
fn apply_overrides(mut saved: SavedState, args: &Args) -> Result<SavedState, String> {
    if let Some(mode) = args.mode {
        saved.mode = mode;
    }
    if let Some(first) = args.first {
        saved.first = first;
    }
    if let Some(delay) = args.ai_delay_ms {
        saved.ai_delay_ms = delay;
    }
    saved.validate()?;
    Ok(saved)
}
