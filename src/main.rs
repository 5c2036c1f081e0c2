//! Tic-tac-toe CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe::{AppConfig, Cli, Command, PlayArgs, TerminalPresenter, suggest};
use tictactoe_engine::Controller;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args),
        Command::Suggest {
            board,
            strategy,
            player,
            seed,
            json,
        } => {
            let suggestion = suggest(&board, player, strategy, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                println!("{}\n\n{}", board, suggestion);
            }
            Ok(())
        }
    }
}

/// Play one game on stdin/stdout.
#[instrument(skip_all, fields(config_path = %args.config.display()))]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = AppConfig::load_or_default(&args.config)?.with_overrides(&args.overrides());
    info!(?config, "Configuration resolved");

    let stdin = std::io::stdin();
    let mut presenter = TerminalPresenter::new(stdin.lock(), std::io::stdout());
    let mut controller = Controller::start(*config.seats(), *config.seed()).with_pacing(config.pacing());

    let seats = controller.seats();
    println!("X: {}    O: {}", seats.one, seats.two);
    match controller.run(&mut presenter)? {
        Some(outcome) => info!(%outcome, "Game over"),
        None => info!("Game abandoned"),
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
