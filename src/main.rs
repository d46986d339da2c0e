//! Bulls and Cows - CLI
//!
//! Guess the secret four-digit number; every guess is answered with bulls and cows.

use anyhow::{Context, Result};
use bulls_and_cows::{
    commands::{PlayConfig, generate_secret, run_play, score_pair},
    game::GameError,
    logging::init_cli_logger,
    output::formatters::format_score,
};
use clap::{Parser, Subcommand};
use std::io;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Bulls and Cows: guess the secret 4-digit number with unique digits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for a reproducible secret
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play,

    /// Score a guess against a given secret
    Score {
        /// The secret number
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Print a freshly generated secret
    Secret,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_cli_logger(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = PlayConfig::new(cli.seed);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(config),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Secret => {
            println!("{}", generate_secret(config));
            Ok(())
        }
    }
}

fn run_play_command(config: PlayConfig) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    match run_play(config, &mut input, &mut out) {
        Ok(_) => Ok(()),
        Err(err @ GameError::InputClosed { .. }) => {
            println!();
            Err(anyhow::Error::new(err).context("game ended before the number was found"))
        }
        Err(err) => Err(err).context("game aborted"),
    }
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_pair(secret, guess)?;
    debug!(secret = %result.secret, guess = %result.guess, "scored pair");
    println!("{}", format_score(result.score));
    Ok(())
}
