//! Terminal frontend for Proving Grounds.

mod play;

use std::process;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use pg_core::GameConfig;

#[derive(Parser)]
#[command(
    name = "proving-grounds",
    about = "Proving Grounds: pick a class and train your hero",
    version
)]
struct Cli {
    /// RNG seed for reproducible rolls (default: random)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GameConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    if let Err(e) = play::run(&config) {
        println!("{} {e}", "Game error:".red().bold());
        process::exit(1);
    }
}
