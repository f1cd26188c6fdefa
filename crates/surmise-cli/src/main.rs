use anyhow::Result;
use clap::Parser;
use surmise_guess::{best_guess, Confidence, Guess, Guessed};

mod cli;
use cli::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("SURMISE_LOG").unwrap_or_else(|_| "surmise=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!(target: "surmise", version = env!("CARGO_PKG_VERSION"), "surmise starting");

    match args.command {
        cli::Command::Best { guesses } => print_best(&guesses),
        cli::Command::Levels => print_levels(),
    }
}

fn print_best(guesses: &[Guessed<String>]) -> Result<()> {
    tracing::info!(target: "surmise", candidates = guesses.len(), "arbitrating guesses");

    match best_guess(guesses) {
        Some(best) => {
            tracing::info!(
                target: "surmise",
                confidence = %best.confidence(),
                value = %best.value(),
                "best guess"
            );
            println!("{best}");
        }
        None => {
            tracing::warn!(target: "surmise", "no guesses supplied");
            println!("no guess");
        }
    }

    Ok(())
}

fn print_levels() -> Result<()> {
    for level in Confidence::ALL {
        println!("{level}\t{}", level.weight());
    }
    Ok(())
}
