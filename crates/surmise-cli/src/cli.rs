use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use surmise_guess::{Confidence, Guessed};

#[derive(Debug, Parser)]
#[command(name = "surmise", version, about = "Arbitrate between confidence-rated guesses")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the most confident of the given guesses.
    Best {
        /// A guess as LEVEL=VALUE, e.g. `high=integer` or `2=integer`.
        #[arg(long = "guess", value_name = "LEVEL=VALUE", value_parser = parse_guess)]
        guesses: Vec<Guessed<String>>,
    },
    /// List the confidence levels, highest first.
    Levels,
}

pub fn parse_guess(raw: &str) -> Result<Guessed<String>> {
    let Some((level, value)) = raw.split_once('=') else {
        bail!("expected LEVEL=VALUE, got '{raw}'");
    };
    let value = value.trim();
    if value.is_empty() {
        bail!("guess '{raw}' has an empty value");
    }

    let confidence: Confidence = level.parse()?;
    Ok(Guessed::new(value.to_string(), confidence))
}
