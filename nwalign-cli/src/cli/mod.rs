pub mod commands;
pub mod output;

use clap::{Args, Parser, Subcommand};
use nwalign_bio::ScoringScheme;
use nwalign_core::{load_config, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nwalign",
    version = nwalign_core::VERSION,
    about = "Optimal global alignment of two sequences",
    long_about = "nwalign computes a Needleman-Wunsch global alignment between two sequences \
                  under linear match/mismatch/gap scoring and prints one optimal alignment."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two sequences and print the alignment with its score
    Align(commands::align::AlignArgs),

    /// Print only the optimal score (linear memory)
    Score(commands::score::ScoreArgs),
}

/// Scoring flags shared by every command. Unset flags fall back to the
/// config file, then to the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// Score for two identical aligned symbols
    #[arg(long = "match", value_name = "N", allow_negative_numbers = true)]
    pub match_score: Option<i32>,

    /// Score for two different aligned symbols
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub mismatch: Option<i32>,

    /// Score for a symbol aligned against a gap
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub gap: Option<i32>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ScoringArgs {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Ok(load_config(path)?)
            }
            None => Ok(Config::default()),
        }
    }

    pub fn resolve(&self, config: &Config) -> ScoringScheme {
        let base = ScoringScheme::from(config.scoring);
        ScoringScheme::new(
            self.match_score.unwrap_or(base.match_score),
            self.mismatch.unwrap_or(base.mismatch),
            self.gap.unwrap_or(base.gap),
        )
    }
}
