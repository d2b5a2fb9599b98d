use crate::cli::commands::parse_sequence;
use crate::cli::ScoringArgs;
use anyhow::Result;
use clap::Args;
use nwalign_bio::alignment::score_only;

#[derive(Args)]
pub struct ScoreArgs {
    #[arg(value_name = "SEQ1")]
    pub seq1: String,

    #[arg(value_name = "SEQ2")]
    pub seq2: String,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

pub fn run(args: ScoreArgs) -> Result<()> {
    let config = args.scoring.load_config()?;
    let scoring = args.scoring.resolve(&config);

    let seq1 = parse_sequence("seq1", &args.seq1)?;
    let seq2 = parse_sequence("seq2", &args.seq2)?;

    let score = score_only(seq1.as_bytes(), seq2.as_bytes(), &scoring)?;
    println!("{}", score);

    Ok(())
}
