use crate::cli::commands::parse_sequence;
use crate::cli::output::{render_json, render_text, AlignmentReport, OutputFormat};
use crate::cli::ScoringArgs;
use anyhow::Result;
use clap::Args;
use nwalign_bio::NeedlemanWunsch;
use tracing::info;

#[derive(Args)]
pub struct AlignArgs {
    /// First sequence (rows of the score matrix)
    #[arg(value_name = "SEQ1")]
    pub seq1: String,

    /// Second sequence (columns of the score matrix)
    #[arg(value_name = "SEQ2")]
    pub seq2: String,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Columns per output block, 0 for a single block (overrides the config file)
    #[arg(short = 'w', long, value_name = "N")]
    pub line_width: Option<usize>,

    /// Also print percent identity in text output
    #[arg(long)]
    pub identity: bool,
}

pub fn run(args: AlignArgs) -> Result<()> {
    let config = args.scoring.load_config()?;
    let scoring = args.scoring.resolve(&config);

    let seq1 = parse_sequence("seq1", &args.seq1)?;
    let seq2 = parse_sequence("seq2", &args.seq2)?;

    let format = match args.format {
        Some(format) => format,
        None => config.output.format.parse()?,
    };
    let line_width = args.line_width.unwrap_or(config.output.line_width);
    let show_identity = args.identity || config.output.show_identity;

    info!(
        seq1_len = seq1.len(),
        seq2_len = seq2.len(),
        match_score = scoring.match_score,
        mismatch = scoring.mismatch,
        gap = scoring.gap,
        "aligning"
    );

    let aligner = NeedlemanWunsch::new(scoring);
    let result = aligner.align_sequences(&seq1, &seq2)?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&result, line_width, show_identity)),
        OutputFormat::Json => {
            let report = AlignmentReport::new(&seq1, &seq2, &result, scoring);
            println!("{}", render_json(&report)?);
        }
    }

    Ok(())
}
