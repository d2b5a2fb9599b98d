/// Rendering of alignment results for the terminal
use nwalign_bio::alignment::{AlignmentResult, AlignmentStats};
use nwalign_bio::{ScoringScheme, Sequence};
use nwalign_core::NwError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = NwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(NwError::Configuration(format!(
                "Unknown output format '{}'. Use: text, json",
                s
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlignmentReport {
    pub seq1: String,
    pub seq2: String,
    pub aligned_seq1: String,
    pub aligned_seq2: String,
    pub score: i64,
    pub identity: f64,
    pub stats: AlignmentStats,
    pub scoring: ScoringScheme,
}

impl AlignmentReport {
    pub fn new(
        seq1: &Sequence,
        seq2: &Sequence,
        result: &AlignmentResult,
        scoring: ScoringScheme,
    ) -> Self {
        Self {
            seq1: seq1.id.clone(),
            seq2: seq2.id.clone(),
            aligned_seq1: result.aligned_seq1_str(),
            aligned_seq2: result.aligned_seq2_str(),
            score: result.score,
            identity: result.identity(),
            stats: result.stats(),
            scoring,
        }
    }
}

pub fn render_text(result: &AlignmentResult, line_width: usize, show_identity: bool) -> String {
    let mut out = result.render(line_width);
    out.push_str(&format!("Score: {}\n", result.score));
    if show_identity {
        out.push_str(&format!("Identity: {:.2}%\n", result.identity() * 100.0));
    }
    out
}

pub fn render_json(report: &AlignmentReport) -> Result<String, NwError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nwalign_bio::align;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "html".parse::<OutputFormat>(),
            Err(NwError::Configuration(_))
        ));
    }

    #[test]
    fn test_render_text() {
        let result = align(b"ATG", b"GAT", 2, -1, -2).unwrap();
        assert_eq!(render_text(&result, 0, false), "-ATG\n || \nGAT-\nScore: 0\n");
        assert!(render_text(&result, 0, true).ends_with("Identity: 50.00%\n"));
    }

    #[test]
    fn test_render_json() {
        let seq1 = Sequence::new("seq1", b"A".to_vec()).unwrap();
        let seq2 = Sequence::new("seq2", b"AG".to_vec()).unwrap();
        let scoring = ScoringScheme::default();
        let result = align(seq1.as_bytes(), seq2.as_bytes(), 2, -1, -2).unwrap();

        let json = render_json(&AlignmentReport::new(&seq1, &seq2, &result, scoring)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["aligned_seq1"], "A-");
        assert_eq!(value["aligned_seq2"], "AG");
        assert_eq!(value["score"], 0);
        assert_eq!(value["stats"]["gaps"], 1);
        assert_eq!(value["scoring"]["gap"], -2);
    }
}
