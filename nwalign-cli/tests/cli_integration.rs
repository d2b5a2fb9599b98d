mod common;

use anyhow::Result;
use predicates::prelude::*;
use tempfile::TempDir;

use common::*;

#[test]
fn test_cli_help_command() {
    nwalign_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Needleman-Wunsch"))
        .stdout(predicate::str::contains("align"))
        .stdout(predicate::str::contains("score"));
}

#[test]
fn test_cli_version_command() {
    nwalign_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nwalign"))
        .stdout(predicate::str::contains(nwalign_core::VERSION));
}

#[test]
fn test_align_default_scoring() {
    nwalign_cmd()
        .args(["align", "ATG", "GAT"])
        .assert()
        .success()
        .stdout("-ATG\n || \nGAT-\nScore: 0\n");
}

#[test]
fn test_align_border_case() {
    nwalign_cmd()
        .args(["align", "A", "TGGGTA"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-----A\n"))
        .stdout(predicate::str::contains("TGGGTA\nScore: -8\n"));
}

#[test]
fn test_align_empty_sequences() {
    nwalign_cmd()
        .args(["align", "", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0"));
}

#[test]
fn test_align_custom_scoring_flags() {
    nwalign_cmd()
        .args(["align", "GATTACA", "GCATGCU", "--match", "1", "--mismatch", "-1", "--gap", "-1"])
        .assert()
        .success()
        .stdout("G-ATTACA\n| | |X|X\nGCA-TGCU\nScore: 0\n");
}

#[test]
fn test_align_json_output() -> Result<()> {
    let output = nwalign_cmd()
        .args(["align", "A", "AG", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["aligned_seq1"], "A-");
    assert_eq!(value["aligned_seq2"], "AG");
    assert_eq!(value["score"], 0);
    assert_eq!(value["seq1"], "seq1");
    Ok(())
}

#[test]
fn test_align_wrapped_output_with_identity() {
    nwalign_cmd()
        .args(["align", "ATG", "GAT", "--line-width", "2", "--identity"])
        .assert()
        .success()
        .stdout("-A\n |\nGA\n\nTG\n| \nT-\nScore: 0\nIdentity: 50.00%\n");
}

#[test]
fn test_align_uses_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_config(
        dir.path(),
        r#"
[scoring]
match = 1
mismatch = -1
gap = -1

[output]
show_identity = true
"#,
    )?;

    nwalign_cmd()
        .args(["align", "GATTACA", "GCATGCU", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0"))
        .stdout(predicate::str::contains("Identity:"));
    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_config(dir.path(), "[scoring]\ngap = -10\n")?;

    nwalign_cmd()
        .args(["score", "A", "AG", "--gap", "-2", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout("0\n");
    Ok(())
}

#[test]
fn test_score_command() {
    nwalign_cmd()
        .args(["score", "T", "AG"])
        .assert()
        .success()
        .stdout("-3\n");

    nwalign_cmd()
        .args(["score", "TGGGTA", "A"])
        .assert()
        .success()
        .stdout("-8\n");
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let mut cmd = nwalign_cmd();
    cmd.env_remove("NWALIGN_LOG")
        .args(["-vv", "align", "ACGT", "ACGT"])
        .assert()
        .success()
        .stdout("ACGT\n||||\nACGT\nScore: 8\n")
        .stderr(predicate::str::contains("filled score matrix"));
}

#[test]
fn test_extreme_scores_are_reported_exactly() {
    nwalign_cmd()
        .args(["align", "AA", "AA", "--match", "2147483647"])
        .assert()
        .success()
        .stdout("AA\n||\nAA\nScore: 4294967294\n");

    nwalign_cmd()
        .args(["score", "AA", "AA", "--match", "2147483647"])
        .assert()
        .success()
        .stdout("4294967294\n");

    nwalign_cmd()
        .args([
            "score",
            "AC",
            "GT",
            "--match",
            "0",
            "--mismatch",
            "-2147483648",
            "--gap",
            "-2147483648",
        ])
        .assert()
        .success()
        .stdout("-4294967296\n");
}
