#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Command for the nwalign binary with logging silenced
pub fn nwalign_cmd() -> Command {
    let mut cmd = Command::cargo_bin("nwalign").expect("nwalign binary should be built");
    cmd.env_remove("RUST_LOG").env("NWALIGN_LOG", "off");
    cmd
}

/// Write a TOML config file into `dir`
pub fn write_config(dir: &Path, content: &str) -> Result<PathBuf> {
    let path = dir.join("nwalign.toml");
    fs::write(&path, content)?;
    Ok(path)
}
