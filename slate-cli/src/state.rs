use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$SLATE_HOME`, or `~/.slate` when unset.
pub fn slate_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SLATE_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".slate"))
}

pub fn ensure_slate_home() -> Result<PathBuf> {
    let dir = slate_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
