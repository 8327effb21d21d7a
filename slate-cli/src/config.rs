use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::MAX_CHART_WIDTH;
use crate::state::{ensure_slate_home, slate_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub input: InputSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// chrono format for every timestamp the user types.
    pub datetime_format: String,
    /// Accepted category tags. Empty accepts any tag.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Bar area width of the timeline chart, in columns.
    pub chart_width: usize,
    pub show_deadline: bool,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            datetime_format: slate_core::DEFAULT_FORMAT.to_string(),
            categories: vec!["personal".to_string(), "academic".to_string()],
        }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            chart_width: 60,
            show_deadline: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(slate_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

/// Parse config text, clamping `chart_width` into `1..=MAX_CHART_WIDTH`.
pub fn parse_config(s: &str) -> Result<Config> {
    let mut cfg: Config = toml::from_str(s)?;
    cfg.display.chart_width = cfg.display.chart_width.clamp(1, MAX_CHART_WIDTH);
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_slate_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
