use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use moltool_core::format::DEFAULT_NIL_STRING;
use moltool_core::time::DEFAULT_TIMESTAMP_SEPARATOR;
use moltool_core::ProgramMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MolToolConfig {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub program: ProgramSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub nil_string: String,
    pub timestamp_separator: String,
    pub digits: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            nil_string: DEFAULT_NIL_STRING.to_string(),
            timestamp_separator: DEFAULT_TIMESTAMP_SEPARATOR.to_string(),
            digits: 2,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiSection {
    pub timezone: Option<String>,
    pub echo: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProgramSection {
    pub mode: ProgramMode,
}

impl MolToolConfig {
    /// Configured timezone, UTC when unset.
    pub fn timezone(&self) -> anyhow::Result<Tz> {
        match self.ui.timezone.as_deref() {
            None => Ok(Tz::UTC),
            Some(name) => parse_timezone(name),
        }
    }
}

pub fn parse_timezone(name: &str) -> anyhow::Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("Invalid timezone {}: {}", name, e))
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config at `path`, or defaults when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<MolToolConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MolToolConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<MolToolConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("moltool"));
        }
    }
    Ok(home_dir()?.join(".config").join("moltool"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
