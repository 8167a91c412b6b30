//! Math Mystery configuration.
//!
//! Practice defaults and output preferences.
//! Config file: ~/.config/mathmystery/config.toml or /etc/mathmystery/config.toml

use crate::error::MysteryResult;
use crate::factors::FactorSet;
use crate::problem::Mode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    /// Force basic ANSI colors
    Basic,
    /// Plain text
    None,
}

/// Practice round settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeConfig {
    /// Raw factor list, parsed with [`FactorSet::parse`]
    #[serde(default = "default_factors")]
    pub factors: String,

    #[serde(default)]
    pub mode: Mode,

    /// Problems per quiz
    #[serde(default = "default_rounds")]
    pub rounds: u32,

    /// Fixed seed for reproducible sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_factors() -> String {
    FactorSet::default().to_string()
}

fn default_rounds() -> u32 {
    5
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            factors: default_factors(),
            mode: Mode::Mixed,
            rounds: default_rounds(),
            seed: None,
        }
    }
}

impl PracticeConfig {
    pub fn factor_set(&self) -> FactorSet {
        FactorSet::parse(&self.factors)
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// Print number line, groups and fact family after each answer
    #[serde(default = "default_true")]
    pub show_visuals: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            show_visuals: true,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MysteryConfig {
    #[serde(default)]
    pub practice: PracticeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl MysteryConfig {
    /// User config path: $XDG_CONFIG_HOME/mathmystery/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Cannot determine config directory")?;
        Ok(config_dir.join("mathmystery").join("config.toml"))
    }

    /// System config path: /etc/mathmystery/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/mathmystery/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. User config (~/.config/mathmystery/config.toml)
    /// 2. System config (/etc/mathmystery/config.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> MysteryResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::user_config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }

    pub fn set_mode(&mut self, mode: &str) -> Result<()> {
        self.practice.mode = mode.parse::<Mode>()?;
        Ok(())
    }

    pub fn set_color_mode(&mut self, mode: &str) -> Result<()> {
        self.output.color = match mode.to_lowercase().as_str() {
            "auto" => ColorMode::Auto,
            "basic" | "on" => ColorMode::Basic,
            "none" | "off" | "disabled" => ColorMode::None,
            _ => anyhow::bail!("Invalid color mode: '{}'. Valid values: auto, basic, none", mode),
        };
        Ok(())
    }

    /// Apply a `key=value` assignment
    pub fn set(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .with_context(|| format!("Expected key=value, got '{}'", assignment))?;
        let value = value.trim();

        match key.trim() {
            "factors" => self.practice.factors = value.to_string(),
            "mode" => self.set_mode(value)?,
            "rounds" => {
                self.practice.rounds = value
                    .parse()
                    .with_context(|| format!("Invalid round count: '{}'", value))?;
            }
            "seed" => {
                self.practice.seed = match value {
                    "" | "none" => None,
                    v => Some(v.parse().with_context(|| format!("Invalid seed: '{}'", v))?),
                };
            }
            "color" => self.set_color_mode(value)?,
            "show_visuals" => {
                self.output.show_visuals = value
                    .parse()
                    .with_context(|| format!("Expected true or false, got '{}'", value))?;
            }
            other => anyhow::bail!(
                "Unknown config key: '{}'. Valid keys: factors, mode, rounds, seed, color, show_visuals",
                other
            ),
        }
        Ok(())
    }
}
