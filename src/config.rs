use crate::core::HeightUnit;
use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".bmical.toml";

/// Display options for rendered reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Default output format (terminal, json, markdown)
    #[serde(default = "default_format")]
    pub format: String,

    /// Color mode (auto, always, never)
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: default_color(),
        }
    }
}

/// Input defaults applied when the CLI flags are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Unit assumed for height readings (cm, m, ft)
    #[serde(default = "default_unit")]
    pub default_unit: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_unit: default_unit(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BmicalConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub input: InputConfig,
}

impl BmicalConfig {
    /// Load configuration with the usual precedence: an explicit `--config`
    /// path must exist and parse; otherwise `.bmical.toml` in the working
    /// directory is used when present; otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    Self::from_path(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = crate::io::read_file(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// The configured output format, unless a CLI flag overrides it.
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> Result<OutputFormat> {
        match flag {
            Some(format) => Ok(format),
            None => OutputFormat::parse(&self.display.format).with_context(|| {
                format!(
                    "invalid display.format '{}' (expected terminal, json, or markdown)",
                    self.display.format
                )
            }),
        }
    }

    /// The configured height unit, unless a CLI flag overrides it.
    pub fn resolve_unit(&self, flag: Option<HeightUnit>) -> Result<HeightUnit> {
        match flag {
            Some(unit) => Ok(unit),
            None => HeightUnit::parse(&self.input.default_unit).with_context(|| {
                format!(
                    "invalid input.default_unit '{}' (expected cm, m, or ft)",
                    self.input.default_unit
                )
            }),
        }
    }

    /// The configured color mode; `--plain` wins, then the config file, then
    /// the NO_COLOR/CLICOLOR environment.
    pub fn resolve_color(&self, plain: bool) -> Result<ColorMode> {
        if plain {
            return Ok(ColorMode::Never);
        }
        let configured = ColorMode::parse(&self.display.color).with_context(|| {
            format!(
                "invalid display.color '{}' (expected auto, always, or never)",
                self.display.color
            )
        })?;
        match configured {
            ColorMode::Auto => Ok(crate::formatting::FormattingConfig::from_env().color),
            other => Ok(other),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

fn default_color() -> String {
    "auto".to_string()
}

fn default_unit() -> String {
    "cm".to_string()
}
