//! Configuration file (jsxmith.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use jsxmith_core::ConvertOptions;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub convert: ConvertOptions,
    #[serde(default)]
    pub component: ComponentConfig,
}

/// How converted markup is wrapped into a component.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentConfig {
    /// Lines emitted above the component function
    #[serde(default)]
    pub imports: Vec<String>,

    /// Wrap JSX in a function component; `false` emits bare JSX
    #[serde(default = "default_wrap")]
    pub wrap: bool,
}

fn default_wrap() -> bool {
    true
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            imports: Vec::new(),
            wrap: true,
        }
    }
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn parse_config(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}
