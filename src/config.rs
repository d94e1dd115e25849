use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.catalog-mergr/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Output file locations, relative to the data root unless absolute.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Post-merge, pre-clean snapshot.
    #[serde(default = "default_untidy")]
    pub untidy: String,
    /// Final cleaned and categorised output.
    #[serde(default = "default_cleaned")]
    pub cleaned: String,
}

fn default_untidy() -> String {
    "merged_output_untidy.csv".to_string()
}

fn default_cleaned() -> String {
    "merged_output.csv".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            untidy: default_untidy(),
            cleaned: default_cleaned(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<data root>/.catalog-mergr/config.toml`
/// 3. `~/.config/catalog-mergr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = root.join(".catalog-mergr").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("catalog-mergr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
