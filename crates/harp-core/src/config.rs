use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How `harp dump` prints rebuilt requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Request line, headers, cookie line and body.
    #[default]
    Text,
    /// One `curl` command per request.
    Curl,
}

/// Global configuration loaded from `~/.config/harp/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarpConfig {
    /// Leave recorded cookies off rebuilt requests unless the CLI says otherwise.
    pub ignore_har_cookies: bool,
    /// Default output format for `harp dump`.
    pub format: OutputFormat,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarpConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarpConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarpConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = HarpConfig::default();
        assert!(!cfg.ignore_har_cookies);
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = HarpConfig {
            ignore_har_cookies: true,
            format: OutputFormat::Curl,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: HarpConfig = toml::from_str(&toml).unwrap();
        assert!(parsed.ignore_har_cookies);
        assert_eq!(parsed.format, OutputFormat::Curl);
    }

    #[test]
    fn config_toml_missing_keys_use_defaults() {
        let cfg: HarpConfig = toml::from_str("").unwrap();
        assert!(!cfg.ignore_har_cookies);
        assert_eq!(cfg.format, OutputFormat::Text);

        let cfg: HarpConfig = toml::from_str("format = \"curl\"").unwrap();
        assert_eq!(cfg.format, OutputFormat::Curl);
        assert!(!cfg.ignore_har_cookies);
    }

    #[test]
    fn config_toml_rejects_unknown_format() {
        assert!(toml::from_str::<HarpConfig>("format = \"yaml\"").is_err());
    }
}
