use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Optional user configuration from `~/.config/dashprof/config.toml`.
///
/// A missing file means built-in defaults; the tool never writes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashprofConfig {
    /// Extra or overriding raw-key → display-label entries, merged over the
    /// built-in label table. Overrides win.
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// Path where the config file would live, whether or not it exists.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dashprof")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from disk if a config file exists, defaults otherwise.
pub fn load() -> Result<DashprofConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dashprof")?;
    let Some(path) = xdg_dirs.find_config_file("config.toml") else {
        return Ok(DashprofConfig::default());
    };

    let data = fs::read_to_string(&path)?;
    let cfg: DashprofConfig = toml::from_str(&data)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_overrides() {
        let cfg = DashprofConfig::default();
        assert!(cfg.labels.is_empty());
    }

    #[test]
    fn config_toml_labels_section() {
        let toml = r#"
            [labels]
            bot-score = "Bot Score"
            host = "Site"
        "#;
        let cfg: DashprofConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.labels.get("bot-score").map(String::as_str), Some("Bot Score"));
        assert_eq!(cfg.labels.get("host").map(String::as_str), Some("Site"));
    }

    #[test]
    fn config_toml_empty_file() {
        let cfg: DashprofConfig = toml::from_str("").unwrap();
        assert!(cfg.labels.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = DashprofConfig::default();
        cfg.labels
            .insert("bot-score".to_string(), "Bot Score".to_string());

        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DashprofConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.labels, cfg.labels);
    }
}
