use serde::{Deserialize, Serialize};

use crate::types::{PlayerId, DEFAULT_NAMESPACE};

/// Glyphs the text adapter draws for each cell content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGlyphs {
    pub empty: String,
    pub player: String,
    pub treasure: String,
    pub both: String,
}

impl Default for GridGlyphs {
    fn default() -> Self {
        Self {
            empty: ".".into(),
            player: "P".into(),
            treasure: "T".into(),
            both: "X".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub glyphs: GridGlyphs,
    /// Only track this player's models. None tracks whoever updates last.
    #[serde(default)]
    pub player_filter: Option<PlayerId>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            glyphs: GridGlyphs::default(),
            player_filter: None,
        }
    }
}

impl ClientConfig {
    /// Load from the data/ directory.
    /// Without a data directory, use ClientConfig::default().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/client.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ClientConfig = serde_json::from_str(&content)?;
        if config.namespace.is_empty() {
            anyhow::bail!("{path}: namespace must not be empty");
        }
        log::debug!("Loaded client config from {path}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.namespace, "dojo_starter");
        assert_eq!(config.glyphs, GridGlyphs::default());
        assert!(config.player_filter.is_none());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ClientConfig::load("/nonexistent-data-dir").unwrap_err();
        assert!(err.to_string().contains("client.json"), "Got: {err}");
    }
}
