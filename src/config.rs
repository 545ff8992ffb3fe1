use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScrollConfig {
    /// Rows of lookahead before the list tail that arm the next page
    /// fetch. Zero waits for the tail itself to become visible.
    #[serde(default = "default_margin_rows")]
    pub margin_rows: u16,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_margin_rows() -> u16 {
    1
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            margin_rows: default_margin_rows(),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("squanch").join("config.toml"))
}

impl Config {
    /// Read `{config dir}/squanch/config.toml`. A missing or malformed
    /// file silently falls back to the defaults.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[catalog]
base_url = "http://localhost:8080/api"

[scroll]
margin_rows = 3
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:8080/api");
        assert_eq!(config.scroll.margin_rows, 3);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.scroll.margin_rows, 1);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let toml_str = r#"
[scroll]
margin_rows = 0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scroll.margin_rows, 0);
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
    }
}
