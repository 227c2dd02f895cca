//! Configuration loaded from `~/.config/newscred/config.toml`.
//!
//! The API base URL is resolved once at startup and injected into the
//! controller as an [`Endpoint`]. Precedence: `--api-url`, then
//! `NEWSCRED_API_URL`, then the config file. With none of these set,
//! development mode falls back to the local backend and production mode fails.

use crate::endpoint::Endpoint;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding `api_base_url`.
pub const API_URL_ENV: &str = "NEWSCRED_API_URL";

/// Base URL used in development mode when nothing else is configured.
pub const DEFAULT_DEV_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no API base URL configured; set api_base_url, NEWSCRED_API_URL, or --api-url")]
    MissingApiBaseUrl,
    #[error("invalid API base URL {value:?}: {reason}")]
    InvalidApiBaseUrl { value: String, reason: String },
}

/// Deployment mode; decides the fallback when no base URL is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsCredConfig {
    /// Base URL of the analysis API, e.g. `https://api.newscredible.tech`.
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub mode: Mode,
    /// Whole-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds. Unset leaves libcurl's default.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl NewsCredConfig {
    /// Resolve the endpoint from (in order) the CLI override, the environment
    /// override, and the config file, applying the mode's fallback policy.
    pub fn resolve_endpoint(
        &self,
        env_override: Option<&str>,
        cli_override: Option<&str>,
    ) -> Result<Endpoint, ConfigError> {
        let configured = [cli_override, env_override, self.api_base_url.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty());

        match (configured, self.mode) {
            (Some(raw), _) => Endpoint::parse(raw),
            (None, Mode::Development) => {
                tracing::debug!(
                    "no API base URL configured; using development default {}",
                    DEFAULT_DEV_API_BASE_URL
                );
                Endpoint::parse(DEFAULT_DEV_API_BASE_URL)
            }
            (None, Mode::Production) => Err(ConfigError::MissingApiBaseUrl),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("newscred")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NewsCredConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<NewsCredConfig> {
    if !path.exists() {
        let default_cfg = NewsCredConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: NewsCredConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = NewsCredConfig::default();
        assert!(cfg.api_base_url.is_none());
        assert_eq!(cfg.mode, Mode::Development);
        assert!(cfg.timeout().is_none());
        assert!(cfg.connect_timeout().is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = NewsCredConfig {
            api_base_url: Some("https://api.newscredible.tech".into()),
            mode: Mode::Production,
            timeout_secs: Some(30),
            connect_timeout_secs: None,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: NewsCredConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.api_base_url, cfg.api_base_url);
        assert_eq!(parsed.mode, cfg.mode);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);

        let default_toml = toml::to_string_pretty(&NewsCredConfig::default()).unwrap();
        let parsed: NewsCredConfig = toml::from_str(&default_toml).unwrap();
        assert!(parsed.api_base_url.is_none());
        assert_eq!(parsed.mode, Mode::Development);
        assert!(parsed.timeout_secs.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            api_base_url = "https://api.newscredible.tech"
            mode = "production"
            timeout_secs = 45
            connect_timeout_secs = 5
        "#;
        let cfg: NewsCredConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.api_base_url.as_deref(),
            Some("https://api.newscredible.tech")
        );
        assert_eq!(cfg.mode, Mode::Production);
        assert_eq!(cfg.timeout(), Some(Duration::from_secs(45)));
        assert_eq!(cfg.connect_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn empty_file_is_development_default() {
        let cfg: NewsCredConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.mode, Mode::Development);
        let ep = cfg.resolve_endpoint(None, None).unwrap();
        assert_eq!(ep.base(), DEFAULT_DEV_API_BASE_URL);
    }

    #[test]
    fn production_without_base_fails_fast() {
        let cfg = NewsCredConfig {
            mode: Mode::Production,
            ..Default::default()
        };
        assert_eq!(
            cfg.resolve_endpoint(None, None),
            Err(ConfigError::MissingApiBaseUrl)
        );
        assert_eq!(
            cfg.resolve_endpoint(Some("   "), None),
            Err(ConfigError::MissingApiBaseUrl)
        );
    }

    #[test]
    fn override_precedence() {
        let cfg = NewsCredConfig {
            api_base_url: Some("http://file.example".into()),
            mode: Mode::Production,
            ..Default::default()
        };
        assert_eq!(
            cfg.resolve_endpoint(None, None).unwrap().base(),
            "http://file.example"
        );
        assert_eq!(
            cfg.resolve_endpoint(Some("http://env.example"), None)
                .unwrap()
                .base(),
            "http://env.example"
        );
        assert_eq!(
            cfg.resolve_endpoint(Some("http://env.example"), Some("http://cli.example/"))
                .unwrap()
                .base(),
            "http://cli.example"
        );
    }

    #[test]
    fn invalid_base_is_reported() {
        let cfg = NewsCredConfig {
            api_base_url: Some("not a url".into()),
            ..Default::default()
        };
        assert!(matches!(
            cfg.resolve_endpoint(None, None),
            Err(ConfigError::InvalidApiBaseUrl { .. })
        ));
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert!(created.api_base_url.is_none());

        // The generated default file must parse back as-is.
        let reread = load_or_init_at(&path).unwrap();
        assert!(reread.api_base_url.is_none());
        assert_eq!(reread.mode, Mode::Development);
        assert!(reread.timeout_secs.is_none());
        assert!(reread.connect_timeout_secs.is_none());

        fs::write(
            &path,
            "api_base_url = \"http://127.0.0.1:9000\"\nmode = \"production\"\n",
        )
        .unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.mode, Mode::Production);
        assert_eq!(
            loaded.resolve_endpoint(None, None).unwrap().analyze_url(),
            "http://127.0.0.1:9000/api/v1/analyze/url"
        );
    }
}
