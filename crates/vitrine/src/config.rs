//! TOML configuration.
//!
//! Every key is optional; an empty file yields [`VitrineConfig::default`].
//!
//! ```toml
//! [autoplay]
//! enabled = true
//! interval_ms = 5000
//!
//! [repositories]
//! endpoint = "https://api.github.com/users/octocat/repos"
//! limit = 6
//!
//! [resume]
//! location = "data/linkedin-data.json"
//!
//! [http]
//! timeout_secs = 30
//! user_agent = "portfolio/1.0"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_core::logging::targets;
use vitrine_net::{
    FetchError, HttpClient, RepositorySource, ResumeLocation, ResumeSource,
    DEFAULT_REPOSITORY_LIMIT,
};

use crate::carousel::{CarouselController, DEFAULT_AUTOPLAY_INTERVAL};

/// Configuration could not be loaded or used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range.
    #[error("invalid value for `{key}`: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// The HTTP client could not be built from the `[http]` section.
    #[error("invalid HTTP settings: {0}")]
    Http(#[from] FetchError),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// `[autoplay]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplaySettings {
    /// Start carousels playing.
    pub enabled: bool,
    /// Milliseconds between automatic advances.
    pub interval_ms: u64,
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64,
        }
    }
}

/// `[repositories]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySettings {
    /// Listing endpoint.
    pub endpoint: String,
    /// Maximum repositories shown.
    pub limit: usize,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.github.com/users/octocat/repos".to_string(),
            limit: DEFAULT_REPOSITORY_LIMIT,
        }
    }
}

/// `[resume]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSettings {
    /// Path or HTTP(S) URL of the resume document.
    pub location: String,
}

impl Default for ResumeSettings {
    fn default() -> Self {
        Self {
            location: "linkedin-data.json".to_string(),
        }
    }
}

/// `[http]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Whole-request timeout; `0` disables it.
    pub timeout_secs: u64,
    /// User-Agent header; the client default when unset.
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitrineConfig {
    /// Carousel autoplay.
    pub autoplay: AutoplaySettings,
    /// Repository listing source.
    pub repositories: RepositorySettings,
    /// Resume document source.
    pub resume: ResumeSettings,
    /// HTTP client.
    pub http: HttpSettings,
}

impl VitrineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject values no source or controller can work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.repositories.limit == 0 {
            return Err(ConfigError::Invalid {
                key: "repositories.limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.repositories.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "repositories.endpoint",
                reason: "must not be empty".to_string(),
            });
        }
        if self.resume.location.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "resume.location",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The configured autoplay interval.
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay.interval_ms)
    }

    /// Build an HTTP client from `[http]`.
    pub fn http_client(&self) -> ConfigResult<HttpClient> {
        let mut builder = HttpClient::builder();
        builder = match self.http.timeout_secs {
            0 => builder.no_timeout(),
            secs => builder.timeout(Duration::from_secs(secs)),
        };
        if let Some(agent) = &self.http.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Ok(builder.build()?)
    }

    /// The repository source described by `[repositories]`.
    pub fn repository_source(&self, client: HttpClient) -> RepositorySource {
        RepositorySource::new(client, self.repositories.endpoint.clone())
            .with_limit(self.repositories.limit)
    }

    /// The resume source described by `[resume]`.
    pub fn resume_source(&self, client: HttpClient) -> ResumeSource {
        ResumeSource::new(ResumeLocation::parse(&self.resume.location), client)
    }

    /// Start or stop autoplay on `controller` per `[autoplay]`.
    pub fn apply_autoplay<T>(&self, controller: &mut CarouselController<T>) {
        controller.set_autoplay(self.autoplay.enabled, self.autoplay_interval());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = VitrineConfig::from_toml_str("").unwrap();
        assert_eq!(config, VitrineConfig::default());
        assert_eq!(config.autoplay_interval(), Duration::from_millis(5000));
        assert_eq!(config.repositories.limit, 6);
    }

    #[test]
    fn test_partial_sections() {
        let config = VitrineConfig::from_toml_str(
            r#"
            [autoplay]
            interval_ms = 3000

            [resume]
            location = "https://example.com/linkedin-data.json"
            "#,
        )
        .unwrap();

        assert!(config.autoplay.enabled);
        assert_eq!(config.autoplay_interval(), Duration::from_millis(3000));
        let source = config.resume_source(HttpClient::new());
        assert!(matches!(source.location(), ResumeLocation::Url(_)));
    }

    #[test]
    fn test_validation() {
        let err = VitrineConfig::from_toml_str("[repositories]\nlimit = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "repositories.limit", .. }));

        let err = VitrineConfig::from_toml_str("[repositories]\nendpoint = \" \"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "repositories.endpoint", .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = VitrineConfig::from_toml_str("[autoplay]\ninterval_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[repositories]\nlimit = 3\n\n[http]\ntimeout_secs = 0").unwrap();

        let config = VitrineConfig::load(file.path()).unwrap();
        assert_eq!(config.repositories.limit, 3);
        assert!(config.http_client().unwrap().config().timeout.is_none());
        assert_eq!(config.repository_source(HttpClient::new()).limit(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = VitrineConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = VitrineConfig::default();
        config.http.user_agent = Some("portfolio/1.0".into());
        let parsed = VitrineConfig::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_apply_autoplay() {
        let config = VitrineConfig::from_toml_str("[autoplay]\nenabled = false").unwrap();
        let mut controller = CarouselController::<u8>::new();
        controller.set_autoplay(true, Duration::from_secs(1));
        config.apply_autoplay(&mut controller);
        assert!(!controller.is_playing());
    }
}
