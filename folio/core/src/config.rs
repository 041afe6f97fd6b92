//! Configuration
//!
//! Loads settings from `$XDG_CONFIG_HOME/folio/config.toml` and the
//! environment.
//!
//! # Priority (highest first)
//!
//! 1. Environment variables
//! 2. TOML configuration file
//! 3. Default values
//!
//! # Example
//!
//! ```toml
//! [email]
//! service_id = "service_abc"
//! template_id = "template_xyz"
//! public_key = "pk_123"
//!
//! [ui]
//! frame_ms = 33
//! typing_speed_ms = 80
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::content::HERO_TYPING_SPEED_MS;

/// Default EmailJS send endpoint
pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default frame interval
pub const DEFAULT_FRAME_MS: u64 = 33;

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_ENDPOINT: &str = "EMAILJS_ENDPOINT";
pub const ENV_FRAME_MS: &str = "FOLIO_FRAME_MS";
pub const ENV_TYPING_SPEED_MS: &str = "FOLIO_TYPING_SPEED_MS";

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where the configuration came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Env,
    File,
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Structures
// =============================================================================

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct EmailToml {
    service_id: Option<String>,
    template_id: Option<String>,
    public_key: Option<String>,
    endpoint: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct UiToml {
    frame_ms: Option<u64>,
    typing_speed_ms: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct FolioToml {
    email: EmailToml,
    ui: UiToml,
}

// =============================================================================
// Configuration
// =============================================================================

/// Email-delivery settings. Credentials are optional here; a missing one
/// only fails the dispatch that needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub endpoint: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            endpoint: DEFAULT_EMAIL_ENDPOINT.to_string(),
        }
    }
}

impl EmailConfig {
    /// Whether every credential is present
    pub fn is_complete(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Delay between rendered frames
    pub frame_interval: Duration,
    /// Per-character delay of the hero typewriters
    pub typing_speed: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
            typing_speed: Duration::from_millis(HERO_TYPING_SPEED_MS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FolioConfig {
    pub email: EmailConfig,
    pub ui: UiConfig,
    /// Path of the file that was loaded, if any
    pub config_file_path: Option<PathBuf>,
    source: ConfigSource,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            email: EmailConfig::default(),
            ui: UiConfig::default(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl FolioConfig {
    /// Highest-priority source that contributed a value
    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

// =============================================================================
// Loading
// =============================================================================

/// `$XDG_CONFIG_HOME/folio/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
}

/// Load from the default path and the process environment.
///
/// A missing file is not an error; a malformed one is.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

pub fn load_config_from_path(path: Option<PathBuf>) -> Result<FolioConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load with an explicit environment lookup
pub fn load_config_with_env(
    path: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<FolioConfig, ConfigError> {
    let mut config = FolioConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;
            let toml_config: FolioToml = toml::from_str(&content)?;
            apply_toml_config(&mut config, toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(path = %config_path.display(), "Loaded configuration from file");
        } else {
            tracing::debug!(path = %config_path.display(), "Config file not found, using defaults");
        }
    }

    apply_env_config(&mut config, env);

    if !config.email.is_complete() {
        tracing::warn!("EmailJS credentials incomplete, contact form dispatch will fail");
    }

    Ok(config)
}

fn apply_toml_config(config: &mut FolioConfig, toml: FolioToml) {
    if toml.email.service_id.is_some() {
        config.email.service_id = toml.email.service_id;
    }
    if toml.email.template_id.is_some() {
        config.email.template_id = toml.email.template_id;
    }
    if toml.email.public_key.is_some() {
        config.email.public_key = toml.email.public_key;
    }
    if let Some(endpoint) = toml.email.endpoint {
        config.email.endpoint = endpoint;
    }
    if let Some(ms) = toml.ui.frame_ms {
        config.ui.frame_interval = Duration::from_millis(ms.max(1));
    }
    if let Some(ms) = toml.ui.typing_speed_ms {
        config.ui.typing_speed = Duration::from_millis(ms.max(1));
    }
}

fn apply_env_config(config: &mut FolioConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env(ENV_SERVICE_ID) {
        config.email.service_id = Some(v);
        config.source = ConfigSource::Env;
    }
    if let Some(v) = env(ENV_TEMPLATE_ID) {
        config.email.template_id = Some(v);
        config.source = ConfigSource::Env;
    }
    if let Some(v) = env(ENV_PUBLIC_KEY) {
        config.email.public_key = Some(v);
        config.source = ConfigSource::Env;
    }
    if let Some(v) = env(ENV_ENDPOINT) {
        config.email.endpoint = v;
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = env_millis(&env, ENV_FRAME_MS) {
        config.ui.frame_interval = Duration::from_millis(ms.max(1));
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = env_millis(&env, ENV_TYPING_SPEED_MS) {
        config.ui.typing_speed = Duration::from_millis(ms.max(1));
        config.source = ConfigSource::Env;
    }
}

/// Millisecond setting from the environment; unparseable values are skipped
fn env_millis(env: &impl Fn(&str) -> Option<String>, key: &'static str) -> Option<u64> {
    let value = env(key)?;
    match value.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            tracing::warn!(key, value = %value, error = %e, "ignoring unparseable duration, keeping previous value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn toml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.email.endpoint, DEFAULT_EMAIL_ENDPOINT);
        assert!(!config.email.is_complete());
        assert_eq!(config.ui.frame_interval, Duration::from_millis(33));
        assert_eq!(config.ui.typing_speed, Duration::from_millis(80));
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.ends_with("folio/config.toml"));
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config =
            load_config_with_env(Some(PathBuf::from("/nonexistent/folio.toml")), no_env).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
        assert_eq!(config.config_file_path, None);
    }

    #[test]
    fn test_parse_valid_toml() {
        let file = toml_file(
            r#"
[email]
service_id = "service_abc"
template_id = "template_xyz"
public_key = "pk_123"
endpoint = "http://localhost:9999/send"

[ui]
frame_ms = 50
typing_speed_ms = 40
"#,
        );

        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();

        assert_eq!(config.email.service_id.as_deref(), Some("service_abc"));
        assert_eq!(config.email.template_id.as_deref(), Some("template_xyz"));
        assert_eq!(config.email.public_key.as_deref(), Some("pk_123"));
        assert_eq!(config.email.endpoint, "http://localhost:9999/send");
        assert!(config.email.is_complete());
        assert_eq!(config.ui.frame_interval, Duration::from_millis(50));
        assert_eq!(config.ui.typing_speed, Duration::from_millis(40));
        assert_eq!(config.source(), ConfigSource::File);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let file = toml_file("[email]\nservice_id = \"only\"\n");
        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();
        assert_eq!(config.email.service_id.as_deref(), Some("only"));
        assert_eq!(config.email.endpoint, DEFAULT_EMAIL_ENDPOINT);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let file = toml_file("[email\nservice_id = ");
        let err = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = toml_file("[email]\nservice_id = \"from_file\"\ntemplate_id = \"tpl\"\n");
        let env = env_from(&[
            (ENV_SERVICE_ID, "from_env"),
            (ENV_PUBLIC_KEY, "pk_env"),
            (ENV_TYPING_SPEED_MS, "25"),
        ]);

        let config = load_config_with_env(Some(file.path().to_path_buf()), env).unwrap();

        assert_eq!(config.email.service_id.as_deref(), Some("from_env"));
        assert_eq!(config.email.template_id.as_deref(), Some("tpl"));
        assert_eq!(config.email.public_key.as_deref(), Some("pk_env"));
        assert_eq!(config.ui.typing_speed, Duration::from_millis(25));
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_unparseable_env_number_is_ignored() {
        let env = env_from(&[(ENV_FRAME_MS, "fast")]);
        let config = load_config_with_env(None, env).unwrap();
        assert_eq!(config.ui.frame_interval, Duration::from_millis(DEFAULT_FRAME_MS));
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_env_millis_skips_bad_values_only() {
        let env = env_from(&[(ENV_FRAME_MS, " 40 "), (ENV_TYPING_SPEED_MS, "-5")]);
        assert_eq!(env_millis(&env, ENV_FRAME_MS), Some(40));
        assert_eq!(env_millis(&env, ENV_TYPING_SPEED_MS), None);
        assert_eq!(env_millis(&env, ENV_SERVICE_ID), None);

        let config = load_config_with_env(None, env).unwrap();
        assert_eq!(config.ui.frame_interval, Duration::from_millis(40));
        assert_eq!(config.ui.typing_speed, Duration::from_millis(HERO_TYPING_SPEED_MS));
    }

    #[test]
    fn test_blank_credential_is_incomplete() {
        let env = env_from(&[
            (ENV_SERVICE_ID, "s"),
            (ENV_TEMPLATE_ID, ""),
            (ENV_PUBLIC_KEY, "k"),
        ]);
        let config = load_config_with_env(None, env).unwrap();
        assert!(!config.email.is_complete());
    }
}
