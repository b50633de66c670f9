//! Configuration for the Quercle client
//!
//! Configuration is resolved exactly once, when a tool set is built. Explicit
//! values win; anything left unset falls back to the environment and then to
//! built-in defaults. Nothing reads the environment after resolution.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::Result;

/// Environment variable holding the Quercle API key
pub const API_KEY_ENV: &str = "QUERCLE_API_KEY";

/// Environment variable overriding the Quercle API base URL
pub const BASE_URL_ENV: &str = "QUERCLE_BASE_URL";

/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_ENV: &str = "QUERCLE_TIMEOUT_SECS";

/// Default Quercle API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.quercle.dev";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Caller-supplied Quercle configuration
///
/// Every field is optional. Unset fields are filled in by [`resolve_config`].
#[derive(Default)]
pub struct QuercleConfig {
    /// API key (`qk_...`)
    pub api_key: Option<SecretString>,

    /// API base URL
    pub base_url: Option<String>,

    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl Clone for QuercleConfig {
    fn clone(&self) -> Self {
        Self {
            api_key: clone_secret(self.api_key.as_ref()),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }
}

impl fmt::Debug for QuercleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuercleConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// On-disk representation of [`QuercleConfig`]
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl QuercleConfig {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from a TOML file
    ///
    /// Recognised keys are `api_key`, `base_url` and `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid TOML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;

        tracing::debug!(path = %path.display(), "loaded quercle config file");

        Ok(Self {
            api_key: file.api_key.map(SecretString::from),
            base_url: file.base_url,
            timeout: file.timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Default location of the config file
///
/// Uses `~/.config/quercle/config.toml` on Linux
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "quercle", "quercle")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Fully resolved configuration used to construct a client
pub struct ResolvedConfig {
    /// API key, if one was supplied or found in the environment
    pub api_key: Option<SecretString>,

    /// API base URL
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Resolve configuration against the process environment
#[must_use]
pub fn resolve_config(explicit: Option<QuercleConfig>) -> ResolvedConfig {
    resolve_config_with(explicit, |key| std::env::var(key).ok())
}

/// Resolve configuration against an arbitrary variable lookup
///
/// Explicit values take priority, then `lookup`, then defaults. Empty
/// variables count as unset.
#[must_use]
pub fn resolve_config_with<F>(explicit: Option<QuercleConfig>, lookup: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let explicit = explicit.unwrap_or_default();
    let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let api_key = explicit
        .api_key
        .or_else(|| env(API_KEY_ENV).map(SecretString::from));

    let base_url = explicit
        .base_url
        .or_else(|| env(BASE_URL_ENV))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = explicit
        .timeout
        .or_else(|| {
            env(TIMEOUT_ENV).and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!(
                        value = %raw,
                        error = %e,
                        "ignoring invalid {TIMEOUT_ENV}"
                    );
                    None
                }
            })
        })
        .unwrap_or(DEFAULT_TIMEOUT);

    if api_key.is_none() {
        tracing::debug!("no quercle api key configured, calls will fail until one is provided");
    }

    ResolvedConfig {
        api_key,
        base_url,
        timeout,
    }
}

fn clone_secret(secret: Option<&SecretString>) -> Option<SecretString> {
    secret.map(|s| SecretString::from(s.expose_secret().to_owned()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let resolved = resolve_config_with(None, lookup(&[]));
        assert!(resolved.api_key.is_none());
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn env_fills_unset_fields() {
        let resolved = resolve_config_with(
            None,
            lookup(&[
                (API_KEY_ENV, "qk_env"),
                (BASE_URL_ENV, "http://localhost:9000"),
                (TIMEOUT_ENV, "7"),
            ]),
        );
        assert_eq!(
            resolved.api_key.as_ref().map(|k| k.expose_secret()),
            Some("qk_env")
        );
        assert_eq!(resolved.base_url, "http://localhost:9000");
        assert_eq!(resolved.timeout, Duration::from_secs(7));
    }

    #[test]
    fn explicit_wins_over_env() {
        let explicit = QuercleConfig::new()
            .with_api_key("qk_explicit")
            .with_timeout(Duration::from_secs(3));
        let resolved = resolve_config_with(
            Some(explicit),
            lookup(&[(API_KEY_ENV, "qk_env"), (TIMEOUT_ENV, "7")]),
        );
        assert_eq!(
            resolved.api_key.as_ref().map(|k| k.expose_secret()),
            Some("qk_explicit")
        );
        assert_eq!(resolved.timeout, Duration::from_secs(3));
    }

    #[test]
    fn empty_and_invalid_env_values_are_ignored() {
        let resolved = resolve_config_with(
            None,
            lookup(&[(API_KEY_ENV, "  "), (TIMEOUT_ENV, "soon")]),
        );
        assert!(resolved.api_key.is_none());
        assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = QuercleConfig::new().with_api_key("qk_secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("qk_secret"));
        assert!(rendered.contains("REDACTED"));

        let resolved = resolve_config_with(Some(config), lookup(&[]));
        assert!(!format!("{resolved:?}").contains("qk_secret"));
    }

    #[test]
    fn clone_keeps_api_key() {
        let config = QuercleConfig::new().with_api_key("qk_clone");
        let cloned = config.clone();
        assert_eq!(
            cloned.api_key.as_ref().map(|k| k.expose_secret()),
            Some("qk_clone")
        );
    }

    #[test]
    fn loads_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_key = \"qk_file\"\nbase_url = \"http://127.0.0.1:1\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = QuercleConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.api_key.as_ref().map(|k| k.expose_secret()),
            Some("qk_file")
        );
        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:1"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn rejects_unknown_file_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apikey = \"typo\"").unwrap();

        let err = QuercleConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Toml(_)));
    }
}
