//! Configuration structures and loading logic.

use crate::config::assertion::Assertion;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Identifying user-agent sent on every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "mw-bulk-upload/",
    env!("CARGO_PKG_VERSION"),
    " (MediaWiki bulk file uploader)"
);

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    /// Positional job arguments, always supplied on the command line.
    #[serde(skip)]
    pub job: JobConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// User-agent string identifying this tool to the wiki operators.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

/// Upload request options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Identity assertion (`bot` or `user`).
    #[serde(default)]
    pub assert: Assertion,

    /// Replication lag ceiling in seconds passed as `maxlag`.
    #[serde(default = "default_maxlag")]
    pub maxlag: u32,

    /// Whether to pass `ignorewarnings=1` (overwrite duplicates and the like).
    #[serde(default = "default_true")]
    pub ignore_warnings: bool,

    /// Seconds to wait after a `ratelimited` response before retrying.
    #[serde(default = "default_ratelimit_wait")]
    pub ratelimit_wait_seconds: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            assert: Assertion::default(),
            maxlag: default_maxlag(),
            ignore_warnings: true,
            ratelimit_wait_seconds: default_ratelimit_wait(),
        }
    }
}

/// The batch to run: where, as whom, what, and from which file.
#[derive(Debug, Clone, Default)]
pub struct JobConfig {
    /// Full URL of the wiki's `api.php`.
    pub api_endpoint: String,

    /// Account name used for login and `assertuser`.
    pub username: String,

    /// Upload comment / edit summary.
    pub summary: String,

    /// Folder holding the files to upload.
    pub image_folder: PathBuf,

    /// 1-based position of the first file to upload.
    pub image_offset: usize,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_maxlag() -> u32 {
    5
}

fn default_ratelimit_wait() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults when it
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(
                "No configuration file at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.client.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.upload.assert, Assertion::Bot);
        assert_eq!(config.upload.maxlag, 5);
        assert!(config.upload.ignore_warnings);
        assert_eq!(config.upload.ratelimit_wait_seconds, 60);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [upload]
            assert = "user"
            maxlag = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.upload.assert, Assertion::User);
        assert_eq!(config.upload.maxlag, 10);
        assert_eq!(config.upload.ratelimit_wait_seconds, 60);
        assert_eq!(config.client.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[client]\nuser_agent = \"ExampleBot/1.0 (ops@example.org)\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.client.user_agent, "ExampleBot/1.0 (ops@example.org)");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Config::load(&path), Err(Error::Config(_))));
        assert!(Config::load_or_default(&path).is_ok());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[upload]\nmaxlag = \"soon\"").unwrap();

        assert!(matches!(
            Config::load(file.path()),
            Err(Error::TomlParse(_))
        ));
    }
}
