//! Configuration module
//!
//! Settings are layered, lowest precedence first: built-in defaults, the TOML
//! config file, then command-line options (which also read `HOSTCTL_*`
//! environment variables).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::CliError;

pub const DEFAULT_API_URL: &str = "https://cloud.acquia.com/api";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.acquia.com/api/auth/oauth/token";
const DEFAULT_TASK_WAIT: u64 = 5;
const DEFAULT_TIMEOUT: u64 = 300;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the management API
    pub api_url: String,
    /// OAuth2 token endpoint
    pub token_url: String,
    pub key: String,
    pub secret: String,
    /// Delay between notification polls
    pub task_wait: Duration,
    /// Maximum time to wait on a single task
    pub timeout: Duration,
}

/// Shape of `config.toml`; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    token_url: Option<String>,
    key: Option<String>,
    secret: Option<String>,
    taskwait: Option<u64>,
    timeout: Option<u64>,
}

/// Values given on the command line or through the environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub token_url: Option<String>,
    pub key: Option<String>,
    pub secret: Option<String>,
    pub task_wait: Option<u64>,
    pub timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            key: String::new(),
            secret: String::new(),
            task_wait: Duration::from_secs(DEFAULT_TASK_WAIT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
        }
    }
}

impl Config {
    /// `<config dir>/hostctl/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hostctl").join("config.toml"))
    }

    /// Build the configuration from defaults, the config file and overrides
    ///
    /// An explicitly requested file must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>, overrides: Overrides) -> Result<Self, CliError> {
        let file = match explicit {
            Some(path) => Some(read_file(path)?),
            None => match Self::default_path() {
                Some(path) if path.exists() => Some(read_file(&path)?),
                _ => None,
            },
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.apply_file(file);
        }
        config.apply_overrides(overrides);
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(url) = file.api_url {
            self.api_url = url;
        }
        if let Some(url) = file.token_url {
            self.token_url = url;
        }
        if let Some(key) = file.key {
            self.key = key;
        }
        if let Some(secret) = file.secret {
            self.secret = secret;
        }
        if let Some(secs) = file.taskwait {
            self.task_wait = Duration::from_secs(secs);
        }
        if let Some(secs) = file.timeout {
            self.timeout = Duration::from_secs(secs);
        }
    }

    fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.api_url {
            self.api_url = url;
        }
        if let Some(url) = overrides.token_url {
            self.token_url = url;
        }
        if let Some(key) = overrides.key {
            self.key = key;
        }
        if let Some(secret) = overrides.secret {
            self.secret = secret;
        }
        if let Some(secs) = overrides.task_wait {
            self.task_wait = Duration::from_secs(secs);
        }
        if let Some(secs) = overrides.timeout {
            self.timeout = Duration::from_secs(secs);
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), CliError> {
        if self.key.is_empty() || self.secret.is_empty() {
            return Err(CliError::Config(
                "API key and secret are required (set HOSTCTL_KEY and HOSTCTL_SECRET or add them to the config file)".to_string(),
            ));
        }

        for (name, url) in [("api_url", &self.api_url), ("token_url", &self.token_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CliError::Config(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.task_wait.is_zero() {
            return Err(CliError::Config("taskwait must be greater than 0".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(CliError::Config("timeout must be greater than 0".to_string()));
        }

        Ok(())
    }
}

fn read_file(path: &Path) -> Result<ConfigFile, CliError> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    toml::from_str(&content)
        .map_err(|e| CliError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn credentials() -> Overrides {
        Overrides {
            key: Some("key".into()),
            secret: Some("secret".into()),
            ..Overrides::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.task_wait, Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_file_values_apply() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
key = "file-key"
secret = "file-secret"
taskwait = 2
timeout = 60
"#,
        );

        let config = Config::load(Some(&path), Overrides::default()).unwrap();
        assert_eq!(config.key, "file-key");
        assert_eq!(config.task_wait, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_beat_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "key = \"file-key\"\ntimeout = 60\n");

        let overrides = Overrides {
            key: Some("cli-key".into()),
            timeout: Some(10),
            ..Overrides::default()
        };
        let config = Config::load(Some(&path), overrides).unwrap();
        assert_eq!(config.key, "cli-key");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing), Overrides::default()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "api_key = \"typo\"\n");
        assert!(Config::load(Some(&path), Overrides::default()).is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.apply_overrides(credentials());
        assert!(config.validate().is_ok());

        config.api_url = "cloud.acquia.com/api".into();
        assert!(config.validate().is_err());

        config.api_url = DEFAULT_API_URL.into();
        config.task_wait = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
