//! Identifier cache
//!
//! Persists resolved application UUIDs and environment objects across
//! invocations in a single JSON map. Entries never expire; only `cache:clear`
//! removes them.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

const CACHE_FILE: &str = "identifiers.json";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cache file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no cache directory available on this system")]
    Unavailable,
}

/// Key for an application resolved from `<realm>:<site>`
pub fn application_key(realm: &str, site: &str) -> String {
    format!("application.{}.{}", realm, site)
}

/// Key for an environment of an application
pub fn environment_key(application: Uuid, name: &str) -> String {
    format!("environment.{}.{}", application, name)
}

/// Namespaced key/value store for resolved identifiers
///
/// Implementations never perform network I/O.
pub trait IdentifierCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    /// Insert or overwrite an entry
    fn set(&self, key: &str, value: Value) -> Result<(), CacheError>;

    /// Remove every entry
    fn clear(&self) -> Result<(), CacheError>;
}

/// File-backed cache stored under the user cache directory
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<cache dir>/hostctl/identifiers.json`
    pub fn open_default() -> Result<Self, CacheError> {
        let dir = dirs::cache_dir().ok_or(CacheError::Unavailable)?;
        Ok(Self::new(dir.join("hostctl").join(CACHE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, Value>, CacheError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(CacheError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| CacheError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, entries: &BTreeMap<String, Value>) -> Result<(), CacheError> {
        let io_err = |source| CacheError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(entries).map_err(|source| CacheError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        // Write-then-rename so a crash never leaves a half-written map behind
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl IdentifierCache for FileCache {
    fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), CacheError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(CacheError::Corrupt { .. }) => {
                debug!("Replacing corrupt cache file {}", self.path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value);
        self.save(&entries)
    }

    fn clear(&self) -> Result<(), CacheError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CacheError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn cache_in(dir: &TempDir) -> FileCache {
        FileCache::new(dir.path().join("hostctl").join(CACHE_FILE))
    }

    #[test]
    fn test_get_on_missing_file_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        assert!(cache.get("application.prod.mysite").unwrap().is_none());
    }

    #[test]
    fn test_entries_survive_a_new_handle() {
        let dir = TempDir::new().unwrap();
        let key = application_key("prod", "mysite");
        cache_in(&dir)
            .set(&key, json!("a47ac10b-58cc-4372-a567-0e02b2c3d479"))
            .unwrap();

        let reopened = cache_in(&dir);
        assert_eq!(
            reopened.get(&key).unwrap(),
            Some(json!("a47ac10b-58cc-4372-a567-0e02b2c3d479"))
        );
    }

    #[test]
    fn test_set_overwrites() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        cache.set("k", json!("one")).unwrap();
        cache.set("k", json!("two")).unwrap();
        assert_eq!(cache.get("k").unwrap(), Some(json!("two")));
    }

    #[test]
    fn test_clear_removes_everything() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        cache.set("a", json!(1)).unwrap();
        cache.set("b", json!(2)).unwrap();
        cache.clear().unwrap();
        assert!(cache.get("a").unwrap().is_none());
        // clearing an empty cache is fine
        cache.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_reports_error_and_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let cache = cache_in(&dir);
        fs::create_dir_all(cache.path().parent().unwrap()).unwrap();
        fs::write(cache.path(), "{not json").unwrap();

        assert!(matches!(cache.get("k"), Err(CacheError::Corrupt { .. })));

        cache.set("k", json!("v")).unwrap();
        assert_eq!(cache.get("k").unwrap(), Some(json!("v")));
    }

    #[test]
    fn test_key_namespaces() {
        let app = Uuid::parse_str("a47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();
        assert_eq!(application_key("devcloud", "mysite"), "application.devcloud.mysite");
        assert_eq!(
            environment_key(app, "dev"),
            "environment.a47ac10b-58cc-4372-a567-0e02b2c3d479.dev"
        );
    }
}
