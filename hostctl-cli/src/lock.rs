//! Process lock
//!
//! Keeps two invocations from interleaving cache writes and API operations.
//! The lock is an exclusive advisory lock on an open handle to the lock file,
//! so the OS releases it when the process exits, even when it is killed. The
//! file itself is left in place and its presence means nothing.

use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CliError;

/// Held for the lifetime of a command
#[derive(Debug)]
pub struct ProcessLock {
    _file: File,
}

impl ProcessLock {
    /// `<cache dir>/hostctl/hostctl.lock`
    pub fn default_path() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("hostctl").join("hostctl.lock"))
    }

    /// Try to take the lock; `Ok(None)` means another process holds it
    pub fn acquire(path: &Path) -> Result<Option<Self>, CliError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => return Ok(None),
            Err(TryLockError::Error(e)) => return Err(e.into()),
        }

        // pid is informational only
        file.set_len(0)?;
        writeln!(file, "{}", std::process::id())?;
        debug!("Acquired lock {}", path.display());

        Ok(Some(Self { _file: file }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lock_path(dir: &TempDir) -> PathBuf {
        dir.path().join("hostctl").join("hostctl.lock")
    }

    #[test]
    fn test_second_acquire_fails_until_release() {
        let dir = TempDir::new().unwrap();
        let path = lock_path(&dir);

        let first = ProcessLock::acquire(&path).unwrap();
        assert!(first.is_some());
        assert!(ProcessLock::acquire(&path).unwrap().is_none());

        // releasing needs no cleanup; the file stays behind
        drop(first);
        assert!(path.exists());
        assert!(ProcessLock::acquire(&path).unwrap().is_some());
    }

    #[test]
    fn test_lock_file_left_by_dead_process_does_not_block() {
        let dir = TempDir::new().unwrap();
        let path = lock_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        // what an interrupted run leaves behind: the file, but no open handle
        fs::write(&path, "4242\n").unwrap();

        let lock = ProcessLock::acquire(&path).unwrap();
        assert!(lock.is_some());
        drop(lock);
        assert_eq!(
            fs::read_to_string(&path).unwrap().trim(),
            std::process::id().to_string()
        );
    }
}
