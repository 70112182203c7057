//! Error types for env file I/O

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Environment file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Backup file already exists: {}", path.display())]
    BackupExists { path: PathBuf },
}

impl EnvError {
    /// Map an I/O failure while reading `path` to `NotFound` or `Unreadable`.
    pub fn from_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            EnvError::NotFound { path }
        } else {
            EnvError::Unreadable { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EnvError::NotFound { .. })
    }
}
