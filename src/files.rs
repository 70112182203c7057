//! Reading, writing, and backing up env files

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EnvError;

/// Read an env file, keeping line terminators intact.
pub fn read_env_file(path: &Path) -> Result<String, EnvError> {
    fs::read_to_string(path).map_err(|e| EnvError::from_read(path, e))
}

/// Write `lines` to `path` exactly as given.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), EnvError> {
    fs::write(path, lines.concat())
        .map_err(|source| EnvError::Write { path: path.to_path_buf(), source })
}

/// Default backup name: `<file>.bkp-<UTC timestamp>`.
pub fn default_backup_path(path: &Path) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".bkp-{timestamp}"));
    PathBuf::from(name)
}

/// Copy `path` to `output` (or a timestamped sibling) and return the backup path.
///
/// An existing backup is never overwritten.
pub fn backup_file(path: &Path, output: Option<&Path>) -> Result<PathBuf, EnvError> {
    if !path.exists() {
        return Err(EnvError::NotFound { path: path.to_path_buf() });
    }

    let backup_path = match output {
        Some(p) => p.to_path_buf(),
        None => default_backup_path(path),
    };
    if backup_path.exists() {
        return Err(EnvError::BackupExists { path: backup_path });
    }

    fs::copy(path, &backup_path).map_err(|source| EnvError::Write {
        path: backup_path.clone(),
        source,
    })?;
    tracing::debug!("Backed up {} to {}", path.display(), backup_path.display());

    Ok(backup_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let err = read_env_file(&tmp.path().join("nope.env")).expect_err("missing");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Environment file not found"));
    }

    #[test]
    fn test_read_directory_is_unreadable() {
        let tmp = TempDir::new().expect("tmp");
        let err = read_env_file(tmp.path()).expect_err("directory");
        assert!(matches!(err, EnvError::Unreadable { .. }));
    }

    #[test]
    fn test_write_lines_joins_verbatim() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out.env");
        write_lines(&path, &["A=1\n".to_string(), "B=2".to_string()]).expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "A=1\nB=2");
    }

    #[test]
    fn test_backup_creates_timestamped_copy() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        fs::write(&path, "KEY=value\n").expect("write");

        let backup = backup_file(&path, None).expect("backup");
        let name = backup.file_name().and_then(|n| n.to_str()).expect("utf8 name");
        assert!(name.starts_with(".env.bkp-"));
        assert!(name.ends_with('Z'));
        assert_eq!(fs::read_to_string(&backup).expect("read"), "KEY=value\n");
    }

    #[test]
    fn test_backup_with_custom_name() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        let custom = tmp.path().join("saved.env");
        fs::write(&path, "KEY=value\n").expect("write");

        let backup = backup_file(&path, Some(&custom)).expect("backup");
        assert_eq!(backup, custom);
        assert_eq!(fs::read_to_string(&custom).expect("read"), "KEY=value\n");
    }

    #[test]
    fn test_backup_refuses_existing_target() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(".env");
        let custom = tmp.path().join("saved.env");
        fs::write(&path, "KEY=value\n").expect("write");
        fs::write(&custom, "OLD=1\n").expect("write");

        let err = backup_file(&path, Some(&custom)).expect_err("exists");
        assert!(matches!(err, EnvError::BackupExists { .. }));
        assert_eq!(fs::read_to_string(&custom).expect("read"), "OLD=1\n");
    }

    #[test]
    fn test_backup_missing_source_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let err = backup_file(&tmp.path().join("missing.env"), None).expect_err("missing");
        assert!(err.is_not_found());
    }
}
