//! Filesystem mutators for kommander.
//!
//! Each operation returns a coarse [OpError] category; the session loop only
//! reports success or failure to the user. Keeping the categories explicit
//! (instead of swallowing errors) leaves the recovery policy to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Coarse failure categories for filesystem operations.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("already exists")]
    AlreadyExists,
    #[error("not a regular file")]
    NotAFile,
    #[error("{0}")]
    Other(io::Error),
}

impl From<io::Error> for OpError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => OpError::NotFound,
            io::ErrorKind::PermissionDenied => OpError::PermissionDenied,
            io::ErrorKind::AlreadyExists => OpError::AlreadyExists,
            _ => OpError::Other(err),
        }
    }
}

pub type OpResult = Result<(), OpError>;

/// Resolves a destination string the way `copy`/`move`/`rename` do: absolute
/// paths are used as-is, relative ones resolve against the *process working
/// directory* (not the browsed directory — a deliberate, preserved rule).
pub fn resolve_destination(dest: &str) -> PathBuf {
    let dest = Path::new(dest);
    if dest.is_absolute() {
        dest.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(dest)
    }
}

/// Copies a regular file to `dest`, overwriting an existing destination.
/// Directories are not copyable through this operation.
pub fn copy_file(source: &Path, dest: &str) -> OpResult {
    if !source.exists() {
        return Err(OpError::NotFound);
    }
    if source.is_dir() {
        return Err(OpError::NotAFile);
    }
    fs::copy(source, resolve_destination(dest))?;
    Ok(())
}

/// Renames/relocates `source` to `dest`. Backs both `move` and `rename`.
pub fn move_entry(source: &Path, dest: &str) -> OpResult {
    if !source.exists() {
        return Err(OpError::NotFound);
    }
    fs::rename(source, resolve_destination(dest))?;
    Ok(())
}

/// Deletes a file, or a directory with all of its contents.
pub fn remove_entry(target: &Path) -> OpResult {
    if !target.exists() {
        return Err(OpError::NotFound);
    }
    if target.is_dir() {
        fs::remove_dir_all(target)?;
    } else {
        fs::remove_file(target)?;
    }
    Ok(())
}

/// Creates a single new directory at `target`.
pub fn create_dir(target: &Path) -> OpResult {
    fs::create_dir(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn copy_overwrites_and_preserves_content() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let src = tmp.path().join("a.txt");
        let dst = tmp.path().join("b.txt");
        fs::write(&src, b"payload")?;
        fs::write(&dst, b"stale")?;

        copy_file(&src, dst.to_str().ok_or("utf8 path")?)?;
        assert_eq!(fs::read(&src)?, fs::read(&dst)?);
        Ok(())
    }

    #[test]
    fn copy_rejects_directories() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub)?;

        let dest = tmp.path().join("copy_of_sub");
        let err = copy_file(&sub, dest.to_str().ok_or("utf8 path")?).unwrap_err();
        assert!(matches!(err, OpError::NotAFile));
        Ok(())
    }

    #[test]
    fn copy_missing_source_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let src = tmp.path().join("ghost.txt");
        let err = copy_file(&src, "anywhere.txt").unwrap_err();
        assert!(matches!(err, OpError::NotFound));
        Ok(())
    }

    #[test]
    fn move_relocates_with_content_intact() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let src = tmp.path().join("a.txt");
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub)?;
        let mut f = File::create(&src)?;
        f.write_all(b"moved bytes")?;
        drop(f);

        let dst = sub.join("a.txt");
        move_entry(&src, dst.to_str().ok_or("utf8 path")?)?;

        assert!(!src.exists());
        assert_eq!(fs::read(&dst)?, b"moved bytes");
        Ok(())
    }

    #[test]
    fn remove_is_recursive_for_directories() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let sub = tmp.path().join("sub");
        fs::create_dir_all(sub.join("nested"))?;
        fs::write(sub.join("nested/f.txt"), b"x")?;

        remove_entry(&sub)?;
        assert!(!sub.exists());
        Ok(())
    }

    #[test]
    fn create_dir_reports_conflict() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let target = tmp.path().join("new_dir");

        create_dir(&target)?;
        assert!(target.is_dir());

        let err = create_dir(&target).unwrap_err();
        assert!(matches!(err, OpError::AlreadyExists));
        Ok(())
    }

    #[test]
    fn destination_resolution_rules() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let abs = tmp.path().join("x.txt");
        let abs_str = abs.to_str().ok_or("utf8 path")?;
        assert_eq!(resolve_destination(abs_str), abs);

        let rel = resolve_destination("rel/x.txt");
        assert_eq!(rel, std::env::current_dir()?.join("rel/x.txt"));
        Ok(())
    }
}
