//! Filesystem operation round trips for kommander.
//!
//! Covers the copy/move/rename contracts end to end: content preservation,
//! overwrite semantics, recursive deletion, and the move/rename equivalence.

use kommander::core::ops::{copy_file, create_dir, move_entry, remove_entry, OpError};

use std::error;
use std::fs;
use tempfile::tempdir;

fn s(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn copy_round_trip_preserves_bytes() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, b"one two three")?;

    copy_file(&a, &s(&b))?;

    assert_eq!(fs::read(&a)?, fs::read(&b)?);
    assert!(a.exists(), "copy must keep the source");
    Ok(())
}

#[test]
fn copy_overwrites_existing_destination() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, b"fresh")?;
    fs::write(&b, b"a much longer stale payload")?;

    copy_file(&a, &s(&b))?;
    assert_eq!(fs::read(&b)?, b"fresh");
    Ok(())
}

#[test]
fn move_into_subdir_removes_source() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let a = dir.path().join("a.txt");
    let sub = dir.path().join("sub");
    fs::create_dir(&sub)?;
    fs::write(&a, b"travelling bytes")?;

    move_entry(&a, &s(&sub.join("a.txt")))?;

    assert!(!a.exists());
    assert_eq!(fs::read(sub.join("a.txt"))?, b"travelling bytes");
    Ok(())
}

#[test]
fn rename_is_move_by_another_name() -> Result<(), Box<dyn error::Error>> {
    // `rename` dispatches to the same mutator as `move`; the contract is a
    // relocation within the same directory.
    let dir = tempdir()?;
    let old = dir.path().join("old.txt");
    let new = dir.path().join("new.txt");
    fs::write(&old, b"same bytes")?;

    move_entry(&old, &s(&new))?;

    assert!(!old.exists());
    assert_eq!(fs::read(&new)?, b"same bytes");
    Ok(())
}

#[test]
fn move_missing_source_fails_cleanly() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let ghost = dir.path().join("ghost.txt");
    let err = move_entry(&ghost, &s(&dir.path().join("out.txt"))).unwrap_err();
    assert!(matches!(err, OpError::NotFound));
    Ok(())
}

#[test]
fn delete_handles_files_and_trees() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("single.txt");
    fs::write(&file, b"x")?;
    remove_entry(&file)?;
    assert!(!file.exists());

    let tree = dir.path().join("tree");
    fs::create_dir_all(tree.join("a/b"))?;
    fs::write(tree.join("a/b/leaf.txt"), b"y")?;
    remove_entry(&tree)?;
    assert!(!tree.exists());
    Ok(())
}

#[test]
fn mkdir_creates_exactly_one_level() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    create_dir(&dir.path().join("fresh"))?;
    assert!(dir.path().join("fresh").is_dir());

    // No implicit parents: nested creation under a missing parent fails.
    let err = create_dir(&dir.path().join("missing/child")).unwrap_err();
    assert!(matches!(err, OpError::NotFound));
    Ok(())
}
