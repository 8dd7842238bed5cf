//! Directory browsing logic for kommander.
//!
//! Provides the [Entry] struct which describes a single child of the browsed
//! directory, and the enumeration functions used by the session loop.
//! Entries are recomputed on every render cycle and never cached.

use crate::core::formatter::SortKey;
use crate::core::formatter::{filter_hidden, sort_entries};

use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Category tag of a directory entry.
pub const CATEGORY_DIR: &str = "<DIR>";
/// Category tag of a file without an extension.
pub const CATEGORY_PLAIN_FILE: &str = "<FILE>";

/// A single entry in a directory listing.
///
/// Holds the full (untruncated) name used for command matching, plus the
/// derived metadata shown in the table: directory flag, size in bytes,
/// best-effort modification time and the display/sort category.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    name: String,
    is_dir: bool,
    size: u64,
    modified: Option<SystemTime>,
    category: String,
}

impl Entry {
    pub fn new(name: String, is_dir: bool, size: u64, modified: Option<SystemTime>) -> Self {
        let category = categorize(&name, is_dir);
        Entry {
            name,
            is_dir,
            size: if is_dir { 0 } else { size },
            modified,
            category,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Size in bytes. Always 0 for directories.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Best-effort modification time. `None` when the filesystem did not
    /// expose one.
    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Derived category: [CATEGORY_DIR] for directories, the lowercased
    /// extension (with the dot) for files, [CATEGORY_PLAIN_FILE] otherwise.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

fn categorize(name: &str, is_dir: bool) -> String {
    if is_dir {
        return CATEGORY_DIR.to_string();
    }
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let mut tag = String::with_capacity(ext.len() + 1);
            tag.push('.');
            tag.push_str(&ext.to_lowercase());
            tag
        }
        None => CATEGORY_PLAIN_FILE.to_string(),
    }
}

/// Reads the contents of the provided directory into a vector of [Entry].
///
/// Entries whose type cannot be determined are skipped; entries whose
/// metadata cannot be read are kept with size 0 and an unknown mtime.
///
/// # Returns
/// A Result containing the entries or the `std::io::Error` from `read_dir`.
pub fn browse_dir(path: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(64);

    for entry in std::fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let name = entry.file_name().to_string_lossy().into_owned();

        // For symlinks, classify and size by the target where possible.
        let meta = if ft.is_symlink() {
            std::fs::metadata(entry.path()).ok()
        } else {
            entry.metadata().ok()
        };

        let (is_dir, size, modified) = match meta {
            Some(md) => (md.is_dir(), md.len(), md.modified().ok()),
            None => (ft.is_dir(), 0, None),
        };

        entries.push(Entry::new(name, is_dir, size, modified));
    }
    Ok(entries)
}

/// The Listing Engine contract: enumerate, filter, and sort a directory.
///
/// Never fails to the caller. An unreadable directory yields an empty
/// listing; per-entry failures degrade to partial results.
pub fn list_directory(path: &Path, sort_key: SortKey, show_hidden: bool) -> Vec<Entry> {
    let mut entries = browse_dir(path).unwrap_or_default();
    if !show_hidden {
        filter_hidden(&mut entries);
    }
    sort_entries(&mut entries, sort_key);
    entries
}
