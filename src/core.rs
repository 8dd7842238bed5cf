//! Core engine logic for kommander.
//!
//! This module contains the non-UI pieces used by the application:
//! - [fm]: directory enumeration and the [Entry] model (the Listing Engine).
//! - [formatter]: sort/filter rules and size/time/name display formatting.
//! - [ops]: filesystem mutators (copy, move, delete, mkdir) with coarse
//!   failure categories.

pub mod fm;
pub mod formatter;
pub mod ops;

pub use fm::{browse_dir, list_directory, Entry, CATEGORY_DIR, CATEGORY_PLAIN_FILE};
pub use formatter::{
    filter_hidden, format_mtime, format_size, pad_left_to_width, pad_to_width, shorten_name,
    sort_entries, SortKey, NAME_DISPLAY_LIMIT, TIME_PLACEHOLDER,
};
pub use ops::{copy_file, create_dir, move_entry, remove_entry, resolve_destination, OpError};
