//! Sorting, filtering, and display formatting for directory entries.
//!
//! Holds the [SortKey] enum, the sort/filter rules of the Listing Engine,
//! and the size/time/name formatting used by the table renderer.
//!
//! All sorts are stable: entries that compare equal keep the order the
//! filesystem enumerated them in. There is no secondary sort key.

use crate::core::fm::Entry;

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthChar;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

/// Names longer than this are shortened for table display.
pub const NAME_DISPLAY_LIMIT: usize = 30;
/// Shortened names keep this many characters before the ellipsis.
const NAME_KEEP_CHARS: usize = 27;

/// Shown in the date column when the filesystem exposes no mtime.
pub const TIME_PLACEHOLDER: &str = "--/--/---- --:--";

const SIZE_UNITS: [&str; 4] = ["Б", "КБ", "МБ", "ГБ"];

/// The active sort order of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Date,
    Type,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "size" => Ok(SortKey::Size),
            "date" => Ok(SortKey::Date),
            "type" => Ok(SortKey::Type),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::Date => "date",
            SortKey::Type => "type",
        };
        f.write_str(name)
    }
}

/// Removes dotfile entries in place (leading-dot convention only; platform
/// hidden attributes are not consulted).
pub fn filter_hidden(entries: &mut Vec<Entry>) {
    entries.retain(|e| !e.is_hidden());
}

/// Sorts the entries in place according to the given key.
///
/// - `name`: ascending, case-sensitive, no directory grouping.
/// - `size`: directories first, then files descending by size.
/// - `date`: descending by mtime; unknown mtimes sort last.
/// - `type`: directories first, then ascending by category.
pub fn sort_entries(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::Name => entries.sort_by(|a, b| a.name().cmp(b.name())),
        SortKey::Size => entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => Ordering::Equal,
            (false, false) => b.size().cmp(&a.size()),
        }),
        // Option<SystemTime> orders None below every Some, so the reversed
        // comparison puts unknown mtimes at the end.
        SortKey::Date => entries.sort_by(|a, b| b.modified().cmp(&a.modified())),
        SortKey::Type => entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.category().cmp(b.category()),
        }),
    }
}

/// Formats a byte count for the size column: repeated division by 1024 up to
/// the ГБ tier, bytes as an integer, higher tiers with two decimals.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, SIZE_UNITS[0])
    } else {
        format!("{:.2} {}", value, SIZE_UNITS[unit])
    }
}

/// Formats a modification time for the date column, or the fixed placeholder
/// when the filesystem exposed none.
pub fn format_mtime(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format("%d/%m/%Y %H:%M").to_string()
        })
        .unwrap_or_else(|| TIME_PLACEHOLDER.to_string())
}

/// Shortens a name for table display: past [NAME_DISPLAY_LIMIT] characters
/// it keeps the first 27 and appends `...`.
///
/// Purely a rendering concern; command matching always uses the full name.
pub fn shorten_name(name: &str) -> Cow<'_, str> {
    if name.chars().count() <= NAME_DISPLAY_LIMIT {
        return Cow::Borrowed(name);
    }
    let mut short: String = name.chars().take(NAME_KEEP_CHARS).collect();
    short.push_str("...");
    Cow::Owned(short)
}

/// Pads or truncates a string to an exact display width, counting wide
/// characters properly and dropping control characters.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut current = 0;

    for ch in text.chars() {
        if ch.is_control() {
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if current + w > width {
            break;
        }
        out.push(ch);
        current += w;
    }

    if current < width {
        out.push_str(&" ".repeat(width - current));
    }
    out
}

/// Right-aligns a string within an exact display width.
pub fn pad_left_to_width(text: &str, width: usize) -> String {
    let used: usize = text.chars().filter_map(|c| c.width()).sum();
    if used >= width {
        return pad_to_width(text, width);
    }
    let mut out = " ".repeat(width - used);
    out.push_str(text);
    out
}
