//! Whole-file cleaning
//!
//! Reads a UTF-8 file, runs it through [`filter`](crate::filter), and writes
//! the result either back to the same path or to a separate output path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CleanError, Result};
use crate::filter::{count_emoji, filter};

/// Code-point counts before and after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CleanCounts {
    /// Characters in the original text
    pub original_chars: usize,
    /// Characters in the cleaned text
    pub cleaned_chars: usize,
    /// `original_chars - cleaned_chars`
    pub removed_chars: usize,
}

impl CleanCounts {
    fn measure(original: &str, cleaned: &str) -> Self {
        let original_chars = original.chars().count();
        let cleaned_chars = cleaned.chars().count();
        Self {
            original_chars,
            cleaned_chars,
            removed_chars: original_chars.saturating_sub(cleaned_chars),
        }
    }
}

/// Summary of a [`clean_file`] run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// File that was read
    pub input: PathBuf,
    /// File that was written
    pub output: PathBuf,
    /// Whether the input was overwritten in place
    pub overwritten: bool,
    /// Character counts
    #[serde(flatten)]
    pub counts: CleanCounts,
}

/// Filter `text` and measure how much was removed.
///
/// ```
/// use demoji_core::clean_str;
///
/// let (cleaned, counts) = clean_str("Hi 👋");
/// assert_eq!(cleaned, "Hi ");
/// assert_eq!(counts.removed_chars, 1);
/// ```
pub fn clean_str(text: &str) -> (String, CleanCounts) {
    let cleaned = filter(text);
    let counts = CleanCounts::measure(text, &cleaned);
    (cleaned, counts)
}

/// Clean `input` and write the result to `output`, or back to `input` when
/// no output path is given.
pub fn clean_file(input: &Path, output: Option<&Path>) -> Result<CleanReport> {
    if !input.exists() {
        return Err(CleanError::NotFound(input.to_path_buf()));
    }

    let content = fs::read_to_string(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CleanError::NotFound(input.to_path_buf()),
        io::ErrorKind::InvalidData => CleanError::InvalidUtf8 {
            path: input.to_path_buf(),
        },
        _ => CleanError::Io {
            path: input.to_path_buf(),
            source: e,
        },
    })?;
    debug!(
        path = %input.display(),
        emoji = count_emoji(&content),
        "read input"
    );

    let (cleaned, counts) = clean_str(&content);

    let target = output.unwrap_or(input);
    fs::write(target, &cleaned).map_err(|e| CleanError::Io {
        path: target.to_path_buf(),
        source: e,
    })?;
    info!(
        path = %target.display(),
        removed = counts.removed_chars,
        "wrote cleaned file"
    );

    Ok(CleanReport {
        input: input.to_path_buf(),
        output: target.to_path_buf(),
        overwritten: output.is_none(),
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_code_points_not_bytes() {
        let (cleaned, counts) = clean_str("ä🎉ö");
        assert_eq!(cleaned, "ä ö");
        assert_eq!(counts.original_chars, 3);
        assert_eq!(counts.cleaned_chars, 3);
        assert_eq!(counts.removed_chars, 0);
    }

    #[test]
    fn test_counts_for_emoji_run() {
        let (_, counts) = clean_str("ok 😀😃😄 done");
        assert_eq!(counts.original_chars, 11);
        assert_eq!(counts.cleaned_chars, 7);
        assert_eq!(counts.removed_chars, 4);
    }

    #[test]
    fn test_counts_for_empty_text() {
        assert_eq!(clean_str(""), (String::new(), CleanCounts::default()));
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = CleanReport {
            input: PathBuf::from("in.md"),
            output: PathBuf::from("out.md"),
            overwritten: false,
            counts: CleanCounts {
                original_chars: 10,
                cleaned_chars: 8,
                removed_chars: 2,
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["input"], "in.md");
        assert_eq!(json["removed_chars"], 2);
        assert_eq!(json["overwritten"], false);
    }
}
