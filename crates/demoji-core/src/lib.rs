//! demoji-core - Strip emoji from text
//!
//! Core library for demoji. It removes every code point in a fixed emoji
//! range table and keeps all other Unicode text (umlauts, accents, Greek,
//! Cyrillic, ...) unchanged.
//!
//! # Example
//!
//! ```
//! use demoji_core::filter;
//!
//! assert_eq!(filter("Hello 🎉 World"), "Hello World");
//! assert_eq!(filter("🚀 Über uns"), "Über uns");
//! ```
//!
//! Use [`clean_file`] to process a file on disk and get a [`CleanReport`].

pub mod error;
pub mod file;
pub mod filter;
pub mod ranges;

// Re-export main types and functions
pub use error::{CleanError, Result};
pub use file::{clean_file, clean_str, CleanCounts, CleanReport};
pub use filter::{contains_emoji, count_emoji, filter};
pub use ranges::{is_emoji, EMOJI_RANGES};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
