//! demoji CLI - Command-line interface library
//!
//! Strips emoji from a UTF-8 text file, either in place or into a new file,
//! and reports how many characters were removed.
//!
//! # Library Usage
//!
//! ```ignore
//! use demoji_cli::{clean_command, ReportFormat};
//!
//! clean_command(&input, None, ReportFormat::Text)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Clean a file in place
//! demoji REPORT.md
//!
//! # Write the result somewhere else, with a JSON summary
//! demoji REPORT.md REPORT_clean.md --format json
//!
//! # Show debug logging on stderr
//! RUST_LOG=debug demoji REPORT.md
//! ```

pub mod app;
pub mod settings;

// Re-export main entry point and types
pub use app::{clean_command, load_settings, render_report, run_cli};
pub use settings::{ReportFormat, ReportSettings, Settings};
