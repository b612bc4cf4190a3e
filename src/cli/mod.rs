//! # Command-Line Interface
//!
//! The interactive session and its supporting pieces.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `app` | Binary arguments (`--format`, `--verbose`) and entry point |
//! | `command` | Quote-aware tokenizer, command grammar, suggestions |
//! | `session` | The read-eval loop and command dispatch |
//! | `format` | Text rendering: banner, help, task listings |
//! | `output` | Text/JSON output helper with verbose diagnostics |
//!
//! ## Output Formats
//!
//! The binary supports `--format`:
//! - `text` (default) - Human-readable transcript with prompt and banner
//! - `json` - One JSON document per command result, prompt suppressed
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session on stdin.

mod app;
mod command;
mod format;
mod output;
mod session;

pub use app::{run, Cli};
pub use command::{Command, ParseError};
pub use output::{Output, OutputFormat};
pub use session::Session;
