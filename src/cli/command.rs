//! Command language for the interactive session
//!
//! A command line is whitespace-separated tokens; double- or single-quoted
//! strings form a single token with inner whitespace preserved. Bare words
//! after `add`/`update` are joined, so `add Buy milk` and `add "Buy milk"`
//! produce the same title.

use std::str::FromStr;
use thiserror::Error;

use crate::domain::{IdError, TaskId};
use crate::service::ListFilter;

/// Every command name and alias the session understands, used for
/// "did you mean" suggestions against unknown input.
const KNOWN_COMMANDS: &[&str] = &[
    "add",
    "list",
    "ls",
    "update",
    "delete",
    "complete",
    "done",
    "incomplete",
    "undo",
    "history",
    "help",
    "?",
    "exit",
    "quit",
];

/// Minimum similarity ratio for a suggestion to be offered
const SUGGESTION_THRESHOLD: f64 = 0.6;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Unknown command '{name}'")]
    UnknownCommand {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("Missing argument. Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("Unterminated quote in input")]
    UnterminatedQuote,

    #[error(transparent)]
    InvalidId(#[from] IdError),

    #[error("Unknown filter '{0}': expected all, pending or completed")]
    InvalidFilter(String),
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { title: String },
    List { filter: ListFilter },
    Update { id: TaskId, title: String },
    Delete { id: TaskId },
    Complete { id: TaskId },
    Incomplete { id: TaskId },
    History,
    Help,
    Exit,
}

impl Command {
    /// Parses one input line. Returns `None` for blank input.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let tokens = tokenize(line)?;
        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name.to_lowercase().as_str() {
            "add" => Command::Add {
                title: require_text(args, r#"add "task title""#)?,
            },
            "list" | "ls" => Command::List {
                filter: parse_filter(args.first())?,
            },
            "update" => {
                let (id_arg, rest) = args.split_first().ok_or(ParseError::MissingArgument {
                    usage: r#"update <id> "new title""#,
                })?;
                Command::Update {
                    id: TaskId::from_str(id_arg)?,
                    title: require_text(rest, r#"update <id> "new title""#)?,
                }
            }
            "delete" => Command::Delete {
                id: require_id(args, "delete <id>")?,
            },
            "complete" | "done" => Command::Complete {
                id: require_id(args, "complete <id>")?,
            },
            "incomplete" | "undo" => Command::Incomplete {
                id: require_id(args, "incomplete <id>")?,
            },
            "history" => Command::History,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => {
                return Err(ParseError::UnknownCommand {
                    name: other.to_string(),
                    suggestions: suggest(other),
                })
            }
        };

        Ok(Some(command))
    }
}

/// Splits a line into tokens, treating quoted strings as single tokens
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '"' || c == '\'' {
            chars.next();
            let mut token = String::new();
            loop {
                match chars.next() {
                    Some(ch) if ch == c => break,
                    Some(ch) => token.push(ch),
                    None => return Err(ParseError::UnterminatedQuote),
                }
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() || ch == '"' || ch == '\'' {
                    break;
                }
                token.push(ch);
                chars.next();
            }
            tokens.push(token);
        }
    }

    Ok(tokens)
}

/// Joins remaining args into free text (the task title)
fn require_text(args: &[String], usage: &'static str) -> Result<String, ParseError> {
    if args.is_empty() {
        return Err(ParseError::MissingArgument { usage });
    }
    Ok(args.join(" "))
}

/// Requires exactly one ID argument
fn require_id(args: &[String], usage: &'static str) -> Result<TaskId, ParseError> {
    let id_arg = args.first().ok_or(ParseError::MissingArgument { usage })?;
    Ok(TaskId::from_str(id_arg)?)
}

fn parse_filter(arg: Option<&String>) -> Result<ListFilter, ParseError> {
    match arg.map(|s| s.to_lowercase()) {
        None => Ok(ListFilter::All),
        Some(s) => match s.as_str() {
            "all" => Ok(ListFilter::All),
            "pending" => Ok(ListFilter::Pending),
            "completed" => Ok(ListFilter::Completed),
            other => Err(ParseError::InvalidFilter(other.to_string())),
        },
    }
}

/// Suggests valid commands for an unknown one: prefix matches first, then
/// anything above the character-frequency similarity threshold.
fn suggest(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<String> = Vec::new();

    for &cmd in KNOWN_COMMANDS {
        let is_prefix = cmd.starts_with(input) && cmd != input;
        if is_prefix || similarity(input, cmd) > SUGGESTION_THRESHOLD {
            suggestions.push(cmd.to_string());
        }
    }

    suggestions
}

/// Similarity ratio between two strings based on shared character counts,
/// in the range 0.0 to 1.0.
fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }

    let mut seen: Vec<char> = a.chars().chain(b.chars()).collect();
    seen.sort_unstable();
    seen.dedup();

    let common: usize = seen
        .iter()
        .map(|&c| {
            let in_a = a.chars().filter(|&x| x == c).count();
            let in_b = b.chars().filter(|&x| x == c).count();
            in_a.min(in_b)
        })
        .sum();

    (2 * common) as f64 / total as f64
}
