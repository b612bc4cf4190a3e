//! The interactive read-eval loop
//!
//! One command per line; parse and service errors are printed and the loop
//! continues. The session ends on `exit`/`quit` or end of input.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::command::{Command, ParseError};
use super::format;
use super::output::Output;
use crate::domain::TaskId;
use crate::service::{ServiceError, TaskService};

/// Commands retained for the `history` command
const HISTORY_LIMIT: usize = 100;

/// An interactive session over a task service
pub struct Session {
    service: TaskService,
    output: Output,
    history: Vec<String>,
    running: bool,
}

impl Session {
    pub fn new(output: Output) -> Self {
        Self {
            service: TaskService::new(),
            output,
            history: Vec::new(),
            running: true,
        }
    }

    /// Runs the loop until `exit`/`quit` or EOF on the reader.
    ///
    /// Only I/O failures on stdin/stdout are fatal; everything the user can
    /// type is recovered locally.
    pub fn run(&mut self, mut input: impl BufRead) -> Result<()> {
        self.output.text(format::welcome());

        while self.running {
            self.prompt()?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .context("Failed to read from stdin")?;
            if read == 0 {
                // EOF behaves like `exit`
                self.output.verbose_ctx("session", "End of input, leaving");
                self.output.text(format::goodbye());
                break;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            self.remember(line);
            self.output.verbose_ctx("session", &format!("Input: {}", line));

            match Command::parse(line) {
                Ok(Some(command)) => self.execute(command),
                Ok(None) => {}
                Err(e) => self.report_parse_error(e),
            }
        }

        Ok(())
    }

    /// Dispatches a parsed command against the service
    fn execute(&mut self, command: Command) {
        match command {
            Command::Add { title } => match self.service.add(&title) {
                Ok(task) => {
                    if self.output.is_json() {
                        self.output.data(task);
                    } else {
                        self.output
                            .success(&format!("Added task {}: {}", task.id, task.title));
                    }
                }
                Err(e) => self.report_service_error(e),
            },

            Command::List { filter } => {
                let tasks = self.service.filtered(filter);
                self.output
                    .verbose_ctx("list", &format!("{} task(s) match {:?}", tasks.len(), filter));
                if self.output.is_json() {
                    self.output.data(&tasks);
                } else {
                    self.output.text(&format::task_list(&tasks, filter));
                }
            }

            Command::Update { id, title } => match self.service.update(id, &title) {
                Ok(task) => {
                    if self.output.is_json() {
                        self.output.data(task);
                    } else {
                        self.output
                            .success(&format!("Updated task {}: {}", task.id, task.title));
                    }
                }
                Err(e) => self.report_service_error(e),
            },

            Command::Delete { id } => match self.service.delete(id) {
                Ok(task) => {
                    if self.output.is_json() {
                        self.output
                            .data(&serde_json::json!({ "deleted": task.id }));
                    } else {
                        self.output.success(&format!("Deleted task {}", task.id));
                    }
                }
                Err(e) => self.report_service_error(e),
            },

            Command::Complete { id } => self.set_completed(id, true),
            Command::Incomplete { id } => self.set_completed(id, false),

            Command::History => {
                if self.output.is_json() {
                    self.output
                        .data(&serde_json::json!({ "history": self.history }));
                } else {
                    self.output.text(&format::history(&self.history));
                }
            }

            Command::Help => {
                if self.output.is_json() {
                    self.output.data(&serde_json::json!({ "help": format::help() }));
                } else {
                    self.output.text(format::help());
                }
            }

            Command::Exit => {
                self.running = false;
                self.output.text(format::goodbye());
            }
        }
    }

    fn set_completed(&mut self, id: TaskId, completed: bool) {
        match self.service.set_completed(id, completed) {
            Ok(task) => {
                if self.output.is_json() {
                    self.output.data(task);
                } else {
                    let state = if completed { "complete" } else { "incomplete" };
                    self.output
                        .success(&format!("Task {} marked as {}", task.id, state));
                }
            }
            Err(e) => self.report_service_error(e),
        }
    }

    fn report_parse_error(&self, error: ParseError) {
        self.output.error(&error.to_string());

        if let ParseError::UnknownCommand { suggestions, .. } = &error {
            if suggestions.is_empty() {
                self.output
                    .text("Type 'help' for available commands.");
            } else {
                for suggestion in suggestions {
                    self.output.text(&format!("Did you mean '{}'?", suggestion));
                }
            }
        }
    }

    fn report_service_error(&self, error: ServiceError) {
        self.output.error(&error.to_string());
    }

    /// Records an input line, dropping the oldest past the cap
    fn remember(&mut self, line: &str) {
        self.history.push(line.to_string());
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }

    /// Writes the prompt (text mode only, JSON drivers don't want one)
    fn prompt(&self) -> Result<()> {
        if !self.output.is_json() {
            let mut stdout = std::io::stdout();
            write!(stdout, "> ").context("Failed to write prompt")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
        Ok(())
    }
}
