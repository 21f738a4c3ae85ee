use std::fmt;
use std::io::{self, Write};

use colored::Colorize;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::namespace::{
    CreateError, DeleteError, NamespaceTree, NavigationError, NodeKind, PayloadError, UndoError,
};

use super::{Command, Script};

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { kind: NodeKind, name: String },
    Deleted { name: String },
    Restored { name: String },
    Listing(String),
    Status {
        kind: NodeKind,
        name: String,
        children: usize,
        payload_len: usize,
    },
    Written { name: String },
    Content(String),
    Message(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created {
                kind: NodeKind::Directory,
                name,
            } => write!(f, "Directory created: {}", name),
            Outcome::Created {
                kind: NodeKind::File,
                name,
            } => write!(f, "File created: {}", name),
            Outcome::Deleted { name } => write!(f, "Deleted: {}", name),
            Outcome::Restored { name } => write!(f, "Undo successful, restored: {}", name),
            Outcome::Listing(listing) => write!(f, "{}", listing.trim_end()),
            Outcome::Status {
                kind,
                name,
                children,
                payload_len,
            } => write!(
                f,
                "{}: {} ({} children, {} bytes)",
                kind, name, children, payload_len
            ),
            Outcome::Written { name } => write!(f, "Written: {}", name),
            Outcome::Content(text) | Outcome::Message(text) => write!(f, "{}", text),
        }
    }
}

/// Totals of a finished session run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs commands against a single namespace it owns.
#[derive(Debug)]
pub struct Session {
    tree: NamespaceTree,
    strict: bool,
}

impl Session {
    /// With `strict` set, [`Session::run`] stops at the first failing command.
    pub fn new(tree: NamespaceTree, strict: bool) -> Self {
        Session { tree, strict }
    }

    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    pub fn into_tree(self) -> NamespaceTree {
        self.tree
    }

    pub fn execute(&mut self, command: &Command) -> Result<Outcome, CommandError> {
        debug!("Executing command: {:?}", command);
        let outcome = match command {
            Command::Create { path, kind } => {
                self.tree.create(path, *kind)?;
                Outcome::Created {
                    kind: *kind,
                    name: leaf_name(path),
                }
            }
            Command::Delete { path } => {
                self.tree.delete(path)?;
                Outcome::Deleted {
                    name: leaf_name(path),
                }
            }
            Command::Undo => Outcome::Restored {
                name: self.tree.undo()?,
            },
            Command::Tree => Outcome::Listing(self.tree.display()),
            Command::Stat { path } => {
                let node = self.tree.navigate(path)?;
                Outcome::Status {
                    kind: node.kind(),
                    name: node.name().to_string(),
                    children: node.children().count(),
                    payload_len: node.payload().len(),
                }
            }
            Command::Write { path, payload } => {
                self.tree.write(path, payload.as_str())?;
                Outcome::Written {
                    name: leaf_name(path),
                }
            }
            Command::Cat { path } => Outcome::Content(self.tree.read(path)?.to_string()),
            Command::Echo { text } => Outcome::Message(text.clone()),
        };
        Ok(outcome)
    }

    /// Executes every line of `script`, printing each outcome to stdout and
    /// each failure to stderr.
    ///
    /// Failures are counted and reported; they only abort the run in strict mode.
    pub fn run(&mut self, script: &Script) -> Result<SessionReport, SessionError> {
        self.run_with_output(script, &mut io::stdout().lock(), &mut io::stderr().lock())
    }

    fn run_with_output(
        &mut self,
        script: &Script,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<SessionReport, SessionError> {
        let mut report = SessionReport::default();

        for script_line in script.lines() {
            match self.execute(&script_line.command) {
                Ok(outcome) => {
                    report.succeeded += 1;
                    let _ = writeln!(out, "{}", outcome);
                }
                Err(error) => {
                    report.failed += 1;
                    let _ = writeln!(err, "{} {}", "error:".red().bold(), error);
                    if self.strict {
                        return Err(error).context(CommandFailedSnafu {
                            line: script_line.line,
                            command: script_line.command.keyword(),
                        });
                    }
                }
            }
        }

        info!(
            "Session finished: {} succeeded, {} failed",
            report.succeeded, report.failed
        );
        Ok(report)
    }
}

fn leaf_name(path: &str) -> String {
    crate::namespace::split_path(path)
        .last()
        .map_or_else(|| path.to_string(), |name| name.to_string())
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CommandError {
    #[snafu(context(false), display("{}", source))]
    Create { source: CreateError },
    #[snafu(context(false), display("{}", source))]
    Delete { source: DeleteError },
    #[snafu(context(false), display("{}", source))]
    Undo { source: UndoError },
    #[snafu(context(false), display("{}", source))]
    Navigation { source: NavigationError },
    #[snafu(context(false), display("{}", source))]
    Payload { source: PayloadError },
}

#[derive(Debug, Snafu)]
pub enum SessionError {
    #[snafu(display("Command '{}' on line {} failed", command, line))]
    CommandFailed {
        line: usize,
        command: String,
        source: CommandError,
    },
}
