use std::path::Path;

use compio::fs;
use snafu::prelude::*;
use tracing::debug;

use crate::ext::{AsyncTryFrom, BestEffortPathExt};

use super::{Command, CommandParseError};

const COMMENT_PREFIX: char = '#';

/// A command together with the script line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// An ordered list of commands to run against one namespace.
///
/// Scripts are plain text, one command per line. Blank lines and lines
/// starting with `#` are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    lines: Vec<ScriptLine>,
}

impl Script {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        let lines = commands
            .into_iter()
            .enumerate()
            .map(|(index, command)| ScriptLine {
                line: index + 1,
                command,
            })
            .collect();
        Script { lines }
    }

    /// The built-in walkthrough: builds a small tree, deletes a file and
    /// restores it, printing the tree before and after.
    pub fn demo() -> Self {
        Self::new([
            Command::mkdir("/documents"),
            Command::mkdir("/documents/photos"),
            Command::mkdir("/music"),
            Command::touch("/documents/file1.txt"),
            Command::touch("/documents/photos/photo1.png"),
            Command::touch("/music/song1.mp3"),
            Command::Echo {
                text: "File system structure:".into(),
            },
            Command::Tree,
            Command::Delete {
                path: "/documents/file1.txt".into(),
            },
            Command::Undo,
            Command::Echo {
                text: String::new(),
            },
            Command::Echo {
                text: "File system after undo:".into(),
            },
            Command::Tree,
        ])
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl TryFrom<&str> for Script {
    type Error = ScriptLoadError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let lines = contents
            .lines()
            .enumerate()
            .map(|(index, text)| (index + 1, text.trim()))
            .filter(|(_, text)| !text.is_empty() && !text.starts_with(COMMENT_PREFIX))
            .map(|(line, text)| {
                text.parse::<Command>()
                    .map(|command| ScriptLine { line, command })
                    .context(ParseSnafu { line })
            })
            .collect::<Result<Vec<_>, ScriptLoadError>>()?;

        debug!("Parsed script with {} commands", lines.len());
        Ok(Script { lines })
    }
}

impl<'a> AsyncTryFrom<&'a Path> for Script {
    type Error = ScriptLoadError;

    async fn async_try_from(path: &'a Path) -> Result<Self, Self::Error> {
        debug!("Reading script file: {}", path.best_effort_path_display());
        let bytes = fs::read(path).await.context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        let contents = String::from_utf8(bytes).context(NotUtf8Snafu {
            file_path: path.best_effort_path_display(),
        })?;
        contents.as_str().try_into()
    }
}

#[derive(Debug, Snafu)]
pub enum ScriptLoadError {
    #[snafu(display("Failed to read the script file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Script file {} is not valid UTF-8", file_path))]
    NotUtf8 {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Invalid command on line {}", line))]
    ParseError {
        line: usize,
        source: CommandParseError,
    },
}
