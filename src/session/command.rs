use std::str::FromStr;

use snafu::prelude::*;

use crate::namespace::NodeKind;

/// A single operation of a session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { path: String, kind: NodeKind },
    Delete { path: String },
    Undo,
    Tree,
    Stat { path: String },
    Write { path: String, payload: String },
    Cat { path: String },
    Echo { text: String },
}

impl Command {
    pub fn mkdir(path: impl Into<String>) -> Self {
        Command::Create {
            path: path.into(),
            kind: NodeKind::Directory,
        }
    }

    pub fn touch(path: impl Into<String>) -> Self {
        Command::Create {
            path: path.into(),
            kind: NodeKind::File,
        }
    }

    /// The script keyword this command is written with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Create {
                kind: NodeKind::Directory,
                ..
            } => "mkdir",
            Command::Create {
                kind: NodeKind::File,
                ..
            } => "touch",
            Command::Delete { .. } => "rm",
            Command::Undo => "undo",
            Command::Tree => "tree",
            Command::Stat { .. } => "stat",
            Command::Write { .. } => "write",
            Command::Cat { .. } => "cat",
            Command::Echo { .. } => "echo",
        }
    }
}

/// Splits off the first whitespace-delimited word, returning it and the trimmed rest.
fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], input[end..].trim())),
        None => Some((input, "")),
    }
}

fn single_argument(command: &str, rest: &str) -> Result<String, CommandParseError> {
    let (argument, extra) = next_word(rest).context(MissingArgumentSnafu {
        command,
        argument: "path",
    })?;
    ensure!(
        extra.is_empty(),
        UnexpectedArgumentSnafu {
            command,
            argument: extra
        }
    );
    Ok(argument.to_string())
}

fn no_argument(command: &str, rest: &str) -> Result<(), CommandParseError> {
    ensure!(
        rest.is_empty(),
        UnexpectedArgumentSnafu {
            command,
            argument: rest
        }
    );
    Ok(())
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (keyword, rest) = next_word(line).context(EmptyCommandSnafu)?;
        let command = match keyword {
            "mkdir" => Command::mkdir(single_argument(keyword, rest)?),
            "touch" => Command::touch(single_argument(keyword, rest)?),
            "rm" => Command::Delete {
                path: single_argument(keyword, rest)?,
            },
            "undo" => {
                no_argument(keyword, rest)?;
                Command::Undo
            }
            "tree" => {
                no_argument(keyword, rest)?;
                Command::Tree
            }
            "stat" => Command::Stat {
                path: single_argument(keyword, rest)?,
            },
            "cat" => Command::Cat {
                path: single_argument(keyword, rest)?,
            },
            "write" => {
                let (path, payload) = next_word(rest).context(MissingArgumentSnafu {
                    command: keyword,
                    argument: "path",
                })?;
                Command::Write {
                    path: path.to_string(),
                    payload: payload.to_string(),
                }
            }
            "echo" => Command::Echo {
                text: rest.to_string(),
            },
            _ => return UnknownCommandSnafu { name: keyword }.fail(),
        };
        Ok(command)
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CommandParseError {
    #[snafu(display("Empty command"))]
    EmptyCommand,
    #[snafu(display("Unknown command '{}'", name))]
    UnknownCommand { name: String },
    #[snafu(display("Command '{}' is missing its {} argument", command, argument))]
    MissingArgument { command: String, argument: String },
    #[snafu(display("Command '{}' got unexpected argument '{}'", command, argument))]
    UnexpectedArgument { command: String, argument: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("mkdir /documents", Command::mkdir("/documents"))]
    #[case("touch /music/song1.mp3", Command::touch("/music/song1.mp3"))]
    #[case(
        "  rm   /documents/file1.txt  ",
        Command::Delete { path: "/documents/file1.txt".into() }
    )]
    #[case("undo", Command::Undo)]
    #[case("tree", Command::Tree)]
    #[case("stat /", Command::Stat { path: "/".into() })]
    #[case("cat /a.txt", Command::Cat { path: "/a.txt".into() })]
    #[case("echo File system structure:", Command::Echo { text: "File system structure:".into() })]
    #[case("echo", Command::Echo { text: String::new() })]
    fn parses_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(line.parse::<Command>(), Ok(expected));
    }

    #[test]
    fn write_keeps_the_rest_of_the_line_as_payload() {
        let command: Command = "write /notes.txt hello   there world".parse().unwrap();
        assert_eq!(
            command,
            Command::Write {
                path: "/notes.txt".into(),
                payload: "hello   there world".into()
            }
        );
    }

    #[test]
    fn write_without_text_clears_payload() {
        let command: Command = "write /notes.txt".parse().unwrap();
        assert_eq!(
            command,
            Command::Write {
                path: "/notes.txt".into(),
                payload: String::new()
            }
        );
    }

    #[rstest]
    #[case("mkdir")]
    #[case("rm   ")]
    #[case("write")]
    fn missing_path_is_reported(#[case] line: &str) {
        assert!(matches!(
            line.parse::<Command>(),
            Err(CommandParseError::MissingArgument { .. })
        ));
    }

    #[rstest]
    #[case("undo now", "now")]
    #[case("tree /", "/")]
    #[case("mkdir /a /b", "/b")]
    fn extra_arguments_are_reported(#[case] line: &str, #[case] extra: &str) {
        match line.parse::<Command>() {
            Err(CommandParseError::UnexpectedArgument { argument, .. }) => {
                assert_eq!(argument, extra)
            }
            other => panic!("Expected UnexpectedArgument, got {:?}", other),
        }
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            "mv /a /b".parse::<Command>(),
            Err(CommandParseError::UnknownCommand { name: "mv".into() })
        );
    }

    #[test]
    fn keyword_matches_parsed_form() {
        let lines = [
            "mkdir /a", "touch /a", "rm /a", "undo", "tree", "stat /a", "cat /a", "echo hi",
        ];
        for line in lines {
            let command: Command = line.parse().unwrap();
            assert!(line.starts_with(command.keyword()));
        }
    }
}
