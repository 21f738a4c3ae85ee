//! Scripted sessions over a namespace.
//!
//! A [`Script`] is parsed from text into [`Command`]s, and a [`Session`]
//! executes them against the [`NamespaceTree`](crate::namespace::NamespaceTree)
//! it owns, printing an advisory line for every command.

mod command;
mod script;
mod session;

pub use command::{Command, CommandParseError};
pub use script::{Script, ScriptLine, ScriptLoadError};
pub use session::{CommandError, Outcome, Session, SessionError, SessionReport};
