use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Build, inspect and undo changes to an in-memory directory tree.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Command script to run; the built-in demo runs when omitted
    pub script: Option<PathBuf>,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The directory holding nstree.yaml
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Stop at the first failing command
    #[clap(long)]
    pub strict: bool,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
