use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Script to run; the built-in demo runs when absent.
    pub script: Option<PathBuf>,
    /// Directory searched for `nstree.yaml`.
    pub root: PathBuf,
    pub strict: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            script: cli.script,
            root: cli.root,
            strict: cli.strict,
        }
    }
}
