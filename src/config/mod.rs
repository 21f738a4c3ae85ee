mod config;

pub use config::{ConfigCreationError, MAX_INDENT_WIDTH, NamespaceConfig, RestorePolicy};
