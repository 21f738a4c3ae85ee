use std::{
    borrow::Cow,
    io::ErrorKind,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use compio::fs;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, info};

use crate::ext::BestEffortPathExt;

const CONFIG_FILE_NAME: &str = "nstree.yaml";
const DEFAULT_INDENT_WIDTH: usize = 2;
/// Widest indent per depth level a listing may use.
pub const MAX_INDENT_WIDTH: usize = 16;

fn get_config_file_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// What `undo` does when the root already holds an entry with the restored name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestorePolicy {
    /// Fail the undo and keep the deleted node pending.
    #[default]
    Reject,
    /// Replace the existing root entry with the restored node.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceConfig {
    /// Spaces per depth level in tree listings.
    pub indent_width: usize,
    /// How many deleted nodes are kept for undo.
    pub undo_depth: NonZeroUsize,
    pub restore_policy: RestorePolicy,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        NamespaceConfig {
            indent_width: DEFAULT_INDENT_WIDTH,
            undo_depth: NonZeroUsize::MIN,
            restore_policy: RestorePolicy::default(),
        }
    }
}

impl NamespaceConfig {
    /// Reads `nstree.yaml` from `root`, falling back to defaults when it does not exist.
    pub async fn read(root: &Path) -> Result<Self, ConfigCreationError> {
        let path = get_config_file_path(root);
        debug!("Opening config file: {}", path.best_effort_path_display());

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).context(ReadSnafu {
                    file_path: path.best_effort_path_display(),
                });
            }
        };
        debug!("Successfully read config file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(NotUtf8Snafu {
            file_path: path.best_effort_path_display(),
        })?;
        Self::try_from(contents.as_str())
    }

    fn apply_display_section(
        &mut self,
        section: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<(), ConfigCreationError> {
        for (key, value) in section {
            match key.as_str() {
                Some("indent") => {
                    self.indent_width = usize::try_from(integer_value("display.indent", value)?)
                        .ok()
                        .filter(|width| *width <= MAX_INDENT_WIDTH)
                        .context(InvalidValueSnafu {
                            key: "display.indent",
                            reason: format!("must be between 0 and {}", MAX_INDENT_WIDTH),
                        })?;
                }
                other => debug!("Ignoring unknown display setting: {:?}", other),
            }
        }
        Ok(())
    }

    fn apply_undo_section(
        &mut self,
        section: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<(), ConfigCreationError> {
        for (key, value) in section {
            match key.as_str() {
                Some("depth") => {
                    self.undo_depth = usize::try_from(integer_value("undo.depth", value)?)
                        .ok()
                        .and_then(NonZeroUsize::new)
                        .context(InvalidValueSnafu {
                            key: "undo.depth",
                            reason: "must be at least 1",
                        })?;
                }
                Some("on_conflict") => {
                    self.restore_policy = match value.as_str() {
                        Some("reject") => RestorePolicy::Reject,
                        Some("overwrite") => RestorePolicy::Overwrite,
                        _ => {
                            return InvalidValueSnafu {
                                key: "undo.on_conflict",
                                reason: "expected 'reject' or 'overwrite'",
                            }
                            .fail();
                        }
                    };
                }
                other => debug!("Ignoring unknown undo setting: {:?}", other),
            }
        }
        Ok(())
    }
}

fn integer_value(key: &str, value: &Yaml) -> Result<i64, ConfigCreationError> {
    match value {
        Yaml::Value(Scalar::Integer(n)) => Ok(*n),
        _ => InvalidValueSnafu {
            key,
            reason: "expected an integer",
        }
        .fail(),
    }
}

fn section<'a, 'input>(
    top_level: &'a LinkedHashMap<Yaml<'input>, Yaml<'input>>,
    name: &'static str,
) -> Result<Option<&'a LinkedHashMap<Yaml<'input>, Yaml<'input>>>, ConfigCreationError> {
    match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(name)))) {
        None => Ok(None),
        Some(value) => value
            .as_mapping()
            .map(Some)
            .context(InvalidValueSnafu {
                key: name,
                reason: "section should be a map",
            }),
    }
}

impl TryFrom<&str> for NamespaceConfig {
    type Error = ConfigCreationError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedConfigSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let mut config = NamespaceConfig::default();
        if let Some(display) = section(top_level, "display")? {
            config.apply_display_section(display)?;
        }
        if let Some(undo) = section(top_level, "undo")? {
            config.apply_undo_section(undo)?;
        }

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }
}

#[derive(Debug, Snafu)]
pub enum ConfigCreationError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Config file {} is not valid UTF-8", file_path))]
    NotUtf8 {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Invalid value for '{}': {}", key, reason))]
    InvalidValue { key: String, reason: String },
}
