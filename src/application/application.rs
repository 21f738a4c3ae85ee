use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::config::{ConfigCreationError, NamespaceConfig};
use crate::ext::AsyncTryFrom;
use crate::namespace::NamespaceTree;
use crate::session::{Script, ScriptLoadError, Session, SessionError, SessionReport};

pub struct Application;

impl Application {
    pub async fn run(
        runtime_config: impl Into<RuntimeConfig>,
    ) -> Result<SessionReport, ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        let config = NamespaceConfig::read(&runtime_config.root)
            .await
            .context(ConfigSnafu)?;
        debug!("Loaded config: {:?}", config);

        let script = match &runtime_config.script {
            Some(path) => Script::async_try_from(path.as_path())
                .await
                .context(ScriptSnafu)?,
            None => {
                info!("No script given, running the built-in demo");
                Script::demo()
            }
        };
        debug!("Running script with {} commands", script.len());

        let tree = NamespaceTree::with_config(&config);
        let report = Session::new(tree, runtime_config.strict)
            .run(&script)
            .context(SessionSnafu)?;

        Ok(report)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    ConfigError { source: ConfigCreationError },
    #[snafu(display("Critical failure encountered while loading the script"))]
    ScriptError { source: ScriptLoadError },
    #[snafu(display("Critical failure encountered during session execution"))]
    SessionError { source: SessionError },
}
