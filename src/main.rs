use clap::Parser as _;
use tracing::debug;

use nstree::{
    application::{Application, ApplicationError},
    cli::Cli,
};

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    cli_args.color.apply();
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args).await?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
