//! reqcheck - compose, send and record HTTP requests
//!
//! Wires the infrastructure adapters into the application core and exposes
//! the command-line surface.

pub mod app;
pub mod cli;
pub mod console;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use reqcheck_application::SendError;
use reqcheck_domain::DomainError;
use reqcheck_infrastructure::{ConfigLoader, ConfigOverrides};

pub use app::App;
pub use cli::{Cli, Command, SendArgs};
pub use console::ConsoleNotifier;

/// Loads configuration, opens the workspace and runs the parsed command.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the command fails.
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let env = ConfigOverrides::from_env()?;
    let config = ConfigLoader::new().load(env, cli.overrides()).await?;
    tracing::debug!(workspace = %config.workspace_dir.display(), "workspace selected");

    let mut app = App::open(&config, Arc::new(ConsoleNotifier::default())).await?;
    app.execute(cli.command, out).await
}

/// Whether the error was already shown to the user as a notice.
#[must_use]
pub fn already_reported(error: &anyhow::Error) -> bool {
    error.downcast_ref::<SendError>().is_some()
        || matches!(
            error.downcast_ref::<DomainError>(),
            Some(DomainError::EmptyVariableName)
        )
}
