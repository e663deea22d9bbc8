//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use reqcheck_domain::HttpMethod;
use reqcheck_infrastructure::ConfigOverrides;

/// Compose, send and record HTTP requests.
#[derive(Debug, Parser)]
#[command(name = "reqcheck", version, about)]
pub struct Cli {
    /// Workspace directory holding the store, history and variable files.
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Configuration values given on the command line.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            workspace_dir: self.workspace.clone(),
            request_timeout_secs: self.timeout,
        }
    }
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List saved requests.
    List,
    /// Print a saved request.
    Show {
        /// Catalog index.
        index: usize,
    },
    /// Send a request, saving it first.
    Send(SendArgs),
    /// Delete a saved request.
    Delete {
        /// Catalog index.
        index: usize,
    },
    /// List global variables.
    Vars,
    /// Add or update a global variable.
    VarSet {
        /// Variable name.
        name: String,
        /// Value, or `[filename]` to read it from the variables directory.
        value: String,
    },
    /// Delete a global variable.
    VarDelete {
        /// Variable name.
        name: String,
    },
    /// Print a history record in full.
    History {
        /// Record id, with or without the `.txt` extension.
        record: String,
    },
}

/// Arguments for `send`.
///
/// With `--index`, fields not given here are taken from the saved request,
/// which is then updated. Without it a new request is saved.
#[derive(Debug, Default, Args)]
pub struct SendArgs {
    /// Saved request to send.
    #[arg(long)]
    pub index: Option<usize>,

    /// GET, POST, PUT or DELETE.
    #[arg(long)]
    pub method: Option<HttpMethod>,

    /// Free-form description.
    #[arg(long)]
    pub description: Option<String>,

    /// Target URL. May contain `{{name}}` placeholders.
    #[arg(long)]
    pub url: Option<String>,

    /// A `Name: value` header line. Repeat for more headers.
    #[arg(long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Request body.
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the request body from a file.
    #[arg(long, value_name = "FILE")]
    pub body_file: Option<PathBuf>,
}
