//! cli
//!
//! Command-line interface layer for questline.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration once and build the invocation [`Context`]
//! - Delegate to command handlers
//!
//! A configuration failure is fatal: the error is logged and the
//! process exits non-zero before any command runs. `completion` is the
//! one command that works without credentials.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;

use crate::api::ApiClient;
use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Per-invocation context threaded through command handlers.
#[derive(Debug)]
pub struct Context {
    /// Loaded credentials and preferences. Immutable after load.
    pub config: Config,
    /// Output verbosity from the global flags.
    pub verbosity: Verbosity,
    /// Effective checklist display: the config preference, toggled by
    /// the `--checklists` flag.
    pub checklists: bool,
}

impl Context {
    /// Build an API client for this invocation's credentials.
    pub fn client(&self) -> ApiClient {
        ApiClient::from_config(&self.config)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    // Completion needs no credentials; handle it before config loading.
    if let args::Command::Completion { shell } = cli.command {
        return commands::completion(shell);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(e);
            std::process::exit(1);
        }
    };

    let checklists = config.service.checklists ^ cli.checklists;
    let ctx = Context {
        config,
        verbosity,
        checklists,
    };

    commands::dispatch(cli.command, &ctx)
}
