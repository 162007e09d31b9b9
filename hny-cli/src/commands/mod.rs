//! Commands module
//!
//! Defines all CLI commands and their handlers. Each handler reads its flags,
//! makes one client call and hands the response to the output formatter.

mod auth;
mod board;
mod dataset;
mod environment;
mod key;
mod marker;
mod query;
mod slo;

pub use board::BoardCommands;
pub use dataset::DatasetCommands;
pub use environment::EnvironmentCommands;
pub use key::KeyCommands;
pub use marker::MarkerCommands;
pub use query::QueryCommands;
pub use slo::SloCommands;

use anyhow::Result;
use clap::Subcommand;
use tokio_util::sync::CancellationToken;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the team, environment and permissions of the configured key
    Auth,
    /// Dataset management
    Dataset {
        #[command(subcommand)]
        command: DatasetCommands,
    },
    /// Board management
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },
    /// Marker management
    Marker {
        #[command(subcommand)]
        command: MarkerCommands,
    },
    /// Service level objectives
    Slo {
        #[command(subcommand)]
        command: SloCommands,
    },
    /// Run and inspect queries
    Query {
        #[command(subcommand)]
        command: QueryCommands,
    },
    /// API key management (requires a management key)
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
    /// Environment management (requires a management key)
    #[command(alias = "env")]
    Environment {
        #[command(subcommand)]
        command: EnvironmentCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
/// * `ctx` - Cancelled when the user interrupts the process
pub async fn handle_command(
    command: Commands,
    config: &Config,
    ctx: &CancellationToken,
) -> Result<()> {
    match command {
        Commands::Auth => auth::show_auth(config).await,
        Commands::Dataset { command } => dataset::handle_dataset_command(command, config).await,
        Commands::Board { command } => board::handle_board_command(command, config).await,
        Commands::Marker { command } => marker::handle_marker_command(command, config).await,
        Commands::Slo { command } => slo::handle_slo_command(command, config).await,
        Commands::Query { command } => query::handle_query_command(command, config, ctx).await,
        Commands::Key { command } => key::handle_key_command(command, config).await,
        Commands::Environment { command } => {
            environment::handle_environment_command(command, config).await
        }
    }
}
