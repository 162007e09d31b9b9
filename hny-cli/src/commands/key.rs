//! API key command handlers

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use hny_core::domain::key::ApiKey;

use crate::config::Config;
use crate::output::{OutputFormat, Table, TableDisplay, or_dash, write_empty};

/// API key subcommands
#[derive(Subcommand)]
pub enum KeyCommands {
    /// List API keys of the team
    List {
        /// Only show keys of this environment ID
        #[arg(short, long)]
        environment: Option<String>,
    },
}

/// Handle API key commands
///
/// # Arguments
/// * `command` - The key command to execute
/// * `config` - The CLI configuration
pub async fn handle_key_command(command: KeyCommands, config: &Config) -> Result<()> {
    let client = config.management_client()?;
    let output = OutputFormat::new(config.format);

    match command {
        KeyCommands::List { environment } => {
            let keys = client
                .list_api_keys(environment.as_deref())
                .await
                .context("Failed to list API keys")?;
            output.print(&keys)
        }
    }
}

impl TableDisplay for Vec<ApiKey> {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.is_empty() {
            return write_empty(writer, "API keys");
        }

        let mut table = Table::new(["ID", "NAME", "TYPE", "ENVIRONMENT", "STATUS"]);
        for key in self {
            let status = if key.disabled {
                "disabled".red().to_string()
            } else {
                "enabled".green().to_string()
            };
            table.row([
                key.id.clone(),
                or_dash(key.name.as_deref()),
                or_dash(key.key_type.as_deref()),
                or_dash(key.environment_id.as_deref()),
                status,
            ]);
        }
        table.write(writer)
    }
}
