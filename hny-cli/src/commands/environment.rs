//! Environment command handlers

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use hny_core::domain::environment::Environment;

use crate::config::Config;
use crate::output::{OutputFormat, Table, TableDisplay, or_dash, write_empty, write_field};

/// Environment subcommands
#[derive(Subcommand)]
pub enum EnvironmentCommands {
    /// List environments of the team
    List,
    /// Get environment details
    Get {
        /// Environment ID
        id: String,
    },
}

/// Handle environment commands
///
/// # Arguments
/// * `command` - The environment command to execute
/// * `config` - The CLI configuration
pub async fn handle_environment_command(
    command: EnvironmentCommands,
    config: &Config,
) -> Result<()> {
    let client = config.management_client()?;
    let output = OutputFormat::new(config.format);

    match command {
        EnvironmentCommands::List => {
            let environments = client
                .list_environments()
                .await
                .context("Failed to list environments")?;
            output.print(&environments)
        }
        EnvironmentCommands::Get { id } => {
            let environment = client
                .get_environment(&id)
                .await
                .with_context(|| format!("Failed to get environment '{}'", id))?;
            output.print(&environment)
        }
    }
}

impl TableDisplay for Vec<Environment> {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.is_empty() {
            return write_empty(writer, "environments");
        }

        let mut table = Table::new(["ID", "NAME", "SLUG", "PROTECTED"]);
        for env in self {
            table.row([
                env.id.clone(),
                env.name.clone(),
                env.slug.clone(),
                if env.delete_protected { "yes" } else { "no" }.to_string(),
            ]);
        }
        table.write(writer)
    }
}

impl TableDisplay for Environment {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", "Environment Details:".bold())?;
        write_field(writer, "ID", &self.id, 11)?;
        write_field(writer, "Name", &self.name, 11)?;
        write_field(writer, "Slug", &self.slug, 11)?;
        write_field(writer, "Description", &or_dash(self.description.as_deref()), 11)?;
        write_field(writer, "Color", &or_dash(self.color.as_deref()), 11)?;
        write_field(
            writer,
            "Protected",
            if self.delete_protected { "yes" } else { "no" },
            11,
        )?;
        Ok(())
    }
}
