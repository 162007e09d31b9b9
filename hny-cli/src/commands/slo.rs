//! SLO command handlers

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use hny_core::domain::slo::Slo;

use crate::config::Config;
use crate::output::{OutputFormat, Table, TableDisplay, or_dash, write_empty, write_field};

/// SLO subcommands
#[derive(Subcommand)]
pub enum SloCommands {
    /// List SLOs on a dataset
    List {
        /// Dataset slug
        #[arg(short, long)]
        dataset: String,
    },
    /// Get SLO details
    Get {
        /// SLO ID
        id: String,

        /// Dataset slug
        #[arg(short, long)]
        dataset: String,
    },
}

/// Handle SLO commands
///
/// # Arguments
/// * `command` - The SLO command to execute
/// * `config` - The CLI configuration
pub async fn handle_slo_command(command: SloCommands, config: &Config) -> Result<()> {
    let client = config.client()?;
    let output = OutputFormat::new(config.format);

    match command {
        SloCommands::List { dataset } => {
            let slos = client
                .list_slos(&dataset)
                .await
                .with_context(|| format!("Failed to list SLOs on '{}'", dataset))?;
            output.print(&slos)
        }
        SloCommands::Get { id, dataset } => {
            let slo = client
                .get_slo(&dataset, &id)
                .await
                .with_context(|| format!("Failed to get SLO '{}'", id))?;
            output.print(&slo)
        }
    }
}

impl TableDisplay for Vec<Slo> {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.is_empty() {
            return write_empty(writer, "SLOs");
        }

        let mut table = Table::new(["ID", "NAME", "TARGET", "PERIOD", "SLI"]);
        for slo in self {
            table.row([
                slo.id.clone(),
                slo.name.clone(),
                format!("{}%", slo.target_percent()),
                format!("{}d", slo.time_period_days),
                slo.sli.alias.clone(),
            ]);
        }
        table.write(writer)
    }
}

impl TableDisplay for Slo {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", "SLO Details:".bold())?;
        write_field(writer, "ID", &self.id, 11)?;
        write_field(writer, "Name", &self.name, 11)?;
        write_field(writer, "Description", &or_dash(self.description.as_deref()), 11)?;
        write_field(writer, "Target", &format!("{}%", self.target_percent()), 11)?;
        write_field(writer, "Period", &format!("{} days", self.time_period_days), 11)?;
        write_field(writer, "SLI", &self.sli.alias, 11)?;
        Ok(())
    }
}
