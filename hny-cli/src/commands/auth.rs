//! Auth command handler

use std::io::Write;

use anyhow::{Context, Result};
use colored::*;
use hny_core::domain::auth::AuthInfo;

use crate::config::Config;
use crate::output::{OutputFormat, TableDisplay, write_field};

/// Describe the configured key
pub async fn show_auth(config: &Config) -> Result<()> {
    let client = config.client()?;
    let auth = client
        .get_auth()
        .await
        .context("Failed to fetch key details")?;

    OutputFormat::new(config.format).print(&auth)
}

impl TableDisplay for AuthInfo {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", "Key Details:".bold())?;
        write_field(writer, "ID", &self.id, 12)?;
        write_field(
            writer,
            "Type",
            self.key_type.as_deref().unwrap_or("unknown"),
            12,
        )?;
        write_field(
            writer,
            "Team",
            &format!("{} ({})", self.team.name, self.team.slug),
            12,
        )?;
        write_field(
            writer,
            "Environment",
            &format!("{} ({})", self.environment.name, self.environment.slug),
            12,
        )?;

        let granted = self.granted();
        if !granted.is_empty() {
            writeln!(writer, "\n{}", "Permissions:".bold())?;
            for permission in granted {
                writeln!(writer, "  {} {}", "✓".green(), permission)?;
            }
        }
        Ok(())
    }
}
