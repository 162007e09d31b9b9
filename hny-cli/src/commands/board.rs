//! Board command handlers

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use hny_core::domain::board::Board;

use crate::config::Config;
use crate::output::{OutputFormat, Table, TableDisplay, or_dash, write_empty, write_field};

/// Board subcommands
#[derive(Subcommand)]
pub enum BoardCommands {
    /// List all boards
    List,
    /// Get board details
    Get {
        /// Board ID
        id: String,
    },
    /// Delete a board
    Delete {
        /// Board ID
        id: String,
    },
}

/// Handle board commands
///
/// # Arguments
/// * `command` - The board command to execute
/// * `config` - The CLI configuration
pub async fn handle_board_command(command: BoardCommands, config: &Config) -> Result<()> {
    let client = config.client()?;
    let output = OutputFormat::new(config.format);

    match command {
        BoardCommands::List => {
            let boards = client.list_boards().await.context("Failed to list boards")?;
            output.print(&boards)
        }
        BoardCommands::Get { id } => {
            let board = client
                .get_board(&id)
                .await
                .with_context(|| format!("Failed to get board '{}'", id))?;
            output.print(&board)
        }
        BoardCommands::Delete { id } => {
            client
                .delete_board(&id)
                .await
                .with_context(|| format!("Failed to delete board '{}'", id))?;
            eprintln!("{} Board {} deleted", "✓".green(), id.cyan());
            Ok(())
        }
    }
}

impl TableDisplay for Vec<Board> {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.is_empty() {
            return write_empty(writer, "boards");
        }

        let mut table = Table::new(["ID", "NAME", "QUERIES"]);
        for board in self {
            table.row([
                board.id.clone(),
                board.name.clone(),
                board.queries.len().to_string(),
            ]);
        }
        table.write(writer)
    }
}

impl TableDisplay for Board {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", "Board Details:".bold())?;
        write_field(writer, "ID", &self.id, 11)?;
        write_field(writer, "Name", &self.name, 11)?;
        write_field(writer, "Description", &or_dash(self.description.as_deref()), 11)?;
        if let Some(url) = self.links.as_ref().and_then(|l| l.board_url.as_deref()) {
            write_field(writer, "URL", url, 11)?;
        }

        if !self.queries.is_empty() {
            writeln!(writer, "\n{}", "Queries:".bold())?;
            let mut table = Table::new(["CAPTION", "DATASET", "QUERY ID"]);
            for query in &self.queries {
                table.row([
                    or_dash(query.caption.as_deref()),
                    or_dash(query.dataset.as_deref()),
                    or_dash(query.query_id.as_deref()),
                ]);
            }
            table.write(writer)?;
        }
        Ok(())
    }
}
