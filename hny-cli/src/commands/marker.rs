//! Marker command handlers
//!
//! Markers annotate deploys, incidents and other events on a dataset's graphs.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use hny_core::domain::marker::Marker;
use hny_core::dto::marker::CreateMarker;

use crate::config::Config;
use crate::output::{OutputFormat, Table, TableDisplay, or_dash, write_empty};

/// Dataset slug addressing environment-wide markers
const ALL_DATASETS: &str = "__all__";

/// Marker subcommands
#[derive(Subcommand)]
pub enum MarkerCommands {
    /// List markers
    List {
        /// Dataset slug; environment-wide markers when omitted
        #[arg(short, long, default_value = ALL_DATASETS)]
        dataset: String,
    },
    /// Create a marker
    Create {
        /// Dataset slug; environment-wide marker when omitted
        #[arg(short, long, default_value = ALL_DATASETS)]
        dataset: String,

        /// Marker message
        #[arg(short, long)]
        message: Option<String>,

        /// Marker type, e.g. deploy
        #[arg(short = 't', long = "type")]
        marker_type: Option<String>,

        /// Link to attach to the marker
        #[arg(short, long)]
        url: Option<String>,

        /// Start time as a unix timestamp; defaults to now
        #[arg(long)]
        start_time: Option<i64>,

        /// End time as a unix timestamp, for markers spanning a range
        #[arg(long)]
        end_time: Option<i64>,
    },
    /// Delete a marker
    Delete {
        /// Marker ID
        id: String,

        /// Dataset slug; environment-wide marker when omitted
        #[arg(short, long, default_value = ALL_DATASETS)]
        dataset: String,
    },
}

/// Handle marker commands
///
/// # Arguments
/// * `command` - The marker command to execute
/// * `config` - The CLI configuration
pub async fn handle_marker_command(command: MarkerCommands, config: &Config) -> Result<()> {
    let client = config.client()?;
    let output = OutputFormat::new(config.format);

    match command {
        MarkerCommands::List { dataset } => {
            let markers = client
                .list_markers(&dataset)
                .await
                .with_context(|| format!("Failed to list markers on '{}'", dataset))?;
            output.print(&markers)
        }
        MarkerCommands::Create {
            dataset,
            message,
            marker_type,
            url,
            start_time,
            end_time,
        } => {
            let marker = client
                .create_marker(
                    &dataset,
                    &CreateMarker {
                        message,
                        marker_type,
                        url,
                        start_time,
                        end_time,
                    },
                )
                .await
                .context("Failed to create marker")?;
            eprintln!("{} Marker {} created", "✓".green(), marker.id.cyan());
            output.print(&vec![marker])
        }
        MarkerCommands::Delete { id, dataset } => {
            client
                .delete_marker(&dataset, &id)
                .await
                .with_context(|| format!("Failed to delete marker '{}'", id))?;
            eprintln!("{} Marker {} deleted", "✓".green(), id.cyan());
            Ok(())
        }
    }
}

impl TableDisplay for Vec<Marker> {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.is_empty() {
            return write_empty(writer, "markers");
        }

        let mut table = Table::new(["ID", "START", "TYPE", "MESSAGE"]);
        for marker in self {
            table.row([
                marker.id.clone(),
                marker
                    .start()
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| marker.start_time.to_string()),
                or_dash(marker.marker_type.as_deref()),
                or_dash(marker.message.as_deref()),
            ]);
        }
        table.write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Format;

    #[test]
    fn test_marker_table_formats_start_time() {
        let markers: Vec<Marker> = serde_json::from_value(serde_json::json!([
            { "id": "m1", "start_time": 1_700_000_000, "type": "deploy", "message": "v1.2.3" }
        ]))
        .unwrap();

        let output = OutputFormat::new(Format::Table).to_string(&markers).unwrap();
        assert!(output.contains("2023-11-14 22:13:20"));
        assert!(output.contains("deploy"));
        assert!(output.contains("v1.2.3"));
    }
}
