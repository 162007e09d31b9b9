//! Dataset command handlers
//!
//! Handles listing, viewing, creating and deleting datasets.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use hny_core::domain::dataset::Dataset;
use hny_core::dto::dataset::CreateDataset;

use crate::config::Config;
use crate::output::{OutputFormat, Table, TableDisplay, or_dash, write_empty, write_field};

/// Dataset subcommands
#[derive(Subcommand)]
pub enum DatasetCommands {
    /// List all datasets
    List,
    /// Get dataset details
    Get {
        /// Dataset slug
        slug: String,
    },
    /// Create a dataset
    Create {
        /// Dataset name
        #[arg(short, long)]
        name: String,

        /// Dataset description
        #[arg(short, long)]
        description: Option<String>,

        /// How many levels of nested JSON to unpack into columns
        #[arg(long)]
        expand_json_depth: Option<u32>,
    },
    /// Delete a dataset and all of its data
    Delete {
        /// Dataset slug
        slug: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Handle dataset commands
///
/// # Arguments
/// * `command` - The dataset command to execute
/// * `config` - The CLI configuration
pub async fn handle_dataset_command(command: DatasetCommands, config: &Config) -> Result<()> {
    let client = config.client()?;
    let output = OutputFormat::new(config.format);

    match command {
        DatasetCommands::List => {
            let datasets = client
                .list_datasets()
                .await
                .context("Failed to list datasets")?;
            output.print(&datasets)
        }
        DatasetCommands::Get { slug } => {
            let dataset = client
                .get_dataset(&slug)
                .await
                .with_context(|| format!("Failed to get dataset '{}'", slug))?;
            output.print(&dataset)
        }
        DatasetCommands::Create {
            name,
            description,
            expand_json_depth,
        } => {
            let dataset = client
                .create_dataset(&CreateDataset {
                    name,
                    description,
                    expand_json_depth,
                })
                .await
                .context("Failed to create dataset")?;
            eprintln!("{} Dataset {} ready", "✓".green(), dataset.slug.cyan());
            output.print(&dataset)
        }
        DatasetCommands::Delete { slug, yes } => {
            if !yes {
                bail!(
                    "Deleting dataset '{}' removes all of its data. Re-run with --yes to confirm",
                    slug
                );
            }
            client
                .delete_dataset(&slug)
                .await
                .with_context(|| format!("Failed to delete dataset '{}'", slug))?;
            eprintln!("{} Dataset {} deleted", "✓".green(), slug.cyan());
            Ok(())
        }
    }
}

impl TableDisplay for Vec<Dataset> {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        if self.is_empty() {
            return write_empty(writer, "datasets");
        }

        let mut table = Table::new(["SLUG", "NAME", "COLUMNS", "LAST WRITTEN"]);
        for dataset in self {
            table.row([
                dataset.slug.clone(),
                dataset.name.clone(),
                dataset
                    .regular_columns_count
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                dataset
                    .last_written_at
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| "never".to_string()),
            ]);
        }
        table.write(writer)
    }
}

impl TableDisplay for Dataset {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", "Dataset Details:".bold())?;
        write_field(writer, "Name", &self.name, 14)?;
        write_field(writer, "Slug", &self.slug, 14)?;
        write_field(writer, "Description", &or_dash(self.description.as_deref()), 14)?;
        if let Some(depth) = self.expand_json_depth {
            write_field(writer, "JSON Depth", &depth.to_string(), 14)?;
        }
        if let Some(created) = self.created_at {
            write_field(
                writer,
                "Created",
                &created.format("%Y-%m-%d %H:%M:%S").to_string(),
                14,
            )?;
        }
        if let Some(written) = self.last_written_at {
            write_field(
                writer,
                "Last Written",
                &written.format("%Y-%m-%d %H:%M:%S").to_string(),
                14,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Format;

    fn dataset(slug: &str) -> Dataset {
        serde_json::from_value(serde_json::json!({
            "name": slug.to_uppercase(),
            "slug": slug,
            "regular_columns_count": 12,
            "last_written_at": "2026-10-01T12:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_dataset_list_table() {
        let datasets = vec![dataset("api"), dataset("frontend")];
        let output = OutputFormat::new(Format::Table)
            .to_string(&datasets)
            .unwrap();

        assert!(output.contains("SLUG"));
        assert!(output.contains("frontend"));
        assert!(output.contains("2026-10-01 12:00:00"));
    }

    #[test]
    fn test_empty_dataset_list() {
        let output = OutputFormat::new(Format::Table)
            .to_string(&Vec::<Dataset>::new())
            .unwrap();
        assert!(output.contains("No datasets found."));
    }

    #[test]
    fn test_dataset_json_round_trips_slug() {
        let output = OutputFormat::new(Format::Json)
            .to_string(&dataset("api"))
            .unwrap();
        assert!(output.contains("\"slug\": \"api\""));
    }
}
