//! Query command handlers
//!
//! `query run` saves a query definition, submits it for execution and waits
//! for the result, drawing a spinner when the terminal allows it.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use hny_core::domain::query::{Calculation, QueryResult, QuerySpec};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::output::{OutputFormat, Table, TableDisplay, write_empty, write_field};
use crate::poll::PollConfig;
use crate::resolver::query::{QUERY_TITLE, run_query};

/// Query subcommands
#[derive(Subcommand)]
pub enum QueryCommands {
    /// Show a saved query definition
    Get {
        /// Query ID
        id: String,

        /// Dataset slug
        #[arg(short, long)]
        dataset: String,
    },
    /// Run a query and wait for its results
    Run {
        /// Dataset slug
        #[arg(short, long)]
        dataset: String,

        /// JSON file holding the query definition
        #[arg(short, long, conflicts_with_all = ["calculations", "breakdowns", "time_range"])]
        file: Option<PathBuf>,

        /// Calculation as OP or OP:COLUMN, e.g. COUNT or P99:duration_ms (repeatable)
        #[arg(short, long = "calculation", value_parser = Calculation::parse)]
        calculations: Vec<Calculation>,

        /// Column to group results by (repeatable)
        #[arg(short, long = "breakdown")]
        breakdowns: Vec<String>,

        /// Relative time range in seconds
        #[arg(short, long)]
        time_range: Option<u64>,

        /// Seconds to wait for the result before giving up
        #[arg(long, default_value_t = 120)]
        timeout: u64,

        /// Seconds between result checks
        #[arg(long, default_value_t = 1)]
        interval: u64,
    },
}

/// Handle query commands
///
/// # Arguments
/// * `command` - The query command to execute
/// * `config` - The CLI configuration
/// * `ctx` - Cancelled when the user interrupts the process
pub async fn handle_query_command(
    command: QueryCommands,
    config: &Config,
    ctx: &CancellationToken,
) -> Result<()> {
    let client = config.client()?;
    let output = OutputFormat::new(config.format);

    match command {
        QueryCommands::Get { id, dataset } => {
            let query = client
                .get_query(&dataset, &id)
                .await
                .with_context(|| format!("Failed to get query '{}'", id))?;
            output.print(&query)
        }
        QueryCommands::Run {
            dataset,
            file,
            calculations,
            breakdowns,
            time_range,
            timeout,
            interval,
        } => {
            let spec = match file {
                Some(path) => load_query(&path)?,
                None => QuerySpec {
                    calculations,
                    breakdowns,
                    time_range,
                    ..Default::default()
                },
            };

            if spec.id.is_none() && spec.calculations.is_empty() {
                bail!("A query needs at least one --calculation, or a --file with a query");
            }

            let poll = PollConfig {
                interval: Duration::from_secs(interval),
                timeout: Duration::from_secs(timeout),
                ..PollConfig::titled(QUERY_TITLE, config.interactive)
            };

            let result = match run_query(
                &client,
                ctx,
                &dataset,
                &spec,
                poll,
                &mut std::io::stderr(),
            )
            .await
            {
                Ok(result) => result,
                Err(e) if e.is_submission() => {
                    return Err(e)
                        .with_context(|| format!("Failed to submit query on '{}'", dataset));
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Query on '{}' did not finish", dataset));
                }
            };

            output.print(&result)
        }
    }
}

fn load_query(path: &Path) -> Result<QuerySpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read query file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse query file: {}", path.display()))
}

impl TableDisplay for QuerySpec {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        let calculations: Vec<String> = self
            .calculations
            .iter()
            .map(|c| match &c.column {
                Some(column) => format!("{}({})", c.op, column),
                None => c.op.clone(),
            })
            .collect();

        writeln!(writer, "{}", "Query Details:".bold())?;
        write_field(writer, "ID", self.id.as_deref().unwrap_or("-"), 12)?;
        write_field(writer, "Calculations", &join_or_dash(&calculations), 12)?;
        write_field(writer, "Breakdowns", &join_or_dash(&self.breakdowns), 12)?;
        write_field(writer, "Filters", &self.filters.len().to_string(), 12)?;
        if let Some(range) = self.time_range {
            write_field(writer, "Time range", &format!("{}s", range), 12)?;
        }
        if let Some(limit) = self.limit {
            write_field(writer, "Limit", &limit.to_string(), 12)?;
        }
        Ok(())
    }
}

impl TableDisplay for QueryResult {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
        let rows = self.rows();
        if rows.is_empty() {
            return write_empty(writer, "results");
        }

        let columns: BTreeSet<&str> = rows
            .iter()
            .flat_map(|row| row.data.keys().map(String::as_str))
            .collect();

        let mut table = Table::new(columns.iter().copied());
        for row in rows {
            table.row(
                columns
                    .iter()
                    .map(|column| row.data.get(*column).map(cell).unwrap_or_default()),
            );
        }
        table.write(writer)
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Format;

    fn result_with_rows() -> QueryResult {
        serde_json::from_value(serde_json::json!({
            "id": "r-1",
            "complete": true,
            "data": {
                "results": [
                    { "data": { "service": "api", "COUNT": 42 } },
                    { "data": { "service": "web", "COUNT": 7, "P99(duration_ms)": 12.5 } }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_result_table_uses_union_of_columns() {
        let output = OutputFormat::new(Format::Table)
            .to_string(&result_with_rows())
            .unwrap();

        assert!(output.contains("COUNT"));
        assert!(output.contains("P99(duration_ms)"));
        assert!(output.contains("api"));
        assert!(output.contains("12.5"));
    }

    #[test]
    fn test_incomplete_result_has_no_rows() {
        let result: QueryResult =
            serde_json::from_value(serde_json::json!({ "id": "r-1", "complete": false })).unwrap();
        let output = OutputFormat::new(Format::Table).to_string(&result).unwrap();
        assert!(output.contains("No results found."));
    }

    #[test]
    fn test_query_spec_table() {
        let spec = QuerySpec {
            id: Some("q-1".to_string()),
            calculations: vec![Calculation::parse("p99:duration_ms").unwrap()],
            breakdowns: vec!["service".to_string()],
            ..Default::default()
        };

        let output = OutputFormat::new(Format::Table).to_string(&spec).unwrap();
        assert!(output.contains("P99(duration_ms)"));
        assert!(output.contains("service"));
    }

    #[test]
    fn test_cell_formatting() {
        assert_eq!(cell(&Value::Null), "-");
        assert_eq!(cell(&serde_json::json!("api")), "api");
        assert_eq!(cell(&serde_json::json!(3)), "3");
    }
}
