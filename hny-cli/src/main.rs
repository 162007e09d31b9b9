//! Honeycomb CLI
//!
//! Command-line interface for the Honeycomb API.

mod commands;
mod config;
mod output;
mod poll;
mod resolver;
mod signal;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, DEFAULT_API_URL};
use output::Format;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hny")]
#[command(about = "Honeycomb command-line client", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL
    #[arg(long, env = "HONEYCOMB_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Configuration key for dataset, board, marker, SLO and query commands
    #[arg(long, env = "HONEYCOMB_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Management key (KEY_ID:SECRET) for key and environment commands
    #[arg(long, env = "HONEYCOMB_MANAGEMENT_KEY", hide_env_values = true, global = true)]
    management_key: Option<String>,

    /// Team slug for key and environment commands
    #[arg(long, env = "HONEYCOMB_TEAM", global = true)]
    team: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    output: Format,

    /// Never draw progress spinners
    #[arg(long, global = true)]
    no_interactive: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "hny=warn,hny_client=warn",
        1 => "hny=info,hny_client=info",
        _ => "hny=debug,hny_client=debug",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(cli.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config {
        api_url: cli.api_url,
        api_key: cli.api_key,
        management_key: cli.management_key,
        team: cli.team,
        format: cli.output,
        interactive: !cli.no_interactive && std::io::stderr().is_terminal(),
    };
    config.validate()?;
    debug!(api_url = %config.api_url, interactive = config.interactive, "Loaded configuration");

    let ctx = CancellationToken::new();
    signal::cancel_on_interrupt(ctx.clone());

    signal::until_cancelled(&ctx, handle_command(cli.command, &config, &ctx)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_filter_by_verbosity() {
        assert_eq!(default_filter(0), "hny=warn,hny_client=warn");
        assert_eq!(default_filter(1), "hny=info,hny_client=info");
        assert_eq!(default_filter(5), "hny=debug,hny_client=debug");
    }

    #[test]
    fn test_parse_query_run_flags() {
        let cli = Cli::try_parse_from([
            "hny",
            "--api-key",
            "abc",
            "-o",
            "json",
            "query",
            "run",
            "--dataset",
            "production",
            "--calculation",
            "count",
            "--calculation",
            "p99:duration_ms",
            "--breakdown",
            "service",
            "--timeout",
            "30",
        ])
        .unwrap();

        assert_eq!(cli.output, Format::Json);
        match cli.command {
            Commands::Query {
                command:
                    commands::QueryCommands::Run {
                        dataset,
                        calculations,
                        breakdowns,
                        timeout,
                        interval,
                        ..
                    },
            } => {
                assert_eq!(dataset, "production");
                assert_eq!(calculations.len(), 2);
                assert_eq!(calculations[1].op, "P99");
                assert_eq!(breakdowns, vec!["service".to_string()]);
                assert_eq!(timeout, 30);
                assert_eq!(interval, 1);
            }
            _ => panic!("expected query run"),
        }
    }

    #[test]
    fn test_file_conflicts_with_inline_query() {
        let result = Cli::try_parse_from([
            "hny",
            "query",
            "run",
            "--dataset",
            "production",
            "--file",
            "q.json",
            "--calculation",
            "COUNT",
        ]);
        assert!(result.is_err());
    }
}
