//! Output formatting for CLI commands.
//!
//! Supports table (human-readable), JSON and YAML output formats. Tables are
//! written by each resource's [`TableDisplay`] implementation; JSON and YAML
//! come straight from the serde representation.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Output formatter that dispatches on the selected [`Format`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Write a value to `writer` in the selected format.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<()>
    where
        W: Write,
        T: Serialize + TableDisplay + ?Sized,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .context("JSON serialization failed")?;
                writeln!(writer)?;
            }
            Format::Yaml => {
                serde_yaml::to_writer(&mut *writer, value).context("YAML serialization failed")?;
            }
            Format::Table => value.write_table(writer)?,
        }
        Ok(())
    }

    /// Write a value to stdout in the selected format.
    pub fn print<T>(&self, value: &T) -> Result<()>
    where
        T: Serialize + TableDisplay + ?Sized,
    {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write(&mut handle, value)
    }

    /// Write a value to a string.
    pub fn to_string<T>(&self, value: &T) -> Result<String>
    where
        T: Serialize + TableDisplay + ?Sized,
    {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).context("output was not valid UTF-8")
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<()>;
}

/// Column-aligned table builder
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing trailing cells render empty
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let widths: Vec<usize> = (0..self.headers.len())
            .map(|i| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(self.headers[i].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header = format_line(&self.headers, &widths);
        writeln!(writer, "{}", header.bold())?;
        for row in &self.rows {
            writeln!(writer, "{}", format_line(row, &widths))?;
        }
        Ok(())
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{:<width$}", cell, width = *width)
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Write a `label: value` line with the label padded to `width`
pub fn write_field<W: Write>(writer: &mut W, label: &str, value: &str, width: usize) -> Result<()> {
    writeln!(writer, "  {:<width$} {}", format!("{}:", label), value, width = width + 1)?;
    Ok(())
}

/// Render an optional value, using `-` for missing ones
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Message for an empty listing
pub fn write_empty<W: Write>(writer: &mut W, what: &str) -> Result<()> {
    writeln!(writer, "{}", format!("No {} found.", what).yellow())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    impl TableDisplay for Sample {
        fn write_table<W: Write>(&self, writer: &mut W) -> Result<()> {
            let mut table = Table::new(["NAME", "COUNT"]);
            table.row([self.name.clone(), self.count.to_string()]);
            table.write(writer)
        }
    }

    fn sample() -> Sample {
        Sample {
            name: "api".to_string(),
            count: 3,
        }
    }

    #[test]
    fn test_default_format_is_table() {
        assert_eq!(OutputFormat::default().format(), Format::Table);
    }

    #[test]
    fn test_json_output() {
        let output = OutputFormat::new(Format::Json).to_string(&sample()).unwrap();
        assert!(output.contains("\"name\": \"api\""));
        assert!(output.contains("\"count\": 3"));
    }

    #[test]
    fn test_yaml_output() {
        let output = OutputFormat::new(Format::Yaml).to_string(&sample()).unwrap();
        assert!(output.contains("name: api"));
        assert!(output.contains("count: 3"));
    }

    #[test]
    fn test_table_output() {
        let output = OutputFormat::new(Format::Table).to_string(&sample()).unwrap();
        assert!(output.contains("NAME"));
        assert!(output.contains("api   3"));
    }

    #[test]
    fn test_table_pads_short_rows() {
        let mut table = Table::new(["A", "B", "C"]);
        table.row(["x"]);
        table.row(["long-value", "y", "z"]);

        let mut buf = Vec::new();
        table.write(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.lines().any(|l| l == "x"));
        assert!(text.contains("long-value  y  z"));
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("v")), "v");
        assert_eq!(or_dash(None), "-");
    }
}
