//! Query domain types
//!
//! A query is created from a [`QuerySpec`] and executed asynchronously: the
//! server hands back a [`QueryResult`] whose `complete` flag flips to true once
//! the data is ready.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Query definition
///
/// Used both as the creation payload and as the saved query returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdowns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub calculations: Vec<Calculation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_combination: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Relative time range in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<u64>,
}

/// An aggregate computed by a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub op: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl Calculation {
    /// Parse `OP` or `OP:COLUMN`, e.g. `COUNT` or `P99:duration_ms`
    pub fn parse(input: &str) -> Result<Self, String> {
        let (op, column) = match input.split_once(':') {
            Some((op, column)) => (op, Some(column)),
            None => (input, None),
        };

        if op.is_empty() {
            return Err(format!("invalid calculation `{}`: missing operator", input));
        }
        if column.is_some_and(str::is_empty) {
            return Err(format!("invalid calculation `{}`: empty column", input));
        }

        Ok(Self {
            op: op.to_uppercase(),
            column: column.map(str::to_string),
        })
    }
}

/// A row filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub op: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Result ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Snapshot of an asynchronous query execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QuerySpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<QueryResultData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<QueryResultLinks>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResultData {
    #[serde(default)]
    pub results: Vec<QueryResultRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Value>,
}

/// One aggregated row, keyed by breakdown and calculation names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResultRow {
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResultLinks {
    #[serde(default)]
    pub query_url: Option<String>,
    #[serde(default)]
    pub graph_image_url: Option<String>,
}

impl QueryResult {
    /// Rows of a completed result; empty while the query is still running
    pub fn rows(&self) -> &[QueryResultRow] {
        self.data.as_ref().map(|d| d.results.as_slice()).unwrap_or(&[])
    }

    /// Link to the result in the web UI, if the server provided one
    pub fn query_url(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.query_url.as_deref())
    }
}
