//! Dataset domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dataset as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expand_json_depth: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_written_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub regular_columns_count: Option<u64>,
}
