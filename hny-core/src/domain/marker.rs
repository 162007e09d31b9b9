//! Marker domain types

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A marker annotating a point or span in time on a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    /// Unix timestamp in seconds
    pub start_time: i64,
    #[serde(default)]
    pub end_time: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub marker_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Marker {
    /// Start time as a UTC timestamp, if it is in range
    pub fn start(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.start_time, 0).single()
    }
}
