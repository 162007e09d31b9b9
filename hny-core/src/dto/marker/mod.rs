//! Marker DTOs

use serde::{Deserialize, Serialize};

/// Request to create a marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMarker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub marker_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Unix timestamp in seconds; the server uses "now" when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
}
