//! Query execution DTOs

use serde::{Deserialize, Serialize};

/// Request to start executing a saved query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQueryResult {
    pub query_id: String,
    #[serde(default)]
    pub disable_series: bool,
}
