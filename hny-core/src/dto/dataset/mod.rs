//! Dataset DTOs

use serde::{Deserialize, Serialize};

/// Request to create a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDataset {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_json_depth: Option<u32>,
}
