//! API key domain types

use serde::{Deserialize, Serialize};

/// An API key belonging to a team
///
/// Secrets are never returned by list operations; only metadata is exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub key_type: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub environment_id: Option<String>,
}
