//! SLO domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service level objective defined on a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub sli: Sli,
    pub time_period_days: u32,
    pub target_per_million: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The derived column backing an SLO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sli {
    pub alias: String,
}

impl Slo {
    /// Target expressed as a percentage, e.g. 999000 per million -> 99.9
    pub fn target_percent(&self) -> f64 {
        f64::from(self.target_per_million) / 10_000.0
    }
}
