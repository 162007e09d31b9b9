//! Auth domain types

use serde::{Deserialize, Serialize};

/// Metadata about the configuration key in use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthInfo {
    pub id: String,
    #[serde(rename = "type", default)]
    pub key_type: Option<String>,
    pub team: NamedRef,
    pub environment: NamedRef,
    #[serde(default)]
    pub api_key_access: std::collections::BTreeMap<String, bool>,
}

/// A name/slug pair identifying a team or environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
    pub slug: String,
}

impl AuthInfo {
    /// Permissions granted to this key, sorted by name
    pub fn granted(&self) -> Vec<&str> {
        self.api_key_access
            .iter()
            .filter(|(_, granted)| **granted)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted_filters_denied_permissions() {
        let auth: AuthInfo = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "type": "configuration",
            "team": { "name": "Acme", "slug": "acme" },
            "environment": { "name": "Prod", "slug": "prod" },
            "api_key_access": { "queries": true, "markers": false, "boards": true }
        }))
        .unwrap();

        assert_eq!(auth.granted(), vec!["boards", "queries"]);
        assert_eq!(auth.key_type.as_deref(), Some("configuration"));
    }
}
