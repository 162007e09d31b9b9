//! JSON:API envelopes
//!
//! Team management endpoints wrap every resource as
//! `{ "id", "type", "attributes", "relationships" }` inside a `data` member.
//! These types decode that shape and flatten it into plain domain structs.

use serde::{Deserialize, Serialize};

use crate::domain::environment::Environment;
use crate::domain::key::ApiKey;

/// A single JSON:API document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document<A> {
    pub data: Resource<A>,
}

/// A JSON:API collection document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDocument<A> {
    #[serde(default = "Vec::new")]
    pub data: Vec<Resource<A>>,
}

/// A JSON:API resource object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<A> {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: A,
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationships {
    #[serde(default)]
    pub environment: Option<Relationship>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub data: RelationshipData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipData {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub key_type: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentAttributes {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub settings: Option<EnvironmentSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    #[serde(default)]
    pub delete_protected: bool,
}

impl From<Resource<ApiKeyAttributes>> for ApiKey {
    fn from(resource: Resource<ApiKeyAttributes>) -> Self {
        let environment_id = resource
            .relationships
            .and_then(|r| r.environment)
            .map(|e| e.data.id);

        ApiKey {
            id: resource.id,
            name: resource.attributes.name,
            key_type: resource.attributes.key_type,
            disabled: resource.attributes.disabled,
            environment_id,
        }
    }
}

impl From<Resource<EnvironmentAttributes>> for Environment {
    fn from(resource: Resource<EnvironmentAttributes>) -> Self {
        let attributes = resource.attributes;
        Environment {
            id: resource.id,
            name: attributes.name,
            slug: attributes.slug,
            description: attributes.description,
            color: attributes.color,
            delete_protected: attributes.settings.is_some_and(|s| s.delete_protected),
        }
    }
}
