//! Environment management endpoints

use crate::HoneycombClient;
use crate::error::Result;
use hny_core::domain::environment::Environment;
use hny_core::dto::jsonapi::{Document, EnvironmentAttributes, ListDocument};
use reqwest::Method;

impl HoneycombClient {
    /// List environments for the team
    ///
    /// Requires a management key and team slug.
    pub async fn list_environments(&self) -> Result<Vec<Environment>> {
        let response = self.v2(Method::GET, &["environments"])?.send().await?;

        let doc: ListDocument<EnvironmentAttributes> = self.handle_response(response).await?;
        Ok(doc.data.into_iter().map(Environment::from).collect())
    }

    /// Get an environment by ID
    ///
    /// # Arguments
    /// * `environment_id` - The environment ID
    pub async fn get_environment(&self, environment_id: &str) -> Result<Environment> {
        let response = self
            .v2(Method::GET, &["environments", environment_id])?
            .send()
            .await?;

        let doc: Document<EnvironmentAttributes> = self.handle_response(response).await?;
        Ok(Environment::from(doc.data))
    }
}
