//! API key management endpoints

use crate::HoneycombClient;
use crate::error::Result;
use hny_core::domain::key::ApiKey;
use hny_core::dto::jsonapi::{ApiKeyAttributes, ListDocument};
use reqwest::Method;

impl HoneycombClient {
    /// List API keys for the team
    ///
    /// Requires a management key and team slug.
    ///
    /// # Arguments
    /// * `environment_id` - Only return keys belonging to this environment
    pub async fn list_api_keys(&self, environment_id: Option<&str>) -> Result<Vec<ApiKey>> {
        let mut request = self.v2(Method::GET, &["api-keys"])?;
        if let Some(environment_id) = environment_id {
            request = request.query(&[("filter[environment]", environment_id)]);
        }
        let response = request.send().await?;

        let doc: ListDocument<ApiKeyAttributes> = self.handle_response(response).await?;
        Ok(doc.data.into_iter().map(ApiKey::from).collect())
    }
}
