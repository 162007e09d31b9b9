//! Auth endpoint

use crate::HoneycombClient;
use crate::error::Result;
use hny_core::domain::auth::AuthInfo;
use reqwest::Method;

impl HoneycombClient {
    /// Describe the configuration key in use
    ///
    /// # Returns
    /// The team, environment and permissions attached to the key
    pub async fn get_auth(&self) -> Result<AuthInfo> {
        let response = self.v1(Method::GET, &["auth"])?.send().await?;

        self.handle_response(response).await
    }
}
