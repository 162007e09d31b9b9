//! Marker-related API endpoints
//!
//! Markers are scoped to a dataset; the special slug `__all__` addresses
//! environment-wide markers.

use crate::HoneycombClient;
use crate::error::Result;
use hny_core::domain::marker::Marker;
use hny_core::dto::marker::CreateMarker;
use reqwest::Method;

impl HoneycombClient {
    /// List markers on a dataset
    ///
    /// # Arguments
    /// * `dataset` - The dataset slug, or `__all__`
    pub async fn list_markers(&self, dataset: &str) -> Result<Vec<Marker>> {
        let response = self
            .v1(Method::GET, &["markers", dataset])?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Create a marker
    ///
    /// # Arguments
    /// * `dataset` - The dataset slug, or `__all__`
    /// * `req` - The marker creation request
    ///
    /// # Returns
    /// The created marker
    pub async fn create_marker(&self, dataset: &str, req: &CreateMarker) -> Result<Marker> {
        let response = self
            .v1(Method::POST, &["markers", dataset])?
            .json(req)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a marker
    ///
    /// # Arguments
    /// * `dataset` - The dataset slug, or `__all__`
    /// * `marker_id` - The marker ID
    pub async fn delete_marker(&self, dataset: &str, marker_id: &str) -> Result<()> {
        let response = self
            .v1(Method::DELETE, &["markers", dataset, marker_id])?
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
