//! Dataset-related API endpoints

use crate::HoneycombClient;
use crate::error::Result;
use hny_core::domain::dataset::Dataset;
use hny_core::dto::dataset::CreateDataset;
use reqwest::Method;

impl HoneycombClient {
    // =============================================================================
    // Dataset Management
    // =============================================================================

    /// List all datasets in the environment
    ///
    /// # Returns
    /// A list of datasets
    pub async fn list_datasets(&self) -> Result<Vec<Dataset>> {
        let response = self.v1(Method::GET, &["datasets"])?.send().await?;

        self.handle_response(response).await
    }

    /// Get a dataset by slug
    ///
    /// # Arguments
    /// * `slug` - The dataset slug
    ///
    /// # Returns
    /// The dataset details
    pub async fn get_dataset(&self, slug: &str) -> Result<Dataset> {
        let response = self
            .v1(Method::GET, &["datasets", slug])?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Create a dataset
    ///
    /// Creating a dataset that already exists returns the existing one.
    ///
    /// # Arguments
    /// * `req` - The dataset creation request
    ///
    /// # Returns
    /// The created dataset
    pub async fn create_dataset(&self, req: &CreateDataset) -> Result<Dataset> {
        let response = self.v1(Method::POST, &["datasets"])?.json(req).send().await?;

        self.handle_response(response).await
    }

    /// Delete a dataset
    ///
    /// Fails server-side when deletion protection is enabled.
    ///
    /// # Arguments
    /// * `slug` - The dataset slug to delete
    pub async fn delete_dataset(&self, slug: &str) -> Result<()> {
        let response = self
            .v1(Method::DELETE, &["datasets", slug])?
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
