//! SLO-related API endpoints

use crate::HoneycombClient;
use crate::error::Result;
use hny_core::domain::slo::Slo;
use reqwest::Method;

impl HoneycombClient {
    /// List SLOs defined on a dataset
    ///
    /// # Arguments
    /// * `dataset` - The dataset slug
    pub async fn list_slos(&self, dataset: &str) -> Result<Vec<Slo>> {
        let response = self
            .v1(Method::GET, &["slos", dataset])?
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get an SLO by ID
    ///
    /// # Arguments
    /// * `dataset` - The dataset slug
    /// * `slo_id` - The SLO ID
    pub async fn get_slo(&self, dataset: &str, slo_id: &str) -> Result<Slo> {
        let response = self
            .v1(Method::GET, &["slos", dataset, slo_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }
}
