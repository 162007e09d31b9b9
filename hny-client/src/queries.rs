//! Query-related API endpoints
//!
//! Running a query is a two step protocol: the query definition is saved
//! first, then a query result is requested for it. The query result is
//! computed asynchronously and must be polled until `complete` is set.

use async_trait::async_trait;
use hny_core::domain::query::{QueryResult, QuerySpec};
use hny_core::dto::query::CreateQueryResult;
use reqwest::Method;

use crate::HoneycombClient;
use crate::error::Result;

/// The subset of the API needed to execute a query asynchronously
///
/// Implemented by [`HoneycombClient`]; abstracted so the submit/poll protocol
/// can be driven against other implementations.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Save a query definition on a dataset, returning it with its `id` set
    async fn create_query(&self, dataset: &str, spec: &QuerySpec) -> Result<QuerySpec>;

    /// Start executing a saved query
    async fn create_query_result(&self, dataset: &str, query_id: &str) -> Result<QueryResult>;

    /// Fetch the current snapshot of a query result
    async fn get_query_result(&self, dataset: &str, result_id: &str) -> Result<QueryResult>;
}

impl HoneycombClient {
    /// Get a saved query by ID
    ///
    /// # Arguments
    /// * `dataset` - The dataset slug
    /// * `query_id` - The query ID
    pub async fn get_query(&self, dataset: &str, query_id: &str) -> Result<QuerySpec> {
        let response = self
            .v1(Method::GET, &["queries", dataset, query_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl QueryExecutor for HoneycombClient {
    async fn create_query(&self, dataset: &str, spec: &QuerySpec) -> Result<QuerySpec> {
        let response = self
            .v1(Method::POST, &["queries", dataset])?
            .json(spec)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn create_query_result(&self, dataset: &str, query_id: &str) -> Result<QueryResult> {
        let response = self
            .v1(Method::POST, &["query_results", dataset])?
            .json(&CreateQueryResult {
                query_id: query_id.to_string(),
                disable_series: true,
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn get_query_result(&self, dataset: &str, result_id: &str) -> Result<QueryResult> {
        let response = self
            .v1(Method::GET, &["query_results", dataset, result_id])?
            .send()
            .await?;

        self.handle_response(response).await
    }
}
