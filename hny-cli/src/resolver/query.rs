//! Query execution
//!
//! Resolves a query definition to a completed [`QueryResult`]: save the query
//! (unless it already has an ID), submit a query result for it, then poll the
//! result until the server marks it complete.

use std::io::Write;

use colored::Colorize;
use hny_client::{ClientError, QueryExecutor};
use hny_core::domain::query::{QueryResult, QuerySpec};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{ResolveError, resolve_async_job};
use crate::poll::PollConfig;

/// Spinner label while a query runs
pub const QUERY_TITLE: &str = "Running query...";

/// Error type of a query run
pub type QueryError = ResolveError<ClientError>;

/// Run a query to completion
///
/// # Arguments
/// * `executor` - API used for every step
/// * `ctx` - Caller's cancellation token
/// * `dataset` - Dataset slug the query runs against
/// * `spec` - Query definition; saved first when it has no `id`
/// * `poll` - Poll settings; an empty title becomes [`QUERY_TITLE`]
/// * `notice` - Auxiliary stream that receives the result link, if any
///
/// # Returns
/// The completed query result
pub async fn run_query<X, W>(
    executor: &X,
    ctx: &CancellationToken,
    dataset: &str,
    spec: &QuerySpec,
    poll: PollConfig,
    notice: &mut W,
) -> Result<QueryResult, QueryError>
where
    X: QueryExecutor + ?Sized,
    W: Write,
{
    let poll = PollConfig {
        title: if poll.title.is_empty() {
            QUERY_TITLE.to_string()
        } else {
            poll.title
        },
        ..poll
    };

    let result = resolve_async_job(
        ctx,
        &poll,
        // Both steps are dropped mid-request when `ctx` fires
        |_token| async {
            let query_id = match &spec.id {
                Some(id) => id.clone(),
                None => executor
                    .create_query(dataset, spec)
                    .await?
                    .id
                    .ok_or_else(|| ClientError::ParseError("created query has no id".to_string()))?,
            };
            debug!(dataset, query_id = %query_id, "Submitting query result");

            let submitted = executor.create_query_result(dataset, &query_id).await?;
            Ok::<_, ClientError>(submitted.id)
        },
        |handle, _token| async move {
            let snapshot = executor.get_query_result(dataset, handle.as_str()).await?;
            let complete = snapshot.complete;
            Ok::<_, ClientError>((snapshot, complete))
        },
    )
    .await?;

    if let Some(url) = result.query_url() {
        if let Err(e) = writeln!(notice, "{} {}", "Query URL:".dimmed(), url) {
            warn!("Failed to write query URL: {}", e);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hny_client::Result as ClientResult;
    use hny_core::domain::query::{Calculation, QueryResultData, QueryResultLinks, QueryResultRow};
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory executor that reports completion on the nth status check
    struct FakeExecutor {
        result_id: Option<String>,
        complete_on: u32,
        calls: Mutex<Vec<String>>,
    }

    impl FakeExecutor {
        fn new(result_id: Option<&str>, complete_on: u32) -> Self {
            Self {
                result_id: result_id.map(str::to_string),
                complete_on,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn status_calls(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| c.starts_with("get_query_result"))
                .count()
        }
    }

    #[async_trait]
    impl QueryExecutor for FakeExecutor {
        async fn create_query(&self, dataset: &str, spec: &QuerySpec) -> ClientResult<QuerySpec> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create_query {}", dataset));
            Ok(QuerySpec {
                id: Some("q-1".to_string()),
                ..spec.clone()
            })
        }

        async fn create_query_result(
            &self,
            _dataset: &str,
            query_id: &str,
        ) -> ClientResult<QueryResult> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create_query_result {}", query_id));
            Ok(QueryResult {
                id: self.result_id.clone(),
                complete: false,
                query: None,
                data: None,
                links: None,
            })
        }

        async fn get_query_result(
            &self,
            _dataset: &str,
            result_id: &str,
        ) -> ClientResult<QueryResult> {
            let call = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(format!("get_query_result {}", result_id));
                calls.iter().filter(|c| c.starts_with("get_query_result")).count() as u32
            };

            if call < self.complete_on {
                return Ok(QueryResult {
                    id: Some(result_id.to_string()),
                    complete: false,
                    query: None,
                    data: None,
                    links: None,
                });
            }

            let mut row = QueryResultRow::default();
            row.data.insert("COUNT".to_string(), serde_json::json!(42));
            Ok(QueryResult {
                id: Some(result_id.to_string()),
                complete: true,
                query: None,
                data: Some(QueryResultData {
                    results: vec![row],
                    series: Vec::new(),
                }),
                links: Some(QueryResultLinks {
                    query_url: Some("https://ui.example.com/result/job-1".to_string()),
                    graph_image_url: None,
                }),
            })
        }
    }

    fn count_query() -> QuerySpec {
        QuerySpec {
            calculations: vec![Calculation::parse("COUNT").unwrap()],
            time_range: Some(3600),
            ..Default::default()
        }
    }

    fn fast_poll() -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(50),
            timeout: Duration::from_secs(10),
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_query_polls_until_complete() {
        let executor = FakeExecutor::new(Some("job-1"), 3);
        let mut notice = Vec::new();

        let result = run_query(
            &executor,
            &CancellationToken::new(),
            "production",
            &count_query(),
            fast_poll(),
            &mut notice,
        )
        .await
        .unwrap();

        assert!(result.complete);
        assert_eq!(result.rows()[0].data["COUNT"], 42);
        assert_eq!(executor.status_calls(), 3);
        assert_eq!(
            executor.calls()[..2],
            [
                "create_query production".to_string(),
                "create_query_result q-1".to_string()
            ]
        );

        let notice = String::from_utf8(notice).unwrap();
        assert!(notice.contains("https://ui.example.com/result/job-1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_query_reuses_saved_query_id() {
        let executor = FakeExecutor::new(Some("job-1"), 1);
        let spec = QuerySpec {
            id: Some("saved-7".to_string()),
            ..count_query()
        };

        run_query(
            &executor,
            &CancellationToken::new(),
            "production",
            &spec,
            fast_poll(),
            &mut std::io::sink(),
        )
        .await
        .unwrap();

        assert_eq!(executor.calls()[0], "create_query_result saved-7");
        assert_eq!(executor.status_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_query_without_result_id_fails_fast() {
        let executor = FakeExecutor::new(None, 1);

        let err = run_query(
            &executor,
            &CancellationToken::new(),
            "production",
            &count_query(),
            fast_poll(),
            &mut std::io::sink(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ResolveError::MissingHandle));
        assert_eq!(executor.status_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_query_times_out_while_running() {
        let executor = FakeExecutor::new(Some("job-1"), u32::MAX);
        let poll = PollConfig {
            timeout: Duration::from_millis(200),
            ..fast_poll()
        };

        let err = run_query(
            &executor,
            &CancellationToken::new(),
            "production",
            &count_query(),
            poll,
            &mut std::io::sink(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ResolveError::Timeout));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_query_canceled_before_submit() {
        let executor = FakeExecutor::new(Some("job-1"), 1);
        let ctx = CancellationToken::new();
        ctx.cancel();

        let err = run_query(
            &executor,
            &ctx,
            "production",
            &count_query(),
            fast_poll(),
            &mut std::io::sink(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ResolveError::Canceled));
        assert!(executor.calls().is_empty());
    }
}
