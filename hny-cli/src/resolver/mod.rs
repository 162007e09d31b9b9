//! Async job resolver
//!
//! Drives a submit-then-poll protocol to a final result: submit a unit of
//! work, take the handle the server returns, then poll a status check bound
//! to that handle until it reports completion.

pub mod query;

use std::fmt;
use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::poll::{self, Check, PollConfig, PollError};

/// Opaque, non-empty identifier of a submitted job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle(String);

impl JobHandle {
    /// Wrap a server-assigned ID, rejecting empty or blank values
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ways resolving an async job can fail
#[derive(Debug, Error)]
pub enum ResolveError<E> {
    /// Submitting the job failed
    #[error("failed to submit job: {0}")]
    Submission(E),

    /// The server accepted the job but returned no handle to poll
    #[error("failed to submit job: server returned no job handle")]
    MissingHandle,

    /// A status check failed
    #[error("failed to check job status: {0}")]
    Check(E),

    /// The poll budget ran out before the job finished
    #[error("polling timed out; the job may still be running server-side")]
    Timeout,

    /// The wait was cancelled by the user
    #[error("canceled while waiting; the job may still be running server-side")]
    Canceled,
}

impl<E> ResolveError<E> {
    /// True for both submission failure kinds
    pub fn is_submission(&self) -> bool {
        matches!(self, Self::Submission(_) | Self::MissingHandle)
    }
}

impl<E> From<PollError<E>> for ResolveError<E> {
    fn from(err: PollError<E>) -> Self {
        match err {
            PollError::Timeout => Self::Timeout,
            PollError::Canceled => Self::Canceled,
            PollError::Check(e) => Self::Check(e),
        }
    }
}

/// Submit a job and poll it to completion
///
/// # Arguments
/// * `ctx` - Caller's cancellation token
/// * `config` - Poll settings
/// * `submit` - Creates the job; returns the server-assigned ID, if any. Its
///   token is a child of `ctx`, and the submission is dropped when `ctx` fires
/// * `fetch_status` - Returns the current snapshot and whether it is complete
///
/// # Returns
/// The snapshot from the first status check that reported completion
///
/// # Errors
/// Submission errors and a missing handle fail fast without any status check.
/// Cancellation before or during submission returns [`ResolveError::Canceled`].
/// Status check errors, timeout and cancellation come from the poll engine.
pub async fn resolve_async_job<T, E, S, SFut, F, FFut>(
    ctx: &CancellationToken,
    config: &PollConfig,
    submit: S,
    mut fetch_status: F,
) -> Result<T, ResolveError<E>>
where
    S: FnOnce(CancellationToken) -> SFut,
    SFut: Future<Output = Result<Option<String>, E>>,
    F: FnMut(JobHandle, CancellationToken) -> FFut,
    FFut: Future<Output = Result<(T, bool), E>>,
    E: fmt::Display,
{
    if ctx.is_cancelled() {
        return Err(ResolveError::Canceled);
    }

    let submitted = tokio::select! {
        biased;

        _ = ctx.cancelled() => {
            warn!("Canceled while submitting job");
            return Err(ResolveError::Canceled);
        }

        submitted = submit(ctx.child_token()) => submitted,
    };

    let handle = submitted
        .map_err(ResolveError::Submission)?
        .and_then(JobHandle::new)
        .ok_or(ResolveError::MissingHandle)?;

    info!(handle = %handle, "Job submitted");

    let result = poll::poll(ctx, config, |token| {
        let status = fetch_status(handle.clone(), token);
        async move {
            let (snapshot, complete) = status.await?;
            debug!(complete, "Job status");
            Ok::<_, E>(if complete {
                Check::Complete(snapshot)
            } else {
                Check::Pending
            })
        }
    })
    .await?;

    Ok(result)
}
