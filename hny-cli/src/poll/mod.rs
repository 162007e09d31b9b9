//! Poll engine
//!
//! Blocks until a caller-supplied check reports completion, a deadline
//! elapses, or the caller's token is cancelled.
//!
//! There is exactly one loop. Interactive mode wraps that loop in a terminal
//! spinner (see [`spinner`]); the spinner never influences which checks run or
//! which error comes back.

mod spinner;

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default delay between checks
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Default wall-clock budget for one poll
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Default spinner label
pub const DEFAULT_TITLE: &str = "Loading...";

/// Configuration for one polling operation
///
/// Zero durations and an empty title fall back to the defaults when read.
#[derive(Debug, Clone, Default)]
pub struct PollConfig {
    pub interval: Duration,
    pub timeout: Duration,
    pub title: String,
    pub interactive: bool,
}

impl PollConfig {
    /// Creates a configuration with the given spinner title and default timings
    pub fn titled(title: impl Into<String>, interactive: bool) -> Self {
        Self {
            title: title.into(),
            interactive,
            ..Default::default()
        }
    }

    /// Delay between checks
    pub fn interval(&self) -> Duration {
        if self.interval.is_zero() {
            DEFAULT_INTERVAL
        } else {
            self.interval
        }
    }

    /// Total budget for the poll
    pub fn timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        }
    }

    /// Label shown next to the spinner
    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &self.title
        }
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check<T> {
    /// The work is done; polling stops with this value
    Complete(T),
    /// Not done yet; check again after the next interval
    Pending,
}

/// Terminal errors of a poll
#[derive(Debug, Error)]
pub enum PollError<E> {
    /// The configured timeout elapsed before the check completed
    #[error("polling timed out")]
    Timeout,

    /// The caller's token was cancelled
    #[error("polling canceled")]
    Canceled,

    /// The check itself failed; carried through unmodified
    #[error("{0}")]
    Check(E),
}

/// Poll `check` until it completes, the timeout elapses, or `ctx` is cancelled
///
/// The first check runs immediately. Subsequent checks run on a ticker every
/// `config.interval()`. At most one check is in flight at a time. Each check
/// receives a child of `ctx` that is also cancelled when the deadline passes,
/// and an in-flight check future is dropped as soon as either fires.
///
/// # Arguments
/// * `ctx` - Caller's cancellation token
/// * `config` - Interval, timeout, title and mode
/// * `check` - Called once per attempt
///
/// # Errors
/// - [`PollError::Check`] with the check's own error, without retrying
/// - [`PollError::Timeout`] when the deadline passes first
/// - [`PollError::Canceled`] when `ctx` is cancelled first; this wins over a
///   simultaneous timeout
pub async fn poll<T, E, F, Fut>(
    ctx: &CancellationToken,
    config: &PollConfig,
    check: F,
) -> Result<T, PollError<E>>
where
    F: FnMut(CancellationToken) -> Fut,
    Fut: Future<Output = Result<Check<T>, E>>,
    E: std::fmt::Display,
{
    if config.interactive {
        spinner::with_spinner(config.title(), run(ctx, config, check)).await
    } else {
        run(ctx, config, check).await
    }
}

/// The headless loop shared by both modes
async fn run<T, E, F, Fut>(
    ctx: &CancellationToken,
    config: &PollConfig,
    mut check: F,
) -> Result<T, PollError<E>>
where
    F: FnMut(CancellationToken) -> Fut,
    Fut: Future<Output = Result<Check<T>, E>>,
{
    let interval = config.interval();
    let timeout = config.timeout();
    let started = Instant::now();

    let attempt_ctx = ctx.child_token();
    let _attempt_guard = attempt_ctx.clone().drop_guard();

    let deadline = time::sleep_until(started + timeout);
    tokio::pin!(deadline);

    let mut ticker = time::interval_at(started + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        debug!(title = config.title(), attempt, "Checking status");

        let outcome = tokio::select! {
            biased;

            _ = ctx.cancelled() => {
                warn!(title = config.title(), attempt, "Polling canceled during check");
                return Err(PollError::Canceled);
            }

            _ = &mut deadline => {
                attempt_ctx.cancel();
                warn!(title = config.title(), attempt, ?timeout, "Polling timed out during check");
                return Err(PollError::Timeout);
            }

            outcome = check(attempt_ctx.clone()) => outcome,
        };

        match outcome {
            Ok(Check::Complete(value)) => {
                debug!(title = config.title(), attempt, elapsed = ?started.elapsed(), "Completed");
                return Ok(value);
            }
            Ok(Check::Pending) => {}
            Err(e) => return Err(PollError::Check(e)),
        }

        tokio::select! {
            biased;

            _ = ctx.cancelled() => {
                warn!(title = config.title(), attempt, "Polling canceled");
                return Err(PollError::Canceled);
            }

            _ = &mut deadline => {
                warn!(title = config.title(), attempt, ?timeout, "Polling timed out");
                return Err(PollError::Timeout);
            }

            _ = ticker.tick() => {}
        }
    }
}
