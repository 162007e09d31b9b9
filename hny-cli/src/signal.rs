//! Interrupt handling
//!
//! Ctrl-C cancels the root token. Registering the listener replaces the
//! default SIGINT action, so every command runs through [`until_cancelled`]
//! to stay interruptible even when it never looks at the token itself.

use std::future::Future;

use anyhow::{Result, bail};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Cancel `token` when the process receives an interrupt
///
/// Returns immediately; the listener runs on a background task.
pub fn cancel_on_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!(message = "Signal received.", signal = "SIGINT");
                token.cancel();
            }
            Err(e) => warn!("Failed to listen for interrupt: {}", e),
        }
    });
}

/// Run `work` until it finishes or `ctx` is cancelled
///
/// `work` is polled first, so a command that observes `ctx` on its own gets
/// to return its own cancellation error. Anything else is dropped mid-flight
/// and reported as interrupted.
pub async fn until_cancelled<T, Fut>(ctx: &CancellationToken, work: Fut) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;

        result = work => result,

        _ = ctx.cancelled() => {
            warn!("Command interrupted");
            bail!("Interrupted; a request already sent may still complete server-side")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn cancel_after(ctx: &CancellationToken, delay: Duration) {
        let ctx = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            ctx.cancel();
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_work_passes_through() {
        let ctx = CancellationToken::new();
        let value = until_cancelled(&ctx, async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_work_is_interrupted() {
        let ctx = CancellationToken::new();
        cancel_after(&ctx, Duration::from_millis(50));

        let result: Result<()> = tokio::time::timeout(
            Duration::from_secs(3600),
            until_cancelled(&ctx, std::future::pending()),
        )
        .await
        .expect("stalled command ignored the interrupt");

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Interrupted"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_work_observing_token_reports_its_own_error() {
        let ctx = CancellationToken::new();
        cancel_after(&ctx, Duration::from_millis(50));

        let token = ctx.clone();
        let result: Result<()> = until_cancelled(&ctx, async move {
            token.cancelled().await;
            bail!("query canceled")
        })
        .await;

        assert_eq!(result.unwrap_err().to_string(), "query canceled");
    }

    #[tokio::test]
    async fn test_work_error_is_not_masked() {
        let ctx = CancellationToken::new();
        let result: Result<()> = until_cancelled(&ctx, async { bail!("boom") }).await;
        assert_eq!(result.unwrap_err().to_string(), "boom");
    }
}
