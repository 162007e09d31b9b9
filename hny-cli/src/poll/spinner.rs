//! Terminal spinner decorator
//!
//! Draws on stderr and ticks on its own timer thread, so the wrapped future's
//! schedule is untouched. The wrapped future's result is returned as is.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

/// Run `work` while showing a spinner labelled `title`
///
/// On success the spinner is cleared. On failure it is left on screen with
/// the error, and the same error is returned to the caller.
pub async fn with_spinner<T, E, Fut>(title: &str, work: Fut) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(title.to_string());
    spinner.enable_steady_tick(TICK);

    let result = work.await;

    match &result {
        Ok(_) => spinner.finish_and_clear(),
        Err(e) => spinner.abandon_with_message(format!("{} {}", title, e.to_string().red())),
    }

    result
}
