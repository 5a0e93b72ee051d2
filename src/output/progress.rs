//! Spinner shown on stderr while multi-page fetches run

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner; hidden when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        progress.set_style(style);
    }
    progress.set_message(message.to_string());
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

/// Await `work` behind a spinner, clearing it afterwards.
pub async fn with_spinner<T, F>(message: &str, work: F) -> T
where
    F: Future<Output = T>,
{
    let progress = spinner(message);
    let result = work.await;
    progress.finish_and_clear();
    result
}
