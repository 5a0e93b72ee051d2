//! Result limiting for list commands

use clap::Args;

/// Flatten into list commands backed by paginated endpoints.
///
/// Without a limit every page is fetched; with one, fetching stops as soon
/// as enough items are collected.
#[derive(Args, Debug, Default, Clone)]
pub struct LimitArgs {
    /// Maximum results to return
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}
