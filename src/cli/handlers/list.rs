//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Create command context
//! 2. Fetch every page (up to the limit) behind a spinner
//! 3. Convert to display type
//! 4. Print output

use std::future::Future;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, LimitArgs};
use crate::client::CircleCiClient;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::progress::with_spinner;

/// Run a standard list command with the common fetch → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Context`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Schedule, ScheduleDisplay, _, _>(
///     opts,
///     limit,
///     "schedules",
///     |client, limit| async move { client.list_schedules(&slug, limit).await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    limit: &LimitArgs,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(CircleCiClient, Option<usize>) -> Fut,
{
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching {} (limit {:?})", resource_name, limit.limit);

    let message = format!("Fetching {}...", resource_name);
    let items = with_spinner(&message, fetcher(ctx.client.clone(), limit.limit)).await?;

    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = items.into_iter().map(D::from).collect();
    display_items.print(ctx.format)?;

    Ok(())
}
