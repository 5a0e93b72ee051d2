//! Repository listing for GitHub App organizations

use crate::cli::LimitArgs;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::client::RepositoryApi;
use crate::client::models::Repository;
use crate::error::Result;
use crate::models::RepositoryDisplay;

/// Run the repository list command
pub async fn list(opts: &GlobalOptions, org_id: &str, limit: &LimitArgs) -> Result<()> {
    let org_id = org_id.to_string();

    run_list_command::<Repository, RepositoryDisplay, _, _>(
        opts,
        limit,
        "repositories",
        |client, limit| async move { client.list_repositories(&org_id, limit).await },
    )
    .await
}
