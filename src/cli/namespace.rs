//! Orb namespace commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::input::confirm;
use crate::cli::{CommandContext, OwnerArgs};
use crate::client::OrbApi;
use crate::client::models::Owner;
use crate::error::Result;

/// Run the namespace create command
///
/// An organization named by `<vcs-type> <org-name>` is resolved to its ID
/// first; namespaces are created against organization IDs.
pub async fn create(
    opts: &GlobalOptions,
    name: &str,
    owner: &OwnerArgs,
    args: &[String],
    no_prompt: bool,
) -> Result<()> {
    let (owner, _) = owner.resolve_exact::<0>(args, "with no further arguments")?;
    let ctx = CommandContext::new(opts)?;

    let org_id = match &owner {
        Owner::Id(id) => id.clone(),
        Owner::Slug { vcs, name } => ctx.client.organization_id(*vcs, name).await?,
    };

    let prompt = format!(
        "Create namespace '{}' for {}? Namespaces are public and cannot be renamed",
        name, owner
    );
    if !confirm(&prompt, no_prompt)? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client.create_namespace(name, &org_id).await?;
    println!("{} Namespace {} created.", "✓".green(), name.bold());
    Ok(())
}
