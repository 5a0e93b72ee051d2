//! Organization owner arguments
//!
//! Commands scoped to an organization take either `--org-id <uuid>` or the
//! leading positionals `<vcs-type> <org-name>`.

use clap::Args;

use crate::client::models::Owner;
use crate::error::{Error, Result};

#[derive(Args, Debug, Clone, Default)]
pub struct OwnerArgs {
    /// Organization ID, instead of <vcs-type> <org-name>
    #[arg(long = "org-id")]
    pub org_id: Option<String>,
}

impl OwnerArgs {
    /// Resolve the owner and return the positionals that follow it.
    pub fn resolve<'a>(&self, args: &'a [String]) -> Result<(Owner, &'a [String])> {
        if let Some(id) = self.org_id.as_deref().filter(|id| !id.is_empty()) {
            return Ok((Owner::Id(id.to_string()), args));
        }

        match args {
            [vcs, org, rest @ ..] => {
                let owner = Owner::from_parts(None, Some(vcs.as_str()), Some(org.as_str()))?;
                Ok((owner, rest))
            }
            _ => Err(Error::InvalidArgument(
                "provide --org-id or both <vcs-type> and <org-name>".to_string(),
            )),
        }
    }

    /// Resolve the owner and require exactly `N` remaining positionals.
    pub fn resolve_exact<'a, const N: usize>(
        &self,
        args: &'a [String],
        usage: &str,
    ) -> Result<(Owner, &'a [String; N])> {
        let (owner, rest) = self.resolve(args)?;
        let rest = rest.try_into().map_err(|_| {
            Error::InvalidArgument(format!(
                "expected [<vcs-type> <org-name>] {}, got {} argument(s) after the owner",
                usage,
                rest.len()
            ))
        })?;
        Ok((owner, rest))
    }
}
