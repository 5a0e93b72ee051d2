//! Authenticated user lookups

use async_trait::async_trait;

use crate::client::models::{Collaboration, Me};
use crate::error::Result;

/// Who the token belongs to and where they collaborate
#[async_trait]
pub trait InfoApi: Send + Sync {
    /// The authenticated user
    async fn me(&self) -> Result<Me>;

    /// Organizations the authenticated user belongs to
    async fn collaborations(&self) -> Result<Vec<Collaboration>>;
}
