use async_trait::async_trait;

use super::CircleCiClient;
use crate::client::api::InfoApi;
use crate::client::models::{Collaboration, Me};
use crate::error::Result;

#[async_trait]
impl InfoApi for CircleCiClient {
    async fn me(&self) -> Result<Me> {
        self.rest.get("/me", &[]).await
    }

    async fn collaborations(&self) -> Result<Vec<Collaboration>> {
        self.rest.get("/me/collaborations", &[]).await
    }
}
