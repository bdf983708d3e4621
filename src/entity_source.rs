use crate::{Entity, EnricherError};
use async_trait::async_trait;

/// Something that can load a single entity by ID.
#[async_trait]
pub trait EntitySource {
    async fn fetch_entity(&self, id: &str) -> Result<Entity, EnricherError>;
}
