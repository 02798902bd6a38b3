use crate::domain::model::{Blend, Spice};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream read side of the catalog: full snapshots of both entity
/// collections.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_spices(&self) -> Result<Vec<Spice>>;
    async fn fetch_blends(&self) -> Result<Vec<Blend>>;
}

/// Persistence for locally created blends. Loads must reflect every prior
/// append until a reset.
pub trait BlendStore: Send + Sync {
    fn load(&self) -> Result<Vec<Blend>>;
    fn append(&self, blend: Blend) -> Result<()>;
    fn reset(&self) -> Result<()>;
}
