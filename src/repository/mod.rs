//! Repository layer for database operations

pub mod assets;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{AssetChanges, HardwareAsset, NewAsset},
};

/// Persistence contract for hardware assets. Kept behind a trait so the
/// service layer can be tested against a mock store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// All assets, newest first
    async fn list(&self) -> AppResult<Vec<HardwareAsset>>;
    /// Single asset by id, `NotFound` if absent
    async fn get(&self, id: Uuid) -> AppResult<HardwareAsset>;
    /// Insert a new asset; the store assigns id and timestamps
    async fn insert(&self, data: &NewAsset) -> AppResult<HardwareAsset>;
    /// Apply the supplied field changes and refresh `updated_at`
    async fn update(&self, id: Uuid, changes: &AssetChanges) -> AppResult<HardwareAsset>;
    /// Hard-delete an asset
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Main repository struct holding the per-domain stores
#[derive(Clone)]
pub struct Repository {
    pub assets: assets::PgAssetStore,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            assets: assets::PgAssetStore::new(pool),
        }
    }
}
