//! Business logic services

pub mod cache;
pub mod drafts;
pub mod inventory;
pub mod lifecycle;
pub mod stats;

use std::sync::Arc;

use crate::{repository::Repository, services::cache::CacheService};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository and optional cache
    pub fn new(repository: Repository, cache: Option<CacheService>) -> Self {
        let inventory = inventory::InventoryService::new(Arc::new(repository.assets), cache);
        let stats = stats::StatsService::new(inventory.clone());
        Self { inventory, stats }
    }
}
