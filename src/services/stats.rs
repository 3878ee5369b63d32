//! Inventory statistics service

use chrono::{DateTime, Duration, Utc};

use crate::{
    api::stats::InventoryStats,
    error::AppResult,
    models::{AssetStatus, HardwareAsset},
    services::inventory::InventoryService,
};

/// Window for the recently-added count
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Summary counts over a listing. An asset created exactly 30 days before
/// `now` still counts as recently added (the boundary is inclusive).
pub fn compute_stats(assets: &[HardwareAsset], now: DateTime<Utc>) -> InventoryStats {
    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    let mut stats = InventoryStats {
        total: assets.len() as i64,
        ..Default::default()
    };
    for asset in assets {
        match asset.status {
            AssetStatus::Assigned => stats.assigned += 1,
            AssetStatus::Available => stats.available += 1,
            AssetStatus::Retired => stats.retired += 1,
        }
        if asset.created_at >= cutoff {
            stats.recently_added += 1;
        }
    }
    stats
}

#[derive(Clone)]
pub struct StatsService {
    inventory: InventoryService,
}

impl StatsService {
    pub fn new(inventory: InventoryService) -> Self {
        Self { inventory }
    }

    /// Current stats over the (cached) listing
    pub async fn get_stats(&self) -> AppResult<InventoryStats> {
        let assets = self.inventory.list_assets().await?;
        Ok(compute_stats(&assets, Utc::now()))
    }
}
