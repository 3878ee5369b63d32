//! Inventory service
//!
//! Listing, filtering and every asset mutation. All writes go through the
//! lifecycle rules and the draft controller, then invalidate the cache so
//! the next read sees them.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{AssetChanges, AssetStatus, CreateAsset, HardwareAsset, UpdateAsset},
    repository::AssetStore,
    services::{cache::CacheService, drafts::AssetDraft, lifecycle},
};

/// Type filter value that matches every type
pub const ALL_TYPES: &str = "All Types";
/// Status filter value that matches every status
pub const ALL_STATUS: &str = "All Status";

/// Filter a listing: case-insensitive substring search over name, type,
/// serial number and assignee, ANDed with exact type and status matches.
/// `None`, an empty value or the sentinel passes everything; input order
/// is preserved.
pub fn filter_assets(
    mut assets: Vec<HardwareAsset>,
    search: Option<&str>,
    type_filter: Option<&str>,
    status_filter: Option<&str>,
) -> Vec<HardwareAsset> {
    assets.retain(|asset| {
        matches_search(asset, search)
            && matches_filter(&asset.asset_type, type_filter, ALL_TYPES)
            && matches_filter(asset.status.as_str(), status_filter, ALL_STATUS)
    });
    assets
}

fn matches_search(asset: &HardwareAsset, search: Option<&str>) -> bool {
    let term = match search {
        Some(term) if !term.is_empty() => term.to_lowercase(),
        _ => return true,
    };
    asset.name.to_lowercase().contains(&term)
        || asset.asset_type.to_lowercase().contains(&term)
        || asset.serial_number.to_lowercase().contains(&term)
        || asset
            .assigned_to
            .as_deref()
            .map_or(false, |assignee| assignee.to_lowercase().contains(&term))
}

fn matches_filter(value: &str, filter: Option<&str>, sentinel: &str) -> bool {
    match filter {
        Some(filter) if !filter.is_empty() && filter != sentinel => value == filter,
        _ => true,
    }
}

/// Inventory service coordinating the store, the cache and the lifecycle
/// rules
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn AssetStore>,
    cache: Option<CacheService>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn AssetStore>, cache: Option<CacheService>) -> Self {
        Self { store, cache }
    }

    /// Full listing, newest first, through the cache
    pub async fn list_assets(&self) -> AppResult<Vec<HardwareAsset>> {
        if let Some(cache) = &self.cache {
            if let Some(assets) = cache.get_listing().await {
                return Ok(assets);
            }
        }
        let assets = self.store.list().await?;
        if let Some(cache) = &self.cache {
            cache.put_listing(&assets).await;
        }
        Ok(assets)
    }

    /// Filtered listing plus the unfiltered total, for "Showing X of Y"
    pub async fn search_assets(
        &self,
        search: Option<&str>,
        type_filter: Option<&str>,
        status_filter: Option<&str>,
    ) -> AppResult<(Vec<HardwareAsset>, usize)> {
        let assets = self.list_assets().await?;
        let total = assets.len();
        let matched = filter_assets(assets, search, type_filter, status_filter);
        Ok((matched, total))
    }

    /// Single asset through the cache
    pub async fn get_asset(&self, id: Uuid) -> AppResult<HardwareAsset> {
        if let Some(cache) = &self.cache {
            if let Some(asset) = cache.get_asset(id).await {
                return Ok(asset);
            }
        }
        let asset = self.store.get(id).await?;
        if let Some(cache) = &self.cache {
            cache.put_asset(&asset).await;
        }
        Ok(asset)
    }

    /// Create an asset from the add form. The status is derived from the
    /// assignment, except that an explicit Retired sticks.
    pub async fn create_asset(&self, data: CreateAsset) -> AppResult<HardwareAsset> {
        let mut draft = AssetDraft::new();
        draft.name = data.name;
        draft.asset_type = data.asset_type;
        draft.serial_number = data.serial_number;
        draft.purchase_date = data.purchase_date;
        if let Some(status) = data.status {
            draft.set_status(status);
        }
        draft.set_assigned_to(data.assigned_to.as_deref());

        let new_asset = draft.into_new_asset()?;
        let created = self.store.insert(&new_asset).await?;
        self.invalidate(created.id).await;
        Ok(created)
    }

    /// Apply an edit-form update: merge the supplied fields through a
    /// draft. Retirement is terminal, so a Retired asset can still be
    /// corrected (name, serial, ...) but not reactivated or assigned.
    pub async fn update_asset(&self, id: Uuid, data: UpdateAsset) -> AppResult<HardwareAsset> {
        let original = self.store.get(id).await?;
        if original.status == AssetStatus::Retired {
            if data
                .status
                .map_or(false, |status| status != AssetStatus::Retired)
            {
                return Err(AppError::BusinessRule(
                    "A retired asset cannot be reactivated".to_string(),
                ));
            }
            let assigns = data.assigned_to.as_ref().map_or(false, |assignee| {
                assignee.as_deref().map_or(false, |a| !a.is_empty())
            });
            if assigns {
                return Err(AppError::BusinessRule(
                    "A retired asset cannot be assigned".to_string(),
                ));
            }
        }

        let mut draft = AssetDraft::from_asset(&original);
        if let Some(name) = data.name {
            draft.name = name;
        }
        if let Some(asset_type) = data.asset_type {
            draft.asset_type = asset_type;
        }
        if let Some(serial_number) = data.serial_number {
            draft.serial_number = serial_number;
        }
        if let Some(purchase_date) = data.purchase_date {
            draft.purchase_date = purchase_date;
        }
        if let Some(status) = data.status {
            draft.set_status(status);
        }
        if let Some(assigned_to) = data.assigned_to {
            draft.set_assigned_to(assigned_to.as_deref());
        }

        let changes = draft.into_changes(&original)?;
        let updated = self.store.update(id, &changes).await?;
        self.invalidate(id).await;
        Ok(updated)
    }

    /// Assign an asset to an employee
    pub async fn assign_asset(&self, id: Uuid, employee: &str) -> AppResult<HardwareAsset> {
        if employee.is_empty() {
            return Err(AppError::Validation {
                message: "An employee is required to assign an asset".to_string(),
                fields: vec!["assigned_to".to_string()],
            });
        }
        let asset = self.store.get(id).await?;
        if asset.status == AssetStatus::Retired {
            return Err(AppError::BusinessRule(
                "A retired asset cannot be assigned".to_string(),
            ));
        }
        let updated = lifecycle::assign(asset, employee);
        self.write_lifecycle_change(id, updated).await
    }

    /// Clear an asset's assignment, back to Available
    pub async fn unassign_asset(&self, id: Uuid) -> AppResult<HardwareAsset> {
        let asset = self.store.get(id).await?;
        if asset.status == AssetStatus::Retired {
            return Err(AppError::BusinessRule(
                "A retired asset cannot be unassigned".to_string(),
            ));
        }
        let updated = lifecycle::unassign(asset);
        self.write_lifecycle_change(id, updated).await
    }

    /// Retire an asset in place: the record survives with status Retired
    /// and no assignee. Allowed from any state and idempotent.
    pub async fn retire_in_place(&self, id: Uuid) -> AppResult<HardwareAsset> {
        let asset = self.store.get(id).await?;
        let updated = lifecycle::retire(asset);
        self.write_lifecycle_change(id, updated).await
    }

    /// Permanently delete an asset's record
    pub async fn remove_permanently(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id).await?;
        self.invalidate(id).await;
        Ok(())
    }

    /// Persist the status/assignee pair produced by a lifecycle transition
    async fn write_lifecycle_change(
        &self,
        id: Uuid,
        updated: HardwareAsset,
    ) -> AppResult<HardwareAsset> {
        let changes = AssetChanges {
            assigned_to: Some(updated.assigned_to),
            status: Some(updated.status),
            ..Default::default()
        };
        let saved = self.store.update(id, &changes).await?;
        self.invalidate(id).await;
        Ok(saved)
    }

    async fn invalidate(&self, id: Uuid) {
        if let Some(cache) = &self.cache {
            cache.invalidate(id).await;
        }
    }
}
