//! Asset form drafts
//!
//! An [`AssetDraft`] holds the add/edit form fields for an asset without
//! touching the store. The create and update handlers route every payload
//! through a draft, so the assignment/status coupling and the required-field
//! validation apply no matter what the client sent.

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{AssetChanges, AssetStatus, HardwareAsset, NewAsset},
    services::lifecycle,
};

#[derive(Debug, Clone, Default)]
pub struct AssetDraft {
    pub name: String,
    pub asset_type: String,
    pub serial_number: String,
    pub purchase_date: Option<NaiveDate>,
    // Coupled pair, only mutated through the setters below
    assigned_to: Option<String>,
    status: AssetStatus,
}

impl AssetDraft {
    /// Blank create draft, status Available
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit draft seeded from a stored record
    pub fn from_asset(asset: &HardwareAsset) -> Self {
        Self {
            name: asset.name.clone(),
            asset_type: asset.asset_type.clone(),
            serial_number: asset.serial_number.clone(),
            purchase_date: asset.purchase_date,
            assigned_to: asset.assigned_to.clone(),
            status: asset.status,
        }
    }

    /// Set or clear the assignee, re-deriving the status. An empty string
    /// counts as clearing. On a Retired draft this is a no-op; retirement
    /// is terminal.
    pub fn set_assigned_to(&mut self, employee: Option<&str>) {
        if self.status == AssetStatus::Retired {
            return;
        }
        self.assigned_to = employee.filter(|e| !e.is_empty()).map(String::from);
        self.status = lifecycle::derive_status_on_assignment_change(self.assigned_to.as_deref());
    }

    /// Set the status directly. Retiring clears the assignee in the same
    /// step; other statuses are checked against the assignee on submit.
    pub fn set_status(&mut self, status: AssetStatus) {
        if status == AssetStatus::Retired {
            self.assigned_to = None;
        }
        self.status = status;
    }

    /// Validate and emit the insert payload. No store call happens on
    /// failure; the error carries the offending fields.
    pub fn into_new_asset(self) -> AppResult<NewAsset> {
        let new_asset = NewAsset {
            name: self.name,
            asset_type: self.asset_type,
            serial_number: self.serial_number,
            assigned_to: self.assigned_to,
            status: self.status,
            purchase_date: self.purchase_date,
        };
        lifecycle::validate_required_fields(&new_asset)?;
        lifecycle::check_consistency(new_asset.status, new_asset.assigned_to.as_deref())?;
        Ok(new_asset)
    }

    /// Validate and emit only the fields that differ from the original
    /// record, so the store merges exactly what the form changed
    pub fn into_changes(self, original: &HardwareAsset) -> AppResult<AssetChanges> {
        let updated = self.into_new_asset()?;
        let mut changes = AssetChanges::default();
        if updated.name != original.name {
            changes.name = Some(updated.name);
        }
        if updated.asset_type != original.asset_type {
            changes.asset_type = Some(updated.asset_type);
        }
        if updated.serial_number != original.serial_number {
            changes.serial_number = Some(updated.serial_number);
        }
        if updated.assigned_to != original.assigned_to {
            changes.assigned_to = Some(updated.assigned_to);
        }
        if updated.status != original.status {
            changes.status = Some(updated.status);
        }
        if updated.purchase_date != original.purchase_date {
            changes.purchase_date = Some(updated.purchase_date);
        }
        Ok(changes)
    }
}
