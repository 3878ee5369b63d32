//! Asset lifecycle rules
//!
//! Pure functions coupling an asset's status to its assignment. The service
//! layer runs these before every persisted write, so the invariants hold no
//! matter which endpoint or payload produced the change.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{AssetStatus, HardwareAsset, NewAsset},
};

/// Status implied by an assignee value: any non-empty assignee means
/// Assigned, otherwise Available. Callers never invoke this for Retired
/// assets; retirement is handled by [`retire`].
pub fn derive_status_on_assignment_change(assigned_to: Option<&str>) -> AssetStatus {
    match assigned_to {
        Some(employee) if !employee.is_empty() => AssetStatus::Assigned,
        _ => AssetStatus::Available,
    }
}

/// Assignment transition: sets the assignee and derives the status
pub fn assign(mut asset: HardwareAsset, employee: &str) -> HardwareAsset {
    asset.assigned_to = Some(employee.to_string());
    asset.status = derive_status_on_assignment_change(asset.assigned_to.as_deref());
    asset
}

/// Unassignment transition: clears the assignee, status back to Available
pub fn unassign(mut asset: HardwareAsset) -> HardwareAsset {
    asset.assigned_to = None;
    asset.status = derive_status_on_assignment_change(None);
    asset
}

/// Retirement transition: terminal, clears the assignee in the same step
pub fn retire(mut asset: HardwareAsset) -> HardwareAsset {
    asset.assigned_to = None;
    asset.status = AssetStatus::Retired;
    asset
}

/// Validate the required fields of a new asset, reporting every missing
/// field at once under its wire name
pub fn validate_required_fields(data: &NewAsset) -> AppResult<()> {
    match data.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| wire_field_name(field).to_string())
                .collect();
            fields.sort();
            Err(AppError::Validation {
                message: format!("Missing required fields: {}", fields.join(", ")),
                fields,
            })
        }
    }
}

/// Check that a status/assignee pair is consistent before it is persisted.
/// An empty assignee counts as absent.
pub fn check_consistency(status: AssetStatus, assigned_to: Option<&str>) -> AppResult<()> {
    let has_assignee = assigned_to.map_or(false, |employee| !employee.is_empty());
    let consistent = match status {
        AssetStatus::Assigned => has_assignee,
        AssetStatus::Available | AssetStatus::Retired => !has_assignee,
    };
    if consistent {
        Ok(())
    } else {
        let message = if has_assignee {
            format!("Status {} cannot carry an assignee", status)
        } else {
            "Status Assigned requires an assignee".to_string()
        };
        Err(AppError::Validation {
            message,
            fields: vec!["status".to_string(), "assigned_to".to_string()],
        })
    }
}

/// Map a model field name to its wire name
fn wire_field_name(field: &str) -> &str {
    match field {
        "asset_type" => "type",
        other => other,
    }
}
