//! Hardware asset model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a hardware asset.
///
/// Stored as TEXT; the JSON representation uses the same labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
pub enum AssetStatus {
    #[default]
    Available,
    Assigned,
    Retired,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::Retired => "Retired",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hardware asset record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HardwareAsset {
    pub id: Uuid,
    /// Asset name / description
    pub name: String,
    /// Hardware type (e.g. "Laptop", "Monitor")
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub asset_type: String,
    pub serial_number: String,
    /// Employee the asset is assigned to, if any
    pub assigned_to: Option<String>,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create asset request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAsset {
    /// Required fields default to empty so that missing keys are reported
    /// as validation failures with the full field list, not a body rejection.
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub asset_type: String,
    #[serde(default)]
    pub serial_number: String,
    pub assigned_to: Option<String>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<NaiveDate>,
}

/// Update asset request. Absent fields are left untouched; for `assigned_to`
/// and `purchase_date` an explicit `null` clears the stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAsset {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub serial_number: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub assigned_to: Option<Option<String>>,
    pub status: Option<AssetStatus>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub purchase_date: Option<Option<NaiveDate>>,
}

/// A validated asset ready for insertion; `status` is already consistent
/// with `assigned_to`
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewAsset {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Type is required"))]
    pub asset_type: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial_number: String,
    pub assigned_to: Option<String>,
    pub status: AssetStatus,
    pub purchase_date: Option<NaiveDate>,
}

/// Field-level changes for a persisted asset. `None` leaves a column
/// untouched; `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetChanges {
    pub name: Option<String>,
    pub asset_type: Option<String>,
    pub serial_number: Option<String>,
    pub assigned_to: Option<Option<String>>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<Option<NaiveDate>>,
}
