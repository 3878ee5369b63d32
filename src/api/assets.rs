//! Hardware asset API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CreateAsset, HardwareAsset, UpdateAsset},
};

/// Query parameters for the asset listing
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AssetQuery {
    /// Case-insensitive substring over name, type, serial number and assignee
    pub search: Option<String>,
    /// Exact type match; "All Types" or absent passes every asset
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    /// Exact status match; "All Status" or absent passes every asset
    pub status: Option<String>,
}

/// Filtered asset listing with the counts behind "Showing X of Y items"
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetListResponse {
    pub items: Vec<HardwareAsset>,
    /// Number of assets matching the filters
    pub matched: usize,
    /// Inventory size before filtering
    pub total: usize,
}

/// Assign asset request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignAsset {
    /// Employee display name, usually from the directory
    #[serde(default)]
    pub assigned_to: String,
}

/// List assets, optionally filtered
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    params(AssetQuery),
    responses(
        (status = 200, description = "Filtered asset listing", body = AssetListResponse)
    )
)]
pub async fn list_assets(
    State(state): State<crate::AppState>,
    Query(query): Query<AssetQuery>,
) -> AppResult<Json<AssetListResponse>> {
    let (items, total) = state
        .services
        .inventory
        .search_assets(
            query.search.as_deref(),
            query.asset_type.as_deref(),
            query.status.as_deref(),
        )
        .await?;
    let matched = items.len();
    Ok(Json(AssetListResponse {
        items,
        matched,
        total,
    }))
}

/// Create an asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = HardwareAsset),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<HardwareAsset>)> {
    let asset = state.services.inventory.create_asset(data).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// Get asset by ID
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset details", body = HardwareAsset),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<HardwareAsset>> {
    let asset = state.services.inventory.get_asset(id).await?;
    Ok(Json(asset))
}

/// Update an asset (edit form semantics: only the supplied fields change)
#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    request_body = UpdateAsset,
    responses(
        (status = 200, description = "Asset updated", body = HardwareAsset),
        (status = 422, description = "Retired asset cannot be reactivated or assigned", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateAsset>,
) -> AppResult<Json<HardwareAsset>> {
    let asset = state.services.inventory.update_asset(id, data).await?;
    Ok(Json(asset))
}

/// Permanently delete an asset
#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.inventory.remove_permanently(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assign an asset to an employee
#[utoipa::path(
    post,
    path = "/assets/{id}/assign",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    request_body = AssignAsset,
    responses(
        (status = 200, description = "Asset assigned", body = HardwareAsset),
        (status = 422, description = "Retired asset cannot be assigned", body = crate::error::ErrorResponse)
    )
)]
pub async fn assign_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<AssignAsset>,
) -> AppResult<Json<HardwareAsset>> {
    let asset = state
        .services
        .inventory
        .assign_asset(id, &data.assigned_to)
        .await?;
    Ok(Json(asset))
}

/// Clear an asset's assignment, back to Available
#[utoipa::path(
    post,
    path = "/assets/{id}/unassign",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Assignment cleared", body = HardwareAsset),
        (status = 422, description = "Retired asset cannot be unassigned", body = crate::error::ErrorResponse)
    )
)]
pub async fn unassign_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<HardwareAsset>> {
    let asset = state.services.inventory.unassign_asset(id).await?;
    Ok(Json(asset))
}

/// Retire an asset in place: the record survives with status Retired
#[utoipa::path(
    post,
    path = "/assets/{id}/retire",
    tag = "assets",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset retired", body = HardwareAsset),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn retire_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<HardwareAsset>> {
    let asset = state.services.inventory.retire_in_place(id).await?;
    Ok(Json(asset))
}
