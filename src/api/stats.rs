//! Inventory statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Summary counts for the inventory dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct InventoryStats {
    /// Inventory size
    pub total: i64,
    pub assigned: i64,
    pub available: i64,
    pub retired: i64,
    /// Assets created within the last 30 days (boundary inclusive)
    pub recently_added: i64,
}

/// Inventory statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Inventory statistics", body = InventoryStats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<InventoryStats>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
