//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assets, directory, health, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hardware Hub API",
        version = "1.0.0",
        description = "Hardware asset inventory REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Assets
        assets::list_assets,
        assets::create_asset,
        assets::get_asset,
        assets::update_asset,
        assets::delete_asset,
        assets::assign_asset,
        assets::unassign_asset,
        assets::retire_asset,
        // Stats
        stats::get_stats,
        // Directory
        directory::list_employees,
        directory::list_hardware_types,
    ),
    components(
        schemas(
            // Assets
            crate::models::asset::HardwareAsset,
            crate::models::asset::AssetStatus,
            crate::models::asset::CreateAsset,
            crate::models::asset::UpdateAsset,
            assets::AssetQuery,
            assets::AssetListResponse,
            assets::AssignAsset,
            // Stats
            stats::InventoryStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "assets", description = "Hardware asset management"),
        (name = "stats", description = "Inventory statistics"),
        (name = "directory", description = "Employee directory and hardware type taxonomy")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
