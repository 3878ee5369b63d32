//! Directory endpoints: employees and the hardware type taxonomy
//!
//! Both lists come from configuration. The inventory treats them as opaque
//! string sets and does not enforce referential integrity against them.

use axum::{extract::State, Json};

/// List employees available for assignment
#[utoipa::path(
    get,
    path = "/directory/employees",
    tag = "directory",
    responses(
        (status = 200, description = "Employee directory", body = Vec<String>)
    )
)]
pub async fn list_employees(State(state): State<crate::AppState>) -> Json<Vec<String>> {
    Json(state.config.inventory.employees.clone())
}

/// List the configured hardware types
#[utoipa::path(
    get,
    path = "/directory/hardware-types",
    tag = "directory",
    responses(
        (status = 200, description = "Hardware type taxonomy", body = Vec<String>)
    )
)]
pub async fn list_hardware_types(State(state): State<crate::AppState>) -> Json<Vec<String>> {
    Json(state.config.inventory.hardware_types.clone())
}
