//! API integration tests
//!
//! These run against a live server (with its database and Redis) listening
//! on localhost.

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn unique_serial() -> String {
    format!("SN-{}", Uuid::new_v4().simple())
}

/// Helper to create an asset and return its JSON body
async fn create_asset(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

/// Best-effort cleanup of a created asset
async fn remove_asset(client: &Client, id: &str) {
    let _ = client
        .delete(format!("{}/assets/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_then_list_includes_new_asset() {
    let client = Client::new();

    let created = create_asset(
        &client,
        json!({
            "name": "MacBook Pro 14\"",
            "type": "Laptop",
            "serial_number": unique_serial()
        }),
    )
    .await;
    let id = created["id"].as_str().expect("No asset ID").to_string();
    assert_eq!(created["status"], "Available");

    // Read-your-writes: the listing must include the new record
    let response = client
        .get(format!("{}/assets", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body["items"].as_array().expect("items is not an array");
    assert!(items.iter().any(|item| item["id"] == id.as_str()));
    assert!(body["total"].as_u64().unwrap() >= 1);

    remove_asset(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_create_with_assignee_is_assigned() {
    let client = Client::new();

    let created = create_asset(
        &client,
        json!({
            "name": "Dell UltraSharp 27\"",
            "type": "Monitor",
            "serial_number": unique_serial(),
            "assigned_to": "Jane Smith"
        }),
    )
    .await;

    assert_eq!(created["status"], "Assigned");
    assert_eq!(created["assigned_to"], "Jane Smith");

    remove_asset(&client, created["id"].as_str().unwrap()).await;
}

#[tokio::test]
#[ignore]
async fn test_create_missing_fields_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/assets", BASE_URL))
        .json(&json!({ "name": "Orphan" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    let fields = body["fields"].as_array().expect("fields is not an array");
    assert!(fields.contains(&json!("serial_number")));
    assert!(fields.contains(&json!("type")));
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_asset_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/assets/{}", BASE_URL, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_assign_unassign_cycle() {
    let client = Client::new();

    let created = create_asset(
        &client,
        json!({
            "name": "Logitech MX Master 3",
            "type": "Mouse",
            "serial_number": unique_serial()
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    // Assign
    let response = client
        .post(format!("{}/assets/{}/assign", BASE_URL, id))
        .json(&json!({ "assigned_to": "Mike Johnson" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Assigned");
    assert_eq!(body["assigned_to"], "Mike Johnson");

    // Unassign
    let response = client
        .post(format!("{}/assets/{}/unassign", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Available");
    assert!(body["assigned_to"].is_null());

    remove_asset(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_assign_requires_employee() {
    let client = Client::new();

    let created = create_asset(
        &client,
        json!({
            "name": "Jabra Evolve2 65",
            "type": "Headset",
            "serial_number": unique_serial()
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/assets/{}/assign", BASE_URL, id))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["fields"], json!(["assigned_to"]));

    remove_asset(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_retire_preserves_the_record() {
    let client = Client::new();

    let created = create_asset(
        &client,
        json!({
            "name": "ThinkPad T480",
            "type": "Laptop",
            "serial_number": unique_serial(),
            "assigned_to": "David Brown"
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    // Retire clears the assignee and keeps the row
    let response = client
        .post(format!("{}/assets/{}/retire", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Retired");
    assert!(body["assigned_to"].is_null());

    let response = client
        .get(format!("{}/assets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Retired");

    // A retired asset cannot be assigned again
    let response = client
        .post(format!("{}/assets/{}/assign", BASE_URL, id))
        .json(&json!({ "assigned_to": "Jane Smith" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    remove_asset(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_delete_removes_the_record() {
    let client = Client::new();

    let created = create_asset(
        &client,
        json!({
            "name": "Anker USB-C Dock",
            "type": "Dock",
            "serial_number": unique_serial()
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = client
        .delete(format!("{}/assets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/assets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_merges_supplied_fields() {
    let client = Client::new();

    let serial = unique_serial();
    let created = create_asset(
        &client,
        json!({
            "name": "Dell UltraSharp 27\"",
            "type": "Monitor",
            "serial_number": serial
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = client
        .put(format!("{}/assets/{}", BASE_URL, id))
        .json(&json!({ "name": "Dell UltraSharp 32\"" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], "Dell UltraSharp 32\"");
    // Untouched fields survive the merge
    assert_eq!(body["serial_number"], serial.as_str());
    assert_eq!(body["type"], "Monitor");

    remove_asset(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_cannot_reactivate_retired() {
    let client = Client::new();

    let created = create_asset(
        &client,
        json!({
            "name": "iPad Air",
            "type": "Tablet",
            "serial_number": unique_serial()
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/assets/{}/retire", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .put(format!("{}/assets/{}", BASE_URL, id))
        .json(&json!({ "status": "Available" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    remove_asset(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_filtered_listing() {
    let client = Client::new();

    // A unique marker keeps this test independent of existing data
    let marker = Uuid::new_v4().simple().to_string();
    let laptop = create_asset(
        &client,
        json!({
            "name": format!("Laptop {}", marker),
            "type": "Laptop",
            "serial_number": unique_serial()
        }),
    )
    .await;
    let monitor = create_asset(
        &client,
        json!({
            "name": format!("Monitor {}", marker),
            "type": "Monitor",
            "serial_number": unique_serial()
        }),
    )
    .await;

    let response = client
        .get(format!("{}/assets?search={}", BASE_URL, marker))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["matched"], 2);

    // Narrow by type; sentinel status keeps every status
    let response = client
        .get(format!(
            "{}/assets?search={}&type=Laptop&status=All%20Status",
            BASE_URL, marker
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["matched"], 1);
    assert_eq!(body["items"][0]["type"], "Laptop");
    assert!(body["total"].as_u64().unwrap() >= 2);

    remove_asset(&client, laptop["id"].as_str().unwrap()).await;
    remove_asset(&client, monitor["id"].as_str().unwrap()).await;
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total"].is_number());
    assert!(body["assigned"].is_number());
    assert!(body["available"].is_number());
    assert!(body["retired"].is_number());
    assert!(body["recently_added"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_directory_endpoints() {
    let client = Client::new();

    let response = client
        .get(format!("{}/directory/employees", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.as_array().map_or(false, |list| !list.is_empty()));

    let response = client
        .get(format!("{}/directory/hardware-types", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let types = body.as_array().expect("types is not an array");
    assert!(types.contains(&json!("Laptop")));
}
