/// Integration tests for the services listing
///
/// This file covers:
/// - Public listing of active services in display order
/// - Admin create/update/delete
/// - Reordering, including the rollback on unknown IDs
/// - Hidden services staying out of the public listing

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::*;

async fn create_service(app: &mut axum::Router, title: &str) -> String {
    let (status, created) = send_admin_json(
        app,
        "POST",
        "/admin/services",
        json!({"title": title, "description": "Description.", "icon": "truck"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    created["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_public_listing_in_display_order() {
    let mut app = create_test_app();

    create_service(&mut app, "Residential moves").await;
    create_service(&mut app, "Office relocation").await;
    create_service(&mut app, "Packing").await;

    let (status, listed) = get_json(&mut app, "/services").await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Residential moves", "Office relocation", "Packing"]);
}

#[tokio::test]
async fn test_get_service_by_id() {
    let mut app = create_test_app();

    let id = create_service(&mut app, "Residential moves").await;

    let (status, fetched) = get_json(&mut app, &format!("/services/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Residential moves");

    let (status, _) = get_json(&mut app, "/services/nonexistent-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hidden_service_leaves_public_listing() {
    let mut app = create_test_app();

    let id = create_service(&mut app, "Residential moves").await;
    create_service(&mut app, "Office relocation").await;

    let (status, updated) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/services/{}", id),
        json!({"is_active": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_active"], false);

    let (_, public) = get_json(&mut app, "/services").await;
    assert_eq!(public.as_array().unwrap().len(), 1);

    // The by-id endpoint still resolves hidden services
    let (status, _) = get_json(&mut app, &format!("/services/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, admin) = get_admin_json(&mut app, "/admin/services").await;
    assert_eq!(admin.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reorder_services() {
    let mut app = create_test_app();

    let a = create_service(&mut app, "A").await;
    let b = create_service(&mut app, "B").await;
    let c = create_service(&mut app, "C").await;

    let (status, reordered) = send_admin_json(
        &mut app,
        "POST",
        "/admin/services/reorder",
        json!({"ids": [c, a, b]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = reordered
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn test_reorder_with_unknown_id_is_rejected() {
    let mut app = create_test_app();

    let a = create_service(&mut app, "A").await;

    let (status, body) = send_admin_json(
        &mut app,
        "POST",
        "/admin/services/reorder",
        json!({"ids": [a, "bogus"]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_delete_service() {
    let mut app = create_test_app();

    let id = create_service(&mut app, "Doomed").await;

    let (status, _) = send_request(
        &mut app,
        "DELETE",
        &format!("/admin/services/{}", id),
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get_json(&mut app, &format!("/services/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_service_requires_admin() {
    let mut app = create_test_app();

    let (status, _) = send_json(
        &mut app,
        "POST",
        "/admin/services",
        json!({"title": "X", "description": "Y"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
