/// Integration tests for the hero banner and about section
///
/// This file covers:
/// - Public content endpoints returning only the active revision
/// - Admin creation, update, activation and deletion
/// - The single-active invariant across revisions
/// - The admin bearer-token guard

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn test_public_hero_is_404_without_active_revision() {
    let mut app = create_test_app();

    let (status, body) = get_json(&mut app, "/content/hero").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_hero_create_activate_and_fetch() {
    let mut app = create_test_app();

    // Create a revision through the admin API
    let (status, created) = send_admin_json(
        &mut app,
        "POST",
        "/admin/hero",
        json!({
            "title": "Moving made simple",
            "subtitle": "Across town or across the country",
            "background_images": ["a.jpg", "b.jpg"],
            "stats": [{"label": "Moves", "value": 1200}],
            "cta_label": "Get a quote",
            "cta_link": "/quote"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["title"], "Moving made simple");
    assert_eq!(created["is_active"], false);

    // Not active yet, so the public endpoint still 404s
    let (status, _) = get_json(&mut app, "/content/hero").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Activate it
    let id = created["id"].as_str().unwrap();
    let (status, activated) =
        send_admin_json(&mut app, "POST", &format!("/admin/hero/{}/activate", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(activated["is_active"], true);

    // Now the public endpoint serves it
    let (status, fetched) = get_json(&mut app, "/content/hero").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["background_images"], json!(["a.jpg", "b.jpg"]));
}

#[tokio::test]
async fn test_activating_second_hero_deactivates_first() {
    let mut app = create_test_app();

    let (_, first) =
        send_admin_json(&mut app, "POST", "/admin/hero", json!({"title": "First"})).await;
    let (_, second) =
        send_admin_json(&mut app, "POST", "/admin/hero", json!({"title": "Second"})).await;

    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    send_admin_json(&mut app, "POST", &format!("/admin/hero/{}/activate", first_id), json!({})).await;
    send_admin_json(&mut app, "POST", &format!("/admin/hero/{}/activate", second_id), json!({})).await;

    // The public endpoint serves the second revision
    let (_, fetched) = get_json(&mut app, "/content/hero").await;
    assert_eq!(fetched["id"], second_id);

    // The admin listing shows exactly one active revision
    let (_, listed) = get_admin_json(&mut app, "/admin/hero").await;
    let active_count = listed
        .as_array()
        .unwrap()
        .iter()
        .filter(|h| h["is_active"] == true)
        .count();
    assert_eq!(active_count, 1);
}

#[tokio::test]
async fn test_hero_update_and_delete() {
    let mut app = create_test_app();

    let (_, created) =
        send_admin_json(&mut app, "POST", "/admin/hero", json!({"title": "Old"})).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/hero/{}", id),
        json!({"title": "New", "subtitle": "Fresh subtitle"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "New");
    assert_eq!(updated["subtitle"], "Fresh subtitle");

    let (status, _) =
        send_request(&mut app, "DELETE", &format!("/admin/hero/{}", id), Some(ADMIN_TOKEN), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/hero/{}", id),
        json!({"title": "Ghost"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hero_create_rejects_empty_title() {
    let mut app = create_test_app();

    let (status, body) =
        send_admin_json(&mut app, "POST", "/admin/hero", json!({"title": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_about_lifecycle() {
    let mut app = create_test_app();

    // No active about section yet
    let (status, _) = get_json(&mut app, "/content/about").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, created) = send_admin_json(
        &mut app,
        "POST",
        "/admin/about",
        json!({
            "heading": "Who we are",
            "body": "Family-run movers since 1998.",
            "years_experience": 27,
            "customers_served": 15000
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = created["id"].as_str().unwrap();
    send_admin_json(&mut app, "POST", &format!("/admin/about/{}/activate", id), json!({})).await;

    let (status, fetched) = get_json(&mut app, "/content/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["heading"], "Who we are");
    assert_eq!(fetched["years_experience"], 27);

    // Update a counter
    let (status, updated) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/about/{}", id),
        json!({"customers_served": 15500}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["customers_served"], 15500);
}

#[tokio::test]
async fn test_admin_routes_reject_missing_token() {
    let mut app = create_test_app();

    let (status, body) = send_json(&mut app, "POST", "/admin/hero", json!({"title": "X"})).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_admin_routes_reject_wrong_token() {
    let mut app = create_test_app();

    let (status, _) = send_request(
        &mut app,
        "GET",
        "/admin/hero",
        Some("wrong-token"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_fail_closed_without_configured_token() {
    let (mut app, _pool) = create_test_app_with_config(|config| {
        config.admin_token = None;
    });

    let (status, body) = send_request(&mut app, "GET", "/admin/hero", Some(ADMIN_TOKEN), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("ADMIN_TOKEN"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let mut app = create_test_app();

    let (status, body) = get_json(&mut app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
