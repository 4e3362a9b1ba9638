/// Integration tests for quote-request submission and the admin lead flow
///
/// This file covers:
/// - Valid submissions being stored with sanitized fields
/// - Schema validation (email, phone)
/// - Honeypot submissions answering success without storing anything
/// - The per-sender rate limit
/// - Admin listing, status workflow and deletion

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::*;

fn quote_payload(email: &str) -> serde_json::Value {
    json!({
        "name": "Pat Doe",
        "email": email,
        "phone": "+1 503 555 0199",
        "moveDate": "2025-08-01",
        "origin": "Portland, OR",
        "destination": "Seattle, WA",
        "homeSize": "3-bedroom",
        "message": "Two flights of stairs at the origin."
    })
}

#[tokio::test]
async fn test_submit_quote_stores_lead() {
    let (mut app, pool) = create_test_app_with_pool();

    let (status, body) = send_json(&mut app, "POST", "/quotes", quote_payload("pat@example.com")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["received"], true);

    let stored = cartage::repo::list_quotes(&pool, None).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].get_email(), "pat@example.com");
    assert_eq!(stored[0].get_status(), "new");
    assert_eq!(stored[0].get_home_size(), Some("3-bedroom".to_string()));
}

#[tokio::test]
async fn test_submit_quote_sanitizes_fields() {
    let (mut app, pool) = create_test_app_with_pool();

    let mut payload = quote_payload("pat@example.com");
    payload["name"] = json!("<b>Pat</b>   Doe");
    payload["message"] = json!("<script>alert('x')</script>  hello   world");

    let (status, _) = send_json(&mut app, "POST", "/quotes", payload).await;
    assert_eq!(status, StatusCode::OK);

    let stored = cartage::repo::list_quotes(&pool, None).unwrap();
    assert_eq!(stored[0].get_name(), "Pat Doe");
    assert_eq!(stored[0].get_message(), Some("alert('x') hello world".to_string()));
}

#[tokio::test]
async fn test_submit_quote_rejects_malformed_email() {
    let mut app = create_test_app();

    let (status, body) = send_json(&mut app, "POST", "/quotes", quote_payload("not-an-email")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_submit_quote_rejects_short_phone() {
    let mut app = create_test_app();

    let mut payload = quote_payload("pat@example.com");
    payload["phone"] = json!("123");

    let (status, _) = send_json(&mut app, "POST", "/quotes", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_honeypot_submission_answers_success_but_stores_nothing() {
    let (mut app, pool) = create_test_app_with_pool();

    let mut payload = quote_payload("bot@example.com");
    payload["company"] = json!("Totally Real Movers Inc");

    let (status, body) = send_json(&mut app, "POST", "/quotes", payload).await;

    // The bot sees the same success shape as a human
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["received"], true);

    // But nothing hit the database
    let stored = cartage::repo::list_quotes(&pool, None).unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_rate_limit_blocks_fourth_submission() {
    let mut app = create_test_app();

    for _ in 0..3 {
        let (status, _) =
            send_json(&mut app, "POST", "/quotes", quote_payload("pat@example.com")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send_json(&mut app, "POST", "/quotes", quote_payload("pat@example.com")).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"].is_string());

    // A different sender is unaffected
    let (status, _) = send_json(&mut app, "POST", "/quotes", quote_payload("other@example.com")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_matches_visitor_id_across_emails() {
    let mut app = create_test_app();

    for i in 0..3 {
        let mut payload = quote_payload(&format!("pat{}@example.com", i));
        payload["visitorId"] = json!("visitor-1");
        let (status, _) = send_json(&mut app, "POST", "/quotes", payload).await;
        assert_eq!(status, StatusCode::OK);
    }

    // Same visitor, fourth distinct email: still blocked
    let mut payload = quote_payload("pat99@example.com");
    payload["visitorId"] = json!("visitor-1");
    let (status, _) = send_json(&mut app, "POST", "/quotes", payload).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_admin_quote_listing_and_status_workflow() {
    let mut app = create_test_app();

    send_json(&mut app, "POST", "/quotes", quote_payload("a@example.com")).await;
    send_json(&mut app, "POST", "/quotes", quote_payload("b@example.com")).await;

    let (status, listed) = get_admin_json(&mut app, "/admin/quotes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let id = listed[0]["id"].as_str().unwrap().to_string();

    // Move one lead to contacted
    let (status, updated) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/quotes/{}/status", id),
        json!({"status": "contacted"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "contacted");

    // Filtered listing sees exactly that lead
    let (_, contacted) = get_admin_json(&mut app, "/admin/quotes?status=contacted").await;
    assert_eq!(contacted.as_array().unwrap().len(), 1);
    assert_eq!(contacted[0]["id"], id.as_str());

    // Unknown statuses are rejected, both as filter and as update
    let (status, _) = get_admin_json(&mut app, "/admin/quotes?status=archived").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/quotes/{}/status", id),
        json!({"status": "archived"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_quote_get_and_delete() {
    let mut app = create_test_app();

    send_json(&mut app, "POST", "/quotes", quote_payload("a@example.com")).await;

    let (_, listed) = get_admin_json(&mut app, "/admin/quotes").await;
    let id = listed[0]["id"].as_str().unwrap().to_string();

    let (status, fetched) = get_admin_json(&mut app, &format!("/admin/quotes/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["email"], "a@example.com");

    let (status, _) = send_request(
        &mut app,
        "DELETE",
        &format!("/admin/quotes/{}", id),
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get_admin_json(&mut app, &format!("/admin/quotes/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quote_listing_requires_admin() {
    let mut app = create_test_app();

    let (status, _) = get_json(&mut app, "/admin/quotes").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
