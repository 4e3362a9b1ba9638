/// Integration tests for the gallery, testimonials and FAQs
///
/// These three listings share the same admin shape (create, update, delete,
/// reorder, hide); the tests exercise each one's specifics: category
/// filtering for the gallery, rating bounds for testimonials, and ordering
/// for FAQs.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn test_gallery_category_filter() {
    let mut app = create_test_app();

    for (url, category) in [
        ("https://cdn.example.com/1.jpg", "residential"),
        ("https://cdn.example.com/2.jpg", "office"),
        ("https://cdn.example.com/3.jpg", "residential"),
    ] {
        let (status, _) = send_admin_json(
            &mut app,
            "POST",
            "/admin/gallery",
            json!({"image_url": url, "category": category}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, all) = get_json(&mut app, "/gallery").await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, residential) = get_json(&mut app, "/gallery?category=residential").await;
    assert_eq!(residential.as_array().unwrap().len(), 2);

    let (_, nothing) = get_json(&mut app, "/gallery?category=warehouse").await;
    assert_eq!(nothing.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_gallery_rejects_invalid_url() {
    let mut app = create_test_app();

    let (status, _) = send_admin_json(
        &mut app,
        "POST",
        "/admin/gallery",
        json!({"image_url": "not a url"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_gallery_hide_and_reorder() {
    let mut app = create_test_app();

    let (_, first) = send_admin_json(
        &mut app,
        "POST",
        "/admin/gallery",
        json!({"image_url": "https://cdn.example.com/a.jpg"}),
    )
    .await;
    let (_, second) = send_admin_json(
        &mut app,
        "POST",
        "/admin/gallery",
        json!({"image_url": "https://cdn.example.com/b.jpg"}),
    )
    .await;

    let first_id = first["id"].as_str().unwrap().to_string();
    let second_id = second["id"].as_str().unwrap().to_string();

    // Reorder: second before first
    let (status, reordered) = send_admin_json(
        &mut app,
        "POST",
        "/admin/gallery/reorder",
        json!({"ids": [second_id, first_id]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        reordered[0]["image_url"].as_str().unwrap(),
        "https://cdn.example.com/b.jpg"
    );

    // Hide the first image
    let (_, hidden) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/gallery/{}", first["id"].as_str().unwrap()),
        json!({"is_active": false}),
    )
    .await;
    assert_eq!(hidden["is_active"], false);

    let (_, public) = get_json(&mut app, "/gallery").await;
    assert_eq!(public.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_testimonial_lifecycle() {
    let mut app = create_test_app();

    let (status, created) = send_admin_json(
        &mut app,
        "POST",
        "/admin/testimonials",
        json!({"author": "Dana K.", "location": "Salem, OR", "quote": "Great crew.", "rating": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let id = created["id"].as_str().unwrap();

    let (_, public) = get_json(&mut app, "/testimonials").await;
    assert_eq!(public.as_array().unwrap().len(), 1);
    assert_eq!(public[0]["author"], "Dana K.");

    // Out-of-range rating is rejected
    let (status, _) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/testimonials/{}", id),
        json!({"rating": 9}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Hiding removes it from the public listing
    send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/testimonials/{}", id),
        json!({"is_active": false}),
    )
    .await;
    let (_, public) = get_json(&mut app, "/testimonials").await;
    assert_eq!(public.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_testimonial_create_rejects_bad_rating() {
    let mut app = create_test_app();

    let (status, _) = send_admin_json(
        &mut app,
        "POST",
        "/admin/testimonials",
        json!({"author": "Dana K.", "quote": "Great crew.", "rating": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_faq_lifecycle_and_order() {
    let mut app = create_test_app();

    let (_, first) = send_admin_json(
        &mut app,
        "POST",
        "/admin/faqs",
        json!({"question": "Do you move pianos?", "answer": "Yes."}),
    )
    .await;
    let (_, second) = send_admin_json(
        &mut app,
        "POST",
        "/admin/faqs",
        json!({"question": "Are you insured?", "answer": "Fully."}),
    )
    .await;

    let first_id = first["id"].as_str().unwrap().to_string();
    let second_id = second["id"].as_str().unwrap().to_string();

    // Swap the order
    let (status, _) = send_admin_json(
        &mut app,
        "POST",
        "/admin/faqs/reorder",
        json!({"ids": [second_id, first_id]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = get_json(&mut app, "/faqs").await;
    assert_eq!(listed[0]["question"], "Are you insured?");

    // Update the answer
    let (_, updated) = send_admin_json(
        &mut app,
        "PUT",
        &format!("/admin/faqs/{}", first["id"].as_str().unwrap()),
        json!({"answer": "Yes, with a dedicated crew."}),
    )
    .await;
    assert_eq!(updated["answer"], "Yes, with a dedicated crew.");

    // Delete one
    let (status, _) = send_request(
        &mut app,
        "DELETE",
        &format!("/admin/faqs/{}", second["id"].as_str().unwrap()),
        Some(ADMIN_TOKEN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = get_json(&mut app, "/faqs").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_faq_create_rejects_empty_question() {
    let mut app = create_test_app();

    let (status, _) = send_admin_json(
        &mut app,
        "POST",
        "/admin/faqs",
        json!({"question": "", "answer": "A."}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
