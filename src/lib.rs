//! Cartage: content management and lead handling for a moving company website
//!
//! This library provides the server side of the public marketing site and its
//! back office: content tables (hero banner, about section, services, gallery,
//! testimonials, FAQs, settings), quote-request leads with spam protection,
//! page-view telemetry, and the three function endpoints wrapping third-party
//! APIs (Google reviews with a read-through cache, place search, and the
//! quote-notification emails).
//!
//! ### Modules
//!
//! - `db`: Database connection management
//! - `models`: Data structures for content rows, leads and the review cache
//! - `repo`: Repository layer for database operations
//! - `handlers`: Axum request handlers
//! - `places`: Google Places API client
//! - `mailer`: Outbound SMTP email
//! - `sanitize`: Free-text cleanup for public submissions
//! - `schema`: Database schema definitions
//!
//! ### Web API
//!
//! The library exposes a RESTful API using Axum. Public routes serve the
//! site content and accept quote submissions and telemetry; routes nested
//! under `/admin` manage the content and are guarded by a bearer token.

/// Admin route guard
pub mod auth;

/// Configuration management
pub mod config;

/// Database connection module
pub mod db;

/// Request/response data transfer objects
pub mod dto;

/// API error space
pub mod errors;

/// Web API handlers
pub mod handlers;

/// Outbound email
pub mod mailer;

/// Data models module
pub mod models;

/// Google Places API client
pub mod places;

/// Repository module for database operations
pub mod repo;

/// Free-text sanitization helpers
pub mod sanitize;

/// Database schema module
pub mod schema;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use handlers::*;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: Arc<db::DbPool>,
    /// Application configuration
    pub config: Arc<config::Config>,
    /// Google Places API client
    pub places: places::PlacesClient,
    /// Outbound mailer; `None` when SMTP is not configured
    pub mailer: Option<mailer::Mailer>,
}

impl AppState {
    /// Builds the application state from a pool and configuration
    ///
    /// The Places client and the mailer are derived from the configuration;
    /// leaving their settings unset disables the corresponding endpoints at
    /// runtime (they answer with configuration errors).
    pub fn new(pool: Arc<db::DbPool>, config: config::Config) -> Self {
        let places = places::PlacesClient::new(
            config.places_base_url.clone(),
            config.google_api_key.clone(),
        );
        let mailer = mailer::Mailer::from_config(&config);

        Self {
            pool,
            config: Arc::new(config),
            places,
            mailer,
        }
    }
}

/// Creates the application router with all routes
///
/// Public routes serve site content, quote submissions, telemetry and the
/// function endpoints. Admin routes are nested under `/admin` behind the
/// bearer-token guard. CORS is wide open: the site and the admin panel are
/// served from other origins.
///
/// ### Arguments
///
/// * `state` - The shared application state
///
/// ### Returns
///
/// An Axum Router configured with all routes and the state attached
pub fn create_app(state: AppState) -> Router {
    let admin_routes = Router::new()
        // Hero banner revisions
        .route("/hero", get(list_heroes_handler).post(create_hero_handler))
        .route("/hero/{id}", put(update_hero_handler).delete(delete_hero_handler))
        .route("/hero/{id}/activate", post(activate_hero_handler))
        // About section revisions
        .route("/about", get(list_about_handler).post(create_about_handler))
        .route("/about/{id}", put(update_about_handler))
        .route("/about/{id}/activate", post(activate_about_handler))
        // Services
        .route("/services", get(list_all_services_handler).post(create_service_handler))
        .route("/services/reorder", post(reorder_services_handler))
        .route("/services/{id}", put(update_service_handler).delete(delete_service_handler))
        // Gallery
        .route("/gallery", get(list_all_gallery_handler).post(create_gallery_image_handler))
        .route("/gallery/reorder", post(reorder_gallery_handler))
        .route("/gallery/{id}", put(update_gallery_image_handler).delete(delete_gallery_image_handler))
        // Testimonials
        .route("/testimonials", get(list_all_testimonials_handler).post(create_testimonial_handler))
        .route("/testimonials/reorder", post(reorder_testimonials_handler))
        .route("/testimonials/{id}", put(update_testimonial_handler).delete(delete_testimonial_handler))
        // FAQs
        .route("/faqs", get(list_all_faqs_handler).post(create_faq_handler))
        .route("/faqs/reorder", post(reorder_faqs_handler))
        .route("/faqs/{id}", put(update_faq_handler).delete(delete_faq_handler))
        // Site settings
        .route("/settings/{key}", put(upsert_setting_handler).delete(delete_setting_handler))
        // Quote leads
        .route("/quotes", get(list_quotes_handler))
        .route("/quotes/{id}", get(get_quote_handler).delete(delete_quote_handler))
        .route("/quotes/{id}/status", put(update_quote_status_handler))
        // Page-view reporting
        .route("/page-views/summary", get(page_view_summary_handler))
        // Back-office roles
        .route("/roles", get(list_roles_handler))
        .route("/roles/{user_id}", put(upsert_role_handler).delete(delete_role_handler))
        // Everything above requires the admin bearer token
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_admin));

    Router::new()
        // Liveness probe
        .route("/health", get(health_handler))
        // Public site content
        .route("/content/hero", get(get_active_hero_handler))
        .route("/content/about", get(get_active_about_handler))
        .route("/services", get(list_services_handler))
        .route("/services/{id}", get(get_service_handler))
        .route("/gallery", get(list_gallery_handler))
        .route("/testimonials", get(list_testimonials_handler))
        .route("/faqs", get(list_faqs_handler))
        .route("/settings", get(get_settings_handler))
        // Quote submissions and telemetry
        .route("/quotes", post(submit_quote_handler))
        .route("/page-views", post(track_page_view_handler))
        // Function endpoints wrapping third-party APIs
        .route("/functions/google-reviews", post(google_reviews_handler))
        .route("/functions/search-place", post(search_place_handler))
        .route("/functions/send-quote-notification", post(send_quote_notification_handler))
        // Admin subtree
        .nest("/admin", admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the embedded migrations
///
/// Applied at startup and by the test harnesses, so a fresh database file
/// (or in-memory database) is usable without a separate migration step.
///
/// ### Arguments
///
/// * `conn` - A mutable reference to a SQLite connection
///
/// ### Panics
///
/// This function will panic if the migrations fail to run
pub fn run_migrations(conn: &mut diesel::SqliteConnection) {
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

    // Define the embedded migrations
    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    // Run all pending migrations
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");
}
