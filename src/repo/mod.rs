/// Repository module
///
/// This module provides the data access layer for the application.
/// It contains functions for interacting with the database, including
/// creating, retrieving, and updating site content and quote leads.
///
/// The repository pattern abstracts away the details of database access
/// and provides a clean API for the rest of the application to use.

mod hero_repo;
mod about_repo;
mod service_repo;
mod gallery_repo;
mod testimonial_repo;
mod faq_repo;
mod setting_repo;
mod quote_repo;
mod role_repo;
mod page_view_repo;
mod review_cache_repo;

// Re-export all repository functions
pub use hero_repo::*;
pub use about_repo::*;
pub use service_repo::*;
pub use gallery_repo::*;
pub use testimonial_repo::*;
pub use faq_repo::*;
pub use setting_repo::*;
pub use quote_repo::*;
pub use role_repo::*;
pub use page_view_repo::*;
pub use review_cache_repo::*;
