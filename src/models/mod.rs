/// Data models module
///
/// This module defines the core data structures used throughout the application.
/// It includes database models that map to database tables, as well as methods
/// for creating and manipulating these models.

// Re-export all model types
mod json_value;
pub use json_value::JsonValue;

mod hero;
pub use hero::HeroContent;

mod about;
pub use about::AboutContent;

mod service;
pub use service::Service;

mod gallery_image;
pub use gallery_image::GalleryImage;

mod testimonial;
pub use testimonial::Testimonial;

mod faq;
pub use faq::Faq;

mod site_setting;
pub use site_setting::SiteSetting;

mod quote_request;
pub use quote_request::{QuoteRequest, QuoteStatus};

mod user_role;
pub use user_role::UserRole;

mod page_view;
pub use page_view::PageView;

mod cached_reviews;
pub use cached_reviews::CachedReviews;
