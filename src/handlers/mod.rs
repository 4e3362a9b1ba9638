/// Web API Handlers
///
/// This module contains the handlers for the RESTful API endpoints.
/// Each handler is responsible for processing a specific type of HTTP request,
/// extracting the necessary data, calling the appropriate repository functions,
/// and returning a properly formatted response.

mod system_handlers;
mod hero_handlers;
mod about_handlers;
mod service_handlers;
mod gallery_handlers;
mod testimonial_handlers;
mod faq_handlers;
mod setting_handlers;
mod quote_handlers;
mod tracking_handlers;
mod review_handlers;
mod notify_handlers;
mod role_handlers;

// Re-export all handlers
pub use system_handlers::*;
pub use hero_handlers::*;
pub use about_handlers::*;
pub use service_handlers::*;
pub use gallery_handlers::*;
pub use testimonial_handlers::*;
pub use faq_handlers::*;
pub use setting_handlers::*;
pub use quote_handlers::*;
pub use tracking_handlers::*;
pub use review_handlers::*;
pub use notify_handlers::*;
pub use role_handlers::*;
