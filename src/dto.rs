use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::places::PlaceReviews;

/// Data transfer object for creating a hero banner revision
#[derive(Deserialize, Validate, Debug)]
pub struct CreateHeroDto {
    /// The banner headline
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,

    /// The optional sub-headline
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Background image URLs as a JSON array
    #[serde(default)]
    pub background_images: Option<serde_json::Value>,

    /// Headline statistics as a JSON array
    #[serde(default)]
    pub stats: Option<serde_json::Value>,

    /// Call-to-action button label
    #[serde(default)]
    pub cta_label: Option<String>,

    /// Call-to-action link target
    #[serde(default)]
    pub cta_link: Option<String>,
}

/// Data transfer object for updating a hero banner revision
///
/// Absent fields are left unchanged.
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(default)]
pub struct UpdateHeroDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub background_images: Option<serde_json::Value>,
    pub stats: Option<serde_json::Value>,
    pub cta_label: Option<String>,
    pub cta_link: Option<String>,
}

/// Data transfer object for creating an about-section revision
#[derive(Deserialize, Validate, Debug)]
pub struct CreateAboutDto {
    #[validate(length(min = 1, max = 200, message = "heading must be 1-200 characters"))]
    pub heading: String,

    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub years_experience: Option<i32>,

    #[serde(default)]
    pub customers_served: Option<i32>,
}

/// Data transfer object for updating an about-section revision
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(default)]
pub struct UpdateAboutDto {
    #[validate(length(min = 1, max = 200, message = "heading must be 1-200 characters"))]
    pub heading: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub years_experience: Option<i32>,
    pub customers_served: Option<i32>,
}

/// Data transfer object for creating a service
#[derive(Deserialize, Validate, Debug)]
pub struct CreateServiceDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,
}

/// Data transfer object for updating a service
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(default)]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Data transfer object for adding a gallery image
#[derive(Deserialize, Validate, Debug)]
pub struct CreateGalleryImageDto {
    #[serde(default)]
    pub title: Option<String>,

    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: String,

    #[serde(default)]
    pub category: Option<String>,
}

/// Data transfer object for updating a gallery image
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(default)]
pub struct UpdateGalleryImageDto {
    pub title: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

/// Data transfer object for creating a testimonial
#[derive(Deserialize, Validate, Debug)]
pub struct CreateTestimonialDto {
    #[validate(length(min = 1, max = 200, message = "author must be 1-200 characters"))]
    pub author: String,

    #[serde(default)]
    pub location: Option<String>,

    #[validate(length(min = 1, message = "quote must not be empty"))]
    pub quote: String,

    /// Star rating, 1 to 5
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
}

/// Data transfer object for updating a testimonial
#[derive(Deserialize, Validate, Debug, Default)]
#[serde(default)]
pub struct UpdateTestimonialDto {
    pub author: Option<String>,
    pub location: Option<String>,
    pub quote: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub is_active: Option<bool>,
}

/// Data transfer object for creating a FAQ entry
#[derive(Deserialize, Validate, Debug)]
pub struct CreateFaqDto {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: String,
}

/// Data transfer object for updating a FAQ entry
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct UpdateFaqDto {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub is_active: Option<bool>,
}

/// Data transfer object for rewriting a listing order
///
/// The IDs appear in their new display order.
#[derive(Deserialize, Validate, Debug)]
pub struct ReorderDto {
    #[validate(length(min = 1, message = "ids must not be empty"))]
    pub ids: Vec<String>,
}

/// Data transfer object for writing a site setting
#[derive(Deserialize, Debug)]
pub struct UpsertSettingDto {
    pub value: String,
}

/// Data transfer object for granting a back-office role
#[derive(Deserialize, Validate, Debug)]
pub struct UpsertRoleDto {
    #[validate(length(min = 1, max = 50, message = "role must be 1-50 characters"))]
    pub role: String,
}

/// Data transfer object for a public quote-request submission
///
/// Field names are camelCase to match the site's JSON. The hidden
/// `company` field is the honeypot: humans never see it, so any value
/// there marks the submission as automated.
#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteDto {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 7, max = 30, message = "phone must be 7-30 characters"))]
    pub phone: String,

    #[serde(default)]
    pub move_date: Option<String>,

    #[validate(length(min = 1, max = 200, message = "origin must be 1-200 characters"))]
    pub origin: String,

    #[validate(length(min = 1, max = 200, message = "destination must be 1-200 characters"))]
    pub destination: String,

    #[serde(default)]
    pub home_size: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "message must be at most 2000 characters"))]
    pub message: Option<String>,

    #[serde(default)]
    pub visitor_id: Option<String>,

    /// Honeypot field, hidden on the real form
    #[serde(default)]
    pub company: Option<String>,
}

/// Response for a quote submission
///
/// Deliberately carries no record ID: honeypot submissions answer the same
/// shape without storing anything.
#[derive(Serialize, Deserialize, Debug)]
pub struct QuoteSubmissionResponse {
    pub received: bool,
}

/// Data transfer object for moving a quote request to a new status
#[derive(Deserialize, Debug)]
pub struct UpdateQuoteStatusDto {
    pub status: String,
}

/// Query parameters for the admin quote listing
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct QuoteListQuery {
    pub status: Option<String>,
}

/// Data transfer object for page-view telemetry
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TrackPageViewDto {
    pub path: String,

    #[serde(default)]
    pub visitor_id: Option<String>,

    #[serde(default)]
    pub referrer: Option<String>,
}

/// Query parameters for the page-view summary
///
/// `path` may repeat to restrict the summary to a set of pages.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct PageViewSummaryQuery {
    /// Length of the trailing reporting window in days (default 30)
    pub days: Option<i64>,

    /// Paths to restrict the summary to; empty means all paths
    pub path: Vec<String>,
}

/// One row of the page-view summary
#[derive(Serialize, Deserialize, Debug)]
pub struct PageViewSummaryResponse {
    pub path: String,
    pub views: i64,
}

/// Data transfer object for the Google-reviews lookup
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GoogleReviewsDto {
    pub place_id: String,
}

/// Response for the Google-reviews lookup
///
/// The place document is flattened so the payload looks identical whether
/// it came from the cache or straight from the API; only the cache flags
/// differ.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    #[serde(flatten)]
    pub place: PlaceReviews,

    /// Whether the payload was served from the cache table
    pub cached: bool,

    /// When the cached payload was fetched; absent on fresh fetches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<DateTime<Utc>>,
}

/// Data transfer object for the place search
#[derive(Deserialize, Debug)]
pub struct SearchPlaceDto {
    pub query: String,
}

/// Data transfer object for the quote-notification endpoint
#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuoteNotificationDto {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 7, max = 30, message = "phone must be 7-30 characters"))]
    pub phone: String,

    #[serde(default)]
    pub move_date: Option<String>,

    #[validate(length(min = 1, max = 200, message = "origin must be 1-200 characters"))]
    pub origin: String,

    #[validate(length(min = 1, max = 200, message = "destination must be 1-200 characters"))]
    pub destination: String,

    #[serde(default)]
    pub home_size: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2000, message = "message must be at most 2000 characters"))]
    pub message: Option<String>,
}

/// Response for the quote-notification endpoint
///
/// `admin` and `customer` report the two sends; `success` is their
/// conjunction.
#[derive(Serialize, Deserialize, Debug)]
pub struct NotificationResponse {
    pub success: bool,
    pub admin: bool,
    pub customer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_dto_accepts_valid_payload() {
        let dto: CreateQuoteDto = serde_json::from_value(serde_json::json!({
            "name": "Pat Doe",
            "email": "pat@example.com",
            "phone": "+1 503 555 0199",
            "origin": "Portland, OR",
            "destination": "Seattle, WA"
        }))
        .unwrap();

        assert!(dto.validate().is_ok());
        assert!(dto.company.is_none());
    }

    #[test]
    fn test_quote_dto_rejects_malformed_email() {
        let dto: CreateQuoteDto = serde_json::from_value(serde_json::json!({
            "name": "Pat Doe",
            "email": "not-an-email",
            "phone": "+1 503 555 0199",
            "origin": "Portland, OR",
            "destination": "Seattle, WA"
        }))
        .unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_quote_dto_rejects_short_phone() {
        let dto: CreateQuoteDto = serde_json::from_value(serde_json::json!({
            "name": "Pat Doe",
            "email": "pat@example.com",
            "phone": "123",
            "origin": "Portland, OR",
            "destination": "Seattle, WA"
        }))
        .unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_quote_dto_reads_camel_case_fields() {
        let dto: CreateQuoteDto = serde_json::from_value(serde_json::json!({
            "name": "Pat Doe",
            "email": "pat@example.com",
            "phone": "+1 503 555 0199",
            "origin": "Portland, OR",
            "destination": "Seattle, WA",
            "moveDate": "2025-08-01",
            "homeSize": "2-bedroom",
            "visitorId": "visitor-1"
        }))
        .unwrap();

        assert_eq!(dto.move_date, Some("2025-08-01".to_string()));
        assert_eq!(dto.home_size, Some("2-bedroom".to_string()));
        assert_eq!(dto.visitor_id, Some("visitor-1".to_string()));
    }

    #[test]
    fn test_reviews_dto_reads_place_id() {
        let dto: GoogleReviewsDto =
            serde_json::from_value(serde_json::json!({"placeId": "p1"})).unwrap();

        assert_eq!(dto.place_id, "p1");
    }

    #[test]
    fn test_reviews_response_flattens_place() {
        let response = ReviewsResponse {
            place: PlaceReviews {
                name: "Acme Movers".to_string(),
                rating: 4.8,
                total_reviews: 12,
                reviews: vec![],
            },
            cached: true,
            cached_at: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["name"], "Acme Movers");
        assert_eq!(json["cached"], true);
        assert!(json.get("cachedAt").is_none());
        assert!(json.get("place").is_none());
    }

    #[test]
    fn test_testimonial_dto_rejects_out_of_range_rating() {
        let dto: CreateTestimonialDto = serde_json::from_value(serde_json::json!({
            "author": "Dana K.",
            "quote": "Great crew.",
            "rating": 6
        }))
        .unwrap();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_gallery_dto_rejects_bad_url() {
        let dto: CreateGalleryImageDto = serde_json::from_value(serde_json::json!({
            "image_url": "not a url"
        }))
        .unwrap();

        assert!(dto.validate().is_err());
    }
}
