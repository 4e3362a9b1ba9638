/// Google Places API client
///
/// Thin wrapper over the Places API (New) used by the reviews and
/// place-search endpoints. The wire format is reshaped into the small
/// documents the site consumes; reshaping is kept in pure functions so it
/// can be tested without the network.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How many reviews are kept when reshaping a place
const MAX_REVIEWS: usize = 5;

/// Field mask requested for place-details lookups
const DETAILS_FIELD_MASK: &str = "displayName,rating,userRatingCount,reviews";

/// Field mask requested for text search
const SEARCH_FIELD_MASK: &str =
    "places.id,places.displayName,places.formattedAddress,places.rating,places.userRatingCount";

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Google Places API key is not configured")]
    MissingKey,
    #[error("Places request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Places API returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Client for the Google Places API
///
/// The base URL is configurable so tests can point it at a local stub.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PlacesClient {
    /// Creates a new client
    ///
    /// ### Arguments
    ///
    /// * `base_url` - Base URL of the Places API, without a trailing slash
    /// * `api_key` - The API key; `None` means lookups fail with `MissingKey`
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Fetches a place's name, rating and reviews, reshaped for the site
    ///
    /// ### Errors
    ///
    /// Returns `MissingKey` when no API key is configured, `Http` on
    /// transport failures and `Status` when the API answers non-2xx
    pub async fn place_reviews(&self, place_id: &str) -> Result<PlaceReviews, PlacesError> {
        let api_key = self.api_key.as_deref().ok_or(PlacesError::MissingKey)?;

        let url = format!("{}/v1/places/{}", self.base_url, place_id);
        let response = self
            .http
            .get(&url)
            .header("X-Goog-Api-Key", api_key)
            .header("X-Goog-FieldMask", DETAILS_FIELD_MASK)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PlacesError::Status { status: status.as_u16(), message });
        }

        let place: WirePlace = response.json().await?;
        Ok(reshape_place(place))
    }

    /// Searches places by free-text query
    ///
    /// ### Errors
    ///
    /// Same failure modes as [`PlacesClient::place_reviews`]
    pub async fn search_text(&self, query: &str) -> Result<Vec<PlaceSummary>, PlacesError> {
        let api_key = self.api_key.as_deref().ok_or(PlacesError::MissingKey)?;

        let url = format!("{}/v1/places:searchText", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("X-Goog-Api-Key", api_key)
            .header("X-Goog-FieldMask", SEARCH_FIELD_MASK)
            .json(&serde_json::json!({ "textQuery": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PlacesError::Status { status: status.as_u16(), message });
        }

        let results: WireSearchResponse = response.json().await?;
        Ok(reshape_search(results))
    }
}

/// A place's reviews document as the site consumes it
///
/// This is what gets cached in the `review_cache` table and returned by the
/// reviews endpoint (which adds the cache flags on top).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceReviews {
    /// Display name of the place
    pub name: String,
    /// Overall star rating
    pub rating: f64,
    /// Total number of ratings on record
    pub total_reviews: i64,
    /// The most relevant reviews, at most [`MAX_REVIEWS`] entries
    pub reviews: Vec<ReviewEntry>,
}

/// One reshaped review
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    /// Reviewer display name
    pub author: String,
    /// Star rating given by the reviewer
    pub rating: f64,
    /// Review text
    pub text: String,
    /// Human-readable recency, e.g. "2 months ago"
    pub relative_time: String,
    /// Reviewer avatar URL, when Google provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

/// One search result from the place-search endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    /// Google place identifier
    pub place_id: String,
    /// Display name of the place
    pub name: String,
    /// Formatted address
    pub address: String,
    /// Overall star rating, when on record
    pub rating: Option<f64>,
    /// Total number of ratings, when on record
    pub total_reviews: Option<i64>,
}

// Wire structs mirroring the slices of the Places API responses we read.

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WirePlace {
    display_name: Option<WireLocalizedText>,
    rating: Option<f64>,
    user_rating_count: Option<i64>,
    reviews: Option<Vec<WireReview>>,
}

#[derive(Deserialize, Debug)]
struct WireLocalizedText {
    text: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WireReview {
    rating: Option<f64>,
    text: Option<WireLocalizedText>,
    relative_publish_time_description: Option<String>,
    author_attribution: Option<WireAuthorAttribution>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WireAuthorAttribution {
    display_name: Option<String>,
    photo_uri: Option<String>,
}

#[derive(Deserialize, Debug)]
struct WireSearchResponse {
    #[serde(default)]
    places: Vec<WireSearchPlace>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WireSearchPlace {
    id: Option<String>,
    display_name: Option<WireLocalizedText>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    user_rating_count: Option<i64>,
}

/// Reshapes a wire place into the site's reviews document, keeping the top
/// [`MAX_REVIEWS`] reviews in the order Google returned them
fn reshape_place(place: WirePlace) -> PlaceReviews {
    let reviews = place
        .reviews
        .unwrap_or_default()
        .into_iter()
        .take(MAX_REVIEWS)
        .map(|review| {
            let (author, profile_photo) = match review.author_attribution {
                Some(attribution) => (
                    attribution.display_name.unwrap_or_else(|| "Anonymous".to_string()),
                    attribution.photo_uri,
                ),
                None => ("Anonymous".to_string(), None),
            };
            ReviewEntry {
                author,
                rating: review.rating.unwrap_or(0.0),
                text: review.text.map(|t| t.text).unwrap_or_default(),
                relative_time: review.relative_publish_time_description.unwrap_or_default(),
                profile_photo,
            }
        })
        .collect();

    PlaceReviews {
        name: place.display_name.map(|n| n.text).unwrap_or_default(),
        rating: place.rating.unwrap_or(0.0),
        total_reviews: place.user_rating_count.unwrap_or(0),
        reviews,
    }
}

/// Reshapes a wire search response, dropping results without a place id
fn reshape_search(response: WireSearchResponse) -> Vec<PlaceSummary> {
    response
        .places
        .into_iter()
        .filter_map(|place| {
            let place_id = place.id?;
            Some(PlaceSummary {
                place_id,
                name: place.display_name.map(|n| n.text).unwrap_or_default(),
                address: place.formatted_address.unwrap_or_default(),
                rating: place.rating,
                total_reviews: place.user_rating_count,
            })
        })
        .collect()
}
