use axum::{extract::State, Json};
use tracing::{instrument, info};
use validator::Validate;

use crate::AppState;
use crate::dto::{NotificationResponse, QuoteNotificationDto};
use crate::errors::ApiError;
use crate::mailer::LeadDetails;
use crate::sanitize::{clean_optional, clean_text, MAX_FIELD_LEN, MAX_MESSAGE_LEN};

/// Handler for the quote-notification emails
///
/// This function handles POST requests to
/// `/functions/send-quote-notification`: one alert to the office inbox and
/// one confirmation to the customer. The two sends are reported
/// separately; `success` is their conjunction.
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn send_quote_notification_handler(
    State(state): State<AppState>,
    Json(payload): Json<QuoteNotificationDto>,
) -> Result<Json<NotificationResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))?;

    let mailer = state
        .mailer
        .as_ref()
        .ok_or_else(|| ApiError::MissingConfig("SMTP_HOST".to_string()))?;

    // Emails render user text verbatim, so it goes through the same
    // sanitizer as stored leads.
    let lead = LeadDetails {
        name: clean_text(&payload.name, MAX_FIELD_LEN),
        email: payload.email.trim().to_string(),
        phone: clean_text(&payload.phone, MAX_FIELD_LEN),
        move_date: clean_optional(payload.move_date, MAX_FIELD_LEN),
        origin: clean_text(&payload.origin, MAX_FIELD_LEN),
        destination: clean_text(&payload.destination, MAX_FIELD_LEN),
        home_size: clean_optional(payload.home_size, MAX_FIELD_LEN),
        message: clean_optional(payload.message, MAX_MESSAGE_LEN),
    };

    let (admin, customer) = mailer.send_quote_notifications(&lead).await;

    info!(admin, customer, "Quote notification emails processed");

    Ok(Json(NotificationResponse { success: admin && customer, admin, customer }))
}
