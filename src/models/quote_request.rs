use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a quote request as it moves through the back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Freshly submitted, nobody has looked at it yet
    New,
    /// An agent has reached out to the customer
    Contacted,
    /// A price estimate has been sent
    Quoted,
    /// The move happened
    Completed,
    /// Dead lead
    Closed,
}

impl QuoteStatus {
    /// The database representation of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::New => "new",
            QuoteStatus::Contacted => "contacted",
            QuoteStatus::Quoted => "quoted",
            QuoteStatus::Completed => "completed",
            QuoteStatus::Closed => "closed",
        }
    }

    /// Parses a status from its database representation
    ///
    /// ### Returns
    ///
    /// `None` when the string is not a known status
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(QuoteStatus::New),
            "contacted" => Some(QuoteStatus::Contacted),
            "quoted" => Some(QuoteStatus::Quoted),
            "completed" => Some(QuoteStatus::Completed),
            "closed" => Some(QuoteStatus::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a customer-submitted quote request (a lead)
///
/// This struct maps directly to the `quote_requests` table. Free-text fields
/// are sanitized by the handler layer before a row is constructed; the model
/// stores whatever it is given.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::quote_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteRequest {
    /// Unique identifier for the lead (UUID v4 as string)
    id: String,

    /// Customer name
    name: String,

    /// Customer email address
    email: String,

    /// Customer phone number
    phone: String,

    /// Requested move date, free-form (the site sends ISO dates)
    move_date: Option<String>,

    /// Where the move starts
    origin: String,

    /// Where the move ends
    destination: String,

    /// Rough size of the move (e.g. "2-bedroom")
    home_size: Option<String>,

    /// Free-text message from the customer
    message: Option<String>,

    /// Lifecycle status, one of the `QuoteStatus` strings
    status: String,

    /// Anonymous visitor identifier from the site, used for rate limiting
    visitor_id: Option<String>,

    /// When this lead was submitted
    created_at: NaiveDateTime,

    /// When this lead was last touched
    updated_at: NaiveDateTime,
}

impl QuoteRequest {
    /// Creates a new lead in the `new` status
    ///
    /// This method automatically generates a UUID v4 for the ID and sets
    /// the created_at and updated_at timestamps to the current time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        phone: String,
        move_date: Option<String>,
        origin: String,
        destination: String,
        home_size: Option<String>,
        message: Option<String>,
        visitor_id: Option<String>,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            move_date,
            origin,
            destination,
            home_size,
            message,
            status: QuoteStatus::New.as_str().to_string(),
            visitor_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gets the lead's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the customer name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Gets the customer email address
    pub fn get_email(&self) -> String {
        self.email.clone()
    }

    /// Gets the customer phone number
    pub fn get_phone(&self) -> String {
        self.phone.clone()
    }

    /// Gets the requested move date
    pub fn get_move_date(&self) -> Option<String> {
        self.move_date.clone()
    }

    /// Gets the move origin
    pub fn get_origin(&self) -> String {
        self.origin.clone()
    }

    /// Gets the move destination
    pub fn get_destination(&self) -> String {
        self.destination.clone()
    }

    /// Gets the rough size of the move
    pub fn get_home_size(&self) -> Option<String> {
        self.home_size.clone()
    }

    /// Gets the customer's message
    pub fn get_message(&self) -> Option<String> {
        self.message.clone()
    }

    /// Gets the raw status string
    pub fn get_status(&self) -> String {
        self.status.clone()
    }

    /// Sets the lifecycle status
    pub fn set_status(&mut self, status: QuoteStatus) {
        self.status = status.as_str().to_string();
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the anonymous visitor identifier
    pub fn get_visitor_id(&self) -> Option<String> {
        self.visitor_id.clone()
    }

    /// Gets the lead's submission timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }

    /// Gets the lead's last-touched timestamp as a DateTime<Utc>
    pub fn get_updated_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.updated_at, Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> QuoteRequest {
        QuoteRequest::new(
            "Pat Doe".to_string(),
            "pat@example.com".to_string(),
            "+1 503 555 0199".to_string(),
            Some("2025-08-01".to_string()),
            "Portland, OR".to_string(),
            "Seattle, WA".to_string(),
            Some("3-bedroom".to_string()),
            Some("Two flights of stairs at the origin.".to_string()),
            Some("visitor-abc".to_string()),
        )
    }

    #[test]
    fn test_quote_new_starts_in_new_status() {
        let quote = sample_quote();

        assert_eq!(quote.get_status(), "new");
        assert_eq!(quote.get_email(), "pat@example.com");
        assert!(Uuid::parse_str(&quote.get_id()).is_ok());
    }

    #[test]
    fn test_quote_set_status() {
        let mut quote = sample_quote();

        quote.set_status(QuoteStatus::Contacted);

        assert_eq!(quote.get_status(), "contacted");
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            QuoteStatus::New,
            QuoteStatus::Contacted,
            QuoteStatus::Quoted,
            QuoteStatus::Completed,
            QuoteStatus::Closed,
        ] {
            assert_eq!(QuoteStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(QuoteStatus::parse("archived"), None);
        assert_eq!(QuoteStatus::parse(""), None);
        assert_eq!(QuoteStatus::parse("New"), None);
    }
}
