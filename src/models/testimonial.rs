use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a customer testimonial shown on the site
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::testimonials)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct Testimonial {
    /// Unique identifier for the testimonial (UUID v4 as string)
    id: String,

    /// Customer name
    author: String,

    /// Optional customer location (e.g. "Portland, OR")
    location: Option<String>,

    /// The testimonial text
    quote: String,

    /// Star rating, 1 to 5
    rating: i32,

    /// Position within the testimonial listing
    sort_order: i32,

    /// Whether the testimonial is visible on the public site
    is_active: bool,

    /// When this testimonial was added
    created_at: NaiveDateTime,
}

impl Testimonial {
    /// Creates a new, active testimonial at the given position
    pub fn new(author: String, location: Option<String>, quote: String, rating: i32, sort_order: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            location,
            quote,
            rating,
            sort_order,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the testimonial's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the customer name
    pub fn get_author(&self) -> String {
        self.author.clone()
    }

    /// Sets the customer name
    pub fn set_author(&mut self, author: String) {
        self.author = author;
    }

    /// Gets the customer location
    pub fn get_location(&self) -> Option<String> {
        self.location.clone()
    }

    /// Gets the testimonial text
    pub fn get_quote(&self) -> String {
        self.quote.clone()
    }

    /// Sets the testimonial text
    pub fn set_quote(&mut self, quote: String) {
        self.quote = quote;
    }

    /// Gets the star rating
    pub fn get_rating(&self) -> i32 {
        self.rating
    }

    /// Sets the star rating
    pub fn set_rating(&mut self, rating: i32) {
        self.rating = rating;
    }

    /// Gets the testimonial's position in the listing
    pub fn get_sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Gets whether the testimonial is visible
    pub fn get_is_active(&self) -> bool {
        self.is_active
    }

    /// Sets whether the testimonial is visible
    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Gets the testimonial's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_new() {
        let testimonial = Testimonial::new(
            "Dana K.".to_string(),
            Some("Salem, OR".to_string()),
            "The crew had us packed and moved in a day.".to_string(),
            5,
            1,
        );

        assert_eq!(testimonial.get_author(), "Dana K.");
        assert_eq!(testimonial.get_rating(), 5);
        assert!(testimonial.get_is_active());
        assert!(Uuid::parse_str(&testimonial.get_id()).is_ok());
    }
}
