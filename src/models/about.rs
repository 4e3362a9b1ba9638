use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the "about us" section content
///
/// Like the hero banner, several revisions can exist with at most one active.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::about_content)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct AboutContent {
    /// Unique identifier for the revision (UUID v4 as string)
    id: String,

    /// Section heading
    heading: String,

    /// Body copy
    body: String,

    /// Optional illustration URL
    image_url: Option<String>,

    /// Years-in-business figure shown in the section
    years_experience: i32,

    /// Customers-served figure shown in the section
    customers_served: i32,

    /// Whether this revision is the one currently shown
    is_active: bool,

    /// When this revision was created
    created_at: NaiveDateTime,

    /// When this revision was last updated
    updated_at: NaiveDateTime,
}

impl AboutContent {
    /// Creates a new, inactive about-section revision
    pub fn new(
        heading: String,
        body: String,
        image_url: Option<String>,
        years_experience: i32,
        customers_served: i32,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            heading,
            body,
            image_url,
            years_experience,
            customers_served,
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gets the revision's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the section heading
    pub fn get_heading(&self) -> String {
        self.heading.clone()
    }

    /// Sets the section heading
    pub fn set_heading(&mut self, heading: String) {
        self.heading = heading;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the body copy
    pub fn get_body(&self) -> String {
        self.body.clone()
    }

    /// Sets the body copy
    pub fn set_body(&mut self, body: String) {
        self.body = body;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the illustration URL
    pub fn get_image_url(&self) -> Option<String> {
        self.image_url.clone()
    }

    /// Sets the illustration URL
    pub fn set_image_url(&mut self, image_url: Option<String>) {
        self.image_url = image_url;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the years-in-business figure
    pub fn get_years_experience(&self) -> i32 {
        self.years_experience
    }

    /// Sets the years-in-business figure
    pub fn set_years_experience(&mut self, years_experience: i32) {
        self.years_experience = years_experience;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the customers-served figure
    pub fn get_customers_served(&self) -> i32 {
        self.customers_served
    }

    /// Sets the customers-served figure
    pub fn set_customers_served(&mut self, customers_served: i32) {
        self.customers_served = customers_served;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets whether this revision is active
    pub fn get_is_active(&self) -> bool {
        self.is_active
    }

    /// Gets the revision's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_new() {
        let about = AboutContent::new(
            "Who we are".to_string(),
            "Family-run movers since 1998.".to_string(),
            None,
            27,
            15000,
        );

        assert_eq!(about.get_heading(), "Who we are");
        assert_eq!(about.get_years_experience(), 27);
        assert_eq!(about.get_customers_served(), 15000);
        assert!(!about.get_is_active());
        assert!(Uuid::parse_str(&about.get_id()).is_ok());
    }
}
