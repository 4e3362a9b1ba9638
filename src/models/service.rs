use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a service offered by the company (e.g. residential moves,
/// office relocation, packing)
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::services)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct Service {
    /// Unique identifier for the service (UUID v4 as string)
    id: String,

    /// Display title of the service
    title: String,

    /// Short description shown on the services page
    description: String,

    /// Icon name used by the site
    icon: Option<String>,

    /// Optional illustration URL
    image_url: Option<String>,

    /// Position within the services listing
    sort_order: i32,

    /// Whether the service is visible on the public site
    is_active: bool,

    /// When this service was created
    created_at: NaiveDateTime,

    /// When this service was last updated
    updated_at: NaiveDateTime,
}

impl Service {
    /// Creates a new, active service at the given position
    pub fn new(
        title: String,
        description: String,
        icon: Option<String>,
        image_url: Option<String>,
        sort_order: i32,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            icon,
            image_url,
            sort_order,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gets the service's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the service's title
    pub fn get_title(&self) -> String {
        self.title.clone()
    }

    /// Sets the service's title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the service's description
    pub fn get_description(&self) -> String {
        self.description.clone()
    }

    /// Sets the service's description
    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the service's icon name
    pub fn get_icon(&self) -> Option<String> {
        self.icon.clone()
    }

    /// Sets the service's icon name
    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the service's illustration URL
    pub fn get_image_url(&self) -> Option<String> {
        self.image_url.clone()
    }

    /// Sets the service's illustration URL
    pub fn set_image_url(&mut self, image_url: Option<String>) {
        self.image_url = image_url;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the service's position in the listing
    pub fn get_sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Gets whether the service is visible
    pub fn get_is_active(&self) -> bool {
        self.is_active
    }

    /// Sets whether the service is visible
    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the service's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}
