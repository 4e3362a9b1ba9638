use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::JsonValue;

/// Represents the configurable homepage banner
///
/// This struct maps directly to the `hero_content` table in the database.
/// Several banner revisions can coexist, but at most one is active; the
/// repository layer enforces that activating one deactivates the rest.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::hero_content)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct HeroContent {
    /// Unique identifier for the banner revision (UUID v4 as string)
    id: String,

    /// The headline shown on the banner
    title: String,

    /// The optional sub-headline
    subtitle: Option<String>,

    /// Rotating background image URLs, stored as a JSON array in TEXT
    background_images: JsonValue,

    /// Headline statistics (label/value pairs), stored as JSON in TEXT
    stats: JsonValue,

    /// Label for the call-to-action button
    cta_label: Option<String>,

    /// Link target for the call-to-action button
    cta_link: Option<String>,

    /// Whether this revision is the one currently shown on the site
    is_active: bool,

    /// When this revision was created
    created_at: NaiveDateTime,

    /// When this revision was last updated
    updated_at: NaiveDateTime,
}

impl HeroContent {
    /// Creates a new, inactive banner revision
    ///
    /// This method automatically generates a UUID v4 for the ID and sets
    /// the created_at and updated_at timestamps to the current time.
    ///
    /// ### Arguments
    ///
    /// * `title` - The headline shown on the banner
    /// * `subtitle` - The optional sub-headline
    /// * `background_images` - JSON array of background image URLs
    /// * `stats` - JSON array of label/value statistic pairs
    /// * `cta_label` - Optional call-to-action button label
    /// * `cta_link` - Optional call-to-action link target
    ///
    /// ### Returns
    ///
    /// A new `HeroContent` instance, not yet active
    pub fn new(
        title: String,
        subtitle: Option<String>,
        background_images: JsonValue,
        stats: JsonValue,
        cta_label: Option<String>,
        cta_link: Option<String>,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            subtitle,
            background_images,
            stats,
            cta_label,
            cta_link,
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Gets the revision's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the banner headline
    pub fn get_title(&self) -> String {
        self.title.clone()
    }

    /// Sets the banner headline
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the banner sub-headline
    pub fn get_subtitle(&self) -> Option<String> {
        self.subtitle.clone()
    }

    /// Sets the banner sub-headline
    pub fn set_subtitle(&mut self, subtitle: Option<String>) {
        self.subtitle = subtitle;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the background image URLs as JSON
    pub fn get_background_images(&self) -> JsonValue {
        self.background_images.clone()
    }

    /// Sets the background image URLs
    pub fn set_background_images(&mut self, background_images: JsonValue) {
        self.background_images = background_images;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the headline statistics as JSON
    pub fn get_stats(&self) -> JsonValue {
        self.stats.clone()
    }

    /// Sets the headline statistics
    pub fn set_stats(&mut self, stats: JsonValue) {
        self.stats = stats;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the call-to-action label
    pub fn get_cta_label(&self) -> Option<String> {
        self.cta_label.clone()
    }

    /// Sets the call-to-action label
    pub fn set_cta_label(&mut self, cta_label: Option<String>) {
        self.cta_label = cta_label;
        self.updated_at = Utc::now().naive_utc();
    }

    /// Gets the call-to-action link target
    pub fn get_cta_link(&self) -> Option<String> {
        self.cta_link.clone()
    }

    /// Sets the call-to-action link target
    pub fn set_cta_link(&mut self, cta_link: Option<String>) {
        self.cta_link = cta_link;
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

    /// Gets the revision's last update timestamp as a DateTime<Utc>
    pub fn get_updated_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.updated_at, Utc)
    }
}
