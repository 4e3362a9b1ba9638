use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an image in the site gallery
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::gallery_images)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct GalleryImage {
    /// Unique identifier for the image (UUID v4 as string)
    id: String,

    /// Optional caption
    title: Option<String>,

    /// URL of the stored image
    image_url: String,

    /// Optional category for filtering (e.g. "office", "residential")
    category: Option<String>,

    /// Position within the gallery
    sort_order: i32,

    /// Whether the image is visible on the public site
    is_active: bool,

    /// When this image was added
    created_at: NaiveDateTime,
}

impl GalleryImage {
    /// Creates a new, active gallery image at the given position
    pub fn new(title: Option<String>, image_url: String, category: Option<String>, sort_order: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            image_url,
            category,
            sort_order,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the image's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the image's caption
    pub fn get_title(&self) -> Option<String> {
        self.title.clone()
    }

    /// Sets the image's caption
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Gets the image URL
    pub fn get_image_url(&self) -> String {
        self.image_url.clone()
    }

    /// Sets the image URL
    pub fn set_image_url(&mut self, image_url: String) {
        self.image_url = image_url;
    }

    /// Gets the image's category
    pub fn get_category(&self) -> Option<String> {
        self.category.clone()
    }

    /// Sets the image's category
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// Gets the image's position in the gallery
    pub fn get_sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Gets whether the image is visible
    pub fn get_is_active(&self) -> bool {
        self.is_active
    }

    /// Sets whether the image is visible
    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Gets the image's creation timestamp as a DateTime<Utc>
    pub fn get_created_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.created_at, Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_image_new() {
        let image = GalleryImage::new(
            Some("Loading day".to_string()),
            "https://cdn.example.com/gallery/1.jpg".to_string(),
            Some("residential".to_string()),
            0,
        );

        assert_eq!(image.get_image_url(), "https://cdn.example.com/gallery/1.jpg");
        assert_eq!(image.get_category(), Some("residential".to_string()));
        assert!(image.get_is_active());
        assert!(Uuid::parse_str(&image.get_id()).is_ok());
    }
}
