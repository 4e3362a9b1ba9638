use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents one logged page view
///
/// Append-only telemetry. Nothing in the public site depends on these rows;
/// the admin panel reads aggregated counts.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::page_views)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PageView {
    /// Unique identifier for the view (UUID v4 as string)
    id: String,

    /// Path of the visited page
    path: String,

    /// Anonymous visitor identifier from the site
    visitor_id: Option<String>,

    /// Referrer header, when present
    referrer: Option<String>,

    /// When the view happened
    viewed_at: NaiveDateTime,
}

impl PageView {
    /// Creates a new page-view record stamped with the current time
    pub fn new(path: String, visitor_id: Option<String>, referrer: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            path,
            visitor_id,
            referrer,
            viewed_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the view's ID
    pub fn get_id(&self) -> String {
        self.id.clone()
    }

    /// Gets the visited path
    pub fn get_path(&self) -> String {
        self.path.clone()
    }

    /// Gets the anonymous visitor identifier
    pub fn get_visitor_id(&self) -> Option<String> {
        self.visitor_id.clone()
    }

    /// Gets the referrer
    pub fn get_referrer(&self) -> Option<String> {
        self.referrer.clone()
    }

    /// Gets the view timestamp as a DateTime<Utc>
    pub fn get_viewed_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.viewed_at, Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_new() {
        let view = PageView::new("/services".to_string(), Some("visitor-1".to_string()), None);

        assert_eq!(view.get_path(), "/services");
        assert_eq!(view.get_visitor_id(), Some("visitor-1".to_string()));
        assert!(Uuid::parse_str(&view.get_id()).is_ok());
    }
}
