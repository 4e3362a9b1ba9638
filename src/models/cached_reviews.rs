use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::JsonValue;

/// Represents one cached Google-reviews payload
///
/// Keyed by place identifier. The payload is the reshaped reviews document
/// exactly as the public endpoint returns it (minus the cache flags), so a
/// fresh row can be served back without touching the upstream API.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::review_cache)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CachedReviews {
    /// Google place identifier
    place_id: String,

    /// The reshaped reviews document, stored as JSON in TEXT
    payload: JsonValue,

    /// When the payload was fetched from the upstream API
    fetched_at: NaiveDateTime,
}

impl CachedReviews {
    /// Creates a cache row stamped with the current time
    pub fn new(place_id: String, payload: JsonValue) -> Self {
        Self {
            place_id,
            payload,
            fetched_at: Utc::now().naive_utc(),
        }
    }

    /// Gets the place identifier
    pub fn get_place_id(&self) -> String {
        self.place_id.clone()
    }

    /// Gets the cached payload
    pub fn get_payload(&self) -> JsonValue {
        self.payload.clone()
    }

    /// Gets the fetch timestamp as a DateTime<Utc>
    pub fn get_fetched_at(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.fetched_at, Utc)
    }

    /// Whether the row is still inside the freshness window
    ///
    /// ### Arguments
    ///
    /// * `ttl` - The freshness window
    ///
    /// ### Returns
    ///
    /// `true` when the payload was fetched less than `ttl` ago
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.get_fetched_at());
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => age < ttl,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_row_is_fresh() {
        let row = CachedReviews::new(
            "place-1".to_string(),
            JsonValue(serde_json::json!({"name": "Acme Movers"})),
        );

        assert!(row.is_fresh(Duration::from_secs(3600)));
    }

    #[test]
    fn test_zero_ttl_is_stale() {
        let row = CachedReviews::new(
            "place-1".to_string(),
            JsonValue(serde_json::json!({"name": "Acme Movers"})),
        );

        assert!(!row.is_fresh(Duration::ZERO));
    }
}
