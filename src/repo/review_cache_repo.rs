use crate::db::DbPool;
use crate::models::{CachedReviews, JsonValue};
use crate::schema::review_cache;
use diesel::prelude::*;
use anyhow::Result;

/// Retrieves the cached reviews payload for a place, if one exists
///
/// Freshness is the caller's concern; see [`CachedReviews::is_fresh`].
pub fn get_cached_reviews(pool: &DbPool, place_id: &str) -> Result<Option<CachedReviews>> {
    let conn = &mut pool.get()?;

    let result = review_cache::table
        .find(place_id)
        .first::<CachedReviews>(conn)
        .optional()?;

    Ok(result)
}

/// Writes the cache row for a place, replacing any previous payload
///
/// The fetch timestamp is reset to the current time, restarting the
/// freshness window.
pub fn upsert_cached_reviews(pool: &DbPool, place_id: String, payload: JsonValue) -> Result<CachedReviews> {
    let conn = &mut pool.get()?;

    let row = CachedReviews::new(place_id, payload);

    diesel::replace_into(review_cache::table)
        .values(&row)
        .execute(conn)?;

    Ok(row)
}
