use crate::db::DbPool;
use crate::models::{QuoteRequest, QuoteStatus};
use crate::schema::quote_requests;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Stores a new quote request (lead) in the database
///
/// The caller is responsible for sanitizing and validating the fields; the
/// repository stores what it is given. The lead starts in the `new` status.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `name` / `email` / `phone` - Contact details
/// * `move_date` - Requested move date, when given
/// * `origin` / `destination` - Endpoints of the move
/// * `home_size` - Rough size of the move, when given
/// * `message` - Free-text message, when given
/// * `visitor_id` - Anonymous site visitor identifier, when given
///
/// ### Returns
///
/// A Result containing the stored QuoteRequest if successful
#[allow(clippy::too_many_arguments)]
pub fn create_quote(
    pool: &DbPool,
    name: String,
    email: String,
    phone: String,
    move_date: Option<String>,
    origin: String,
    destination: String,
    home_size: Option<String>,
    message: Option<String>,
    visitor_id: Option<String>,
) -> Result<QuoteRequest> {
    let conn = &mut pool.get()?;

    let new_quote = QuoteRequest::new(
        name, email, phone, move_date, origin, destination, home_size, message, visitor_id,
    );

    diesel::insert_into(quote_requests::table)
        .values(&new_quote)
        .execute(conn)?;

    Ok(new_quote)
}

/// Retrieves a quote request by its ID
pub fn get_quote(pool: &DbPool, quote_id: &str) -> Result<Option<QuoteRequest>> {
    let conn = &mut pool.get()?;

    let result = quote_requests::table
        .find(quote_id)
        .first::<QuoteRequest>(conn)
        .optional()?;

    Ok(result)
}

/// Lists quote requests, newest first, optionally filtered by status
pub fn list_quotes(pool: &DbPool, status: Option<QuoteStatus>) -> Result<Vec<QuoteRequest>> {
    let conn = &mut pool.get()?;

    let mut query = quote_requests::table.into_boxed();
    if let Some(status) = status {
        query = query.filter(quote_requests::status.eq(status.as_str()));
    }

    let result = query
        .order(quote_requests::created_at.desc())
        .load::<QuoteRequest>(conn)?;

    Ok(result)
}

/// Moves a quote request to a new lifecycle status
///
/// ### Errors
///
/// Returns an error if the quote request does not exist
pub fn update_quote_status(pool: &DbPool, quote_id: &str, status: QuoteStatus) -> Result<QuoteRequest> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(quote_requests::table.find(quote_id))
        .set((
            quote_requests::status.eq(status.as_str()),
            quote_requests::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(anyhow!("Quote request not found: {}", quote_id));
    }

    let quote = quote_requests::table.find(quote_id).first::<QuoteRequest>(conn)?;
    Ok(quote)
}

/// Deletes a quote request
///
/// ### Errors
///
/// Returns an error if the quote request does not exist
pub fn delete_quote(pool: &DbPool, quote_id: &str) -> Result<()> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(quote_requests::table.find(quote_id)).execute(conn)?;

    if deleted == 0 {
        return Err(anyhow!("Quote request not found: {}", quote_id));
    }

    Ok(())
}

/// Counts quote requests submitted since the given instant by the same
/// sender, matched by email or, when present, visitor id
///
/// Used by the submission rate limiter.
pub fn count_recent_quotes(
    pool: &DbPool,
    email: &str,
    visitor_id: Option<&str>,
    since: DateTime<Utc>,
) -> Result<i64> {
    let conn = &mut pool.get()?;

    let count: i64 = match visitor_id {
        Some(visitor_id) => quote_requests::table
            .filter(quote_requests::created_at.ge(since.naive_utc()))
            .filter(
                quote_requests::email
                    .eq(email)
                    .or(quote_requests::visitor_id.eq(visitor_id)),
            )
            .count()
            .get_result(conn)?,
        None => quote_requests::table
            .filter(quote_requests::created_at.ge(since.naive_utc()))
            .filter(quote_requests::email.eq(email))
            .count()
            .get_result(conn)?,
    };

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::tests::setup_test_db;

    fn sample_quote(pool: &DbPool, email: &str, visitor_id: Option<&str>) -> QuoteRequest {
        create_quote(
            pool,
            "Pat Doe".to_string(),
            email.to_string(),
            "+1 503 555 0199".to_string(),
            None,
            "Portland, OR".to_string(),
            "Seattle, WA".to_string(),
            None,
            None,
            visitor_id.map(String::from),
        )
        .unwrap()
    }

    #[test]
    fn test_create_and_get_quote() {
        let pool = setup_test_db();

        let quote = sample_quote(&pool, "pat@example.com", None);
        let fetched = get_quote(&pool, &quote.get_id()).unwrap().unwrap();

        assert_eq!(fetched.get_email(), "pat@example.com");
        assert_eq!(fetched.get_status(), "new");
    }

    #[test]
    fn test_list_quotes_filters_by_status() {
        let pool = setup_test_db();

        let first = sample_quote(&pool, "a@example.com", None);
        sample_quote(&pool, "b@example.com", None);

        update_quote_status(&pool, &first.get_id(), QuoteStatus::Contacted).unwrap();

        let contacted = list_quotes(&pool, Some(QuoteStatus::Contacted)).unwrap();
        assert_eq!(contacted.len(), 1);
        assert_eq!(contacted[0].get_id(), first.get_id());

        let all = list_quotes(&pool, None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_update_status_of_missing_quote_fails() {
        let pool = setup_test_db();

        assert!(update_quote_status(&pool, "nonexistent-id", QuoteStatus::Closed).is_err());
    }

    #[test]
    fn test_count_recent_quotes_matches_email_or_visitor() {
        let pool = setup_test_db();

        sample_quote(&pool, "pat@example.com", Some("visitor-1"));
        sample_quote(&pool, "other@example.com", Some("visitor-1"));
        sample_quote(&pool, "third@example.com", Some("visitor-2"));

        let since = Utc::now() - chrono::Duration::hours(1);

        // Same visitor id counts even under a different email
        let count = count_recent_quotes(&pool, "pat@example.com", Some("visitor-1"), since).unwrap();
        assert_eq!(count, 2);

        // Email-only matching
        let count = count_recent_quotes(&pool, "third@example.com", None, since).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_count_recent_quotes_ignores_older_rows() {
        let pool = setup_test_db();

        sample_quote(&pool, "pat@example.com", None);

        // A window starting in the future sees nothing
        let since = Utc::now() + chrono::Duration::minutes(5);
        let count = count_recent_quotes(&pool, "pat@example.com", None, since).unwrap();
        assert_eq!(count, 0);
    }
}
