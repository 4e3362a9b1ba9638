use crate::db::DbPool;
use crate::models::PageView;
use crate::schema::page_views;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use anyhow::Result;

/// Appends a page view to the log
pub fn record_page_view(
    pool: &DbPool,
    path: String,
    visitor_id: Option<String>,
    referrer: Option<String>,
) -> Result<PageView> {
    let conn = &mut pool.get()?;

    let view = PageView::new(path, visitor_id, referrer);

    diesel::insert_into(page_views::table)
        .values(&view)
        .execute(conn)?;

    Ok(view)
}

/// Counts page views per path since the given instant
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `since` - Start of the reporting window
/// * `paths` - When non-empty, restrict the summary to these paths
///
/// ### Returns
///
/// Path/count pairs, most-viewed first
pub fn summarize_page_views(
    pool: &DbPool,
    since: DateTime<Utc>,
    paths: &[String],
) -> Result<Vec<(String, i64)>> {
    let conn = &mut pool.get()?;

    // group_by is not available on boxed queries, so the path filter gets
    // its own branch
    let mut result: Vec<(String, i64)> = if paths.is_empty() {
        page_views::table
            .filter(page_views::viewed_at.ge(since.naive_utc()))
            .group_by(page_views::path)
            .select((page_views::path, diesel::dsl::count_star()))
            .load::<(String, i64)>(conn)?
    } else {
        page_views::table
            .filter(page_views::viewed_at.ge(since.naive_utc()))
            .filter(page_views::path.eq_any(paths))
            .group_by(page_views::path)
            .select((page_views::path, diesel::dsl::count_star()))
            .load::<(String, i64)>(conn)?
    };

    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::tests::setup_test_db;

    #[test]
    fn test_record_and_summarize() {
        let pool = setup_test_db();

        record_page_view(&pool, "/".to_string(), None, None).unwrap();
        record_page_view(&pool, "/".to_string(), Some("v1".to_string()), None).unwrap();
        record_page_view(&pool, "/services".to_string(), None, None).unwrap();

        let since = Utc::now() - chrono::Duration::days(1);
        let summary = summarize_page_views(&pool, since, &[]).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0], ("/".to_string(), 2));
        assert_eq!(summary[1], ("/services".to_string(), 1));
    }

    #[test]
    fn test_summarize_filters_by_path() {
        let pool = setup_test_db();

        record_page_view(&pool, "/".to_string(), None, None).unwrap();
        record_page_view(&pool, "/gallery".to_string(), None, None).unwrap();

        let since = Utc::now() - chrono::Duration::days(1);
        let summary = summarize_page_views(&pool, since, &["/gallery".to_string()]).unwrap();

        assert_eq!(summary, vec![("/gallery".to_string(), 1)]);
    }
}
