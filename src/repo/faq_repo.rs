use crate::db::DbPool;
use crate::models::Faq;
use crate::schema::faqs;
use chrono::Utc;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Adds a new FAQ entry, appended at the end of the listing
pub fn create_faq(pool: &DbPool, question: String, answer: String) -> Result<Faq> {
    let conn = &mut pool.get()?;

    let max: Option<i32> = faqs::table
        .select(diesel::dsl::max(faqs::sort_order))
        .first(conn)?;
    let new_faq = Faq::new(question, answer, max.map_or(0, |m| m + 1));

    diesel::insert_into(faqs::table)
        .values(&new_faq)
        .execute(conn)?;

    Ok(new_faq)
}

/// Retrieves a FAQ entry by its ID
pub fn get_faq(pool: &DbPool, faq_id: &str) -> Result<Option<Faq>> {
    let conn = &mut pool.get()?;

    let result = faqs::table.find(faq_id).first::<Faq>(conn).optional()?;

    Ok(result)
}

/// Lists FAQ entries ordered by position
pub fn list_faqs(pool: &DbPool, include_inactive: bool) -> Result<Vec<Faq>> {
    let conn = &mut pool.get()?;

    let mut query = faqs::table.into_boxed();
    if !include_inactive {
        query = query.filter(faqs::is_active.eq(true));
    }

    let result = query.order(faqs::sort_order.asc()).load::<Faq>(conn)?;

    Ok(result)
}

/// Saves changes to an existing FAQ entry
///
/// ### Errors
///
/// Returns an error if the entry does not exist
pub fn update_faq(pool: &DbPool, faq: &Faq) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(faqs::table.find(faq.get_id()))
        .set(faq)
        .execute(conn)?;

    if updated == 0 {
        return Err(anyhow!("FAQ not found: {}", faq.get_id()));
    }

    Ok(())
}

/// Deletes a FAQ entry
///
/// ### Errors
///
/// Returns an error if the entry does not exist
pub fn delete_faq(pool: &DbPool, faq_id: &str) -> Result<()> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(faqs::table.find(faq_id)).execute(conn)?;

    if deleted == 0 {
        return Err(anyhow!("FAQ not found: {}", faq_id));
    }

    Ok(())
}

/// Rewrites the FAQ order from a full list of IDs
///
/// ### Errors
///
/// Returns an error if any ID does not name an existing entry
pub fn reorder_faqs(pool: &DbPool, ids: &[String]) -> Result<()> {
    let conn = &mut pool.get()?;

    conn.transaction::<_, anyhow::Error, _>(|conn| {
        for (position, id) in ids.iter().enumerate() {
            let updated = diesel::update(faqs::table.find(id))
                .set((
                    faqs::sort_order.eq(position as i32),
                    faqs::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)?;

            if updated == 0 {
                return Err(anyhow!("FAQ not found: {}", id));
            }
        }
        Ok(())
    })
}
