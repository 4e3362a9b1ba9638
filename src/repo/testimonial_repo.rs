use crate::db::DbPool;
use crate::models::Testimonial;
use crate::schema::testimonials;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Adds a new testimonial, appended at the end of the listing
pub fn create_testimonial(
    pool: &DbPool,
    author: String,
    location: Option<String>,
    quote: String,
    rating: i32,
) -> Result<Testimonial> {
    let conn = &mut pool.get()?;

    let max: Option<i32> = testimonials::table
        .select(diesel::dsl::max(testimonials::sort_order))
        .first(conn)?;
    let new_testimonial = Testimonial::new(author, location, quote, rating, max.map_or(0, |m| m + 1));

    diesel::insert_into(testimonials::table)
        .values(&new_testimonial)
        .execute(conn)?;

    Ok(new_testimonial)
}

/// Retrieves a testimonial by its ID
pub fn get_testimonial(pool: &DbPool, testimonial_id: &str) -> Result<Option<Testimonial>> {
    let conn = &mut pool.get()?;

    let result = testimonials::table
        .find(testimonial_id)
        .first::<Testimonial>(conn)
        .optional()?;

    Ok(result)
}

/// Lists testimonials ordered by position
pub fn list_testimonials(pool: &DbPool, include_inactive: bool) -> Result<Vec<Testimonial>> {
    let conn = &mut pool.get()?;

    let mut query = testimonials::table.into_boxed();
    if !include_inactive {
        query = query.filter(testimonials::is_active.eq(true));
    }

    let result = query
        .order(testimonials::sort_order.asc())
        .load::<Testimonial>(conn)?;

    Ok(result)
}

/// Saves changes to an existing testimonial
///
/// ### Errors
///
/// Returns an error if the testimonial does not exist
pub fn update_testimonial(pool: &DbPool, testimonial: &Testimonial) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(testimonials::table.find(testimonial.get_id()))
        .set(testimonial)
        .execute(conn)?;

    if updated == 0 {
        return Err(anyhow!("Testimonial not found: {}", testimonial.get_id()));
    }

    Ok(())
}

/// Deletes a testimonial
///
/// ### Errors
///
/// Returns an error if the testimonial does not exist
pub fn delete_testimonial(pool: &DbPool, testimonial_id: &str) -> Result<()> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(testimonials::table.find(testimonial_id)).execute(conn)?;

    if deleted == 0 {
        return Err(anyhow!("Testimonial not found: {}", testimonial_id));
    }

    Ok(())
}

/// Rewrites the testimonial order from a full list of IDs
///
/// ### Errors
///
/// Returns an error if any ID does not name an existing testimonial
pub fn reorder_testimonials(pool: &DbPool, ids: &[String]) -> Result<()> {
    let conn = &mut pool.get()?;

    conn.transaction::<_, anyhow::Error, _>(|conn| {
        for (position, id) in ids.iter().enumerate() {
            let updated = diesel::update(testimonials::table.find(id))
                .set(testimonials::sort_order.eq(position as i32))
                .execute(conn)?;

            if updated == 0 {
                return Err(anyhow!("Testimonial not found: {}", id));
            }
        }
        Ok(())
    })
}
