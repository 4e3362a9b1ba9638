use crate::db::DbPool;
use crate::models::AboutContent;
use crate::schema::about_content;
use chrono::Utc;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Creates a new about-section revision, initially inactive
pub fn create_about(
    pool: &DbPool,
    heading: String,
    body: String,
    image_url: Option<String>,
    years_experience: i32,
    customers_served: i32,
) -> Result<AboutContent> {
    let conn = &mut pool.get()?;

    let new_about = AboutContent::new(heading, body, image_url, years_experience, customers_served);

    diesel::insert_into(about_content::table)
        .values(&new_about)
        .execute(conn)?;

    Ok(new_about)
}

/// Retrieves an about revision by its ID
pub fn get_about(pool: &DbPool, about_id: &str) -> Result<Option<AboutContent>> {
    let conn = &mut pool.get()?;

    let result = about_content::table
        .find(about_id)
        .first::<AboutContent>(conn)
        .optional()?;

    Ok(result)
}

/// Retrieves the active about revision, if any
pub fn get_active_about(pool: &DbPool) -> Result<Option<AboutContent>> {
    let conn = &mut pool.get()?;

    let result = about_content::table
        .filter(about_content::is_active.eq(true))
        .first::<AboutContent>(conn)
        .optional()?;

    Ok(result)
}

/// Lists all about revisions, newest first
pub fn list_about(pool: &DbPool) -> Result<Vec<AboutContent>> {
    let conn = &mut pool.get()?;

    let result = about_content::table
        .order(about_content::created_at.desc())
        .load::<AboutContent>(conn)?;

    Ok(result)
}

/// Saves changes to an existing about revision
///
/// ### Errors
///
/// Returns an error if the revision does not exist
pub fn update_about(pool: &DbPool, about: &AboutContent) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(about_content::table.find(about.get_id()))
        .set(about)
        .execute(conn)?;

    if updated == 0 {
        return Err(anyhow!("About content not found: {}", about.get_id()));
    }

    Ok(())
}

/// Makes the given revision the active one, deactivating all others
///
/// ### Errors
///
/// Returns an error if the revision does not exist
pub fn activate_about(pool: &DbPool, about_id: &str) -> Result<AboutContent> {
    let conn = &mut pool.get()?;

    conn.transaction::<_, anyhow::Error, _>(|conn| {
        diesel::update(about_content::table)
            .set(about_content::is_active.eq(false))
            .execute(conn)?;

        let updated = diesel::update(about_content::table.find(about_id))
            .set((
                about_content::is_active.eq(true),
                about_content::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(conn)?;

        if updated == 0 {
            return Err(anyhow!("About content not found: {}", about_id));
        }

        let about = about_content::table.find(about_id).first::<AboutContent>(conn)?;
        Ok(about)
    })
}
