use crate::db::DbPool;
use crate::models::{HeroContent, JsonValue};
use crate::schema::hero_content;
use chrono::Utc;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Creates a new hero banner revision in the database
///
/// The new revision starts inactive; use [`activate_hero`] to make it the
/// one shown on the site.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `title` - The banner headline
/// * `subtitle` - The optional sub-headline
/// * `background_images` - JSON array of background image URLs
/// * `stats` - JSON array of label/value statistic pairs
/// * `cta_label` - Optional call-to-action label
/// * `cta_link` - Optional call-to-action link target
///
/// ### Returns
///
/// A Result containing the newly created HeroContent if successful
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database insert operation fails
pub fn create_hero(
    pool: &DbPool,
    title: String,
    subtitle: Option<String>,
    background_images: JsonValue,
    stats: JsonValue,
    cta_label: Option<String>,
    cta_link: Option<String>,
) -> Result<HeroContent> {
    let conn = &mut pool.get()?;

    let new_hero = HeroContent::new(title, subtitle, background_images, stats, cta_label, cta_link);

    diesel::insert_into(hero_content::table)
        .values(&new_hero)
        .execute(conn)?;

    Ok(new_hero)
}

/// Retrieves a hero revision by its ID
///
/// ### Returns
///
/// A Result containing the HeroContent if found, or None
pub fn get_hero(pool: &DbPool, hero_id: &str) -> Result<Option<HeroContent>> {
    let conn = &mut pool.get()?;

    let result = hero_content::table
        .find(hero_id)
        .first::<HeroContent>(conn)
        .optional()?;

    Ok(result)
}

/// Retrieves the active hero revision, if any
pub fn get_active_hero(pool: &DbPool) -> Result<Option<HeroContent>> {
    let conn = &mut pool.get()?;

    let result = hero_content::table
        .filter(hero_content::is_active.eq(true))
        .first::<HeroContent>(conn)
        .optional()?;

    Ok(result)
}

/// Lists all hero revisions, newest first
pub fn list_heroes(pool: &DbPool) -> Result<Vec<HeroContent>> {
    let conn = &mut pool.get()?;

    let result = hero_content::table
        .order(hero_content::created_at.desc())
        .load::<HeroContent>(conn)?;

    Ok(result)
}

/// Saves changes to an existing hero revision
///
/// ### Errors
///
/// Returns an error if the revision does not exist
pub fn update_hero(pool: &DbPool, hero: &HeroContent) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(hero_content::table.find(hero.get_id()))
        .set(hero)
        .execute(conn)?;

    if updated == 0 {
        return Err(anyhow!("Hero content not found: {}", hero.get_id()));
    }

    Ok(())
}

/// Makes the given revision the active one
///
/// Runs in a transaction: every other revision is deactivated first, so at
/// most one row ever has `is_active` set.
///
/// ### Errors
///
/// Returns an error if the revision does not exist
pub fn activate_hero(pool: &DbPool, hero_id: &str) -> Result<HeroContent> {
    let conn = &mut pool.get()?;

    conn.transaction::<_, anyhow::Error, _>(|conn| {
        diesel::update(hero_content::table)
            .set(hero_content::is_active.eq(false))
            .execute(conn)?;

        let updated = diesel::update(hero_content::table.find(hero_id))
            .set((
                hero_content::is_active.eq(true),
                hero_content::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(conn)?;

        if updated == 0 {
            return Err(anyhow!("Hero content not found: {}", hero_id));
        }

        let hero = hero_content::table.find(hero_id).first::<HeroContent>(conn)?;
        Ok(hero)
    })
}

/// Deletes a hero revision
///
/// ### Errors
///
/// Returns an error if the revision does not exist
pub fn delete_hero(pool: &DbPool, hero_id: &str) -> Result<()> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(hero_content::table.find(hero_id)).execute(conn)?;

    if deleted == 0 {
        return Err(anyhow!("Hero content not found: {}", hero_id));
    }

    Ok(())
}
