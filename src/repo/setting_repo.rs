use crate::db::DbPool;
use crate::models::SiteSetting;
use crate::schema::site_settings;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Writes a setting, inserting or replacing the row for the key
pub fn upsert_setting(pool: &DbPool, key: String, value: String) -> Result<SiteSetting> {
    let conn = &mut pool.get()?;

    let setting = SiteSetting::new(key, value);

    diesel::replace_into(site_settings::table)
        .values(&setting)
        .execute(conn)?;

    Ok(setting)
}

/// Retrieves a setting by key
pub fn get_setting(pool: &DbPool, key: &str) -> Result<Option<SiteSetting>> {
    let conn = &mut pool.get()?;

    let result = site_settings::table
        .find(key)
        .first::<SiteSetting>(conn)
        .optional()?;

    Ok(result)
}

/// Lists all settings, ordered by key
pub fn list_settings(pool: &DbPool) -> Result<Vec<SiteSetting>> {
    let conn = &mut pool.get()?;

    let result = site_settings::table
        .order(site_settings::key.asc())
        .load::<SiteSetting>(conn)?;

    Ok(result)
}

/// Deletes a setting
///
/// ### Errors
///
/// Returns an error if the key does not exist
pub fn delete_setting(pool: &DbPool, key: &str) -> Result<()> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(site_settings::table.find(key)).execute(conn)?;

    if deleted == 0 {
        return Err(anyhow!("Setting not found: {}", key));
    }

    Ok(())
}
