use crate::db::DbPool;
use crate::models::Service;
use crate::schema::services;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use anyhow::{Result, anyhow};

/// Creates a new service in the database
///
/// The service is appended at the end of the listing: its sort_order is one
/// past the current maximum.
pub fn create_service(
    pool: &DbPool,
    title: String,
    description: String,
    icon: Option<String>,
    image_url: Option<String>,
) -> Result<Service> {
    let conn = &mut pool.get()?;

    let next_position = next_sort_order(conn)?;
    let new_service = Service::new(title, description, icon, image_url, next_position);

    diesel::insert_into(services::table)
        .values(&new_service)
        .execute(conn)?;

    Ok(new_service)
}

/// Retrieves a service by its ID
pub fn get_service(pool: &DbPool, service_id: &str) -> Result<Option<Service>> {
    let conn = &mut pool.get()?;

    let result = services::table
        .find(service_id)
        .first::<Service>(conn)
        .optional()?;

    Ok(result)
}

/// Lists services ordered by their position
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `include_inactive` - Whether hidden services are included (admin view)
pub fn list_services(pool: &DbPool, include_inactive: bool) -> Result<Vec<Service>> {
    let conn = &mut pool.get()?;

    let mut query = services::table.into_boxed();
    if !include_inactive {
        query = query.filter(services::is_active.eq(true));
    }

    let result = query.order(services::sort_order.asc()).load::<Service>(conn)?;

    Ok(result)
}

/// Saves changes to an existing service
///
/// ### Errors
///
/// Returns an error if the service does not exist
pub fn update_service(pool: &DbPool, service: &Service) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(services::table.find(service.get_id()))
        .set(service)
        .execute(conn)?;

    if updated == 0 {
        return Err(anyhow!("Service not found: {}", service.get_id()));
    }

    Ok(())
}

/// Deletes a service
///
/// ### Errors
///
/// Returns an error if the service does not exist
pub fn delete_service(pool: &DbPool, service_id: &str) -> Result<()> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(services::table.find(service_id)).execute(conn)?;

    if deleted == 0 {
        return Err(anyhow!("Service not found: {}", service_id));
    }

    Ok(())
}

/// Rewrites the listing order from a full list of service IDs
///
/// Each service takes the position of its ID in the list. Runs in a
/// transaction so a bad ID leaves the existing order untouched.
///
/// ### Errors
///
/// Returns an error if any ID does not name an existing service
pub fn reorder_services(pool: &DbPool, ids: &[String]) -> Result<()> {
    let conn = &mut pool.get()?;

    conn.transaction::<_, anyhow::Error, _>(|conn| {
        for (position, id) in ids.iter().enumerate() {
            let updated = diesel::update(services::table.find(id))
                .set((
                    services::sort_order.eq(position as i32),
                    services::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)?;

            if updated == 0 {
                return Err(anyhow!("Service not found: {}", id));
            }
        }
        Ok(())
    })
}

/// Returns one past the current maximum sort_order
fn next_sort_order(conn: &mut SqliteConnection) -> Result<i32> {
    let max: Option<i32> = services::table
        .select(diesel::dsl::max(services::sort_order))
        .first(conn)?;

    Ok(max.map_or(0, |m| m + 1))
}
