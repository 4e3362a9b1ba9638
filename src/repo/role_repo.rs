use crate::db::DbPool;
use crate::models::UserRole;
use crate::schema::user_roles;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Grants a role to a user, replacing any existing grant
///
/// One row per user: the previous grant (if any) is removed in the same
/// transaction as the insert.
pub fn upsert_role(pool: &DbPool, user_id: String, role: String) -> Result<UserRole> {
    let conn = &mut pool.get()?;

    conn.transaction::<_, anyhow::Error, _>(|conn| {
        diesel::delete(user_roles::table.filter(user_roles::user_id.eq(&user_id))).execute(conn)?;

        let grant = UserRole::new(user_id, role);
        diesel::insert_into(user_roles::table)
            .values(&grant)
            .execute(conn)?;

        Ok(grant)
    })
}

/// Retrieves the role grant for a user, if any
pub fn get_role(pool: &DbPool, user_id: &str) -> Result<Option<UserRole>> {
    let conn = &mut pool.get()?;

    let result = user_roles::table
        .filter(user_roles::user_id.eq(user_id))
        .first::<UserRole>(conn)
        .optional()?;

    Ok(result)
}

/// Lists all role grants
pub fn list_roles(pool: &DbPool) -> Result<Vec<UserRole>> {
    let conn = &mut pool.get()?;

    let result = user_roles::table.load::<UserRole>(conn)?;

    Ok(result)
}

/// Revokes a user's role grant
///
/// ### Errors
///
/// Returns an error if the user has no grant
pub fn delete_role(pool: &DbPool, user_id: &str) -> Result<()> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(user_roles::table.filter(user_roles::user_id.eq(user_id)))
        .execute(conn)?;

    if deleted == 0 {
        return Err(anyhow!("No role grant for user: {}", user_id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::tests::setup_test_db;

    #[test]
    fn test_upsert_replaces_existing_grant() {
        let pool = setup_test_db();

        upsert_role(&pool, "user-1".to_string(), "editor".to_string()).unwrap();
        upsert_role(&pool, "user-1".to_string(), "admin".to_string()).unwrap();

        let grant = get_role(&pool, "user-1").unwrap().unwrap();
        assert_eq!(grant.get_role(), "admin");
        assert_eq!(list_roles(&pool).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_role() {
        let pool = setup_test_db();

        upsert_role(&pool, "user-1".to_string(), "editor".to_string()).unwrap();
        delete_role(&pool, "user-1").unwrap();

        assert!(get_role(&pool, "user-1").unwrap().is_none());
        assert!(delete_role(&pool, "user-1").is_err());
    }
}
