use crate::db::DbPool;
use crate::models::GalleryImage;
use crate::schema::gallery_images;
use diesel::prelude::*;
use anyhow::{Result, anyhow};

/// Adds a new image to the gallery, appended at the end of the listing
pub fn create_gallery_image(
    pool: &DbPool,
    title: Option<String>,
    image_url: String,
    category: Option<String>,
) -> Result<GalleryImage> {
    let conn = &mut pool.get()?;

    let max: Option<i32> = gallery_images::table
        .select(diesel::dsl::max(gallery_images::sort_order))
        .first(conn)?;
    let new_image = GalleryImage::new(title, image_url, category, max.map_or(0, |m| m + 1));

    diesel::insert_into(gallery_images::table)
        .values(&new_image)
        .execute(conn)?;

    Ok(new_image)
}

/// Retrieves a gallery image by its ID
pub fn get_gallery_image(pool: &DbPool, image_id: &str) -> Result<Option<GalleryImage>> {
    let conn = &mut pool.get()?;

    let result = gallery_images::table
        .find(image_id)
        .first::<GalleryImage>(conn)
        .optional()?;

    Ok(result)
}

/// Lists gallery images ordered by position
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `category` - Optional category filter
/// * `include_inactive` - Whether hidden images are included (admin view)
pub fn list_gallery_images(
    pool: &DbPool,
    category: Option<&str>,
    include_inactive: bool,
) -> Result<Vec<GalleryImage>> {
    let conn = &mut pool.get()?;

    let mut query = gallery_images::table.into_boxed();
    if !include_inactive {
        query = query.filter(gallery_images::is_active.eq(true));
    }
    if let Some(category) = category {
        query = query.filter(gallery_images::category.eq(category));
    }

    let result = query
        .order(gallery_images::sort_order.asc())
        .load::<GalleryImage>(conn)?;

    Ok(result)
}

/// Saves changes to an existing gallery image
///
/// ### Errors
///
/// Returns an error if the image does not exist
pub fn update_gallery_image(pool: &DbPool, image: &GalleryImage) -> Result<()> {
    let conn = &mut pool.get()?;

    let updated = diesel::update(gallery_images::table.find(image.get_id()))
        .set(image)
        .execute(conn)?;

    if updated == 0 {
        return Err(anyhow!("Gallery image not found: {}", image.get_id()));
    }

    Ok(())
}

/// Deletes a gallery image
///
/// ### Errors
///
/// Returns an error if the image does not exist
pub fn delete_gallery_image(pool: &DbPool, image_id: &str) -> Result<()> {
    let conn = &mut pool.get()?;

    let deleted = diesel::delete(gallery_images::table.find(image_id)).execute(conn)?;

    if deleted == 0 {
        return Err(anyhow!("Gallery image not found: {}", image_id));
    }

    Ok(())
}

/// Rewrites the gallery order from a full list of image IDs
///
/// ### Errors
///
/// Returns an error if any ID does not name an existing image
pub fn reorder_gallery_images(pool: &DbPool, ids: &[String]) -> Result<()> {
    let conn = &mut pool.get()?;

    conn.transaction::<_, anyhow::Error, _>(|conn| {
        for (position, id) in ids.iter().enumerate() {
            let updated = diesel::update(gallery_images::table.find(id))
                .set(gallery_images::sort_order.eq(position as i32))
                .execute(conn)?;

            if updated == 0 {
                return Err(anyhow!("Gallery image not found: {}", id));
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::tests::setup_test_db;

    fn sample_image(pool: &DbPool, url: &str, category: Option<&str>) -> GalleryImage {
        create_gallery_image(pool, None, url.to_string(), category.map(String::from)).unwrap()
    }

    #[test]
    fn test_list_filters_by_category() {
        let pool = setup_test_db();

        sample_image(&pool, "a.jpg", Some("residential"));
        sample_image(&pool, "b.jpg", Some("office"));
        sample_image(&pool, "c.jpg", Some("residential"));

        let residential = list_gallery_images(&pool, Some("residential"), false).unwrap();
        assert_eq!(residential.len(), 2);

        let all = list_gallery_images(&pool, None, false).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_hidden_images_excluded_from_public_listing() {
        let pool = setup_test_db();

        let mut image = sample_image(&pool, "a.jpg", None);
        image.set_is_active(false);
        update_gallery_image(&pool, &image).unwrap();

        assert!(list_gallery_images(&pool, None, false).unwrap().is_empty());
        assert_eq!(list_gallery_images(&pool, None, true).unwrap().len(), 1);
    }

    #[test]
    fn test_reorder_gallery_images() {
        let pool = setup_test_db();

        let a = sample_image(&pool, "a.jpg", None);
        let b = sample_image(&pool, "b.jpg", None);

        reorder_gallery_images(&pool, &[b.get_id(), a.get_id()]).unwrap();

        let listed = list_gallery_images(&pool, None, true).unwrap();
        let urls: Vec<String> = listed.iter().map(|i| i.get_image_url()).collect();
        assert_eq!(urls, vec!["b.jpg", "a.jpg"]);
    }
}
