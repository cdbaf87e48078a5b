use crate::db::connection::Database;
use crate::domain::Listing;
use crate::errors::ServerError;
use rusqlite::Row;
use tracing::{info, warn};

/// Where the site gets its catalogue from: one snapshot of every listing
/// currently marked active, newest first.
pub trait ListingSource {
    fn load_active_listings(&self) -> Result<Vec<Listing>, ServerError>;
}

impl ListingSource for Database {
    fn load_active_listings(&self) -> Result<Vec<Listing>, ServerError> {
        load_active_listings(self)
    }
}

const SQL_ACTIVE_LISTINGS: &str = r#"
    SELECT
        id,               -- 0
        title,            -- 1
        property_type,    -- 2
        purpose,          -- 3
        neighborhood,     -- 4
        city,             -- 5
        state,            -- 6
        reference_code,   -- 7
        featured,         -- 8
        price,            -- 9
        bedrooms,         -- 10
        area_m2,          -- 11
        cover_image_url,  -- 12
        created_at        -- 13
    FROM listings
    WHERE active = 1
    ORDER BY created_at DESC, id DESC
"#;

/// Rows that fail to decode are logged and skipped; the rest still load.
pub fn load_active_listings(db: &Database) -> Result<Vec<Listing>, ServerError> {
    let listings = db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(SQL_ACTIVE_LISTINGS)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut results = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| ServerError::DbError(e.to_string()))?
        {
            match listing_from_row(row) {
                Ok(listing) => results.push(listing),
                Err(e) => {
                    let id: Option<i64> = row.get(0).ok();
                    warn!(?id, error = %e, "skipping listing row that failed to decode");
                }
            }
        }
        Ok(results)
    })?;

    info!(count = listings.len(), "active listings loaded");
    Ok(listings)
}

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        id: row.get(0)?,
        title: row.get(1)?,
        property_type: row.get(2)?,
        purpose: row.get(3)?,
        neighborhood: row.get(4)?,
        city: row.get(5)?,
        state: row.get(6)?,
        reference_code: row.get(7)?,
        featured: row.get(8)?,
        price: row.get(9)?,
        bedrooms: row.get(10)?,
        area_m2: row.get(11)?,
        cover_image_url: row.get(12)?,
        created_at: row.get(13)?,
    })
}
