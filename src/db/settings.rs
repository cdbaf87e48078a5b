use crate::db::connection::Database;
use crate::domain::SiteSettings;
use crate::errors::ServerError;
use tracing::debug;

/// Read `site_settings` on top of the defaults.
pub fn load_site_settings(db: &Database) -> Result<SiteSettings, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("SELECT key, value FROM site_settings")
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut settings = SiteSettings::default();
        for row in rows {
            let (key, value) = row.map_err(|e| ServerError::DbError(e.to_string()))?;
            if !settings.apply(&key, value) {
                debug!(key = %key, "ignoring unknown site setting");
            }
        }
        Ok(settings)
    })
}
