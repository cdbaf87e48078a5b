use crate::db::{load_site_settings, Database, ListingSource};
use crate::domain::{Listing, SiteSettings};
use std::sync::Arc;
use tracing::{error, warn};

/// Everything a request handler can see. The listing cache is loaded once
/// and shared read-only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppState {
    pub listings: Arc<Vec<Listing>>,
    pub settings: SiteSettings,
}

impl AppState {
    /// A failed catalogue load is reported once and leaves the cache empty;
    /// missing settings fall back to defaults.
    pub fn load(db: &Database) -> Self {
        let listings = db.load_active_listings().unwrap_or_else(|e| {
            error!(error = %e, "failed to load listings, continuing with an empty catalogue");
            Vec::new()
        });

        let settings = load_site_settings(db).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load site settings, using defaults");
            SiteSettings::default()
        });

        Self {
            listings: Arc::new(listings),
            settings,
        }
    }
}
