pub mod connection;
pub mod listings;
pub mod settings;

pub use connection::{init_db, Database};
pub use listings::ListingSource;
pub use settings::load_site_settings;
