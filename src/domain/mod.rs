pub mod listing;
pub mod settings;

pub use listing::{Listing, Purpose};
pub use settings::SiteSettings;
