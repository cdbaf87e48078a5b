//! Free-text search over the cached listing set: normalization, intent/token
//! parsing, the local filter engine and the presenter contract.

pub mod debounce;
pub mod filter;
pub mod lexicon;
pub mod normalize;
pub mod parser;
pub mod presenter;
pub mod session;

pub use debounce::Debouncer;
pub use filter::{apply_filters, FilterCriteria, FilterOutcome};
pub use normalize::normalize_text;
pub use parser::{parse_search_query, SearchState};
pub use presenter::{present, ResultView};
pub use session::{SearchConfig, SearchSession};
