pub mod engine;
pub mod filters;
pub mod ordering;
pub mod query;

pub use engine::SearchEngine;
pub use filters::filter_providers;
pub use ordering::{locale_compare, sort_by, sort_by_key};
pub use query::{SearchQuery, SortKey};
