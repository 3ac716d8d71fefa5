//! Aggregations over the cleaned catalog.
//!
//! All functions borrow the cleaned `DataFrame` and fail only when a column
//! they read is missing:
//! - [`category_volume_by_year`]: titles added per year and category
//! - [`top_tokens`]: most frequent genres or countries
//! - [`genre_trend`]: yearly counts for the leading genres

mod tokens;
mod trend;
mod volume;

pub use tokens::{split_tokens, token_frequencies, top_tokens};
pub use trend::genre_trend;
pub use volume::{UNKNOWN_CATEGORY, category_volume_by_year};
