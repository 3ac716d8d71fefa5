//! Catalog Insights Library
//!
//! Exploratory analysis of a streaming catalog export, built on Polars.
//!
//! # Overview
//!
//! One CSV of catalog entries goes through a single pass:
//!
//! - **Loading**: the CSV is read with every column as text
//! - **Cleaning**: header normalization, the `Type` -> `Genre` correction,
//!   best-effort date parsing and dropping of unusable rows
//! - **Aggregation**: titles per year and category, the leading genres and
//!   countries, and a yearly trend for the top genres
//! - **Charts**: four SVG charts rendered with plotters
//! - **Summary**: a short strategic recommendation text
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use catalog_insights::{Analysis, AnalysisConfig};
//!
//! let config = AnalysisConfig::builder()
//!     .input_path("Netflix Dataset.csv")
//!     .output_dir("outputs")
//!     .build()?;
//!
//! let result = Analysis::builder()
//!     .config(config)
//!     .on_progress(|update| {
//!         println!("[{:.0}%] {}", update.progress * 100.0, update.message);
//!     })
//!     .build()?
//!     .run()?;
//!
//! println!("{}", result.summary);
//! ```
//!
//! # Working on a loaded frame
//!
//! ```rust,ignore
//! use catalog_insights::{Analysis, load_catalog};
//!
//! let df = load_catalog("catalog.csv")?;
//! let result = Analysis::builder().build()?.analyze(df)?;
//! ```
//!
//! The aggregation functions in [`analysis`] can also be called directly on
//! a frame cleaned with [`CatalogCleaner`].

pub mod analysis;
pub mod charts;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod reporting;
pub mod types;
pub mod utils;

pub use analysis::{category_volume_by_year, genre_trend, split_tokens, token_frequencies, top_tokens};
pub use charts::{ChartOutput, ChartRenderer};
pub use cleaner::CatalogCleaner;
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use error::{AnalysisError, Result as CatalogResult, ResultExt};
pub use loader::load_catalog;
pub use pipeline::{
    Analysis, AnalysisBuilder, AnalysisStage, ClosureProgressReporter, ProgressReporter,
    ProgressUpdate,
};
pub use reporting::{AnalysisReport, ReportGenerator, StrategicSummary};
pub use types::{
    AnalysisResult, CategoryVolume, CleaningSummary, GenreTrend, TokenCount, TokenRanking,
    TrendPoint, YearVolume,
};
