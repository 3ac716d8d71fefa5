//! Pipeline module.
//!
//! Wires loader, cleaner, aggregations, charts and summary into one run.

mod builder;
pub mod progress;

pub use builder::{Analysis, AnalysisBuilder};
pub use progress::{AnalysisStage, ClosureProgressReporter, ProgressReporter, ProgressUpdate};
