//! Report generation module.
//!
//! - [`StrategicSummary`]: recommendation text derived from the products
//! - [`AnalysisReport`]: full JSON record of a run (`--json`, `--emit-report`)
//! - [`ReportGenerator`]: writes the JSON report and the CSV tables
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_insights::reporting::ReportGenerator;
//!
//! let report = ReportGenerator::build_report(&config.input_path, &result);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//!
//! let generator = ReportGenerator::new("outputs");
//! generator.write_report_to_file(&report, "catalog")?;
//! generator.export_tables(&result)?;
//! ```

mod generator;
mod summary;

pub use generator::{AnalysisReport, ReportGenerator, ranking_frame, trend_frame, volume_frame};
pub use summary::{CategoryShare, SUMMARY_GENRES, StrategicSummary};
