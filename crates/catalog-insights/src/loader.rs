//! CSV loading with fallback strategies.
//!
//! Every column is read as a raw string; typing is the cleaner's job.

use crate::error::{AnalysisError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Load a catalog CSV into a frame of string columns.
///
/// # Errors
///
/// [`AnalysisError::InputNotFound`] if the path does not exist,
/// [`AnalysisError::LoadFailed`] if no read strategy can parse the file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnalysisError::InputNotFound(path.to_path_buf()));
    }

    info!("Loading dataset from: {}", path.display());
    let df = load_csv_with_fallbacks(path)?;
    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

fn raw_string_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_infer_schema_length(Some(0))
        .with_has_header(true)
}

/// Parse the file with quoting, retrying once with ragged rows truncated.
fn load_csv_with_fallbacks(path: &Path) -> Result<DataFrame> {
    // Strategy 1: Standard loading with quote handling
    match quoted_options(false)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard loading failed: {}", e);
        }
    }

    // Strategy 2: Same quoting, extra fields on a row are cut off
    let df = quoted_options(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
        .map_err(|e| AnalysisError::LoadFailed(format!("{}: {}", path.display(), e)))?;
    warn!("{} parsed with ragged rows truncated", path.display());
    Ok(df)
}

fn quoted_options(truncate_ragged_lines: bool) -> CsvReadOptions {
    raw_string_options().with_parse_options(
        CsvParseOptions::default()
            .with_quote_char(Some(b'"'))
            .with_truncate_ragged_lines(truncate_ragged_lines),
    )
}
