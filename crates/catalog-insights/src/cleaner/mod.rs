//! Data cleaning for raw catalog tables.
//!
//! This module provides:
//! - Column name normalization and the `Type` -> `Genre` correction
//! - Blank-value sanitization
//! - Best-effort date parsing and year derivation
//! - Dropping rows that cannot take part in the analysis

mod dates;
mod sanitizers;

use crate::error::{AnalysisError, Result, ResultExt};
use crate::types::{
    CATEGORY_COL, COUNTRY_COL, CleaningSummary, DATE_ADDED_COL, GENRE_COL, RAW_GENRE_COL,
    RELEASE_DATE_COL, YEAR_ADDED_COL,
};
use crate::utils::has_column;
use polars::prelude::*;
use tracing::{debug, info};

/// Cleaner turning a raw catalog frame into the analysable table.
///
/// After [`CatalogCleaner::clean`] every row has a non-null `Country`,
/// `Genre`, `Date Added` and `Year Added`.
pub struct CatalogCleaner;

impl CatalogCleaner {
    /// Run every cleaning step in order.
    ///
    /// 1. Normalize column names and rename `Type` to `Genre`
    /// 2. Trim values, blanks become null
    /// 3. Parse `Release_Date` into `Date Added` (unparseable -> null)
    /// 4. Drop rows without a date
    /// 5. Derive `Year Added`
    /// 6. Drop rows without `Country` or `Genre`
    pub fn clean(&self, df: DataFrame) -> Result<(DataFrame, CleaningSummary)> {
        let mut df = df;
        let mut summary = CleaningSummary {
            rows_loaded: df.height(),
            ..Default::default()
        };

        info!("Cleaning {} rows...", summary.rows_loaded);

        // 1. Column identity
        summary.renamed_columns = sanitizers::normalize_column_names(&mut df)?;
        if let Some(rename) = self.correct_genre_column(&mut df)? {
            summary.renamed_columns.push(rename);
        }
        for required in [CATEGORY_COL, COUNTRY_COL, RELEASE_DATE_COL] {
            if !has_column(&df, required) {
                return Err(AnalysisError::ColumnNotFound(required.to_string()));
            }
        }

        // 2. Blank values
        sanitizers::blank_to_null_all_columns(&mut df)?;

        // 3-5. Dates
        let dates = dates::parse_date_values(df.column(RELEASE_DATE_COL)?.as_materialized_series())?;
        df.with_column(dates::date_series(DATE_ADDED_COL, &dates))
            .context(format!("Adding {DATE_ADDED_COL}"))?;
        df.with_column(dates::year_series(YEAR_ADDED_COL, &dates))
            .context(format!("Adding {YEAR_ADDED_COL}"))?;

        let before = df.height();
        let mask = df.column(DATE_ADDED_COL)?.as_materialized_series().is_not_null();
        df = df.filter(&mask).context("Dropping rows with unparseable dates")?;
        summary.rows_dropped_invalid_date = before - df.height();
        debug!(
            "Dropped {} rows with unparseable {}",
            summary.rows_dropped_invalid_date, RELEASE_DATE_COL
        );

        // 6. Required multi-valued fields
        let before = df.height();
        let country_present = df.column(COUNTRY_COL)?.as_materialized_series().is_not_null();
        let genre_present = df.column(GENRE_COL)?.as_materialized_series().is_not_null();
        let mask = &country_present & &genre_present;
        df = df.filter(&mask).context("Dropping rows missing country or genre")?;
        summary.rows_dropped_missing_fields = before - df.height();
        debug!(
            "Dropped {} rows missing {} or {}",
            summary.rows_dropped_missing_fields, COUNTRY_COL, GENRE_COL
        );

        summary.rows_retained = df.height();
        info!(
            "Cleaning complete: {} rows retained, {} dropped",
            summary.rows_retained,
            summary.rows_dropped()
        );

        Ok((df, summary))
    }

    /// Rename the raw `Type` column to `Genre`.
    ///
    /// Catalog exports store the genre list under `Type`. If a `Genre`
    /// column already exists it is used as-is and `Type` is left alone.
    fn correct_genre_column(&self, df: &mut DataFrame) -> Result<Option<String>> {
        if has_column(df, GENRE_COL) {
            debug!("{} column already present, keeping it", GENRE_COL);
            return Ok(None);
        }
        if !has_column(df, RAW_GENRE_COL) {
            return Err(AnalysisError::ColumnNotFound(RAW_GENRE_COL.to_string()));
        }
        df.rename(RAW_GENRE_COL, GENRE_COL.into())
            .context(format!("Renaming {RAW_GENRE_COL} to {GENRE_COL}"))?;
        Ok(Some(format!("{RAW_GENRE_COL:?} -> {GENRE_COL:?}")))
    }
}
