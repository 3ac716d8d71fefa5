//! Shared helpers for column access and text formatting.

use crate::error::{AnalysisError, Result};
use polars::prelude::*;

// =============================================================================
// Column Access
// =============================================================================

/// Borrow a column as strings, mapping a missing column to
/// [`AnalysisError::ColumnNotFound`].
pub fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::ColumnNotFound(name.to_string()))?;
    Ok(column.as_materialized_series().str()?)
}

/// Borrow a column as 32-bit integers.
pub fn i32_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Int32Chunked> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::ColumnNotFound(name.to_string()))?;
    Ok(column.as_materialized_series().i32()?)
}

/// Whether the frame has a column with this exact name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|col| col.as_str() == name)
}

// =============================================================================
// Text Utilities
// =============================================================================

/// True for empty or whitespace-only strings.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Plural display form of a category ("Movie" -> "Movies").
pub fn pluralize(word: &str) -> String {
    if word.ends_with('s') {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Truncate a label to `max_chars` characters with an ellipsis.
pub fn truncate_label(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
