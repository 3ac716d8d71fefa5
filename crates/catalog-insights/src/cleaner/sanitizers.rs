//! Header and value sanitization.

use crate::error::Result;
use crate::utils::is_blank;
use polars::prelude::*;
use tracing::debug;

/// Trim whitespace and a leading byte-order mark from every column name.
///
/// Returns the renames applied, as "old -> new".
pub(crate) fn normalize_column_names(df: &mut DataFrame) -> Result<Vec<String>> {
    let column_names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    let mut renamed = Vec::new();
    for name in &column_names {
        let normalized = normalize_header(name);
        if normalized != *name {
            df.rename(name, normalized.as_str().into())?;
            debug!("Normalized column name {:?} -> {:?}", name, normalized);
            renamed.push(format!("{name:?} -> {normalized:?}"));
        }
    }

    Ok(renamed)
}

pub(crate) fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}

/// Trim every string value and turn blank ones into nulls.
///
/// Returns the number of values nulled.
pub(crate) fn blank_to_null_all_columns(df: &mut DataFrame) -> Result<usize> {
    let column_names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    let mut total_replacements = 0;

    for col_name in &column_names {
        let series = df.column(col_name)?.as_materialized_series();
        if series.dtype() != &DataType::String {
            continue;
        }
        let (cleaned_series, count) = trim_blank_to_null(series)?;
        total_replacements += count;
        df.replace(col_name, cleaned_series)?;
    }

    if total_replacements > 0 {
        debug!("Replaced {} blank values with null", total_replacements);
    }

    Ok(total_replacements)
}

/// Trim values of a string series, mapping blanks to null.
pub(crate) fn trim_blank_to_null(series: &Series) -> Result<(Series, usize)> {
    let str_series = series.str()?;
    let mut cleaned_values: Vec<Option<String>> = Vec::with_capacity(str_series.len());
    let mut replacement_count = 0;

    for opt_val in str_series.into_iter() {
        match opt_val {
            Some(val) => {
                if is_blank(val) {
                    cleaned_values.push(None);
                    replacement_count += 1;
                } else {
                    cleaned_values.push(Some(val.trim().to_string()));
                }
            }
            None => cleaned_values.push(None),
        }
    }

    Ok((
        Series::new(series.name().clone(), cleaned_values),
        replacement_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Country "), "Country");
        assert_eq!(normalize_header("\u{feff}Show_Id"), "Show_Id");
        assert_eq!(normalize_header("Release_Date"), "Release_Date");
    }

    #[test]
    fn test_normalize_column_names() {
        let mut df = df!(
            "\u{feff}Show_Id" => ["s1"],
            " Category " => ["Movie"],
            "Country" => ["India"]
        )
        .unwrap();

        let renamed = normalize_column_names(&mut df).unwrap();
        assert_eq!(renamed.len(), 2);

        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["Show_Id", "Category", "Country"]);
    }

    #[test]
    fn test_trim_blank_to_null() {
        let series = Series::new(
            "Country".into(),
            &[Some(" India "), Some(""), Some("   "), None, Some("Japan")],
        );
        let (cleaned, count) = trim_blank_to_null(&series).unwrap();
        assert_eq!(count, 2);
        assert_eq!(cleaned.null_count(), 3);

        let values = cleaned.str().unwrap();
        assert_eq!(values.get(0), Some("India"));
        assert_eq!(values.get(4), Some("Japan"));
    }

    #[test]
    fn test_blank_to_null_all_columns() {
        let mut df = df!(
            "Country" => [Some("India"), Some(" ")],
            "Type" => [Some(""), Some("Dramas")]
        )
        .unwrap();

        let replaced = blank_to_null_all_columns(&mut df).unwrap();
        assert_eq!(replaced, 2);
        assert_eq!(df.column("Country").unwrap().null_count(), 1);
        assert_eq!(df.column("Type").unwrap().null_count(), 1);
    }
}
