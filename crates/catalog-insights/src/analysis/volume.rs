//! Content volume per year and category.

use crate::error::Result;
use crate::types::{CATEGORY_COL, CategoryVolume, YEAR_ADDED_COL, YearVolume};
use crate::utils::{i32_column, string_column};
use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Label for rows whose category is missing.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Count titles per (`Year Added`, `Category`) and pivot to year × category.
///
/// Categories come from the whole table in lexical order, so a category
/// that only appears before `min_year` still gets a zero column. Years
/// before `min_year` are dropped; the rest are ascending. Rows with a
/// missing category are counted under [`UNKNOWN_CATEGORY`].
pub fn category_volume_by_year(df: &DataFrame, min_year: i32) -> Result<CategoryVolume> {
    let years = i32_column(df, YEAR_ADDED_COL)?;
    let categories = string_column(df, CATEGORY_COL)?;

    let mut category_set: BTreeSet<&str> = BTreeSet::new();
    let mut grouped: BTreeMap<i32, BTreeMap<&str, u32>> = BTreeMap::new();

    for (year, category) in years.into_iter().zip(categories.into_iter()) {
        let Some(year) = year else {
            continue;
        };
        let category = category.unwrap_or(UNKNOWN_CATEGORY);
        category_set.insert(category);
        if year >= min_year {
            *grouped.entry(year).or_default().entry(category).or_insert(0) += 1;
        }
    }

    let category_names: Vec<String> = category_set.iter().map(|c| c.to_string()).collect();
    let rows = grouped
        .into_iter()
        .map(|(year, counts)| YearVolume {
            year,
            counts: category_set
                .iter()
                .map(|c| counts.get(c).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    Ok(CategoryVolume {
        categories: category_names,
        rows,
    })
}
