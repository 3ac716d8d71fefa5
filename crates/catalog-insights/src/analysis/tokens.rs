//! Token frequency over comma-separated multi-valued fields.

use crate::error::Result;
use crate::types::{TokenCount, TokenRanking};
use crate::utils::string_column;
use polars::prelude::*;
use std::collections::HashMap;

/// Split a multi-valued field into trimmed, non-empty, distinct tokens.
///
/// Order of first occurrence is preserved, so `"Drama, Comedy, Drama"`
/// yields `["Drama", "Comedy"]`.
pub fn split_tokens(value: &str, separator: char) -> Vec<&str> {
    let mut tokens: Vec<&str> = Vec::new();
    for token in value.split(separator).map(str::trim) {
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Count every distinct token of `column` across all rows.
///
/// Sorted by descending count. Equal counts keep the order in which the
/// tokens were first encountered, so repeated runs give identical output.
pub fn token_frequencies(df: &DataFrame, column: &str, separator: char) -> Result<Vec<TokenCount>> {
    let values = string_column(df, column)?;

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<TokenCount> = Vec::new();

    for value in values.into_iter().flatten() {
        for token in split_tokens(value, separator) {
            match positions.get(token) {
                Some(&idx) => counts[idx].count += 1,
                None => {
                    positions.insert(token.to_string(), counts.len());
                    counts.push(TokenCount {
                        token: token.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort: ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(counts)
}

/// The `n` most frequent tokens of `column`.
pub fn top_tokens(df: &DataFrame, column: &str, separator: char, n: usize) -> Result<TokenRanking> {
    let mut entries = token_frequencies(df, column, separator)?;
    entries.truncate(n);
    Ok(TokenRanking {
        field: column.to_string(),
        entries,
    })
}
