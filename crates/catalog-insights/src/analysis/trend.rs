//! Yearly series for the leading genres.

use super::tokens::split_tokens;
use crate::error::Result;
use crate::types::{GENRE_COL, GenreTrend, TrendPoint, YEAR_ADDED_COL};
use crate::utils::{i32_column, string_column};
use polars::prelude::*;
use std::collections::BTreeMap;

/// Count titles per (`Year Added`, genre) for the genres in `top_genres`.
///
/// A title listing several followed genres contributes to each of their
/// series. Years before `min_year` are dropped and years in which a genre
/// has no titles produce no point. Points are sorted by year, then by the
/// genre's position in `top_genres`.
pub fn genre_trend(
    df: &DataFrame,
    top_genres: &[String],
    separator: char,
    min_year: i32,
) -> Result<GenreTrend> {
    let years = i32_column(df, YEAR_ADDED_COL)?;
    let genres = string_column(df, GENRE_COL)?;

    // (year, rank) -> count
    let mut counts: BTreeMap<(i32, usize), u32> = BTreeMap::new();

    for (year, value) in years.into_iter().zip(genres.into_iter()) {
        let (Some(year), Some(value)) = (year, value) else {
            continue;
        };
        if year < min_year {
            continue;
        }
        for token in split_tokens(value, separator) {
            if let Some(rank) = top_genres.iter().position(|g| g == token) {
                *counts.entry((year, rank)).or_insert(0) += 1;
            }
        }
    }

    let points = counts
        .into_iter()
        .map(|((year, rank), count)| TrendPoint {
            year,
            genre: top_genres[rank].clone(),
            count,
        })
        .collect();

    Ok(GenreTrend {
        genres: top_genres.to_vec(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df!(
            "Genre" => ["Dramas", "Dramas, Comedies", "Action", "Comedies", "Dramas, Horror", "Dramas"],
            "Year Added" => [2014i32, 2016, 2016, 2017, 2017, 2017]
        )
        .unwrap()
    }

    fn leading() -> Vec<String> {
        vec!["Dramas".to_string(), "Comedies".to_string(), "Action".to_string()]
    }

    #[test]
    fn test_only_followed_genres_and_recent_years() {
        let trend = genre_trend(&frame(), &leading(), ',', 2015).unwrap();

        assert!(trend.points.iter().all(|p| p.year >= 2015));
        assert!(trend.points.iter().all(|p| leading().contains(&p.genre)));
        assert!(!trend.points.iter().any(|p| p.genre == "Horror"));
    }

    #[test]
    fn test_counts_and_order() {
        let trend = genre_trend(&frame(), &leading(), ',', 2015).unwrap();
        let points: Vec<(i32, &str, u32)> = trend
            .points
            .iter()
            .map(|p| (p.year, p.genre.as_str(), p.count))
            .collect();

        assert_eq!(
            points,
            vec![
                (2016, "Dramas", 1),
                (2016, "Comedies", 1),
                (2016, "Action", 1),
                (2017, "Dramas", 2),
                (2017, "Comedies", 1),
            ]
        );
        assert_eq!(trend.series("Dramas"), vec![(2016, 1), (2017, 2)]);
        assert_eq!(trend.series("Action"), vec![(2016, 1)]);
    }

    #[test]
    fn test_no_followed_genres() {
        let trend = genre_trend(&frame(), &[], ',', 2015).unwrap();
        assert!(trend.is_empty());
        assert!(trend.genres.is_empty());
    }
}
