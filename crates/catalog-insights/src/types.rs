//! Column names and the data products handed from the aggregator to the
//! chart renderer and the summarizer.

use crate::reporting::StrategicSummary;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Content type column ("Movie" / "TV Show").
pub const CATEGORY_COL: &str = "Category";

/// Raw column that actually holds the genre list in catalog exports.
pub const RAW_GENRE_COL: &str = "Type";

/// Comma-separated genre list (renamed from [`RAW_GENRE_COL`]).
pub const GENRE_COL: &str = "Genre";

/// Comma-separated list of producing countries.
pub const COUNTRY_COL: &str = "Country";

/// Raw date string.
///
/// Despite the name, catalog exports store the date a title was *added* to
/// the catalog here ("August 14, 2020"), not its release date. A separate
/// "content release year" derived from it would be the same number, so only
/// [`YEAR_ADDED_COL`] is derived.
pub const RELEASE_DATE_COL: &str = "Release_Date";

/// Parsed form of [`RELEASE_DATE_COL`].
pub const DATE_ADDED_COL: &str = "Date Added";

/// Calendar year of [`DATE_ADDED_COL`].
pub const YEAR_ADDED_COL: &str = "Year Added";

/// Pivoted year × category title counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVolume {
    /// Category names in column order.
    pub categories: Vec<String>,
    /// One row per year, ascending.
    pub rows: Vec<YearVolume>,
}

/// Titles added in one year, aligned with [`CategoryVolume::categories`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearVolume {
    pub year: i32,
    pub counts: Vec<u32>,
}

impl CategoryVolume {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent year in the table.
    pub fn latest(&self) -> Option<&YearVolume> {
        self.rows.last()
    }

    /// Count for a year and category, zero when absent.
    pub fn count(&self, year: i32, category: &str) -> u32 {
        let Some(col) = self.categories.iter().position(|c| c == category) else {
            return 0;
        };
        self.rows
            .iter()
            .find(|row| row.year == year)
            .map(|row| row.counts[col])
            .unwrap_or(0)
    }

    /// Largest stacked total of any year.
    pub fn max_total(&self) -> u32 {
        self.rows
            .iter()
            .map(|row| row.counts.iter().sum::<u32>())
            .max()
            .unwrap_or(0)
    }
}

/// Occurrences of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: u32,
}

/// Top-N tokens of a multi-valued column, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRanking {
    /// Column the tokens come from.
    pub field: String,
    pub entries: Vec<TokenCount>,
}

impl TokenRanking {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The first `n` token names.
    pub fn leading(&self, n: usize) -> Vec<String> {
        self.entries
            .iter()
            .take(n)
            .map(|entry| entry.token.clone())
            .collect()
    }

    /// Token at rank `index` (0-based).
    pub fn token_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.token.as_str())
    }
}

/// Yearly title counts for the leading genres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreTrend {
    /// Genres followed, in rank order.
    pub genres: Vec<String>,
    /// Sorted by year, then by genre rank.
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub genre: String,
    pub count: u32,
}

impl GenreTrend {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (year, count) pairs for one genre, ascending by year.
    pub fn series(&self, genre: &str) -> Vec<(i32, u32)> {
        self.points
            .iter()
            .filter(|point| point.genre == genre)
            .map(|point| (point.year, point.count))
            .collect()
    }
}

/// What the cleaner did to the raw table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSummary {
    pub rows_loaded: usize,
    /// Rows whose date could not be parsed.
    pub rows_dropped_invalid_date: usize,
    /// Rows without a Country or Genre.
    pub rows_dropped_missing_fields: usize,
    pub rows_retained: usize,
    /// Columns renamed, as "old -> new".
    pub renamed_columns: Vec<String>,
}

impl CleaningSummary {
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped_invalid_date + self.rows_dropped_missing_fields
    }
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub cleaning: CleaningSummary,
    pub volume: CategoryVolume,
    pub top_genres: TokenRanking,
    pub genre_trend: GenreTrend,
    pub top_countries: TokenRanking,
    pub summary: StrategicSummary,
    /// Chart files written.
    pub charts: Vec<PathBuf>,
    /// Charts that could not be drawn, with the reason.
    pub chart_failures: Vec<String>,
    /// Wall-clock time of the run in milliseconds.
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_volume() -> CategoryVolume {
        CategoryVolume {
            categories: vec!["Movie".to_string(), "TV Show".to_string()],
            rows: vec![
                YearVolume { year: 2019, counts: vec![4, 1] },
                YearVolume { year: 2020, counts: vec![2, 3] },
            ],
        }
    }

    #[test]
    fn test_category_volume_lookup() {
        let volume = sample_volume();
        assert_eq!(volume.count(2019, "Movie"), 4);
        assert_eq!(volume.count(2020, "TV Show"), 3);
        assert_eq!(volume.count(2021, "Movie"), 0);
        assert_eq!(volume.count(2019, "Documentary"), 0);
        assert_eq!(volume.latest().map(|row| row.year), Some(2020));
        assert_eq!(volume.max_total(), 5);
    }

    #[test]
    fn test_token_ranking_accessors() {
        let ranking = TokenRanking {
            field: "Country".to_string(),
            entries: vec![
                TokenCount { token: "United States".to_string(), count: 5 },
                TokenCount { token: "India".to_string(), count: 3 },
            ],
        };
        assert_eq!(ranking.leading(3), vec!["United States", "India"]);
        assert_eq!(ranking.token_at(1), Some("India"));
        assert_eq!(ranking.token_at(2), None);
    }

    #[test]
    fn test_genre_trend_series() {
        let trend = GenreTrend {
            genres: vec!["Dramas".to_string(), "Comedies".to_string()],
            points: vec![
                TrendPoint { year: 2018, genre: "Dramas".to_string(), count: 2 },
                TrendPoint { year: 2018, genre: "Comedies".to_string(), count: 1 },
                TrendPoint { year: 2019, genre: "Dramas".to_string(), count: 4 },
            ],
        };
        assert_eq!(trend.series("Dramas"), vec![(2018, 2), (2019, 4)]);
        assert_eq!(trend.series("Comedies"), vec![(2018, 1)]);
        assert!(trend.series("Horror").is_empty());
    }
}
