//! Strategic summary derived from the aggregated products.
//!
//! The summary never fails: thin inputs (no recent titles, fewer than three
//! genres, a single country) produce shorter sentences instead of errors.

use crate::analysis::UNKNOWN_CATEGORY;
use crate::types::{CategoryVolume, TokenRanking};
use crate::utils::pluralize;
use serde::{Deserialize, Serialize};
use std::fmt;

const RULE: &str = "==================================================";
const HEADING: &str = "             STRATEGIC CONTENT RECOMMENDATIONS";

/// Number of genres named in the genre paragraph.
pub const SUMMARY_GENRES: usize = 3;

/// A category's title count in the latest year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: u32,
}

/// Facts behind the recommendation text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicSummary {
    pub catalog_name: String,
    /// Most recent year of the volume pivot.
    pub latest_year: Option<i32>,
    /// Category with the most titles in `latest_year`.
    pub dominant: Option<CategoryShare>,
    /// Runner-up category in `latest_year`.
    pub secondary: Option<CategoryShare>,
    /// `dominant / secondary`, rounded to one decimal. `None` when the
    /// secondary count is zero or there is no second category.
    pub ratio: Option<f64>,
    /// Up to [`SUMMARY_GENRES`] leading genres.
    pub top_genres: Vec<String>,
    pub top_country: Option<String>,
    pub second_country: Option<String>,
}

impl StrategicSummary {
    /// Derive the summary facts.
    pub fn from_products(
        volume: &CategoryVolume,
        genres: &TokenRanking,
        countries: &TokenRanking,
        catalog_name: &str,
    ) -> Self {
        let latest = volume.latest();

        let (dominant, secondary) = match latest {
            Some(row) => {
                let mut ranked: Vec<CategoryShare> = volume
                    .categories
                    .iter()
                    .zip(row.counts.iter())
                    .filter(|(category, _)| category.as_str() != UNKNOWN_CATEGORY)
                    .map(|(category, &count)| CategoryShare {
                        category: category.clone(),
                        count,
                    })
                    .collect();
                // Stable: equal counts keep category order
                ranked.sort_by(|a, b| b.count.cmp(&a.count));
                let mut ranked = ranked.into_iter();
                (ranked.next(), ranked.next())
            }
            None => (None, None),
        };

        let ratio = match (&dominant, &secondary) {
            (Some(d), Some(s)) if s.count > 0 => {
                Some((f64::from(d.count) / f64::from(s.count) * 10.0).round() / 10.0)
            }
            _ => None,
        };

        Self {
            catalog_name: catalog_name.to_string(),
            latest_year: latest.map(|row| row.year),
            dominant,
            secondary,
            ratio,
            top_genres: genres.leading(SUMMARY_GENRES),
            top_country: countries.token_at(0).map(str::to_string),
            second_country: countries.token_at(1).map(str::to_string),
        }
    }

    /// Ratio as printed: one decimal, or "N/A".
    pub fn ratio_display(&self) -> String {
        match self.ratio {
            Some(ratio) => format!("{ratio:.1}"),
            None => "N/A".to_string(),
        }
    }

    /// The full recommendation text, one line per entry, without a
    /// trailing newline.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = vec![RULE.to_string(), HEADING.to_string(), RULE.to_string()];
        self.volume_lines(&mut lines);
        self.genre_lines(&mut lines);
        self.country_lines(&mut lines);
        lines.push(RULE.to_string());
        lines.join("\n")
    }

    fn volume_lines(&self, lines: &mut Vec<String>) {
        let as_of = self
            .latest_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!("🎬 Content Volume Trend (As of {as_of}):"));

        let Some(dominant) = &self.dominant else {
            lines.push("  - No titles were added in the analysed period.".to_string());
            return;
        };
        let dominant_name = pluralize(&dominant.category);
        lines.push(format!(
            "  - {}'s content acquisition heavily favors {}.",
            self.catalog_name, dominant_name
        ));

        match &self.secondary {
            None => lines.push(format!(
                "  - Only {dominant_name} were added in the last recorded year."
            )),
            Some(secondary) => {
                let secondary_name = pluralize(&secondary.category);
                let ratio = match self.ratio {
                    Some(_) => format!("{}:1", self.ratio_display()),
                    None => format!("N/A (no {secondary_name} recorded)"),
                };
                lines.push(format!(
                    "  - In the last recorded year, {dominant_name} outnumbered {secondary_name} by a ratio of approx. {ratio}."
                ));
            }
        }
    }

    fn genre_lines(&self, lines: &mut Vec<String>) {
        lines.push("🎭 Genre Popularity:".to_string());
        let sentence = match self.top_genres.as_slice() {
            [] => {
                lines.push("  - No genre data available.".to_string());
                return;
            }
            [g1] => format!("  - The overall most dominant genre is {g1}."),
            [g1, g2] => format!("  - The overall most dominant genres are {g1} and {g2}."),
            [g1, g2, g3, ..] => {
                format!("  - The overall most dominant genres are {g1}, {g2}, and {g3}.")
            }
        };
        lines.push(sentence);
        lines.push(format!(
            "  - Recommendation: Given the surge in streaming, focus on high-production {} series to retain subscription loyalty.",
            self.top_genres[0]
        ));
    }

    fn country_lines(&self, lines: &mut Vec<String>) {
        lines.push("🌍 Global Content Strategy:".to_string());
        match &self.top_country {
            Some(top) => {
                lines.push(format!(
                    "  - {top} is the primary content contributor, far surpassing all others."
                ));
                if let Some(second) = &self.second_country {
                    lines.push(format!(
                        "  - {second} represents the most significant international market outside the top spot."
                    ));
                }
            }
            None => lines.push("  - No country data available.".to_string()),
        }
        lines.push(
            "  - Recommendation: Strategically acquire more content from the top international markets and explore content in underrepresented regions to increase global subscriber reach."
                .to_string(),
        );
    }
}

impl fmt::Display for StrategicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TokenCount, YearVolume};
    use pretty_assertions::assert_eq;

    fn ranking(field: &str, tokens: &[(&str, u32)]) -> TokenRanking {
        TokenRanking {
            field: field.to_string(),
            entries: tokens
                .iter()
                .map(|(t, c)| TokenCount {
                    token: t.to_string(),
                    count: *c,
                })
                .collect(),
        }
    }

    fn volume(rows: &[(i32, u32, u32)]) -> CategoryVolume {
        CategoryVolume {
            categories: vec!["Movie".to_string(), "TV Show".to_string()],
            rows: rows
                .iter()
                .map(|&(year, movies, shows)| YearVolume {
                    year,
                    counts: vec![movies, shows],
                })
                .collect(),
        }
    }

    #[test]
    fn test_full_summary_text() {
        let summary = StrategicSummary::from_products(
            &volume(&[(2019, 1, 1), (2020, 3, 2)]),
            &ranking("Genre", &[("Drama", 3), ("Comedy", 2), ("Action", 1)]),
            &ranking("Country", &[("United States", 4), ("India", 2)]),
            "Netflix",
        );

        let expected = "\
==================================================
             STRATEGIC CONTENT RECOMMENDATIONS
==================================================
🎬 Content Volume Trend (As of 2020):
  - Netflix's content acquisition heavily favors Movies.
  - In the last recorded year, Movies outnumbered TV Shows by a ratio of approx. 1.5:1.
🎭 Genre Popularity:
  - The overall most dominant genres are Drama, Comedy, and Action.
  - Recommendation: Given the surge in streaming, focus on high-production Drama series to retain subscription loyalty.
🌍 Global Content Strategy:
  - United States is the primary content contributor, far surpassing all others.
  - India represents the most significant international market outside the top spot.
  - Recommendation: Strategically acquire more content from the top international markets and explore content in underrepresented regions to increase global subscriber reach.
==================================================";

        assert_eq!(summary.render(), expected);
        assert_eq!(summary.to_string(), expected);
    }

    #[test]
    fn test_dominant_category_can_be_tv_shows() {
        let summary = StrategicSummary::from_products(
            &volume(&[(2021, 2, 5)]),
            &ranking("Genre", &[]),
            &ranking("Country", &[]),
            "Netflix",
        );

        assert_eq!(summary.dominant.as_ref().map(|d| d.category.as_str()), Some("TV Show"));
        assert_eq!(summary.ratio, Some(2.5));
        assert!(summary.render().contains(
            "  - In the last recorded year, TV Shows outnumbered Movies by a ratio of approx. 2.5:1."
        ));
    }

    #[test]
    fn test_tie_goes_to_first_category() {
        let summary = StrategicSummary::from_products(
            &volume(&[(2021, 4, 4)]),
            &ranking("Genre", &[]),
            &ranking("Country", &[]),
            "Netflix",
        );
        assert_eq!(summary.dominant.as_ref().map(|d| d.category.as_str()), Some("Movie"));
        assert_eq!(summary.ratio_display(), "1.0");
    }

    #[test]
    fn test_zero_secondary_gives_na_ratio() {
        let summary = StrategicSummary::from_products(
            &volume(&[(2021, 4, 0)]),
            &ranking("Genre", &[("Drama", 1)]),
            &ranking("Country", &[("India", 1)]),
            "Netflix",
        );

        assert_eq!(summary.ratio, None);
        assert_eq!(summary.ratio_display(), "N/A");
        assert!(summary.render().contains(
            "  - In the last recorded year, Movies outnumbered TV Shows by a ratio of approx. N/A (no TV Shows recorded)."
        ));
    }

    #[test]
    fn test_unknown_category_is_not_ranked() {
        let volume = CategoryVolume {
            categories: vec!["Movie".to_string(), "TV Show".to_string(), "Unknown".to_string()],
            rows: vec![YearVolume { year: 2021, counts: vec![3, 0, 2] }],
        };
        let summary = StrategicSummary::from_products(
            &volume,
            &ranking("Genre", &[("Drama", 1)]),
            &ranking("Country", &[("India", 1)]),
            "Netflix",
        );

        assert_eq!(summary.dominant.as_ref().map(|d| d.category.as_str()), Some("Movie"));
        assert_eq!(summary.secondary.as_ref().map(|s| s.category.as_str()), Some("TV Show"));
        assert_eq!(summary.ratio_display(), "N/A");
        assert!(summary.render().contains(
            "  - In the last recorded year, Movies outnumbered TV Shows by a ratio of approx. N/A (no TV Shows recorded)."
        ));
    }

    #[test]
    fn test_single_category() {
        let volume = CategoryVolume {
            categories: vec!["Movie".to_string()],
            rows: vec![YearVolume { year: 2020, counts: vec![7] }],
        };
        let summary = StrategicSummary::from_products(
            &volume,
            &ranking("Genre", &[]),
            &ranking("Country", &[]),
            "Netflix",
        );

        assert_eq!(summary.secondary, None);
        assert!(summary.render().contains("  - Only Movies were added in the last recorded year."));
    }

    #[test]
    fn test_empty_products_degrade() {
        let summary = StrategicSummary::from_products(
            &volume(&[]),
            &ranking("Genre", &[]),
            &ranking("Country", &[]),
            "Netflix",
        );

        let expected = "\
==================================================
             STRATEGIC CONTENT RECOMMENDATIONS
==================================================
🎬 Content Volume Trend (As of N/A):
  - No titles were added in the analysed period.
🎭 Genre Popularity:
  - No genre data available.
🌍 Global Content Strategy:
  - No country data available.
  - Recommendation: Strategically acquire more content from the top international markets and explore content in underrepresented regions to increase global subscriber reach.
==================================================";
        assert_eq!(summary.render(), expected);
    }

    #[test]
    fn test_short_genre_and_country_lists() {
        let one = StrategicSummary::from_products(
            &volume(&[(2020, 1, 1)]),
            &ranking("Genre", &[("Drama", 2)]),
            &ranking("Country", &[("India", 2)]),
            "Netflix",
        );
        let text = one.render();
        assert!(text.contains("  - The overall most dominant genre is Drama."));
        assert!(text.contains("focus on high-production Drama series"));
        assert!(text.contains("  - India is the primary content contributor"));
        assert!(!text.contains("most significant international market"));

        let two = StrategicSummary::from_products(
            &volume(&[(2020, 1, 1)]),
            &ranking("Genre", &[("Drama", 2), ("Comedy", 1)]),
            &ranking("Country", &[]),
            "Netflix",
        );
        assert!(two.render().contains("  - The overall most dominant genres are Drama and Comedy."));
    }

    #[test]
    fn test_catalog_name_is_used() {
        let summary = StrategicSummary::from_products(
            &volume(&[(2020, 2, 1)]),
            &ranking("Genre", &[]),
            &ranking("Country", &[]),
            "Hulu",
        );
        assert!(summary.render().contains("  - Hulu's content acquisition heavily favors Movies."));
    }

    #[test]
    fn test_deterministic() {
        let build = || {
            StrategicSummary::from_products(
                &volume(&[(2020, 3, 2)]),
                &ranking("Genre", &[("Drama", 3)]),
                &ranking("Country", &[("India", 2), ("Japan", 2)]),
                "Netflix",
            )
            .render()
        };
        assert_eq!(build(), build());
    }
}
