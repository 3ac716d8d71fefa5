//! SVG chart rendering for the aggregated products.
//!
//! Four charts are written to the output directory:
//! - `content_volume.svg`: stacked area of titles added per year and category
//! - `top_genres.svg`: horizontal bars of the leading genres
//! - `genre_trend.svg`: yearly lines for the followed genres
//! - `top_countries.svg`: horizontal bars of the leading countries
//!
//! A chart that cannot be drawn is reported and skipped; the others are
//! still attempted.

mod area;
mod bar;
mod line;

pub use area::render_volume_area;
pub use bar::render_ranking_bars;
pub use line::render_genre_trend;

use crate::error::Result;
use crate::types::{CategoryVolume, GenreTrend, TokenRanking};
use crate::utils::pluralize;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const VOLUME_CHART_FILE: &str = "content_volume.svg";
pub const GENRES_CHART_FILE: &str = "top_genres.svg";
pub const TREND_CHART_FILE: &str = "genre_trend.svg";
pub const COUNTRIES_CHART_FILE: &str = "top_countries.svg";

pub(crate) const CHART_SIZE: (u32, u32) = (1200, 700);
pub(crate) const CAPTION_FONT: (&str, u32) = ("sans-serif", 26);
pub(crate) const LABEL_FONT: (&str, u32) = ("sans-serif", 16);

/// Brand reds used for the category bands.
pub(crate) const CATEGORY_COLORS: [RGBColor; 4] = [
    RGBColor(229, 9, 20),   // #E50914
    RGBColor(184, 29, 36),  // #B81D24
    RGBColor(86, 77, 77),   // #564D4D
    RGBColor(245, 197, 24), // #F5C518
];

/// Distinct colors for trend lines.
pub(crate) const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

pub(crate) fn category_color(idx: usize) -> RGBColor {
    CATEGORY_COLORS[idx % CATEGORY_COLORS.len()]
}

/// Axis upper bound with roughly 10% headroom, never zero.
pub(crate) fn padded_max(max: u32) -> u32 {
    (max + max / 10).max(max + 1)
}

/// `n` colors evenly interpolated from `from` to `to`.
pub fn gradient(from: RGBColor, to: RGBColor, n: usize) -> Vec<RGBColor> {
    let lerp = |a: u8, b: u8, t: f64| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
            RGBColor(lerp(from.0, to.0, t), lerp(from.1, to.1, t), lerp(from.2, to.2, t))
        })
        .collect()
}

/// Files written by [`ChartRenderer::render_all`] and the charts that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOutput {
    pub rendered: Vec<PathBuf>,
    /// One "file: reason" entry per chart that could not be drawn.
    pub failures: Vec<String>,
}

/// Renders the four catalog charts into one directory.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output_dir: PathBuf,
    catalog_name: String,
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, catalog_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            catalog_name: catalog_name.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render every chart, collecting failures instead of stopping on them.
    ///
    /// Recoverable drawing errors are collected in [`ChartOutput::failures`].
    /// Failing to create the output directory, or any other error, is
    /// returned.
    pub fn render_all(
        &self,
        volume: &CategoryVolume,
        genres: &TokenRanking,
        trend: &GenreTrend,
        countries: &TokenRanking,
    ) -> Result<ChartOutput> {
        fs::create_dir_all(&self.output_dir)?;

        let mut output = ChartOutput::default();

        let path = self.output_dir.join(VOLUME_CHART_FILE);
        let result = render_volume_area(
            volume,
            &path,
            &self.volume_title(volume),
            &self.year_axis_desc(),
        );
        Self::record(&mut output, path, result)?;

        let path = self.output_dir.join(GENRES_CHART_FILE);
        let palette = gradient(RGBColor(103, 0, 13), RGBColor(251, 106, 74), genres.len());
        let result = render_ranking_bars(genres, &path, &self.genres_title(genres), "Genre", &palette);
        Self::record(&mut output, path, result)?;

        let path = self.output_dir.join(TREND_CHART_FILE);
        let result = render_genre_trend(trend, &path, &Self::trend_title(trend), &self.year_axis_desc());
        Self::record(&mut output, path, result)?;

        let path = self.output_dir.join(COUNTRIES_CHART_FILE);
        let palette = gradient(RGBColor(53, 17, 68), RGBColor(243, 118, 81), countries.len());
        let result = render_ranking_bars(
            countries,
            &path,
            &self.countries_title(countries),
            "Country",
            &palette,
        );
        Self::record(&mut output, path, result)?;

        info!(
            "Rendered {} charts into {} ({} failed)",
            output.rendered.len(),
            self.output_dir.display(),
            output.failures.len()
        );
        Ok(output)
    }

    fn record(output: &mut ChartOutput, path: PathBuf, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                info!("Chart written to {}", path.display());
                output.rendered.push(path);
            }
            Err(err) if err.is_recoverable() => {
                let err = err.with_context(path.display().to_string());
                warn!("Skipping chart: {}", err);
                output.failures.push(err.to_string());
            }
            Err(err) => return Err(err.with_context(path.display().to_string())),
        }
        Ok(())
    }

    fn year_axis_desc(&self) -> String {
        format!("Year Added to {}", self.catalog_name)
    }

    pub(crate) fn volume_title(&self, volume: &CategoryVolume) -> String {
        let categories: Vec<String> = volume.categories.iter().map(|c| pluralize(c)).collect();
        format!(
            "Content Volume Trend: {} Added Annually",
            categories.join(" vs. ")
        )
    }

    pub(crate) fn genres_title(&self, genres: &TokenRanking) -> String {
        format!(
            "Top {} Most Popular Content Genres on {}",
            genres.len(),
            self.catalog_name
        )
    }

    pub(crate) fn trend_title(trend: &GenreTrend) -> String {
        format!(
            "Annual Trend of Top {} Genres ({})",
            trend.genres.len(),
            trend.genres.join(", ")
        )
    }

    pub(crate) fn countries_title(&self, countries: &TokenRanking) -> String {
        format!(
            "Top {} Contributing Countries to {} Catalog",
            countries.len(),
            self.catalog_name
        )
    }
}
