//! JSON report and CSV table output for a finished run.
//!
//! The report is written as `<stem>_report.json`; the tables as one CSV per
//! aggregated product.

use crate::error::{AnalysisError, Result};
use crate::reporting::StrategicSummary;
use crate::types::{
    AnalysisResult, CategoryVolume, CleaningSummary, GenreTrend, TokenRanking, YEAR_ADDED_COL,
};
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

// ============================================================================
// Report Types
// ============================================================================

/// Full record of one run, used for `--json` and `--emit-report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    pub input_file: String,
    pub catalog_name: String,
    pub duration_ms: u64,

    pub cleaning: CleaningSummary,
    pub content_volume: CategoryVolume,
    pub top_genres: TokenRanking,
    pub genre_trend: GenreTrend,
    pub top_countries: TokenRanking,

    pub summary: StrategicSummary,
    /// The rendered recommendation text.
    pub summary_text: String,

    pub charts: Vec<String>,
    pub chart_failures: Vec<String>,
}

// ============================================================================
// Report Generator
// ============================================================================

/// Writes reports and data tables into an output directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Assemble the report for a finished run.
    pub fn build_report(input_file: &Path, result: &AnalysisResult) -> AnalysisReport {
        AnalysisReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.display().to_string(),
            catalog_name: result.summary.catalog_name.clone(),
            duration_ms: result.duration_ms,
            cleaning: result.cleaning.clone(),
            content_volume: result.volume.clone(),
            top_genres: result.top_genres.clone(),
            genre_trend: result.genre_trend.clone(),
            top_countries: result.top_countries.clone(),
            summary: result.summary.clone(),
            summary_text: result.summary.render(),
            charts: result
                .charts
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            chart_failures: result.chart_failures.clone(),
        }
    }

    /// Write `report` as pretty JSON to `<base_name>_report.json`.
    pub fn write_report_to_file(&self, report: &AnalysisReport, base_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self.output_dir.join(format!("{}_report.json", base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());
        Ok(report_path)
    }

    /// Write every data product as a CSV table.
    ///
    /// Produces `content_volume.csv`, `top_genres.csv`, `genre_trend.csv`
    /// and `top_countries.csv`.
    pub fn export_tables(&self, result: &AnalysisResult) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let mut tables = [
            ("content_volume", volume_frame(&result.volume)?),
            ("top_genres", ranking_frame(&result.top_genres)?),
            ("genre_trend", trend_frame(&result.genre_trend)?),
            ("top_countries", ranking_frame(&result.top_countries)?),
        ];

        let mut written = Vec::with_capacity(tables.len());
        for (name, df) in tables.iter_mut() {
            written.push(self.save_table(df, name)?);
        }
        Ok(written)
    }

    fn save_table(&self, df: &mut DataFrame, file_name: &str) -> Result<PathBuf> {
        let output_path = self.output_dir.join(format!("{}.csv", file_name));
        let mut file = File::create(&output_path)?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .with_quote_char(b'"')
            .finish(df)
            .map_err(|e| {
                AnalysisError::ReportGenerationFailed(format!("{}: {}", output_path.display(), e))
            })?;

        info!("Table saved: {}", output_path.display());
        Ok(output_path)
    }
}

// ============================================================================
// Product -> DataFrame
// ============================================================================

/// Wide table: `Year Added` then one column per category.
pub fn volume_frame(volume: &CategoryVolume) -> Result<DataFrame> {
    let years: Vec<i32> = volume.rows.iter().map(|r| r.year).collect();
    let mut columns: Vec<Column> = vec![Column::new(YEAR_ADDED_COL.into(), years)];

    for (idx, category) in volume.categories.iter().enumerate() {
        let counts: Vec<u32> = volume.rows.iter().map(|r| r.counts[idx]).collect();
        columns.push(Column::new(category.as_str().into(), counts));
    }

    Ok(DataFrame::new(columns)?)
}

/// `Item`, `Count` in rank order.
pub fn ranking_frame(ranking: &TokenRanking) -> Result<DataFrame> {
    let items: Vec<&str> = ranking.entries.iter().map(|e| e.token.as_str()).collect();
    let counts: Vec<u32> = ranking.entries.iter().map(|e| e.count).collect();
    Ok(df!("Item" => items, "Count" => counts)?)
}

/// Long table: `Year Added`, `Genre`, `Count`.
pub fn trend_frame(trend: &GenreTrend) -> Result<DataFrame> {
    let years: Vec<i32> = trend.points.iter().map(|p| p.year).collect();
    let genres: Vec<&str> = trend.points.iter().map(|p| p.genre.as_str()).collect();
    let counts: Vec<u32> = trend.points.iter().map(|p| p.count).collect();
    Ok(df!(YEAR_ADDED_COL => years, "Genre" => genres, "Count" => counts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TokenCount, TrendPoint, YearVolume};

    fn result() -> AnalysisResult {
        let volume = CategoryVolume {
            categories: vec!["Movie".to_string(), "TV Show".to_string()],
            rows: vec![YearVolume { year: 2020, counts: vec![3, 2] }],
        };
        let top_genres = TokenRanking {
            field: "Genre".to_string(),
            entries: vec![
                TokenCount { token: "Drama".to_string(), count: 3 },
                TokenCount { token: "Comedy".to_string(), count: 2 },
            ],
        };
        let top_countries = TokenRanking {
            field: "Country".to_string(),
            entries: vec![TokenCount { token: "India, Inc".to_string(), count: 1 }],
        };
        let genre_trend = GenreTrend {
            genres: vec!["Drama".to_string()],
            points: vec![TrendPoint { year: 2020, genre: "Drama".to_string(), count: 3 }],
        };
        let summary = StrategicSummary::from_products(&volume, &top_genres, &top_countries, "Netflix");

        AnalysisResult {
            cleaning: CleaningSummary {
                rows_loaded: 6,
                rows_dropped_invalid_date: 1,
                rows_retained: 5,
                ..Default::default()
            },
            volume,
            top_genres,
            genre_trend,
            top_countries,
            summary,
            charts: vec![PathBuf::from("outputs/content_volume.svg")],
            chart_failures: Vec::new(),
            duration_ms: 12,
        }
    }

    #[test]
    fn test_build_report() {
        let report = ReportGenerator::build_report(Path::new("catalog.csv"), &result());
        assert_eq!(report.input_file, "catalog.csv");
        assert_eq!(report.catalog_name, "Netflix");
        assert_eq!(report.cleaning.rows_retained, 5);
        assert!(report.summary_text.contains("ratio of approx. 1.5:1"));
        assert_eq!(report.charts, vec!["outputs/content_volume.svg".to_string()]);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ReportGenerator::new(dir.path().join("reports"));
        let report = ReportGenerator::build_report(Path::new("catalog.csv"), &result());

        let path = generator.write_report_to_file(&report, "catalog").unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("catalog_report.json"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["top_genres"]["entries"][0]["token"], "Drama");
        assert_eq!(json["summary"]["latest_year"], 2020);
        assert_eq!(json["cleaning"]["rows_dropped_invalid_date"], 1);
    }

    #[test]
    fn test_volume_frame_layout() {
        let df = volume_frame(&result().volume).unwrap();
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["Year Added", "Movie", "TV Show"]);
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn test_export_tables() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ReportGenerator::new(dir.path());

        let written = generator.export_tables(&result()).unwrap();
        assert_eq!(written.len(), 4);
        assert!(written.iter().all(|p| p.exists()));

        let genres = fs::read_to_string(dir.path().join("top_genres.csv")).unwrap();
        let lines: Vec<&str> = genres.lines().collect();
        assert_eq!(lines, vec!["Item,Count", "Drama,3", "Comedy,2"]);

        let countries = fs::read_to_string(dir.path().join("top_countries.csv")).unwrap();
        assert!(countries.contains("\"India, Inc\",1"));

        let volume = fs::read_to_string(dir.path().join("content_volume.csv")).unwrap();
        assert_eq!(volume.lines().next(), Some("Year Added,Movie,TV Show"));
    }
}
