//! Configuration types for the catalog analysis.
//!
//! Every knob the analysis used to hardcode (input path, cut-off years,
//! top-N sizes) lives here, with the historical values as defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input file name.
pub const DEFAULT_INPUT_PATH: &str = "Netflix Dataset.csv";

/// Configuration for an analysis run.
///
/// Use [`AnalysisConfig::builder()`] to create a validated configuration.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_insights::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .input_path("data/catalog.csv")
///     .top_n(15)
///     .render_charts(false)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path of the CSV to analyse.
    /// Default: "Netflix Dataset.csv"
    pub input_path: PathBuf,

    /// Directory for charts, reports and exported tables.
    /// Default: "./outputs"
    pub output_dir: PathBuf,

    /// Size of the ranked genre and country tables.
    /// Default: 10
    pub top_n: usize,

    /// How many of the top genres get a yearly trend series.
    /// Must not exceed `top_n`.
    /// Default: 3
    pub trend_genres: usize,

    /// First year shown in the content volume pivot.
    /// Default: 2010
    pub volume_since: i32,

    /// First year shown in the genre trend.
    /// Default: 2015
    pub trend_since: i32,

    /// Separator of the multi-valued Genre and Country fields.
    /// Default: ','
    pub separator: char,

    /// Name used for the catalog in the summary text.
    /// Default: "Netflix"
    pub catalog_name: String,

    /// Whether to render the SVG charts.
    /// Default: true
    pub render_charts: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from("./outputs"),
            top_n: 10,
            trend_genres: 3,
            volume_since: 2010,
            trend_since: 2015,
            separator: ',',
            catalog_name: "Netflix".to_string(),
            render_charts: true,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.top_n == 0 {
            return Err(ConfigValidationError::InvalidTopN(self.top_n));
        }

        if self.trend_genres == 0 || self.trend_genres > self.top_n {
            return Err(ConfigValidationError::InvalidTrendGenres {
                trend_genres: self.trend_genres,
                top_n: self.top_n,
            });
        }

        if self.separator.is_whitespace() {
            return Err(ConfigValidationError::InvalidSeparator(self.separator));
        }

        if self.catalog_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCatalogName);
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid top-N size: {0} (must be at least 1)")]
    InvalidTopN(usize),

    #[error("Invalid trend genre count: {trend_genres} (must be between 1 and top-N = {top_n})")]
    InvalidTrendGenres { trend_genres: usize, top_n: usize },

    #[error("Invalid token separator: {0:?} (whitespace is trimmed from tokens)")]
    InvalidSeparator(char),

    #[error("Catalog name must not be empty")]
    EmptyCatalogName,
}

impl From<ConfigValidationError> for crate::error::AnalysisError {
    fn from(err: ConfigValidationError) -> Self {
        crate::error::AnalysisError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    top_n: Option<usize>,
    trend_genres: Option<usize>,
    volume_since: Option<i32>,
    trend_since: Option<i32>,
    separator: Option<char>,
    catalog_name: Option<String>,
    render_charts: Option<bool>,
}

impl AnalysisConfigBuilder {
    /// Set the CSV to analyse.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the output directory for charts and reports.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the size of the ranked genre/country tables.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    /// Set how many top genres get a trend series.
    pub fn trend_genres(mut self, n: usize) -> Self {
        self.trend_genres = Some(n);
        self
    }

    /// Set the first year of the content volume pivot.
    pub fn volume_since(mut self, year: i32) -> Self {
        self.volume_since = Some(year);
        self
    }

    /// Set the first year of the genre trend.
    pub fn trend_since(mut self, year: i32) -> Self {
        self.trend_since = Some(year);
        self
    }

    /// Set the separator of multi-valued fields.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Set the catalog name used in the summary.
    pub fn catalog_name(mut self, name: impl Into<String>) -> Self {
        self.catalog_name = Some(name.into());
        self
    }

    /// Enable or disable chart rendering.
    pub fn render_charts(mut self, render: bool) -> Self {
        self.render_charts = Some(render);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            input_path: self.input_path.unwrap_or(defaults.input_path),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            top_n: self.top_n.unwrap_or(defaults.top_n),
            trend_genres: self.trend_genres.unwrap_or(defaults.trend_genres),
            volume_since: self.volume_since.unwrap_or(defaults.volume_since),
            trend_since: self.trend_since.unwrap_or(defaults.trend_since),
            separator: self.separator.unwrap_or(defaults.separator),
            catalog_name: self.catalog_name.unwrap_or(defaults.catalog_name),
            render_charts: self.render_charts.unwrap_or(defaults.render_charts),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.input_path, PathBuf::from("Netflix Dataset.csv"));
        assert_eq!(config.top_n, 10);
        assert_eq!(config.trend_genres, 3);
        assert_eq!(config.volume_since, 2010);
        assert_eq!(config.trend_since, 2015);
        assert_eq!(config.separator, ',');
        assert!(config.render_charts);
    }

    #[test]
    fn test_builder_defaults() {
        let config = AnalysisConfig::builder().build().unwrap();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.catalog_name, "Netflix");
    }

    #[test]
    fn test_builder_custom_values() {
        let config = AnalysisConfig::builder()
            .input_path("data/catalog.csv")
            .output_dir("reports")
            .top_n(5)
            .trend_genres(2)
            .volume_since(2000)
            .trend_since(2018)
            .separator(';')
            .catalog_name("Acme Stream")
            .render_charts(false)
            .build()
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("data/catalog.csv"));
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.top_n, 5);
        assert_eq!(config.trend_genres, 2);
        assert_eq!(config.volume_since, 2000);
        assert_eq!(config.trend_since, 2018);
        assert_eq!(config.separator, ';');
        assert_eq!(config.catalog_name, "Acme Stream");
        assert!(!config.render_charts);
    }

    #[test]
    fn test_validation_zero_top_n() {
        let result = AnalysisConfig::builder().top_n(0).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidTopN(0)
        ));
    }

    #[test]
    fn test_validation_trend_genres_exceeds_top_n() {
        let result = AnalysisConfig::builder().top_n(2).trend_genres(3).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidTrendGenres { trend_genres: 3, top_n: 2 }
        ));
    }

    #[test]
    fn test_validation_whitespace_separator() {
        let result = AnalysisConfig::builder().separator(' ').build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::InvalidSeparator(' ')
        ));
    }

    #[test]
    fn test_validation_error_converts_to_analysis_error() {
        let err: crate::error::AnalysisError = ConfigValidationError::EmptyCatalogName.into();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "input_path": "titles.csv",
            "output_dir": "out",
            "top_n": 8,
            "trend_genres": 3,
            "volume_since": 2012,
            "trend_since": 2016,
            "separator": "|",
            "catalog_name": "Catalog",
            "render_charts": false
        }"#;

        let config: AnalysisConfig = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(config.input_path, PathBuf::from("titles.csv"));
        assert_eq!(config.top_n, 8);
        assert_eq!(config.separator, '|');
        assert!(!config.render_charts);
        assert!(config.validate().is_ok());
    }
}
