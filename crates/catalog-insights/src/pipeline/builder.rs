//! The analysis runner and its builder.

use crate::analysis::{category_volume_by_year, genre_trend, top_tokens};
use crate::charts::ChartRenderer;
use crate::cleaner::CatalogCleaner;
use crate::config::AnalysisConfig;
use crate::error::{Result, ResultExt};
use crate::loader::load_catalog;
use crate::pipeline::progress::{
    AnalysisStage, ClosureProgressReporter, ProgressReporter, ProgressUpdate,
};
use crate::reporting::StrategicSummary;
use crate::types::{AnalysisResult, COUNTRY_COL, GENRE_COL};
use polars::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// One configured analysis: load, clean, aggregate, chart, summarize.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_insights::{Analysis, AnalysisConfig};
///
/// let result = Analysis::builder()
///     .config(AnalysisConfig::builder().input_path("catalog.csv").build()?)
///     .on_progress(|update| println!("{}", update.message))
///     .build()?
///     .run()?;
///
/// println!("{}", result.summary);
/// ```
pub struct Analysis {
    config: AnalysisConfig,
    progress_reporter: Option<Arc<dyn ProgressReporter>>,
    cleaner: CatalogCleaner,
    charts: ChartRenderer,
}

impl Analysis {
    pub fn builder() -> AnalysisBuilder {
        AnalysisBuilder::default()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Load the configured input file and analyse it.
    pub fn run(&self) -> Result<AnalysisResult> {
        let start_time = Instant::now();
        self.finish(self.load().and_then(|df| self.analyze_internal(df, start_time)))
    }

    /// Analyse an already loaded raw frame.
    pub fn analyze(&self, df: DataFrame) -> Result<AnalysisResult> {
        let start_time = Instant::now();
        self.finish(self.analyze_internal(df, start_time))
    }

    fn finish(&self, result: Result<AnalysisResult>) -> Result<AnalysisResult> {
        match result {
            Ok(result) => {
                self.report_progress(ProgressUpdate::complete(format!(
                    "Analysis completed in {}ms",
                    result.duration_ms
                )));
                Ok(result)
            }
            Err(e) => {
                self.report_progress(ProgressUpdate::failed(e.to_string()));
                error!("Analysis error: {}", e);
                Err(e)
            }
        }
    }

    fn report_progress(&self, update: ProgressUpdate) {
        if let Some(reporter) = &self.progress_reporter {
            reporter.report(update);
        }
    }

    fn load(&self) -> Result<DataFrame> {
        let path = &self.config.input_path;
        self.report_progress(ProgressUpdate::new(
            AnalysisStage::Loading,
            0.0,
            format!("Loading {}...", path.display()),
        ));
        info!("Step 1: Loading {}", path.display());

        let df = load_catalog(path)?;

        self.report_progress(ProgressUpdate::new(
            AnalysisStage::Loading,
            1.0,
            format!("Loaded {} rows", df.height()),
        ));
        Ok(df)
    }

    fn analyze_internal(&self, df: DataFrame, start_time: Instant) -> Result<AnalysisResult> {
        let config = &self.config;

        // Step 2: Cleaning
        self.report_progress(ProgressUpdate::new(
            AnalysisStage::Cleaning,
            0.0,
            "Cleaning dataset...",
        ));
        info!("Step 2: Cleaning {} rows", df.height());
        let (df, cleaning) = self.cleaner.clean(df).context("Cleaning catalog")?;
        self.report_progress(ProgressUpdate::new(
            AnalysisStage::Cleaning,
            1.0,
            format!(
                "{} rows retained, {} dropped",
                cleaning.rows_retained,
                cleaning.rows_dropped()
            ),
        ));
        if cleaning.rows_retained == 0 {
            warn!("No rows survived cleaning; every product will be empty");
        }

        // Step 3: Aggregations
        info!("Step 3: Aggregating");
        self.report_progress(ProgressUpdate::with_sub_stage(
            AnalysisStage::Aggregating,
            "Content volume",
            0.0,
            "Counting titles per year and category...",
        ));
        let volume = category_volume_by_year(&df, config.volume_since)?;

        self.report_progress(ProgressUpdate::with_sub_stage(
            AnalysisStage::Aggregating,
            "Genre frequency",
            0.25,
            "Ranking genres...",
        ));
        let top_genres = top_tokens(&df, GENRE_COL, config.separator, config.top_n)?;

        self.report_progress(ProgressUpdate::with_sub_stage(
            AnalysisStage::Aggregating,
            "Genre trend",
            0.5,
            "Following the leading genres per year...",
        ));
        let followed = top_genres.leading(config.trend_genres);
        let trend = genre_trend(&df, &followed, config.separator, config.trend_since)?;

        self.report_progress(ProgressUpdate::with_sub_stage(
            AnalysisStage::Aggregating,
            "Country frequency",
            0.75,
            "Ranking countries...",
        ));
        let top_countries = top_tokens(&df, COUNTRY_COL, config.separator, config.top_n)?;

        info!(
            "Aggregated {} years, {} genres, {} countries",
            volume.rows.len(),
            top_genres.len(),
            top_countries.len()
        );

        // Step 4: Charts
        let mut charts = Vec::new();
        let mut chart_failures = Vec::new();
        if config.render_charts {
            self.report_progress(ProgressUpdate::new(
                AnalysisStage::Rendering,
                0.0,
                format!("Rendering charts into {}...", self.charts.output_dir().display()),
            ));
            info!("Step 4: Rendering charts");
            match self
                .charts
                .render_all(&volume, &top_genres, &trend, &top_countries)
            {
                Ok(output) => {
                    charts = output.rendered;
                    chart_failures = output.failures;
                }
                Err(e) => {
                    warn!("Chart rendering skipped: {}", e);
                    chart_failures.push(e.to_string());
                }
            }
            self.report_progress(ProgressUpdate::new(
                AnalysisStage::Rendering,
                1.0,
                format!("{} charts written", charts.len()),
            ));
        } else {
            info!("Step 4: Chart rendering disabled");
        }

        // Step 5: Summary
        self.report_progress(ProgressUpdate::new(
            AnalysisStage::Summarizing,
            0.0,
            "Deriving recommendations...",
        ));
        info!("Step 5: Summarizing");
        let summary = StrategicSummary::from_products(
            &volume,
            &top_genres,
            &top_countries,
            &config.catalog_name,
        );

        let duration_ms = start_time.elapsed().as_millis() as u64;
        info!("Analysis finished in {}ms", duration_ms);

        Ok(AnalysisResult {
            cleaning,
            volume,
            top_genres,
            genre_trend: trend,
            top_countries,
            summary,
            charts,
            chart_failures,
            duration_ms,
        })
    }
}

/// Builder for [`Analysis`].
#[derive(Default)]
pub struct AnalysisBuilder {
    config: Option<AnalysisConfig>,
    progress_reporter: Option<Arc<dyn ProgressReporter>>,
}

impl AnalysisBuilder {
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a custom progress reporter.
    pub fn progress_reporter(mut self, reporter: Arc<dyn ProgressReporter>) -> Self {
        self.progress_reporter = Some(reporter);
        self
    }

    /// Set a progress callback closure.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ProgressUpdate) + Send + Sync + 'static,
    {
        self.progress_reporter = Some(Arc::new(ClosureProgressReporter::new(callback)));
        self
    }

    /// Validate the configuration and build the analysis.
    pub fn build(self) -> Result<Analysis> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let charts = ChartRenderer::new(config.output_dir.clone(), config.catalog_name.clone());
        Ok(Analysis {
            config,
            progress_reporter: self.progress_reporter,
            cleaner: CatalogCleaner,
            charts,
        })
    }
}
