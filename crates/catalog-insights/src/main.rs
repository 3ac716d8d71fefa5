//! CLI entry point for the catalog analysis.

use anyhow::{Result, anyhow};
use catalog_insights::{Analysis, AnalysisConfig, AnalysisResult, ReportGenerator};
use catalog_insights::config::DEFAULT_INPUT_PATH;
use clap::Parser;
use std::path::Path;
use tracing::{debug, error, info, warn};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory analysis of a streaming catalog export",
    long_about = "Loads a catalog CSV, cleans it, charts content volume, genres and \
                  countries, and prints strategic content recommendations.\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  RUST_LOG              Overrides the log filter\n\n\
                  EXAMPLES:\n  \
                  # Default dataset, charts into ./outputs\n  \
                  catalog-insights\n\n  \
                  # Custom input and output\n  \
                  catalog-insights -i data/catalog.csv -o results/\n\n  \
                  # Machine-readable output\n  \
                  catalog-insights -i data/catalog.csv --json --no-charts"
)]
struct Args {
    /// Path to the catalog CSV
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: String,

    /// Output directory for charts, reports and tables
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Number of genres and countries to rank
    #[arg(long, default_value = "10")]
    top_n: usize,

    /// Number of leading genres followed year by year
    #[arg(long, default_value = "3")]
    trend_genres: usize,

    /// First year of the content volume chart
    #[arg(long, default_value = "2010")]
    volume_since: i32,

    /// First year of the genre trend chart
    #[arg(long, default_value = "2015")]
    trend_since: i32,

    /// Catalog name used in chart titles and the summary
    #[arg(long, default_value = "Netflix")]
    catalog_name: String,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,

    /// Output JSON to stdout instead of the text summary
    ///
    /// Disables all logs; only the final JSON report is printed.
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Write the aggregated tables as CSV files to the output directory
    #[arg(long)]
    export_tables: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber.
///
/// With `json_output` nothing is initialized so stdout carries only JSON.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = AnalysisConfig::builder()
        .input_path(&args.input)
        .output_dir(&args.output)
        .top_n(args.top_n)
        .trend_genres(args.trend_genres)
        .volume_since(args.volume_since)
        .trend_since(args.trend_since)
        .catalog_name(&args.catalog_name)
        .render_charts(!args.no_charts)
        .build()?;

    let analysis = Analysis::builder()
        .config(config)
        .on_progress(|update| {
            debug!(
                "[{:>3.0}%] {}: {}",
                update.progress * 100.0,
                update.stage.display_name(),
                update.message
            );
        })
        .build()?;

    match analysis.run() {
        Ok(result) => handle_output(&result, &args),
        Err(e) => {
            error!("Analysis failed: {}", e);
            Err(anyhow!("Analysis failed: {}", e))
        }
    }
}

/// Emit results according to the CLI flags.
///
/// - Default: print the recommendation text to stdout
/// - `--json`: print the full report as JSON to stdout only
/// - `--emit-report`: also write the JSON report to a file
/// - `--export-tables`: also write the aggregated tables as CSV
fn handle_output(result: &AnalysisResult, args: &Args) -> Result<()> {
    let report = ReportGenerator::build_report(Path::new(&args.input), result);
    let generator = ReportGenerator::new(&args.output);

    if args.export_tables {
        let tables = generator.export_tables(result)?;
        info!("Exported {} tables to {}", tables.len(), args.output);
    }

    if args.emit_report {
        let report_path = generator.write_report_to_file(&report, &extract_file_stem(&args.input))?;
        info!("Report written to: {}", report_path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for chart in &result.charts {
        info!("Chart: {}", chart.display());
    }
    for failure in &result.chart_failures {
        warn!("Chart not rendered: {}", failure);
    }
    info!(
        "{} of {} rows analysed in {}ms",
        result.cleaning.rows_retained, result.cleaning.rows_loaded, result.duration_ms
    );

    println!("\n{}", result.summary.render());
    Ok(())
}

/// File name without extension, used to name the report.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog")
        .to_string()
}
