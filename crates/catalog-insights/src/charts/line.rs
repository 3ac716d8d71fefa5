//! Multi-series line chart for the genre trend.

use super::{CAPTION_FONT, CHART_SIZE, LABEL_FONT, SERIES_COLORS, padded_max};
use crate::error::{AnalysisError, Result};
use crate::types::GenreTrend;
use plotters::prelude::*;
use std::path::Path;

/// Render one line with point markers per followed genre.
pub fn render_genre_trend(trend: &GenreTrend, path: &Path, title: &str, x_desc: &str) -> Result<()> {
    if trend.is_empty() {
        return Err(AnalysisError::ChartRenderFailed(
            "no genre trend points to plot".to_string(),
        ));
    }

    let first_year = trend.points.iter().map(|p| p.year).min().unwrap_or_default();
    let last_year = trend.points.iter().map(|p| p.year).max().unwrap_or(first_year);
    let max_count = trend.points.iter().map(|p| p.count).max().unwrap_or(0);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(first_year..last_year.max(first_year + 1), 0u32..padded_max(max_count))?;

    chart
        .configure_mesh()
        .x_labels((last_year - first_year + 1).max(2) as usize)
        .x_desc(x_desc)
        .y_desc("Number of Titles Added")
        .axis_desc_style(LABEL_FONT)
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    for (idx, genre) in trend.genres.iter().enumerate() {
        let series = trend.series(genre);
        if series.is_empty() {
            continue;
        }
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];

        chart
            .draw_series(LineSeries::new(series.iter().copied(), color.stroke_width(3)))?
            .label(genre.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 14, y)], color.stroke_width(3)));

        chart.draw_series(
            series
                .iter()
                .map(|point| Circle::new(*point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}
