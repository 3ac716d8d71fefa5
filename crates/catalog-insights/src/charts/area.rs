//! Stacked area chart of titles added per year and category.

use super::{CAPTION_FONT, CHART_SIZE, LABEL_FONT, category_color, padded_max};
use crate::error::{AnalysisError, Result};
use crate::types::CategoryVolume;
use plotters::prelude::*;
use std::path::Path;

/// Render `volume` as one stacked band per category.
pub fn render_volume_area(
    volume: &CategoryVolume,
    path: &Path,
    title: &str,
    x_desc: &str,
) -> Result<()> {
    if volume.is_empty() || volume.categories.is_empty() {
        return Err(AnalysisError::ChartRenderFailed(
            "no yearly volume to plot".to_string(),
        ));
    }

    let first_year = volume.rows.first().map(|r| r.year).unwrap_or_default();
    let last_year = volume.rows.last().map(|r| r.year).unwrap_or(first_year);
    let y_max = padded_max(volume.max_total());

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(first_year..last_year.max(first_year + 1), 0u32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(volume.rows.len().max(2))
        .x_desc(x_desc)
        .y_desc("Number of Titles Added")
        .axis_desc_style(LABEL_FONT)
        .draw()?;

    // Cumulative band tops; band i sits on band i - 1
    let mut cumulative: Vec<Vec<(i32, u32)>> = Vec::with_capacity(volume.categories.len());
    for idx in 0..volume.categories.len() {
        let band = volume
            .rows
            .iter()
            .map(|row| (row.year, row.counts[..=idx].iter().sum::<u32>()))
            .collect();
        cumulative.push(band);
    }

    // Paint the tallest band first so lower bands stay visible on top of it
    for (idx, band) in cumulative.into_iter().enumerate().rev() {
        let color = category_color(idx);
        chart
            .draw_series(AreaSeries::new(band, 0u32, color.mix(0.85).filled()).border_style(color))?
            .label(volume.categories[idx].as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
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
