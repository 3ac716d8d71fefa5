//! Horizontal bar chart of a token ranking.

use super::{CAPTION_FONT, CHART_SIZE, LABEL_FONT, padded_max};
use crate::error::{AnalysisError, Result};
use crate::types::TokenRanking;
use crate::utils::truncate_label;
use plotters::prelude::*;
use std::path::Path;

const MAX_LABEL_CHARS: usize = 24;

/// Render `ranking` with the most frequent token as the top bar.
///
/// `colors` is cycled over the bars in rank order.
pub fn render_ranking_bars(
    ranking: &TokenRanking,
    path: &Path,
    title: &str,
    y_desc: &str,
    colors: &[RGBColor],
) -> Result<()> {
    if ranking.is_empty() {
        return Err(AnalysisError::ChartRenderFailed(format!(
            "no {} counts to plot",
            ranking.field
        )));
    }
    if colors.is_empty() {
        return Err(AnalysisError::ChartRenderFailed(
            "empty bar palette".to_string(),
        ));
    }

    let n = ranking.len();
    let max_count = ranking.entries.iter().map(|e| e.count).max().unwrap_or(0);
    let x_max = f64::from(padded_max(max_count));

    // Segment i holds rank n - 1 - i so that rank 0 is drawn at the top
    let labels: Vec<String> = ranking
        .entries
        .iter()
        .rev()
        .map(|e| truncate_label(&e.token, MAX_LABEL_CHARS))
        .collect();

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(190)
        .build_cartesian_2d(0.0..x_max, (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Number of Titles")
        .y_desc(y_desc)
        .axis_desc_style(LABEL_FONT)
        .draw()?;

    for (rank, entry) in ranking.entries.iter().enumerate() {
        let segment = n - 1 - rank;
        let color = colors[rank % colors.len()];
        let count = f64::from(entry.count);

        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(segment)),
                (count, SegmentValue::Exact(segment + 1)),
            ],
            color.filled(),
        );
        bar.set_margin(4, 4, 0, 0);
        chart.draw_series(std::iter::once(bar))?;

        chart.draw_series(std::iter::once(Text::new(
            entry.count.to_string(),
            (count + x_max * 0.01, SegmentValue::CenterOf(segment)),
            ("sans-serif", 12).into_font().color(&BLACK),
        )))?;
    }

    root.present()?;
    Ok(())
}
