//! Drawing figures with plotters.
//!
//! Each figure is written to one SVG file. Grid cells without a panel are
//! left blank.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::error::{PlotError, Result};
use crate::figure::{BoxGroup, Figure, Palette, Panel, PanelKind};

const CELL_WIDTH: u32 = 800;
const CELL_HEIGHT: u32 = 500;
const TITLE_HEIGHT: u32 = 60;

/// Pixel size of the drawn figure.
pub fn figure_size(figure: &Figure) -> (u32, u32) {
    let cols = figure.cols.max(1) as u32;
    let rows = figure.rows.max(1) as u32;
    (cols * CELL_WIDTH, rows * CELL_HEIGHT + TITLE_HEIGHT)
}

/// Render `figure` as an SVG file at `path`.
pub fn render_svg(figure: &Figure, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, figure_size(figure)).into_drawing_area();
    draw_figure(&root, figure).map_err(|err| PlotError::Draw {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    info!(path = %path.display(), panels = figure.panels.len(), "figure written");
    Ok(())
}

/// Draw `figure` onto any plotters backend.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;
    let body = root.titled(&figure.title, ("sans-serif", 28))?;

    if figure.cell_count() > 0 {
        let cells = body.split_evenly((figure.rows, figure.cols));
        for panel in &figure.panels {
            match cells.get(panel.cell) {
                Some(area) => draw_panel(area, panel)?,
                None => warn!(cell = panel.cell, title = %panel.title, "panel outside figure grid"),
            }
        }
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    match &panel.kind {
        PanelKind::Counts {
            categories,
            counts,
            palette,
        } => draw_counts(area, panel, categories, counts, *palette),
        PanelKind::Scatter { points, annotation } => {
            draw_scatter(area, panel, points, annotation.as_deref())
        }
        PanelKind::BoxPlot { groups } => draw_boxes(area, panel, groups),
    }
}

fn draw_counts<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    categories: &[String],
    counts: &[usize],
    palette: Palette,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    if categories.is_empty() {
        return draw_placeholder(area, panel);
    }
    let n = categories.len();
    let max = counts.iter().copied().max().unwrap_or(0);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(110)
        .y_label_area_size(50)
        .build_cartesian_2d((0..n).into_segmented(), 0..max + max / 10 + 1)?;

    let label_for = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            categories.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&label_for)
        .x_label_style(
            ("sans-serif", 12)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let (r, g, b) = palette.color(i, n);
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), count)],
            RGBColor(r, g, b).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;
    Ok(())
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    padded(min, max)
}

fn draw_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    points: &[(f64, f64)],
    annotation: Option<&str>,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (x_min, x_max) = bounds(points.iter().map(|(x, _)| *x));
    let (y_min, y_max) = bounds(points.iter().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.mix(0.7).filled())),
    )?;

    if let Some(text) = annotation {
        let anchor = (
            x_min + (x_max - x_min) * 0.01,
            y_max - (y_max - y_min) * 0.02,
        );
        chart.draw_series(std::iter::once(Text::new(
            text.to_string(),
            anchor,
            ("sans-serif", 16),
        )))?;
    }
    Ok(())
}

fn draw_boxes<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    groups: &[BoxGroup],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let groups: Vec<&BoxGroup> = groups
        .iter()
        .filter(|group| !group.values.is_empty())
        .collect();
    if groups.is_empty() {
        return draw_placeholder(area, panel);
    }

    let (lo, hi) = bounds(groups.iter().flat_map(|group| group.values.iter().copied()));
    let quartiles: Vec<Quartiles> = groups
        .iter()
        .map(|group| Quartiles::new(&group.values))
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0..groups.len()).into_segmented(), lo as f32..hi as f32)?;

    let label_for = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => groups
            .get(*i)
            .map(|group| group.label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups.len())
        .x_label_formatter(&label_for)
        .x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .draw()?;

    let count = quartiles.len();
    chart.draw_series(quartiles.iter().enumerate().map(|(i, q)| {
        let (r, g, b) = Palette::Viridis.color(i, count);
        Boxplot::new_vertical(SegmentValue::CenterOf(i), q)
            .width(40)
            .whisker_width(0.5)
            .style(RGBColor(r, g, b))
    }))?;
    Ok(())
}

fn draw_placeholder<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let inner = area.titled(&panel.title, ("sans-serif", 20))?;
    let (width, height) = inner.dim_in_pixel();
    inner.draw(&Text::new(
        "No data",
        (width as i32 / 2 - 30, height as i32 / 2),
        ("sans-serif", 16),
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_scales_with_grid() {
        let figure = Figure::new("grid", 2, 2);
        assert_eq!(figure_size(&figure), (1600, 1060));
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        assert_eq!(padded(5.0, 5.0), (4.0, 6.0));
        assert_eq!(bounds(std::iter::empty()), (0.0, 1.0));
        let (lo, hi) = bounds([10.0, 20.0].into_iter());
        assert!((lo - 9.5).abs() < 1e-12 && (hi - 20.5).abs() < 1e-12);
    }
}
