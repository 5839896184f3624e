//! Female-vs-male dot plot ("dumbbell") rendered to **SVG**.
//!
//! One horizontal band per country row, top to bottom in dataset order:
//! - grey vertical grid lines at evenly spaced values
//! - a neutral connector between the two values
//! - female and male markers in their fill colors, outlined with the line colors
//!
//! No text is drawn; titles, axis labels and the footnote belong to the caller.

pub mod adapter;

use crate::models::Dataset;
use crate::style::{FEMALE, GREY_GRIDLINE, MALE, NEUTRAL_LINE, SeriesStyle};
use adapter::{draw_marker, fill_style, line_style};
use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

pub use crate::style::{PLOT_HEIGHT, PLOT_WIDTH};

const MARGIN: u32 = 20;
const MARKER_PX: i32 = 6;
const GRID_LINES: usize = 5;

/// One plottable row.
#[derive(Debug, Clone, PartialEq)]
pub struct GapRow {
    pub code: String,
    pub female: f64,
    pub male: f64,
}

/// Collect rows with numeric values in both series; others are skipped.
pub fn gap_rows(
    dataset: &Dataset,
    code_col: &str,
    female_col: &str,
    male_col: &str,
) -> Result<Vec<GapRow>> {
    let ci = dataset.column_index(code_col)?;
    let fi = dataset.column_index(female_col)?;
    let mi = dataset.column_index(male_col)?;
    let rows: Vec<GapRow> = dataset
        .rows()
        .iter()
        .filter_map(|r| {
            Some(GapRow {
                code: r[ci].to_string(),
                female: r[fi].as_f64()?,
                male: r[mi].as_f64()?,
            })
        })
        .collect();
    debug!(
        "gap_rows: {} plottable of {} rows",
        rows.len(),
        dataset.len()
    );
    Ok(rows)
}

/// Value range with a little padding so end markers are not clipped.
fn value_range(rows: &[GapRow]) -> (f64, f64) {
    let (mut lo, mut hi) = rows
        .iter()
        .flat_map(|r| [r.female, r.male])
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo == hi {
        lo -= 1.0;
        hi += 1.0;
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

fn draw_gap<DB: DrawingBackend>(
    root: DrawingArea<DB, plotters::coord::Shift>,
    rows: &[GapRow],
) -> Result<()> {
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let (x_min, x_max) = value_range(rows);
    let n = rows.len() as f64;
    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .build_cartesian_2d(x_min..x_max, 0f64..n)
        .map_err(|e| anyhow!("{:?}", e))?;

    let step = (x_max - x_min) / GRID_LINES as f64;
    chart
        .draw_series((0..=GRID_LINES).map(|i| {
            let x = x_min + step * i as f64;
            PathElement::new(vec![(x, 0.0), (x, n)], line_style(GREY_GRIDLINE, 1))
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    for (i, row) in rows.iter().enumerate() {
        let y = n - i as f64 - 0.5;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(row.female, y), (row.male, y)],
                line_style(NEUTRAL_LINE, 2),
            )))
            .map_err(|e| anyhow!("{:?}", e))?;
        for (value, style) in [(row.female, FEMALE), (row.male, MALE)] {
            draw_styled_marker(&mut chart, (value, y), style)?;
        }
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_styled_marker<DB: DrawingBackend>(
    chart: &mut ChartContext<
        '_,
        DB,
        plotters::coord::cartesian::Cartesian2d<
            plotters::coord::types::RangedCoordf64,
            plotters::coord::types::RangedCoordf64,
        >,
    >,
    at: (f64, f64),
    style: SeriesStyle,
) -> Result<()> {
    // outline first, then the fill one pixel inside it
    draw_marker(chart, at, style.symbol, MARKER_PX + 1, fill_style(style.line))?;
    draw_marker(chart, at, style.symbol, MARKER_PX, fill_style(style.fill))
}

/// Render the dot plot to an SVG document in memory.
pub fn render_gap_svg(
    dataset: &Dataset,
    code_col: &str,
    female_col: &str,
    male_col: &str,
    width: u32,
    height: u32,
) -> Result<String> {
    let rows = gap_rows(dataset, code_col, female_col, male_col)?;
    if rows.is_empty() {
        bail!("no data to plot");
    }
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        draw_gap(root, &rows)?;
    }
    Ok(svg)
}

/// Render the dot plot and write it to `out_path`.
pub fn plot_gap<P: AsRef<Path>>(
    dataset: &Dataset,
    code_col: &str,
    female_col: &str,
    male_col: &str,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let svg = render_gap_svg(dataset, code_col, female_col, male_col, width, height)?;
    fs::write(out_path, svg).with_context(|| format!("write {}", out_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;

    fn sample() -> Dataset {
        Dataset::from_rows(
            ["geo", "f", "m"],
            vec![
                vec!["DEU".into(), Cell::Number(22.0), Cell::Number(8.0)],
                vec!["FRA".into(), Cell::Missing, Cell::Number(5.0)],
                vec!["MKD ¶".into(), "30".into(), Cell::Number(12.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn rows_without_both_values_are_skipped() {
        let rows = gap_rows(&sample(), "geo", "f", "m").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].code, "MKD ¶");
        assert_eq!(rows[1].female, 30.0);
    }

    #[test]
    fn flat_range_is_widened() {
        let rows = vec![GapRow {
            code: "DEU".into(),
            female: 3.0,
            male: 3.0,
        }];
        let (lo, hi) = value_range(&rows);
        assert!(lo < 2.0 && hi > 4.0);
    }
}
