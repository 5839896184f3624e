//! Adapter helpers to use the style table with the plotters crate.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::style::{MarkerSymbol, Rgb8};

pub fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Stroke style for lines (grid lines, connectors).
pub fn line_style(c: Rgb8, width: u32) -> ShapeStyle {
    rgb_color(c).stroke_width(width)
}

pub fn fill_style(c: Rgb8) -> ShapeStyle {
    rgb_color(c).filled()
}

/// Draw one marker of `symbol` centred at `at` (data coordinates), `size`
/// pixels from centre to edge.
pub fn draw_marker<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    at: (f64, f64),
    symbol: MarkerSymbol,
    size: i32,
    style: ShapeStyle,
) -> anyhow::Result<()> {
    let s = size;
    match symbol {
        MarkerSymbol::Circle => chart
            .draw_series(std::iter::once(Circle::new(at, s, style)))
            .map(|_| ()),
        MarkerSymbol::Square => chart
            .draw_series(std::iter::once(
                EmptyElement::at(at) + Rectangle::new([(-s, -s), (s, s)], style),
            ))
            .map(|_| ()),
        MarkerSymbol::Diamond => chart
            .draw_series(std::iter::once(
                EmptyElement::at(at) + Polygon::new(vec![(0, -s), (-s, 0), (0, s), (s, 0)], style),
            ))
            .map(|_| ()),
    }
    .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{FEMALE_FILL, GREY_GRIDLINE};

    #[test]
    fn colors_map_channel_by_channel() {
        let c = rgb_color(FEMALE_FILL);
        assert_eq!((c.0, c.1, c.2), (0xf4, 0xa5, 0x82));
    }

    #[test]
    fn styles_carry_fill_and_width() {
        assert!(fill_style(FEMALE_FILL).filled);
        let ls = line_style(GREY_GRIDLINE, 1);
        assert!(!ls.filled);
        assert_eq!(ls.stroke_width, 1);
    }
}
