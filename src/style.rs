//! Chart styling constants: series colors, marker symbols, brewer scales and
//! plot dimensions.
//!
//! Values are available as typed constants and as a frozen name → value
//! table for consumers that look styles up by name:
//!
//! ```
//! use vaw_rs::style::{self, StyleValue, FEMALE};
//!
//! assert_eq!(FEMALE.fill.to_hex(), "#f4a582");
//! assert_eq!(style::lookup("plot_width"), Some(StyleValue::Pixels(800)));
//! ```

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Marker symbol, named the way charting front-ends spell them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    Circle,
    Square,
    Diamond,
}

impl MarkerSymbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerSymbol::Circle => "circle",
            MarkerSymbol::Square => "square",
            MarkerSymbol::Diamond => "diamond",
        }
    }
}

/// Fill, outline and marker for one series group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub fill: Rgb8,
    pub line: Rgb8,
    pub symbol: MarkerSymbol,
}

pub const FEMALE_FILL: Rgb8 = Rgb8::from_hex(0xf4a582);
pub const FEMALE_LINE: Rgb8 = Rgb8::from_hex(0xca0020);
pub const FEMALE_SYMBOL: MarkerSymbol = MarkerSymbol::Circle;

pub const MALE_FILL: Rgb8 = Rgb8::from_hex(0x92c5de);
pub const MALE_LINE: Rgb8 = Rgb8::from_hex(0x0571b0);
pub const MALE_SYMBOL: MarkerSymbol = MarkerSymbol::Square;

pub const NEUTRAL_FILL: Rgb8 = Rgb8::from_hex(0x986fb6);
pub const NEUTRAL_LINE: Rgb8 = Rgb8::from_hex(0x602c85);
pub const NEUTRAL_SYMBOL: MarkerSymbol = MarkerSymbol::Diamond;

pub const FEMALE: SeriesStyle = SeriesStyle {
    fill: FEMALE_FILL,
    line: FEMALE_LINE,
    symbol: FEMALE_SYMBOL,
};

pub const MALE: SeriesStyle = SeriesStyle {
    fill: MALE_FILL,
    line: MALE_LINE,
    symbol: MALE_SYMBOL,
};

pub const NEUTRAL: SeriesStyle = SeriesStyle {
    fill: NEUTRAL_FILL,
    line: NEUTRAL_LINE,
    symbol: NEUTRAL_SYMBOL,
};

/// ColorBrewer sequential reds, light to dark.
pub const BREW_SEQ_FEM: [Rgb8; 3] = [
    Rgb8::from_hex(0xfee0d2),
    Rgb8::from_hex(0xfc9272),
    Rgb8::from_hex(0xde2d26),
];

/// ColorBrewer RdYlGn, five classes.
pub const BREW_DIV: [Rgb8; 5] = [
    Rgb8::from_hex(0xd7191c),
    Rgb8::from_hex(0xfdae61),
    Rgb8::from_hex(0xffffbf),
    Rgb8::from_hex(0xa6d96a),
    Rgb8::from_hex(0x1a9641),
];

pub const GREY_GRIDLINE: Rgb8 = Rgb8::from_hex(0xbbbbbb);

pub const PLOT_HEIGHT: u32 = 1000;
pub const PLOT_WIDTH: u32 = 800;

/// One entry of the style table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Color(Rgb8),
    Symbol(MarkerSymbol),
    Pixels(u32),
}

static STYLE_TABLE: Lazy<BTreeMap<&'static str, StyleValue>> = Lazy::new(|| {
    use StyleValue::*;
    let mut t = BTreeMap::new();
    t.insert("female_fill", Color(FEMALE_FILL));
    t.insert("female_line", Color(FEMALE_LINE));
    t.insert("female_symbol", Symbol(FEMALE_SYMBOL));
    t.insert("male_fill", Color(MALE_FILL));
    t.insert("male_line", Color(MALE_LINE));
    t.insert("male_symbol", Symbol(MALE_SYMBOL));
    t.insert("neutral_fill", Color(NEUTRAL_FILL));
    t.insert("neutral_line", Color(NEUTRAL_LINE));
    t.insert("neutral_symbol", Symbol(NEUTRAL_SYMBOL));
    for (name, c) in ["brew_seq_fem_1", "brew_seq_fem_2", "brew_seq_fem_3"]
        .into_iter()
        .zip(BREW_SEQ_FEM)
    {
        t.insert(name, Color(c));
    }
    for (name, c) in ["brew_div_1", "brew_div_2", "brew_div_3", "brew_div_4", "brew_div_5"]
        .into_iter()
        .zip(BREW_DIV)
    {
        t.insert(name, Color(c));
    }
    t.insert("grey_gridline", Color(GREY_GRIDLINE));
    t.insert("plot_height", Pixels(PLOT_HEIGHT));
    t.insert("plot_width", Pixels(PLOT_WIDTH));
    t
});

/// The full style table, built once per process.
pub fn style_table() -> &'static BTreeMap<&'static str, StyleValue> {
    &STYLE_TABLE
}

pub fn lookup(name: &str) -> Option<StyleValue> {
    STYLE_TABLE.get(name).copied()
}
