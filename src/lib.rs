//! vaw_rs
//!
//! Clean country-level gender statistics for charting, and the shared
//! chart style (colors, marker symbols, plot size). Pairs with the `vaw` CLI.
//!
//! ### Features
//! - Drop aggregate rows (`EU27...`) from a code column
//! - Fold historical aliases (`MKD`, `TFYR...`) into one canonical label
//! - Footnote text when that label is shown
//! - Style constants as typed values and as a frozen lookup table
//! - Read/write CSV, write JSON, render a female-vs-male SVG dot plot
//!
//! ### Example
//! ```no_run
//! use vaw_rs::{Normalizer, storage, style, viz};
//!
//! let data = storage::load_csv("indicator.csv")?;
//! let out = Normalizer::default().run(&data, "geo")?;
//! storage::save_csv(&out.dataset, "indicator_clean.csv")?;
//! viz::plot_gap(&out.dataset, "geo", "female", "male", "gap.svg", style::PLOT_WIDTH, style::PLOT_HEIGHT)?;
//! if !out.footnote.is_empty() {
//!     println!("{}", out.footnote);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod pattern;
pub mod storage;
pub mod style;
pub mod viz;

pub use config::NormalizerConfig;
pub use error::DatasetError;
pub use models::{Cell, Dataset};
pub use normalize::{Normalized, Normalizer, build_footnote, exclude_rows, relabel_aliases};
pub use pattern::{Pattern, PatternSet};
