//! Row filtering and relabeling on a country-code column.
//!
//! Typical pipeline before charting:
//! 1. drop aggregate rows (`EU27...`) with [`exclude_rows`]
//! 2. fold historical aliases of North Macedonia into one label with [`relabel_aliases`]
//! 3. attach a footnote when that label is shown, via [`build_footnote`]
//!
//! ```
//! use vaw_rs::models::Dataset;
//! use vaw_rs::normalize::{check_mkd, clean_member_states, clean_mkd};
//!
//! let ds = Dataset::from_rows(
//!     ["geo"],
//!     vec![vec!["EU27_2020".into()], vec!["TFYR".into()], vec!["DEU".into()]],
//! )?;
//! let mut ds = clean_member_states(&ds, "geo")?;
//! clean_mkd(&mut ds, "geo")?;
//! assert!(!check_mkd(&ds, "geo")?.is_empty());
//! # Ok::<(), vaw_rs::DatasetError>(())
//! ```

use crate::config::NormalizerConfig;
use crate::error::DatasetError;
use crate::models::{Cell, Dataset};
use crate::pattern::PatternSet;
use log::debug;

/// Aggregate EU rows that should not be charted next to member states.
pub const EU27_PATTERNS: [&str; 1] = ["^EU27"];

/// Codes used for North Macedonia across data releases.
pub const MKD_ALIAS_PATTERNS: [&str; 2] = ["^MKD", "^TFYR"];

pub const MKD_LABEL: &str = "MKD ¶";

pub const MKD_FOOTNOTE: &str =
    "¶ The former Yugoslav Republic of Macedonia (MKD is an abbreviation of the ISO).";

fn text_matches(cell: &Cell, patterns: &PatternSet) -> bool {
    cell.as_str().is_some_and(|s| patterns.is_match(s))
}

/// Return a copy of `dataset` without the rows whose `column` value matches
/// any of `patterns`. Kept rows stay in their original order.
pub fn exclude_rows(
    dataset: &Dataset,
    column: &str,
    patterns: &PatternSet,
) -> Result<Dataset, DatasetError> {
    let idx = dataset.column_index(column)?;
    let out = dataset.retain_rows(|row| !text_matches(&row[idx], patterns));
    debug!(
        "exclude_rows: column={column} kept={} dropped={}",
        out.len(),
        dataset.len() - out.len()
    );
    Ok(out)
}

/// Overwrite `column` with `canonical_label` in every row whose value matches
/// one of the alias `patterns`. Other columns are never touched.
///
/// Returns how many cells changed; cells already holding the label are not
/// counted, so a second pass reports zero.
pub fn relabel_aliases(
    dataset: &mut Dataset,
    column: &str,
    patterns: &PatternSet,
    canonical_label: &str,
) -> Result<usize, DatasetError> {
    let idx = dataset.column_index(column)?;
    let mut changed = 0;
    for row in dataset.rows_mut() {
        let cell = &mut row[idx];
        if text_matches(cell, patterns) && cell.as_str() != Some(canonical_label) {
            *cell = Cell::Text(canonical_label.to_string());
            changed += 1;
        }
    }
    debug!("relabel_aliases: column={column} label={canonical_label:?} relabeled={changed}");
    Ok(changed)
}

/// `footnote_text` if some row's `column` value equals `canonical_label`
/// exactly, otherwise an empty string.
pub fn build_footnote(
    dataset: &Dataset,
    column: &str,
    canonical_label: &str,
    footnote_text: &str,
) -> Result<String, DatasetError> {
    let present = dataset
        .column(column)?
        .any(|c| c.as_str() == Some(canonical_label));
    Ok(if present {
        footnote_text.to_string()
    } else {
        String::new()
    })
}

/// Drop EU27 aggregate rows.
pub fn clean_member_states(dataset: &Dataset, column: &str) -> Result<Dataset, DatasetError> {
    exclude_rows(dataset, column, &PatternSet::new(EU27_PATTERNS))
}

/// Standardise the country label for North Macedonia.
pub fn clean_mkd(dataset: &mut Dataset, column: &str) -> Result<usize, DatasetError> {
    relabel_aliases(
        dataset,
        column,
        &PatternSet::new(MKD_ALIAS_PATTERNS),
        MKD_LABEL,
    )
}

pub fn check_mkd(dataset: &Dataset, column: &str) -> Result<String, DatasetError> {
    build_footnote(dataset, column, MKD_LABEL, MKD_FOOTNOTE)
}

/// Result of running the whole pipeline over one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub dataset: Dataset,
    pub excluded: usize,
    pub relabeled: usize,
    pub footnote: String,
}

/// Exclude → relabel → footnote, with patterns compiled once.
#[derive(Debug, Clone)]
pub struct Normalizer {
    exclude: PatternSet,
    aliases: PatternSet,
    canonical_label: String,
    footnote: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizerConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &NormalizerConfig) -> Self {
        Self {
            exclude: PatternSet::new(&config.exclude_patterns),
            aliases: PatternSet::new(&config.alias_patterns),
            canonical_label: config.canonical_label.clone(),
            footnote: config.footnote.clone(),
        }
    }

    pub fn run(&self, dataset: &Dataset, column: &str) -> Result<Normalized, DatasetError> {
        let mut out = exclude_rows(dataset, column, &self.exclude)?;
        let excluded = dataset.len() - out.len();
        let relabeled = relabel_aliases(&mut out, column, &self.aliases, &self.canonical_label)?;
        let footnote = build_footnote(&out, column, &self.canonical_label, &self.footnote)?;
        Ok(Normalized {
            dataset: out,
            excluded,
            relabeled,
            footnote,
        })
    }
}
