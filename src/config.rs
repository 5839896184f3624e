use crate::normalize::{EU27_PATTERNS, MKD_ALIAS_PATTERNS, MKD_FOOTNOTE, MKD_LABEL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Normalizer settings. Missing fields fall back to the built-in EU27/MKD rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub exclude_patterns: Vec<String>,
    pub alias_patterns: Vec<String>,
    pub canonical_label: String,
    pub footnote: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: EU27_PATTERNS.iter().map(|s| s.to_string()).collect(),
            alias_patterns: MKD_ALIAS_PATTERNS.iter().map(|s| s.to_string()).collect(),
            canonical_label: MKD_LABEL.to_string(),
            footnote: MKD_FOOTNOTE.to_string(),
        }
    }
}

impl NormalizerConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parse normalizer config")
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_json_str(&txt)
    }
}
