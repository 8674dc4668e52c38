//! Processing options for the transform
//!
//! Options are resolved once per invocation and passed in as an immutable
//! value; nothing in the core reads mutable configuration mid-scan. The
//! record is serde-compatible so a host can persist it as TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Immutable per-invocation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    /// Ordered raw marker tokens; earlier tokens are consulted first.
    pub list_markers: Vec<String>,
    /// Lines shorter than this keep their hard return.
    pub min_line_length: usize,
    /// Insert reply-boundary markers around quoted blocks.
    pub email_markers_enabled: bool,
    /// Honor the passed region indices; when false the whole text is
    /// processed regardless of any indices supplied.
    pub restrict_to_region: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            list_markers: default_list_markers(),
            min_line_length: 0,
            email_markers_enabled: true,
            restrict_to_region: false,
        }
    }
}

/// Dashed, starred and tabbed lines, plus numbered or lettered outlines
/// with `)` or `.` delimiters.
pub fn default_list_markers() -> Vec<String> {
    ["-", "*", "\t", "[outline])", "[outline]."]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl ProcessingOptions {
    /// Load options from a TOML file. Missing keys fall back to defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {}", path.display()))?;

        let options: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse options file: {}", path.display()))?;

        Ok(options)
    }
}
