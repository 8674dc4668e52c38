//! Document model with Rope-based text storage
//!
//! The document is the host-side collaborator for the transform: it loads
//! and saves text, invokes the transducer over a region, and splices the
//! untouched tail back after a selection-only run.

use anyhow::{bail, Context, Result};
use ropey::Rope;
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::ProcessingOptions;
use crate::transform::{effective_region, transform};

/// An in-memory text document.
#[derive(Clone)]
pub struct Document {
    pub path: Option<PathBuf>,
    pub rope: Rope,
    pub rev: u64,
}

impl Document {
    /// Load a document from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            rope: Rope::from_str(&content),
            rev: 1,
        })
    }

    /// Create a document from in-memory text (stdin input, tests)
    pub fn from_text(text: &str) -> Self {
        Self {
            path: None,
            rope: Rope::from_str(text),
            rev: 1,
        }
    }

    /// The full document text as a string
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Run the transform over `region` (byte offsets) or the whole text,
    /// splice the untouched tail back, and replace the document content.
    /// Returns the number of hard returns removed.
    pub fn apply(&mut self, region: Option<(usize, usize)>, options: &ProcessingOptions) -> usize {
        let text = self.text();
        let (req_start, req_end) = region.unwrap_or((0, text.len()));

        let (_, end) = effective_region(&text, req_start, req_end, options.restrict_to_region);
        let outcome = transform(&text, req_start, req_end, options);

        let mut rewritten = outcome.text;
        rewritten.push_str(&text[end..]);

        self.rope = Rope::from_str(&rewritten);
        self.rev += 1;
        outcome.returns_removed
    }

    /// Write the document back to the path it was loaded from
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => self.save_as(path),
            None => bail!("Document has no backing file"),
        }
    }

    /// Write the document to `path`
    pub fn save_as(&self, path: &Path) -> Result<()> {
        fs::write(path, self.text())
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}
