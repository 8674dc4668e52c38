//! Unflow core - strips extra hard line breaks from reflowed text
//!
//! This crate contains the core logic for unflow, independent of CLI
//! concerns:
//! - The line transducer that classifies every hard return
//! - Quote-prefix scanning and list-marker matching
//! - Verbatim block passthrough
//! - Document model with Rope-based text storage
//! - Processing options with TOML loading

pub mod doc;
pub mod markers;
pub mod options;
pub mod prefix;
pub mod report;
pub mod transform;
pub mod verbatim;

// Re-export commonly used types
pub use doc::Document;
pub use markers::{ListMarkerSpec, MarkerCatalog};
pub use options::ProcessingOptions;
pub use transform::{transform, TransformOutcome};
