use serde::Deserialize;

use crate::element::element_model::{ElementRecord, RawElement};
use crate::element::normalizer::normalize_all;

// ============================================================================
// Page capture — one file per analyzed page
// ============================================================================

/// One crawled page as written by the external DOM-extraction tool:
/// `{"url": "...", "title": "...", "elements": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageCapture {
    pub url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub elements: Vec<RawElement>,
}

impl PageCapture {
    /// Normalize this page's raw descriptors into canonical records,
    /// tagged with the page's URL as the opaque source identifier.
    pub fn to_records(&self) -> Vec<ElementRecord> {
        normalize_all(&self.elements, &self.url)
    }
}

/// Flatten a set of captures into the single ordered record list the
/// comparator consumes.
pub fn collect_records(captures: &[PageCapture]) -> Vec<ElementRecord> {
    captures
        .iter()
        .flat_map(|capture| capture.to_records())
        .collect()
}
