use serde::{Deserialize, Serialize};

use crate::element::element_model::ElementRecord;

// ============================================================================
// Grouped element — the system's output contract
// ============================================================================

/// Where a recurring element belongs in the page-object hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Stable anchor, goes straight into the shared base page
    BasePageCandidate,

    /// Base-page eligible but may need per-page overrides
    BasePageConditional,

    /// Too unstable to share; keep in individual page objects
    PageSpecific,

    /// Fallback-path grouping: found on multiple pages by semantic key
    MultiPageRecurrence,
}

impl Recommendation {
    /// Human-readable phrasing used in reports.
    pub fn describe(&self) -> &'static str {
        match self {
            Recommendation::BasePageCandidate => "add to base page",
            Recommendation::BasePageConditional => "add to base page (may need overrides)",
            Recommendation::PageSpecific => "keep page-specific",
            Recommendation::MultiPageRecurrence => "found on multiple pages",
        }
    }
}

/// A canonical group of records judged to denote the same logical element
/// across pages.
///
/// Created on the first similarity result with an unseen grouping key and
/// mutated as further results fold in; immutable once emitted downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedElement {
    /// Best locator, chosen once from the first-seen representative
    pub locator: String,

    /// Synthesized identifier, e.g. `submitButton`
    pub name: String,

    /// Tag name of the representative record
    pub element_type: String,

    /// Matching-attribute tags from the pair that created the group
    pub common_attributes: Vec<String>,

    /// Page identifiers in insertion order, no duplicates
    pub pages: Vec<String>,

    /// Selectors parallel to `pages`; duplicates across merges are allowed
    pub selectors: Vec<String>,

    /// Highest similarity score contributing to the group
    pub confidence: f64,

    pub recommendation: Recommendation,
}

impl GroupedElement {
    /// Number of distinct pages the element was seen on.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

// ============================================================================
// Grouping key
// ============================================================================

/// Coarse structural fingerprint deciding which similarity results refer
/// to "the same" element: `(tag, type|"none", role|"none", first-2-classes)`.
/// Only the first two class tokens participate, so page-specific trailing
/// classes do not split a group.
pub fn grouping_key(record: &ElementRecord) -> String {
    let c = &record.characteristics;
    let first_classes = c
        .classes
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(".");

    format!(
        "{}|{}|{}|{}",
        c.tag,
        c.input_type.as_deref().unwrap_or("none"),
        c.role.as_deref().unwrap_or("none"),
        first_classes
    )
}
