use serde::Serialize;

use crate::element::element_model::ElementRecord;

// ============================================================================
// Pairwise similarity result
// ============================================================================

/// Outcome of comparing two records from different pages.
///
/// `left`/`right` are positional for trace purposes only; the score itself
/// is symmetric in the two records' characteristics. Invariant:
/// `left.source_page != right.source_page`.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult {
    pub left: ElementRecord,
    pub right: ElementRecord,

    /// Percentage in [0, 100]
    pub score: f64,

    /// Which checks fired, e.g. `tag`, `classes(navbar)`, `text`
    pub matching_attributes: Vec<String>,
}
