use serde::Serialize;

use crate::grouping::group_model::{GroupedElement, Recommendation};

// ============================================================================
// Analysis report — aggregates one full mining run
// ============================================================================

/// Aggregated result of one cross-page analysis run.
///
/// Built via `from_groups()` and consumed by the console, Markdown, and
/// JSON reporters plus the page-object generator.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Distinct pages that contributed records
    pub pages_analyzed: usize,

    /// Records that survived the noise filter
    pub elements_compared: usize,

    /// Similarity threshold the run used
    pub threshold: f64,

    /// Whether the recurrence fallback produced these groups
    pub fallback_used: bool,

    /// Groups sorted descending by confidence
    pub groups: Vec<GroupedElement>,
}

impl AnalysisReport {
    pub fn from_groups(
        pages_analyzed: usize,
        elements_compared: usize,
        threshold: f64,
        fallback_used: bool,
        groups: Vec<GroupedElement>,
    ) -> Self {
        Self {
            pages_analyzed,
            elements_compared,
            threshold,
            fallback_used,
            groups,
        }
    }

    /// Groups recommended for the shared base page.
    pub fn base_page_groups(&self) -> Vec<&GroupedElement> {
        self.groups
            .iter()
            .filter(|g| {
                matches!(
                    g.recommendation,
                    Recommendation::BasePageCandidate
                        | Recommendation::BasePageConditional
                        | Recommendation::MultiPageRecurrence
                )
            })
            .collect()
    }

    /// Stable short fingerprint for a group, used in trace output and
    /// generated-code comments to correlate runs.
    pub fn group_fingerprint(group: &GroupedElement) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        hasher.update(group.locator.as_bytes());
        hasher.update(group.element_type.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        digest[..8].to_string()
    }
}
