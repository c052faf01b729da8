use serde::{Deserialize, Serialize};

use crate::element::element_model::ElementCharacteristics;
use crate::grouping::group_model::Recommendation;
use crate::locator::patterns::{STRUCTURAL_CLASS_TOKENS, is_dynamic_id};

// ============================================================================
// Stability rating — independent of locator text
// ============================================================================

/// Qualitative estimate of how likely a locator is to keep matching the
/// intended element as the page evolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    High,
    Medium,
    Low,
}

/// Rate the overall stability of an element's identifying signals.
///
/// High: a test attribute, a non-dynamic id, or an explicit role — all
/// anchors page authors change rarely. Medium: a class token from a
/// structural family. Everything else is low.
pub fn rate_stability(c: &ElementCharacteristics) -> Stability {
    if c.test_attribute().is_some() {
        return Stability::High;
    }
    if c.id().map(|id| !is_dynamic_id(id)).unwrap_or(false) {
        return Stability::High;
    }
    if c.role.is_some() {
        return Stability::High;
    }

    let has_structural_class = c.classes.iter().any(|class| {
        let lower = class.to_lowercase();
        STRUCTURAL_CLASS_TOKENS.iter().any(|t| lower.contains(t))
    });
    if has_structural_class {
        return Stability::Medium;
    }

    Stability::Low
}

/// Map stability to a page-object recommendation: high goes straight into
/// the shared base page, medium goes in flagged for per-page overrides,
/// low stays page-specific.
pub fn recommendation_for(c: &ElementCharacteristics) -> Recommendation {
    match rate_stability(c) {
        Stability::High => Recommendation::BasePageCandidate,
        Stability::Medium => Recommendation::BasePageConditional,
        Stability::Low => Recommendation::PageSpecific,
    }
}
