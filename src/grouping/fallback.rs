use std::collections::HashMap;

use crate::element::element_model::ElementRecord;
use crate::grouping::group_model::{GroupedElement, Recommendation};
use crate::locator::strategy::best_locator;
use crate::naming::synthesizer::synthesize_name;

// ============================================================================
// Fallback grouping — multi-page recurrence by semantic key
// ============================================================================

/// Landmark tags that identify an element on their own.
const LANDMARK_TAGS: [&str; 5] = ["nav", "header", "footer", "main", "aside"];

/// Class-token families coarse enough to match across styling changes.
const CLASS_FAMILIES: [&str; 3] = ["search", "toggle", "theme"];

/// Confidence assigned to every fallback group: recurrence is solid
/// evidence, but weaker than a scored similarity match.
const FALLBACK_CONFIDENCE: f64 = 80.0;

/// Group records by a coarse semantic key when heuristic similarity found
/// nothing.
///
/// This path only runs when the comparator yields zero qualifying pairs;
/// it keeps the system producing usable output on sites where the
/// similarity threshold is too strict. A key must appear on at least two
/// distinct pages to become a group.
pub fn group_by_recurrence(records: &[ElementRecord]) -> Vec<GroupedElement> {
    // Insertion-ordered accumulation, same shape as the main engine
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(Vec<&ElementRecord>, Vec<String>)> = Vec::new();

    for record in records {
        let Some(key) = semantic_key(record) else {
            continue;
        };

        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push((Vec::new(), Vec::new()));
            buckets.len() - 1
        });

        let (members, pages) = &mut buckets[slot];
        if !pages.contains(&record.source_page) {
            members.push(record);
            pages.push(record.source_page.clone());
        }
    }

    buckets
        .into_iter()
        .filter(|(_, pages)| pages.len() >= 2)
        .map(|(members, pages)| {
            let representative = members[0];
            let c = &representative.characteristics;
            GroupedElement {
                locator: best_locator(c),
                name: synthesize_name(c),
                element_type: c.tag.clone(),
                common_attributes: Vec::new(),
                selectors: members.iter().map(|m| m.selector.clone()).collect(),
                pages,
                confidence: FALLBACK_CONFIDENCE,
                recommendation: Recommendation::MultiPageRecurrence,
            }
        })
        .collect()
}

/// Coarse semantic identity, or `None` when the record has no anchor worth
/// recurrence-matching.
pub fn semantic_key(record: &ElementRecord) -> Option<String> {
    let c = &record.characteristics;

    if let Some((_, value)) = c.test_attribute() {
        return Some(format!("testid:{}", value));
    }
    if let Some(role) = c.role.as_deref() {
        return Some(format!("role:{}", role));
    }
    if LANDMARK_TAGS.contains(&c.tag.as_str()) {
        return Some(format!("tag:{}", c.tag));
    }

    for family in CLASS_FAMILIES {
        let in_family = c
            .classes
            .iter()
            .any(|class| class.to_lowercase().contains(family));
        if in_family {
            return Some(format!("class:{}", family));
        }
    }

    None
}
