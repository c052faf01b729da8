use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::grouping::group_model::{GroupedElement, grouping_key};
use crate::locator::stability::recommendation_for;
use crate::locator::strategy::best_locator;
use crate::naming::synthesizer::synthesize_name;
use crate::similarity::similarity_model::SimilarityResult;

// ============================================================================
// Grouping engine — keyed clustering with insertion-ordered merge
// ============================================================================

/// Fold sorted similarity results into canonical groups.
///
/// Results are expected sorted descending by score, so the highest-scoring
/// pair for a key creates the group and fixes its locator, name, and
/// recommendation (first-seen wins). Later results with the same key only
/// merge evidence: new pages/selectors are appended (dedup by page) and
/// confidence is raised to the max contributing score — it never
/// decreases. Output is sorted descending by confidence.
pub fn group_results(results: &[SimilarityResult]) -> Vec<GroupedElement> {
    // Insertion-ordered map: index vector into `groups` keyed by the
    // coarse structural key.
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<GroupedElement> = Vec::new();

    for result in results {
        let key = grouping_key(&result.left);

        match index.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(groups.len());
                groups.push(create_group(result));
            }
            Entry::Occupied(entry) => merge_into(&mut groups[*entry.get()], result),
        }
    }

    groups.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    groups
}

/// Build a fresh group from the first result seen for a key.
fn create_group(result: &SimilarityResult) -> GroupedElement {
    let c = &result.left.characteristics;

    GroupedElement {
        locator: best_locator(c),
        name: synthesize_name(c),
        element_type: c.tag.clone(),
        common_attributes: result.matching_attributes.clone(),
        pages: vec![
            result.left.source_page.clone(),
            result.right.source_page.clone(),
        ],
        selectors: vec![result.left.selector.clone(), result.right.selector.clone()],
        confidence: result.score,
        recommendation: recommendation_for(c),
    }
}

/// Pure evidence merge: append the right-hand page if unseen (dedup is by
/// page, not selector), raise confidence to the max contributing score.
/// Locator, name, and recommendation stay as first-seen.
fn merge_into(group: &mut GroupedElement, result: &SimilarityResult) {
    if !group.pages.contains(&result.right.source_page) {
        group.pages.push(result.right.source_page.clone());
        group.selectors.push(result.right.selector.clone());
    }
    if result.score > group.confidence {
        group.confidence = result.score;
    }
}
