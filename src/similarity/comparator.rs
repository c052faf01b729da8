use crate::element::element_model::ElementRecord;
use crate::similarity::scorer::score_pair;
use crate::similarity::similarity_model::SimilarityResult;

// ============================================================================
// Cross-page comparator — enumerate, filter, sort
// ============================================================================

/// Compare every cross-page pair of records and keep those at or above the
/// similarity threshold.
///
/// The threshold is a required parameter on purpose: the core embeds no
/// default, callers own that policy. Same-page pairs are skipped — the
/// whole point is cross-page recurrence. Output is sorted descending by
/// score; ties keep enumeration order (ascending first index, then second).
///
/// Cost is O(n²) in the surviving record count. Callers bound n via the
/// noise filter or per-page caps.
pub fn compare_across_pages(records: &[ElementRecord], threshold: f64) -> Vec<SimilarityResult> {
    let mut results = Vec::new();

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            if records[i].source_page == records[j].source_page {
                continue;
            }

            let result = score_pair(&records[i], &records[j]);
            if result.score >= threshold {
                results.push(result);
            }
        }
    }

    // Stable sort keeps enumeration order for equal scores
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results
}
