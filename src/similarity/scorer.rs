use crate::element::element_model::{ElementCharacteristics, ElementRecord};
use crate::similarity::similarity_model::SimilarityResult;

// ============================================================================
// Pairwise similarity scorer — deterministic, pure, symmetric
// ============================================================================

/// Fixed denominator for the weighted checklist: tag (3) + shared classes
/// (2) + type (1) + role (1) + placeholder (1). The denominator does not
/// vary with which optional attributes are present, so scores stay
/// comparable across element types. The text check adds a half-point bonus
/// without widening the denominator.
const TOTAL_CHECKS: f64 = 8.0;

/// Score two records' similarity as a percentage with the list of checks
/// that fired.
///
/// Symmetric in content: `score(a, b) == score(b, a)`; only the
/// `left`/`right` trace metadata depends on argument order.
pub fn score_pair(left: &ElementRecord, right: &ElementRecord) -> SimilarityResult {
    let (score, matching_attributes) =
        score_characteristics(&left.characteristics, &right.characteristics);

    SimilarityResult {
        left: left.clone(),
        right: right.clone(),
        score,
        matching_attributes,
    }
}

fn score_characteristics(
    a: &ElementCharacteristics,
    b: &ElementCharacteristics,
) -> (f64, Vec<String>) {
    let mut matches = Vec::new();

    // A shared test-automation attribute value is a direct identity signal:
    // the page authors already named these two elements the same thing.
    if let (Some((attr_a, val_a)), Some((_, val_b))) = (a.test_attribute(), b.test_attribute()) {
        if val_a == val_b {
            matches.push(attr_a.to_string());
            collect_checklist_matches(a, b, &mut matches);
            return (100.0, matches);
        }
    }

    let mut score = 0.0;

    score += collect_checklist_matches(a, b, &mut matches);

    // Text match is a weak signal worth half a point
    if text_matches(&a.text, &b.text) {
        score += 0.5;
        matches.push("text".to_string());
    }

    let percentage = round2(100.0 * score / TOTAL_CHECKS).min(100.0);
    (percentage, matches)
}

/// Run the five weighted checks, recording tags for those that fire.
/// Returns the points earned.
fn collect_checklist_matches(
    a: &ElementCharacteristics,
    b: &ElementCharacteristics,
    matches: &mut Vec<String>,
) -> f64 {
    let mut score = 0.0;

    if !a.tag.is_empty() && a.tag == b.tag {
        score += 3.0;
        matches.push("tag".to_string());
    }

    let shared = shared_classes(a, b);
    if !shared.is_empty() {
        score += shared.len().min(2) as f64;
        matches.push(format!("classes({})", shared.join(",")));
    }

    if both_equal(a.input_type.as_deref(), b.input_type.as_deref()) {
        score += 1.0;
        matches.push("type".to_string());
    }
    if both_equal(a.role.as_deref(), b.role.as_deref()) {
        score += 1.0;
        matches.push("role".to_string());
    }
    if both_equal(a.placeholder.as_deref(), b.placeholder.as_deref()) {
        score += 1.0;
        matches.push("placeholder".to_string());
    }

    score
}

/// Class tokens present on both elements, in `a`'s order. Tokens count
/// once each, so repeated classes cannot make the score depend on
/// argument order.
fn shared_classes(a: &ElementCharacteristics, b: &ElementCharacteristics) -> Vec<String> {
    let mut shared: Vec<String> = Vec::new();
    for class in &a.classes {
        if b.classes.contains(class) && !shared.contains(class) {
            shared.push(class.clone());
        }
    }
    shared
}

/// Both values present, non-empty, and equal.
fn both_equal(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => !x.is_empty() && x == y,
        _ => false,
    }
}

/// Case-insensitive equality or substring containment, either direction.
fn text_matches(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a == b || a.contains(&b) || b.contains(&a)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
