use std::collections::HashMap;

use page_object_miner::element::element_model::{ElementCharacteristics, ElementRecord};
use page_object_miner::grouping::engine::group_results;
use page_object_miner::grouping::fallback::{group_by_recurrence, semantic_key};
use page_object_miner::grouping::group_model::{Recommendation, grouping_key};
use page_object_miner::similarity::comparator::compare_across_pages;
use page_object_miner::similarity::scorer::score_pair;

// ============================================================================
// Helper builders
// ============================================================================

fn record(tag: &str, page: &str) -> ElementRecord {
    ElementRecord {
        selector: tag.to_string(),
        characteristics: ElementCharacteristics {
            tag: tag.to_string(),
            classes: vec![],
            attributes: HashMap::new(),
            text: String::new(),
            role: None,
            placeholder: None,
            input_type: None,
            href: None,
            src: None,
        },
        xpath: format!("//{}", tag),
        source_page: page.to_string(),
    }
}

fn with_classes(mut r: ElementRecord, classes: &[&str]) -> ElementRecord {
    r.characteristics.classes = classes.iter().map(|c| c.to_string()).collect();
    r
}

fn with_attr(mut r: ElementRecord, name: &str, value: &str) -> ElementRecord {
    r.characteristics
        .attributes
        .insert(name.to_string(), value.to_string());
    r
}

fn with_selector(mut r: ElementRecord, selector: &str) -> ElementRecord {
    r.selector = selector.to_string();
    r
}

// ============================================================================
// Grouping key
// ============================================================================

#[test]
fn grouping_key_uses_tag_type_role_and_first_two_classes() {
    let mut r = with_classes(record("input", "p1"), &["field", "wide", "extra"]);
    r.characteristics.input_type = Some("email".to_string());
    r.characteristics.role = Some("textbox".to_string());

    assert_eq!(grouping_key(&r), "input|email|textbox|field.wide");

    let bare = record("div", "p1");
    assert_eq!(grouping_key(&bare), "div|none|none|", "Absent parts become 'none'/empty");
}

#[test]
fn grouping_key_ignores_trailing_classes_and_page() {
    let a = with_classes(record("button", "p1"), &["btn", "primary", "large"]);
    let b = with_classes(record("button", "p9"), &["btn", "primary", "small"]);
    assert_eq!(
        grouping_key(&a),
        grouping_key(&b),
        "Records differing only past the first two classes share a key"
    );
}

// ============================================================================
// Grouping engine
// ============================================================================

#[test]
fn qualifying_pair_creates_a_full_group() {
    let a = with_attr(record("button", "https://site/p1"), "data-testid", "submit-btn");
    let b = with_attr(record("button", "https://site/p2"), "data-testid", "submit-btn");

    let groups = group_results(&compare_across_pages(&[a, b], 60.0));

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group.locator, "[data-testid=\"submit-btn\"]");
    assert_eq!(group.name, "submitButton", "Filler 'btn' stripped, kind suffix added");
    assert_eq!(group.element_type, "button");
    assert_eq!(group.pages, vec!["https://site/p1", "https://site/p2"]);
    assert_eq!(group.confidence, 100.0);
    assert_eq!(group.recommendation, Recommendation::BasePageCandidate);
}

#[test]
fn same_key_results_merge_with_page_dedup() {
    let p1 = with_selector(with_attr(record("button", "p1"), "data-testid", "save"), "#save1");
    let p2 = with_selector(with_attr(record("button", "p2"), "data-testid", "save"), "#save2");
    let p3 = with_selector(with_attr(record("button", "p3"), "data-testid", "save"), "#save3");

    let results = compare_across_pages(&[p1, p2, p3], 60.0);
    assert_eq!(results.len(), 3, "Three cross-page pairs qualify");

    let groups = group_results(&results);
    assert_eq!(groups.len(), 1, "All pairs share one grouping key");

    let group = &groups[0];
    assert_eq!(group.pages.len(), 3, "Each page recorded once despite 3 pairs");
    assert_eq!(
        group.pages.len(),
        group.selectors.len(),
        "Selectors stay parallel to pages"
    );
}

#[test]
fn confidence_never_decreases_while_merging() {
    let strong_a = with_attr(record("button", "p1"), "data-testid", "go");
    let strong_b = with_attr(record("button", "p2"), "data-testid", "go");
    // Same grouping key (button, no type/role/classes) but a weaker pair
    let weak_a = record("button", "p1");
    let weak_b = record("button", "p3");

    let mut results = vec![score_pair(&strong_a, &strong_b), score_pair(&weak_a, &weak_b)];
    // Already descending; folding the weak result must not lower confidence
    let groups = group_results(&results);
    assert_eq!(groups[0].confidence, 100.0);

    // Reversed fold order: confidence rises to the max instead
    results.reverse();
    let groups = group_results(&results);
    assert_eq!(
        groups[0].confidence, 100.0,
        "Confidence is the max contributing score regardless of fold order"
    );
}

#[test]
fn first_seen_wins_for_locator_and_name() {
    let testid_a = with_attr(record("button", "p1"), "data-testid", "checkout");
    let testid_b = with_attr(record("button", "p2"), "data-testid", "checkout");
    let plain_a = record("button", "p1");
    let plain_b = record("button", "p4");

    // Highest-scoring pair first, as the comparator guarantees
    let results = vec![score_pair(&testid_a, &testid_b), score_pair(&plain_a, &plain_b)];
    let groups = group_results(&results);

    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].locator, "[data-testid=\"checkout\"]",
        "Later merges never recompute the locator"
    );
    assert_eq!(groups[0].name, "checkoutButton");
}

#[test]
fn groups_sorted_descending_by_confidence() {
    let nav_a = with_classes(record("nav", "p1"), &["navbar"]);
    let nav_b = with_classes(record("nav", "p2"), &["navbar"]);
    let btn_a = with_attr(record("button", "p1"), "data-testid", "cta");
    let btn_b = with_attr(record("button", "p2"), "data-testid", "cta");

    let results = compare_across_pages(&[nav_a, btn_a, nav_b, btn_b], 40.0);
    let groups = group_results(&results);

    assert_eq!(groups.len(), 2);
    assert!(
        groups[0].confidence >= groups[1].confidence,
        "Groups emitted highest-confidence first"
    );
    assert_eq!(groups[0].element_type, "button");
}

#[test]
fn unpaired_elements_produce_no_groups() {
    let a = record("div", "p1");
    let b = record("table", "p2");
    let groups = group_results(&compare_across_pages(&[a, b], 60.0));
    assert!(groups.is_empty(), "Zero qualifying pairs, zero groups");
}

// ============================================================================
// Fallback grouping — multi-page recurrence
// ============================================================================

#[test]
fn testid_on_three_pages_yields_one_fallback_group() {
    let records = vec![
        with_attr(record("div", "p1"), "data-testid", "logo"),
        with_attr(record("div", "p2"), "data-testid", "logo"),
        with_attr(record("div", "p3"), "data-testid", "logo"),
    ];

    let groups = group_by_recurrence(&records);
    assert_eq!(groups.len(), 1, "Exactly one group for the recurring logo");
    assert_eq!(groups[0].confidence, 80.0, "Fallback confidence is fixed");
    assert_eq!(groups[0].pages.len(), 3);
    assert_eq!(groups[0].recommendation, Recommendation::MultiPageRecurrence);
    assert_eq!(groups[0].locator, "[data-testid=\"logo\"]");
}

#[test]
fn single_page_keys_do_not_become_groups() {
    let records = vec![
        with_attr(record("div", "p1"), "data-testid", "logo"),
        with_attr(record("div", "p1"), "data-testid", "logo"),
        record("span", "p2"),
    ];

    assert!(
        group_by_recurrence(&records).is_empty(),
        "A key must appear on 2+ distinct pages"
    );
}

#[test]
fn semantic_key_priority_order() {
    let testid = with_attr(
        with_classes(record("nav", "p1"), &["search-bar"]),
        "data-testid",
        "main-nav",
    );
    assert_eq!(semantic_key(&testid), Some("testid:main-nav".to_string()));

    let mut roled = record("div", "p1");
    roled.characteristics.role = Some("navigation".to_string());
    assert_eq!(semantic_key(&roled), Some("role:navigation".to_string()));

    let landmark = record("footer", "p1");
    assert_eq!(semantic_key(&landmark), Some("tag:footer".to_string()));

    let themed = with_classes(record("button", "p1"), &["theme-switch"]);
    assert_eq!(semantic_key(&themed), Some("class:theme".to_string()));

    let anonymous = record("div", "p1");
    assert_eq!(semantic_key(&anonymous), None, "No anchor, no key");
}
