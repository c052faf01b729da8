use crate::element::element_model::ElementCharacteristics;
use crate::locator::patterns::{is_dynamic_id, is_structural_href, meaningful_class};

// ============================================================================
// Locator selection — ordered priority rule table, first match wins
// ============================================================================

/// One locator strategy: a named predicate/builder evaluated against the
/// element's characteristics. Returns `Some(locator)` when it applies.
pub struct LocatorRule {
    pub name: &'static str,
    pub apply: fn(&ElementCharacteristics) -> Option<String>,
}

/// Strategies in durability order. Each rule is independently testable;
/// extending the chain means adding a row, not touching control flow.
pub static LOCATOR_RULES: &[LocatorRule] = &[
    LocatorRule { name: "test-attribute", apply: test_attribute_rule },
    LocatorRule { name: "role", apply: role_rule },
    LocatorRule { name: "aria-label", apply: aria_label_rule },
    LocatorRule { name: "semantic-tag-attribute", apply: semantic_tag_attribute_rule },
    LocatorRule { name: "input-type", apply: input_type_rule },
    LocatorRule { name: "button-text", apply: button_text_rule },
    LocatorRule { name: "structural-href", apply: structural_href_rule },
    LocatorRule { name: "stable-id", apply: stable_id_rule },
    LocatorRule { name: "meaningful-class", apply: meaningful_class_rule },
    LocatorRule { name: "semantic-tag", apply: semantic_tag_rule },
    LocatorRule { name: "heading-text", apply: heading_text_rule },
];

/// Tags with landmark meaning of their own.
pub const SEMANTIC_TAGS: [&str; 7] =
    ["header", "footer", "nav", "main", "aside", "section", "article"];

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Text longer than this is too brittle to put inside a locator.
const MAX_TEXT_LOCATOR_LEN: usize = 30;

/// Placeholders are matched by prefix only, so trailing edits survive.
const PLACEHOLDER_PREFIX_LEN: usize = 20;

/// Pick the most durable locator for an element.
///
/// Walks `LOCATOR_RULES` in order; the final fallback is the bare tag
/// name, so this is a total function.
pub fn best_locator(c: &ElementCharacteristics) -> String {
    select_locator(c).1
}

/// Like `best_locator`, but also reports which rule fired ("tag-fallback"
/// when none did).
pub fn select_locator(c: &ElementCharacteristics) -> (&'static str, String) {
    for rule in LOCATOR_RULES {
        if let Some(locator) = (rule.apply)(c) {
            return (rule.name, locator);
        }
    }
    ("tag-fallback", c.tag.clone())
}

// ----------------------------------------------------------------------------
// Individual rules
// ----------------------------------------------------------------------------

fn test_attribute_rule(c: &ElementCharacteristics) -> Option<String> {
    c.test_attribute()
        .map(|(name, value)| format!("[{}=\"{}\"]", name, value))
}

fn role_rule(c: &ElementCharacteristics) -> Option<String> {
    let role = c.role.as_deref()?;
    match c.attr("aria-label") {
        Some(label) if !label.is_empty() => {
            Some(format!("[role=\"{}\"][aria-label=\"{}\"]", role, label))
        }
        _ => Some(format!("[role=\"{}\"]", role)),
    }
}

fn aria_label_rule(c: &ElementCharacteristics) -> Option<String> {
    c.attr("aria-label")
        .filter(|l| !l.is_empty())
        .map(|label| format!("[aria-label=\"{}\"]", label))
}

/// Landmark tag refined with a stable identifying attribute.
fn semantic_tag_attribute_rule(c: &ElementCharacteristics) -> Option<String> {
    if !SEMANTIC_TAGS.contains(&c.tag.as_str()) {
        return None;
    }
    for attr in ["name", "title"] {
        if let Some(value) = c.attr(attr).filter(|v| !v.is_empty()) {
            return Some(format!("{}[{}=\"{}\"]", c.tag, attr, value));
        }
    }
    None
}

/// Inputs anchored by type, refined with placeholder prefix or name.
fn input_type_rule(c: &ElementCharacteristics) -> Option<String> {
    if c.tag != "input" {
        return None;
    }
    let input_type = c.input_type.as_deref()?;

    if let Some(placeholder) = c.placeholder.as_deref() {
        let prefix: String = placeholder.chars().take(PLACEHOLDER_PREFIX_LEN).collect();
        return Some(format!(
            "input[type=\"{}\"][placeholder*=\"{}\"]",
            input_type, prefix
        ));
    }
    if let Some(name) = c.attr("name").filter(|n| !n.is_empty()) {
        return Some(format!("input[type=\"{}\"][name=\"{}\"]", input_type, name));
    }
    Some(format!("input[type=\"{}\"]", input_type))
}

fn button_text_rule(c: &ElementCharacteristics) -> Option<String> {
    if c.tag != "button" || c.text.is_empty() || c.text.chars().count() > MAX_TEXT_LOCATOR_LEN {
        return None;
    }
    Some(format!("button:has-text(\"{}\")", c.text))
}

fn structural_href_rule(c: &ElementCharacteristics) -> Option<String> {
    if c.tag != "a" {
        return None;
    }
    c.href
        .as_deref()
        .filter(|h| is_structural_href(h))
        .map(|href| format!("a[href=\"{}\"]", href))
}

fn stable_id_rule(c: &ElementCharacteristics) -> Option<String> {
    c.id()
        .filter(|id| !is_dynamic_id(id))
        .map(|id| format!("#{}", id))
}

fn meaningful_class_rule(c: &ElementCharacteristics) -> Option<String> {
    meaningful_class(&c.classes).map(|class| format!("{}.{}", c.tag, class))
}

fn semantic_tag_rule(c: &ElementCharacteristics) -> Option<String> {
    SEMANTIC_TAGS
        .contains(&c.tag.as_str())
        .then(|| c.tag.clone())
}

fn heading_text_rule(c: &ElementCharacteristics) -> Option<String> {
    if !HEADING_TAGS.contains(&c.tag.as_str()) || c.text.is_empty() {
        return None;
    }
    Some(format!("{}:has-text(\"{}\")", c.tag, c.text))
}
