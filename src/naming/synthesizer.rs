use crate::element::element_model::ElementCharacteristics;
use crate::locator::patterns::{is_dynamic_id, meaningful_class};
use crate::naming::suffix::element_kind_suffix;

// ============================================================================
// Name synthesis — readable lower-camel identifiers for grouped elements
// ============================================================================

/// Text longer than this is prose, not a label, and makes a bad name.
const MAX_NAME_TEXT_LEN: usize = 30;

/// Leading tokens that describe the widget, not the element's purpose.
const FILLER_PREFIXES: [&str; 7] = ["btn", "button", "link", "nav", "menu", "icon", "img"];

/// Trailing tokens stripped for the same reason.
const FILLER_SUFFIXES: [&str; 5] = ["btn", "button", "link", "icon", "img"];

/// Derive an identifier like `submitButton` or `mainNavigation` from the
/// most semantically rich source available on the element.
pub fn synthesize_name(c: &ElementCharacteristics) -> String {
    let base = name_source(c);
    let cleaned = clean_base(&base);
    let camel = to_lower_camel(&cleaned);
    format!("{}{}", camel, element_kind_suffix(c))
}

/// Ordered source-priority chain, first non-empty wins.
fn name_source(c: &ElementCharacteristics) -> String {
    if let Some((_, value)) = c.test_attribute() {
        return value.to_string();
    }
    if let Some(label) = c.attr("aria-label").filter(|l| !l.is_empty()) {
        return label.to_string();
    }
    if let Some(id) = c.id().filter(|id| !is_dynamic_id(id)) {
        return id.to_string();
    }
    if let Some(placeholder) = c.placeholder.as_deref() {
        return placeholder.to_string();
    }
    if !c.text.is_empty() && c.text.chars().count() <= MAX_NAME_TEXT_LEN {
        return c.text.clone();
    }
    if let Some(name) = c.attr("name").filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    if let Some(class) = meaningful_class(&c.classes) {
        return class.clone();
    }
    if c.tag == "a" {
        if let Some(token) = href_token(c.href.as_deref()) {
            return token;
        }
    }
    semantic_fallback(c)
}

/// Derive a name token from a link's href path.
fn href_token(href: Option<&str>) -> Option<String> {
    let href = href?;
    let path = href
        .split(['?', '#'])
        .next()
        .unwrap_or(href);

    if path == "/" || path.is_empty() {
        return Some("home".to_string());
    }
    if path.contains("/docs") {
        return Some("docs".to_string());
    }
    if path.contains("/api") {
        return Some("api".to_string());
    }
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}

/// Last resort: a generic word keyed by role or tag.
fn semantic_fallback(c: &ElementCharacteristics) -> String {
    match c.role.as_deref() {
        Some("navigation") => return "navigation".to_string(),
        Some("search") => return "search".to_string(),
        Some("banner") => return "header".to_string(),
        Some("contentinfo") => return "footer".to_string(),
        Some("main") => return "content".to_string(),
        _ => {}
    }
    match c.tag.as_str() {
        "nav" => "navigation".to_string(),
        "aside" => "sidebar".to_string(),
        "header" => "header".to_string(),
        "footer" => "footer".to_string(),
        "main" => "content".to_string(),
        "" => "element".to_string(),
        tag => tag.to_string(),
    }
}

/// Lowercase, collapse separator runs to single spaces, strip filler
/// prefix/suffix tokens, default to "element" when nothing is left.
pub fn clean_base(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    // Every non-alphanumeric run acts as a word separator
    let mut tokens: Vec<&str> = lowered
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    while let Some(first) = tokens.first() {
        if FILLER_PREFIXES.contains(first) {
            tokens.remove(0);
        } else {
            break;
        }
    }
    while let Some(last) = tokens.last() {
        if FILLER_SUFFIXES.contains(last) {
            tokens.pop();
        } else {
            break;
        }
    }

    if tokens.is_empty() {
        "element".to_string()
    } else {
        tokens.join(" ")
    }
}

/// `"enter your email"` → `"enterYourEmail"`. Non-alphanumerics are
/// stripped; the first letter stays lower, each later word is capitalized.
pub fn to_lower_camel(cleaned: &str) -> String {
    let mut out = String::new();
    for (i, word) in cleaned.split_whitespace().enumerate() {
        let word: String = word.chars().filter(|ch| ch.is_alphanumeric()).collect();
        if word.is_empty() {
            continue;
        }
        if i == 0 {
            out.push_str(&word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}
