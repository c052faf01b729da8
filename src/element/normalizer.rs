use crate::element::element_model::{
    ElementCharacteristics, ElementRecord, MAX_TEXT_LEN, RawElement,
};

// ============================================================================
// Descriptor normalization — raw capture → canonical ElementRecord
// ============================================================================

/// Normalize one raw descriptor into a canonical `ElementRecord`.
///
/// Total function: missing fields become empty defaults, never errors.
/// The tag is lowercased, class tokens are trimmed and de-blanked, visible
/// text is whitespace-collapsed and truncated to `MAX_TEXT_LEN`.
pub fn normalize(raw: &RawElement, source_page: &str) -> ElementRecord {
    let tag = raw.tag.trim().to_lowercase();

    // Set-like token list: first occurrence wins, duplicates dropped
    let mut classes: Vec<String> = Vec::new();
    for token in raw.classes.iter().map(|c| c.trim()) {
        if !token.is_empty() && !classes.iter().any(|c| c == token) {
            classes.push(token.to_string());
        }
    }

    let mut attributes = raw.attributes.clone();

    // Fold the convenience fields back into the attribute map so locator
    // rules only ever have to look in one place.
    if let Some(label) = &raw.aria_label {
        if !label.is_empty() {
            attributes
                .entry("aria-label".to_string())
                .or_insert_with(|| label.clone());
        }
    }
    if raw.aria_hidden {
        attributes
            .entry("aria-hidden".to_string())
            .or_insert_with(|| "true".to_string());
    }

    let text = normalize_text(raw.text.as_deref().unwrap_or(""));

    let characteristics = ElementCharacteristics {
        tag,
        classes,
        attributes,
        text,
        role: non_empty(raw.role.as_deref()),
        placeholder: non_empty(raw.placeholder.as_deref()),
        input_type: non_empty(raw.r#type.as_deref()).map(|t| t.to_lowercase()),
        href: non_empty(raw.href.as_deref()),
        src: non_empty(raw.src.as_deref()),
    };

    let selector = raw
        .selector
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback_selector(&characteristics));

    ElementRecord {
        selector,
        characteristics,
        xpath: raw.xpath.clone().unwrap_or_default(),
        source_page: source_page.to_string(),
    }
}

/// Normalize a whole page capture worth of raw descriptors.
pub fn normalize_all(raws: &[RawElement], source_page: &str) -> Vec<ElementRecord> {
    raws.iter().map(|raw| normalize(raw, source_page)).collect()
}

/// Collapse internal whitespace and truncate to the bounded text length.
pub fn normalize_text(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_TEXT_LEN {
        collapsed
    } else {
        collapsed.chars().take(MAX_TEXT_LEN).collect()
    }
}

/// Best-effort CSS selector when the extractor supplied none:
/// `tag.first-class` if a class exists, else the bare tag.
fn fallback_selector(c: &ElementCharacteristics) -> String {
    match c.classes.first() {
        Some(class) => format!("{}.{}", c.tag, class),
        None => c.tag.clone(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
