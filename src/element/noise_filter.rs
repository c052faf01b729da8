use crate::element::element_model::ElementRecord;

// ============================================================================
// Noise filter — drops descriptors that should never enter comparison
// ============================================================================

/// Tags that carry no user-facing interaction value.
const NOISE_TAGS: [&str; 10] = [
    "script", "style", "noscript", "template", "meta", "link", "br", "hr", "svg", "path",
];

/// Class/id substrings that mark advertising, tracking, or interruption
/// chrome.
const AD_TOKENS: [&str; 11] = [
    "advert", "banner", "sponsor", "promo", "tracking", "analytics", "adsense", "doubleclick",
    "cookie-consent", "popup", "overlay",
];

/// The bare `ad`/`ads` families only match as whole hyphen/underscore
/// segments: `ad-slot` and `google-ads` are ads, `add-to-cart` is not.
const AD_SEGMENTS: [&str; 2] = ["ad", "ads"];

fn is_ad_value(value: &str) -> bool {
    let lower = value.to_lowercase();
    if AD_TOKENS.iter().any(|t| lower.contains(t)) {
        return true;
    }
    lower
        .split(|ch: char| !ch.is_alphanumeric())
        .any(|segment| AD_SEGMENTS.contains(&segment))
}

/// Keep only descriptors worth comparing. Runs before the O(n²) pairwise
/// step, so dropped records never contribute to comparison cost.
pub fn filter_noise(records: Vec<ElementRecord>) -> Vec<ElementRecord> {
    records.into_iter().filter(|r| !is_noise(r)).collect()
}

/// Whether a record is decorative, hidden, or advertising noise.
pub fn is_noise(record: &ElementRecord) -> bool {
    let c = &record.characteristics;

    if NOISE_TAGS.contains(&c.tag.as_str()) {
        return true;
    }

    // Decorative ARIA markup
    if matches!(c.role.as_deref(), Some("presentation") | Some("none")) {
        return true;
    }
    if c.attr("aria-hidden") == Some("true") {
        return true;
    }

    // Advertising class or id tokens
    if c.id().map(is_ad_value).unwrap_or(false) {
        return true;
    }
    c.classes.iter().any(|class| is_ad_value(class))
}
