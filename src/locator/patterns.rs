use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// Static pattern tables for id and class classification
// ============================================================================
// These tables are fixed at compile time; classification semantics change
// only when a pattern is added here, never at runtime.

// UUID shape, e.g. 550e8400-e29b-41d4-a716-446655440000
static UUID_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}").unwrap()
});

// Long hexadecimal run (content hashes, session tokens)
static LONG_HEX_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[0-9a-f]{16,}").unwrap());

// Embedded long digit run (timestamps, auto-increment counters)
static LONG_DIGIT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{10,}").unwrap());

// Literal generated-id tokens
static GENERATED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)random|temp|generated|uuid|guid").unwrap());

// Framework-assigned id prefixes (Ember, React/Radix/Headless UI, MUI)
static FRAMEWORK_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(ember\d|react-|radix-|headlessui-|mui-|:r|aria-id-|yui_|ext-gen)").unwrap()
});

/// An id is dynamic when it looks machine-generated per render: such ids
/// are unsafe to hard-code into a locator.
pub fn is_dynamic_id(id: &str) -> bool {
    UUID_ID.is_match(id)
        || LONG_HEX_ID.is_match(id)
        || LONG_DIGIT_ID.is_match(id)
        || GENERATED_TOKEN.is_match(id)
        || FRAMEWORK_PREFIX.is_match(id)
}

// Class families with real page-structure meaning
static SEMANTIC_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)nav|header|footer|sidebar|btn|button|form|logo|docs|toggle|theme|search|menu")
        .unwrap()
});

// Utility / presentational classes (Tailwind-style spacing, sizing, layout,
// color, responsive prefixes)
static UTILITY_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([mp][trblxy]?-|w-|h-|min-|max-|gap-|space-|flex|grid|inline|block|hidden|text-|bg-|border|rounded|shadow|font-|leading-|tracking-|z-|opacity-|(sm|md|lg|xl|2xl):)|util|helper",
    )
    .unwrap()
});

/// Pick the class token a locator should use, if any.
///
/// Prefers tokens matching a positive semantic family that are not utility
/// tokens; falls back to the first non-utility token longer than 2 chars.
pub fn meaningful_class(classes: &[String]) -> Option<&String> {
    classes
        .iter()
        .find(|c| SEMANTIC_CLASS.is_match(c) && !UTILITY_CLASS.is_match(c))
        .or_else(|| {
            classes
                .iter()
                .find(|c| !UTILITY_CLASS.is_match(c) && c.len() > 2)
        })
}

/// Whether a class token belongs to a utility family.
pub fn is_utility_class(class: &str) -> bool {
    UTILITY_CLASS.is_match(class)
}

/// Structural substrings that make a class a medium-stability anchor.
pub const STRUCTURAL_CLASS_TOKENS: [&str; 5] = ["btn", "nav", "header", "footer", "form"];

/// Path segments considered structural for link locators: hrefs containing
/// these survive content reshuffles.
pub const STRUCTURAL_HREF_SEGMENTS: [&str; 8] = [
    "/docs", "/api", "/blog", "/about", "/contact", "/pricing", "/login", "/signup",
];

/// Whether an href is stable enough to anchor a locator: the root path,
/// a fragment link, or a recognized structural segment.
pub fn is_structural_href(href: &str) -> bool {
    href == "/"
        || href.starts_with('#')
        || STRUCTURAL_HREF_SEGMENTS.iter().any(|s| href.contains(s))
}
