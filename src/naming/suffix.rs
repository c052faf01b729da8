use crate::element::element_model::ElementCharacteristics;

// ============================================================================
// Element-kind suffix tables
// ============================================================================

/// Suffixes keyed by ARIA role. Role wins over tag/type when present.
const ROLE_SUFFIXES: [(&str, &str); 9] = [
    ("button", "Button"),
    ("link", "Link"),
    ("tab", "Tab"),
    ("tabpanel", "Panel"),
    ("dialog", "Dialog"),
    ("navigation", "Navigation"),
    ("search", "Search"),
    ("menu", "Menu"),
    ("menuitem", "MenuItem"),
];

/// Suffixes keyed by tag name.
const TAG_SUFFIXES: [(&str, &str); 17] = [
    ("button", "Button"),
    ("a", "Link"),
    ("select", "Dropdown"),
    ("textarea", "Textarea"),
    ("form", "Form"),
    ("table", "Table"),
    ("nav", "Navigation"),
    ("header", "Header"),
    ("footer", "Footer"),
    ("main", "Content"),
    ("aside", "Sidebar"),
    ("section", "Section"),
    ("article", "Article"),
    ("h1", "Heading"),
    ("h2", "Heading"),
    ("h3", "Heading"),
    ("h4", "Heading"),
];

/// Pick the identifier suffix describing what kind of element this is.
pub fn element_kind_suffix(c: &ElementCharacteristics) -> &'static str {
    if let Some(role) = c.role.as_deref() {
        for (candidate, suffix) in ROLE_SUFFIXES {
            if role == candidate {
                return suffix;
            }
        }
    }

    if c.tag == "input" {
        return input_suffix(c.input_type.as_deref());
    }

    for (candidate, suffix) in TAG_SUFFIXES {
        if c.tag == candidate {
            return suffix;
        }
    }

    if matches!(c.tag.as_str(), "h5" | "h6") {
        return "Heading";
    }

    "Element"
}

/// Input suffix variants by `type` attribute.
fn input_suffix(input_type: Option<&str>) -> &'static str {
    match input_type {
        Some("checkbox") => "Checkbox",
        Some("radio") => "Radio",
        Some("file") => "FileInput",
        Some("date") | Some("datetime-local") | Some("time") | Some("month") | Some("week") => {
            "DateInput"
        }
        Some("submit") | Some("button") | Some("reset") => "Button",
        _ => "Input",
    }
}
