use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Canonical element data model
// ============================================================================

/// Maximum visible-text length kept on a record. Longer text is truncated
/// during normalization so that text comparison stays cheap and stable.
pub const MAX_TEXT_LEN: usize = 80;

/// Canonical, immutable description of a single DOM element.
///
/// Produced once by the normalizer from a raw capture and never mutated
/// afterwards. Absent attributes are represented as `None` or empty
/// collections, never as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementCharacteristics {
    /// Tag name, always lowercased
    pub tag: String,

    /// Class tokens in document order
    pub classes: Vec<String>,

    /// Raw attribute name → value mapping (keys case-sensitive)
    pub attributes: HashMap<String, String>,

    /// Visible text, trimmed and truncated to `MAX_TEXT_LEN`
    pub text: String,

    pub role: Option<String>,
    pub placeholder: Option<String>,
    pub input_type: Option<String>,
    pub href: Option<String>,
    pub src: Option<String>,
}

impl ElementCharacteristics {
    /// Look up a raw attribute value, `None` if absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    /// First non-empty test-automation attribute (`data-testid`, `data-cy`,
    /// `data-test`), returned as `(attribute_name, value)`.
    pub fn test_attribute(&self) -> Option<(&'static str, &str)> {
        for name in TEST_ATTRIBUTES {
            if let Some(value) = self.attr(name) {
                if !value.is_empty() {
                    return Some((name, value));
                }
            }
        }
        None
    }

    /// The element's `id` attribute, `None` if absent or empty.
    pub fn id(&self) -> Option<&str> {
        self.attr("id").filter(|v| !v.is_empty())
    }
}

/// Test-automation attributes checked in priority order.
pub const TEST_ATTRIBUTES: [&str; 3] = ["data-testid", "data-cy", "data-test"];

// ============================================================================
// Raw capture input (extraction collaborator contract)
// ============================================================================

/// Raw element descriptor as produced by the external DOM-extraction tool.
///
/// Every field except `tag` is optional on the wire; the normalizer turns
/// absence into empty defaults rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawElement {
    #[serde(default)]
    pub tag: String,

    #[serde(default)]
    pub classes: Vec<String>,

    #[serde(default)]
    pub attributes: HashMap<String, String>,

    pub text: Option<String>,
    pub role: Option<String>,
    pub placeholder: Option<String>,
    pub r#type: Option<String>,
    pub href: Option<String>,
    pub src: Option<String>,

    pub selector: Option<String>,
    pub xpath: Option<String>,

    #[serde(rename = "ariaLabel")]
    pub aria_label: Option<String>,

    #[serde(rename = "ariaHidden", default)]
    pub aria_hidden: bool,
}

/// One surviving element descriptor, tied to the page it was captured on.
///
/// The page identifier is opaque: it is only compared for equality and
/// echoed into reports, never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Best-effort CSS selector produced by the extraction collaborator
    pub selector: String,

    pub characteristics: ElementCharacteristics,

    /// XPath of the element on its source page
    pub xpath: String,

    /// Identifier of the page this record came from (typically its URL)
    pub source_page: String,
}
