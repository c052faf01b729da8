use crate::grouping::group_model::{GroupedElement, Recommendation};
use crate::report::report_model::AnalysisReport;

// ============================================================================
// Page-object generator — TypeScript BasePage class from grouped elements
// ============================================================================

/// Generate a TypeScript Playwright `BasePage` class exposing a locator
/// getter per base-page-eligible group.
///
/// Conditional groups get a comment flagging possible per-page overrides;
/// page-specific groups are listed in a trailing comment block instead of
/// becoming getters.
pub fn generate_base_page(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("import { Page, Locator } from '@playwright/test';\n\n");
    out.push_str("// Generated from cross-page element analysis.\n");
    out.push_str(&format!(
        "// {} pages analyzed, threshold {}%.\n\n",
        report.pages_analyzed, report.threshold
    ));
    out.push_str("export class BasePage {\n");
    out.push_str("  constructor(protected readonly page: Page) {}\n");

    for group in &report.groups {
        if !is_base_page_eligible(group) {
            continue;
        }

        out.push('\n');
        if group.recommendation == Recommendation::BasePageConditional {
            out.push_str("  // May need overrides on some pages\n");
        }
        out.push_str(&format!(
            "  // seen on {} pages, confidence {:.1}% [{}]\n",
            group.page_count(),
            group.confidence,
            AnalysisReport::group_fingerprint(group)
        ));
        out.push_str(&format!(
            "  get {}(): Locator {{\n    return this.page.locator('{}');\n  }}\n",
            sanitize_identifier(&group.name),
            escape_single_quotes(&group.locator)
        ));
    }

    out.push_str("}\n");

    let page_specific: Vec<&GroupedElement> = report
        .groups
        .iter()
        .filter(|g| !is_base_page_eligible(g))
        .collect();
    if !page_specific.is_empty() {
        out.push_str("\n// Recurring but unstable — keep these in individual page objects:\n");
        for group in page_specific {
            out.push_str(&format!("//   {} -> {}\n", group.name, group.locator));
        }
    }

    out
}

fn is_base_page_eligible(group: &GroupedElement) -> bool {
    !matches!(group.recommendation, Recommendation::PageSpecific)
}

/// Keep generated getter names valid TypeScript identifiers.
fn sanitize_identifier(name: &str) -> String {
    let cleaned: String = name.chars().filter(|c| c.is_alphanumeric()).collect();
    if cleaned.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        format!("el{}", cleaned)
    } else {
        cleaned
    }
}

fn escape_single_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
