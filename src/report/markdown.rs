use crate::report::report_model::AnalysisReport;

// ============================================================================
// Markdown reporter — review-friendly report for PRs and docs
// ============================================================================

/// Generate a Markdown report with a summary header and one table row per
/// group.
pub fn generate_markdown_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("# Shared Element Analysis\n\n");
    out.push_str(&format!(
        "- Pages analyzed: **{}**\n- Elements compared: **{}**\n- Similarity threshold: **{}%**\n",
        report.pages_analyzed, report.elements_compared, report.threshold
    ));
    if report.fallback_used {
        out.push_str("- Grouping mode: **multi-page recurrence fallback**\n");
    }
    out.push('\n');

    if report.groups.is_empty() {
        out.push_str("No recurring elements found.\n");
        return out;
    }

    out.push_str("| Name | Locator | Type | Pages | Confidence | Recommendation |\n");
    out.push_str("|---|---|---|---|---|---|\n");

    for group in &report.groups {
        out.push_str(&format!(
            "| `{}` | `{}` | `{}` | {} | {:.1}% | {} |\n",
            group.name,
            escape_pipes(&group.locator),
            group.element_type,
            group.page_count(),
            group.confidence,
            group.recommendation.describe()
        ));
    }

    out.push_str("\n## Page coverage\n\n");
    for group in &report.groups {
        out.push_str(&format!("### `{}`\n\n", group.name));
        for (page, selector) in group.pages.iter().zip(group.selectors.iter()) {
            out.push_str(&format!("- {} — `{}`\n", page, escape_pipes(selector)));
        }
        out.push('\n');
    }

    out
}

/// Escape table-breaking pipes inside inline code.
fn escape_pipes(s: &str) -> String {
    s.replace('|', "\\|")
}
