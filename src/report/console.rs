use crate::report::report_model::AnalysisReport;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format an analysis report for terminal output.
///
/// Produces output like:
/// ```text
/// === Shared Element Analysis ===
///
/// Pages: 3 | Elements compared: 42 | Threshold: 60%
///
/// [95.0%] submitButton  [data-testid="submit-btn"]
///         3 pages — add to base page
///
/// === 5 groups (4 base-page candidates) ===
/// ```
pub fn format_console_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("=== Shared Element Analysis ===\n\n");
    out.push_str(&format!(
        "Pages: {} | Elements compared: {} | Threshold: {}%\n",
        report.pages_analyzed, report.elements_compared, report.threshold
    ));

    if report.fallback_used {
        out.push_str("(similarity found no qualifying pairs; using multi-page recurrence)\n");
    }
    out.push('\n');

    for group in &report.groups {
        out.push_str(&format!(
            "[{:.1}%] {}  {}\n",
            group.confidence, group.name, group.locator
        ));
        out.push_str(&format!(
            "        {} pages — {}\n",
            group.page_count(),
            group.recommendation.describe()
        ));

        if !group.common_attributes.is_empty() {
            out.push_str(&format!(
                "        matched: {}\n",
                group.common_attributes.join(", ")
            ));
        }
    }

    out.push_str(&format!(
        "\n=== {} groups ({} base-page candidates) ===\n",
        report.groups.len(),
        report.base_page_groups().len()
    ));

    out
}
