use std::collections::HashSet;

use crate::{
    element::{element_model::ElementRecord, noise_filter::filter_noise},
    grouping::{engine::group_results, fallback::group_by_recurrence},
    input::capture::{PageCapture, collect_records},
    report::report_model::AnalysisReport,
    similarity::comparator::compare_across_pages,
    trace::{logger::TraceLogger, trace::TraceEvent},
};

pub mod cli;
pub mod element;
pub mod grouping;
pub mod input;
pub mod locator;
pub mod naming;
pub mod report;
pub mod similarity;
pub mod trace;

/// Run the full pipeline over loaded page captures.
///
/// Normalizes and noise-filters every page's descriptors, compares all
/// cross-page pairs at the given threshold, clusters qualifying pairs into
/// groups, and falls back to multi-page recurrence grouping when similarity
/// finds nothing. Pure except for trace output.
pub fn analyze_captures(
    captures: &[PageCapture],
    threshold: f64,
    tracer: &TraceLogger,
) -> AnalysisReport {
    let records = collect_records(captures);
    analyze_records(records, threshold, tracer)
}

/// Same pipeline starting from already-normalized records.
pub fn analyze_records(
    records: Vec<ElementRecord>,
    threshold: f64,
    tracer: &TraceLogger,
) -> AnalysisReport {
    let records = filter_noise(records);

    let pages: HashSet<&str> = records.iter().map(|r| r.source_page.as_str()).collect();
    let page_count = pages.len();
    let element_count = records.len();

    let results = compare_across_pages(&records, threshold);
    for result in &results {
        tracer.log(&TraceEvent::pair_scored(result));
    }

    let fallback_used = results.is_empty();
    let groups = if fallback_used {
        tracer.log(&TraceEvent::now("fallback").with_detail(format!(
            "no pairs at threshold {}; grouping by recurrence",
            threshold
        )));
        group_by_recurrence(&records)
    } else {
        group_results(&results)
    };

    for group in &groups {
        tracer.log(&TraceEvent::group_emitted(group));
    }

    AnalysisReport::from_groups(page_count, element_count, threshold, fallback_used, groups)
}
