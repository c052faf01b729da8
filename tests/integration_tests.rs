use std::fs;
use std::path::PathBuf;

use page_object_miner::analyze_captures;
use page_object_miner::cli::config::{AppConfig, load_config};
use page_object_miner::grouping::group_model::Recommendation;
use page_object_miner::input::capture::PageCapture;
use page_object_miner::input::error::MinerError;
use page_object_miner::input::loader::load_captures;
use page_object_miner::report::console::format_console_report;
use page_object_miner::report::markdown::generate_markdown_report;
use page_object_miner::report::page_object::generate_base_page;
use page_object_miner::trace::logger::TraceLogger;

// ============================================================================
// Helper builders
// ============================================================================

fn capture(url: &str, elements_json: &str) -> PageCapture {
    let json = format!(
        r#"{{"url": "{}", "title": "Page", "elements": {}}}"#,
        url, elements_json
    );
    serde_json::from_str(&json).expect("capture JSON should parse")
}

/// Scratch directory unique to a test, removed by `cleanup`.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("page-object-miner-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

fn cleanup(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

// ============================================================================
// End-to-end pipeline
// ============================================================================

#[test]
fn recurring_submit_button_becomes_base_page_candidate() {
    let p1 = capture(
        "https://site/login",
        r#"[{"tag": "button", "text": "Submit", "attributes": {"data-testid": "submit-btn"}}]"#,
    );
    let p2 = capture(
        "https://site/signup",
        r#"[{"tag": "button", "text": "Submit", "attributes": {"data-testid": "submit-btn"}}]"#,
    );

    let report = analyze_captures(&[p1, p2], 60.0, &TraceLogger::disabled());

    assert_eq!(report.pages_analyzed, 2);
    assert_eq!(report.groups.len(), 1);
    assert!(!report.fallback_used);

    let group = &report.groups[0];
    assert_eq!(group.confidence, 100.0);
    assert_eq!(group.locator, "[data-testid=\"submit-btn\"]");
    assert_eq!(group.name, "submitButton");
    assert_eq!(group.recommendation, Recommendation::BasePageCandidate);
}

#[test]
fn navbar_grouping_depends_on_threshold() {
    let p1 = capture(
        "https://site/a",
        r#"[{"tag": "nav", "classes": ["navbar", "dark"]}]"#,
    );
    let p2 = capture(
        "https://site/b",
        r#"[{"tag": "nav", "classes": ["navbar", "light"]}]"#,
    );

    // At 60 the 50-point pair fails; the landmark fallback takes over
    let strict = analyze_captures(&[p1.clone(), p2.clone()], 60.0, &TraceLogger::disabled());
    assert!(strict.fallback_used, "No qualifying pairs at the strict threshold");
    assert_eq!(strict.groups.len(), 1, "nav landmark recurs on both pages");
    assert_eq!(strict.groups[0].confidence, 80.0);
    assert_eq!(
        strict.groups[0].recommendation,
        Recommendation::MultiPageRecurrence
    );

    // Relaxed to 40 the similarity path owns the result
    let relaxed = analyze_captures(&[p1, p2], 40.0, &TraceLogger::disabled());
    assert!(!relaxed.fallback_used);
    assert_eq!(relaxed.groups.len(), 1);
    assert_eq!(relaxed.groups[0].confidence, 50.0);
}

#[test]
fn noise_is_dropped_before_comparison() {
    let p1 = capture(
        "https://site/a",
        r#"[{"tag": "script"}, {"tag": "div", "classes": ["ad-banner"]},
           {"tag": "button", "attributes": {"data-testid": "cta"}}]"#,
    );
    let p2 = capture(
        "https://site/b",
        r#"[{"tag": "script"}, {"tag": "button", "attributes": {"data-testid": "cta"}}]"#,
    );

    let report = analyze_captures(&[p1, p2], 60.0, &TraceLogger::disabled());
    assert_eq!(report.elements_compared, 2, "Scripts and ad divs never enter comparison");
    assert_eq!(report.groups.len(), 1);
}

#[test]
fn email_input_gets_placeholder_locator() {
    let p1 = capture(
        "https://site/a",
        r#"[{"tag": "input", "type": "email", "placeholder": "Enter your email"}]"#,
    );
    let p2 = capture(
        "https://site/b",
        r#"[{"tag": "input", "type": "email", "placeholder": "Enter your email"}]"#,
    );

    let report = analyze_captures(&[p1, p2], 60.0, &TraceLogger::disabled());
    assert_eq!(report.groups.len(), 1);
    assert_eq!(
        report.groups[0].locator,
        "input[type=\"email\"][placeholder*=\"Enter your email\"]"
    );
    assert_eq!(report.groups[0].name, "enterYourEmailInput");
}

#[test]
fn empty_output_is_a_valid_result() {
    let p1 = capture("https://site/a", r#"[{"tag": "div"}]"#);
    let p2 = capture("https://site/b", r#"[{"tag": "span"}]"#);

    let report = analyze_captures(&[p1, p2], 60.0, &TraceLogger::disabled());
    assert!(report.fallback_used);
    assert!(report.groups.is_empty(), "Zero groups is a non-error outcome");
}

// ============================================================================
// Capture loading
// ============================================================================

#[test]
fn load_captures_from_directory_sorted_by_filename() {
    let dir = scratch_dir("load-dir");
    fs::write(
        dir.join("b_second.json"),
        r#"{"url": "https://site/b", "elements": []}"#,
    )
    .unwrap();
    fs::write(
        dir.join("a_first.json"),
        r#"{"url": "https://site/a", "elements": []}"#,
    )
    .unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let captures = load_captures(&dir.to_string_lossy()).expect("directory should load");
    assert_eq!(captures.len(), 2, "Only .json files are considered");
    assert_eq!(captures[0].url, "https://site/a");
    assert_eq!(captures[1].url, "https://site/b");

    cleanup(&dir);
}

#[test]
fn empty_directory_is_an_error() {
    let dir = scratch_dir("load-empty");

    let err = load_captures(&dir.to_string_lossy()).unwrap_err();
    assert!(matches!(err, MinerError::NoCaptures(_)), "got {:?}", err);

    cleanup(&dir);
}

#[test]
fn malformed_json_reports_the_file() {
    let dir = scratch_dir("load-bad");
    let bad = dir.join("broken.json");
    fs::write(&bad, "{not json").unwrap();

    let err = load_captures(&bad.to_string_lossy()).unwrap_err();
    match err {
        MinerError::JsonParse { context, .. } => {
            assert!(context.contains("broken.json"), "Context names the file")
        }
        other => panic!("Expected JsonParse, got {:?}", other),
    }

    cleanup(&dir);
}

// ============================================================================
// Reports and code generation
// ============================================================================

fn sample_report() -> page_object_miner::report::report_model::AnalysisReport {
    let p1 = capture(
        "https://site/a",
        r#"[{"tag": "button", "text": "Submit", "attributes": {"data-testid": "submit-btn"}},
           {"tag": "div", "classes": ["content-block", "spacious"]}]"#,
    );
    let p2 = capture(
        "https://site/b",
        r#"[{"tag": "button", "text": "Submit", "attributes": {"data-testid": "submit-btn"}},
           {"tag": "div", "classes": ["content-block", "spacious"]}]"#,
    );
    analyze_captures(&[p1, p2], 60.0, &TraceLogger::disabled())
}

#[test]
fn console_report_lists_groups_and_summary() {
    let out = format_console_report(&sample_report());

    assert!(out.contains("=== Shared Element Analysis ==="));
    assert!(out.contains("submitButton"), "Group name shown:\n{}", out);
    assert!(out.contains("[data-testid=\"submit-btn\"]"));
    assert!(out.contains("add to base page"));
    assert!(out.contains("Threshold: 60%"));
}

#[test]
fn markdown_report_has_group_table() {
    let out = generate_markdown_report(&sample_report());

    assert!(out.starts_with("# Shared Element Analysis"));
    assert!(out.contains("| Name | Locator | Type | Pages | Confidence | Recommendation |"));
    assert!(out.contains("`submitButton`"));
    assert!(out.contains("## Page coverage"));
    assert!(out.contains("https://site/a"));
}

#[test]
fn json_report_round_trips_groups() {
    let report = sample_report();
    let json = serde_json::to_string_pretty(&report).expect("report serializes");

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pages_analyzed"], 2);
    assert!(value["groups"].as_array().map_or(0, |g| g.len()) >= 1);
}

#[test]
fn generated_base_page_exposes_stable_locators_only() {
    let report = sample_report();
    let source = generate_base_page(&report);

    assert!(source.contains("export class BasePage {"));
    assert!(source.contains("get submitButton(): Locator {"));
    assert!(source.contains("this.page.locator('[data-testid=\"submit-btn\"]')"));

    // The page-specific content div recurs but must not become a getter
    for group in &report.groups {
        if group.recommendation == Recommendation::PageSpecific {
            assert!(
                !source.contains(&format!("get {}(", group.name)),
                "Page-specific group {} leaked into the base page",
                group.name
            );
        }
    }
}

// ============================================================================
// Trace output
// ============================================================================

#[test]
fn trace_file_gets_one_json_line_per_event() {
    let dir = scratch_dir("trace");
    let path = dir.join("run.jsonl");

    let p1 = capture(
        "https://site/a",
        r#"[{"tag": "button", "attributes": {"data-testid": "cta"}}]"#,
    );
    let p2 = capture(
        "https://site/b",
        r#"[{"tag": "button", "attributes": {"data-testid": "cta"}}]"#,
    );
    let logger = TraceLogger::new(&path.to_string_lossy());
    analyze_captures(&[p1, p2], 60.0, &logger);

    let content = fs::read_to_string(&path).expect("trace file written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "One compare event and one group event");
    for line in lines {
        let event: serde_json::Value = serde_json::from_str(line).expect("JSONL line parses");
        assert!(event["stage"].is_string());
    }

    cleanup(&dir);
}

// ============================================================================
// Config loading
// ============================================================================

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = load_config(Some("/nonexistent/page-object-miner.yaml"));
    assert_eq!(config.analyze.min_similarity, 60.0);
    assert_eq!(config.analyze.format, "console");
    assert_eq!(config.generate.output, "BasePage.ts");
}

#[test]
fn config_file_overrides_defaults() {
    let dir = scratch_dir("config");
    let path = dir.join("page-object-miner.yaml");
    fs::write(&path, "analyze:\n  min_similarity: 40\n  format: markdown\n").unwrap();

    let config = load_config(Some(&path.to_string_lossy()));
    assert_eq!(config.analyze.min_similarity, 40.0);
    assert_eq!(config.analyze.format, "markdown");
    assert_eq!(
        config.generate.output, "BasePage.ts",
        "Untouched sections keep defaults"
    );

    cleanup(&dir);
}

#[test]
fn malformed_config_degrades_to_defaults() {
    let dir = scratch_dir("config-bad");
    let path = dir.join("page-object-miner.yaml");
    fs::write(&path, ":: not yaml ::").unwrap();

    let config = load_config(Some(&path.to_string_lossy()));
    assert_eq!(config.analyze.min_similarity, 60.0);

    cleanup(&dir);
}

#[test]
fn default_app_config_matches_documented_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.analyze.min_similarity, 60.0);
    assert!(config.analyze.output.is_none());
    assert!(config.analyze.trace.is_none());
}
