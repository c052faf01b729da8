use crate::analyze_captures;
use crate::cli::config::AppConfig;
use crate::input::error::MinerError;
use crate::input::loader::load_captures;
use crate::report::console::format_console_report;
use crate::report::markdown::generate_markdown_report;
use crate::report::page_object::generate_base_page;
use crate::report::report_model::AnalysisReport;
use crate::trace::logger::TraceLogger;

// ============================================================================
// analyze subcommand
// ============================================================================

pub fn cmd_analyze(
    input: &str,
    min_similarity: Option<f64>,
    format: Option<&str>,
    output: Option<&str>,
    trace: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let threshold = min_similarity.unwrap_or(config.analyze.min_similarity);
    let format = format.unwrap_or(&config.analyze.format);
    let output = output.or(config.analyze.output.as_deref());
    let trace = trace.or(config.analyze.trace.as_deref());

    let report = run_analysis(input, threshold, trace, verbose)?;

    let content = match format {
        "console" => format_console_report(&report),
        "markdown" => generate_markdown_report(&report),
        "json" => {
            serde_json::to_string_pretty(&report).map_err(|e| MinerError::JsonSerialize {
                context: "analysis report".to_string(),
                source: e,
            })? + "\n"
        }
        other => return Err(Box::new(MinerError::UnknownFormat(other.to_string()))),
    };

    match output {
        Some(path) => std::fs::write(path, &content).map_err(|e| MinerError::Io {
            path: path.to_string(),
            source: e,
        })?,
        None => print!("{}", content),
    }

    Ok(())
}

// ============================================================================
// generate subcommand
// ============================================================================

pub fn cmd_generate(
    input: &str,
    min_similarity: Option<f64>,
    output: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let threshold = min_similarity.unwrap_or(config.analyze.min_similarity);
    let output = output.unwrap_or(&config.generate.output);

    let report = run_analysis(input, threshold, None, verbose)?;
    let source = generate_base_page(&report);

    std::fs::write(output, &source).map_err(|e| MinerError::Io {
        path: output.to_string(),
        source: e,
    })?;

    println!(
        "Wrote {} with {} locators ({} groups total)",
        output,
        report.base_page_groups().len(),
        report.groups.len()
    );
    Ok(())
}

// ============================================================================
// Shared pipeline driver
// ============================================================================

fn run_analysis(
    input: &str,
    threshold: f64,
    trace: Option<&str>,
    verbose: u8,
) -> Result<AnalysisReport, Box<dyn std::error::Error>> {
    let captures = load_captures(input)?;
    if captures.len() < 2 {
        return Err(Box::new(MinerError::NotEnoughPages(captures.len())));
    }

    if verbose > 0 {
        eprintln!(
            "Analyzing {} pages (threshold {}%)...",
            captures.len(),
            threshold
        );
    }

    let tracer = match trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let report = analyze_captures(&captures, threshold, &tracer);

    if verbose > 0 {
        eprintln!(
            "Compared {} elements, found {} groups{}",
            report.elements_compared,
            report.groups.len(),
            if report.fallback_used {
                " (recurrence fallback)"
            } else {
                ""
            }
        );
    }

    Ok(report)
}
