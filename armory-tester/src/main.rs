mod reports;
mod runner;
mod scenario;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use runner::{ScenarioResult, ScenarioRunner};
use scenario::{all_scenarios, get_scenario, list_scenarios};

#[derive(Debug, Parser)]
#[command(name = "armory-tester", version = "0.1.0")]
#[command(about = "Headless lifecycle scenarios for the Armory item popup")]
struct Args {
    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let results = run_scenarios(&args, &scenarios);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut out = open_output(args.output.as_deref())?;
    writeln!(out, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(out, "  {key:20} - {description}")?;
    }
    out.flush()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🛡️ Armory Popup Tester".bright_cyan().bold());
    println!("{}", "======================".cyan());
}

/// Split the comma-separated scenario list; `all` adds every catalog key not
/// already named.
fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios: Vec<String> = Vec::new();
    for key in scenarios_arg.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let keys: Vec<&str> = if key == "all" {
            all_scenarios().iter().map(|s| s.key).collect()
        } else {
            vec![key]
        };
        for key in keys {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn run_scenarios(args: &Args, scenarios: &[String]) -> Vec<ScenarioResult> {
    let runner = ScenarioRunner::new(args.verbose);
    let mut results = Vec::new();
    for key in scenarios {
        if let Some(scenario) = get_scenario(key) {
            results.push(runner.run(&scenario, args.iterations));
        } else {
            eprintln!("⚠️  Unknown scenario: {}", key.yellow());
        }
    }
    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut out = open_output(args.output.as_deref())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut out, results)?,
        "markdown" if results.is_empty() => writeln!(
            out,
            "# Armory Popup Scenario Results\n\n_No scenarios executed._"
        )?,
        "markdown" => reports::generate_markdown_report(&mut out, results)?,
        _ if results.is_empty() => writeln!(out, "No scenarios executed.")?,
        _ => reports::generate_console_report(&mut out, results, start_time.elapsed())?,
    }

    if args.report != "json" {
        writeln!(out)?;
        writeln!(out, "🏁 Total time: {:?}", start_time.elapsed())?;
    }
    out.flush()?;
    Ok(())
}

/// Buffered writer for `path`, or stdout when no path is given.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let out: Box<dyn Write> = match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(stdout())),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base_args() -> Args {
        Args {
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            iterations: 1,
            report: "json".to_string(),
            verbose: false,
            output: None,
        }
    }

    fn sample_result(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_key: "smoke".to_string(),
            scenario_name: "Show then hide".to_string(),
            passed,
            iterations_run: 1,
            successful_iterations: usize::from(passed),
            failures: if passed {
                Vec::new()
            } else {
                vec!["Iteration 1: failure".to_string()]
            },
            average_duration: Duration::from_micros(12),
        }
    }

    #[test]
    fn expands_all_scenarios_keyword() {
        let expanded = expand_scenarios("smoke,all");
        assert_eq!(expanded.first().map(String::as_str), Some("smoke"));
        assert_eq!(expanded.len(), all_scenarios().len());
        assert!(expanded.contains(&"placement-flip".to_string()));
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        let expanded = expand_scenarios("toggle, smoke,,toggle");
        assert_eq!(expanded, vec!["toggle".to_string(), "smoke".to_string()]);
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let args = base_args();
        let results = run_scenarios(&args, &["nope".to_string(), "smoke".to_string()]);
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let temp = std::env::temp_dir().join("armory-scenarios.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("reentrant-requests"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        assert!(!maybe_list_scenarios(&base_args()).unwrap());
    }

    #[test]
    fn write_reports_emits_empty_json_array() {
        let temp = std::env::temp_dir().join("armory-report-empty.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let temp = std::env::temp_dir().join("armory-report-empty.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("No scenarios executed"));
        assert!(content.contains("Total time"));
    }

    #[test]
    fn write_reports_emits_markdown_report() {
        let temp = std::env::temp_dir().join("armory-report-full.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(false)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("# Armory Popup Scenario Results"));
        assert!(content.contains("Iteration 1: failure"));
    }

    #[test]
    fn write_reports_console_lists_scenarios() {
        let temp = std::env::temp_dir().join("armory-report-console.txt");
        let args = Args {
            report: "console".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(true)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Show then hide"));
    }

    #[test]
    fn stdout_output_writes() {
        let mut out = open_output(None).unwrap();
        out.write_all(b"ok").unwrap();
        out.flush().unwrap();
    }
}
