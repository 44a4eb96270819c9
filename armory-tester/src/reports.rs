use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::runner::ScenarioResult;

fn success_rate(results: &[ScenarioResult]) -> f64 {
    let passed = results.iter().filter(|r| r.passed).count();
    #[allow(clippy::cast_precision_loss)]
    let rate = (passed as f64 / results.len().max(1) as f64) * 100.0;
    rate
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Popup Scenario Results".bright_cyan().bold())?;
    writeln!(out, "{}", "=========================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total scenarios: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{} {} ({})", status, result.scenario_name.bold(), result.scenario_key)?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# Armory Popup Scenario Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {} {}\n", status, result.scenario_name)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_key: "toggle".into(),
            scenario_name: "Toggle on same item".into(),
            passed,
            iterations_run: 2,
            successful_iterations: if passed { 2 } else { 1 },
            failures: if passed {
                Vec::new()
            } else {
                vec!["Iteration 2: still open".into()]
            },
            average_duration: Duration::from_micros(40),
        }
    }

    #[test]
    fn markdown_report_lists_failures() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &[sample(true), sample(false)]).expect("report");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("- **Success rate**: 50.0%"));
        assert!(text.contains("  - Iteration 2: still open"));
    }

    #[test]
    fn json_report_is_an_array() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &[sample(true)]).expect("report");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["scenario_key"], "toggle");
    }

    #[test]
    fn console_report_counts_results() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &[sample(true)], Duration::from_millis(1))
            .expect("report");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Total scenarios: 1"));
        assert!(text.contains("PASS Toggle on same item (toggle)"));
    }
}
