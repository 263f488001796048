//! The `skillmatch compare` command.

use std::path::PathBuf;

use anyhow::Result;

use skillmatch_core::report::AssessmentReport;

use super::CompareFormat;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: u8,
    fail_on_regression: bool,
    format: CompareFormat,
) -> Result<()> {
    let baseline = AssessmentReport::load_json(&baseline_path)?;
    let current = AssessmentReport::load_json(&current_path)?;

    let comparison = current.compare(&baseline, threshold);

    match format {
        CompareFormat::Markdown => {
            println!("{}", comparison.to_markdown());
        }
        CompareFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
        CompareFormat::Text => {
            println!(
                "Comparison: {} declines, {} gains, {} unchanged",
                comparison.declines.len(),
                comparison.gains.len(),
                comparison.unchanged
            );

            if !comparison.declines.is_empty() {
                println!("\nDeclines:");
                for d in &comparison.declines {
                    println!(
                        "  {} {}% -> {}% ({:+})",
                        d.category, d.baseline_score, d.current_score, d.delta
                    );
                }
            }

            if !comparison.gains.is_empty() {
                println!("\nGains:");
                for g in &comparison.gains {
                    println!(
                        "  {} {}% -> {}% ({:+})",
                        g.category, g.baseline_score, g.current_score, g.delta
                    );
                }
            }

            if comparison.new_categories > 0 {
                println!("\nNew categories: {}", comparison.new_categories);
            }
            if comparison.removed_categories > 0 {
                println!("Removed categories: {}", comparison.removed_categories);
            }
        }
    }

    if fail_on_regression && comparison.has_declines() {
        std::process::exit(1);
    }

    Ok(())
}
