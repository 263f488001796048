pub mod careers;
pub mod compare;
pub mod init;
pub mod portfolio;
pub mod quiz;
pub mod resources;
pub mod score;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};

use skillmatch_core::careers::MatchTier;
use skillmatch_core::config::{load_config_from, SkillmatchConfig};
use skillmatch_core::model::{Career, Catalog};
use skillmatch_core::parser::load_catalog;
use skillmatch_core::report::AssessmentReport;
use skillmatch_core::CategoryScores;

/// Output format for `score`, `resources` and `careers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Output format for `compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompareFormat {
    Text,
    Json,
    #[value(alias = "md")]
    Markdown,
}

/// Configuration plus the catalog every command works against.
pub struct Session {
    pub config: SkillmatchConfig,
    pub catalog: Catalog,
}

/// Load config, then the catalog: `--catalog` wins over the config file,
/// which wins over the built-in catalog.
pub fn open_session(config_path: Option<PathBuf>, catalog: Option<PathBuf>) -> Result<Session> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog_path = catalog.or_else(|| config.catalog.clone());
    let catalog = load_catalog(catalog_path.as_deref())?;
    tracing::debug!(
        catalog = %catalog.id,
        questions = catalog.questions.len(),
        resources = catalog.resources.len(),
        careers = catalog.careers.len(),
        "catalog loaded"
    );
    Ok(Session { config, catalog })
}

pub fn print_profile(scores: &CategoryScores) {
    let mut table = Table::new();
    table.set_header(vec!["Skill", "Score"]);
    for (category, score) in scores.iter() {
        table.add_row(vec![Cell::new(category), Cell::new(format!("{score}%"))]);
    }
    println!("Your Skill Profile");
    println!("{table}");
}

pub fn print_careers(careers: &[&Career]) {
    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Career", "Match", "Tier", "Salary", "Growth"]);
    for (rank, career) in careers.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&career.id),
            Cell::new(&career.title),
            Cell::new(format!("{}%", career.match_percentage)),
            Cell::new(MatchTier::for_percentage(career.match_percentage)),
            Cell::new(&career.salary),
            Cell::new(&career.growth),
        ]);
    }
    println!("{table}");
}

/// Write the report to `output`, or into the configured output directory
/// when `save` is set. Does nothing otherwise.
pub fn persist_report(
    report: &AssessmentReport,
    config: &SkillmatchConfig,
    output: Option<&Path>,
    save: bool,
) -> Result<()> {
    let path = match output {
        Some(p) => p.to_path_buf(),
        None if save => {
            let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
            config
                .output_dir
                .join(format!("assessment-{timestamp}.json"))
        }
        None => return Ok(()),
    };
    report.save_json(&path)?;
    eprintln!("Report saved to: {}", path.display());
    Ok(())
}
