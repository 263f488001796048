//! The `skillmatch score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use skillmatch_core::careers::recommend;
use skillmatch_core::report::AssessmentReport;
use skillmatch_core::scoring::{compute_scores_with, AnswerSet};

use super::{open_session, persist_report, print_careers, print_profile, OutputFormat};

pub fn execute(
    config_path: Option<PathBuf>,
    catalog: Option<PathBuf>,
    answers: String,
    output: Option<PathBuf>,
    save: bool,
    format: OutputFormat,
) -> Result<()> {
    let session = open_session(config_path, catalog)?;
    let answers = parse_answers(&answers)?;

    let scores = compute_scores_with(
        &session.catalog.questions,
        &answers,
        session.config.answer_policy,
    )?;
    let top = recommend(
        &session.catalog.careers,
        session.config.recommendation_limit,
    );
    let report = AssessmentReport::new(&session.catalog, answers, scores, &top);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            print_profile(&report.scores);
            if let Some((category, score)) = report.scores.strongest() {
                println!("Strongest skill: {category} ({score}%)");
            }
            println!("\nRecommended Career Paths");
            print_careers(&top);
        }
    }

    persist_report(&report, &session.config, output.as_deref(), save)
}

/// Parse `4,3,2` (answer n answers question n) or `0:4,2:3` (explicit
/// question index). `-` or an empty slot leaves a question unanswered.
pub fn parse_answers(input: &str) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();

    for (position, token) in input.split(',').map(str::trim).enumerate() {
        if token.is_empty() || token == "-" {
            continue;
        }
        let (question, option) = match token.split_once(':') {
            Some((q, o)) => {
                let q = q
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("invalid question index: '{}'", q.trim()))?;
                (q, o.trim())
            }
            None => (position, token),
        };
        let option = option
            .parse::<u8>()
            .with_context(|| format!("invalid option: '{option}'"))?;
        answers.record(question, option);
    }

    anyhow::ensure!(!answers.is_empty(), "no answers given");
    Ok(answers)
}
