//! The `skillmatch quiz` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use skillmatch_core::careers::recommend;
use skillmatch_core::quiz::{QuizSession, QuizStep};
use skillmatch_core::report::AssessmentReport;

use super::{open_session, persist_report, print_careers, print_profile};

pub fn execute(
    config_path: Option<PathBuf>,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let session = open_session(config_path, catalog)?;
    let mut quiz = QuizSession::new(session.catalog.questions.clone())?
        .with_policy(session.config.answer_policy);

    println!("Skill Assessment: {}", session.catalog.name);
    println!("Answer with the option number, 'b' to go back, 'q' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    let scores = loop {
        let question = quiz.current_question();
        let option_count = question.options.len();
        println!(
            "\nQuestion {} of {} ({}% complete)",
            quiz.current_index() + 1,
            quiz.len(),
            quiz.progress_percent()
        );
        println!("{}", question.text);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!("input ended before the quiz was completed");
        };
        let line = line?;
        let input = line.trim();

        match input {
            "b" | "back" => {
                if !quiz.previous()? {
                    println!("Already at the first question.");
                }
                continue;
            }
            "q" | "quit" => {
                println!("Quiz abandoned.");
                return Ok(());
            }
            _ => {}
        }

        let choice = match input.parse::<u8>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!("Please enter a number between 1 and {option_count}.");
                continue;
            }
        };
        if let Err(e) = quiz.select(choice) {
            if !e.is_input_error() {
                return Err(e.into());
            }
            println!("{e}");
            continue;
        }
        if let QuizStep::Completed(scores) = quiz.next()? {
            break scores;
        }
    };

    println!("\nAssessment completed!\n");
    print_profile(&scores);

    let top = recommend(
        &session.catalog.careers,
        session.config.recommendation_limit,
    );
    println!("\nRecommended Career Paths");
    print_careers(&top);

    let report = AssessmentReport::new(&session.catalog, quiz.answers().clone(), scores, &top);
    persist_report(&report, &session.config, output.as_deref(), save)
}
