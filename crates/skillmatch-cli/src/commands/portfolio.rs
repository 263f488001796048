//! The `skillmatch portfolio` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use skillmatch_core::portfolio::{default_questions, Portfolio, PromptKind, Questionnaire};

use super::OutputFormat;

#[derive(Subcommand)]
pub enum PortfolioAction {
    /// Print the portfolio
    Show {
        /// Output format (text renders a markdown preview)
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Set profile fields; fields not given are left as they are
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },

    /// Add a skill
    AddSkill { skill: String },

    /// Remove a skill
    RemoveSkill { skill: String },

    /// Add a project
    AddProject {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Skill used in the project (repeatable)
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long, default_value = "")]
        link: String,
    },

    /// Add a work experience entry
    AddExperience {
        #[arg(long)]
        role: String,
        #[arg(long)]
        company: String,
        #[arg(long, default_value = "")]
        period: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Add an education entry
    AddEducation {
        #[arg(long)]
        degree: String,
        #[arg(long)]
        institution: String,
        #[arg(long, default_value = "")]
        year: String,
    },

    /// Remove a project, experience or education entry by id
    Remove { id: String },

    /// Answer the portfolio questionnaire interactively
    Questions,
}

pub fn execute(file: PathBuf, action: PortfolioAction) -> Result<()> {
    let mut portfolio = Portfolio::load_or_default(&file)?;

    match action {
        PortfolioAction::Show { format } => {
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&portfolio)?),
                OutputFormat::Text => print!("{}", portfolio.to_markdown(&default_questions())),
            }
            return Ok(());
        }
        PortfolioAction::Profile {
            name,
            title,
            summary,
            email,
            website,
            location,
        } => {
            let profile = &mut portfolio.profile;
            for (field, value) in [
                (&mut profile.name, name),
                (&mut profile.title, title),
                (&mut profile.summary, summary),
                (&mut profile.email, email),
                (&mut profile.website, website),
                (&mut profile.location, location),
            ] {
                if let Some(value) = value {
                    *field = value;
                }
            }
            println!("Profile updated.");
        }
        PortfolioAction::AddSkill { skill } => {
            if portfolio.add_skill(&skill) {
                println!("Added skill: {}", skill.trim());
            } else {
                println!("Skill is blank or already listed, nothing added.");
            }
        }
        PortfolioAction::RemoveSkill { skill } => {
            anyhow::ensure!(portfolio.remove_skill(&skill), "skill not found: {skill}");
            println!("Removed skill: {skill}");
        }
        PortfolioAction::AddProject {
            title,
            description,
            skills,
            link,
        } => {
            let project = portfolio.add_project();
            project.title = title;
            project.description = description;
            project.skills = skills;
            project.link = link;
            println!("Added project {}", project.id);
        }
        PortfolioAction::AddExperience {
            role,
            company,
            period,
            description,
        } => {
            let exp = portfolio.add_experience();
            exp.role = role;
            exp.company = company;
            exp.period = period;
            exp.description = description;
            println!("Added experience {}", exp.id);
        }
        PortfolioAction::AddEducation {
            degree,
            institution,
            year,
        } => {
            let edu = portfolio.add_education();
            edu.degree = degree;
            edu.institution = institution;
            edu.year = year;
            println!("Added education {}", edu.id);
        }
        PortfolioAction::Remove { id } => {
            let kind = portfolio.remove_entry(&id)?;
            println!("Removed {kind} {id}");
        }
        PortfolioAction::Questions => {
            if !run_questionnaire(&mut portfolio)? {
                return Ok(());
            }
        }
    }

    portfolio.save_json(&file)?;
    eprintln!("Portfolio saved to: {}", file.display());
    Ok(())
}

/// Returns `false` if the user quit without keeping their answers.
fn run_questionnaire(portfolio: &mut Portfolio) -> Result<bool> {
    let mut questionnaire = Questionnaire::resume(default_questions(), &portfolio.answers)?;

    println!("Portfolio Questions");
    println!("Press Enter to keep an answer, 'b' to go back, 'q' to quit without saving.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        let question = questionnaire.current_question();
        println!(
            "\nQuestion {} of {} ({}% complete)",
            questionnaire.current_index() + 1,
            questionnaire.len(),
            questionnaire.progress_percent()
        );
        println!("{}", question.prompt);
        match &question.kind {
            PromptKind::MultipleChoice { options } => {
                for (i, option) in options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option);
                }
            }
            PromptKind::Text { placeholder } => println!("  ({placeholder})"),
        }
        if let Some(current) = questionnaire.current_answer() {
            println!("Current answer: {current}");
        }
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!("input ended before the questionnaire was completed");
        };
        let line = line?;
        let input = line.trim();

        match input {
            "b" | "back" => {
                if !questionnaire.previous() {
                    println!("Already at the first question.");
                }
                continue;
            }
            "q" | "quit" => {
                println!("Questionnaire abandoned.");
                return Ok(false);
            }
            _ => {}
        }

        if !input.is_empty() {
            let value = match &questionnaire.current_question().kind {
                PromptKind::MultipleChoice { options } => match input.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= options.len() => options[n - 1].clone(),
                    _ => {
                        println!("Please enter a number between 1 and {}.", options.len());
                        continue;
                    }
                },
                PromptKind::Text { .. } => input.to_string(),
            };
            questionnaire.answer(&value)?;
        }

        if !questionnaire.next() {
            break;
        }
    }

    portfolio.record_answers(&questionnaire);
    println!("\nAnswers saved to your portfolio.");
    Ok(true)
}
