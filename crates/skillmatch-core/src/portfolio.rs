//! Portfolio builder.
//!
//! A [`Portfolio`] holds the personal profile plus project, experience and
//! education entries and a skill list. Entries get a generated id on creation
//! and are edited or removed by that id. The short career questionnaire is
//! driven by a [`Questionnaire`] and its answers are stored on the portfolio.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Personal information shown at the top of a portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

/// The portfolio section an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Project,
    Experience,
    Education,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Project => write!(f, "project"),
            EntryKind::Experience => write!(f, "experience"),
            EntryKind::Education => write!(f, "education"),
        }
    }
}

/// A user's portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Questionnaire answers keyed by question id.
    #[serde(default)]
    pub answers: BTreeMap<u32, String>,
}

fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

fn position_of<T>(
    entries: &[T],
    id: &str,
    entry_id: impl Fn(&T) -> &str,
) -> Result<usize, CoreError> {
    entries
        .iter()
        .position(|e| entry_id(e) == id)
        .ok_or_else(|| CoreError::UnknownEntry(id.to_string()))
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank project and return it for editing.
    pub fn add_project(&mut self) -> &mut Project {
        self.projects.push(Project {
            id: new_entry_id(),
            title: String::new(),
            description: String::new(),
            skills: Vec::new(),
            link: String::new(),
        });
        let last = self.projects.len() - 1;
        &mut self.projects[last]
    }

    pub fn update_project(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut Project),
    ) -> Result<(), CoreError> {
        let index = position_of(&self.projects, id, |p| p.id.as_str())?;
        update(&mut self.projects[index]);
        Ok(())
    }

    pub fn remove_project(&mut self, id: &str) -> Result<Project, CoreError> {
        let index = position_of(&self.projects, id, |p| p.id.as_str())?;
        Ok(self.projects.remove(index))
    }

    /// Append a blank experience entry and return it for editing.
    pub fn add_experience(&mut self) -> &mut Experience {
        self.experiences.push(Experience {
            id: new_entry_id(),
            role: String::new(),
            company: String::new(),
            period: String::new(),
            description: String::new(),
        });
        let last = self.experiences.len() - 1;
        &mut self.experiences[last]
    }

    pub fn update_experience(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut Experience),
    ) -> Result<(), CoreError> {
        let index = position_of(&self.experiences, id, |e| e.id.as_str())?;
        update(&mut self.experiences[index]);
        Ok(())
    }

    pub fn remove_experience(&mut self, id: &str) -> Result<Experience, CoreError> {
        let index = position_of(&self.experiences, id, |e| e.id.as_str())?;
        Ok(self.experiences.remove(index))
    }

    /// Append a blank education entry and return it for editing.
    pub fn add_education(&mut self) -> &mut Education {
        self.education.push(Education {
            id: new_entry_id(),
            degree: String::new(),
            institution: String::new(),
            year: String::new(),
        });
        let last = self.education.len() - 1;
        &mut self.education[last]
    }

    pub fn update_education(
        &mut self,
        id: &str,
        update: impl FnOnce(&mut Education),
    ) -> Result<(), CoreError> {
        let index = position_of(&self.education, id, |e| e.id.as_str())?;
        update(&mut self.education[index]);
        Ok(())
    }

    pub fn remove_education(&mut self, id: &str) -> Result<Education, CoreError> {
        let index = position_of(&self.education, id, |e| e.id.as_str())?;
        Ok(self.education.remove(index))
    }

    /// Remove a project, experience or education entry by id.
    pub fn remove_entry(&mut self, id: &str) -> Result<EntryKind, CoreError> {
        if self.remove_project(id).is_ok() {
            return Ok(EntryKind::Project);
        }
        if self.remove_experience(id).is_ok() {
            return Ok(EntryKind::Experience);
        }
        self.remove_education(id)?;
        Ok(EntryKind::Education)
    }

    /// Add a skill. Blank and already-listed skills are ignored; returns
    /// whether the list changed.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        self.skills.len() != before
    }

    /// Store the questionnaire's answers, replacing earlier ones.
    pub fn record_answers(&mut self, questionnaire: &Questionnaire) {
        self.answers = questionnaire.answers().clone();
    }

    /// Save the portfolio as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize portfolio")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write portfolio to {}", path.display()))?;
        Ok(())
    }

    /// Load a portfolio from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read portfolio from {}", path.display()))?;
        let portfolio: Portfolio =
            serde_json::from_str(&content).context("failed to parse portfolio JSON")?;
        Ok(portfolio)
    }

    /// Load the portfolio at `path`, or start an empty one if the file does
    /// not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_json(path)
        } else {
            tracing::debug!("no portfolio at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Render a markdown preview. Empty sections are left out.
    pub fn to_markdown(&self, questions: &[PortfolioQuestion]) -> String {
        let mut md = String::new();
        let p = &self.profile;

        let name = if p.name.is_empty() {
            "Untitled portfolio"
        } else {
            p.name.as_str()
        };
        md.push_str(&format!("# {name}\n\n"));
        if !p.title.is_empty() {
            md.push_str(&format!("**{}**\n\n", p.title));
        }
        let contact: Vec<&str> = [&p.email, &p.website, &p.location]
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect();
        if !contact.is_empty() {
            md.push_str(&format!("{}\n\n", contact.join(" | ")));
        }
        if !p.summary.is_empty() {
            md.push_str(&format!("{}\n\n", p.summary));
        }

        if !self.skills.is_empty() {
            md.push_str(&format!("## Skills\n\n{}\n\n", self.skills.join(", ")));
        }

        if !self.projects.is_empty() {
            md.push_str("## Projects\n\n");
            for project in &self.projects {
                md.push_str(&format!("### {}\n\n", project.title));
                if !project.description.is_empty() {
                    md.push_str(&format!("{}\n\n", project.description));
                }
                if !project.skills.is_empty() {
                    md.push_str(&format!("Skills: {}\n\n", project.skills.join(", ")));
                }
                if !project.link.is_empty() {
                    md.push_str(&format!("<{}>\n\n", project.link));
                }
            }
        }

        if !self.experiences.is_empty() {
            md.push_str("## Experience\n\n");
            for exp in &self.experiences {
                md.push_str(&format!("### {} at {}\n\n", exp.role, exp.company));
                if !exp.period.is_empty() {
                    md.push_str(&format!("*{}*\n\n", exp.period));
                }
                if !exp.description.is_empty() {
                    md.push_str(&format!("{}\n\n", exp.description));
                }
            }
        }

        if !self.education.is_empty() {
            md.push_str("## Education\n\n");
            for edu in &self.education {
                md.push_str(&format!("- {}, {}", edu.degree, edu.institution));
                if !edu.year.is_empty() {
                    md.push_str(&format!(" ({})", edu.year));
                }
                md.push('\n');
            }
            md.push('\n');
        }

        if !self.answers.is_empty() {
            md.push_str("## About Me\n\n");
            for (id, answer) in &self.answers {
                let prompt = questions
                    .iter()
                    .find(|q| q.id == *id)
                    .map(|q| q.prompt.as_str())
                    .unwrap_or("Question");
                md.push_str(&format!("**{prompt}**\n\n{answer}\n\n"));
            }
        }

        md.trim_end().to_string() + "\n"
    }
}

/// How a portfolio question is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PromptKind {
    /// Pick one of the listed options; the option text is stored.
    MultipleChoice { options: Vec<String> },
    /// Free text.
    Text { placeholder: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioQuestion {
    pub id: u32,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: PromptKind,
}

/// The built-in career questionnaire.
pub fn default_questions() -> Vec<PortfolioQuestion> {
    let choice = |id, prompt: &str, options: &[&str]| PortfolioQuestion {
        id,
        prompt: prompt.to_string(),
        kind: PromptKind::MultipleChoice {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
    };
    let text = |id, prompt: &str, placeholder: &str| PortfolioQuestion {
        id,
        prompt: prompt.to_string(),
        kind: PromptKind::Text {
            placeholder: placeholder.to_string(),
        },
    };

    vec![
        choice(
            1,
            "What's your preferred work environment?",
            &[
                "Remote work",
                "Office environment",
                "Hybrid (mix of remote and office)",
                "Freelance/Independent contracting",
            ],
        ),
        choice(
            2,
            "Which industry are you most interested in?",
            &["Technology", "Healthcare", "Finance", "Education", "Creative/Design"],
        ),
        text(
            3,
            "Describe your biggest professional achievement to date.",
            "Share your most significant professional accomplishment...",
        ),
        text(
            4,
            "What are your primary career goals for the next 5 years?",
            "Describe where you see yourself professionally in 5 years...",
        ),
    ]
}

/// Walks through portfolio questions one at a time.
///
/// Unlike the skill quiz there is no completion step: any question can be
/// left unanswered and the answers can be stored at any point.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<PortfolioQuestion>,
    current: usize,
    answers: BTreeMap<u32, String>,
}

impl Questionnaire {
    pub fn new(questions: Vec<PortfolioQuestion>) -> Result<Self, CoreError> {
        Self::resume(questions, &BTreeMap::new())
    }

    /// Start over `questions` with previously stored answers filled in.
    /// Answers for questions not in the list are dropped.
    pub fn resume(
        questions: Vec<PortfolioQuestion>,
        answers: &BTreeMap<u32, String>,
    ) -> Result<Self, CoreError> {
        if questions.is_empty() {
            return Err(CoreError::EmptyQuiz);
        }
        let answers = answers
            .iter()
            .filter(|(id, _)| questions.iter().any(|q| q.id == **id))
            .map(|(id, a)| (*id, a.clone()))
            .collect();
        Ok(Self {
            questions,
            current: 0,
            answers,
        })
    }

    pub fn current_question(&self) -> &PortfolioQuestion {
        &self.questions[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_first_question(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Percentage of the way through, counting the current question.
    pub fn progress_percent(&self) -> u8 {
        let len = self.questions.len();
        (((self.current + 1) * 200 + len) / (2 * len)) as u8
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.answers
            .get(&self.current_question().id)
            .map(String::as_str)
    }

    pub fn answers(&self) -> &BTreeMap<u32, String> {
        &self.answers
    }

    /// Answer the current question.
    ///
    /// Multiple-choice answers must match an option exactly. A blank text
    /// answer clears the stored one.
    pub fn answer(&mut self, value: &str) -> Result<(), CoreError> {
        let question = &self.questions[self.current];
        match &question.kind {
            PromptKind::MultipleChoice { options } => {
                if !options.iter().any(|o| o == value) {
                    return Err(CoreError::InvalidChoice {
                        question: question.id,
                        answer: value.to_string(),
                    });
                }
                self.answers.insert(question.id, value.to_string());
            }
            PromptKind::Text { .. } => {
                let value = value.trim();
                if value.is_empty() {
                    self.answers.remove(&question.id);
                } else {
                    self.answers.insert(question.id, value.to_string());
                }
            }
        }
        Ok(())
    }

    /// Move to the next question. Returns `false` on the last question.
    pub fn next(&mut self) -> bool {
        if self.is_last_question() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous question. Returns `false` on the first question.
    pub fn previous(&mut self) -> bool {
        if self.is_first_question() {
            return false;
        }
        self.current -= 1;
        true
    }
}
