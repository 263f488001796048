//! Core data model types for skillmatch.
//!
//! These are the static, read-only catalog entries that the scoring and
//! filtering logic operate on: quiz questions, learning resources, and
//! career paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest option index a quiz answer may select.
///
/// Every question offers five choices, so answers range over `0..=4`.
pub const MAX_OPTION_INDEX: u8 = 4;

/// Number of choices every quiz question is expected to offer.
pub const OPTIONS_PER_QUESTION: usize = MAX_OPTION_INDEX as usize + 1;

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier of the question within its catalog.
    pub id: u32,
    /// The question text shown to the user.
    pub text: String,
    /// Labeled choices, from weakest (index 0) to strongest.
    pub options: Vec<String>,
    /// Skill category this question contributes to.
    pub category: String,
}

/// Difficulty level of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels in ascending difficulty.
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// A learning resource in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    /// Who publishes the resource (e.g. "Coursera").
    pub provider: String,
    /// Resource type such as "Course" or "Bootcamp".
    #[serde(rename = "type")]
    pub kind: String,
    pub level: Level,
    /// Free-form duration, e.g. "20 hours" or "Self-paced".
    pub duration: String,
    /// Average rating out of 5.
    pub rating: f32,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Resource {
    /// Returns `true` if any tag contains `needle` (already lower-cased).
    pub(crate) fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// A career path with its pre-computed match percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// How well this career matches the user, 0-100.
    pub match_percentage: u8,
    /// Salary range as displayed, e.g. "$105,000 - $150,000".
    #[serde(default)]
    pub salary: String,
    /// Job growth outlook as displayed.
    #[serde(default)]
    pub growth: String,
    /// Key skills for this career.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub icon: String,
}

/// A complete catalog: the quiz plus the resource and career listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Unique identifier for this catalog.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub careers: Vec<Career>,
}

impl Catalog {
    /// Distinct question categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.category.as_str()) {
                seen.push(q.category.as_str());
            }
        }
        seen
    }
}
