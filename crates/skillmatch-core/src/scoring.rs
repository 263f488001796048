//! Category-normalized quiz scoring.
//!
//! Each category's score is the sum of the selected option indices of its
//! questions divided by the maximum attainable sum, as a rounded percentage.
//! An unanswered question counts as option 0, so skipping lowers the score.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{Question, MAX_OPTION_INDEX};

/// Selected option per question index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<usize, u8>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an answer set where the n-th value answers question n.
    pub fn from_positional(options: &[u8]) -> Self {
        options.iter().copied().enumerate().collect()
    }

    /// Record (or overwrite) the answer for a question.
    pub fn record(&mut self, question: usize, option: u8) {
        self.0.insert(question, option);
    }

    pub fn get(&self, question: usize) -> Option<u8> {
        self.0.get(&question).copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(question index, option)` pairs in question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0.iter().map(|(&q, &o)| (q, o))
    }
}

impl FromIterator<(usize, u8)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (usize, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How to treat an answer whose option index exceeds [`MAX_OPTION_INDEX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerPolicy {
    /// Fail with [`CoreError::InvalidInput`].
    #[default]
    Reject,
    /// Treat the answer as the maximum option.
    Clamp,
}

impl std::str::FromStr for AnswerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(AnswerPolicy::Reject),
            "clamp" => Ok(AnswerPolicy::Clamp),
            other => Err(format!("unknown answer policy: {other}")),
        }
    }
}

/// Percentage score (0-100) per category, ordered by category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores(BTreeMap<String, u8>);

impl CategoryScores {
    pub fn get(&self, category: &str) -> Option<u8> {
        self.0.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.0.iter().map(|(c, &s)| (c.as_str(), s))
    }

    /// The category with the highest score; ties go to the first by name.
    pub fn strongest(&self) -> Option<(&str, u8)> {
        self.iter()
            .fold(None, |best: Option<(&str, u8)>, (c, s)| match best {
                Some((_, b)) if b >= s => best,
                _ => Some((c, s)),
            })
    }
}

impl FromIterator<(String, u8)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Compute per-category scores, rejecting out-of-range answers.
pub fn compute_scores(
    questions: &[Question],
    answers: &AnswerSet,
) -> Result<CategoryScores, CoreError> {
    compute_scores_with(questions, answers, AnswerPolicy::Reject)
}

/// Compute per-category scores with an explicit out-of-range policy.
///
/// Answers keyed to indices past the end of `questions` belong to no
/// category and are ignored.
pub fn compute_scores_with(
    questions: &[Question],
    answers: &AnswerSet,
    policy: AnswerPolicy,
) -> Result<CategoryScores, CoreError> {
    // category -> (sum of selected indices, question count)
    let mut totals: BTreeMap<&str, (u32, u32)> = BTreeMap::new();

    for (index, question) in questions.iter().enumerate() {
        let selected = match answers.get(index) {
            None => 0,
            Some(option) if option <= MAX_OPTION_INDEX => option,
            Some(option) => match policy {
                AnswerPolicy::Reject => {
                    return Err(CoreError::InvalidInput {
                        question: index,
                        option,
                        max: MAX_OPTION_INDEX,
                    })
                }
                AnswerPolicy::Clamp => {
                    tracing::warn!(
                        question = index,
                        option,
                        "answer out of range, clamping to {MAX_OPTION_INDEX}"
                    );
                    MAX_OPTION_INDEX
                }
            },
        };

        let entry = totals.entry(question.category.as_str()).or_insert((0, 0));
        entry.0 += u32::from(selected);
        entry.1 += 1;
    }

    let scores: CategoryScores = totals
        .into_iter()
        .map(|(category, (sum, count))| (category.to_string(), percentage(sum, count)))
        .collect();

    tracing::debug!(categories = scores.len(), "computed category scores");
    Ok(scores)
}

/// `round(100 * sum / (MAX_OPTION_INDEX * count))`, half-up, in integers.
fn percentage(sum: u32, count: u32) -> u8 {
    let max = u32::from(MAX_OPTION_INDEX) * count;
    if max == 0 {
        return 0;
    }
    ((200 * sum + max) / (2 * max)).min(100) as u8
}
