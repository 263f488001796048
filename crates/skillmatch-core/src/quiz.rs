//! Quiz session state machine.
//!
//! Walks the user through the questions one at a time, collecting answers
//! into an [`AnswerSet`], and scores the set once the last question is
//! confirmed.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{Question, OPTIONS_PER_QUESTION};
use crate::scoring::{compute_scores_with, AnswerPolicy, AnswerSet, CategoryScores};

/// Whether the quiz is still collecting answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    InProgress,
    Completed,
}

/// Outcome of confirming the current answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    /// Moved on to the question at this index.
    Advanced(usize),
    /// The last question was answered; these are the final scores.
    Completed(CategoryScores),
}

/// An in-progress run through a list of quiz questions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: AnswerSet,
    selected: Option<u8>,
    status: QuizStatus,
    scores: Option<CategoryScores>,
    policy: AnswerPolicy,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Result<Self, CoreError> {
        if questions.is_empty() {
            return Err(CoreError::EmptyQuiz);
        }
        Ok(Self {
            questions,
            current: 0,
            answers: AnswerSet::new(),
            selected: None,
            status: QuizStatus::InProgress,
            scores: None,
            policy: AnswerPolicy::default(),
        })
    }

    /// Use `policy` when scoring the completed answer set.
    pub fn with_policy(mut self, policy: AnswerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn current_question(&self) -> &Question {
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

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    /// Final scores, once the quiz is completed.
    pub fn scores(&self) -> Option<&CategoryScores> {
        self.scores.as_ref()
    }

    /// Percentage of the way through the quiz, counting the current question.
    pub fn progress_percent(&self) -> u8 {
        let len = self.questions.len();
        (((self.current + 1) * 200 + len) / (2 * len)) as u8
    }

    /// Choose an option for the current question without confirming it.
    ///
    /// The option must index into the question's own option list, and never
    /// past the five options the scoring scale has.
    pub fn select(&mut self, option: u8) -> Result<(), CoreError> {
        self.ensure_in_progress()?;
        let offered = self
            .current_question()
            .options
            .len()
            .min(OPTIONS_PER_QUESTION);
        if usize::from(option) >= offered {
            return Err(CoreError::InvalidInput {
                question: self.current,
                option,
                max: offered.saturating_sub(1) as u8,
            });
        }
        self.selected = Some(option);
        Ok(())
    }

    /// Confirm the selected option and move on.
    pub fn next(&mut self) -> Result<QuizStep, CoreError> {
        self.ensure_in_progress()?;
        let option = self.selected.ok_or(CoreError::NoSelection)?;
        self.answers.record(self.current, option);

        if !self.is_last_question() {
            self.current += 1;
            self.selected = self.answers.get(self.current);
            return Ok(QuizStep::Advanced(self.current));
        }

        let scores = compute_scores_with(&self.questions, &self.answers, self.policy)?;
        tracing::debug!(answers = self.answers.len(), "quiz completed");
        self.status = QuizStatus::Completed;
        self.scores = Some(scores.clone());
        Ok(QuizStep::Completed(scores))
    }

    /// Step back one question. Returns `false` on the first question.
    ///
    /// A pending selection on the question being left is kept, and the
    /// previous question's stored answer becomes the pending selection.
    pub fn previous(&mut self) -> Result<bool, CoreError> {
        self.ensure_in_progress()?;
        if self.current == 0 {
            return Ok(false);
        }
        if let Some(option) = self.selected {
            self.answers.record(self.current, option);
        }
        self.current -= 1;
        self.selected = self.answers.get(self.current);
        Ok(true)
    }

    /// Start over with no answers.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.selected = None;
        self.status = QuizStatus::InProgress;
        self.scores = None;
    }

    fn ensure_in_progress(&self) -> Result<(), CoreError> {
        match self.status {
            QuizStatus::InProgress => Ok(()),
            QuizStatus::Completed => Err(CoreError::QuizFinished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        ["technical", "collaboration", "analytical"]
            .iter()
            .enumerate()
            .map(|(i, c)| Question {
                id: i as u32 + 1,
                text: format!("How much do you enjoy {c} work?"),
                options: vec![
                    "Not at all".into(),
                    "Somewhat".into(),
                    "Moderately".into(),
                    "Very much".into(),
                    "Extremely".into(),
                ],
                category: c.to_string(),
            })
            .collect()
    }

    #[test]
    fn empty_quiz_is_rejected() {
        assert_eq!(QuizSession::new(vec![]).unwrap_err(), CoreError::EmptyQuiz);
    }

    #[test]
    fn full_run_includes_final_answer() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        quiz.select(4).unwrap();
        assert_eq!(quiz.next().unwrap(), QuizStep::Advanced(1));
        quiz.select(4).unwrap();
        assert_eq!(quiz.next().unwrap(), QuizStep::Advanced(2));
        quiz.select(4).unwrap();

        let QuizStep::Completed(scores) = quiz.next().unwrap() else {
            panic!("expected completion");
        };
        assert_eq!(scores.get("analytical"), Some(100));
        assert_eq!(scores.get("technical"), Some(100));
        assert_eq!(quiz.status(), QuizStatus::Completed);
        assert_eq!(quiz.scores(), Some(&scores));
    }

    #[test]
    fn next_without_selection_fails() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        assert_eq!(quiz.next().unwrap_err(), CoreError::NoSelection);
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn selection_is_cleared_after_advancing() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        quiz.select(2).unwrap();
        quiz.next().unwrap();
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        assert!(matches!(
            quiz.select(5),
            Err(CoreError::InvalidInput { option: 5, .. })
        ));
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn selection_is_limited_to_the_question_options() {
        let mut short = questions();
        short[0].options.truncate(3);
        let mut quiz = QuizSession::new(short).unwrap();

        for option in [3, 4] {
            assert_eq!(
                quiz.select(option).unwrap_err(),
                CoreError::InvalidInput {
                    question: 0,
                    option,
                    max: 2,
                }
            );
        }
        assert_eq!(quiz.selected(), None);

        quiz.select(2).unwrap();
        assert_eq!(quiz.next().unwrap(), QuizStep::Advanced(1));
        quiz.select(4).unwrap();
    }

    #[test]
    fn previous_restores_stored_answer() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        assert!(!quiz.previous().unwrap());

        quiz.select(3).unwrap();
        quiz.next().unwrap();
        quiz.select(1).unwrap();
        assert!(quiz.previous().unwrap());
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.selected(), Some(3));

        // Moving forward again restores the pending choice left on question 1.
        quiz.next().unwrap();
        assert_eq!(quiz.selected(), Some(1));
    }

    #[test]
    fn completed_quiz_rejects_changes_until_restart() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        for _ in 0..3 {
            quiz.select(0).unwrap();
            quiz.next().unwrap();
        }
        assert_eq!(quiz.select(1).unwrap_err(), CoreError::QuizFinished);
        assert_eq!(quiz.next().unwrap_err(), CoreError::QuizFinished);

        quiz.restart();
        assert_eq!(quiz.status(), QuizStatus::InProgress);
        assert_eq!(quiz.current_index(), 0);
        assert!(quiz.answers().is_empty());
        assert!(quiz.scores().is_none());
    }

    #[test]
    fn progress_counts_current_question() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        assert_eq!(quiz.progress_percent(), 33);
        quiz.select(0).unwrap();
        quiz.next().unwrap();
        assert_eq!(quiz.progress_percent(), 67);
        quiz.select(0).unwrap();
        quiz.next().unwrap();
        assert_eq!(quiz.progress_percent(), 100);
        assert!(quiz.is_last_question());
    }

    #[test]
    fn mixed_answers_score_per_category() {
        let mut quiz = QuizSession::new(questions()).unwrap();
        for option in [1, 2, 3] {
            quiz.select(option).unwrap();
            quiz.next().unwrap();
        }
        let scores = quiz.scores().unwrap();
        assert_eq!(scores.get("technical"), Some(25));
        assert_eq!(scores.get("collaboration"), Some(50));
        assert_eq!(scores.get("analytical"), Some(75));
    }
}
