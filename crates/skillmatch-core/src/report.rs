//! Assessment report types with JSON persistence and profile comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Career, Catalog};
use crate::scoring::{AnswerSet, CategoryScores};

/// The record of one completed assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the assessment was completed.
    pub created_at: DateTime<Utc>,
    /// Which catalog the quiz came from.
    pub catalog: CatalogSummary,
    /// Raw answers, keyed by question index.
    pub answers: AnswerSet,
    /// Percentage score per category.
    pub scores: CategoryScores,
    /// Recommended career ids, best match first.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Summary of a catalog (without the full entries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl From<&Catalog> for CatalogSummary {
    fn from(catalog: &Catalog) -> Self {
        Self {
            id: catalog.id.clone(),
            name: catalog.name.clone(),
            question_count: catalog.questions.len(),
        }
    }
}

impl AssessmentReport {
    pub fn new(
        catalog: &Catalog,
        answers: AnswerSet,
        scores: CategoryScores,
        recommendations: &[&Career],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            catalog: CatalogSummary::from(catalog),
            answers,
            scores,
            recommendations: recommendations.iter().map(|c| c.id.clone()).collect(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this report's skill profile against a baseline.
    ///
    /// A category counts as changed when its score moved by more than
    /// `threshold` percentage points.
    pub fn compare(&self, baseline: &AssessmentReport, threshold: u8) -> ProfileComparison {
        let threshold = i16::from(threshold);

        let mut declines = Vec::new();
        let mut gains = Vec::new();
        let mut unchanged = 0usize;
        let mut new_categories = 0usize;

        for (category, current) in self.scores.iter() {
            let Some(baseline_score) = baseline.scores.get(category) else {
                new_categories += 1;
                continue;
            };
            let delta = i16::from(current) - i16::from(baseline_score);
            let change = CategoryChange {
                category: category.to_string(),
                baseline_score,
                current_score: current,
                delta,
            };
            if delta < -threshold {
                declines.push(change);
            } else if delta > threshold {
                gains.push(change);
            } else {
                unchanged += 1;
            }
        }

        let removed_categories = baseline
            .scores
            .iter()
            .filter(|(c, _)| self.scores.get(c).is_none())
            .count();

        ProfileComparison {
            declines,
            gains,
            unchanged,
            new_categories,
            removed_categories,
        }
    }
}

/// Result of comparing two skill profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileComparison {
    /// Categories where the score went down.
    pub declines: Vec<CategoryChange>,
    /// Categories where the score went up.
    pub gains: Vec<CategoryChange>,
    /// Categories with no significant change.
    pub unchanged: usize,
    /// Categories in current but not baseline.
    pub new_categories: usize,
    /// Categories in baseline but not current.
    pub removed_categories: usize,
}

/// Score movement of a single category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryChange {
    pub category: String,
    pub baseline_score: u8,
    pub current_score: u8,
    /// Points gained (positive) or lost (negative).
    pub delta: i16,
}

impl ProfileComparison {
    /// Format the comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} declines, {} gains, {} unchanged\n\n",
            self.declines.len(),
            self.gains.len(),
            self.unchanged
        ));

        for (heading, changes) in [("Declines", &self.declines), ("Gains", &self.gains)] {
            if changes.is_empty() {
                continue;
            }
            md.push_str(&format!("### {heading}\n\n"));
            md.push_str("| Category | Baseline | Current | Delta |\n");
            md.push_str("|----------|----------|---------|-------|\n");
            for c in changes {
                md.push_str(&format!(
                    "| {} | {}% | {}% | {:+} |\n",
                    c.category, c.baseline_score, c.current_score, c.delta
                ));
            }
            md.push('\n');
        }

        md
    }

    /// Returns true if any category declined.
    pub fn has_declines(&self) -> bool {
        !self.declines.is_empty()
    }
}
