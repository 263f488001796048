//! Career recommendations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::Career;

/// Default number of careers shown as recommendations.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;

/// Display band for a career's match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// 85% and above.
    Strong,
    /// 70% to 84%.
    Good,
    Fair,
}

impl MatchTier {
    pub fn for_percentage(percentage: u8) -> Self {
        if percentage >= 85 {
            MatchTier::Strong
        } else if percentage >= 70 {
            MatchTier::Good
        } else {
            MatchTier::Fair
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Strong => write!(f, "strong"),
            MatchTier::Good => write!(f, "good"),
            MatchTier::Fair => write!(f, "fair"),
        }
    }
}

/// The `limit` best-matching careers, highest match first.
///
/// Careers with equal match keep their catalog order.
pub fn recommend(careers: &[Career], limit: usize) -> Vec<&Career> {
    let mut ranked: Vec<&Career> = careers.iter().collect();
    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    ranked.truncate(limit);
    ranked
}

/// Look up a career by id.
pub fn find_career<'a>(careers: &'a [Career], id: &str) -> Result<&'a Career, CoreError> {
    careers
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| CoreError::UnknownCareer(id.to_string()))
}
