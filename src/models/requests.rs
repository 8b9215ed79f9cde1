use crate::models::domain::MentorProfile;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Errors for malformed caller input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid learner skills JSON (expected an array of strings): {0}")]
    LearnerSkills(#[source] serde_json::Error),

    #[error("Invalid mentors JSON (expected an array of objects): {0}")]
    Mentors(#[source] serde_json::Error),

    #[error("Invalid ranking options: {0}")]
    Options(#[from] validator::ValidationErrors),
}

/// Parse the learner skill list
pub fn parse_learner_skills(json: &str) -> Result<Vec<String>, InputError> {
    serde_json::from_str(json).map_err(InputError::LearnerSkills)
}

/// Parse the mentor profile list
pub fn parse_mentors(json: &str) -> Result<Vec<MentorProfile>, InputError> {
    serde_json::from_str(json).map_err(InputError::Mentors)
}

/// Threshold and cutoff applied when ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct RankOptions {
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_score: f64,
    #[validate(range(min = 1))]
    pub max_results: usize,
}

impl RankOptions {
    pub const DEFAULT_MIN_SCORE: f64 = 0.1;
    pub const DEFAULT_MAX_RESULTS: usize = 10;

    /// Build validated options
    pub fn new(min_score: f64, max_results: usize) -> Result<Self, InputError> {
        let options = Self {
            min_score,
            max_results,
        };
        options.validate()?;
        Ok(options)
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: Self::DEFAULT_MIN_SCORE,
            max_results: Self::DEFAULT_MAX_RESULTS,
        }
    }
}

/// Request to rank mentors for a learner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankMentorsRequest {
    #[serde(alias = "learner_skills", rename = "learnerSkills")]
    pub learner_skills: Vec<String>,
    pub mentors: Vec<MentorProfile>,
    #[serde(default, alias = "min_score", rename = "minScore")]
    pub min_score: Option<f64>,
    #[serde(default, alias = "max_results", rename = "maxResults")]
    pub max_results: Option<usize>,
}

/// Request to score a single mentor for a learner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMentorRequest {
    #[serde(alias = "learner_skills", rename = "learnerSkills")]
    pub learner_skills: Vec<String>,
    pub mentor: MentorProfile,
}
