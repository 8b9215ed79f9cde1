use crate::core::RankResult;
use crate::models::domain::RankedMentor;
use crate::models::requests::RankOptions;
use serde::{Deserialize, Serialize};

/// Ranking output document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankMentorsResponse {
    pub ranked_mentors: Vec<RankedMentor>,
    pub total_mentors_processed: usize,
    pub mentors_returned: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_criteria: Option<RankOptions>,
}

impl From<RankResult> for RankMentorsResponse {
    fn from(result: RankResult) -> Self {
        Self {
            mentors_returned: result.ranked_mentors.len(),
            ranked_mentors: result.ranked_mentors,
            total_mentors_processed: result.total_mentors_processed,
            matching_criteria: None,
        }
    }
}

impl RankMentorsResponse {
    pub fn with_criteria(mut self, options: RankOptions) -> Self {
        self.matching_criteria = Some(options);
        self
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub lexicon_synsets: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
