//! Mentor Match - skill-based mentor matching engine
//!
//! This library scores how well each mentor's profile fits a learner's
//! declared skills and ranks mentors by that score. Scoring combines skill
//! set overlap (with lexicon-driven synonym credit), category overlap,
//! TF-IDF text similarity and a profile-completeness bonus.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Lexicon, RankResult, SkillMatcher};
pub use models::{MatchResult, MentorProfile, RankMentorsResponse, RankOptions, RankedMentor, ScoreBreakdown};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = SkillMatcher::default();
        let result = matcher.rank_mentors(&[], vec![MentorProfile::default()], &RankOptions::default());
        let response = RankMentorsResponse::from(result);
        assert_eq!(response.total_mentors_processed, 1);
        assert_eq!(response.mentors_returned, 0);
    }
}
