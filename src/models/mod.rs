// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{DaySlots, MatchResult, MentorProfile, RankedMentor, ScoreBreakdown, ScoringWeights, TimeSlot};
pub use requests::{parse_learner_skills, parse_mentors, InputError, RankMentorsRequest, RankOptions, ScoreMentorRequest};
pub use responses::{ErrorResponse, HealthResponse, RankMentorsResponse};
