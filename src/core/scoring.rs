use crate::models::{MentorProfile, ScoreBreakdown, ScoringWeights};

pub const VERIFIED_BONUS: f64 = 0.10;
pub const EDUCATION_BONUS: f64 = 0.05;
pub const WORK_EXPERIENCE_BONUS: f64 = 0.05;
pub const PER_SLOT_BONUS: f64 = 0.01;
pub const MAX_AVAILABILITY_BONUS: f64 = 0.10;
pub const MAX_EXPERTISE_BONUS: f64 = 0.3;

/// Calculate a bonus (0-0.3) reflecting mentor profile completeness
///
/// bonus = (
///     0.10 if verified +
///     0.05 if any education +
///     0.05 if any work experience +
///     min(0.10, 0.01 per available slot)
/// ) capped at 0.3
pub fn expertise_bonus(mentor: &MentorProfile) -> f64 {
    let mut bonus = 0.0;

    if mentor.verified() {
        bonus += VERIFIED_BONUS;
    }

    if mentor.has_education() {
        bonus += EDUCATION_BONUS;
    }

    if mentor.has_work_experience() {
        bonus += WORK_EXPERIENCE_BONUS;
    }

    let available_slots = mentor.available_slot_count();
    if available_slots > 0 {
        bonus += (available_slots as f64 * PER_SLOT_BONUS).min(MAX_AVAILABILITY_BONUS);
    }

    bonus.min(MAX_EXPERTISE_BONUS)
}

/// Weighted combination of the four signals
///
/// total = overlap * 0.4 + category * 0.3 + text * 0.2 + expertise * 0.1
#[inline]
pub fn weighted_total(signals: &ScoreBreakdown, weights: &ScoringWeights) -> f64 {
    signals.overlap * weights.overlap
        + signals.category * weights.category
        + signals.text * weights.text
        + signals.expertise * weights.expertise
}

/// Round to 3 decimal places.
///
/// Rounds the exact binary value, with exact ties going to the even digit
/// (0.0625 becomes 0.062). Float formatting is exact, so the decimal string
/// carries the correctly rounded digits.
#[inline]
pub fn round_score(score: f64) -> f64 {
    format!("{:.3}", score).parse().unwrap_or(score)
}

impl ScoreBreakdown {
    pub fn rounded(&self) -> Self {
        Self {
            overlap: round_score(self.overlap),
            category: round_score(self.category),
            text: round_score(self.text),
            expertise: round_score(self.expertise),
        }
    }
}
