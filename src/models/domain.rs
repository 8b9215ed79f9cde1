use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Mentor profile as supplied by the caller.
///
/// Only the fields that feed scoring are typed; every other key is kept in
/// `extra` so a ranked mentor serializes back to the original object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentorProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(rename = "isVerified", default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Value>>,
    #[serde(rename = "workExperiences", default, skip_serializing_if = "Option::is_none")]
    pub work_experiences: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<BTreeMap<String, DaySlots>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MentorProfile {
    /// Profile with only a skills list
    pub fn with_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: Some(skills.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }

    /// Helper to get is_verified as a bool, defaulting to false
    pub fn verified(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }

    pub fn has_education(&self) -> bool {
        self.education.as_ref().is_some_and(|entries| !entries.is_empty())
    }

    pub fn has_work_experience(&self) -> bool {
        self.work_experiences.as_ref().is_some_and(|entries| !entries.is_empty())
    }

    /// Time slots marked available, across all days
    pub fn available_slot_count(&self) -> usize {
        self.availability
            .iter()
            .flat_map(|days| days.values())
            .map(DaySlots::available_count)
            .sum()
    }
}

/// One day of a weekly availability map.
///
/// Anything that is not a list of slots (e.g. a document id stored next to
/// the days) is carried through untouched and counts as no availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaySlots {
    Slots(Vec<TimeSlot>),
    Other(Value),
}

impl DaySlots {
    pub fn available_count(&self) -> usize {
        match self {
            DaySlots::Slots(slots) => slots.iter().filter(|slot| slot.available()).count(),
            DaySlots::Other(_) => 0,
        }
    }
}

/// Availability time slot.
///
/// `isAvailable` is kept as raw JSON so a null, a number or a string flag
/// neither drops the whole day nor changes on re-serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(
        rename = "isAvailable",
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_available: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TimeSlot {
    /// Truthiness of the `isAvailable` flag; a missing flag is unavailable
    pub fn available(&self) -> bool {
        match &self.is_available {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }
}

// Distinguishes an explicit `null` from a missing key
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The four component scores, each rounded to 3 decimals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overlap: f64,
    pub category: f64,
    pub text: f64,
    pub expertise: f64,
}

/// Scores for one learner–mentor pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub breakdown: ScoreBreakdown,
    pub total_score: f64,
    pub matched_skills: Vec<String>,
}

/// Mentor profile augmented with its matching scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMentor {
    #[serde(flatten)]
    pub mentor: MentorProfile,
    pub matching_score: f64,
    pub matched_skills: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
}

impl RankedMentor {
    /// Augmentation keys written by ranking
    pub const AUGMENTED_FIELDS: [&'static str; 3] =
        ["matching_score", "matched_skills", "score_breakdown"];

    pub fn new(mut mentor: MentorProfile, result: MatchResult) -> Self {
        // Stale augmentation from a previous run must not shadow the new scores
        for field in Self::AUGMENTED_FIELDS {
            mentor.extra.remove(field);
        }

        Self {
            mentor,
            matching_score: result.total_score,
            matched_skills: result.matched_skills,
            score_breakdown: result.breakdown,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub overlap: f64,
    pub category: f64,
    pub text: f64,
    pub expertise: f64,
}

impl ScoringWeights {
    /// The fixed production weights; they sum to 1.0
    pub const FIXED: ScoringWeights = ScoringWeights {
        overlap: 0.4,
        category: 0.3,
        text: 0.2,
        expertise: 0.1,
    };
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::FIXED
    }
}
