use crate::core::{
    lexicon::Lexicon,
    normalizer::Normalizer,
    scoring::{expertise_bonus, round_score, weighted_total},
    similarity::{canonical_overlap, canonical_set, category_similarity},
    synonyms::SynonymExpander,
    text::{text_similarity, TfidfVectorizer},
};
use crate::models::{MatchResult, MentorProfile, RankOptions, RankedMentor, ScoreBreakdown, ScoringWeights};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a ranking run
#[derive(Debug)]
pub struct RankResult {
    pub ranked_mentors: Vec<RankedMentor>,
    pub total_mentors_processed: usize,
}

/// Main matching orchestrator - scores and ranks mentors for a learner
///
/// # Pipeline Stages
/// 1. Skill normalization and synonym expansion
/// 2. Overlap, category and text similarity
/// 3. Expertise bonus from profile completeness
/// 4. Weighted combination, threshold and ranking
///
/// The lexicon is shared read-only, so a matcher is cheap to clone and safe
/// to use from several threads at once.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    normalizer: Normalizer,
    expander: SynonymExpander,
    vectorizer: TfidfVectorizer,
    weights: ScoringWeights,
}

impl SkillMatcher {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            normalizer: Normalizer::new(Arc::clone(&lexicon)),
            expander: SynonymExpander::new(lexicon),
            vectorizer: TfidfVectorizer::default(),
            weights: ScoringWeights::FIXED,
        }
    }

    pub fn with_builtin_lexicon() -> Self {
        Self::new(Lexicon::builtin())
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn expander(&self) -> &SynonymExpander {
        &self.expander
    }

    /// Number of synsets in the lexicon backing synonym expansion
    pub fn lexicon_size(&self) -> usize {
        self.expander.lexicon().len()
    }

    /// Canonical forms of `skills`, same length and order
    pub fn normalize_skills(&self, skills: &[String]) -> Vec<String> {
        self.normalizer.normalize(skills)
    }

    /// Calculate the full match result for one mentor
    ///
    /// Returns an all-zero result when either skill list is empty.
    pub fn calculate_matching_score(&self, learner_skills: &[String], mentor: &MentorProfile) -> MatchResult {
        let mentor_skills = mentor.skills();
        if learner_skills.is_empty() || mentor_skills.is_empty() {
            return MatchResult::default();
        }

        let learner_canonical = canonical_set(&self.normalizer, learner_skills);
        let mentor_canonical = canonical_set(&self.normalizer, mentor_skills);

        let signals = ScoreBreakdown {
            overlap: canonical_overlap(&self.expander, &learner_canonical, &mentor_canonical),
            category: category_similarity(learner_skills, mentor_skills),
            text: text_similarity(&self.normalizer, &self.vectorizer, learner_skills, mentor_skills),
            expertise: expertise_bonus(mentor),
        };

        let matched_skills: Vec<String> = learner_canonical
            .intersection(&mentor_canonical)
            .cloned()
            .collect();

        let total_score = round_score(weighted_total(&signals, &self.weights));

        tracing::trace!(
            "Scored mentor: total={:.3}, breakdown={:?}, matched={:?}",
            total_score,
            signals,
            matched_skills
        );

        MatchResult {
            breakdown: signals.rounded(),
            total_score,
            matched_skills,
        }
    }

    /// Rank mentors for a learner
    ///
    /// Keeps mentors scoring at least `options.min_score`, sorts by score
    /// (descending, ties in input order) and returns at most
    /// `options.max_results` of them.
    pub fn rank_mentors(
        &self,
        learner_skills: &[String],
        mentors: Vec<MentorProfile>,
        options: &RankOptions,
    ) -> RankResult {
        let total_mentors_processed = mentors.len();

        let scored = self.score_all(learner_skills, mentors);

        let mut ranked_mentors: Vec<RankedMentor> = scored
            .into_iter()
            .filter(|(result, _)| result.total_score >= options.min_score)
            .map(|(result, mentor)| RankedMentor::new(mentor, result))
            .collect();

        // Stable sort: equal scores keep their input order
        ranked_mentors.sort_by(|a, b| {
            b.matching_score
                .partial_cmp(&a.matching_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked_mentors.truncate(options.max_results);

        tracing::debug!(
            "Ranked {} of {} mentors (min_score: {}, max_results: {})",
            ranked_mentors.len(),
            total_mentors_processed,
            options.min_score,
            options.max_results
        );

        RankResult {
            ranked_mentors,
            total_mentors_processed,
        }
    }

    /// Score a single mentor with no threshold
    pub fn score_mentor(&self, learner_skills: &[String], mentor: MentorProfile) -> Option<RankedMentor> {
        let options = RankOptions {
            min_score: 0.0,
            max_results: 1,
        };
        self.rank_mentors(learner_skills, vec![mentor], &options)
            .ranked_mentors
            .into_iter()
            .next()
    }

    /// Score every mentor, keeping input order
    #[cfg(feature = "parallel")]
    fn score_all(&self, learner_skills: &[String], mentors: Vec<MentorProfile>) -> Vec<(MatchResult, MentorProfile)> {
        mentors
            .into_par_iter()
            .map(|mentor| (self.calculate_matching_score(learner_skills, &mentor), mentor))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all(&self, learner_skills: &[String], mentors: Vec<MentorProfile>) -> Vec<(MatchResult, MentorProfile)> {
        mentors
            .into_iter()
            .map(|mentor| (self.calculate_matching_score(learner_skills, &mentor), mentor))
            .collect()
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::with_builtin_lexicon()
    }
}
