use crate::core::normalizer::Normalizer;
use crate::core::synonyms::SynonymExpander;
use crate::core::vocabulary::categories_for;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Credit added per related (non-identical) skill pair
pub const SYNONYM_PARTIAL_CREDIT: f64 = 0.5;

/// Distinct non-empty canonical forms of `skills`
pub fn canonical_set(normalizer: &Normalizer, skills: &[String]) -> BTreeSet<String> {
    normalizer
        .normalize(skills)
        .into_iter()
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Jaccard similarity |A ∩ B| / |A ∪ B|, 0.0 when both are empty
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Set overlap between learner and mentor skills, with synonym credit.
///
/// Direct Jaccard over canonical sets, plus a fixed partial credit for every
/// pair of distinct skills the lexicon relates. The accumulated credit is
/// only bounded by the final clamp to 1.0.
pub fn skill_overlap(
    normalizer: &Normalizer,
    expander: &SynonymExpander,
    learner_skills: &[String],
    mentor_skills: &[String],
) -> f64 {
    let learner = canonical_set(normalizer, learner_skills);
    let mentor = canonical_set(normalizer, mentor_skills);
    canonical_overlap(expander, &learner, &mentor)
}

/// [`skill_overlap`] over already-canonical sets
pub fn canonical_overlap(
    expander: &SynonymExpander,
    learner: &BTreeSet<String>,
    mentor: &BTreeSet<String>,
) -> f64 {
    if learner.is_empty() || mentor.is_empty() {
        return 0.0;
    }

    let direct = jaccard(learner, mentor);

    let expansions: HashMap<&str, HashSet<String>> = learner
        .iter()
        .chain(mentor.iter())
        .map(|skill| (skill.as_str(), expander.expand(skill)))
        .collect();

    let mut synonym_credit = 0.0;
    for learner_skill in learner {
        for mentor_skill in mentor {
            if learner_skill == mentor_skill {
                continue;
            }
            let (Some(learner_related), Some(mentor_related)) =
                (expansions.get(learner_skill.as_str()), expansions.get(mentor_skill.as_str()))
            else {
                continue;
            };

            if mentor_related.contains(learner_skill)
                || learner_related.contains(mentor_skill)
                || !learner_related.is_disjoint(mentor_related)
            {
                synonym_credit += SYNONYM_PARTIAL_CREDIT;
            }
        }
    }

    tracing::trace!(
        "Overlap: direct={:.3}, synonym_credit={:.1}",
        direct,
        synonym_credit
    );

    (direct + synonym_credit).min(1.0)
}

/// Categories touched by any of `skills`
pub fn categories(skills: &[String]) -> BTreeSet<&'static str> {
    skills
        .iter()
        .flat_map(|skill| categories_for(&skill.to_lowercase()).collect::<Vec<_>>())
        .collect()
}

/// Jaccard similarity of the category sets of both parties.
///
/// Returns 0.0 when either party touches no category.
pub fn category_similarity(learner_skills: &[String], mentor_skills: &[String]) -> f64 {
    let learner = categories(learner_skills);
    let mentor = categories(mentor_skills);

    if learner.is_empty() || mentor.is_empty() {
        return 0.0;
    }

    jaccard(&learner, &mentor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::{Lexicon, Synset};
    use std::sync::Arc;

    fn skills(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn synset(id: &str, lemmas: &[&str], hypernyms: &[&str]) -> Synset {
        Synset {
            id: id.to_string(),
            lemmas: lemmas.iter().map(|s| s.to_string()).collect(),
            hypernyms: hypernyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_jaccard() {
        let a: BTreeSet<_> = ["a", "b", "c"].into_iter().collect();
        let b: BTreeSet<_> = ["b", "c", "d"].into_iter().collect();
        assert!((jaccard(&a, &b) - 0.5).abs() < 1e-12);
        assert_eq!(jaccard::<&str>(&BTreeSet::new(), &BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_canonical_set_drops_empty_forms() {
        let normalizer = Normalizer::default();
        let set = canonical_set(&normalizer, &skills(&["!!!", "the", "Python"]));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["python"]);
    }

    #[test]
    fn test_overlap_direct_only() {
        let normalizer = Normalizer::default();
        let expander = SynonymExpander::new(Arc::new(Lexicon::default()));

        let score = skill_overlap(
            &normalizer,
            &expander,
            &skills(&["Python", "Docker"]),
            &skills(&["python", "Figma"]),
        );
        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_empty_side() {
        let normalizer = Normalizer::default();
        let expander = SynonymExpander::default();
        assert_eq!(skill_overlap(&normalizer, &expander, &[], &skills(&["python"])), 0.0);
        assert_eq!(skill_overlap(&normalizer, &expander, &skills(&["!!!"]), &skills(&["!!!"])), 0.0);
    }

    #[test]
    fn test_overlap_synonym_credit_via_shared_hypernym() {
        let normalizer = Normalizer::default();
        let expander = SynonymExpander::default();

        // linux and unix are both operating systems
        let score = skill_overlap(&normalizer, &expander, &skills(&["Linux"]), &skills(&["Unix"]));
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_credit_accumulates_then_clamps() {
        let normalizer = Normalizer::default();
        let lexicon = Lexicon::from_synsets(vec![
            synset("lang.n.01", &["language"], &[]),
            synset("alpha.n.01", &["alpha"], &["lang.n.01"]),
            synset("beta.n.01", &["beta"], &["lang.n.01"]),
            synset("gamma.n.01", &["gamma"], &["lang.n.01"]),
        ]);
        let expander = SynonymExpander::new(Arc::new(lexicon));

        // alpha~beta and alpha~gamma each earn 0.5
        let score = skill_overlap(
            &normalizer,
            &expander,
            &skills(&["alpha"]),
            &skills(&["beta", "gamma"]),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_overlap_symmetric() {
        let normalizer = Normalizer::default();
        let expander = SynonymExpander::default();
        let a = skills(&["Linux", "Python", "Statistics"]);
        let b = skills(&["Unix", "python", "Java"]);

        assert_eq!(
            skill_overlap(&normalizer, &expander, &a, &b),
            skill_overlap(&normalizer, &expander, &b, &a)
        );
    }

    #[test]
    fn test_category_similarity_shared_domain() {
        let score = category_similarity(
            &skills(&["JavaScript", "React", "Node.js"]),
            &skills(&["javascript", "react.js", "Python"]),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_category_similarity_no_category() {
        assert_eq!(category_similarity(&skills(&["cooking"]), &skills(&["docker"])), 0.0);
    }

    #[test]
    fn test_category_similarity_partial() {
        // jenkins: DevOps; aws: DevOps + Cloud Computing
        let score = category_similarity(&skills(&["Jenkins"]), &skills(&["AWS"]));
        assert!((score - 0.5).abs() < 1e-12);
    }
}
