use crate::core::lexicon::Lexicon;
use std::collections::HashSet;
use std::sync::Arc;

/// Expands a canonical skill into related terms from the lexicon
#[derive(Debug, Clone)]
pub struct SynonymExpander {
    lexicon: Arc<Lexicon>,
}

impl SynonymExpander {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Synonyms and one-level-up hypernyms for `skill` as a noun.
    ///
    /// Excludes the skill itself and any term of two characters or fewer.
    /// Unknown words expand to the empty set.
    pub fn expand(&self, skill: &str) -> HashSet<String> {
        let skill = skill.trim().to_lowercase();
        if skill.is_empty() {
            return HashSet::new();
        }

        let mut related = HashSet::new();
        for synset in self.lexicon.noun_senses(&skill) {
            related.extend(synset.lemma_names());
            for hypernym in self.lexicon.hypernyms(synset) {
                related.extend(hypernym.lemma_names());
            }
        }

        related.retain(|term| *term != skill && term.chars().count() > 2);

        tracing::trace!("Expanded '{}' to {} related terms", skill, related.len());
        related
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Default for SynonymExpander {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_includes_synonyms_and_hypernyms() {
        let expander = SynonymExpander::default();
        let related = expander.expand("programming");

        assert!(related.contains("computer programming"));
        assert!(related.contains("creating by mental acts"));
        assert!(!related.contains("programming"));
    }

    #[test]
    fn test_expand_excludes_short_terms() {
        let expander = SynonymExpander::default();
        let related = expander.expand("artificial intelligence");

        assert!(related.contains("computer science"));
        // "AI" is a lemma of the same sense but too short
        assert!(!related.contains("ai"));
    }

    #[test]
    fn test_expand_only_one_level_up() {
        let expander = SynonymExpander::default();
        let related = expander.expand("linux");

        assert!(related.contains("operating system"));
        // software is the hypernym of operating system, two levels up
        assert!(!related.contains("software"));
    }

    #[test]
    fn test_expand_unknown_word() {
        let expander = SynonymExpander::default();
        assert!(expander.expand("kubernetes").is_empty());
        assert!(expander.expand("").is_empty());
    }

    #[test]
    fn test_expand_with_empty_lexicon() {
        let expander = SynonymExpander::new(Arc::new(Lexicon::default()));
        assert!(expander.expand("programming").is_empty());
    }
}
