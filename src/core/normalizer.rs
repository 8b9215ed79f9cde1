use crate::core::lexicon::Lexicon;
use crate::core::vocabulary::{resolve_alias, VOCABULARY_WORDS};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

/// English stop words, filtered from skills before comparison
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
        "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
        "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
        "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
        "with", "about", "against", "between", "into", "through", "during", "before", "after",
        "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
        "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
        "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
        "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
        "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn",
        "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
        "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
        "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
    ]
    .into_iter()
    .collect()
});

/// Irregular plural → base form
static NOUN_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "people"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("vertices", "vertex"),
        ("analyses", "analysis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("diagnoses", "diagnosis"),
        ("series", "series"),
        ("species", "species"),
        ("movies", "movie"),
        ("cookies", "cookie"),
    ]
    .into_iter()
    .collect()
});

/// Nouns that end in "s" but are not plurals
static UNINFLECTED_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "devops", "mlops", "dataops", "gitops", "secops", "analytics", "graphics", "physics",
        "mathematics", "economics", "econometrics", "ethics", "logistics", "linguistics",
        "robotics", "electronics", "genomics", "bioinformatics", "statistics", "informatics",
        "mechanics", "dynamics", "kinematics", "semantics", "ergonomics", "aerodynamics",
        "thermodynamics", "acoustics", "optics", "politics", "aesthetics", "athletics",
        "news", "rails", "sales", "jenkins", "kubernetes", "pandas", "express", "less", "sass",
        "redis", "postgres", "ads", "windows",
    ]
    .into_iter()
    .collect()
});

/// Regular plural suffixes, tried in order
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("sses", "ss"),
    ("xes", "x"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("zes", "z"),
    ("s", ""),
];

/// Endings that already look singular
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Turns raw skill strings into canonical, comparable forms
#[derive(Debug, Clone)]
pub struct Normalizer {
    lexicon: Arc<Lexicon>,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Normalize each skill, preserving length and order.
    ///
    /// Lowercase, strip punctuation, drop stop words and single characters,
    /// lemmatize, then resolve aliases. A skill with no surviving tokens
    /// normalizes to the empty string.
    pub fn normalize(&self, skills: &[String]) -> Vec<String> {
        skills.iter().map(|skill| self.normalize_skill(skill)).collect()
    }

    pub fn normalize_skill(&self, skill: &str) -> String {
        let cleaned: String = skill
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| is_word_char(*c) || c.is_whitespace())
            .collect();

        let normalized = cleaned
            .split_whitespace()
            .filter(|token| keep_token(token))
            .map(|token| self.lemmatize(token))
            .collect::<Vec<_>>()
            .join(" ");

        match resolve_alias(&normalized) {
            Some(canonical) => canonical.to_string(),
            None => normalized,
        }
    }

    /// Token stream for free-text comparison: lowercase word runs with stop
    /// words and single characters removed, lemmatized. No alias resolution.
    pub fn preprocess(&self, skills: &[String]) -> Vec<String> {
        skills
            .iter()
            .flat_map(|skill| {
                let lower = skill.to_lowercase();
                lower
                    .split(|c: char| !is_word_char(c))
                    .filter(|token| keep_token(token))
                    .map(|token| self.lemmatize(token))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Reduce a lowercase noun to its base form
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = NOUN_EXCEPTIONS.get(word) {
            return (*base).to_string();
        }

        if word.chars().count() <= 3
            || SINGULAR_ENDINGS.iter().any(|ending| word.ends_with(ending))
            || self.is_base_form(word)
        {
            return word.to_string();
        }

        for (suffix, replacement) in NOUN_SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                return format!("{}{}", stem, replacement);
            }
        }

        word.to_string()
    }

    fn is_base_form(&self, word: &str) -> bool {
        UNINFLECTED_NOUNS.contains(word)
            || VOCABULARY_WORDS.contains(word)
            || self.lexicon.contains(word)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline]
fn keep_token(token: &str) -> bool {
    token.chars().count() > 1 && !is_stop_word(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_preserves_length_and_order() {
        let normalizer = Normalizer::default();
        let result = normalizer.normalize(&skills(&["Python", "React.js", "ML"]));
        assert_eq!(result, vec!["python", "react", "machine learning"]);
    }

    #[test]
    fn test_normalize_strips_punctuation_and_resolves_alias() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize_skill("Node.js"), "node.js");
        assert_eq!(normalizer.normalize_skill("  K8s "), "kubernetes");
        assert_eq!(normalizer.normalize_skill("CI/CD"), "ci/cd");
    }

    #[test]
    fn test_normalize_removes_stop_words_and_short_tokens() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize_skill("The art of testing"), "art testing");
        assert_eq!(normalizer.normalize_skill("R"), "");
        assert_eq!(normalizer.normalize_skill("!!!"), "");
    }

    #[test]
    fn test_normalize_lemmatizes_plurals() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize_skill("Neural Networks"), "neural network");
        assert_eq!(normalizer.normalize_skill("Databases"), "database");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = Normalizer::default();
        for raw in ["Node.js", "ReactJS", "Neural Networks", "Boxes", "Libraries", "CI/CD", "ML"] {
            let once = normalizer.normalize_skill(raw);
            assert_eq!(normalizer.normalize_skill(&once), once, "not idempotent for {}", raw);
        }
    }

    #[test]
    fn test_lemmatize_rules() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.lemmatize("libraries"), "library");
        assert_eq!(normalizer.lemmatize("classes"), "class");
        assert_eq!(normalizer.lemmatize("boxes"), "box");
        assert_eq!(normalizer.lemmatize("patches"), "patch");
        assert_eq!(normalizer.lemmatize("children"), "child");
        assert_eq!(normalizer.lemmatize("analyses"), "analysis");
    }

    #[test]
    fn test_lemmatize_keeps_known_base_forms() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.lemmatize("pandas"), "pandas");
        assert_eq!(normalizer.lemmatize("kubernetes"), "kubernetes");
        assert_eq!(normalizer.lemmatize("statistics"), "statistics");
        assert_eq!(normalizer.lemmatize("status"), "status");
        assert_eq!(normalizer.lemmatize("aws"), "aws");
    }

    #[test]
    fn test_uninflected_nouns_keep_trailing_s() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(&skills(&["DevOps", "Analytics"])), vec!["devops", "analytics"]);
        assert_eq!(normalizer.lemmatize("robotics"), "robotics");
        assert_eq!(normalizer.lemmatize("news"), "news");
        for raw in ["DevOps", "Data Analytics", "Computer Graphics"] {
            let once = normalizer.normalize_skill(raw);
            assert_eq!(normalizer.normalize_skill(&once), once);
        }
    }

    #[test]
    fn test_preprocess_splits_on_punctuation() {
        let normalizer = Normalizer::default();
        let tokens = normalizer.preprocess(&skills(&["Node.js", "Building REST APIs"]));
        assert_eq!(tokens, vec!["node", "js", "building", "rest", "apis"]);
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("it"));
        assert!(!is_stop_word("python"));
    }
}
