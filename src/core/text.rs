//! Free-text similarity over skill lists.
//!
//! Each party's skills become one document; the two documents are embedded in
//! a TF-IDF vector space built from just those two documents and compared by
//! cosine similarity.

use crate::core::normalizer::Normalizer;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use thiserror::Error;

/// English stop words removed from documents before n-grams are built.
/// This is the list scikit-learn ships as `ENGLISH_STOP_WORDS`, so it includes
/// content words such as "computer", "system" and "interest".
pub static ENGLISH_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
        "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
        "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
        "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
        "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
        "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
        "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
        "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg",
        "eight", "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even",
        "ever", "every", "everyone", "everything", "everywhere", "except", "few", "fifteen",
        "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty",
        "found", "four", "from", "front", "full", "further", "get", "give", "go", "had", "has",
        "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
        "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred",
        "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself",
        "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
        "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
        "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
        "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
        "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
        "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
        "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem",
        "seemed", "seeming", "seems", "serious", "several", "she", "should", "show", "side",
        "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
        "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
        "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
        "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
        "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
        "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
        "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
        "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
        "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
        "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
        "would", "yet", "you", "your", "yours", "yourself", "yourselves", "computer", "fify",
        "thickv",
    ]
    .into_iter()
    .collect()
});

/// Errors that can occur while vectorizing documents
#[derive(Debug, Error, PartialEq)]
pub enum TextSimilarityError {
    #[error("Empty vocabulary: documents contain no terms after preprocessing")]
    EmptyVocabulary,
}

/// TF-IDF vectorizer with smoothed idf and l2-normalized rows
#[derive(Debug, Clone, Copy)]
pub struct TfidfVectorizer {
    pub ngram_range: (usize, usize),
    pub max_features: usize,
    /// Tokens dropped before n-grams are formed; `None` keeps every token
    pub stop_words: Option<&'static HashSet<&'static str>>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            ngram_range: (1, 2),
            max_features: 1000,
            stop_words: Some(&*ENGLISH_STOP_WORDS),
        }
    }
}

impl TfidfVectorizer {
    /// Fit a vocabulary on `documents` and return one dense row per document
    pub fn fit_transform<const N: usize>(
        &self,
        documents: &[String; N],
    ) -> Result<[Vec<f64>; N], TextSimilarityError> {
        let term_counts: [HashMap<String, usize>; N] =
            documents.each_ref().map(|doc| self.count_ngrams(doc));

        let vocabulary = self.build_vocabulary(&term_counts);
        if vocabulary.is_empty() {
            return Err(TextSimilarityError::EmptyVocabulary);
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1
        let n_docs = N as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = term_counts.iter().filter(|counts| counts.contains_key(term)).count() as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = term_counts.each_ref().map(|counts| {
            let mut row: Vec<f64> = vocabulary
                .iter()
                .zip(&idf)
                .map(|(term, idf)| counts.get(term).copied().unwrap_or(0) as f64 * idf)
                .collect();
            l2_normalize(&mut row);
            row
        });

        Ok(rows)
    }

    fn count_ngrams(&self, document: &str) -> HashMap<String, usize> {
        let tokens: Vec<&str> = document
            .split_whitespace()
            .filter(|token| self.stop_words.map_or(true, |stop| !stop.contains(token)))
            .collect();
        let (min_n, max_n) = self.ngram_range;
        let mut counts = HashMap::new();

        for n in min_n.max(1)..=max_n {
            for window in tokens.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Terms ordered by corpus frequency (ties alphabetical), capped at `max_features`
    fn build_vocabulary(&self, term_counts: &[HashMap<String, usize>]) -> Vec<String> {
        let mut totals: HashMap<&str, usize> = HashMap::new();
        for counts in term_counts {
            for (term, count) in counts {
                *totals.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term.to_string()).collect();
        vocabulary.sort();
        vocabulary
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|v| *v /= norm);
    }
}

/// Cosine similarity of two equal-length vectors; 0.0 if either is zero
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Cosine similarity between the two parties' preprocessed skill documents
pub fn try_text_similarity(
    normalizer: &Normalizer,
    vectorizer: &TfidfVectorizer,
    learner_skills: &[String],
    mentor_skills: &[String],
) -> Result<f64, TextSimilarityError> {
    let documents = [
        normalizer.preprocess(learner_skills).join(" "),
        normalizer.preprocess(mentor_skills).join(" "),
    ];

    let [learner, mentor] = vectorizer.fit_transform(&documents)?;
    Ok(cosine_similarity(&learner, &mentor))
}

/// Like [`try_text_similarity`], degrading to 0.0 on failure
pub fn text_similarity(
    normalizer: &Normalizer,
    vectorizer: &TfidfVectorizer,
    learner_skills: &[String],
    mentor_skills: &[String],
) -> f64 {
    try_text_similarity(normalizer, vectorizer, learner_skills, mentor_skills).unwrap_or_else(|e| {
        tracing::warn!("Text similarity failed, scoring 0.0: {}", e);
        0.0
    })
}
