//! Noun-sense lexical database used for synonym expansion.
//!
//! The lexicon is shaped like WordNet's noun hierarchy: each synset carries
//! its lemma names and the ids of its direct hypernyms. A built-in lexicon is
//! embedded in the binary and parsed once on first use; deployments can merge
//! an additional lexicon file over it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

const BUILTIN_LEXICON: &str = include_str!("../../data/lexicon.json");

static BUILTIN: LazyLock<Arc<Lexicon>> = LazyLock::new(|| match Lexicon::from_json(BUILTIN_LEXICON) {
    Ok(lexicon) => {
        tracing::debug!("Built-in lexicon loaded ({} synsets)", lexicon.len());
        Arc::new(lexicon)
    }
    Err(e) => {
        tracing::warn!("Built-in lexicon failed to parse, synonym expansion disabled: {}", e);
        Arc::new(Lexicon::default())
    }
});

/// Errors that can occur while loading a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid lexicon JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One noun sense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synset {
    pub id: String,
    pub lemmas: Vec<String>,
    #[serde(default)]
    pub hypernyms: Vec<String>,
}

impl Synset {
    /// Lemma names in comparable form: lowercase, underscores as spaces
    pub fn lemma_names(&self) -> impl Iterator<Item = String> + '_ {
        self.lemmas.iter().map(|lemma| display_form(lemma))
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct LexiconFile {
    synsets: Vec<Synset>,
}

/// Indexed, read-only lexicon
#[derive(Debug, Default)]
pub struct Lexicon {
    synsets: Vec<Synset>,
    by_id: HashMap<String, usize>,
    by_lemma: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    /// Shared handle to the embedded lexicon
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_synsets(synsets: Vec<Synset>) -> Self {
        let mut lexicon = Self {
            synsets,
            ..Self::default()
        };
        lexicon.reindex();
        lexicon
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Ok(Self::from_synsets(file.synsets))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Built-in lexicon with `path` merged over it
    pub fn builtin_with<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let extra = Self::from_path(path)?;
        let mut lexicon = Self::from_synsets(BUILTIN.synsets.clone());
        lexicon.merge(extra);
        Ok(lexicon)
    }

    /// Merge another lexicon into this one; synsets with the same id are replaced
    pub fn merge(&mut self, other: Lexicon) {
        for synset in other.synsets {
            let existing = self.by_id.get(&synset.id).copied();
            match existing {
                Some(idx) => self.synsets[idx] = synset,
                None => {
                    self.by_id.insert(synset.id.clone(), self.synsets.len());
                    self.synsets.push(synset);
                }
            }
        }
        self.reindex();
    }

    fn reindex(&mut self) {
        self.by_id.clear();
        self.by_lemma.clear();
        for (idx, synset) in self.synsets.iter().enumerate() {
            self.by_id.insert(synset.id.clone(), idx);
            for lemma in &synset.lemmas {
                let senses = self.by_lemma.entry(lemma.to_lowercase()).or_default();
                if !senses.contains(&idx) {
                    senses.push(idx);
                }
            }
        }
    }

    /// Noun senses for `word`, in lexicon order. Spaces match underscores.
    pub fn noun_senses(&self, word: &str) -> impl Iterator<Item = &Synset> + '_ {
        let key = lookup_form(word);
        self.by_lemma
            .get(&key)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.synsets[idx])
    }

    /// Direct hypernyms of a synset; unknown ids are skipped
    pub fn hypernyms<'a>(&'a self, synset: &'a Synset) -> impl Iterator<Item = &'a Synset> + 'a {
        synset
            .hypernyms
            .iter()
            .filter_map(move |id| self.by_id.get(id).map(|&idx| &self.synsets[idx]))
    }

    /// Whether `word` is a lemma of any synset
    pub fn contains(&self, word: &str) -> bool {
        self.by_lemma.contains_key(&lookup_form(word))
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}

#[inline]
fn lookup_form(word: &str) -> String {
    word.trim().to_lowercase().replace(' ', "_")
}

#[inline]
fn display_form(lemma: &str) -> String {
    lemma.to_lowercase().replace('_', " ")
}
