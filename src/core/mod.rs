// Core algorithm exports
pub mod lexicon;
pub mod matcher;
pub mod normalizer;
pub mod scoring;
pub mod similarity;
pub mod synonyms;
pub mod text;
pub mod vocabulary;

pub use lexicon::{Lexicon, LexiconError, Synset};
pub use matcher::{RankResult, SkillMatcher};
pub use normalizer::Normalizer;
pub use scoring::expertise_bonus;
pub use similarity::{category_similarity, skill_overlap};
pub use synonyms::SynonymExpander;
pub use text::{text_similarity, TextSimilarityError, TfidfVectorizer};
