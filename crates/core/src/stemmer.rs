//! Rule-based stemming
//!
//! Stems are crude suffix-stripped roots (`flies` -> `fli`); they need not be
//! dictionary words.

use rust_stemmers::{Algorithm, Stemmer as SnowballAlgorithm};

/// Trait for stemmers that reduce a word to its root form
pub trait Stemmer: Send + Sync {
    /// Stem a single word
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer
    fn name(&self) -> &str;

    /// Stem every token, preserving order
    fn stem_all(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.stem(token)).collect()
    }
}

/// English Snowball stemmer. Input is lowercased before stemming.
pub struct SnowballStemmer {
    inner: SnowballAlgorithm,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: SnowballAlgorithm::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }

    fn name(&self) -> &str {
        "snowball_english"
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer").finish_non_exhaustive()
    }
}
