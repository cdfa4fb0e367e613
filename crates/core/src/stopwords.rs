//! Stopword filtering
//!
//! English stopword membership over the NLTK list shipped by the `stop-words`
//! crate, case-insensitive by default, with support for custom lists.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from token lists
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase unless case-sensitive)
    stopwords: FxHashSet<String>,
    /// Whether the filter is case-sensitive
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Create a filter over the NLTK English list (179 words, including clitic
    /// stems such as `don` and `couldn` left behind by contraction splitting)
    pub fn english() -> Self {
        let stopwords: FxHashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Keep the tokens that are not stopwords, preserving their order
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.is_stopword(token))
            .collect()
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert_eq!(filter.len(), 179);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("n't"));
        assert!(!filter.is_stopword("quick"));
        assert!(!filter.is_stopword("fox"));
    }

    #[test]
    fn test_english_list_includes_clitic_stems() {
        let filter = StopwordFilter::english();

        for word in ["don", "don't", "couldn", "shouldn't", "ll", "ve", "ma"] {
            assert!(filter.is_stopword(word), "{word} should be a stopword");
        }
        for word in ["quick", "brown", "dog", "barks", "running"] {
            assert!(!filter.is_stopword(word), "{word} should be kept");
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = StopwordFilter::english();
        let tokens = vec!["the".to_string(), "quick".to_string(), "fox".to_string()];
        assert_eq!(filter.filter(tokens), vec!["quick", "fox"]);
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = StopwordFilter::english().with_case_sensitive(true);

        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }
}
