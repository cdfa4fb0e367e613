//! Linguistic resources shared by every pipeline run
//!
//! Resources are built once, before the first request, and never mutated
//! afterwards. Every component is `Send + Sync`, so an `Arc<LinguisticResources>`
//! can be read from any number of threads without locking.

use crate::lemmatizer::{Lemmatizer, RuleLemmatizer};
use crate::stemmer::{SnowballStemmer, Stemmer};
use crate::stopwords::StopwordFilter;
use crate::tagger::{LexiconTagger, Tagger};
use crate::tokenizers::{Tokenizer, TreebankWordTokenizer};

/// The tokenizer, stopword list, stemmer, lemmatizer and tagger used by the
/// engine
pub struct LinguisticResources {
    tokenizer: Box<dyn Tokenizer>,
    stopwords: StopwordFilter,
    stemmer: Box<dyn Stemmer>,
    lemmatizer: Box<dyn Lemmatizer>,
    tagger: Box<dyn Tagger>,
}

impl LinguisticResources {
    /// The built-in English resources
    pub fn english() -> Self {
        Self::builder().build()
    }

    /// Start from the English defaults and replace individual components
    pub fn builder() -> LinguisticResourcesBuilder {
        LinguisticResourcesBuilder::default()
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }

    pub fn lemmatizer(&self) -> &dyn Lemmatizer {
        self.lemmatizer.as_ref()
    }

    pub fn tagger(&self) -> &dyn Tagger {
        self.tagger.as_ref()
    }

    /// Name/value summary of the loaded components, for startup logging
    pub fn describe(&self) -> Vec<(String, String)> {
        vec![
            ("tokenizer".to_string(), self.tokenizer.name().to_string()),
            ("stopwords".to_string(), self.stopwords.len().to_string()),
            ("stemmer".to_string(), self.stemmer.name().to_string()),
            ("lemmatizer".to_string(), self.lemmatizer.name().to_string()),
            ("tagger".to_string(), self.tagger.name().to_string()),
        ]
    }
}

impl Default for LinguisticResources {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Debug for LinguisticResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinguisticResources")
            .field("tokenizer", &self.tokenizer.name())
            .field("stopwords", &self.stopwords.len())
            .field("stemmer", &self.stemmer.name())
            .field("lemmatizer", &self.lemmatizer.name())
            .field("tagger", &self.tagger.name())
            .finish()
    }
}

/// Builder for [`LinguisticResources`]; unset components use the English defaults
#[derive(Default)]
pub struct LinguisticResourcesBuilder {
    tokenizer: Option<Box<dyn Tokenizer>>,
    stopwords: Option<StopwordFilter>,
    stemmer: Option<Box<dyn Stemmer>>,
    lemmatizer: Option<Box<dyn Lemmatizer>>,
    tagger: Option<Box<dyn Tagger>>,
}

impl LinguisticResourcesBuilder {
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    pub fn with_stemmer(mut self, stemmer: Box<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        self.lemmatizer = Some(lemmatizer);
        self
    }

    pub fn with_tagger(mut self, tagger: Box<dyn Tagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn build(self) -> LinguisticResources {
        LinguisticResources {
            tokenizer: self
                .tokenizer
                .unwrap_or_else(|| Box::new(TreebankWordTokenizer::new())),
            stopwords: self.stopwords.unwrap_or_else(StopwordFilter::english),
            stemmer: self
                .stemmer
                .unwrap_or_else(|| Box::new(SnowballStemmer::english())),
            lemmatizer: self
                .lemmatizer
                .unwrap_or_else(|| Box::new(RuleLemmatizer::english())),
            tagger: self
                .tagger
                .unwrap_or_else(|| Box::new(LexiconTagger::english())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizers::WhitespaceTokenizer;

    #[test]
    fn test_english_defaults() {
        let resources = LinguisticResources::english();
        assert_eq!(resources.tokenizer().name(), "treebank");
        assert_eq!(resources.stopwords().len(), 179);
        assert_eq!(resources.stemmer().name(), "snowball_english");
        assert_eq!(resources.lemmatizer().name(), "rule_english");
        assert_eq!(resources.tagger().name(), "lexicon_english");
    }

    #[test]
    fn test_builder_overrides() {
        let resources = LinguisticResources::builder()
            .with_tokenizer(Box::new(WhitespaceTokenizer))
            .with_stopwords(StopwordFilter::from_list(&["fox"]))
            .build();

        assert_eq!(resources.tokenizer().name(), "whitespace");
        assert!(resources.stopwords().is_stopword("fox"));
        assert!(!resources.stopwords().is_stopword("the"));
        assert_eq!(resources.stemmer().name(), "snowball_english");
    }

    #[test]
    fn test_shared_across_threads() {
        let resources = std::sync::Arc::new(LinguisticResources::english());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resources = resources.clone();
                std::thread::spawn(move || resources.stemmer().stem("running"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "run");
        }
    }
}
