//! Main preprocessing engine that sequences the pipeline steps

use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::options::PreprocessingOptions;
use crate::pipeline::TextPipeline;
use crate::resources::LinguisticResources;
use crate::result::{non_empty, PreprocessingResult};

/// The main preprocessing engine
#[derive(Debug, Clone)]
pub struct PreprocessEngine {
    resources: Arc<LinguisticResources>,
}

impl PreprocessEngine {
    /// Create an engine over shared resources
    pub fn new(resources: Arc<LinguisticResources>) -> Self {
        Self { resources }
    }

    /// Create an engine with the built-in English resources
    pub fn english() -> Self {
        Self::new(Arc::new(LinguisticResources::english()))
    }

    pub fn resources(&self) -> &LinguisticResources {
        &self.resources
    }

    /// Run the enabled steps over `text`.
    ///
    /// The order is fixed:
    /// 1. Character-level normalization (lowercase, punctuation, numbers, whitespace)
    /// 2. Tokenization, if any token-level step is enabled
    /// 3. Stopword removal, rebuilding the text from surviving tokens
    /// 4. Stemming, rebuilding the text from stems
    /// 5. Lemmatization of the same tokens, rebuilding the text from lemmas
    /// 6. POS tagging of the same tokens
    ///
    /// Empty input is not rejected here; see [`PreprocessEngine::try_execute`].
    pub fn execute(&self, text: &str, options: &PreprocessingOptions) -> PreprocessingResult {
        let resources = &self.resources;

        let mut processed = TextPipeline::from_options(options).process(text);

        let mut tokens = Vec::new();
        if options.needs_tokens() {
            tokens = resources.tokenizer().tokenize(&processed);
        }

        if options.remove_stopwords {
            tokens = resources.stopwords().filter(tokens);
            processed = tokens.join(" ");
        }

        let mut stemmed_words = Vec::new();
        if options.stemming && !tokens.is_empty() {
            stemmed_words = resources.stemmer().stem_all(&tokens);
            processed = stemmed_words.join(" ");
        }

        let mut lemmatized_words = Vec::new();
        if options.lemmatization && !tokens.is_empty() {
            lemmatized_words = resources.lemmatizer().lemmatize_all(&tokens);
            processed = lemmatized_words.join(" ");
        }

        let mut pos_tags = Vec::new();
        if options.pos_tagging && !tokens.is_empty() {
            pos_tags = resources.tagger().tag_tokens(&tokens);
        }

        let result = PreprocessingResult {
            original_length: text.chars().count(),
            processed_length: processed.chars().count(),
            processed_text: processed,
            tokens: non_empty(tokens),
            stemmed_words: non_empty(stemmed_words),
            lemmatized_words: non_empty(lemmatized_words),
            pos_tags: non_empty(pos_tags),
        };

        debug!(
            steps = ?options.enabled_steps(),
            summary = %result.summary(),
            "preprocessed text"
        );

        result
    }

    /// Like [`PreprocessEngine::execute`], but rejects empty text
    pub fn try_execute(
        &self,
        text: &str,
        options: &PreprocessingOptions,
    ) -> Result<PreprocessingResult> {
        if text.is_empty() {
            return Err(Error::MissingInput);
        }
        Ok(self.execute(text, options))
    }
}

impl Default for PreprocessEngine {
    fn default() -> Self {
        Self::english()
    }
}
