//! # TextPrep Library
//!
//! A configurable English text preprocessing pipeline. Character-level
//! normalizers clean the text, then optional token-level steps split it,
//! drop stopwords, stem, lemmatize and tag parts of speech.
//!
//! ## Core Concepts
//!
//! - **Normalizers**: Character-level text transformations
//! - **Pipelines**: Chain normalizers in a fixed order
//! - **Tokenizers**: Split normalized text into word and punctuation tokens
//! - **LinguisticResources**: Read-only tokenizer, stopwords, stemmer, lemmatizer and tagger
//! - **PreprocessEngine**: Run the enabled steps and assemble a result
//!
//! ## Example
//!
//! ```rust
//! use textprep_core::{PreprocessEngine, PreprocessingOptions};
//!
//! let options = PreprocessingOptions::new()
//!     .with_lowercase(true)
//!     .with_remove_punctuation(true)
//!     .with_remove_stopwords(true);
//!
//! let engine = PreprocessEngine::english();
//! let result = engine.execute("The quick brown fox!", &options);
//! assert_eq!(result.processed_text, "quick brown fox");
//! ```

pub mod engine;
pub mod error;
pub mod lemmatizer;
pub mod normalizers;
pub mod options;
pub mod pipeline;
pub mod resources;
pub mod result;
pub mod stemmer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizers;

// Re-export main types
pub use engine::PreprocessEngine;
pub use error::{Error, Result};
pub use lemmatizer::WordClass;
pub use options::PreprocessingOptions;
pub use pipeline::TextPipeline;
pub use resources::{LinguisticResources, LinguisticResourcesBuilder};
pub use result::PreprocessingResult;
pub use tagger::PosTag;

/// Main entry point for preprocessing a single string
///
/// Builds the English resources on every call; long-running callers should
/// hold a [`PreprocessEngine`] instead.
///
/// # Example
///
/// ```rust
/// use textprep_core::{preprocess, PreprocessingOptions};
///
/// let result = preprocess("Hello, World! 123", &PreprocessingOptions::all());
/// println!("{}", result.summary());
/// ```
pub fn preprocess(text: &str, options: &PreprocessingOptions) -> PreprocessingResult {
    PreprocessEngine::english().execute(text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_preprocess() {
        let options = PreprocessingOptions::new()
            .with_lowercase(true)
            .with_remove_punctuation(true)
            .with_remove_numbers(true)
            .with_remove_extra_spaces(true);

        let result = preprocess("Hello, World! 123", &options);
        assert_eq!(result.processed_text, "hello world");
        assert_eq!(result.original_length, 17);
        assert_eq!(result.processed_length, 11);
    }

    #[test]
    fn test_options_from_json() {
        let options: PreprocessingOptions =
            serde_json::from_str(r#"{"lowercase": true, "tokenize": 1}"#).unwrap();

        let result = preprocess("Hello World", &options);
        assert_eq!(
            result.tokens,
            Some(vec!["hello".to_string(), "world".to_string()])
        );
    }
}
