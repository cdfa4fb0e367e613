//! Preprocessing result record

use serde::{Deserialize, Serialize};

use crate::tagger::PosTag;

/// Output of one pipeline run.
///
/// Sequence fields are `None` when the step did not run or produced nothing;
/// they serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessingResult {
    /// Final text after every enabled step
    pub processed_text: String,

    /// Tokens after stopword removal, if tokenization ran
    pub tokens: Option<Vec<String>>,

    /// Stem of every token
    pub stemmed_words: Option<Vec<String>>,

    /// Lemma of every token
    pub lemmatized_words: Option<Vec<String>>,

    /// `(token, tag)` pairs, serialized as `["token", "TAG"]`
    pub pos_tags: Option<Vec<(String, PosTag)>>,

    /// Character count of the input text
    pub original_length: usize,

    /// Character count of `processed_text`
    pub processed_length: usize,
}

impl PreprocessingResult {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} chars, {} tokens",
            self.original_length,
            self.processed_length,
            self.tokens.as_ref().map_or(0, Vec::len)
        )
    }
}

/// `Some(items)` unless `items` is empty
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let result = PreprocessingResult {
            processed_text: "hi".to_string(),
            tokens: None,
            stemmed_words: None,
            lemmatized_words: None,
            pos_tags: None,
            original_length: 2,
            processed_length: 2,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["tokens"].is_null());
        assert!(json["pos_tags"].is_null());
        assert_eq!(json["processed_text"], "hi");
        assert_eq!(json["original_length"], 2);
    }

    #[test]
    fn test_pos_tags_shape() {
        let result = PreprocessingResult {
            processed_text: "dog barks".to_string(),
            tokens: Some(vec!["dog".to_string(), "barks".to_string()]),
            stemmed_words: None,
            lemmatized_words: None,
            pos_tags: Some(vec![
                ("dog".to_string(), PosTag::NN),
                ("barks".to_string(), PosTag::VBZ),
            ]),
            original_length: 9,
            processed_length: 9,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["pos_tags"], serde_json::json!([["dog", "NN"], ["barks", "VBZ"]]));
        assert_eq!(result.summary(), "9 -> 9 chars, 2 tokens");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty::<String>(vec![]), None);
        assert_eq!(non_empty(vec![1]), Some(vec![1]));
    }
}
