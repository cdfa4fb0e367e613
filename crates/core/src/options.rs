//! Preprocessing options
//!
//! Each option is an independent toggle. Unknown keys are ignored and absent
//! keys are disabled, so any JSON object deserializes into a valid set of
//! options.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Boolean flags selecting which preprocessing steps run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingOptions {
    /// Lowercase the working text
    #[serde(deserialize_with = "truthy")]
    pub lowercase: bool,

    /// Delete every character that is neither a word character nor whitespace
    #[serde(deserialize_with = "truthy")]
    pub remove_punctuation: bool,

    /// Delete runs of decimal digits
    #[serde(deserialize_with = "truthy")]
    pub remove_numbers: bool,

    /// Collapse whitespace runs to single spaces and trim
    #[serde(deserialize_with = "truthy")]
    pub remove_extra_spaces: bool,

    /// Report the token list
    #[serde(deserialize_with = "truthy")]
    pub tokenize: bool,

    /// Drop English stopwords from the token list
    #[serde(deserialize_with = "truthy")]
    pub remove_stopwords: bool,

    /// Stem every token
    #[serde(deserialize_with = "truthy")]
    pub stemming: bool,

    /// Lemmatize every token
    #[serde(deserialize_with = "truthy")]
    pub lemmatization: bool,

    /// Assign a part-of-speech tag to every token
    #[serde(deserialize_with = "truthy")]
    pub pos_tagging: bool,
}

impl PreprocessingOptions {
    /// All steps disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// All steps enabled
    pub fn all() -> Self {
        Self {
            lowercase: true,
            remove_punctuation: true,
            remove_numbers: true,
            remove_extra_spaces: true,
            tokenize: true,
            remove_stopwords: true,
            stemming: true,
            lemmatization: true,
            pos_tagging: true,
        }
    }

    pub fn with_lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    pub fn with_remove_punctuation(mut self, enable: bool) -> Self {
        self.remove_punctuation = enable;
        self
    }

    pub fn with_remove_numbers(mut self, enable: bool) -> Self {
        self.remove_numbers = enable;
        self
    }

    pub fn with_remove_extra_spaces(mut self, enable: bool) -> Self {
        self.remove_extra_spaces = enable;
        self
    }

    pub fn with_tokenize(mut self, enable: bool) -> Self {
        self.tokenize = enable;
        self
    }

    pub fn with_remove_stopwords(mut self, enable: bool) -> Self {
        self.remove_stopwords = enable;
        self
    }

    pub fn with_stemming(mut self, enable: bool) -> Self {
        self.stemming = enable;
        self
    }

    pub fn with_lemmatization(mut self, enable: bool) -> Self {
        self.lemmatization = enable;
        self
    }

    pub fn with_pos_tagging(mut self, enable: bool) -> Self {
        self.pos_tagging = enable;
        self
    }

    /// Whether any enabled step requires a token list
    pub fn needs_tokens(&self) -> bool {
        self.tokenize
            || self.remove_stopwords
            || self.stemming
            || self.lemmatization
            || self.pos_tagging
    }

    /// Names of the enabled steps, in pipeline order
    pub fn enabled_steps(&self) -> Vec<&'static str> {
        [
            (self.lowercase, "lowercase"),
            (self.remove_punctuation, "remove_punctuation"),
            (self.remove_numbers, "remove_numbers"),
            (self.remove_extra_spaces, "remove_extra_spaces"),
            (self.tokenize, "tokenize"),
            (self.remove_stopwords, "remove_stopwords"),
            (self.stemming, "stemming"),
            (self.lemmatization, "lemmatization"),
            (self.pos_tagging, "pos_tagging"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

/// Interpret any JSON value as a flag: `false`, `null`, `0`, `""`, `[]` and
/// `{}` are off, everything else is on.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_disables_everything() {
        let options: PreprocessingOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, PreprocessingOptions::default());
        assert!(!options.needs_tokens());
        assert!(options.enabled_steps().is_empty());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let options: PreprocessingOptions =
            serde_json::from_str(r#"{"lowercase": true, "shout": true}"#).unwrap();
        assert!(options.lowercase);
        assert_eq!(options.enabled_steps(), vec!["lowercase"]);
    }

    #[test]
    fn test_truthy_values() {
        let options: PreprocessingOptions = serde_json::from_str(
            r#"{"lowercase": 1, "remove_numbers": 0, "stemming": "yes",
                "lemmatization": "", "pos_tagging": null, "tokenize": [1]}"#,
        )
        .unwrap();
        assert!(options.lowercase);
        assert!(!options.remove_numbers);
        assert!(options.stemming);
        assert!(!options.lemmatization);
        assert!(!options.pos_tagging);
        assert!(options.tokenize);
    }

    #[test]
    fn test_needs_tokens() {
        assert!(!PreprocessingOptions::new().with_lowercase(true).needs_tokens());
        assert!(PreprocessingOptions::new().with_stemming(true).needs_tokens());
        assert!(PreprocessingOptions::new().with_pos_tagging(true).needs_tokens());
        assert!(PreprocessingOptions::all().needs_tokens());
    }
}
