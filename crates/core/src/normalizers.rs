//! Text normalizers
//!
//! Provides the `Normalizer` trait and the character-level transformations
//! that run before tokenization.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not a letter, a numeral, `_` or whitespace
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").unwrap());

/// Maximal runs of decimal digits
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Trait for text normalizers
pub trait Normalizer: Send + Sync {
    /// Normalize the input text
    fn normalize(&self, input: &str) -> String;

    /// Get the name of this normalizer
    fn name(&self) -> &str;

    /// Clone this normalizer into a Box
    fn clone_box(&self) -> Box<dyn Normalizer>;
}

// Implement Clone for Box<dyn Normalizer>
impl Clone for Box<dyn Normalizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Built-in Normalizers
// ============================================================================

/// Converts all text to lowercase
#[derive(Clone)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &str {
        "lowercase"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Removes every character that is not a word character or whitespace.
///
/// Kept characters are Unicode letters and numerals of any kind (including
/// `²`), `_` and whitespace. Combining marks are removed.
#[derive(Clone)]
pub struct RemovePunctuation;

impl Normalizer for RemovePunctuation {
    fn normalize(&self, input: &str) -> String {
        PUNCTUATION.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &str {
        "remove_punctuation"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Removes runs of decimal digits
#[derive(Clone)]
pub struct RemoveNumbers;

impl Normalizer for RemoveNumbers {
    fn normalize(&self, input: &str) -> String {
        DIGITS.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &str {
        "remove_numbers"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Normalizes whitespace: collapses runs of any Unicode whitespace to a single
/// space and trims both ends
#[derive(Clone, Default)]
pub struct WhitespaceNormalizer;

impl WhitespaceNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for WhitespaceNormalizer {
    fn normalize(&self, input: &str) -> String {
        input.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn name(&self) -> &str {
        "remove_extra_spaces"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}
