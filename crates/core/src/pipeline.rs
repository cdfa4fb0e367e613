//! Text normalization pipeline
//!
//! Chains normalizers in a fixed order. Each normalizer reads the output of the
//! previous one.

use tracing::trace;

use crate::normalizers::{
    Lowercase, Normalizer, RemoveNumbers, RemovePunctuation, WhitespaceNormalizer,
};
use crate::options::PreprocessingOptions;

/// A pipeline of text normalizers applied in insertion order
#[derive(Default, Clone)]
pub struct TextPipeline {
    /// Ordered list of normalizers to apply
    normalizers: Vec<Box<dyn Normalizer>>,
}

impl TextPipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            normalizers: Vec::new(),
        }
    }

    /// Build the character-level stage for a set of options.
    ///
    /// The order is always lowercase, punctuation, numbers, whitespace,
    /// regardless of how the options were assembled.
    pub fn from_options(options: &PreprocessingOptions) -> Self {
        let mut pipeline = Self::new();
        if options.lowercase {
            pipeline = pipeline.add_normalizer(Box::new(Lowercase));
        }
        if options.remove_punctuation {
            pipeline = pipeline.add_normalizer(Box::new(RemovePunctuation));
        }
        if options.remove_numbers {
            pipeline = pipeline.add_normalizer(Box::new(RemoveNumbers));
        }
        if options.remove_extra_spaces {
            pipeline = pipeline.add_normalizer(Box::new(WhitespaceNormalizer));
        }
        pipeline
    }

    /// Add a normalizer to the pipeline
    pub fn add_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizers.push(normalizer);
        self
    }

    /// Run the input through every normalizer and return the final text
    pub fn process(&self, input: &str) -> String {
        let mut current = input.to_string();

        for normalizer in &self.normalizers {
            let normalized = normalizer.normalize(&current);
            trace!(
                normalizer = normalizer.name(),
                before = current.chars().count(),
                after = normalized.chars().count(),
                "normalizer applied"
            );
            current = normalized;
        }

        current
    }

    /// Get the number of normalizers in the pipeline
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }

    /// Get the names of all normalizers in the pipeline
    pub fn normalizer_names(&self) -> Vec<String> {
        self.normalizers
            .iter()
            .map(|n| n.name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = TextPipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.process("Hello World"), "Hello World");
    }

    #[test]
    fn test_single_normalizer() {
        let pipeline = TextPipeline::new().add_normalizer(Box::new(Lowercase));
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.process("Hello World"), "hello world");
    }

    #[test]
    fn test_from_options_fixed_order() {
        let options = PreprocessingOptions::new()
            .with_remove_extra_spaces(true)
            .with_remove_numbers(true)
            .with_lowercase(true)
            .with_remove_punctuation(true);
        let pipeline = TextPipeline::from_options(&options);

        assert_eq!(
            pipeline.normalizer_names(),
            vec![
                "lowercase",
                "remove_punctuation",
                "remove_numbers",
                "remove_extra_spaces"
            ]
        );
        assert_eq!(pipeline.process("Hello, World! 123"), "hello world");
    }

    #[test]
    fn test_numbers_removed_before_whitespace_collapse() {
        let options = PreprocessingOptions::new()
            .with_remove_numbers(true)
            .with_remove_extra_spaces(true);
        let pipeline = TextPipeline::from_options(&options);
        assert_eq!(pipeline.process("room 101 is empty"), "room is empty");
    }
}
