//! Error types for the preprocessing core

use thiserror::Error;

/// Errors surfaced by the preprocessing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input text was empty or absent
    #[error("No text provided")]
    MissingInput,

    /// A string that is not a Penn Treebank tag
    #[error("unknown part-of-speech tag: {0}")]
    UnknownTag(String),
}

pub type Result<T> = std::result::Result<T, Error>;
