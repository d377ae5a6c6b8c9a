//! Error types for the language and base layers

use thiserror::Error;

use crate::sentence::Sentence;

/// A parse failure, pointing at the byte offset where it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        ParseError {
            message: message.into(),
            position,
        }
    }
}

/// Invariant violations at the material-base boundary.
///
/// Raised synchronously by the mutator that would have introduced the
/// violation; the base is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A logically complex sentence where the base language requires an atom.
    #[error("material base language requires atomic sentences, got `{0}`")]
    NonAtomicLanguage(Sentence),

    /// A logically complex sentence inside a base consequence.
    #[error("base consequences must relate atomic sentences, got `{0}`")]
    NonAtomicConsequence(Sentence),

    /// A logically complex sentence in an inference-schema consequent.
    #[error("schema consequents must be atomic sentences, got `{0}`")]
    NonAtomicSchemaConsequent(Sentence),

    /// A stored document contained text that does not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
