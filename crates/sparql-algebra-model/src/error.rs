//! Errors raised while constructing model values

use thiserror::Error;

/// Result type for model construction
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building terms and patterns
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// IRI is not absolute or contains forbidden characters
    #[error("Invalid IRI '{iri}': {message}")]
    InvalidIri { iri: String, message: String },

    /// Literal combines components that cannot appear together
    #[error("Invalid literal \"{lexical}\": {message}")]
    InvalidLiteral { lexical: String, message: String },

    /// Triple pattern position holds a term that is not allowed there
    #[error("Invalid {position} in triple pattern: {term}")]
    InvalidPatternTerm { position: String, term: String },
}

impl ModelError {
    /// Create an invalid IRI error
    pub fn invalid_iri(iri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidIri {
            iri: iri.into(),
            message: message.into(),
        }
    }

    /// Create an invalid literal error
    pub fn invalid_literal(lexical: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            lexical: lexical.into(),
            message: message.into(),
        }
    }

    /// Create an invalid pattern term error
    pub fn invalid_pattern_term(position: impl Into<String>, term: impl Into<String>) -> Self {
        Self::InvalidPatternTerm {
            position: position.into(),
            term: term.into(),
        }
    }
}
