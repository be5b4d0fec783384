//! Evaluation errors for the SPARQL algebra engine

use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during expression evaluation and query dispatch
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Variable has no value in the binding
    ///
    /// `declared` is true when the variable is part of the binding's domain
    /// but explicitly unbound, false when the binding does not know it.
    #[error("Unbound variable: ?{name}")]
    UnboundVariable { name: String, declared: bool },

    /// No extension function registered for a tag and arity
    #[error("Unknown operator {tag} with {arity} operand(s)")]
    UnknownOperator { tag: String, arity: usize },

    /// Algebra node reached without execution semantics
    #[error("Algebra operator '{tag}' not implemented")]
    NotImplementedOperator { tag: String },

    /// Operand of the wrong kind
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// String function arguments are not compatible
    #[error("Incompatible arguments for {operator}: {left} and {right}")]
    IncompatibleArguments {
        operator: String,
        left: String,
        right: String,
    },

    /// Cast to a datatype failed
    #[error("Cannot cast {from_type} to {to_type}: {message}")]
    CastError {
        from_type: String,
        to_type: String,
        message: String,
    },

    /// Maximum expression depth exceeded
    #[error("Maximum recursion depth exceeded")]
    RecursionLimit,

    /// Store refused the query
    #[error("Store is not queryable")]
    NotQueryable,

    /// Error reported by the store back end
    #[error("Store error: {message}")]
    Store { message: String },
}

impl EvalError {
    /// Create an unbound variable error for a variable missing from the domain
    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::UnboundVariable {
            name: name.into(),
            declared: false,
        }
    }

    /// Create an unbound variable error for an explicitly unbound variable
    pub fn explicitly_unbound(name: impl Into<String>) -> Self {
        Self::UnboundVariable {
            name: name.into(),
            declared: true,
        }
    }

    /// Create an unknown operator error
    pub fn unknown_operator(tag: impl Into<String>, arity: usize) -> Self {
        Self::UnknownOperator {
            tag: tag.into(),
            arity,
        }
    }

    /// Create a not implemented operator error
    pub fn not_implemented(tag: impl Into<String>) -> Self {
        Self::NotImplementedOperator { tag: tag.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an incompatible arguments error
    pub fn incompatible_arguments(
        operator: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::IncompatibleArguments {
            operator: operator.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create a cast error
    pub fn cast_error(
        from_type: impl Into<String>,
        to_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::CastError {
            from_type: from_type.into(),
            to_type: to_type.into(),
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
