//! SPARQL algebra evaluation and dispatch for Rust
//!
//! This crate bundles the evaluation layer of a SPARQL algebra engine:
//! - RDF terms, solutions and basic graph patterns
//! - Expression evaluation with extension functions keyed by tag and arity
//! - Variable substitution and aggregate hoisting
//! - Query dispatch against a pluggable store
//! - Solution filtering
//!
//! # Example
//!
//! ```ignore
//! use sparql_algebra::{EvaluationOptions, Evaluator, Expression, Solution, Term};
//!
//! let bindings = Solution::new().with("a", Term::simple_literal("x"));
//! let result = Evaluator::new().evaluate(
//!     &Expression::variable("a"),
//!     &bindings,
//!     &EvaluationOptions::default(),
//! )?;
//! ```

// Re-export all public APIs from internal crates
pub use sparql_algebra_eval as eval;
pub use sparql_algebra_model as model;

// Convenience re-exports
pub use sparql_algebra_eval::{
    AlgebraNode, EvalError, EvalResult, EvaluationOptions, Evaluator, Expression, QueryDispatcher, Store,
    compatible, filter_solutions, replace_aggregates, replace_variables, to_sse,
};
pub use sparql_algebra_model::{Pattern, Solution, Solutions, Term, Variable};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
