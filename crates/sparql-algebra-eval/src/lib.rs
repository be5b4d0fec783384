//! SPARQL Algebra Evaluation Engine
//!
//! This crate provides the evaluation and dispatch layer that concrete SPARQL
//! algebra operators build on:
//!
//! - **Expression Evaluation**: constants, variables and compound nodes
//!   dispatched to extension functions by evaluated tag and arity
//! - **Tree Rewriting**: variable substitution and aggregate hoisting
//! - **Term Compatibility**: the argument-compatibility rule of the SPARQL
//!   string functions
//! - **Query Dispatch**: plain patterns and algebra nodes routed to a store,
//!   with lifecycle hooks and result shaping
//! - **Solution Filtering**: solution sequences filtered by expressions or
//!   predicates
//! - **Standard Functions**: XSD constructor casts and a set of XPath
//!   string and logical functions
//!
//! # Example
//!
//! ```ignore
//! use sparql_algebra_eval::{EvaluationOptions, Evaluator, Expression};
//! use sparql_algebra_model::{Solution, Term};
//!
//! let evaluator = Evaluator::new();
//! let bindings = Solution::new().with("n", Term::simple_literal("42"));
//! let expr = Expression::call(
//!     "http://www.w3.org/2001/XMLSchema#integer",
//!     vec![Expression::variable("n")],
//! );
//!
//! let result = evaluator.evaluate(&expr, &bindings, &EvaluationOptions::default())?;
//! assert_eq!(result, Term::integer(42));
//! ```
//!
//! # Architecture
//!
//! - `Evaluator`: reduces an expression to a term under a binding
//! - `ExtensionRegistry`: functions keyed by tag and arity
//! - `QueryDispatcher`: routes queries to a `Store`
//! - `rewrite`: pure tree transformations run before evaluation

pub mod algebra;
pub mod compat;
pub mod context;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod expression;
pub mod filter;
pub mod operators;
pub mod registry;
pub mod rewrite;
pub mod sse;

// Re-export main types
pub use algebra::{AlgebraNode, Operator, QueryResult, QueryShape};
pub use compat::compatible;
pub use context::{DEFAULT_MAX_DEPTH, EvaluationOptions, EvaluationOptionsBuilder, FilterErrorPolicy};
pub use dispatch::{
    ExecuteArity, QueryDispatcher, QueryHooks, QueryInput, QueryOutput, ResultEnumerator, ResultItem, Store,
};
pub use engine::Evaluator;
pub use error::{EvalError, EvalResult};
pub use expression::{Compound, Expression};
pub use filter::{FilterCriterion, filter_solutions};
pub use registry::{ExtensionFn, ExtensionRegistry, FunctionKey};
pub use rewrite::{replace_aggregates, replace_variables, rewrite};
pub use sse::{ToSse, to_sse};
