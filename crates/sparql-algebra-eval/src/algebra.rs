//! Algebra nodes and query result shapes
//!
//! Concrete algebra operators (bgp, join, union, ...) live outside this crate
//! and plug in through the [`Operator`] trait. A bare [`Compound`] reaching
//! execution has no semantics attached and fails.

use crate::context::EvaluationOptions;
use crate::dispatch::Store;
use crate::error::{EvalError, EvalResult};
use crate::expression::Compound;
use crate::sse::ToSse;
use serde::{Deserialize, Serialize};
use sparql_algebra_model::{Solutions, Triple};
use std::fmt;

/// The kind of result a query produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryShape {
    /// A solution sequence (SELECT and plain patterns)
    #[default]
    Solutions,
    /// A single boolean (ASK)
    Boolean,
    /// A statement sequence (CONSTRUCT, DESCRIBE)
    Statements,
}

impl QueryShape {
    pub fn yields_solutions(self) -> bool {
        self == Self::Solutions
    }

    pub fn yields_boolean(self) -> bool {
        self == Self::Boolean
    }

    pub fn yields_statements(self) -> bool {
        self == Self::Statements
    }
}

/// Raw result of executing an algebra node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Solutions(Solutions),
    Boolean(bool),
    Statements(Vec<Triple>),
}

impl QueryResult {
    /// The shape this result has
    pub fn shape(&self) -> QueryShape {
        match self {
            Self::Solutions(_) => QueryShape::Solutions,
            Self::Boolean(_) => QueryShape::Boolean,
            Self::Statements(_) => QueryShape::Statements,
        }
    }
}

/// An executable algebra operator
pub trait Operator: fmt::Debug {
    /// Operator name as written in SSE, e.g. `bgp` or `join`
    fn tag(&self) -> &str;

    /// Result shape of this operator
    fn shape(&self) -> QueryShape {
        QueryShape::Solutions
    }

    /// Execute against `store`
    fn execute(&self, store: &dyn Store, options: &EvaluationOptions) -> EvalResult<QueryResult>;
}

/// A node handed to the query dispatcher
#[derive(Debug)]
pub enum AlgebraNode {
    /// Operator with execution semantics
    Operator(Box<dyn Operator>),
    /// Compound expression without execution semantics
    Compound(Compound),
}

impl AlgebraNode {
    pub fn operator(operator: impl Operator + 'static) -> Self {
        Self::Operator(Box::new(operator))
    }

    /// Declared result shape; compound nodes default to solutions
    pub fn shape(&self) -> QueryShape {
        match self {
            Self::Operator(operator) => operator.shape(),
            Self::Compound(_) => QueryShape::default(),
        }
    }

    /// Leading tag, rendered for display
    pub fn tag(&self) -> String {
        match self {
            Self::Operator(operator) => operator.tag().to_string(),
            Self::Compound(compound) => compound.tag().to_sse(),
        }
    }

    /// Execute the node against `store`
    pub fn execute(&self, store: &dyn Store, options: &EvaluationOptions) -> EvalResult<QueryResult> {
        match self {
            Self::Operator(operator) => operator.execute(store, options),
            Self::Compound(compound) => Err(EvalError::not_implemented(compound.tag().to_sse())),
        }
    }
}

impl From<Compound> for AlgebraNode {
    fn from(value: Compound) -> Self {
        Self::Compound(value)
    }
}
