//! Expression trees
//!
//! An expression is a constant term, a variable, or a compound node. A
//! compound node is written `(tag arg1 arg2 ...)`: the tag is itself an
//! expression and, once evaluated, selects the extension function together
//! with the number of arguments.

use serde::{Deserialize, Serialize};
use sparql_algebra_model::{Iri, Literal, Term, Variable};

/// An expression node
///
/// A `Constant` holding a [`Term::Variable`] is read as a variable leaf
/// everywhere; deserialization normalizes it to [`Expression::Variable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ExpressionRepr")]
pub enum Expression {
    /// Any term other than a variable
    Constant(Term),
    /// Reference to a binding
    Variable(Variable),
    /// Tagged application
    Compound(Compound),
}

impl Expression {
    /// Create a leaf from a term. Variables become [`Expression::Variable`].
    pub fn term(term: impl Into<Term>) -> Self {
        match term.into() {
            Term::Variable(variable) => Self::Variable(variable),
            term => Self::Constant(term),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Variable::new(name))
    }

    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Constant(Term::iri(iri))
    }

    pub fn literal(literal: Literal) -> Self {
        Self::Constant(Term::Literal(literal))
    }

    /// Compound node applying the function named by `function` to `args`
    pub fn call(function: impl Into<Iri>, args: Vec<Expression>) -> Self {
        Self::Compound(Compound::new(Self::Constant(Term::Iri(function.into())), args))
    }

    /// Whether this node is a variable or contains one
    pub fn is_variable(&self) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.as_variable().is_some() {
                return true;
            }
            if let Self::Compound(compound) = node {
                stack.extend(compound.operands());
            }
        }
        false
    }

    pub fn is_constant(&self) -> bool {
        !self.is_variable()
    }

    /// Every expression node can be evaluated against a binding
    pub fn is_evaluatable(&self) -> bool {
        true
    }

    /// Expression nodes carry no execution semantics of their own
    pub fn is_executable(&self) -> bool {
        false
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::Compound(compound) if compound.is_aggregate())
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Self::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    /// The variable of a variable leaf
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(variable) | Self::Constant(Term::Variable(variable)) => Some(variable),
            _ => None,
        }
    }

    /// Maximum nesting depth; leaves have depth 1
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            if let Self::Compound(compound) = node {
                stack.extend(compound.operands().map(|operand| (operand, depth + 1)));
            }
        }
        max
    }
}

impl From<Term> for Expression {
    fn from(value: Term) -> Self {
        Self::term(value)
    }
}

impl From<Variable> for Expression {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

impl From<Compound> for Expression {
    fn from(value: Compound) -> Self {
        Self::Compound(value)
    }
}

#[derive(Deserialize)]
enum ExpressionRepr {
    Constant(Term),
    Variable(Variable),
    Compound(Compound),
}

impl From<ExpressionRepr> for Expression {
    fn from(value: ExpressionRepr) -> Self {
        match value {
            ExpressionRepr::Constant(term) => Self::term(term),
            ExpressionRepr::Variable(variable) => Self::Variable(variable),
            ExpressionRepr::Compound(compound) => Self::Compound(compound),
        }
    }
}

/// A compound node: a tag followed by zero or more arguments
///
/// The tag is stored apart from the arguments so a compound is never empty.
/// Dropping is iterative; the derived `Clone`, `PartialEq` and `Hash` recurse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compound {
    tag: Box<Expression>,
    args: Vec<Expression>,
    #[serde(default)]
    aggregate: bool,
}

impl Compound {
    pub fn new(tag: Expression, args: Vec<Expression>) -> Self {
        Self {
            tag: Box::new(tag),
            args,
            aggregate: false,
        }
    }

    /// An aggregate node, replaced by a variable before evaluation
    pub fn aggregate(tag: Expression, args: Vec<Expression>) -> Self {
        Self {
            tag: Box::new(tag),
            args,
            aggregate: true,
        }
    }

    pub fn tag(&self) -> &Expression {
        &self.tag
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    /// Number of arguments after the tag
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    pub fn is_aggregate(&self) -> bool {
        self.aggregate
    }

    /// Tag followed by the arguments
    pub fn operands(&self) -> impl DoubleEndedIterator<Item = &Expression> {
        std::iter::once(self.tag.as_ref()).chain(self.args.iter())
    }

    /// Rebuild with the same flavour and new operands
    pub(crate) fn with_operands(&self, tag: Expression, args: Vec<Expression>) -> Self {
        Self {
            tag: Box::new(tag),
            args,
            aggregate: self.aggregate,
        }
    }
}

impl Drop for Compound {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.args);
        pending.push(std::mem::replace(self.tag.as_mut(), placeholder()));
        while let Some(node) = pending.pop() {
            if let Expression::Compound(mut compound) = node {
                pending.append(&mut compound.args);
                pending.push(std::mem::replace(compound.tag.as_mut(), placeholder()));
            }
        }
    }
}

fn placeholder() -> Expression {
    Expression::Variable(Variable::new(String::new()))
}
