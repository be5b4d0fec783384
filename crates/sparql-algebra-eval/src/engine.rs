//! Expression evaluation engine
//!
//! This module provides the [`Evaluator`], which reduces an expression tree to
//! a single term under a set of variable bindings.

use crate::context::EvaluationOptions;
use crate::error::{EvalError, EvalResult};
use crate::expression::{Compound, Expression};
use crate::registry::ExtensionRegistry;
use smallvec::SmallVec;
use sparql_algebra_model::{Binding, Term, Variable};

/// The expression evaluation engine
///
/// Constants evaluate to themselves, variables to their binding, and compound
/// nodes to the result of the extension function selected by their evaluated
/// tag and argument count. Operands are always evaluated eagerly, left to
/// right, before the function runs; short-circuiting is up to the function.
#[derive(Debug, Clone)]
pub struct Evaluator {
    /// Extension function registry
    registry: ExtensionRegistry,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Create an evaluator with the standard functions registered
    pub fn new() -> Self {
        Self {
            registry: ExtensionRegistry::with_standard_functions(),
        }
    }

    /// Create an evaluator with a custom registry
    pub fn with_registry(registry: ExtensionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// Get a mutable reference to the registry
    pub fn registry_mut(&mut self) -> &mut ExtensionRegistry {
        &mut self.registry
    }

    /// Evaluate an expression against `bindings`
    ///
    /// Neither the expression nor the bindings are modified, and nothing is
    /// cached between calls.
    pub fn evaluate<B>(
        &self,
        expr: &Expression,
        bindings: &B,
        options: &EvaluationOptions,
    ) -> EvalResult<Term>
    where
        B: Binding + ?Sized,
    {
        self.eval_node(expr, bindings, options, 1)
    }

    /// Evaluate an expression and coerce the result to its effective boolean value
    pub fn effective_boolean_value<B>(
        &self,
        expr: &Expression,
        bindings: &B,
        options: &EvaluationOptions,
    ) -> EvalResult<bool>
    where
        B: Binding + ?Sized,
    {
        let term = self.evaluate(expr, bindings, options)?;
        crate::operators::effective_boolean_value(&term)
    }

    fn eval_node<B>(
        &self,
        expr: &Expression,
        bindings: &B,
        options: &EvaluationOptions,
        depth: usize,
    ) -> EvalResult<Term>
    where
        B: Binding + ?Sized,
    {
        if depth > options.max_depth {
            return Err(EvalError::RecursionLimit);
        }

        match expr {
            Expression::Variable(variable) | Expression::Constant(Term::Variable(variable)) => {
                Self::eval_variable(variable, bindings)
            }
            Expression::Constant(term) => Ok(term.clone()),
            Expression::Compound(compound) => self.eval_compound(compound, bindings, options, depth),
        }
    }

    fn eval_variable<B>(variable: &Variable, bindings: &B) -> EvalResult<Term>
    where
        B: Binding + ?Sized,
    {
        if bindings.is_explicitly_unbound(variable) {
            return Err(EvalError::explicitly_unbound(variable.name()));
        }
        bindings
            .lookup(variable)
            .cloned()
            .ok_or_else(|| EvalError::unbound_variable(variable.name()))
    }

    fn eval_compound<B>(
        &self,
        compound: &Compound,
        bindings: &B,
        options: &EvaluationOptions,
        depth: usize,
    ) -> EvalResult<Term>
    where
        B: Binding + ?Sized,
    {
        let tag = self.eval_node(compound.tag(), bindings, options, depth + 1)?;

        let mut args: SmallVec<[Term; 4]> = SmallVec::with_capacity(compound.arity());
        for arg in compound.args() {
            args.push(self.eval_node(arg, bindings, options, depth + 1)?);
        }

        let function = self
            .registry
            .get(&tag, args.len())
            .ok_or_else(|| EvalError::unknown_operator(tag.to_string(), args.len()))?;

        log::trace!("dispatching {tag}/{} at depth {depth}", args.len());
        function(args.as_slice())
    }
}
