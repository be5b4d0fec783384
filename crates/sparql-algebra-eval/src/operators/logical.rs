//! Logical functions
//!
//! Implements: fn:not, fn:boolean. Both coerce their operand to its
//! effective boolean value first.

use crate::error::{EvalError, EvalResult};
use crate::operators::single_arg;
use crate::registry::ExtensionRegistry;
use sparql_algebra_model::Term;
use sparql_algebra_model::vocab::fn_;

pub(crate) fn register(registry: &mut ExtensionRegistry) {
    registry.register_fn(Term::iri(fn_::NOT), 1, |args| {
        effective_boolean_value(single_arg(args)?).map(|value| Term::boolean(!value))
    });
    registry.register_fn(Term::iri(fn_::BOOLEAN), 1, |args| {
        effective_boolean_value(single_arg(args)?).map(Term::boolean)
    });
}

/// Effective boolean value of an evaluated operand
pub fn effective_boolean_value(term: &Term) -> EvalResult<bool> {
    term.effective_boolean_value()
        .ok_or_else(|| EvalError::type_mismatch("term with an effective boolean value", term.to_string()))
}
