//! Standard extension functions
//!
//! Functions registered by [`ExtensionRegistry::with_standard_functions`],
//! organized by category:
//! - XSD constructor casts (xsd:string, xsd:integer, ...)
//! - String functions (fn:starts-with, fn:contains, ...)
//! - Logical functions (fn:not, fn:boolean)

pub mod cast;
pub mod logical;
pub mod string;

pub use logical::effective_boolean_value;

use crate::error::{EvalError, EvalResult};
use crate::registry::ExtensionRegistry;
use sparql_algebra_model::Term;

/// Register every standard function
pub fn register_standard_functions(registry: &mut ExtensionRegistry) {
    cast::register(registry);
    string::register(registry);
    logical::register(registry);
}

pub(crate) fn single_arg(args: &[Term]) -> EvalResult<&Term> {
    match args {
        [arg] => Ok(arg),
        _ => Err(EvalError::type_mismatch("1 argument", format!("{} arguments", args.len()))),
    }
}

pub(crate) fn two_args(args: &[Term]) -> EvalResult<(&Term, &Term)> {
    match args {
        [left, right] => Ok((left, right)),
        _ => Err(EvalError::type_mismatch("2 arguments", format!("{} arguments", args.len()))),
    }
}
