//! String functions
//!
//! Implements: fn:starts-with, fn:ends-with, fn:contains, fn:string-length,
//! fn:upper-case, fn:lower-case. The two-argument predicates require
//! compatible arguments (see [`crate::compat`]).

use crate::compat::compatible;
use crate::error::{EvalError, EvalResult};
use crate::operators::{single_arg, two_args};
use crate::registry::ExtensionRegistry;
use sparql_algebra_model::vocab::fn_;
use sparql_algebra_model::{Literal, Term};

pub(crate) fn register(registry: &mut ExtensionRegistry) {
    registry.register_fn(Term::iri(fn_::STARTS_WITH), 2, |args| {
        string_predicate(fn_::STARTS_WITH, args, |a, b| a.starts_with(b))
    });
    registry.register_fn(Term::iri(fn_::ENDS_WITH), 2, |args| {
        string_predicate(fn_::ENDS_WITH, args, |a, b| a.ends_with(b))
    });
    registry.register_fn(Term::iri(fn_::CONTAINS), 2, |args| {
        string_predicate(fn_::CONTAINS, args, |a, b| a.contains(b))
    });
    registry.register_fn(Term::iri(fn_::STRING_LENGTH), 1, |args| string_length(single_arg(args)?));
    registry.register_fn(Term::iri(fn_::UPPER_CASE), 1, |args| {
        map_case(single_arg(args)?, str::to_uppercase)
    });
    registry.register_fn(Term::iri(fn_::LOWER_CASE), 1, |args| {
        map_case(single_arg(args)?, str::to_lowercase)
    });
}

/// Require a plain literal operand
fn string_literal(term: &Term) -> EvalResult<&Literal> {
    term.as_literal()
        .filter(|literal| literal.is_plain())
        .ok_or_else(|| EvalError::type_mismatch("string literal", term.to_string()))
}

fn string_predicate(
    operator: &str,
    args: &[Term],
    predicate: impl Fn(&str, &str) -> bool,
) -> EvalResult<Term> {
    let (left, right) = two_args(args)?;
    let (a, b) = (string_literal(left)?, string_literal(right)?);
    if !compatible(left, right) {
        return Err(EvalError::incompatible_arguments(
            operator,
            left.to_string(),
            right.to_string(),
        ));
    }
    Ok(Term::boolean(predicate(a.lexical(), b.lexical())))
}

fn string_length(term: &Term) -> EvalResult<Term> {
    let literal = string_literal(term)?;
    let length = literal.lexical().chars().count();
    Ok(Term::integer(i64::try_from(length).unwrap_or(i64::MAX)))
}

fn map_case(term: &Term, map: impl Fn(&str) -> String) -> EvalResult<Term> {
    let literal = string_literal(term)?;
    let lexical = map(literal.lexical());
    let mapped = match (literal.language(), literal.datatype()) {
        (Some(language), _) => Literal::language_tagged(lexical, language),
        (None, Some(datatype)) => Literal::typed(lexical, datatype.clone()),
        (None, None) => Literal::simple(lexical),
    };
    Ok(Term::Literal(mapped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_algebra_model::vocab::xsd;

    #[test]
    fn test_starts_with_compatible() {
        let args = [Term::language_literal("foobar", "en"), Term::simple_literal("foo")];
        let result = string_predicate(fn_::STARTS_WITH, &args, |a, b| a.starts_with(b));
        assert_eq!(result, Ok(Term::boolean(true)));
    }

    #[test]
    fn test_contains_incompatible() {
        let args = [Term::simple_literal("foobar"), Term::language_literal("foo", "en")];
        let result = string_predicate(fn_::CONTAINS, &args, |a, b| a.contains(b));
        assert!(matches!(result, Err(EvalError::IncompatibleArguments { .. })));
    }

    #[test]
    fn test_predicate_rejects_non_strings() {
        let args = [Term::integer(12), Term::simple_literal("1")];
        let result = string_predicate(fn_::STARTS_WITH, &args, |a, b| a.starts_with(b));
        assert!(matches!(result, Err(EvalError::TypeMismatch { .. })));
    }

    #[test]
    fn test_string_length_counts_chars() {
        assert_eq!(string_length(&Term::simple_literal("héllo")), Ok(Term::integer(5)));
        assert!(string_length(&Term::iri("http://example.org/")).is_err());
    }

    #[test]
    fn test_case_mapping_preserves_tag() {
        assert_eq!(
            map_case(&Term::language_literal("chat", "fr"), str::to_uppercase),
            Ok(Term::language_literal("CHAT", "fr"))
        );
        assert_eq!(
            map_case(&Term::typed_literal("ABC", xsd::STRING), str::to_lowercase),
            Ok(Term::typed_literal("abc", xsd::STRING))
        );
    }
}
