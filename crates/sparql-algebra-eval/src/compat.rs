//! Argument compatibility for SPARQL string functions
//!
//! Two arguments are compatible when:
//! - both are simple literals or literals typed as `xsd:string`
//! - both are plain literals with identical language tags
//! - the first is a language-tagged literal and the second a simple literal
//!   or `xsd:string` literal
//!
//! See <http://www.w3.org/TR/sparql11-query/#func-arg-compatibility>.

use sparql_algebra_model::Term;
use sparql_algebra_model::vocab::xsd;

/// Check whether `a` and `b` are compatible string function arguments
///
/// Any operand that is not a plain literal makes the pair incompatible.
pub fn compatible(a: &Term, b: &Term) -> bool {
    let (Some(a), Some(b)) = (a.as_literal(), b.as_literal()) else {
        return false;
    };
    if !a.is_plain() || !b.is_plain() {
        return false;
    }

    let b_is_string = b.effective_datatype() == xsd::STRING;
    match a.language() {
        Some(language) => b.language() == Some(language) || b_is_string,
        None => b_is_string,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn simple(s: &str) -> Term {
        Term::simple_literal(s)
    }

    fn string(s: &str) -> Term {
        Term::typed_literal(s, xsd::STRING)
    }

    fn lang(s: &str, tag: &str) -> Term {
        Term::language_literal(s, tag)
    }

    #[rstest]
    #[case(simple("abc"), simple("b"), true)]
    #[case(simple("abc"), string("b"), true)]
    #[case(string("abc"), simple("b"), true)]
    #[case(string("abc"), string("b"), true)]
    #[case(lang("abc", "en"), simple("b"), true)]
    #[case(lang("abc", "en"), string("b"), true)]
    #[case(lang("abc", "en"), lang("b", "en"), true)]
    #[case(lang("abc", "fr"), lang("b", "ja"), false)]
    #[case(simple("abc"), lang("b", "ja"), false)]
    #[case(simple("abc"), lang("b", "en"), false)]
    #[case(string("abc"), lang("b", "en"), false)]
    fn test_compatibility_truth_table(#[case] a: Term, #[case] b: Term, #[case] expected: bool) {
        assert_eq!(compatible(&a, &b), expected);
    }

    #[rstest]
    #[case(Term::integer(1), simple("b"))]
    #[case(simple("abc"), Term::integer(1))]
    #[case(Term::iri("http://example.org/a"), simple("b"))]
    #[case(simple("abc"), Term::blank_node("b0"))]
    #[case(simple("abc"), Term::variable("x"))]
    fn test_non_plain_operands_incompatible(#[case] a: Term, #[case] b: Term) {
        assert!(!compatible(&a, &b));
    }

    #[test]
    fn test_language_tags_case_insensitive() {
        assert!(compatible(&lang("abc", "EN"), &lang("b", "en")));
    }

    #[test]
    fn test_language_tags_case_insensitive_after_deserialize() {
        let json = r#"{"type":"Literal","value":{"lexical":"abc","language":"EN"}}"#;
        let a: Term = serde_json::from_str(json).unwrap();
        assert!(compatible(&a, &lang("b", "en")));
    }
}
