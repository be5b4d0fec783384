//! XSD constructor casts
//!
//! Implements the one-argument constructor functions `xsd:string`,
//! `xsd:boolean`, `xsd:integer`, `xsd:decimal`, `xsd:double` and `xsd:float`.
//! A compound `(xsd:integer ?x)` names the target datatype with its tag and
//! the value to coerce with its single argument.

use crate::error::{EvalError, EvalResult};
use crate::operators::single_arg;
use crate::registry::ExtensionRegistry;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sparql_algebra_model::vocab::xsd;
use sparql_algebra_model::{Literal, Term};
use std::str::FromStr;

/// Numeric value of a literal, as far as the casts need it
#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Integer(Decimal),
    Decimal(Decimal),
    Double(f64),
}

impl Numeric {
    fn is_zero_or_nan(self) -> bool {
        match self {
            Self::Integer(d) | Self::Decimal(d) => d.is_zero(),
            Self::Double(f) => f == 0.0 || f.is_nan(),
        }
    }
}

pub(crate) fn register(registry: &mut ExtensionRegistry) {
    registry.register_fn(Term::iri(xsd::STRING), 1, |args| cast_to_string(single_arg(args)?));
    registry.register_fn(Term::iri(xsd::BOOLEAN), 1, |args| cast_to_boolean(single_arg(args)?));
    registry.register_fn(Term::iri(xsd::INTEGER), 1, |args| cast_to_integer(single_arg(args)?));
    registry.register_fn(Term::iri(xsd::DECIMAL), 1, |args| cast_to_decimal(single_arg(args)?));
    registry.register_fn(Term::iri(xsd::DOUBLE), 1, |args| {
        cast_to_floating(single_arg(args)?, xsd::DOUBLE)
    });
    registry.register_fn(Term::iri(xsd::FLOAT), 1, |args| {
        cast_to_floating(single_arg(args)?, xsd::FLOAT)
    });
}

/// Literal being cast, rejecting terms that cannot be cast at all
fn castable<'a>(term: &'a Term, to_type: &str) -> EvalResult<&'a Literal> {
    match term {
        Term::Literal(literal) if literal.has_language() => Err(EvalError::cast_error(
            literal.effective_datatype(),
            to_type,
            "language-tagged literals cannot be cast",
        )),
        Term::Literal(literal) => Ok(literal),
        Term::Iri(_) => Err(EvalError::cast_error("IRI", to_type, "only xsd:string accepts an IRI")),
        other => Err(EvalError::type_mismatch("literal or IRI", other.kind_name())),
    }
}

fn parse_numeric(literal: &Literal) -> Option<Numeric> {
    let datatype = literal.datatype()?.as_str();
    let lexical = literal.lexical().trim();
    if xsd::INTEGER_TYPES.contains(&datatype) {
        Decimal::from_str(lexical).ok().map(Numeric::Integer)
    } else if datatype == xsd::DECIMAL {
        Decimal::from_str(lexical).ok().map(Numeric::Decimal)
    } else if datatype == xsd::DOUBLE || datatype == xsd::FLOAT {
        parse_double(lexical).map(Numeric::Double)
    } else {
        None
    }
}

fn parse_double(lexical: &str) -> Option<f64> {
    match lexical {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        // Rust accepts spellings such as "inf" and "infinity" that XSD does not
        other if other.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) => None,
        other => other.parse().ok(),
    }
}

fn parse_boolean(lexical: &str) -> Option<bool> {
    match lexical.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn is_integer_lexical(lexical: &str) -> bool {
    let digits = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn invalid(literal: &Literal, to_type: &str) -> EvalError {
    EvalError::cast_error(
        literal.effective_datatype(),
        to_type,
        format!("invalid lexical form {:?}", literal.lexical()),
    )
}

/// Canonical XSD lexical form of a double, e.g. `1.5E2`
pub(crate) fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    let formatted = format!("{value:E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => format!("{mantissa}.0E{exponent}"),
        _ => formatted,
    }
}

fn cast_to_string(term: &Term) -> EvalResult<Term> {
    match term {
        Term::Iri(iri) => Ok(Term::typed_literal(iri.as_str(), xsd::STRING)),
        other => {
            let literal = castable(other, xsd::STRING)?;
            Ok(Term::typed_literal(literal.lexical(), xsd::STRING))
        }
    }
}

fn cast_to_boolean(term: &Term) -> EvalResult<Term> {
    let literal = castable(term, xsd::BOOLEAN)?;
    let datatype = literal.effective_datatype();
    let value = if datatype == xsd::STRING || datatype == xsd::BOOLEAN {
        parse_boolean(literal.lexical()).ok_or_else(|| invalid(literal, xsd::BOOLEAN))?
    } else if let Some(numeric) = parse_numeric(literal) {
        !numeric.is_zero_or_nan()
    } else if literal.is_numeric() {
        return Err(invalid(literal, xsd::BOOLEAN));
    } else {
        return Err(EvalError::cast_error(datatype, xsd::BOOLEAN, "unsupported source datatype"));
    };
    Ok(Term::boolean(value))
}

fn cast_to_integer(term: &Term) -> EvalResult<Term> {
    let literal = castable(term, xsd::INTEGER)?;
    let datatype = literal.effective_datatype();
    let value = if datatype == xsd::STRING {
        let lexical = literal.lexical().trim();
        if !is_integer_lexical(lexical) {
            return Err(invalid(literal, xsd::INTEGER));
        }
        Decimal::from_str(lexical).map_err(|_| invalid(literal, xsd::INTEGER))?
    } else if datatype == xsd::BOOLEAN {
        let value = parse_boolean(literal.lexical()).ok_or_else(|| invalid(literal, xsd::INTEGER))?;
        Decimal::from(u8::from(value))
    } else {
        match parse_numeric(literal) {
            Some(Numeric::Integer(d) | Numeric::Decimal(d)) => d.trunc(),
            Some(Numeric::Double(f)) if f.is_finite() => Decimal::try_from(f.trunc())
                .map_err(|e| EvalError::cast_error(datatype, xsd::INTEGER, e.to_string()))?,
            Some(Numeric::Double(_)) => {
                return Err(EvalError::cast_error(datatype, xsd::INTEGER, "value is not finite"));
            }
            None if literal.is_numeric() => return Err(invalid(literal, xsd::INTEGER)),
            None => {
                return Err(EvalError::cast_error(datatype, xsd::INTEGER, "unsupported source datatype"));
            }
        }
    };
    Ok(Term::typed_literal(value.normalize().to_string(), xsd::INTEGER))
}

fn cast_to_decimal(term: &Term) -> EvalResult<Term> {
    let literal = castable(term, xsd::DECIMAL)?;
    let datatype = literal.effective_datatype();
    let value = if datatype == xsd::STRING {
        let lexical = literal.lexical().trim();
        if lexical.contains(['e', 'E']) {
            return Err(invalid(literal, xsd::DECIMAL));
        }
        Decimal::from_str(lexical).map_err(|_| invalid(literal, xsd::DECIMAL))?
    } else if datatype == xsd::BOOLEAN {
        let value = parse_boolean(literal.lexical()).ok_or_else(|| invalid(literal, xsd::DECIMAL))?;
        Decimal::from(u8::from(value))
    } else {
        match parse_numeric(literal) {
            Some(Numeric::Integer(d) | Numeric::Decimal(d)) => d,
            Some(Numeric::Double(f)) if f.is_finite() => Decimal::try_from(f)
                .map_err(|e| EvalError::cast_error(datatype, xsd::DECIMAL, e.to_string()))?,
            Some(Numeric::Double(_)) => {
                return Err(EvalError::cast_error(datatype, xsd::DECIMAL, "value is not finite"));
            }
            None if literal.is_numeric() => return Err(invalid(literal, xsd::DECIMAL)),
            None => {
                return Err(EvalError::cast_error(datatype, xsd::DECIMAL, "unsupported source datatype"));
            }
        }
    };
    Ok(Term::Literal(Literal::decimal(value)))
}

fn cast_to_floating(term: &Term, to_type: &str) -> EvalResult<Term> {
    let literal = castable(term, to_type)?;
    let datatype = literal.effective_datatype();
    let value = if datatype == xsd::STRING {
        parse_double(literal.lexical().trim()).ok_or_else(|| invalid(literal, to_type))?
    } else if datatype == xsd::BOOLEAN {
        let value = parse_boolean(literal.lexical()).ok_or_else(|| invalid(literal, to_type))?;
        if value { 1.0 } else { 0.0 }
    } else {
        match parse_numeric(literal) {
            Some(Numeric::Integer(d) | Numeric::Decimal(d)) => d
                .to_f64()
                .ok_or_else(|| EvalError::cast_error(datatype, to_type, "value out of range"))?,
            Some(Numeric::Double(f)) => f,
            None if literal.is_numeric() => return Err(invalid(literal, to_type)),
            None => {
                return Err(EvalError::cast_error(datatype, to_type, "unsupported source datatype"));
            }
        }
    };
    let value = if to_type == xsd::FLOAT {
        f64::from(value as f32)
    } else {
        value
    };
    Ok(Term::typed_literal(format_double(value), to_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Term::simple_literal("42"), Term::integer(42))]
    #[case(Term::typed_literal(" -7 ", xsd::STRING), Term::integer(-7))]
    #[case(Term::typed_literal("3.9", xsd::DECIMAL), Term::integer(3))]
    #[case(Term::typed_literal("-2.5E0", xsd::DOUBLE), Term::integer(-2))]
    #[case(Term::boolean(true), Term::integer(1))]
    #[case(Term::typed_literal("0012", xsd::INT), Term::integer(12))]
    fn test_cast_to_integer(#[case] input: Term, #[case] expected: Term) {
        assert_eq!(cast_to_integer(&input).unwrap(), expected);
    }

    #[rstest]
    #[case(Term::simple_literal("4.2"))]
    #[case(Term::simple_literal("abc"))]
    #[case(Term::typed_literal("INF", xsd::DOUBLE))]
    #[case(Term::typed_literal("2024-01-01", "http://www.w3.org/2001/XMLSchema#date"))]
    #[case(Term::language_literal("1", "en"))]
    #[case(Term::iri("http://example.org/1"))]
    fn test_cast_to_integer_errors(#[case] input: Term) {
        assert!(matches!(cast_to_integer(&input), Err(EvalError::CastError { .. })));
    }

    #[test]
    fn test_cast_blank_node_is_type_mismatch() {
        assert!(matches!(
            cast_to_integer(&Term::blank_node("b")),
            Err(EvalError::TypeMismatch { .. })
        ));
    }

    #[rstest]
    #[case(Term::simple_literal("true"), true)]
    #[case(Term::simple_literal("0"), false)]
    #[case(Term::integer(5), true)]
    #[case(Term::typed_literal("0.0", xsd::DECIMAL), false)]
    #[case(Term::typed_literal("NaN", xsd::DOUBLE), false)]
    fn test_cast_to_boolean(#[case] input: Term, #[case] expected: bool) {
        assert_eq!(cast_to_boolean(&input).unwrap(), Term::boolean(expected));
    }

    #[test]
    fn test_cast_to_string() {
        assert_eq!(
            cast_to_string(&Term::iri("http://example.org/a")).unwrap(),
            Term::typed_literal("http://example.org/a", xsd::STRING)
        );
        assert_eq!(
            cast_to_string(&Term::integer(3)).unwrap(),
            Term::typed_literal("3", xsd::STRING)
        );
    }

    #[test]
    fn test_cast_to_decimal() {
        assert_eq!(
            cast_to_decimal(&Term::simple_literal("1.50")).unwrap(),
            Term::typed_literal("1.5", xsd::DECIMAL)
        );
        assert!(cast_to_decimal(&Term::simple_literal("1e3")).is_err());
        assert_eq!(
            cast_to_decimal(&Term::integer(7)).unwrap(),
            Term::typed_literal("7", xsd::DECIMAL)
        );
    }

    #[test]
    fn test_cast_to_double() {
        assert_eq!(
            cast_to_floating(&Term::integer(150), xsd::DOUBLE).unwrap(),
            Term::typed_literal("1.5E2", xsd::DOUBLE)
        );
        assert_eq!(
            cast_to_floating(&Term::simple_literal("1"), xsd::DOUBLE).unwrap(),
            Term::typed_literal("1.0E0", xsd::DOUBLE)
        );
        assert_eq!(
            cast_to_floating(&Term::simple_literal("-INF"), xsd::FLOAT).unwrap(),
            Term::typed_literal("-INF", xsd::FLOAT)
        );
        assert!(cast_to_floating(&Term::simple_literal("infinity"), xsd::DOUBLE).is_err());
    }

    #[test]
    fn test_format_double() {
        assert_eq!(format_double(0.0), "0.0E0");
        assert_eq!(format_double(-0.125), "-1.25E-1");
        assert_eq!(format_double(f64::NAN), "NaN");
    }
}
