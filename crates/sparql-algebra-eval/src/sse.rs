//! SPARQL S-expression (SSE) rendering
//!
//! Produces the textual tree form used in error messages and test fixtures.
//! Rendering is display-only; evaluation never consults it.

use crate::expression::Expression;
use sparql_algebra_model::{Pattern, Term, TriplePattern};
use std::fmt::{self, Write};

/// Types that render as an S-expression
pub trait ToSse {
    /// Write the S-expression form to `out`
    fn write_sse(&self, out: &mut String) -> fmt::Result;

    /// Render the S-expression form
    fn to_sse(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_sse(&mut out);
        out
    }
}

impl ToSse for Term {
    fn write_sse(&self, out: &mut String) -> fmt::Result {
        write!(out, "{self}")
    }
}

impl ToSse for Expression {
    fn write_sse(&self, out: &mut String) -> fmt::Result {
        match self {
            Self::Constant(term) => term.write_sse(out),
            Self::Variable(variable) => write!(out, "{variable}"),
            Self::Compound(compound) => {
                out.push('(');
                for (index, operand) in compound.operands().enumerate() {
                    if index > 0 {
                        out.push(' ');
                    }
                    operand.write_sse(out)?;
                }
                out.push(')');
                Ok(())
            }
        }
    }
}

impl ToSse for TriplePattern {
    fn write_sse(&self, out: &mut String) -> fmt::Result {
        write!(out, "(triple {} {} {})", self.subject, self.predicate, self.object)
    }
}

impl ToSse for Pattern {
    /// A pattern renders as a BGP, wrapped in `graph` when it is scoped to a named graph
    fn write_sse(&self, out: &mut String) -> fmt::Result {
        if let Some(graph_name) = &self.graph_name {
            write!(out, "(graph {graph_name} ")?;
        }
        out.push_str("(bgp");
        for pattern in &self.patterns {
            out.push(' ');
            pattern.write_sse(out)?;
        }
        out.push(')');
        if self.graph_name.is_some() {
            out.push(')');
        }
        Ok(())
    }
}

impl<T: ToSse> ToSse for [T] {
    fn write_sse(&self, out: &mut String) -> fmt::Result {
        out.push('(');
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            item.write_sse(out)?;
        }
        out.push(')');
        Ok(())
    }
}

/// Render any SSE-capable value
pub fn to_sse<T: ToSse + ?Sized>(value: &T) -> String {
    value.to_sse()
}
