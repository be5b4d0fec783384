//! RDF terms - the values flowing through SPARQL expression evaluation
//!
//! A [`Term`] is an IRI, a literal, a blank node or a variable. Variables are
//! references resolved against a [`Binding`](crate::Binding), never values
//! in their own right.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};
use crate::vocab::{rdf, xsd};

/// An absolute IRI
///
/// Deserialized IRIs are validated with [`Iri::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Iri(String);

impl Iri {
    /// Create an IRI without validation
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Create an IRI, rejecting relative references and forbidden characters
    pub fn parse(iri: impl Into<String>) -> ModelResult<Self> {
        let iri = iri.into();
        let has_scheme = iri
            .split_once(':')
            .is_some_and(|(scheme, _)| {
                !scheme.is_empty()
                    && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            });
        if !has_scheme {
            return Err(ModelError::invalid_iri(iri, "missing scheme"));
        }
        if let Some(c) = iri
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\'))
        {
            return Err(ModelError::invalid_iri(iri.clone(), format!("forbidden character {c:?}")));
        }
        Ok(Self(iri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl TryFrom<String> for Iri {
    type Error = ModelError;

    fn try_from(value: String) -> ModelResult<Self> {
        Self::parse(value)
    }
}

impl From<Iri> for String {
    fn from(value: Iri) -> Self {
        value.0
    }
}

/// A blank node, identified by a store-local label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlankNode(String);

impl BlankNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A query variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Variable(String);

impl Variable {
    /// Create a variable; a leading `?` or `$` is stripped
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix(['?', '$']) {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Variable> for String {
    fn from(value: Variable) -> Self {
        value.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// An RDF literal
///
/// At most one of `datatype` and `language` is set. A literal with neither
/// is a simple literal. Deserialization enforces the same invariants as the
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LiteralRepr")]
pub struct Literal {
    lexical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    datatype: Option<Iri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl Literal {
    /// A simple literal (no datatype, no language)
    pub fn simple(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// A typed literal
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<Iri>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// A language-tagged literal. Tags are case-insensitive and stored lower case.
    pub fn language_tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into().to_ascii_lowercase()),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), xsd::BOOLEAN)
    }

    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }

    pub fn decimal(value: Decimal) -> Self {
        Self::typed(value.normalize().to_string(), xsd::DECIMAL)
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// The explicit datatype, if any
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn has_language(&self) -> bool {
        self.language.is_some()
    }

    /// The datatype this literal has under RDF 1.1: `rdf:langString` for
    /// language-tagged literals, `xsd:string` for simple literals.
    pub fn effective_datatype(&self) -> &str {
        match (&self.datatype, &self.language) {
            (Some(dt), _) => dt.as_str(),
            (None, Some(_)) => rdf::LANG_STRING,
            (None, None) => xsd::STRING,
        }
    }

    /// Simple literal, `xsd:string` literal, or language-tagged literal without datatype
    pub fn is_plain(&self) -> bool {
        match (&self.datatype, &self.language) {
            (None, _) => true,
            (Some(dt), None) => dt.as_str() == xsd::STRING,
            (Some(_), Some(_)) => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.datatype.as_ref().is_some_and(|dt| xsd::is_numeric(dt.as_str()))
    }

    /// Effective boolean value, `None` when the literal has no EBV
    pub fn effective_boolean_value(&self) -> Option<bool> {
        if self.is_plain() {
            return Some(!self.lexical.is_empty());
        }
        let datatype = self.datatype.as_ref()?.as_str();
        let lexical = self.lexical.trim();
        if datatype == xsd::BOOLEAN {
            return Some(matches!(lexical, "true" | "1"));
        }
        if xsd::INTEGER_TYPES.contains(&datatype) {
            let digits = lexical.strip_prefix(['+', '-']).unwrap_or(lexical);
            // Invalid lexical forms have an EBV of false
            return Some(
                !digits.is_empty()
                    && digits.chars().all(|c| c.is_ascii_digit())
                    && digits.chars().any(|c| c != '0'),
            );
        }
        if datatype == xsd::DECIMAL {
            return Some(Decimal::from_str(lexical).is_ok_and(|d| !d.is_zero()));
        }
        if datatype == xsd::DOUBLE || datatype == xsd::FLOAT {
            return Some(lexical.parse::<f64>().is_ok_and(|d| d != 0.0 && !d.is_nan()));
        }
        None
    }
}

#[derive(Deserialize)]
struct LiteralRepr {
    lexical: String,
    #[serde(default)]
    datatype: Option<Iri>,
    #[serde(default)]
    language: Option<String>,
}

impl TryFrom<LiteralRepr> for Literal {
    type Error = ModelError;

    fn try_from(value: LiteralRepr) -> ModelResult<Self> {
        match (value.datatype, value.language) {
            (Some(_), Some(_)) => Err(ModelError::invalid_literal(
                value.lexical,
                "both datatype and language tag",
            )),
            (Some(datatype), None) => Ok(Self::typed(value.lexical, datatype)),
            (None, Some(language)) => Ok(Self::language_tagged(value.lexical, language)),
            (None, None) => Ok(Self::simple(value.lexical)),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^{datatype}")
        } else {
            Ok(())
        }
    }
}

/// An RDF term or a variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Term {
    Iri(Iri),
    Literal(Literal),
    BlankNode(BlankNode),
    Variable(Variable),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(Iri::new(iri))
    }

    pub fn simple_literal(lexical: impl Into<String>) -> Self {
        Self::Literal(Literal::simple(lexical))
    }

    pub fn typed_literal(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal(Literal::typed(lexical, Iri::new(datatype)))
    }

    pub fn language_literal(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self::Literal(Literal::language_tagged(lexical, language))
    }

    pub fn blank_node(id: impl Into<String>) -> Self {
        Self::BlankNode(BlankNode::new(id))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(Variable::new(name))
    }

    pub fn boolean(value: bool) -> Self {
        Self::Literal(Literal::boolean(value))
    }

    pub fn integer(value: i64) -> Self {
        Self::Literal(Literal::integer(value))
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Self::Iri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    /// Explicit datatype of a literal
    pub fn datatype(&self) -> Option<&Iri> {
        self.as_literal().and_then(Literal::datatype)
    }

    pub fn language(&self) -> Option<&str> {
        self.as_literal().and_then(Literal::language)
    }

    pub fn has_language(&self) -> bool {
        self.as_literal().is_some_and(Literal::has_language)
    }

    pub fn is_plain(&self) -> bool {
        self.as_literal().is_some_and(Literal::is_plain)
    }

    /// Effective boolean value; only literals of the supported datatypes have one
    pub fn effective_boolean_value(&self) -> Option<bool> {
        self.as_literal().and_then(Literal::effective_boolean_value)
    }

    /// Short description of the term kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Iri(_) => "IRI",
            Self::Literal(_) => "Literal",
            Self::BlankNode(_) => "BlankNode",
            Self::Variable(_) => "Variable",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => iri.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
            Self::BlankNode(node) => node.fmt(f),
            Self::Variable(variable) => variable.fmt(f),
        }
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Self::Iri(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Self::BlankNode(value)
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}
