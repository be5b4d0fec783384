//! Triples and basic graph patterns
//!
//! A [`Pattern`] is the plain (non-algebra) query form: a conjunction of
//! triple patterns, optionally scoped to a named graph.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ModelError, ModelResult};
use crate::term::{Iri, Term, Variable};

/// A ground statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<Term>, predicate: impl Into<Iri>, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A triple whose positions may hold variables
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriplePattern {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl TriplePattern {
    /// Create a triple pattern
    ///
    /// Literals are rejected in subject and predicate position, blank nodes in
    /// predicate position.
    pub fn new(subject: Term, predicate: Term, object: Term) -> ModelResult<Self> {
        if subject.is_literal() {
            return Err(ModelError::invalid_pattern_term("subject", subject.to_string()));
        }
        if predicate.is_literal() || predicate.is_blank_node() {
            return Err(ModelError::invalid_pattern_term("predicate", predicate.to_string()));
        }
        Ok(Self {
            subject,
            predicate,
            object,
        })
    }

    /// Variables in subject, predicate, object order
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        [&self.subject, &self.predicate, &self.object]
            .into_iter()
            .filter_map(Term::as_variable)
    }

    /// Match against a statement, returning the variable assignments when it matches
    pub fn matches(&self, triple: &Triple) -> Option<Vec<(Variable, Term)>> {
        let predicate = Term::Iri(triple.predicate.clone());
        let mut assignments: Vec<(Variable, Term)> = Vec::new();
        for (pattern, value) in [
            (&self.subject, &triple.subject),
            (&self.predicate, &predicate),
            (&self.object, &triple.object),
        ] {
            match pattern {
                Term::Variable(variable) => {
                    match assignments.iter().find(|(bound, _)| bound == variable) {
                        Some((_, existing)) if existing != value => return None,
                        Some(_) => {}
                        None => assignments.push((variable.clone(), value.clone())),
                    }
                }
                constant if constant != value => return None,
                _ => {}
            }
        }
        Some(assignments)
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A basic graph pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub patterns: Vec<TriplePattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_name: Option<Term>,
}

impl Pattern {
    pub fn new(patterns: Vec<TriplePattern>) -> Self {
        Self {
            patterns,
            graph_name: None,
        }
    }

    /// Scope the pattern to a named graph
    pub fn in_graph(mut self, graph_name: impl Into<Term>) -> Self {
        self.graph_name = Some(graph_name.into());
        self
    }

    /// Distinct variables in order of first appearance
    pub fn variables(&self) -> Vec<&Variable> {
        let mut variables: Vec<&Variable> = Vec::new();
        let graph = self.graph_name.iter().filter_map(Term::as_variable);
        for variable in graph.chain(self.patterns.iter().flat_map(TriplePattern::variables)) {
            if !variables.contains(&variable) {
                variables.push(variable);
            }
        }
        variables
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
