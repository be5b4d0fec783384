//! Query solutions and solution sequences

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::term::{Term, Variable};

/// Variable lookup capability consumed by expression evaluation
///
/// A variable may be part of a binding's domain while carrying no value; such
/// a variable is *explicitly unbound*, which is distinct from a variable the
/// binding knows nothing about.
pub trait Binding {
    /// Value bound to `variable`, if any
    fn lookup(&self, variable: &Variable) -> Option<&Term>;

    /// Whether `variable` is declared in the domain without a value
    fn is_explicitly_unbound(&self, variable: &Variable) -> bool;
}

/// A single query solution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    bindings: IndexMap<Variable, Option<Term>>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bound variable
    pub fn with(mut self, variable: impl Into<Variable>, value: impl Into<Term>) -> Self {
        self.bindings.insert(variable.into(), Some(value.into()));
        self
    }

    /// Declare a variable in the domain without binding it
    pub fn with_unbound(mut self, variable: impl Into<Variable>) -> Self {
        self.bindings.insert(variable.into(), None);
        self
    }

    pub fn bind(&mut self, variable: impl Into<Variable>, value: impl Into<Term>) {
        self.bindings.insert(variable.into(), Some(value.into()));
    }

    /// Value bound to the variable with the given name
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.lookup(&Variable::new(name))
    }

    /// Whether the variable has a value
    pub fn is_bound(&self, variable: &Variable) -> bool {
        matches!(self.bindings.get(variable), Some(Some(_)))
    }

    /// Whether the variable is part of the domain, bound or not
    pub fn contains(&self, variable: &Variable) -> bool {
        self.bindings.contains_key(variable)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.bindings.keys()
    }

    /// Bound (variable, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.bindings
            .iter()
            .filter_map(|(variable, value)| value.as_ref().map(|value| (variable, value)))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Binding for Solution {
    fn lookup(&self, variable: &Variable) -> Option<&Term> {
        self.bindings.get(variable).and_then(Option::as_ref)
    }

    fn is_explicitly_unbound(&self, variable: &Variable) -> bool {
        matches!(self.bindings.get(variable), Some(None))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (variable, value)) in self.bindings.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            match value {
                Some(value) => write!(f, "{variable}={value}")?,
                None => write!(f, "{variable}")?,
            }
        }
        f.write_str("}")
    }
}

impl<V: Into<Variable>, T: Into<Term>> FromIterator<(V, T)> for Solution {
    fn from_iter<I: IntoIterator<Item = (V, T)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(variable, value)| (variable.into(), Some(value.into())))
                .collect(),
        }
    }
}

/// An ordered sequence of solutions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solutions {
    solutions: Vec<Solution>,
}

impl Solutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_solutions(solutions: Vec<Solution>) -> Self {
        Self { solutions }
    }

    pub fn push(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    /// Keep the solutions matching `predicate`, preserving order
    pub fn filter_by<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Solution) -> bool,
    {
        Self {
            solutions: self
                .solutions
                .iter()
                .filter(|solution| predicate(solution))
                .cloned()
                .collect(),
        }
    }
}

impl IntoIterator for Solutions {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl FromIterator<Solution> for Solutions {
    fn from_iter<I: IntoIterator<Item = Solution>>(iter: I) -> Self {
        Self {
            solutions: iter.into_iter().collect(),
        }
    }
}
