//! Extension function registry
//!
//! Maps an evaluated compound tag and its argument count to the function
//! implementing it.

use crate::error::EvalResult;
use sparql_algebra_model::Term;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type alias for extension function implementations
pub type ExtensionFn = Arc<dyn Fn(&[Term]) -> EvalResult<Term> + Send + Sync>;

/// Lookup key of an extension function
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionKey {
    /// Evaluated tag, usually an IRI
    pub tag: Term,
    /// Number of arguments after the tag
    pub arity: usize,
}

impl FunctionKey {
    pub fn new(tag: impl Into<Term>, arity: usize) -> Self {
        Self {
            tag: tag.into(),
            arity,
        }
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tag, self.arity)
    }
}

/// Registry of extension functions keyed by tag and arity
#[derive(Default, Clone)]
pub struct ExtensionRegistry {
    functions: HashMap<FunctionKey, ExtensionFn>,
}

impl ExtensionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard XSD casts and XPath functions registered
    pub fn with_standard_functions() -> Self {
        let mut registry = Self::new();
        crate::operators::register_standard_functions(&mut registry);
        registry
    }

    /// Register a function, replacing any previous registration for the same key
    pub fn register(&mut self, tag: impl Into<Term>, arity: usize, implementation: ExtensionFn) {
        self.functions.insert(FunctionKey::new(tag, arity), implementation);
    }

    /// Register a function given as a closure
    pub fn register_fn<F>(&mut self, tag: impl Into<Term>, arity: usize, implementation: F)
    where
        F: Fn(&[Term]) -> EvalResult<Term> + Send + Sync + 'static,
    {
        self.register(tag, arity, Arc::new(implementation));
    }

    /// Get the function registered for a tag and arity
    pub fn get(&self, tag: &Term, arity: usize) -> Option<&ExtensionFn> {
        self.functions.get(&FunctionKey {
            tag: tag.clone(),
            arity,
        })
    }

    pub fn contains(&self, tag: &Term, arity: usize) -> bool {
        self.get(tag, arity).is_some()
    }

    /// Remove a registration, returning the function if there was one
    pub fn unregister(&mut self, tag: &Term, arity: usize) -> Option<ExtensionFn> {
        self.functions.remove(&FunctionKey {
            tag: tag.clone(),
            arity,
        })
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered keys in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &FunctionKey> {
        self.functions.keys()
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self.functions.keys().map(ToString::to_string).collect();
        keys.sort();
        f.debug_struct("ExtensionRegistry").field("functions", &keys).finish()
    }
}
