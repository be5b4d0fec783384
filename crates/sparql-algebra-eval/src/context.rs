//! Options shared by evaluation, filtering and query dispatch

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Default bound on expression nesting during evaluation
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What the solution filter does when evaluating its expression fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterErrorPolicy {
    /// Treat the error as "not satisfied" and drop the solution
    #[default]
    Exclude,
    /// Abort filtering and return the error
    Propagate,
}

/// Options for one evaluation or query call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    /// Maximum expression nesting depth
    pub max_depth: usize,
    /// Error handling of the solution filter
    pub filter_errors: FilterErrorPolicy,
    /// Back-end specific options, passed through to the store untouched
    pub extensions: IndexMap<String, JsonValue>,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            filter_errors: FilterErrorPolicy::default(),
            extensions: IndexMap::new(),
        }
    }

    pub fn builder() -> EvaluationOptionsBuilder {
        EvaluationOptionsBuilder::new()
    }

    /// Get a pass-through option
    pub fn extension(&self, name: &str) -> Option<&JsonValue> {
        self.extensions.get(name)
    }
}

/// Builder for [`EvaluationOptions`]
#[derive(Debug, Default)]
pub struct EvaluationOptionsBuilder {
    options: EvaluationOptions,
}

impl EvaluationOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum expression nesting depth
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Set the filter error policy
    pub fn filter_errors(mut self, policy: FilterErrorPolicy) -> Self {
        self.options.filter_errors = policy;
        self
    }

    /// Add a pass-through option for the store
    pub fn extension(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.options.extensions.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> EvaluationOptions {
        self.options
    }
}
