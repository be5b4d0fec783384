//! Query dispatch
//!
//! The [`QueryDispatcher`] accepts either an algebra node or a plain basic
//! graph pattern. Plain patterns go to the store's pattern matcher exactly as
//! given; algebra nodes run through the store's execution entry point between
//! the optional lifecycle hooks, and the result is shaped according to the
//! node's declared [`QueryShape`].

use crate::algebra::{AlgebraNode, QueryResult, QueryShape};
use crate::context::EvaluationOptions;
use crate::error::{EvalError, EvalResult};
use sparql_algebra_model::{Pattern, Solution, Solutions, Triple};

/// Calling convention of a store's execution entry point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecuteArity {
    /// `query_execute` receives the node only
    NodeOnly,
    /// `query_execute` receives the node and the options
    #[default]
    NodeWithOptions,
}

/// A queryable triple store
pub trait Store {
    /// Whether the store accepts queries at all
    fn is_queryable(&self) -> bool {
        true
    }

    /// Which calling convention [`Store::query_execute`] expects
    fn execute_arity(&self) -> ExecuteArity {
        ExecuteArity::NodeWithOptions
    }

    /// Baseline pattern matcher for plain basic graph patterns
    fn query_legacy(&self, pattern: &Pattern, options: &EvaluationOptions) -> EvalResult<Solutions>;

    /// Execution entry point for algebra nodes
    ///
    /// `options` is `None` exactly when [`Store::execute_arity`] is
    /// [`ExecuteArity::NodeOnly`]. The default executes the node against this
    /// store.
    fn query_execute(
        &self,
        node: &AlgebraNode,
        options: Option<&EvaluationOptions>,
    ) -> EvalResult<QueryResult>
    where
        Self: Sized,
    {
        match options {
            Some(options) => node.execute(self, options),
            None => node.execute(self, &EvaluationOptions::default()),
        }
    }
}

/// Query input, chosen by the caller
#[derive(Debug, Clone, Copy)]
pub enum QueryInput<'a> {
    /// Algebra expression with execution semantics
    Algebra(&'a AlgebraNode),
    /// Plain basic graph pattern
    Legacy(&'a Pattern),
}

impl<'a> From<&'a AlgebraNode> for QueryInput<'a> {
    fn from(value: &'a AlgebraNode) -> Self {
        Self::Algebra(value)
    }
}

impl<'a> From<&'a Pattern> for QueryInput<'a> {
    fn from(value: &'a Pattern) -> Self {
        Self::Legacy(value)
    }
}

type Hook<'h> = Box<dyn Fn(&AlgebraNode) + 'h>;

/// Optional callbacks around algebra execution
#[derive(Default)]
pub struct QueryHooks<'h> {
    /// Called before the store executes the node
    pub before_query: Option<Hook<'h>>,
    /// Called after the store executed the node successfully
    pub after_query: Option<Hook<'h>>,
}

impl<'h> QueryHooks<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before_query(mut self, hook: impl Fn(&AlgebraNode) + 'h) -> Self {
        self.before_query = Some(Box::new(hook));
        self
    }

    pub fn after_query(mut self, hook: impl Fn(&AlgebraNode) + 'h) -> Self {
        self.after_query = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for QueryHooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryHooks")
            .field("before_query", &self.before_query.is_some())
            .field("after_query", &self.after_query.is_some())
            .finish()
    }
}

/// An item of a non-solution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultItem {
    Solution(Solution),
    Boolean(bool),
    Statement(Triple),
}

/// Iterator view over a raw query result
#[derive(Debug)]
pub struct ResultEnumerator {
    shape: QueryShape,
    items: std::vec::IntoIter<ResultItem>,
}

impl ResultEnumerator {
    pub fn new(shape: QueryShape, result: QueryResult) -> Self {
        let items: Vec<ResultItem> = match result {
            QueryResult::Solutions(solutions) => solutions.into_iter().map(ResultItem::Solution).collect(),
            QueryResult::Boolean(value) => vec![ResultItem::Boolean(value)],
            QueryResult::Statements(statements) => statements.into_iter().map(ResultItem::Statement).collect(),
        };
        Self {
            shape,
            items: items.into_iter(),
        }
    }

    /// Declared shape of the query that produced this result
    pub fn shape(&self) -> QueryShape {
        self.shape
    }
}

impl Iterator for ResultEnumerator {
    type Item = ResultItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// Dispatcher output
#[derive(Debug)]
pub enum QueryOutput {
    /// Solution sequence, returned as produced
    Solutions(Solutions),
    /// Enumerator over a boolean or statement result
    Enumerator(ResultEnumerator),
}

impl QueryOutput {
    pub fn shape(&self) -> QueryShape {
        match self {
            Self::Solutions(_) => QueryShape::Solutions,
            Self::Enumerator(enumerator) => enumerator.shape(),
        }
    }

    pub fn into_solutions(self) -> Option<Solutions> {
        match self {
            Self::Solutions(solutions) => Some(solutions),
            Self::Enumerator(_) => None,
        }
    }

    pub fn into_enumerator(self) -> Option<ResultEnumerator> {
        match self {
            Self::Solutions(_) => None,
            Self::Enumerator(enumerator) => Some(enumerator),
        }
    }
}

/// Routes queries to a store
#[derive(Debug, Default)]
pub struct QueryDispatcher<'h> {
    hooks: QueryHooks<'h>,
}

impl<'h> QueryDispatcher<'h> {
    /// Create a dispatcher without hooks
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hooks(hooks: QueryHooks<'h>) -> Self {
        Self { hooks }
    }

    /// Execute a query against `store`
    ///
    /// Store errors propagate unchanged;
    /// `after_query` does not run when execution fails.
    pub fn execute<'a, S>(
        &self,
        input: impl Into<QueryInput<'a>>,
        store: &S,
        options: &EvaluationOptions,
    ) -> EvalResult<QueryOutput>
    where
        S: Store,
    {
        if !store.is_queryable() {
            return Err(EvalError::NotQueryable);
        }

        match input.into() {
            QueryInput::Legacy(pattern) => {
                log::debug!("delegating plain pattern with {} triple(s)", pattern.patterns.len());
                store.query_legacy(pattern, options).map(QueryOutput::Solutions)
            }
            QueryInput::Algebra(node) => self.execute_algebra(node, store, options),
        }
    }

    fn execute_algebra<S>(
        &self,
        node: &AlgebraNode,
        store: &S,
        options: &EvaluationOptions,
    ) -> EvalResult<QueryOutput>
    where
        S: Store,
    {
        log::debug!("executing algebra node {}", node.tag());

        if let Some(before_query) = &self.hooks.before_query {
            log::debug!("running before_query hook");
            before_query(node);
        }

        let result = match store.execute_arity() {
            ExecuteArity::NodeOnly => store.query_execute(node, None)?,
            ExecuteArity::NodeWithOptions => store.query_execute(node, Some(options))?,
        };

        if let Some(after_query) = &self.hooks.after_query {
            log::debug!("running after_query hook");
            after_query(node);
        }

        Self::shape_result(node.shape(), result)
    }

    fn shape_result(shape: QueryShape, result: QueryResult) -> EvalResult<QueryOutput> {
        match (shape, result) {
            (QueryShape::Solutions, QueryResult::Solutions(solutions)) => Ok(QueryOutput::Solutions(solutions)),
            (QueryShape::Solutions, other) => Err(EvalError::type_mismatch(
                "solutions",
                format!("{:?} result", other.shape()),
            )),
            (shape, result) => Ok(QueryOutput::Enumerator(ResultEnumerator::new(shape, result))),
        }
    }
}

/// Execute a query with a hook-less dispatcher
pub fn execute<'a, S: Store>(
    input: impl Into<QueryInput<'a>>,
    store: &S,
    options: &EvaluationOptions,
) -> EvalResult<QueryOutput> {
    QueryDispatcher::new().execute(input, store, options)
}
