//! Query Dispatch Tests
//!
//! Runs plain patterns and algebra operators against a small in-memory store:
//! - Plain patterns delegate to the store's matcher unchanged
//! - Operators execute through the store and are shaped by their declared shape
//! - Filtering composes with dispatched solutions

use pretty_assertions::assert_eq;
use sparql_algebra_eval::{
    AlgebraNode, Compound, EvalError, EvalResult, EvaluationOptions, Evaluator, ExecuteArity, Expression,
    FilterCriterion, Operator, QueryDispatcher, QueryHooks, QueryOutput, QueryResult, QueryShape, ResultItem,
    Store, filter_solutions,
};
use sparql_algebra_model::vocab::fn_;
use sparql_algebra_model::{Binding, Pattern, Solution, Solutions, Term, Triple, TriplePattern};
use std::cell::RefCell;

// ============================================================================
// Test Store
// ============================================================================

const DOAP_DEVELOPER: &str = "http://usefulinc.com/ns/doap#developer";
const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";

struct MemoryStore {
    triples: Vec<Triple>,
    arity: ExecuteArity,
}

impl MemoryStore {
    fn new(arity: ExecuteArity) -> Self {
        Self {
            triples: vec![
                Triple::new(Term::iri("http://example.org/rdf"), DOAP_DEVELOPER, Term::iri("http://example.org/alice")),
                Triple::new(Term::iri("http://example.org/rdf"), DOAP_DEVELOPER, Term::iri("http://example.org/bob")),
                Triple::new(Term::iri("http://example.org/alice"), FOAF_NAME, Term::language_literal("Alice", "en")),
                Triple::new(Term::iri("http://example.org/bob"), FOAF_NAME, Term::simple_literal("Bob")),
            ],
            arity,
        }
    }
}

impl Store for MemoryStore {
    fn execute_arity(&self) -> ExecuteArity {
        self.arity
    }

    fn query_legacy(&self, pattern: &Pattern, _options: &EvaluationOptions) -> EvalResult<Solutions> {
        let mut solutions = vec![Solution::new()];
        for triple_pattern in &pattern.patterns {
            let mut next = Vec::new();
            for solution in &solutions {
                for triple in &self.triples {
                    let Some(assignments) = triple_pattern.matches(triple) else {
                        continue;
                    };
                    let consistent = assignments
                        .iter()
                        .all(|(variable, value)| solution.lookup(variable).is_none_or(|bound| bound == value));
                    if consistent {
                        let mut extended = solution.clone();
                        for (variable, value) in assignments {
                            extended.bind(variable, value);
                        }
                        next.push(extended);
                    }
                }
            }
            solutions = next;
        }
        Ok(Solutions::from_solutions(solutions))
    }
}

// ============================================================================
// Test Operators
// ============================================================================

#[derive(Debug)]
struct Bgp(Pattern);

impl Operator for Bgp {
    fn tag(&self) -> &str {
        "bgp"
    }

    fn execute(&self, store: &dyn Store, options: &EvaluationOptions) -> EvalResult<QueryResult> {
        store.query_legacy(&self.0, options).map(QueryResult::Solutions)
    }
}

#[derive(Debug)]
struct Ask(Pattern);

impl Operator for Ask {
    fn tag(&self) -> &str {
        "ask"
    }

    fn shape(&self) -> QueryShape {
        QueryShape::Boolean
    }

    fn execute(&self, store: &dyn Store, options: &EvaluationOptions) -> EvalResult<QueryResult> {
        let solutions = store.query_legacy(&self.0, options)?;
        Ok(QueryResult::Boolean(!solutions.is_empty()))
    }
}

#[derive(Debug)]
struct Construct {
    template: (Term, String, Term),
    pattern: Pattern,
}

impl Operator for Construct {
    fn tag(&self) -> &str {
        "construct"
    }

    fn shape(&self) -> QueryShape {
        QueryShape::Statements
    }

    fn execute(&self, store: &dyn Store, options: &EvaluationOptions) -> EvalResult<QueryResult> {
        let solutions = store.query_legacy(&self.pattern, options)?;
        let (subject, predicate, object) = &self.template;
        let instantiate = |term: &Term, solution: &Solution| -> EvalResult<Term> {
            match term {
                Term::Variable(variable) => solution
                    .lookup(variable)
                    .cloned()
                    .ok_or_else(|| EvalError::unbound_variable(variable.name())),
                other => Ok(other.clone()),
            }
        };
        let statements = solutions
            .iter()
            .map(|solution| {
                Ok(Triple::new(
                    instantiate(subject, solution)?,
                    predicate.as_str(),
                    instantiate(object, solution)?,
                ))
            })
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(QueryResult::Statements(statements))
    }
}

fn developer_names() -> Pattern {
    Pattern::new(vec![
        TriplePattern::new(Term::variable("project"), Term::iri(DOAP_DEVELOPER), Term::variable("dev")).unwrap(),
        TriplePattern::new(Term::variable("dev"), Term::iri(FOAF_NAME), Term::variable("name")).unwrap(),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_plain_pattern_equals_legacy_result() {
    let store = MemoryStore::new(ExecuteArity::NodeWithOptions);
    let options = EvaluationOptions::default();
    let pattern = developer_names();

    let expected = store.query_legacy(&pattern, &options).unwrap();
    let output = QueryDispatcher::new().execute(&pattern, &store, &options).unwrap();

    assert_eq!(output.into_solutions(), Some(expected));
}

#[test]
fn test_bgp_operator_matches_plain_pattern() {
    let options = EvaluationOptions::default();
    for arity in [ExecuteArity::NodeOnly, ExecuteArity::NodeWithOptions] {
        let store = MemoryStore::new(arity);
        let node = AlgebraNode::operator(Bgp(developer_names()));

        let via_algebra = QueryDispatcher::new().execute(&node, &store, &options).unwrap();
        let via_legacy = QueryDispatcher::new()
            .execute(&developer_names(), &store, &options)
            .unwrap();

        let solutions = via_algebra.into_solutions().unwrap();
        assert_eq!(Some(solutions.clone()), via_legacy.into_solutions());
        assert_eq!(solutions.len(), 2);
    }
}

#[test]
fn test_ask_yields_single_boolean() {
    let store = MemoryStore::new(ExecuteArity::NodeWithOptions);
    let node = AlgebraNode::operator(Ask(developer_names()));

    let output = QueryDispatcher::new()
        .execute(&node, &store, &EvaluationOptions::default())
        .unwrap();

    assert_eq!(output.shape(), QueryShape::Boolean);
    let items: Vec<ResultItem> = output.into_enumerator().unwrap().collect();
    assert_eq!(items, vec![ResultItem::Boolean(true)]);
}

#[test]
fn test_construct_yields_statements() {
    let store = MemoryStore::new(ExecuteArity::NodeWithOptions);
    let node = AlgebraNode::operator(Construct {
        template: (
            Term::variable("dev"),
            "http://example.org/label".to_string(),
            Term::variable("name"),
        ),
        pattern: developer_names(),
    });

    let output = QueryDispatcher::new()
        .execute(&node, &store, &EvaluationOptions::default())
        .unwrap();

    let QueryOutput::Enumerator(enumerator) = output else {
        panic!("expected an enumerator");
    };
    assert_eq!(enumerator.shape(), QueryShape::Statements);
    let statements: Vec<_> = enumerator.collect();
    assert_eq!(
        statements,
        vec![
            ResultItem::Statement(Triple::new(
                Term::iri("http://example.org/alice"),
                "http://example.org/label",
                Term::language_literal("Alice", "en"),
            )),
            ResultItem::Statement(Triple::new(
                Term::iri("http://example.org/bob"),
                "http://example.org/label",
                Term::simple_literal("Bob"),
            )),
        ]
    );
}

#[test]
fn test_hooks_wrap_execution() {
    let store = MemoryStore::new(ExecuteArity::NodeOnly);
    let events = RefCell::new(Vec::new());
    let dispatcher = QueryDispatcher::with_hooks(
        QueryHooks::new()
            .before_query(|node| events.borrow_mut().push(format!("before {}", node.tag())))
            .after_query(|node| events.borrow_mut().push(format!("after {}", node.tag()))),
    );

    dispatcher
        .execute(
            &AlgebraNode::operator(Bgp(developer_names())),
            &store,
            &EvaluationOptions::default(),
        )
        .unwrap();
    dispatcher
        .execute(&developer_names(), &store, &EvaluationOptions::default())
        .unwrap();

    drop(dispatcher);
    assert_eq!(events.into_inner(), vec!["before bgp", "after bgp"]);
}

#[test]
fn test_compound_without_semantics_fails() {
    let store = MemoryStore::new(ExecuteArity::NodeWithOptions);
    let node = AlgebraNode::from(Compound::new(
        Expression::iri("http://example.org/minus"),
        vec![Expression::variable("a"), Expression::variable("b")],
    ));

    let error = QueryDispatcher::new()
        .execute(&node, &store, &EvaluationOptions::default())
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Algebra operator '<http://example.org/minus>' not implemented"
    );
}

#[test]
fn test_filter_dispatched_solutions() {
    let store = MemoryStore::new(ExecuteArity::NodeWithOptions);
    let options = EvaluationOptions::default();
    let solutions = QueryDispatcher::new()
        .execute(&developer_names(), &store, &options)
        .unwrap()
        .into_solutions()
        .unwrap();

    // Neither name is compatible with a French literal, so every solution errors out
    let expr = Expression::call(
        fn_::STARTS_WITH,
        vec![
            Expression::variable("name"),
            Expression::Constant(Term::language_literal("A", "fr")),
        ],
    );
    let kept = filter_solutions(&solutions, FilterCriterion::Expression(&expr), &Evaluator::new(), &options).unwrap();
    assert!(kept.is_empty());

    let expr = Expression::call(
        fn_::STARTS_WITH,
        vec![Expression::variable("name"), Expression::Constant(Term::simple_literal("B"))],
    );
    let kept = filter_solutions(&solutions, FilterCriterion::Expression(&expr), &Evaluator::new(), &options).unwrap();
    assert_eq!(kept.len(), 1);
    assert_eq!(kept.as_slice()[0].get("name"), Some(&Term::simple_literal("Bob")));
}
