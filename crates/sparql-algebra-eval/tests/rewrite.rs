//! Tree Rewriting Tests
//!
//! Properties of variable substitution and aggregate hoisting over
//! generated expression trees.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sparql_algebra_eval::{
    Compound, EvaluationOptions, Evaluator, Expression, replace_aggregates, replace_variables,
};
use sparql_algebra_model::vocab::fn_;
use sparql_algebra_model::{Solution, Term, Variable};

// ============================================================================
// Test Helpers
// ============================================================================

fn leaf() -> impl Strategy<Value = Expression> {
    prop_oneof![
        "[a-d]".prop_map(|name| Expression::variable(name)),
        any::<i32>().prop_map(|n| Expression::Constant(Term::integer(i64::from(n)))),
        "[a-z]{1,5}".prop_map(|path| Expression::iri(format!("http://example.org/{path}"))),
    ]
}

fn tree() -> impl Strategy<Value = Expression> {
    leaf().prop_recursive(6, 64, 4, |inner| {
        (inner.clone(), prop::collection::vec(inner, 0..4), any::<bool>()).prop_map(
            |(tag, args, aggregate)| {
                if aggregate {
                    Expression::Compound(Compound::aggregate(tag, args))
                } else {
                    Expression::Compound(Compound::new(tag, args))
                }
            },
        )
    })
}

fn count_variables(expr: &Expression) -> usize {
    match expr {
        Expression::Constant(_) => 0,
        Expression::Variable(_) => 1,
        Expression::Compound(compound) => compound.operands().map(count_variables).sum(),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn identity_substitution_preserves_tree(tree in tree()) {
        let rewritten = replace_variables(&tree, |variable| Expression::Variable(variable.clone()));
        prop_assert_eq!(rewritten, tree);
    }

    #[test]
    fn constant_substitution_removes_all_variables(tree in tree()) {
        let mut calls = 0;
        let rewritten = replace_variables(&tree, |_| {
            calls += 1;
            Expression::Constant(Term::boolean(true))
        });
        prop_assert!(rewritten.is_constant());
        prop_assert_eq!(calls, count_variables(&tree));
    }

    #[test]
    fn hoisting_removes_all_aggregates(tree in tree()) {
        let mut next = 0;
        let rewritten = replace_aggregates(&tree, |_| {
            next += 1;
            Expression::variable(format!(".{}", next - 1))
        });

        let mut stack = vec![&rewritten];
        while let Some(node) = stack.pop() {
            prop_assert!(!node.is_aggregate());
            if let Expression::Compound(compound) = node {
                stack.extend(compound.operands());
            }
        }
    }
}

// ============================================================================
// Substitution Before Evaluation
// ============================================================================

#[test]
fn test_substituted_tree_evaluates_without_bindings() {
    let tree = Expression::call(fn_::NOT, vec![Expression::variable("flag")]);
    let rewritten = replace_variables(&tree, |variable: &Variable| {
        assert_eq!(variable.name(), "flag");
        Expression::Constant(Term::boolean(false))
    });

    let result = Evaluator::new().evaluate(&rewritten, &Solution::new(), &EvaluationOptions::default());
    assert_eq!(result, Ok(Term::boolean(true)));
    // The input tree still refers to the variable
    assert!(tree.is_variable());
}

#[test]
fn test_hoisted_aggregate_evaluates_from_grouped_binding() {
    let count = Compound::aggregate(
        Expression::iri("http://example.org/count"),
        vec![Expression::variable("x")],
    );
    let having = Expression::call(fn_::BOOLEAN, vec![Expression::Compound(count)]);

    let mut hoisted = Vec::new();
    let rewritten = replace_aggregates(&having, |aggregate| {
        hoisted.push(aggregate.clone());
        Expression::variable(format!(".{}", hoisted.len() - 1))
    });
    assert_eq!(hoisted.len(), 1);

    let group = Solution::new().with(".0", Term::integer(3));
    let result = Evaluator::new().evaluate(&rewritten, &group, &EvaluationOptions::default());
    assert_eq!(result, Ok(Term::boolean(true)));
}
