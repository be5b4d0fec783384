//! Solution filtering
//!
//! Keeps the solutions of a sequence that satisfy a criterion, in their
//! original order. The input sequence is never modified.

use crate::context::{EvaluationOptions, FilterErrorPolicy};
use crate::engine::Evaluator;
use crate::error::EvalResult;
use crate::expression::Expression;
use sparql_algebra_model::{Solution, Solutions};
use std::fmt;

/// What a solution has to satisfy to be kept
#[derive(Clone, Copy)]
pub enum FilterCriterion<'a> {
    /// Keep solutions for which the expression's effective boolean value is true
    Expression(&'a Expression),
    /// Keep solutions accepted by the predicate
    Predicate(&'a dyn Fn(&Solution) -> bool),
}

impl fmt::Debug for FilterCriterion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => f.debug_tuple("Expression").field(expr).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<'a> From<&'a Expression> for FilterCriterion<'a> {
    fn from(value: &'a Expression) -> Self {
        Self::Expression(value)
    }
}

/// Filter `solutions` by `criterion`
///
/// Under [`FilterErrorPolicy::Exclude`] a solution whose expression fails to
/// evaluate is dropped; under [`FilterErrorPolicy::Propagate`] the first
/// failure is returned.
pub fn filter_solutions(
    solutions: &Solutions,
    criterion: FilterCriterion<'_>,
    evaluator: &Evaluator,
    options: &EvaluationOptions,
) -> EvalResult<Solutions> {
    let expr = match criterion {
        FilterCriterion::Predicate(predicate) => return Ok(solutions.filter_by(predicate)),
        FilterCriterion::Expression(expr) => expr,
    };

    let mut kept = Solutions::new();
    for solution in solutions {
        match evaluator.effective_boolean_value(expr, solution, options) {
            Ok(true) => kept.push(solution.clone()),
            Ok(false) => {}
            Err(err) => match options.filter_errors {
                FilterErrorPolicy::Exclude => {
                    log::debug!("dropping solution {solution}: {err}");
                }
                FilterErrorPolicy::Propagate => return Err(err),
            },
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use pretty_assertions::assert_eq;
    use sparql_algebra_model::Term;
    use sparql_algebra_model::vocab::fn_;

    fn solutions() -> Solutions {
        Solutions::from_solutions(vec![
            Solution::new().with("flag", Term::boolean(true)).with("n", Term::integer(1)),
            Solution::new().with("flag", Term::boolean(false)).with("n", Term::integer(2)),
            Solution::new().with("n", Term::integer(3)),
            Solution::new().with("flag", Term::boolean(true)).with("n", Term::integer(4)),
        ])
    }

    fn numbers(solutions: &Solutions) -> Vec<Term> {
        solutions
            .iter()
            .filter_map(|solution| solution.get("n").cloned())
            .collect()
    }

    #[test]
    fn test_expression_filter_excludes_errors() {
        let input = solutions();
        let expr = Expression::variable("flag");
        let kept = filter_solutions(
            &input,
            FilterCriterion::Expression(&expr),
            &Evaluator::new(),
            &EvaluationOptions::default(),
        )
        .unwrap();

        assert_eq!(numbers(&kept), vec![Term::integer(1), Term::integer(4)]);
        assert_eq!(input, solutions());
    }

    #[test]
    fn test_expression_filter_propagates_errors() {
        let expr = Expression::variable("flag");
        let options = EvaluationOptions::builder()
            .filter_errors(FilterErrorPolicy::Propagate)
            .build();
        let result = filter_solutions(
            &solutions(),
            FilterCriterion::Expression(&expr),
            &Evaluator::new(),
            &options,
        );
        assert_eq!(result, Err(EvalError::unbound_variable("flag")));
    }

    #[test]
    fn test_always_true_and_false() {
        let input = solutions();
        let evaluator = Evaluator::new();
        let options = EvaluationOptions::default();

        let always = Expression::Constant(Term::boolean(true));
        let all = filter_solutions(&input, FilterCriterion::Expression(&always), &evaluator, &options).unwrap();
        assert_eq!(all, input);

        let never = Expression::call(fn_::NOT, vec![Expression::Constant(Term::boolean(true))]);
        let none = filter_solutions(&input, FilterCriterion::Expression(&never), &evaluator, &options).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_predicate_delegates_to_solutions() {
        let input = solutions();
        let predicate = |solution: &Solution| solution.is_bound(&"flag".into());
        let kept = filter_solutions(
            &input,
            FilterCriterion::Predicate(&predicate),
            &Evaluator::new(),
            &EvaluationOptions::default(),
        )
        .unwrap();

        assert_eq!(kept, input.filter_by(predicate));
        assert_eq!(kept.len(), 3);
    }
}
