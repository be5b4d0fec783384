//! Expression tree rewriting
//!
//! Both passes share one skeleton: walk the tree, hand every node matching
//! the trigger to the substitution function, and rebuild compound nodes
//! around the rewritten operands. A replacement is final; the walk never
//! descends into it.
//!
//! The walk uses an explicit stack, so arbitrarily deep trees are rewritten
//! without growing the call stack. The input tree is never modified.

use crate::expression::{Compound, Expression};
use sparql_algebra_model::Variable;

/// Replace every variable node with `subst(variable)`
///
/// The replacement may be a constant, another variable or a whole subtree.
/// A root that is itself a variable is replaced too.
pub fn replace_variables<F>(tree: &Expression, mut subst: F) -> Expression
where
    F: FnMut(&Variable) -> Expression,
{
    rewrite(tree, |node| node.as_variable().map(&mut subst))
}

/// Replace every aggregate node with `subst(aggregate)`
///
/// Used to hoist aggregates out of HAVING and ORDER BY expressions: `subst`
/// typically returns a fresh variable bound by a preceding grouping stage.
pub fn replace_aggregates<F>(tree: &Expression, mut subst: F) -> Expression
where
    F: FnMut(&Compound) -> Expression,
{
    rewrite(tree, |node| match node {
        Expression::Compound(compound) if compound.is_aggregate() => Some(subst(compound)),
        _ => None,
    })
}

enum Frame<'a> {
    Visit(&'a Expression),
    Rebuild(&'a Compound),
}

/// Rebuild `tree` bottom-up, replacing each node for which `replace` returns `Some`
///
/// Nodes are visited in pre-order, left to right, so `replace` sees them in
/// source order.
pub fn rewrite<F>(tree: &Expression, mut replace: F) -> Expression
where
    F: FnMut(&Expression) -> Option<Expression>,
{
    let mut stack = vec![Frame::Visit(tree)];
    let mut output: Vec<Expression> = Vec::new();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Visit(node) => {
                if let Some(replacement) = replace(node) {
                    output.push(replacement);
                    continue;
                }
                match node {
                    Expression::Compound(compound) => {
                        stack.push(Frame::Rebuild(compound));
                        stack.extend(compound.operands().rev().map(Frame::Visit));
                    }
                    leaf => output.push(leaf.clone()),
                }
            }
            Frame::Rebuild(compound) => {
                let mut operands = output.split_off(output.len() - (compound.arity() + 1));
                let args = operands.split_off(1);
                let tag = operands.pop().unwrap_or_else(|| unreachable!("compound always has a tag"));
                output.push(Expression::Compound(compound.with_operands(tag, args)));
            }
        }
    }

    output.pop().unwrap_or_else(|| unreachable!("rewrite always produces a root"))
}
