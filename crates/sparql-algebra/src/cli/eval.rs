//! Eval command implementation

use super::{output, read_json};
use anyhow::{Context, Result};
use sparql_algebra_eval::{EvaluationOptions, Evaluator, Expression, to_sse};
use sparql_algebra_model::{Solution, Term};
use std::path::PathBuf;

/// Configuration for eval command
pub struct EvalConfig {
    pub expression: PathBuf,
    pub bindings: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Evaluate an expression document against an optional binding document
pub fn eval(config: EvalConfig) -> Result<()> {
    let expr: Expression = read_json(&config.expression, "expression")?;
    let bindings = match &config.bindings {
        Some(path) => read_json(path, "bindings")?,
        None => Solution::new(),
    };

    let mut options = EvaluationOptions::builder();
    if let Some(max_depth) = config.max_depth {
        options = options.max_depth(max_depth);
    }
    let options = options.build();

    if config.verbose {
        eprintln!("Evaluating {}", to_sse(&expr));
        eprintln!("Bindings: {bindings}");
    }

    let term = evaluate(&expr, &bindings, &options)?;

    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("text"));
    let content = output::render(&term, format, Term::to_string)?;
    output::write_output(&content, config.output_file.as_deref())
}

fn evaluate(expr: &Expression, bindings: &Solution, options: &EvaluationOptions) -> Result<Term> {
    Evaluator::new()
        .evaluate(expr, bindings, options)
        .with_context(|| format!("Failed to evaluate {}", to_sse(expr)))
}
