//! Filter command implementation

use super::{output, read_json};
use anyhow::{Context, Result};
use sparql_algebra_eval::{
    EvaluationOptions, Evaluator, Expression, FilterCriterion, FilterErrorPolicy, filter_solutions, to_sse,
};
use sparql_algebra_model::Solutions;
use std::path::PathBuf;

/// Configuration for filter command
pub struct FilterConfig {
    pub expression: PathBuf,
    pub solutions: PathBuf,
    pub propagate_errors: bool,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Filter a solution sequence document by an expression document
pub fn filter(config: FilterConfig) -> Result<()> {
    let expr: Expression = read_json(&config.expression, "expression")?;
    let solutions: Solutions = read_json(&config.solutions, "solutions")?;

    let policy = if config.propagate_errors {
        FilterErrorPolicy::Propagate
    } else {
        FilterErrorPolicy::Exclude
    };
    let options = EvaluationOptions::builder().filter_errors(policy).build();

    let kept = filter_solutions(
        &solutions,
        FilterCriterion::Expression(&expr),
        &Evaluator::new(),
        &options,
    )
    .with_context(|| format!("Failed to filter by {}", to_sse(&expr)))?;

    if config.verbose {
        eprintln!("Kept {} of {} solution(s)", kept.len(), solutions.len());
    }

    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("text"));
    let content = output::render(&kept, format, |kept| {
        kept.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    })?;
    output::write_output(&content, config.output_file.as_deref())
}
