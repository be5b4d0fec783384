//! SSE command implementation

use super::{output, read_json};
use anyhow::Result;
use sparql_algebra_eval::{Expression, to_sse};
use sparql_algebra_model::Pattern;
use std::path::PathBuf;

/// What the input document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseInput {
    Expression,
    Pattern,
}

/// Configuration for sse command
pub struct SseConfig {
    pub file: PathBuf,
    pub input: SseInput,
    pub output_file: Option<PathBuf>,
}

/// Render an expression or pattern document as an S-expression
pub fn sse(config: SseConfig) -> Result<()> {
    let rendered = match config.input {
        SseInput::Expression => to_sse(&read_json::<Expression>(&config.file, "expression")?),
        SseInput::Pattern => to_sse(&read_json::<Pattern>(&config.file, "pattern")?),
    };
    output::write_output(&rendered, config.output_file.as_deref())
}
