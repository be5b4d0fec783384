//! sparql-algebra command-line interface

use clap::{Parser, Subcommand};
use sparql_algebra::cli::{eval, filter, output, sse};
use std::path::PathBuf;

/// SPARQL algebra command-line tool
#[derive(Parser)]
#[command(name = "sparql-algebra")]
#[command(author, version, about = "SPARQL algebra expression tools", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json, pretty)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression (JSON) against bindings (JSON)
    Eval {
        /// Expression file
        expression: PathBuf,

        /// Bindings file; no variables are bound when omitted
        #[arg(short, long)]
        bindings: Option<PathBuf>,

        /// Maximum expression nesting depth
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Filter solutions (JSON) by an expression (JSON)
    Filter {
        /// Expression file
        expression: PathBuf,

        /// Solutions file
        solutions: PathBuf,

        /// Fail on the first evaluation error instead of dropping the solution
        #[arg(long)]
        propagate_errors: bool,
    },

    /// Render an expression or pattern (JSON) as an S-expression
    Sse {
        /// Input file
        file: PathBuf,

        /// Treat the input as a basic graph pattern
        #[arg(short, long)]
        pattern: bool,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    let result = match cli.command {
        Commands::Eval {
            expression,
            bindings,
            max_depth,
        } => eval::eval(eval::EvalConfig {
            expression,
            bindings,
            max_depth,
            verbose: cli.verbose,
            output_format: cli.format.clone(),
            output_file: cli.output.clone(),
        }),

        Commands::Filter {
            expression,
            solutions,
            propagate_errors,
        } => filter::filter(filter::FilterConfig {
            expression,
            solutions,
            propagate_errors,
            verbose: cli.verbose,
            output_format: cli.format.clone(),
            output_file: cli.output.clone(),
        }),

        Commands::Sse { file, pattern } => sse::sse(sse::SseConfig {
            file,
            input: if pattern {
                sse::SseInput::Pattern
            } else {
                sse::SseInput::Expression
            },
            output_file: cli.output.clone(),
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
