use std::{io, process::ExitCode};

use clap::{ArgAction, Parser};
use minicalc::{
    interpreter::parser::{DEFAULT_MAX_DEPTH, ParseOptions},
    repl::{self, ReplOptions},
};
use tracing::Level;

/// minicalc evaluates integer arithmetic expressions.
///
/// Without an expression it reads lines from standard input until a blank
/// line, printing the value or the diagnostics for each one.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the expression tree before the result.
    #[arg(short, long)]
    tree: bool,

    /// Print every token before the result.
    #[arg(long)]
    tokens: bool,

    /// How deeply parentheses, signs and operator chains may nest.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Raise the log level: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = ReplOptions { show_tree:   args.tree,
                                show_tokens: args.tokens,
                                show_prompt: args.expression.is_none(),
                                parse:       ParseOptions { max_depth: args.max_depth }, };

    let mut output = io::stdout().lock();
    let result = match &args.expression {
        Some(expression) => repl::evaluate_line(expression, &mut output, &options),
        None => repl::run(io::stdin().lock(), &mut output, &options).map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Failed to read or write the terminal: {e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();
}
