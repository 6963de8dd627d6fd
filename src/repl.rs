use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{
    interpreter::{
        parser::ParseOptions,
        printer::{dump_tokens, pretty_print},
    },
    parse_with_options,
};

/// Printed before each line is read when prompting is enabled.
pub const PROMPT: &str = "> ";

/// What a session shows for each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplOptions {
    /// Print the expression tree before the result.
    pub show_tree:   bool,
    /// Print every token before the result.
    pub show_tokens: bool,
    /// Print [`PROMPT`] before reading each line.
    pub show_prompt: bool,
    /// Options passed to the parser.
    pub parse:       ParseOptions,
}

/// Runs an interactive session.
///
/// Reads `input` one line at a time and stops at the first blank line or at
/// the end of input. Every other line is handled by [`evaluate_line`].
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Returns
/// The number of lines evaluated.
///
/// # Example
/// ```
/// use minicalc::repl::{ReplOptions, run};
///
/// let mut output = Vec::new();
/// let count = run("1 + 1\n2 *\n\n3\n".as_bytes(), &mut output, &ReplOptions::default()).unwrap();
///
/// assert_eq!(count, 2);
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "2\nERROR: unexpected token '<EndOfInput>' expected '<Number>'\n");
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R,
                                 output: &mut W,
                                 options: &ReplOptions)
                                 -> io::Result<usize> {
    let mut count = 0;
    let mut buffer = String::new();

    loop {
        if options.show_prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            debug!("end of input");
            break;
        }
        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            debug!("blank line");
            break;
        }

        evaluate_line(line, output, options)?;
        count += 1;
    }

    info!(lines = count, "session finished");
    Ok(count)
}

/// Parses and evaluates one line, writing what the options ask for.
///
/// When the line has diagnostics each one is written on its own line and the
/// tree is not evaluated. Otherwise the result, or the runtime error, is
/// written.
///
/// # Errors
/// Returns any I/O error from writing `output`.
///
/// # Returns
/// `true` when the line produced a value.
pub fn evaluate_line<W: Write>(line: &str, output: &mut W, options: &ReplOptions) -> io::Result<bool> {
    if options.show_tokens {
        write!(output, "{}", dump_tokens(line))?;
    }

    let tree = parse_with_options(line, options.parse);
    if options.show_tree {
        write!(output, "{}", pretty_print(tree.root()))?;
    }

    match tree.evaluate() {
        Ok(value) => {
            writeln!(output, "{value}")?;
            Ok(true)
        },
        Err(error) => {
            writeln!(output, "{error}")?;
            Ok(false)
        },
    }
}
