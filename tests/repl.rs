use std::fs;

use minicalc::{
    interpreter::parser::ParseOptions,
    repl::{PROMPT, ReplOptions, evaluate_line, run},
};

fn session(input: &str, options: &ReplOptions) -> (usize, String) {
    let mut output = Vec::new();
    let count = run(input.as_bytes(), &mut output, options).expect("writing to a Vec cannot fail");
    (count, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn stops_at_the_first_blank_line() {
    let (count, output) = session("1+1\n2*3\n   \n4\n", &ReplOptions::default());

    assert_eq!(count, 2);
    assert_eq!(output, "2\n6\n");
}

#[test]
fn stops_at_end_of_input_without_trailing_newline() {
    let (count, output) = session("5-7", &ReplOptions::default());

    assert_eq!(count, 1);
    assert_eq!(output, "-2\n");
}

#[test]
fn diagnostics_and_faults_are_written_per_line() {
    let (_, output) = session("1+@\n1/0\n3\n", &ReplOptions::default());

    assert_eq!(output,
               "ERROR: bad character input '@'\n\
                ERROR: unexpected token '<EndOfInput>' expected '<Number>'\n\
                RUNTIME ERROR: division by zero at position 1\n\
                3\n");
}

#[test]
fn windows_line_endings_are_accepted() {
    let (_, output) = session("2*21\r\n\r\n", &ReplOptions::default());

    assert_eq!(output, "42\n");
}

#[test]
fn prompt_is_written_before_each_read() {
    let options = ReplOptions { show_prompt: true,
                                ..ReplOptions::default() };
    let (_, output) = session("1\n", &options);

    assert_eq!(output, format!("{PROMPT}1\n{PROMPT}"));
}

#[test]
fn tree_is_shown_before_the_result() {
    let options = ReplOptions { show_tree: true,
                                ..ReplOptions::default() };
    let (_, output) = session("1+2*3\n", &options);

    assert_eq!(output,
               "BinaryExpression\n\
                ├── LiteralExpression\n\
                │   └── Number 1\n\
                ├── Plus\n\
                └── BinaryExpression\n    \
                    ├── LiteralExpression\n    \
                    │   └── Number 2\n    \
                    ├── Star\n    \
                    └── LiteralExpression\n        \
                        └── Number 3\n\
                7\n");
}

#[test]
fn tree_marks_synthesized_tokens() {
    let options = ReplOptions { show_tree: true,
                                ..ReplOptions::default() };
    let (_, output) = session("(4\n", &options);

    assert_eq!(output,
               "ParenthesizedExpression\n\
                ├── OpenParen\n\
                ├── LiteralExpression\n\
                │   └── Number 4\n\
                └── CloseParen (missing)\n\
                ERROR: unexpected token '<EndOfInput>' expected '<CloseParen>'\n");
}

#[test]
fn tokens_are_shown_before_the_result() {
    let options = ReplOptions { show_tokens: true,
                                ..ReplOptions::default() };
    let (_, output) = session("1 + 2\n", &options);

    assert_eq!(output,
               "Number: 1 1\nWhitespace:  \nPlus: +\nWhitespace:  \nNumber: 2 2\nEndOfInput:\n3\n");
}

#[test]
fn parse_options_are_honoured() {
    let options = ReplOptions { parse: ParseOptions { max_depth: 1 },
                                ..ReplOptions::default() };
    let mut output = Vec::new();

    assert!(!evaluate_line("((1))", &mut output, &options).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(),
               "ERROR: expression nesting exceeds the maximum depth of 1\n");
}

#[test]
fn evaluate_line_reports_success() {
    let mut output = Vec::new();

    assert!(evaluate_line("6*7", &mut output, &ReplOptions::default()).unwrap());
    assert!(!evaluate_line("6*", &mut output, &ReplOptions::default()).unwrap());
}

#[test]
fn example_session_matches_transcript() {
    let input = fs::read_to_string("tests/example.calc").expect("missing example input");
    let expected = fs::read_to_string("tests/example.out").expect("missing example output");
    let (_, output) = session(&input, &ReplOptions::default());

    assert_eq!(output, expected);
}

#[test]
fn long_chains_report_the_nesting_limit() {
    let line = format!("{}1", "1+".repeat(20_000));
    let mut output = Vec::new();

    assert!(!evaluate_line(&line, &mut output, &ReplOptions::default()).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(),
               "ERROR: expression nesting exceeds the maximum depth of 256\n");
}
