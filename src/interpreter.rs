/// The evaluator module folds expression trees into integers.
///
/// The evaluator walks the tree recursively, applies checked `i32`
/// arithmetic, and reports faults such as division by zero as runtime errors.
///
/// # Responsibilities
/// - Evaluates every expression variant through one exhaustive match.
/// - Reports division by zero and overflow instead of panicking.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads raw text and produces a stream of tokens, each classified
/// and tagged with its byte offset. This is the first stage of processing.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, position, text and value.
/// - Parses integer literals into `i32` values.
/// - Records diagnostics for bad characters and oversized literals.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser filters the token stream and builds a tree by precedence
/// climbing, recovering from every syntax error with synthesized tokens so
/// that a complete tree is always produced.
///
/// # Responsibilities
/// - Converts tokens into expression nodes.
/// - Records syntax diagnostics with their positions.
/// - Guards against unbounded nesting.
pub mod parser;
/// The printer module renders trees and token streams as text.
///
/// Used by the command line and the REPL to show what the front end made of
/// an input line.
pub mod printer;
