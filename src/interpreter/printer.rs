use std::fmt::Write;

use crate::{
    ast::{Expr, SyntaxNode},
    interpreter::lexer::{Lexer, Token},
};

/// Renders an expression tree with box-drawing guides.
///
/// Expression nodes are shown by variant name and tokens by kind, followed by
/// the value of number tokens. Tokens the parser synthesized are marked
/// `(missing)`.
///
/// ## Example
/// ```
/// use minicalc::{interpreter::printer::pretty_print, parse};
///
/// let tree = parse("-5");
/// assert_eq!(pretty_print(tree.root()),
///            "UnaryExpression\n\
///             ├── Minus\n\
///             └── LiteralExpression\n    \
///                 └── Number 5\n");
/// ```
#[must_use]
pub fn pretty_print(expr: &Expr) -> String {
    let mut out = String::new();
    out.push_str(expr.kind_name());
    out.push('\n');
    write_children(&mut out, expr, "");
    out
}

fn write_children(out: &mut String, expr: &Expr, indent: &str) {
    let children = expr.children();
    let count = children.len();

    for (index, child) in children.into_iter().enumerate() {
        let (marker, extension) = if index + 1 == count {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(indent);
        out.push_str(marker);

        match child {
            SyntaxNode::Token(token) => {
                out.push_str(&token_label(token));
                out.push('\n');
            },
            SyntaxNode::Expr(inner) => {
                out.push_str(inner.kind_name());
                out.push('\n');
                write_children(out, inner, &format!("{indent}{extension}"));
            },
        }
    }
}

fn token_label(token: &Token) -> String {
    let mut label = token.kind.to_string();
    if let Some(value) = token.value {
        let _ = write!(label, " {value}");
    }
    if token.is_synthesized() {
        label.push_str(" (missing)");
    }
    label
}

/// Lists every token of `source`, one per line, including whitespace, bad
/// characters and the final `EndOfInput`.
///
/// ## Example
/// ```
/// use minicalc::interpreter::printer::dump_tokens;
///
/// assert_eq!(dump_tokens("12+x"),
///            "Number: 12 12\nPlus: +\nBad: x\nEndOfInput:\n");
/// ```
#[must_use]
pub fn dump_tokens(source: &str) -> String {
    Lexer::new(source).fold(String::new(), |mut out, token| {
                          let _ = writeln!(out, "{token}");
                          out
                      })
}
