use minicalc::ast::{Expr, UnaryOperator};

/// Renders the shape of a tree, ignoring positions and source text.
///
/// Binary nodes are fully parenthesized, `[...]` marks a parenthesized node
/// and `?` a literal without a value.
pub fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Literal { token } => token.value.map_or_else(|| "?".to_string(), |v| v.to_string()),
        Expr::Unary { op, operand, .. } => {
            let sign = match op {
                UnaryOperator::Identity => "+",
                UnaryOperator::Negate => "-",
            };
            format!("({sign}{})", shape(operand))
        },
        Expr::Binary { left, op, right, .. } => format!("({} {op} {})", shape(left), shape(right)),
        Expr::Parenthesized { inner, .. } => format!("[{}]", shape(inner)),
    }
}

/// Shape of the tree parsed from `source`.
#[allow(dead_code)]
pub fn parse_shape(source: &str) -> String {
    shape(minicalc::parse(source).root())
}

/// Diagnostic messages recorded while parsing `source`.
#[allow(dead_code)]
pub fn messages(source: &str) -> Vec<String> {
    minicalc::parse(source).diagnostics()
                           .iter()
                           .map(ToString::to_string)
                           .collect()
}
