use tracing::trace;

use crate::{ast::{BinaryOperator, Expr}, interpreter::parser::core::Parser};

impl Parser {
    /// Parses a chain of binary operations by precedence climbing.
    ///
    /// The loop keeps folding operators into `left` while they bind strictly
    /// tighter than `min_precedence`. The right-hand side is parsed with the
    /// operator's own precedence as the floor, so it only absorbs operators
    /// that bind tighter still, and operators of equal precedence group from
    /// the left: `10 - 3 - 2` is `(10 - 3) - 2`.
    ///
    /// Every fold deepens the left spine of the tree by one, so each counts
    /// against the nesting limit until the chain ends.
    ///
    /// Grammar:
    /// ```text
    ///     expression := primary (operator expression)*
    ///     operator   := "*" | "/"    precedence 2
    ///                 | "+" | "-"    precedence 1
    /// ```
    pub(in crate::interpreter::parser) fn parse_expression(&mut self, min_precedence: u8) -> Expr {
        let mut left = self.parse_primary();
        let mut folds = 0;

        loop {
            let kind = self.current().kind;
            let precedence = kind.binary_precedence();
            if precedence == 0 || precedence <= min_precedence {
                break;
            }
            let Some(op) = BinaryOperator::from_kind(kind) else {
                break;
            };
            if !self.descend() {
                break;
            }
            folds += 1;
            let operator = self.next_token();
            trace!(%op, precedence, position = operator.position, "binary operator");
            let right = self.parse_expression(precedence);

            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  operator,
                                  right: Box::new(right) };
        }

        self.ascend(folds);
        left
    }
}
