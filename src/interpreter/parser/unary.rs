use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser {
    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | ("+" | "-") primary
    ///              | number
    /// ```
    /// Anything else is reported as a missing number. Parentheses and signs
    /// each count one level against the nesting limit.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> Expr {
        let kind = self.current().kind;

        if kind == TokenKind::OpenParen {
            return self.nested(Self::parse_parenthesized);
        }
        match UnaryOperator::from_kind(kind) {
            Some(op) => self.nested(|parser| parser.parse_unary(op)),
            None => self.parse_literal(),
        }
    }

    fn parse_parenthesized(&mut self) -> Expr {
        let open = self.next_token();
        let inner = self.parse_expression(0);
        let close = self.match_token(TokenKind::CloseParen);

        Expr::Parenthesized { open,
                              inner: Box::new(inner),
                              close }
    }

    fn parse_unary(&mut self, op: UnaryOperator) -> Expr {
        let operator = self.next_token();
        let operand = self.parse_primary();

        Expr::Unary { op,
                      operator,
                      operand: Box::new(operand) }
    }

    fn parse_literal(&mut self) -> Expr {
        let token = self.match_token(TokenKind::Number);
        Expr::Literal { token }
    }
}
