use std::fmt;

use crate::interpreter::lexer::{Token, TokenKind};

/// A prefix sign applied to an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`
    Identity,
    /// `-x`
    Negate,
}

impl UnaryOperator {
    /// Maps a token kind to the sign it denotes, if any.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Identity),
            TokenKind::Minus => Some(Self::Negate),
            _ => None,
        }
    }
}

/// An infix arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps a token kind to the operator it denotes, if any.
    ///
    /// ## Example
    /// ```
    /// use minicalc::{ast::BinaryOperator, interpreter::lexer::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::from_kind(TokenKind::Slash), Some(BinaryOperator::Div));
    /// assert_eq!(BinaryOperator::from_kind(TokenKind::OpenParen), None);
    /// ```
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// A node of the expression tree.
///
/// Every variant keeps the tokens it was built from, including synthesized
/// placeholders, so the tree can always be walked back to the source. Trees
/// are built once by the parser and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A number, such as `42`.
    Literal {
        /// The `Number` token.
        token: Token,
    },
    /// A signed operand, such as `-x`.
    Unary {
        /// The sign.
        op:       UnaryOperator,
        /// The `+` or `-` token.
        operator: Token,
        /// The signed expression.
        operand:  Box<Self>,
    },
    /// An infix operation, such as `a * b`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// An expression in parentheses.
    Parenthesized {
        /// The `(` token.
        open:  Token,
        /// The enclosed expression.
        inner: Box<Self>,
        /// The `)` token, synthesized when it was missing.
        close: Token,
    },
}

/// One child of an [`Expr`]: a token or a sub-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode<'a> {
    /// A leaf token.
    Token(&'a Token),
    /// A nested expression.
    Expr(&'a Expr),
}

impl Expr {
    /// Returns the children in source order.
    ///
    /// ## Example
    /// ```
    /// use minicalc::{ast::SyntaxNode, parse};
    ///
    /// let tree = parse("(7)");
    /// let children = tree.root().children();
    ///
    /// assert_eq!(children.len(), 3);
    /// assert!(matches!(children[1], SyntaxNode::Expr(_)));
    /// ```
    #[must_use]
    pub fn children(&self) -> Vec<SyntaxNode<'_>> {
        match self {
            Self::Literal { token } => vec![SyntaxNode::Token(token)],
            Self::Unary { operator, operand, .. } => {
                vec![SyntaxNode::Token(operator), SyntaxNode::Expr(operand)]
            },
            Self::Binary { left, operator, right, .. } => vec![SyntaxNode::Expr(left),
                                                               SyntaxNode::Token(operator),
                                                               SyntaxNode::Expr(right)],
            Self::Parenthesized { open, inner, close } => vec![SyntaxNode::Token(open),
                                                               SyntaxNode::Expr(inner),
                                                               SyntaxNode::Token(close)],
        }
    }

    /// The name of the variant, as shown by the tree printer.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Literal { .. } => "LiteralExpression",
            Self::Unary { .. } => "UnaryExpression",
            Self::Binary { .. } => "BinaryExpression",
            Self::Parenthesized { .. } => "ParenthesizedExpression",
        }
    }

    /// Byte offset of the first token of the expression.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Literal { token } => token.position,
            Self::Unary { operator, .. } => operator.position,
            Self::Binary { left, .. } => left.position(),
            Self::Parenthesized { open, .. } => open.position,
        }
    }
}
