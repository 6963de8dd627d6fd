use tracing::{debug, warn};

use crate::{
    ast::Expr,
    error::{Diagnostic, Error},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{Lexer, Token, TokenKind},
    },
};

/// Default limit on nested parentheses, unary signs and chained operators.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunables for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// How deeply the tree may grow before the parser gives up on the rest of
    /// the input with a diagnostic. Parentheses, unary signs and each operator
    /// folded into a chain all count one level.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// The outcome of parsing one line.
///
/// A result always carries a complete tree. When the input was malformed the
/// tree contains synthesized tokens and `diagnostics` says what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    diagnostics:  Vec<Diagnostic>,
    root:         Expr,
    end_of_input: Token,
}

impl ParseResult {
    /// Lexical and syntactic diagnostics, in the order they were found.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The root of the expression tree.
    #[must_use]
    pub const fn root(&self) -> &Expr {
        &self.root
    }

    /// The token that terminated the parse.
    #[must_use]
    pub const fn end_of_input(&self) -> &Token {
        &self.end_of_input
    }

    /// Whether any diagnostic was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Evaluates the tree if, and only if, the input was well formed.
    ///
    /// # Errors
    /// Returns [`Error::Diagnostics`] without evaluating when diagnostics were
    /// recorded, and [`Error::Runtime`] when evaluation faults.
    ///
    /// # Example
    /// ```
    /// use minicalc::{error::Error, parse};
    ///
    /// assert_eq!(parse("6 * 7").evaluate(), Ok(42));
    /// assert!(matches!(parse("6 *").evaluate(), Err(Error::Diagnostics(_))));
    /// assert!(matches!(parse("6 / 0").evaluate(), Err(Error::Runtime(_))));
    /// ```
    pub fn evaluate(&self) -> Result<i32, Error> {
        if self.has_errors() {
            return Err(Error::Diagnostics(self.diagnostics.clone()));
        }
        Ok(Evaluator::evaluate(&self.root)?)
    }
}

/// Builds an expression tree from source text.
///
/// The parser never stops at the first problem: a missing token is recorded as
/// a diagnostic and replaced with a synthesized one, and parsing carries on.
pub struct Parser {
    tokens:         Vec<Token>,
    end:            Token,
    cursor:         usize,
    diagnostics:    Vec<Diagnostic>,
    options:        ParseOptions,
    depth:          usize,
    depth_exceeded: bool,
}

impl Parser {
    /// Tokenizes `text` with the default options.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_options(text, ParseOptions::default())
    }

    /// Tokenizes `text` and prepares to parse it.
    ///
    /// Lexical diagnostics are carried over, then whitespace and bad tokens
    /// are dropped so the grammar never sees them.
    #[must_use]
    pub fn with_options(text: &str, options: ParseOptions) -> Self {
        let (tokens, diagnostics) = Lexer::new(text).tokenize();
        let tokens: Vec<Token> = tokens.into_iter()
                                       .filter(|token| !token.kind.is_trivia())
                                       .collect();
        let end = tokens.last()
                        .cloned()
                        .unwrap_or_else(|| Token::end_of_input(text.len()));

        Self { tokens,
               end,
               cursor: 0,
               diagnostics,
               options,
               depth: 0,
               depth_exceeded: false }
    }

    /// Parses one expression followed by the end of input.
    #[must_use]
    pub fn parse(mut self) -> ParseResult {
        let root = self.parse_expression(0);
        let end_of_input = self.match_token(TokenKind::EndOfInput);

        debug!(diagnostics = self.diagnostics.len(), "parsed expression");

        ParseResult { diagnostics: self.diagnostics,
                      root,
                      end_of_input }
    }

    /// The token under the cursor. Past the end this is the last token.
    pub(in crate::interpreter::parser) fn current(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end)
    }

    /// Returns the current token and moves past it.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> Token {
        let token = self.current().clone();
        self.cursor += 1;
        token
    }

    /// Consumes a token of kind `expected`.
    ///
    /// On a mismatch nothing is consumed: a diagnostic is recorded and a
    /// synthesized token of the expected kind is returned in its place.
    pub(in crate::interpreter::parser) fn match_token(&mut self, expected: TokenKind) -> Token {
        if self.current().kind == expected {
            return self.next_token();
        }

        let found = self.current();
        let (kind, position) = (found.kind, found.position);
        debug!(found = %kind, %expected, position, "synthesizing missing token");

        // After giving up on deep nesting every pending match fails; those are
        // not worth reporting.
        if !self.depth_exceeded {
            self.diagnostics.push(Diagnostic::UnexpectedToken { found: kind,
                                                                expected,
                                                                position });
        }
        Token::synthesized(expected, position)
    }

    /// Runs `parse` one nesting level deeper, or abandons the input once the
    /// nesting limit is reached.
    pub(in crate::interpreter::parser) fn nested(&mut self,
                                                 parse: impl FnOnce(&mut Self) -> Expr)
                                                 -> Expr {
        if !self.can_descend() {
            return self.abandon_nesting();
        }
        self.depth += 1;
        let expr = parse(self);
        self.depth -= 1;
        expr
    }

    fn abandon_nesting(&mut self) -> Expr {
        let position = self.skip_too_deep();
        Expr::Literal { token: Token::synthesized(TokenKind::Number, position) }
    }

    /// Whether the tree may grow one more level.
    const fn can_descend(&self) -> bool {
        self.depth < self.options.max_depth
    }

    /// Claims one level for an operator fold. At the limit the rest of the
    /// input is abandoned and `false` is returned.
    pub(in crate::interpreter::parser) fn descend(&mut self) -> bool {
        if !self.can_descend() {
            self.skip_too_deep();
            return false;
        }
        self.depth += 1;
        true
    }

    /// Releases levels claimed with [`Self::descend`].
    pub(in crate::interpreter::parser) const fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Records the nesting diagnostic once and skips to `EndOfInput`.
    /// Returns the position where the parser gave up.
    fn skip_too_deep(&mut self) -> usize {
        let position = self.current().position;
        let limit = self.options.max_depth;

        if !self.depth_exceeded {
            warn!(limit, position, "expression nesting limit exceeded");
            self.diagnostics.push(Diagnostic::NestingTooDeep { limit, position });
            self.depth_exceeded = true;
        }

        self.cursor = self.tokens.len().saturating_sub(1);
        position
    }
}
