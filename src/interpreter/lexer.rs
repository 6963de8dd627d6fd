use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

use crate::error::Diagnostic;

/// Classifies a lexical token.
///
/// The scanning rules live on the variants as `logos` attributes. `EndOfInput`
/// has no pattern: it is produced by [`Lexer`] once the source is exhausted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of ASCII decimal digits, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// A run of whitespace characters.
    #[regex(r"\s+")]
    Whitespace,
    /// A single character that starts no other token.
    #[regex(r"[^0-9+\-*/()\s]")]
    Bad,
    /// The end of the source text.
    EndOfInput,
}

impl TokenKind {
    /// Returns the variant name, as used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::OpenParen => "OpenParen",
            Self::CloseParen => "CloseParen",
            Self::Whitespace => "Whitespace",
            Self::Bad => "Bad",
            Self::EndOfInput => "EndOfInput",
        }
    }

    /// Binding power of the kind when it appears between two operands.
    ///
    /// `*` and `/` bind tighter than `+` and `-`. Every other kind returns `0`,
    /// which ends a binary chain.
    ///
    /// ## Example
    /// ```
    /// use minicalc::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Star.binary_precedence(), 2);
    /// assert_eq!(TokenKind::Minus.binary_precedence(), 1);
    /// assert_eq!(TokenKind::CloseParen.binary_precedence(), 0);
    /// ```
    #[must_use]
    pub const fn binary_precedence(self) -> u8 {
        match self {
            Self::Star | Self::Slash => 2,
            Self::Plus | Self::Minus => 1,
            _ => 0,
        }
    }

    /// Tokens the parser never sees.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Bad)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the source text.
///
/// Tokens fabricated by the parser during error recovery have no `text`; they
/// stand in for input that was expected but missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// Byte offset of the first character in the source.
    pub position: usize,
    /// The matched source text, absent for synthesized tokens.
    pub text:     Option<String>,
    /// The parsed literal value of a `Number`.
    pub value:    Option<i32>,
}

impl Token {
    /// Creates a token for a matched slice of the source.
    #[must_use]
    pub fn new(kind: TokenKind, position: usize, text: &str) -> Self {
        Self { kind,
               position,
               text: Some(text.to_string()),
               value: None }
    }

    /// Creates a `Number` token. `value` is `None` when the digits do not fit.
    #[must_use]
    pub fn number(position: usize, text: &str, value: Option<i32>) -> Self {
        Self { kind: TokenKind::Number,
               position,
               text: Some(text.to_string()),
               value }
    }

    /// Creates a placeholder token that matches no source text.
    #[must_use]
    pub const fn synthesized(kind: TokenKind, position: usize) -> Self {
        Self { kind,
               position,
               text: None,
               value: None }
    }

    /// Creates the terminal token at `position`.
    #[must_use]
    pub fn end_of_input(position: usize) -> Self {
        Self::new(TokenKind::EndOfInput, position, "")
    }

    /// Whether the parser made this token up during recovery.
    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        self.text.is_none()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind)?;
        if let Some(text) = &self.text
           && !text.is_empty()
        {
            write!(f, " {}", text.escape_debug())?;
        }
        if let Some(value) = self.value {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

/// Turns source text into tokens.
///
/// Lexical problems never stop the scan. They are recorded as diagnostics and
/// the offending input still produces a token, so positions stay exact.
///
/// ## Example
/// ```
/// use minicalc::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("1 + 2").map(|token| token.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Whitespace,
///             TokenKind::Plus,
///             TokenKind::Whitespace,
///             TokenKind::Number,
///             TokenKind::EndOfInput]);
/// ```
pub struct Lexer<'src> {
    source:      &'src str,
    inner:       logos::Lexer<'src, TokenKind>,
    diagnostics: Vec<Diagnostic>,
    finished:    bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: TokenKind::lexer(source),
               diagnostics: Vec::new(),
               finished: false }
    }

    /// Diagnostics recorded so far, in scan order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Scans the next token.
    ///
    /// Once the source is exhausted every call returns an `EndOfInput` token
    /// positioned at the end of the source.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::end_of_input(self.source.len());
        };

        let position = self.inner.span().start;
        let text = self.inner.slice();

        let token = match result {
            Ok(TokenKind::Number) => self.scan_number(position, text),
            Ok(TokenKind::Bad) | Err(()) => self.scan_bad(position, text),
            Ok(kind) => Token::new(kind, position, text),
        };

        trace!(kind = %token.kind, position, "scanned token");
        token
    }

    /// Scans the whole source, returning every token up to and including
    /// `EndOfInput`, together with the lexical diagnostics.
    #[must_use]
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(tokens = tokens.len(),
               diagnostics = self.diagnostics.len(),
               "tokenized source");
        (tokens, self.diagnostics)
    }

    fn scan_number(&mut self, position: usize, digits: &str) -> Token {
        let value = digits.parse::<i32>().ok();
        if value.is_none() {
            self.diagnostics.push(Diagnostic::LiteralOverflow { digits: digits.to_string(),
                                                                position });
        }
        Token::number(position, digits, value)
    }

    fn scan_bad(&mut self, position: usize, text: &str) -> Token {
        for (offset, character) in text.char_indices() {
            self.diagnostics.push(Diagnostic::BadCharacter { character,
                                                             position: position + offset });
        }
        Token::new(TokenKind::Bad, position, text)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to and including the first `EndOfInput`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
        }
        Some(token)
    }
}
