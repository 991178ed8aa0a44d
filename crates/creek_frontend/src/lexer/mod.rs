
use std::str::Chars;

use creek_session::diagnostics::prelude::*;
use creek_utils::peek::Peek;

use crate::token::*;

#[derive(serde::Serialize, Debug)]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub span: Span,
}

#[derive(serde::Serialize, thiserror::Error, Debug)]
pub enum LexerErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),

    #[error("integer literal too large")]
    IntegerOverflow,
}

impl IntoDiagnostic<SourceId> for LexerError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary(
                self.kind.to_string(),
                *source_id,
                self.span,
            ))
    }
}

pub type LexerResult<T> = Result<T, LexerError>;

pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
        }
    }

    pub fn lex(mut self) -> LexerResult<TokenIter> {
        let mut tokens = vec![];
        while let Some(token) = self.lex_token()? {
            tokens.push(token);
        }

        Ok(TokenIter {
            tokens: tokens.into_iter(),
            eof_span: Span::empty(self.all.len()),
        })
    }

    fn lex_token(&mut self) -> LexerResult<Option<Token>> {
        loop {
            self.token_start = self.byte_pos();

            let kind = match self.chars.next() {
                None => return Ok(None),

                Some(ch) if ch.is_ascii_whitespace() => continue,

                Some('(') => TokenKind::LParen,
                Some(')') => TokenKind::RParen,

                Some('+') => TokenKind::Add,
                Some('-') => TokenKind::Sub,
                Some('*') => TokenKind::Mul,
                Some('/') => TokenKind::Div,

                Some(ch @ '0'..='9') => self.lex_integer(ch as i64 - '0' as i64)?,

                Some(ch) => return Err(self.error(LexerErrorKind::UnexpectedChar(ch))),
            };

            let token = Token {
                kind,
                span: Span::new(self.token_start, self.byte_pos()),
            };

            return Ok(Some(token));
        }
    }

    /// Consumes the longest run of decimal digits starting at the current
    /// position. The value is accumulated with checked arithmetic.
    fn lex_integer(&mut self, start: i64) -> LexerResult<TokenKind> {
        let mut n = Some(start);

        while let Some(ch @ '0'..='9') = self.chars.peek() {
            self.chars.next();

            let digit = ch as i64 - '0' as i64;
            n = n.and_then(|n| n.checked_mul(10));
            n = n.and_then(|n| n.checked_add(digit));
        }

        n.map(TokenKind::Integer)
            .ok_or_else(|| self.error(LexerErrorKind::IntegerOverflow))
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }

    fn error(&self, kind: LexerErrorKind) -> LexerError {
        let span = Span::new(self.token_start, self.byte_pos());
        LexerError { kind, span }
    }
}

/// The lexed token sequence: an owned vector consumed through a forward
/// cursor. Lookahead past the last token yields `None`; `eof_span` is the
/// position such a lookahead stands for.
pub struct TokenIter {
    tokens: std::vec::IntoIter<Token>,
    eof_span: Span,
}

impl TokenIter {
    pub fn eof_span(&self) -> Span {
        self.eof_span
    }
}

impl Iterator for TokenIter {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

impl Peek for TokenIter {
    fn peek(&self) -> Option<Self::Item> {
        self.tokens.as_slice().first().copied()
    }
}
