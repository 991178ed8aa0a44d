#[cfg(test)]
mod tests;

mod expr;

use creek_session::diagnostics::prelude::*;
use creek_utils::peek::Peek;

use crate::ast::Expr;
use crate::lexer::TokenIter;
use crate::token::{Token, TokenKind};

#[derive(serde::Serialize, Debug)]
pub struct ParseError {
    pub expected: String,
    pub span: Span,
}

impl IntoDiagnostic<SourceId> for ParseError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary(
                format!("expected {}", self.expected),
                *source_id,
                self.span,
            ))
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    tokens: TokenIter,
}

impl Parser {
    pub fn new(tokens: TokenIter) -> Self {
        Self { tokens }
    }

    /// Parses a whole expression. The parse is complete only once the
    /// cursor reaches end of input; a trailing token is an error at that
    /// token's position.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr()?;

        match self.tokens.peek() {
            None => Ok(expr),
            other => Err(self.error_expected("end of input", other)),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        match self.tokens.peek() {
            Some(t) if t.kind == kind => {
                self.tokens.next();
                Ok(t)
            }

            other => Err(self.error_expected_kind(kind, other)),
        }
    }

    fn error_expected_kind(&self, kind: TokenKind, found: Option<Token>) -> ParseError {
        self.error_expected(kind.token_name(), found)
    }

    fn error_expected(&self, expected: impl Into<String>, found: Option<Token>) -> ParseError {
        match found {
            Some(token) => ParseError {
                expected: expected.into(),
                span: token.span,
            },
            None => ParseError {
                expected: expected.into(),
                span: self.tokens.eof_span(),
            },
        }
    }
}
