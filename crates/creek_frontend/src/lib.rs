#[macro_use]
extern crate macro_rules_attribute;

mod lexer;
mod parser;

pub mod ast;
pub mod token;

pub use lexer::{LexerError, LexerErrorKind, TokenIter};
pub use parser::ParseError;

use lexer::Lexer;
use parser::Parser;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)];
}

/// Lexes a whole expression string. Fails on the first character that is
/// neither whitespace, a digit, nor one of `+ - * / ( )`.
pub fn lex(source: &str) -> Result<TokenIter, LexerError> {
    Lexer::new(source).lex()
}

/// Parses the token sequence into an expression tree, consuming every
/// token through end of input.
pub fn parse(tokens: TokenIter) -> Result<ast::Expr, ParseError> {
    Parser::new(tokens).parse()
}
