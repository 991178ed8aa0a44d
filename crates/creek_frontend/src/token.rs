use creek_diagnostic::span::Span;

use crate::NodeCopy;

#[derive(NodeCopy!)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Integer(i64),

    LParen,
    RParen,

    Add,
    Sub,
    Mul,
    Div,
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "integer",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::Div => "`/`",
        }
    }
}
