use creek_utils::peek::Peek;

use super::{ParseResult, Parser};
use crate::ast::{BinOp, Expr, ExprKind};
use crate::token::{Token, TokenKind};

/// Binding strengths, weakest first. Climbing over these encodes the
/// grammar `expr := mul (("+"|"-") mul)*`, `mul := primary (("*"|"/")
/// primary)*`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Prec {
    Lowest,
    Term,
    Factor,
}

fn binop_prec(binop: BinOp) -> Prec {
    match binop {
        BinOp::Add | BinOp::Sub => Prec::Term,
        BinOp::Mul | BinOp::Div => Prec::Factor,
    }
}

impl Parser {
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_prec(Prec::Lowest)
    }

    fn parse_prec(&mut self, in_prec: Prec) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;

        // all operators are left-associative, so an operand binds only to
        // operators strictly stronger than the surrounding one
        while let Some(op) = self.peek_bin_op(in_prec) {
            self.tokens.next();

            let rhs = self.parse_prec(binop_prec(op))?;

            let span = expr.span.union(rhs.span);
            expr = Expr::new(
                ExprKind::BinOp {
                    op,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.tokens.peek() {
            Some(Token {
                kind: TokenKind::Integer(n),
                span,
            }) => {
                self.tokens.next();
                Ok(Expr::new(ExprKind::Integer(n), span))
            }

            Some(t) if t.kind == TokenKind::LParen => {
                self.tokens.next();

                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;

                Ok(expr)
            }

            other => Err(self.error_expected("an expression", other)),
        }
    }

    fn peek_bin_op(&self, in_prec: Prec) -> Option<BinOp> {
        let op = match self.tokens.peek().map(|t| t.kind)? {
            TokenKind::Add => BinOp::Add,
            TokenKind::Sub => BinOp::Sub,
            TokenKind::Mul => BinOp::Mul,
            TokenKind::Div => BinOp::Div,

            _ => return None,
        };

        (binop_prec(op) > in_prec).then_some(op)
    }
}
