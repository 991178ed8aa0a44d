use creek_diagnostic::span::Span;

use super::{ParseError, Parser};
use crate::ast::{BinOp, Expr, ExprKind};
use crate::lexer::Lexer;

fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = Lexer::new(source).lex().expect("lex error");
    Parser::new(tokens).parse()
}

fn eval(expr: &Expr) -> i64 {
    match &expr.kind {
        ExprKind::Integer(n) => *n,
        ExprKind::BinOp { op, lhs, rhs } => {
            let (lhs, rhs) = (eval(lhs), eval(rhs));
            match op {
                BinOp::Add => lhs + rhs,
                BinOp::Sub => lhs - rhs,
                BinOp::Mul => lhs * rhs,
                BinOp::Div => lhs / rhs,
            }
        }
    }
}

#[test]
fn single_number() {
    let expr = parse("42").unwrap();

    assert_eq!(expr.to_string(), "42");
    assert_eq!(expr.span, Span::new(0, 2));
}

#[test]
fn addition() {
    assert_eq!(parse("1+2").unwrap().to_string(), "(1+2)");
}

#[test]
fn precedence() {
    assert_eq!(parse("2+3*4").unwrap().to_string(), "(2+(3*4))");
    assert_eq!(parse("2*3+4").unwrap().to_string(), "((2*3)+4)");
}

#[test]
fn parens_override_precedence() {
    assert_eq!(parse("(2+3)*4").unwrap().to_string(), "((2+3)*4)");
}

#[test]
fn left_associativity() {
    assert_eq!(parse("10-2-3").unwrap().to_string(), "((10-2)-3)");
    assert_eq!(parse("100/10/2").unwrap().to_string(), "((100/10)/2)");
}

#[test]
fn evaluates() {
    assert_eq!(eval(&parse("1+2").unwrap()), 3);
    assert_eq!(eval(&parse("2+3*4").unwrap()), 14);
    assert_eq!(eval(&parse("(2+3)*4").unwrap()), 20);
    assert_eq!(eval(&parse("10-2-3").unwrap()), 5);
}

#[test]
fn nested_parens() {
    assert_eq!(eval(&parse("((((5))))").unwrap()), 5);
}

#[test]
fn display_round_trips() {
    for source in ["1+2", "2+3*4", "(2+3)*4", "10-2-3", "((1+2)*(3+4))/7"] {
        let expr = parse(source).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();

        assert_eq!(eval(&reparsed), eval(&expr));
    }
}

#[test]
fn empty_input() {
    let err = parse("").unwrap_err();

    assert_eq!(err.expected, "an expression");
    assert_eq!(err.span, Span::empty(0));
}

#[test]
fn whitespace_only_input() {
    let err = parse("   ").unwrap_err();

    assert_eq!(err.expected, "an expression");
    assert_eq!(err.span, Span::empty(3));
}

#[test]
fn missing_operand() {
    // position immediately after the `+`
    let err = parse("1+").unwrap_err();

    assert_eq!(err.expected, "an expression");
    assert_eq!(err.span, Span::empty(2));
}

#[test]
fn unmatched_open_paren() {
    let err = parse("(1+2").unwrap_err();

    assert_eq!(err.expected, "`)`");
    assert_eq!(err.span, Span::empty(4));
}

#[test]
fn unmatched_close_paren() {
    let err = parse("1+2)").unwrap_err();

    assert_eq!(err.expected, "end of input");
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn trailing_tokens() {
    let err = parse("1 2").unwrap_err();

    assert_eq!(err.expected, "end of input");
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn operator_without_lhs() {
    let err = parse("*3").unwrap_err();

    assert_eq!(err.expected, "an expression");
    assert_eq!(err.span, Span::new(0, 1));
}
