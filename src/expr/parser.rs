//! Precedence parser for memory expressions.
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := INTEGER | '(' expr ')'
//! ```

use std::iter::Peekable;
use std::vec::IntoIter;

use super::lexer::Token;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Expr {
    Literal(u32),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Paren(Box<Expr>),
}

const END: &str = "end of expression";

/// Deepest parenthesis nesting accepted.
pub const MAX_DEPTH: usize = 256;
/// Most binary operators accepted in one expression.
pub const MAX_OPERATORS: usize = 1024;

pub fn parse(tokens: Vec<Token<'_>>) -> Result<Expr> {
    let mut parser = Parser {
        tokens: tokens.into_iter().peekable(),
        depth: 0,
        operators: 0,
    };
    let expr = parser.expr()?;
    match parser.tokens.next() {
        None => Ok(expr),
        Some(trailing) => Err(unexpected(Some(trailing))),
    }
}

struct Parser<'a> {
    tokens: Peekable<IntoIter<Token<'a>>>,
    depth: usize,
    operators: usize,
}

impl<'a> Parser<'a> {
    fn expr(&mut self) -> Result<Expr> {
        let mut lhs = self.term()?;
        while let Some(op) = self.next_op(&[Token::Plus, Token::Minus])? {
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr> {
        let mut lhs = self.factor()?;
        while let Some(op) = self.next_op(&[Token::Star, Token::Slash])? {
            let rhs = self.factor()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr> {
        match self.tokens.next() {
            Some(Token::Integer(digits)) => Ok(Expr::Literal(digits.parse::<u32>()?)),
            Some(Token::LParen) => {
                if self.depth == MAX_DEPTH {
                    return Err(unexpected(Some(Token::LParen)));
                }
                self.depth += 1;
                let inner = self.expr()?;
                self.depth -= 1;
                match self.tokens.next() {
                    Some(Token::RParen) => Ok(Expr::Paren(Box::new(inner))),
                    other => Err(unexpected(other)),
                }
            }
            other => Err(unexpected(other)),
        }
    }

    /// Consumes the next token if it is one of `accepted`.
    ///
    /// Left-associative chains nest one level per operator, so their
    /// length is capped like parenthesis depth.
    fn next_op(&mut self, accepted: &[Token<'a>]) -> Result<Option<BinOp>> {
        let Some(&token) = self.tokens.peek() else {
            return Ok(None);
        };
        if !accepted.contains(&token) {
            return Ok(None);
        }
        if self.operators == MAX_OPERATORS {
            return Err(unexpected(Some(token)));
        }
        self.operators += 1;
        self.tokens.next();
        Ok(match token {
            Token::Plus => Some(BinOp::Add),
            Token::Minus => Some(BinOp::Sub),
            Token::Star => Some(BinOp::Mul),
            Token::Slash => Some(BinOp::Div),
            _ => None,
        })
    }
}

fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unexpected(token: Option<Token<'_>>) -> Error {
    let text = token.as_ref().map_or(END, |t| t.text());
    Error::UnsupportedExpression(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::lexer::tokenize;

    fn parse_str(input: &str) -> Result<Expr> {
        parse(tokenize(input)?)
    }

    #[test]
    fn multiplication_binds_tighter() {
        let expr = parse_str("1+2*3").unwrap();
        assert_eq!(
            expr,
            binary(
                BinOp::Add,
                Expr::Literal(1),
                binary(BinOp::Mul, Expr::Literal(2), Expr::Literal(3)),
            )
        );
    }

    #[test]
    fn operators_are_left_associative() {
        let expr = parse_str("8-4-2").unwrap();
        assert_eq!(
            expr,
            binary(
                BinOp::Sub,
                binary(BinOp::Sub, Expr::Literal(8), Expr::Literal(4)),
                Expr::Literal(2),
            )
        );
    }

    #[test]
    fn parentheses_are_kept_in_tree() {
        let expr = parse_str("(7)").unwrap();
        assert_eq!(expr, Expr::Paren(Box::new(Expr::Literal(7))));
    }

    #[test]
    fn unary_minus_is_rejected() {
        match parse_str("(64*-1024)") {
            Err(Error::UnsupportedExpression(tok)) => assert_eq!(tok, "-"),
            other => panic!("expected UnsupportedExpression, got: {other:?}"),
        }
    }

    #[test]
    fn unbalanced_parentheses_fail() {
        assert!(matches!(
            parse_str("((1+2)"),
            Err(Error::UnsupportedExpression(_))
        ));
        match parse_str("(1+2))") {
            Err(Error::UnsupportedExpression(tok)) => assert_eq!(tok, ")"),
            other => panic!("expected UnsupportedExpression, got: {other:?}"),
        }
    }

    #[test]
    fn empty_input_fails() {
        match parse_str("   ") {
            Err(Error::UnsupportedExpression(tok)) => assert_eq!(tok, END),
            other => panic!("expected UnsupportedExpression, got: {other:?}"),
        }
    }

    #[test]
    fn adjacent_literals_fail() {
        assert!(matches!(
            parse_str("64 1024"),
            Err(Error::UnsupportedExpression(_))
        ));
    }

    #[test]
    fn nesting_is_limited() {
        let nested = |depth: usize| {
            format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
        };
        assert!(parse_str(&nested(MAX_DEPTH)).is_ok());
        match parse_str(&nested(MAX_DEPTH + 1)) {
            Err(Error::UnsupportedExpression(tok)) => assert_eq!(tok, "("),
            other => panic!("expected UnsupportedExpression, got: {other:?}"),
        }
    }

    #[test]
    fn operator_chains_are_limited() {
        let chain = |ops: usize| format!("1{}", "+1".repeat(ops));
        assert!(parse_str(&chain(MAX_OPERATORS)).is_ok());
        match parse_str(&chain(MAX_OPERATORS + 1)) {
            Err(Error::UnsupportedExpression(tok)) => assert_eq!(tok, "+"),
            other => panic!("expected UnsupportedExpression, got: {other:?}"),
        }
    }
}
