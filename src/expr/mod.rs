//! Arithmetic expressions for the memory setting.
//!
//! Lets operators write `m=64*1024` instead of pre-computing kibibytes.
//! Only non-negative decimal integers, `+ - * /`, parentheses and
//! whitespace are understood.

mod lexer;
mod parser;

pub use parser::{BinOp, Expr};

use crate::error::{Error, Result};

/// Parses and evaluates a memory expression as `u32`.
///
/// Division truncates. Addition, subtraction and multiplication wrap on
/// overflow, so `5-10` yields `4294967291` rather than an error; existing
/// settings strings may rely on this.
///
/// # Errors
///
/// - [`Error::UnsupportedExpression`] for malformed input, non-decimal
///   literals, operators outside `+ - * /`, more than 256 nested
///   parentheses or more than 1024 operators
/// - [`Error::Number`] if a literal does not fit in `u32`
/// - [`Error::DivisionByZero`]
pub fn evaluate(input: &str) -> Result<u32> {
    let tokens = lexer::tokenize(input)?;
    let tree = parser::parse(tokens)?;
    eval(&tree)
}

fn eval(expr: &Expr) -> Result<u32> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Paren(inner) => eval(inner),
        Expr::Binary { op, lhs, rhs } => {
            let x = eval(lhs)?;
            let y = eval(rhs)?;
            match op {
                BinOp::Add => Ok(x.wrapping_add(y)),
                BinOp::Sub => Ok(x.wrapping_sub(y)),
                BinOp::Mul => Ok(x.wrapping_mul(y)),
                BinOp::Div => x.checked_div(y).ok_or(Error::DivisionByZero),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::IntErrorKind;

    #[test]
    fn evaluates_plain_literal() {
        assert_eq!(evaluate("65546").unwrap(), 65546);
    }

    #[test]
    fn evaluates_product() {
        assert_eq!(evaluate("64*1024").unwrap(), 65536);
    }

    #[test]
    fn evaluates_nested_expression() {
        assert_eq!(evaluate("((64*1024)+(20-10))/2").unwrap(), 32778);
        assert_eq!(evaluate("( ( 64 * 1024 ) + ( 20 - 10 ) ) / 2").unwrap(), 32778);
    }

    #[test]
    fn precedence_without_parentheses() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14);
        assert_eq!(evaluate("20/4/5").unwrap(), 1);
    }

    #[test]
    fn division_truncates() {
        assert_eq!(evaluate("7/2").unwrap(), 3);
    }

    #[test]
    fn subtraction_wraps() {
        assert_eq!(evaluate("5-10").unwrap(), 4294967291);
    }

    #[test]
    fn multiplication_wraps() {
        assert_eq!(evaluate("65536*65536").unwrap(), 0);
    }

    #[test]
    fn max_literal_is_accepted() {
        assert_eq!(evaluate("4294967295").unwrap(), u32::MAX);
    }

    #[test]
    fn modulo_with_bad_parens_is_unsupported() {
        assert!(matches!(
            evaluate("(64%1024)+(20-10))/2"),
            Err(Error::UnsupportedExpression(_))
        ));
    }

    #[test]
    fn unary_minus_is_unsupported() {
        assert!(matches!(
            evaluate("(64*-1024)"),
            Err(Error::UnsupportedExpression(_))
        ));
    }

    #[test]
    fn float_is_unsupported() {
        assert!(matches!(
            evaluate("3.14159"),
            Err(Error::UnsupportedExpression(_))
        ));
    }

    #[test]
    fn literal_overflow_is_numeric_error() {
        match evaluate("4294967300") {
            Err(Error::Number(e)) => assert_eq!(*e.kind(), IntErrorKind::PosOverflow),
            other => panic!("expected Number overflow, got: {other:?}"),
        }
        match evaluate("((64*4294967300)+(20-10))/2") {
            Err(Error::Number(e)) => assert_eq!(*e.kind(), IntErrorKind::PosOverflow),
            other => panic!("expected Number overflow, got: {other:?}"),
        }
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(matches!(evaluate("1024/(2-2)"), Err(Error::DivisionByZero)));
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let input = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
        match evaluate(&input) {
            Err(Error::UnsupportedExpression(tok)) => assert_eq!(tok, "("),
            other => panic!("expected UnsupportedExpression, got: {other:?}"),
        }
    }

    #[test]
    fn long_operator_chain_is_an_error() {
        let input = format!("1{}", "+1".repeat(200_000));
        assert!(matches!(
            evaluate(&input),
            Err(Error::UnsupportedExpression(_))
        ));
    }

    #[test]
    fn non_ascii_whitespace_is_unsupported() {
        assert_eq!(evaluate(" 64 *\t1024\r\n").unwrap(), 65536);
        assert!(matches!(
            evaluate("64\u{a0}*1024"),
            Err(Error::UnsupportedExpression(_))
        ));
        assert!(matches!(
            evaluate("64*\u{2003}1024"),
            Err(Error::UnsupportedExpression(_))
        ));
    }
}
