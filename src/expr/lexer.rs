use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of digits; not yet range checked.
    Integer(&'a str),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token<'_> {
    pub fn text(&self) -> &str {
        match self {
            Token::Integer(s) => *s,
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::LParen => "(",
            Token::RParen => ")",
        }
    }
}

/// Splits a memory expression into tokens.
///
/// A literal is any run of alphanumerics, `.` and `_`; only pure digit runs
/// are accepted so `3.14159`, `0x10` or `1e3` are rejected as a whole.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let token = match c {
            c if is_blank(c) => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if is_literal_char(c) => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !is_literal_char(next) {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
                let literal = &input[start..end];
                if !literal.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::UnsupportedExpression(literal.to_string()));
                }
                Token::Integer(literal)
            }
            other => {
                // group operator runs like `<<` or `**` into one report
                let mut end = start + other.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if is_blank(next) || is_literal_char(next) || "()".contains(next) {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
                return Err(Error::UnsupportedExpression(input[start..end].to_string()));
            }
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Only ASCII space, tab, CR and LF separate tokens.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_literal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}
