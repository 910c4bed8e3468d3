//! Parser for submitted expressions.
//!
//! Grammar (whitespace is ignored, both operators are left-associative):
//!
//! ```text
//! expr   := term   (("+" | "-" | "−") term)*
//! term   := factor (("*" | "×" | "/" | "÷") factor)*
//! factor := integer | "(" expr ")"
//! ```
//!
//! There is no unary minus, no implicit multiplication and no decimal
//! notation, so `2(3)`, `-2 + 4` and `1.5 * 2` are all rejected.

use log::debug;

use crate::expression::ast::{Expression, Op};
use crate::expression::errors::ParseError;

/// Deepest parenthesis nesting accepted before giving up.
pub const MAX_PAREN_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(u32),
    Op(Op),
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            '+' => Token::Op(Op::Add),
            '-' | '−' => Token::Op(Op::Sub),
            '*' | '×' => Token::Op(Op::Mul),
            '/' | '÷' => Token::Op(Op::Div),
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() => {
                let mut value = c.to_digit(10).unwrap_or(0);
                while let Some(&(_, next)) = chars.peek() {
                    let Some(digit) = next.to_digit(10) else {
                        break;
                    };
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or(ParseError::NumberTooLarge { position })?;
                    chars.next();
                }
                Token::Number(value)
            }
            other => return Err(ParseError::UnexpectedChar { ch: other, position }),
        };
        tokens.push((token, position));
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|&(t, _)| t)
    }

    fn position(&self) -> usize {
        self.tokens.get(self.pos).map_or(0, |&(_, p)| p)
    }

    fn parse_expr(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;
        while let Some(Token::Op(op)) = self.peek() {
            if !op.is_additive() {
                break;
            }
            self.pos += 1;
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_factor()?;
        while let Some(Token::Op(op)) = self.peek() {
            if op.is_additive() {
                break;
            }
            self.pos += 1;
            let right = self.parse_factor()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        let position = self.position();
        match self.peek() {
            Some(Token::Number(n)) => {
                self.pos += 1;
                Ok(Expression::Number(n))
            }
            Some(Token::LParen) => {
                self.depth += 1;
                if self.depth > MAX_PAREN_DEPTH {
                    return Err(ParseError::TooDeep {
                        max_depth: MAX_PAREN_DEPTH,
                    });
                }
                self.pos += 1;
                let inner = self.parse_expr()?;
                if self.peek() != Some(Token::RParen) {
                    return Err(ParseError::UnclosedParen { position });
                }
                self.pos += 1;
                self.depth -= 1;
                Ok(inner)
            }
            Some(_) => Err(ParseError::UnexpectedToken { position }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}

/// Parse a free-text expression into a tree.
///
/// # Errors
///
/// Returns a [`ParseError`] for empty input, unknown characters, misplaced
/// operators, unbalanced parentheses, numbers that overflow `u32`, or
/// nesting beyond [`MAX_PAREN_DEPTH`].
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.parse_expr()?;
    if parser.pos < parser.tokens.len() {
        let position = parser.position();
        debug!("Trailing input at position {} in '{}'", position, input);
        return Err(ParseError::UnexpectedToken { position });
    }
    Ok(expr)
}
