use thiserror::Error;

/// Errors that can occur during expression evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
}

/// Errors produced while parsing a submitted expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expression is empty")]
    Empty,
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Unexpected token at position {position}")]
    UnexpectedToken { position: usize },
    #[error("Unclosed parenthesis opened at position {position}")]
    UnclosedParen { position: usize },
    #[error("Number at position {position} is too large")]
    NumberTooLarge { position: usize },
    #[error("Expression nests deeper than {max_depth} levels")]
    TooDeep { max_depth: usize },
}
