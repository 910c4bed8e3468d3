use thiserror::Error;

use crate::expression::{ExpressionError, ParseError};

/// Errors for card sets the solver refuses to search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("At least one card is required")]
    EmptyCards,
    #[error("Too many cards: {count} (at most {max})")]
    TooManyCards { count: usize, max: usize },
    #[error("Card value {0} is outside {min}..={max}", min = super::constants::MIN_CARD, max = super::constants::MAX_CARD)]
    InvalidCard(u32),
}

/// Reasons a submitted final expression is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Could not parse expression: {0}")]
    Parse(#[from] ParseError),
    #[error("Expression evaluation error: {0}")]
    Evaluation(#[from] ExpressionError),
    #[error("Expression uses cards {used:?}, expected {expected:?}")]
    CardMismatch { expected: Vec<u32>, used: Vec<u32> },
    #[error("Expression equals {value}, not {goal}")]
    WrongValue { value: String, goal: i64 },
}
