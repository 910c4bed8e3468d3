use log::debug;

use crate::expression::parse;
use crate::rational::Rational;
use crate::solver::errors::ValidationError;

/// Check a submitted final expression against the cards and goal.
///
/// The expression must parse, evaluate without dividing by zero, use exactly
/// the card multiset, and equal the goal exactly.
pub fn check_final_expr(expr: &str, cards: &[u32], goal: i64) -> Result<(), ValidationError> {
    let parsed = parse(expr)?;
    let value = parsed.evaluate()?;

    let used = parsed.sorted_leaves();
    let mut expected = cards.to_vec();
    expected.sort_unstable();
    if used != expected {
        return Err(ValidationError::CardMismatch { expected, used });
    }

    if value != Rational::from(goal) {
        return Err(ValidationError::WrongValue {
            value: value.to_string(),
            goal,
        });
    }
    Ok(())
}

/// Boolean form of [`check_final_expr`]
pub fn validate_final_expr(expr: &str, cards: &[u32], goal: i64) -> bool {
    match check_final_expr(expr, cards, goal) {
        Ok(()) => true,
        Err(e) => {
            debug!("Rejected {:?}: {}", expr, e);
            false
        }
    }
}
