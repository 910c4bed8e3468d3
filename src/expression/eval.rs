use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::rational::Rational;

impl Expression {
    /// Evaluate exactly, bottom-up.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when any divisor evaluates to zero.
    pub fn evaluate(&self) -> Result<Rational, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(Rational::from(*n)),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left.add(&right))
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left.sub(&right))
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left.mul(&right))
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                left.checked_div(&right).ok_or_else(|| {
                    trace!("Division by zero attempted in {}", self);
                    ExpressionError::DivisionByZero
                })
            }
        }
    }

    /// Evaluate, mapping division by zero to `None`.
    pub fn value(&self) -> Option<Rational> {
        self.evaluate().ok()
    }
}
