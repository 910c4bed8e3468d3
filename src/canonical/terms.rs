//! Flattening of additive and multiplicative chains, shared by the key and
//! the display formatter.

use std::cmp::Ordering;

use crate::expression::Expression;
use crate::rational::Rational;

/// Flatten nested `+`/`−` into signed terms: `a + b − (c − d)` gives
/// `[+a, +b, −c, +d]`.
pub(crate) fn signed_terms(expr: &Expression) -> Vec<(bool, &Expression)> {
    fn walk<'a>(expr: &'a Expression, positive: bool, out: &mut Vec<(bool, &'a Expression)>) {
        match expr {
            Expression::Add(l, r) => {
                walk(l, positive, out);
                walk(r, positive, out);
            }
            Expression::Sub(l, r) => {
                walk(l, positive, out);
                walk(r, !positive, out);
            }
            _ => out.push((positive, expr)),
        }
    }

    let mut out = Vec::new();
    walk(expr, true, &mut out);
    out
}

/// Flatten nested `×`/`÷` into numerator and denominator factors:
/// `a ÷ (b ÷ c) × d` gives `([a, c, d], [b])`.
pub(crate) fn factors(expr: &Expression) -> (Vec<&Expression>, Vec<&Expression>) {
    fn walk<'a>(
        expr: &'a Expression,
        numerator: bool,
        num: &mut Vec<&'a Expression>,
        den: &mut Vec<&'a Expression>,
    ) {
        match expr {
            Expression::Mul(l, r) => {
                walk(l, numerator, num, den);
                walk(r, numerator, num, den);
            }
            Expression::Div(l, r) => {
                walk(l, numerator, num, den);
                walk(r, !numerator, num, den);
            }
            _ if numerator => num.push(expr),
            _ => den.push(expr),
        }
    }

    let (mut num, mut den) = (Vec::new(), Vec::new());
    walk(expr, true, &mut num, &mut den);
    (num, den)
}

/// Sorting information for one operand of a flattened chain.
#[derive(Debug, Clone)]
pub(crate) struct TermOrder {
    pub is_leaf: bool,
    pub value: Option<Rational>,
}

impl TermOrder {
    pub fn of(expr: &Expression) -> Self {
        Self {
            is_leaf: expr.is_leaf(),
            value: expr.value(),
        }
    }

    /// Compound operands before leaf numbers, then descending value.
    ///
    /// `integers_only` restricts the value comparison to integer values,
    /// ranking integer-valued operands before fractional ones.
    pub fn compare(&self, other: &Self, integers_only: bool) -> Ordering {
        let rank = |t: &Self| match &t.value {
            Some(v) if !integers_only || v.is_integer() => Some(v.clone()),
            _ => None,
        };
        self.is_leaf
            .cmp(&other.is_leaf)
            .then_with(|| match (rank(self), rank(other)) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}
