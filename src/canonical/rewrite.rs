//! Leaf-preserving rewrite rules applied to a fixed point before display.
//!
//! Every rule keeps both the exact value of the node it rewrites and the
//! cards it uses.

use log::{debug, trace};

use crate::canonical::constants::MAX_REWRITE_PASSES;
use crate::canonical::errors::CanonicalError;
use crate::expression::{Expression, Op};
use crate::rational::Rational;

fn is_negative(expr: &Expression) -> bool {
    expr.value().is_some_and(|v| v.is_negative())
}

/// Rewrite `expr` into a tree with the opposite value and the same leaves,
/// by swapping the operands of one negative subtraction.
fn negated(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::Sub(a, b) => Some(Expression::Sub(b.clone(), a.clone())),
        Expression::Mul(l, r) | Expression::Div(l, r) => {
            let op = expr.op()?;
            if is_negative(l)
                && let Some(nl) = negated(l)
            {
                return Some(Expression::binary(op, nl, (**r).clone()));
            }
            if is_negative(r)
                && let Some(nr) = negated(r)
            {
                return Some(Expression::binary(op, (**l).clone(), nr));
            }
            None
        }
        Expression::Add(_, _) | Expression::Number(_) => None,
    }
}

/// Negate a negative term so the enclosing sum subtracts a positive group.
fn positive_term(term: &Expression) -> Option<Expression> {
    if is_negative(term) {
        negated(term)
    } else {
        None
    }
}

// x ÷ 1 → x × 1
fn rewrite_identity(expr: &Expression) -> Option<Expression> {
    match expr {
        Expression::Div(x, y) if matches!(y.as_ref(), Expression::Number(1)) => {
            Some(Expression::Mul(x.clone(), y.clone()))
        }
        _ => None,
    }
}

fn rewrite_signs(expr: &Expression) -> Option<Expression> {
    match expr {
        // a − (b − c) → a + (c − b), a − ((b − c) × d) → a + ((c − b) × d)
        Expression::Sub(a, t) => {
            positive_term(t).map(|n| Expression::Add(a.clone(), Box::new(n)))
        }
        Expression::Add(a, t) => {
            if let Some(n) = positive_term(t) {
                return Some(Expression::Sub(a.clone(), Box::new(n)));
            }
            positive_term(a).map(|n| Expression::Sub(t.clone(), Box::new(n)))
        }
        Expression::Mul(l, r) | Expression::Div(l, r) => {
            let op = expr.op()?;
            let nl = positive_term(l)?;
            let nr = positive_term(r)?;
            Some(Expression::binary(op, nl, nr))
        }
        Expression::Number(_) => None,
    }
}

fn rewrite_division(expr: &Expression) -> Option<Expression> {
    match expr {
        // a ÷ (b ÷ c) → a × (c ÷ b)
        Expression::Div(a, inner) => match inner.as_ref() {
            Expression::Div(b, c) => Some(Expression::Mul(
                a.clone(),
                Box::new(Expression::Div(c.clone(), b.clone())),
            )),
            // a ÷ (b × c) → (a ÷ b) ÷ c
            Expression::Mul(b, c) => Some(Expression::Div(
                Box::new(Expression::Div(a.clone(), b.clone())),
                c.clone(),
            )),
            _ => None,
        },
        Expression::Mul(l, r) => match (l.as_ref(), r.as_ref()) {
            // a × (b ÷ c) → (a × b) ÷ c
            (_, Expression::Div(b, c)) => Some(Expression::Div(
                Box::new(Expression::Mul(l.clone(), b.clone())),
                c.clone(),
            )),
            // (b ÷ c) × a → (b × a) ÷ c
            (Expression::Div(b, c), _) => Some(Expression::Div(
                Box::new(Expression::Mul(b.clone(), r.clone())),
                c.clone(),
            )),
            _ => None,
        },
        _ => None,
    }
}

fn rewrite_node(expr: &Expression) -> Option<Expression> {
    rewrite_identity(expr)
        .or_else(|| rewrite_signs(expr))
        .or_else(|| rewrite_division(expr))
}

/// One bottom-up pass. Returns the new tree and whether anything changed.
fn rewrite_pass(expr: Expression) -> (Expression, bool) {
    let (expr, children_changed) = match expr {
        Expression::Number(_) => return (expr, false),
        Expression::Add(l, r) => rebuild(Op::Add, *l, *r),
        Expression::Sub(l, r) => rebuild(Op::Sub, *l, *r),
        Expression::Mul(l, r) => rebuild(Op::Mul, *l, *r),
        Expression::Div(l, r) => rebuild(Op::Div, *l, *r),
    };

    match rewrite_node(&expr) {
        Some(rewritten) => {
            trace!("Rewrote {} into {}", expr, rewritten);
            (rewritten, true)
        }
        None => (expr, children_changed),
    }
}

fn rebuild(op: Op, l: Expression, r: Expression) -> (Expression, bool) {
    let (l, l_changed) = rewrite_pass(l);
    let (r, r_changed) = rewrite_pass(r);
    (Expression::binary(op, l, r), l_changed || r_changed)
}

/// Apply the rules until none changes the tree.
///
/// # Errors
///
/// Fails if `expr` divides by zero, if no fixed point is reached within
/// [`MAX_REWRITE_PASSES`], or if the result's value or cards differ from
/// the input's.
pub fn normalize(expr: &Expression) -> Result<Expression, CanonicalError> {
    let original: Rational = expr.evaluate()?;

    let mut current = expr.clone();
    let mut converged = false;
    for _ in 0..MAX_REWRITE_PASSES {
        let (next, changed) = rewrite_pass(current);
        current = next;
        if !changed {
            converged = true;
            break;
        }
    }
    if !converged {
        debug!("No fixed point for {}", expr.to_raw_string());
        return Err(CanonicalError::RewriteLimit {
            passes: MAX_REWRITE_PASSES,
        });
    }

    let normalized = current.evaluate()?;
    if normalized != original {
        return Err(CanonicalError::ValueMismatch {
            original: original.to_string(),
            normalized: normalized.to_string(),
        });
    }
    if current.sorted_leaves() != expr.sorted_leaves() {
        return Err(CanonicalError::LeafMismatch);
    }

    Ok(current)
}
