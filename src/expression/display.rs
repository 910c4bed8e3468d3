use std::fmt;

use crate::expression::ast::{Expression, Op};

/// Whether `child` must be parenthesized under `parent`.
///
/// Equal precedence only needs parentheses on the right of a
/// non-associative operator: `a − (b + c)`, `a ÷ (b × c)`.
fn needs_parens(child: Op, parent: Op, is_right: bool) -> bool {
    let (cp, pp) = (child.precedence(), parent.precedence());
    cp < pp || (cp == pp && is_right && !parent.is_commutative())
}

impl Expression {
    /// Fully parenthesized rendering, as built up during search.
    pub fn to_raw_string(&self) -> String {
        match self {
            Expression::Number(n) => n.to_string(),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                let op = self.op().map(Op::symbol).unwrap_or_default();
                format!("({} {} {})", l.to_raw_string(), op, r.to_raw_string())
            }
        }
    }
}

/// Renders with the fewest parentheses that keep the tree's meaning.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_child(
            f: &mut fmt::Formatter,
            child: &Expression,
            parent: Op,
            is_right: bool,
        ) -> fmt::Result {
            match child.op() {
                Some(op) if needs_parens(op, parent, is_right) => {
                    write!(f, "(")?;
                    fmt_expression(f, child)?;
                    write!(f, ")")
                }
                _ => fmt_expression(f, child),
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    let Some(op) = expr.op() else {
                        return Ok(());
                    };
                    write_child(f, l, op, false)?;
                    write!(f, " {} ", op.symbol())?;
                    write_child(f, r, op, true)
                }
            }
        }

        fmt_expression(f, self)
    }
}
