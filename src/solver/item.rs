use crate::expression::{Expression, Op};
use crate::rational::Rational;

/// A partial combination of cards: its exact value and the tree that built it
#[derive(Debug, Clone)]
pub struct Item {
    pub value: Rational,
    pub expr: Expression,
}

/// One way to combine two items: an operator and whether the operands swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub op: Op,
    pub swapped: bool,
}

/// Every combination of a pair, both orders for − and ÷.
pub const MOVES: [Move; 6] = [
    Move { op: Op::Add, swapped: false },
    Move { op: Op::Sub, swapped: false },
    Move { op: Op::Sub, swapped: true },
    Move { op: Op::Mul, swapped: false },
    Move { op: Op::Div, swapped: false },
    Move { op: Op::Div, swapped: true },
];

impl Item {
    pub fn card(value: u32) -> Self {
        Self {
            value: Rational::from(value),
            expr: Expression::Number(value),
        }
    }

    /// The value of `self op other` (or `other op self` when swapped);
    /// `None` when it divides by zero.
    pub fn value_with(&self, other: &Item, mv: Move) -> Option<Rational> {
        if mv.swapped {
            mv.op.apply(&other.value, &self.value)
        } else {
            mv.op.apply(&self.value, &other.value)
        }
    }

    pub fn expr_with(&self, other: &Item, mv: Move) -> Expression {
        let (l, r) = if mv.swapped {
            (&other.expr, &self.expr)
        } else {
            (&self.expr, &other.expr)
        };
        Expression::binary(mv.op, l.clone(), r.clone())
    }

    /// Combine into a new item, or `None` for a dead branch.
    pub fn combine(&self, other: &Item, mv: Move) -> Option<Item> {
        let value = self.value_with(other, mv)?;
        Some(Item {
            value,
            expr: self.expr_with(other, mv),
        })
    }
}
