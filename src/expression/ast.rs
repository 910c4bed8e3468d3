use crate::rational::Rational;

/// The four binary operators a puzzle allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Sub, Op::Mul, Op::Div];

    /// Binding strength: × and ÷ group tighter than + and −.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }

    /// Symbol used in rendered solutions.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "−",
            Op::Mul => "×",
            Op::Div => "÷",
        }
    }

    pub fn ascii(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Whether `a op b == b op a`.
    pub fn is_commutative(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }

    pub fn is_additive(self) -> bool {
        matches!(self, Op::Add | Op::Sub)
    }

    /// Apply the operator exactly; `None` only for division by zero.
    pub fn apply(self, left: &Rational, right: &Rational) -> Option<Rational> {
        match self {
            Op::Add => Some(left.add(right)),
            Op::Sub => Some(left.sub(right)),
            Op::Mul => Some(left.mul(right)),
            Op::Div => left.checked_div(right),
        }
    }
}

/// Arithmetic expression over card values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Number(u32),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Op, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Op::Add => Expression::Add(l, r),
            Op::Sub => Expression::Sub(l, r),
            Op::Mul => Expression::Mul(l, r),
            Op::Div => Expression::Div(l, r),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Number(_))
    }

    /// The operator of a binary node, `None` for a leaf.
    pub fn op(&self) -> Option<Op> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(_, _) => Some(Op::Add),
            Expression::Sub(_, _) => Some(Op::Sub),
            Expression::Mul(_, _) => Some(Op::Mul),
            Expression::Div(_, _) => Some(Op::Div),
        }
    }

    pub fn operands(&self) -> Option<(&Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => Some((&**l, &**r)),
        }
    }

    /// Leaf values in left-to-right order.
    pub fn leaves(&self) -> Vec<u32> {
        fn collect(expr: &Expression, out: &mut Vec<u32>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Leaf values sorted ascending, for multiset comparison.
    pub fn sorted_leaves(&self) -> Vec<u32> {
        let mut leaves = self.leaves();
        leaves.sort_unstable();
        leaves
    }
}
