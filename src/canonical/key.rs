//! Canonical keys.
//!
//! An expression is flattened into a normal form of signed sums and signed
//! products while the equivalence rules are applied:
//!
//! - nested `+`/`−` distribute their signs over the flattened terms;
//! - nested `×`/`÷` become numerator and denominator factors, which covers
//!   `a ÷ (b ÷ c) = a × c ÷ b` and `a ÷ (b × c) = a ÷ b ÷ c`;
//! - a negative group used as a factor is flipped to `(larger − smaller)`
//!   and its sign moves onto the enclosing product, then onto the term;
//! - factors worth exactly `1` and terms worth exactly `0` are dropped;
//! - equal terms (or factors) on opposite sides cancel.
//!
//! Operands are then sorted, so the serialized key does not depend on the
//! order or grouping the expression was built in. When serializing, every
//! operand below the top level whose value is a non-negative integer is
//! written as that integer, so `(1 + 2 + 3) × 4` and `(1 + 3) × (2 + 4)` are
//! both `[6 * 4]`.

use std::collections::HashMap;

use log::debug;

use crate::canonical::errors::CanonicalError;
use crate::canonical::terms::TermOrder;
use crate::expression::Expression;
use crate::rational::Rational;

#[derive(Debug, Clone)]
enum Form {
    Leaf(u32),
    /// Two or more signed terms (`true` adds); no term is itself a sum.
    Sum(Vec<(bool, Form)>),
    /// Factors on the numerator (`true`) or denominator side; no factor is
    /// itself a product and every sum factor is positive.
    Product(Vec<(bool, Form)>),
}

/// A normal form with its sign pulled out.
#[derive(Debug, Clone)]
struct Signed {
    negative: bool,
    form: Form,
}

impl Form {
    fn value(&self) -> Option<Rational> {
        match self {
            Form::Leaf(n) => Some(Rational::from(*n)),
            Form::Sum(terms) => sum_value(terms),
            Form::Product(factors) => product_value(factors),
        }
    }

    fn order(&self) -> TermOrder {
        TermOrder {
            is_leaf: matches!(self, Form::Leaf(_)),
            value: self.value(),
        }
    }

    /// Structural key, used to group operands while the normal form is built.
    fn structure(&self) -> String {
        match self {
            Form::Leaf(n) => n.to_string(),
            Form::Sum(terms) => {
                let positive: Vec<String> =
                    terms.iter().filter(|t| t.0).map(|t| t.1.structure()).collect();
                let mut out = format!("({}", positive.join(" + "));
                for (_, t) in terms.iter().filter(|t| !t.0) {
                    out.push_str(" - ");
                    out.push_str(&t.structure());
                }
                out.push(')');
                out
            }
            Form::Product(factors) => {
                let numerator: Vec<String> =
                    factors.iter().filter(|f| f.0).map(|f| f.1.structure()).collect();
                let mut out = if numerator.is_empty() {
                    "[1".to_string()
                } else {
                    format!("[{}", numerator.join(" * "))
                };
                for (_, f) in factors.iter().filter(|f| !f.0) {
                    out.push_str(" / ");
                    out.push_str(&f.structure());
                }
                out.push(']');
                out
            }
        }
    }

    /// Serialized key. Operands are written with [`part_key`], then
    /// cancelled and sorted again by what they were written as.
    fn key(&self) -> String {
        let (parts, sum) = match self {
            Form::Leaf(n) => return n.to_string(),
            Form::Sum(terms) => (terms, true),
            Form::Product(factors) => (factors, false),
        };
        let (join, inverse, empty, open, close) = if sum {
            (" + ", " - ", "0", '(', ')')
        } else {
            (" * ", " / ", "1", '[', ']')
        };

        let (primary, others) = serialize_parts(parts);
        match (primary.as_slice(), others.as_slice()) {
            ([], []) => empty.to_string(),
            ([only], []) => only.clone(),
            ([], [only]) if sum => format!("-{}", only),
            _ => {
                let head = if primary.is_empty() {
                    empty.to_string()
                } else {
                    primary.join(join)
                };
                let mut out = format!("{}{}", open, head);
                for part in &others {
                    out.push_str(inverse);
                    out.push_str(part);
                }
                out.push(close);
                out
            }
        }
    }
}

fn sum_value(terms: &[(bool, Form)]) -> Option<Rational> {
    terms.iter().try_fold(Rational::zero(), |acc, (positive, t)| {
        let v = t.value()?;
        Some(if *positive { acc.add(&v) } else { acc.sub(&v) })
    })
}

fn product_value(factors: &[(bool, Form)]) -> Option<Rational> {
    factors.iter().try_fold(Rational::one(), |acc, (numerator, f)| {
        let v = f.value()?;
        if *numerator {
            Some(acc.mul(&v))
        } else {
            acc.checked_div(&v)
        }
    })
}

impl Signed {
    fn positive(form: Form) -> Self {
        Self {
            negative: false,
            form,
        }
    }

    fn value(&self) -> Option<Rational> {
        let v = self.form.value()?;
        Some(if self.negative { v.neg() } else { v })
    }

    fn key(&self) -> String {
        if self.negative {
            format!("-{}", self.form.key())
        } else {
            self.form.key()
        }
    }
}

/// One key after netting its occurrences on both sides.
struct Tally<T> {
    key: String,
    order: TermOrder,
    item: T,
    net: i64,
}

/// Net the occurrences of each key (the first item seen represents the
/// key), drop keys that cancel, then sort: primary side first, compound
/// before leaf, descending integer value, key.
fn tally<T>(parts: impl IntoIterator<Item = (bool, String, TermOrder, T)>) -> Vec<Tally<T>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tallies: Vec<Tally<T>> = Vec::new();

    for (primary, key, order, item) in parts {
        let delta = if primary { 1 } else { -1 };
        match index.get(&key) {
            Some(&i) => {
                if let Some(entry) = tallies.get_mut(i) {
                    entry.net += delta;
                }
            }
            None => {
                index.insert(key.clone(), tallies.len());
                tallies.push(Tally {
                    key,
                    order,
                    item,
                    net: delta,
                });
            }
        }
    }

    tallies.retain(|t| t.net != 0);
    tallies.sort_by(|a, b| {
        (b.net > 0)
            .cmp(&(a.net > 0))
            .then_with(|| a.order.compare(&b.order, true))
            .then_with(|| a.key.cmp(&b.key))
    });
    tallies
}

fn canonical_parts(parts: Vec<(bool, Form)>) -> Vec<(bool, Form)> {
    let entries = parts.into_iter().map(|(primary, form)| {
        let key = form.structure();
        let order = form.order();
        (primary, key, order, form)
    });

    tally(entries)
        .into_iter()
        .flat_map(|t| std::iter::repeat_n((t.net > 0, t.item), t.net.unsigned_abs() as usize))
        .collect()
}

/// How an operand below the top level is written: a non-negative integer
/// value stands for the whole operand.
fn part_key(form: &Form) -> (String, TermOrder) {
    match form.value() {
        Some(v) if v.is_integer() && !v.is_negative() => {
            let key = v.to_string();
            let order = TermOrder {
                is_leaf: true,
                value: Some(v),
            };
            (key, order)
        }
        _ => (form.key(), form.order()),
    }
}

/// Keys of the primary-side and other-side operands, after cancelling
/// operands that are written the same way.
fn serialize_parts(parts: &[(bool, Form)]) -> (Vec<String>, Vec<String>) {
    let entries = parts.iter().map(|(primary, form)| {
        let (key, order) = part_key(form);
        (*primary, key, order, ())
    });

    let mut primary = Vec::new();
    let mut others = Vec::new();
    for t in tally(entries) {
        let side = if t.net > 0 { &mut primary } else { &mut others };
        side.extend(std::iter::repeat_n(t.key, t.net.unsigned_abs() as usize));
    }
    (primary, others)
}

fn make_sum(terms: Vec<(bool, Form)>) -> Signed {
    // x + 0 = x − 0 = x
    let terms: Vec<(bool, Form)> = terms
        .into_iter()
        .filter(|(_, t)| !t.value().is_some_and(|v| v.is_zero()))
        .collect();
    let mut terms = canonical_parts(terms);

    if terms.len() >= 2 {
        return Signed::positive(Form::Sum(terms));
    }
    match terms.pop() {
        Some((positive, form)) => Signed {
            negative: !positive,
            form,
        },
        None => Signed::positive(Form::Leaf(0)),
    }
}

fn make_product(negative: bool, factors: Vec<(bool, Form)>) -> Signed {
    // x × 1 = x ÷ 1 = x
    let factors: Vec<(bool, Form)> = factors
        .into_iter()
        .filter(|(_, f)| !f.value().is_some_and(|v| v.is_one()))
        .collect();
    let mut factors = canonical_parts(factors);

    if factors.is_empty() {
        return Signed {
            negative,
            form: Form::Leaf(1),
        };
    }
    if matches!(factors.as_slice(), [(true, _)])
        && let Some((_, form)) = factors.pop()
    {
        return Signed { negative, form };
    }
    Signed {
        negative,
        form: Form::Product(factors),
    }
}

fn push_terms(operand: Signed, positive: bool, out: &mut Vec<(bool, Form)>) {
    let positive = positive != operand.negative;
    match operand.form {
        Form::Sum(terms) => out.extend(terms.into_iter().map(|(p, t)| (p == positive, t))),
        form => out.push((positive, form)),
    }
}

fn push_factors(
    operand: Signed,
    numerator: bool,
    negative: &mut bool,
    out: &mut Vec<(bool, Form)>,
) {
    *negative ^= operand.negative;
    match operand.form {
        Form::Product(factors) => {
            out.extend(factors.into_iter().map(|(n, f)| (n == numerator, f)));
        }
        // A negative group is written (larger − smaller) and the sign moves out.
        Form::Sum(terms) if sum_value(&terms).is_some_and(|v| v.is_negative()) => {
            *negative = !*negative;
            let flipped = terms.into_iter().map(|(p, t)| (!p, t)).collect();
            out.push((numerator, Form::Sum(canonical_parts(flipped))));
        }
        form => out.push((numerator, form)),
    }
}

fn build(expr: &Expression) -> Signed {
    match expr {
        Expression::Number(n) => Signed::positive(Form::Leaf(*n)),
        Expression::Add(l, r) | Expression::Sub(l, r) => {
            let mut terms = Vec::new();
            push_terms(build(l), true, &mut terms);
            push_terms(build(r), matches!(expr, Expression::Add(_, _)), &mut terms);
            make_sum(terms)
        }
        Expression::Mul(l, r) | Expression::Div(l, r) => {
            let mut negative = false;
            let mut factors = Vec::new();
            push_factors(build(l), true, &mut negative, &mut factors);
            push_factors(
                build(r),
                matches!(expr, Expression::Mul(_, _)),
                &mut negative,
                &mut factors,
            );
            make_product(negative, factors)
        }
    }
}

/// Serialize the equivalence class of `expr`.
///
/// Sums render as `(a + b - c)`, products as `[a * b / c]`, and a negative
/// result carries a leading `-`. Two expressions are the same solution
/// exactly when their keys match.
///
/// # Errors
///
/// Fails if `expr` divides by zero, or if the normal form does not evaluate
/// to the same value as `expr`.
pub fn canonical_key(expr: &Expression) -> Result<String, CanonicalError> {
    let original = expr.evaluate()?;
    let normal = build(expr);

    match normal.value() {
        Some(value) if value == original => Ok(normal.key()),
        other => {
            debug!("Normal form of {} lost its value", expr.to_raw_string());
            Err(CanonicalError::ValueMismatch {
                original: original.to_string(),
                normalized: other.map_or_else(|| "undefined".to_string(), |v| v.to_string()),
            })
        }
    }
}
