use log::{debug, warn};

use crate::canonical::rewrite::normalize;
use crate::canonical::terms::{TermOrder, factors, signed_terms};
use crate::expression::{Expression, Op, parse};

/// Sort operands compound-first, then by descending magnitude; rendered
/// text breaks remaining ties.
fn ordered<'a>(operands: Vec<&'a Expression>) -> Vec<(&'a Expression, String)> {
    let mut rendered: Vec<(&Expression, String, TermOrder)> = operands
        .into_iter()
        .map(|e| (e, render(e), TermOrder::of(e)))
        .collect();
    rendered.sort_by(|a, b| a.2.compare(&b.2, false).then_with(|| a.1.cmp(&b.1)));
    rendered.into_iter().map(|(e, s, _)| (e, s)).collect()
}

fn render_sum(expr: &Expression) -> String {
    let terms = signed_terms(expr);
    let positive: Vec<&Expression> = terms.iter().filter(|t| t.0).map(|t| t.1).collect();
    let negative: Vec<&Expression> = terms.iter().filter(|t| !t.0).map(|t| t.1).collect();

    let mut out = ordered(positive)
        .into_iter()
        .map(|(_, s)| s)
        .collect::<Vec<_>>()
        .join(" + ");
    for (_, s) in ordered(negative) {
        out.push_str(" − ");
        out.push_str(&s);
    }
    out
}

fn render_factor(expr: &Expression, s: String) -> String {
    match expr.op() {
        Some(op) if op.is_additive() => format!("({})", s),
        _ => s,
    }
}

fn render_product(expr: &Expression) -> String {
    let (num, den) = factors(expr);
    let mut out = ordered(num)
        .into_iter()
        .map(|(e, s)| render_factor(e, s))
        .collect::<Vec<_>>()
        .join(" × ");
    for (e, s) in ordered(den) {
        out.push_str(" ÷ ");
        out.push_str(&render_factor(e, s));
    }
    out
}

fn render(expr: &Expression) -> String {
    match expr.op() {
        None => expr.to_string(),
        Some(Op::Add | Op::Sub) => render_sum(expr),
        Some(Op::Mul | Op::Div) => render_product(expr),
    }
}

/// Whether `display` parses back to a tree with `expr`'s value and cards.
fn round_trips(display: &str, expr: &Expression) -> bool {
    match parse(display) {
        Ok(parsed) => {
            parsed.value().is_some()
                && parsed.value() == expr.value()
                && parsed.sorted_leaves() == expr.sorted_leaves()
        }
        Err(e) => {
            debug!("Rendered display '{}' does not parse: {}", display, e);
            false
        }
    }
}

/// Render the preferred human-readable form of a solution.
///
/// The tree is normalized with the leaf-preserving rules and printed with
/// ordered operands. If normalization fails, or the printed form does not
/// evaluate back to the same value with the same cards, the expression is
/// printed as-is with minimal parentheses instead.
pub fn format_display(expr: &Expression) -> String {
    let display = match normalize(expr) {
        Ok(normalized) => render(&normalized),
        Err(e) => {
            warn!("Display normalization failed for {}: {}", expr.to_raw_string(), e);
            return expr.to_string();
        }
    };

    if round_trips(&display, expr) {
        display
    } else {
        warn!(
            "Display '{}' does not round-trip for {}, using minimal parentheses",
            display,
            expr.to_raw_string()
        );
        expr.to_string()
    }
}
