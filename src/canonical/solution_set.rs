use std::collections::HashMap;

use log::{trace, warn};

use crate::canonical::format::format_display;
use crate::canonical::key::canonical_key;
use crate::canonical::preference::prefer_display;
use crate::expression::Expression;

/// Canonical key and preferred display of one solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    pub key: String,
    pub display: String,
}

/// Compute the equivalence-class key and display string of `expr`.
///
/// An expression whose key cannot be computed is keyed by its own display,
/// so it is kept as a distinct solution rather than dropped.
pub fn canonicalize(expr: &Expression) -> Canonical {
    let display = format_display(expr);
    let key = match canonical_key(expr) {
        Ok(key) => key,
        Err(e) => {
            warn!("No canonical key for {}: {}", expr.to_raw_string(), e);
            format!("display:{}", display)
        }
    };
    Canonical { key, display }
}

/// Insertion-ordered map from canonical key to preferred display string
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    index: HashMap<String, usize>,
    entries: Vec<Canonical>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a solution expression.
    pub fn offer(&mut self, expr: &Expression) {
        self.insert(canonicalize(expr));
    }

    /// Add a canonical solution, keeping first-discovery order and
    /// replacing a stored display only by a strictly preferred one.
    pub fn insert(&mut self, solution: Canonical) {
        match self.index.get(&solution.key) {
            Some(&i) => {
                if let Some(existing) = self.entries.get_mut(i)
                    && prefer_display(&solution.display, &existing.display)
                {
                    trace!(
                        "Replacing display '{}' with '{}'",
                        existing.display, solution.display
                    );
                    existing.display = solution.display;
                }
            }
            None => {
                self.index.insert(solution.key.clone(), self.entries.len());
                self.entries.push(solution);
            }
        }
    }

    /// Fold `other` in as if its solutions had been offered after ours.
    pub fn merge(&mut self, other: SolutionSet) {
        for solution in other.entries {
            self.insert(solution);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Canonical> {
        self.entries.iter()
    }

    pub fn into_displays(self) -> Vec<String> {
        self.entries.into_iter().map(|c| c.display).collect()
    }
}
