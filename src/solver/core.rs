use log::{debug, info, warn};
use rayon::prelude::*;

use crate::canonical::SolutionSet;
use crate::rational::Rational;
use crate::solver::constants::{MAX_CARD, MAX_CARDS, MIN_CARD};
use crate::solver::errors::SolverError;
use crate::solver::item::{Item, MOVES};

/// Exhaustive search over pairwise reductions of a card multiset
#[derive(Debug, Default, Clone, Copy)]
pub struct PuzzleSolver {}

impl PuzzleSolver {
    pub fn new() -> Self {
        Self {}
    }

    /// Reject card sets outside the supported shape before searching.
    pub fn check_cards(cards: &[u32]) -> Result<(), SolverError> {
        if cards.is_empty() {
            return Err(SolverError::EmptyCards);
        }
        if cards.len() > MAX_CARDS {
            return Err(SolverError::TooManyCards {
                count: cards.len(),
                max: MAX_CARDS,
            });
        }
        if let Some(&card) = cards.iter().find(|c| !(MIN_CARD..=MAX_CARD).contains(*c)) {
            return Err(SolverError::InvalidCard(card));
        }
        Ok(())
    }

    /// Whether any combination of all the cards reaches the goal
    pub fn try_has_solution(&self, cards: &[u32], goal: i64) -> Result<bool, SolverError> {
        Self::check_cards(cards)?;
        let target = Rational::from(goal);
        let items: Vec<Item> = cards.iter().map(|&c| Item::card(c)).collect();

        if items.len() == 1 {
            return Ok(items[0].value == target);
        }

        let found = top_level_branches(&items)
            .into_par_iter()
            .find_any(|next| exists(next, &target))
            .is_some();

        debug!("Existence check for {:?} -> {}: {}", cards, goal, found);
        Ok(found)
    }

    /// Like [`PuzzleSolver::try_has_solution`], answering `false` for unsupported card sets.
    pub fn has_solution(&self, cards: &[u32], goal: i64) -> bool {
        self.try_has_solution(cards, goal).unwrap_or_else(|e| {
            warn!("Not searching {:?}: {}", cards, e);
            false
        })
    }

    /// One display string per equivalence class of solutions, in discovery order
    pub fn try_solve(&self, cards: &[u32], goal: i64) -> Result<Vec<String>, SolverError> {
        Self::check_cards(cards)?;
        info!("Enumerating solutions for {:?} -> {}", cards, goal);

        let target = Rational::from(goal);
        let items: Vec<Item> = cards.iter().map(|&c| Item::card(c)).collect();
        let mut solutions = SolutionSet::new();

        if items.len() == 1 {
            if items[0].value == target {
                solutions.offer(&items[0].expr);
            }
            return Ok(solutions.into_displays());
        }

        // Collecting an indexed parallel iterator keeps branch order
        let per_branch: Vec<SolutionSet> = top_level_branches(&items)
            .into_par_iter()
            .map(|next| {
                let mut found = SolutionSet::new();
                enumerate(&next, &target, &mut found);
                found
            })
            .collect();

        for found in per_branch {
            solutions.merge(found);
        }

        info!("Found {} distinct solutions", solutions.len());
        Ok(solutions.into_displays())
    }

    /// Like [`PuzzleSolver::try_solve`], answering an empty list for unsupported card sets.
    pub fn solve(&self, cards: &[u32], goal: i64) -> Vec<String> {
        self.try_solve(cards, goal).unwrap_or_else(|e| {
            warn!("Not searching {:?}: {}", cards, e);
            Vec::new()
        })
    }
}

/// The remaining items after removing positions `i` and `j` (i < j)
fn without_pair(items: &[Item], i: usize, j: usize) -> Vec<Item> {
    items
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != i && k != j)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Every item list one reduction away from `items`, in search order
fn top_level_branches(items: &[Item]) -> Vec<Vec<Item>> {
    let mut branches = Vec::new();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            let rest = without_pair(items, i, j);
            for mv in MOVES {
                if let Some(combined) = items[i].combine(&items[j], mv) {
                    let mut next = rest.clone();
                    next.push(combined);
                    branches.push(next);
                }
            }
        }
    }
    branches
}

fn exists(items: &[Item], target: &Rational) -> bool {
    match items {
        [] => false,
        [only] => only.value == *target,
        [a, b] => MOVES
            .iter()
            .any(|&mv| a.value_with(b, mv).is_some_and(|v| v == *target)),
        _ => {
            for i in 0..items.len() {
                for j in (i + 1)..items.len() {
                    let rest = without_pair(items, i, j);
                    for mv in MOVES {
                        if let Some(combined) = items[i].combine(&items[j], mv) {
                            let mut next = rest.clone();
                            next.push(combined);
                            if exists(&next, target) {
                                return true;
                            }
                        }
                    }
                }
            }
            false
        }
    }
}

fn enumerate(items: &[Item], target: &Rational, found: &mut SolutionSet) {
    match items {
        [] => {}
        [only] => {
            if only.value == *target {
                found.offer(&only.expr);
            }
        }
        // Last reduction: compare values before building any tree
        [a, b] => {
            for mv in MOVES {
                if a.value_with(b, mv).is_some_and(|v| v == *target) {
                    found.offer(&a.expr_with(b, mv));
                }
            }
        }
        _ => {
            for i in 0..items.len() {
                for j in (i + 1)..items.len() {
                    let rest = without_pair(items, i, j);
                    for mv in MOVES {
                        if let Some(combined) = items[i].combine(&items[j], mv) {
                            let mut next = rest.clone();
                            next.push(combined);
                            enumerate(&next, target, found);
                        }
                    }
                }
            }
        }
    }
}
