use serde::{Deserialize, Serialize};

use crate::generator::constants::{
    DECK_RANKS, DECK_SUITS, FALLBACK_CARDS, FALLBACK_GOAL, FIVE_CARD_GOAL_LIMIT,
    FOUR_CARD_GOAL_LIMIT,
};

/// A goal and the cards that must all be combined to reach it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Puzzle {
    pub goal: u32,
    pub cards: Vec<u32>,
    pub n: usize,
}

impl Puzzle {
    pub fn new(goal: u32, cards: Vec<u32>) -> Self {
        let n = cards.len();
        Self { goal, cards, n }
    }

    /// Served when no solvable draw turns up within the attempt budget.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_GOAL, FALLBACK_CARDS.to_vec())
    }
}

/// Larger goals are dealt more cards.
pub fn card_count_for_goal(goal: u32) -> usize {
    if goal < FOUR_CARD_GOAL_LIMIT {
        4
    } else if goal < FIVE_CARD_GOAL_LIMIT {
        5
    } else {
        6
    }
}

/// The 52-card deck as rank values, four of each rank in rank order.
pub fn deck() -> Vec<u32> {
    (1..=DECK_RANKS)
        .flat_map(|rank| std::iter::repeat_n(rank, DECK_SUITS))
        .collect()
}
