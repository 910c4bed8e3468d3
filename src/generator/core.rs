use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::generator::constants::{
    MAX_GOAL, MAX_GOAL_ATTEMPTS, MAX_SHUFFLE_ATTEMPTS_PER_GOAL, MIN_GOAL,
};
use crate::generator::errors::GeneratorError;
use crate::generator::puzzle::{Puzzle, card_count_for_goal, deck};
use crate::solver::PuzzleSolver;

/// Tuning for the draw loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_goal: u32,
    pub max_goal: u32,
    pub max_goal_attempts: usize,
    pub max_shuffle_attempts_per_goal: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_goal: MIN_GOAL,
            max_goal: MAX_GOAL,
            max_goal_attempts: MAX_GOAL_ATTEMPTS,
            max_shuffle_attempts_per_goal: MAX_SHUFFLE_ATTEMPTS_PER_GOAL,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.min_goal == 0 || self.min_goal > self.max_goal {
            return Err(GeneratorError::InvalidGoalRange {
                min: self.min_goal,
                max: self.max_goal,
            });
        }
        Ok(())
    }
}

/// Draws random puzzles that are known to have at least one solution
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
    solver: PuzzleSolver,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            solver: PuzzleSolver::new(),
        }
    }
}

impl PuzzleGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            config,
            solver: PuzzleSolver::new(),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self) -> Puzzle {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Pick a goal, then shuffle and deal until the hand is solvable. A goal
    /// that exhausts its shuffle budget is replaced by a fresh one; once
    /// every goal attempt is spent the fallback puzzle is returned.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Puzzle {
        let mut cards = deck();

        for goal_attempt in 0..self.config.max_goal_attempts {
            let goal = rng.gen_range(self.config.min_goal..=self.config.max_goal);
            let n = card_count_for_goal(goal);
            debug!(
                "Goal attempt {}: goal {} with {} cards",
                goal_attempt + 1,
                goal,
                n
            );

            for shuffle_attempt in 0..self.config.max_shuffle_attempts_per_goal {
                cards.shuffle(rng);
                let hand = &cards[..n];

                if self.solver.has_solution(hand, i64::from(goal)) {
                    info!(
                        "Generated puzzle {:?} -> {} after {} shuffles",
                        hand,
                        goal,
                        shuffle_attempt + 1
                    );
                    return Puzzle::new(goal, hand.to_vec());
                }
            }
        }

        warn!("No solvable draw found, serving the fallback puzzle");
        Puzzle::fallback()
    }
}
