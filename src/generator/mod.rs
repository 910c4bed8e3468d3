pub mod constants;
mod core;
mod errors;
mod puzzle;

pub use core::{GeneratorConfig, PuzzleGenerator};
pub use errors::GeneratorError;
pub use puzzle::{Puzzle, card_count_for_goal, deck};

#[cfg(test)]
mod tests;
