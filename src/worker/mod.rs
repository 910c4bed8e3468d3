//! Background preparation: puzzles are generated and enumerated off the
//! caller's thread and handed over through channels.

mod core;

pub use core::{PreparedPuzzle, PuzzleWorker, solve_in_background};

#[cfg(test)]
mod tests;
