pub mod constants;
mod core;
mod errors;
mod item;
mod validate;

pub use core::PuzzleSolver;
pub use errors::{SolverError, ValidationError};
pub use item::{Item, MOVES, Move};
pub use validate::{check_final_expr, validate_final_expr};

#[cfg(test)]
mod tests;
