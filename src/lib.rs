//! Cardgoal - exact-arithmetic solver and generator for "combine the cards to reach the goal" puzzles
//!
//! Every card must be used exactly once with `+ − × ÷` to reach the goal. The
//! library finds whether a hand can be solved, enumerates its distinct
//! solutions, generates solvable puzzles and checks a player's final answer.

pub mod canonical;
pub mod expression;
pub mod generator;
pub mod rational;
pub mod solver;
pub mod worker;

// Re-export the main public API
pub use canonical::{CanonicalError, SolutionSet, canonical_key, format_display};
pub use expression::{Expression, ExpressionError, Op, ParseError, parse};
pub use generator::{GeneratorConfig, GeneratorError, Puzzle, PuzzleGenerator};
pub use rational::{Rational, RationalError, rational_compare, rational_equals, rational_to_string};
pub use solver::{PuzzleSolver, SolverError, ValidationError, check_final_expr};
pub use worker::{PreparedPuzzle, PuzzleWorker, solve_in_background};

/// Draw a random puzzle that has at least one solution
///
/// Falls back to `24` from `[1, 2, 3, 4]` when no solvable hand turns up
/// within the draw budget.
///
/// # Examples
///
/// ```no_run
/// use cardgoal::{generate_puzzle, has_solution};
///
/// let puzzle = generate_puzzle();
/// assert_eq!(puzzle.n, puzzle.cards.len());
/// assert!(has_solution(&puzzle.cards, i64::from(puzzle.goal)));
/// ```
pub fn generate_puzzle() -> Puzzle {
    PuzzleGenerator::default().generate()
}

/// Whether the cards can be combined into `goal`, stopping at the first solution
///
/// Empty hands and unsupported cards are reported as unsolvable.
pub fn has_solution(cards: &[u32], goal: i64) -> bool {
    PuzzleSolver::new().has_solution(cards, goal)
}

/// Display strings for every distinct solution, in discovery order
///
/// # Examples
///
/// ```
/// use cardgoal::solve;
///
/// let solutions = solve(&[1, 2, 3, 4], 10);
/// assert!(solutions.contains(&"4 + 3 + 2 + 1".to_string()));
/// assert!(!solutions.contains(&"1 + 2 + 3 + 4".to_string()));
/// ```
pub fn solve(cards: &[u32], goal: i64) -> Vec<String> {
    PuzzleSolver::new().solve(cards, goal)
}

/// Whether a submitted expression uses exactly `cards` and equals `goal`
///
/// # Examples
///
/// ```
/// use cardgoal::validate_final_expr;
///
/// assert!(validate_final_expr("(2 + 3) * 4", &[2, 3, 4], 20));
/// assert!(!validate_final_expr("(2 + 3) * 4", &[2, 3, 5], 20));
/// ```
pub fn validate_final_expr(expr: &str, cards: &[u32], goal: i64) -> bool {
    solver::validate_final_expr(expr, cards, goal)
}
