use crate::generator::{GeneratorConfig, Puzzle, PuzzleGenerator};
use crate::solver::{PuzzleSolver, validate_final_expr};
use crate::worker::{PreparedPuzzle, PuzzleWorker, solve_in_background};

fn small_worker() -> PuzzleWorker {
    let config = GeneratorConfig {
        min_goal: 1,
        max_goal: 20,
        ..GeneratorConfig::default()
    };
    match PuzzleGenerator::new(config) {
        Ok(generator) => PuzzleWorker::spawn_with(generator, 1),
        Err(e) => panic!("valid config rejected: {}", e),
    }
}

#[test]
fn test_prepare_keeps_solvable_puzzle() {
    let solver = PuzzleSolver::new();
    let prepared = PreparedPuzzle::prepare(Puzzle::new(10, vec![1, 2, 3, 4]), &solver);
    assert!(prepared.is_some());
    if let Some(prepared) = prepared {
        assert!(prepared.solutions.contains(&"4 + 3 + 2 + 1".to_string()));
    }
}

#[test]
fn test_prepare_drops_unsolvable_puzzle() {
    let solver = PuzzleSolver::new();
    let prepared = PreparedPuzzle::prepare(Puzzle::new(200, vec![1, 1, 1, 1]), &solver);
    assert!(prepared.is_none());
}

#[test]
fn test_worker_delivers_solved_puzzles() {
    let worker = small_worker();
    for _ in 0..2 {
        let prepared = worker.next();
        assert!(prepared.is_ok());
        if let Ok(prepared) = prepared {
            let goal = i64::from(prepared.puzzle.goal);
            assert!(!prepared.solutions.is_empty());
            for s in &prepared.solutions {
                assert!(validate_final_expr(s, &prepared.puzzle.cards, goal));
            }
        }
    }
}

#[test]
fn test_dropping_worker_does_not_block() {
    let worker = small_worker();
    let _ = worker.try_next();
    drop(worker);
}

#[test]
fn test_solve_in_background() {
    let receiver = solve_in_background(vec![6, 4], 2);
    assert_eq!(receiver.recv().ok(), Some(vec!["6 − 4".to_string()]));
}

#[test]
fn test_superseded_result_is_discarded() {
    let stale = solve_in_background(vec![1, 2, 3, 4], 24);
    drop(stale);
    let fresh = solve_in_background(vec![2, 2], 4);
    assert_eq!(
        fresh.recv().ok(),
        Some(vec!["2 + 2".to_string(), "2 × 2".to_string()])
    );
}
