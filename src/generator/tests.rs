use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generator::{
    GeneratorConfig, GeneratorError, Puzzle, PuzzleGenerator, card_count_for_goal, deck,
};
use crate::solver::PuzzleSolver;

fn small_goal_generator() -> PuzzleGenerator {
    let config = GeneratorConfig {
        min_goal: 1,
        max_goal: 40,
        ..GeneratorConfig::default()
    };
    match PuzzleGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => panic!("valid config rejected: {}", e),
    }
}

#[test]
fn test_card_count_thresholds() {
    assert_eq!(card_count_for_goal(1), 4);
    assert_eq!(card_count_for_goal(66), 4);
    assert_eq!(card_count_for_goal(67), 5);
    assert_eq!(card_count_for_goal(133), 5);
    assert_eq!(card_count_for_goal(134), 6);
    assert_eq!(card_count_for_goal(200), 6);
}

#[test]
fn test_deck_composition() {
    let deck = deck();
    assert_eq!(deck.len(), 52);
    for rank in 1..=13 {
        assert_eq!(deck.iter().filter(|&&c| c == rank).count(), 4);
    }
}

#[test]
fn test_generated_puzzle_is_solvable() {
    let generator = small_goal_generator();
    let solver = PuzzleSolver::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..3 {
        let puzzle = generator.generate_with_rng(&mut rng);
        assert!((1..=40).contains(&puzzle.goal));
        assert_eq!(puzzle.n, puzzle.cards.len());
        assert_eq!(puzzle.n, card_count_for_goal(puzzle.goal));
        assert!(puzzle.cards.iter().all(|c| (1..=13).contains(c)));
        assert!(solver.has_solution(&puzzle.cards, i64::from(puzzle.goal)));
    }
}

#[test]
fn test_same_seed_same_puzzle() {
    let generator = small_goal_generator();
    let a = generator.generate_with_rng(&mut ChaCha8Rng::seed_from_u64(42));
    let b = generator.generate_with_rng(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_exhausted_budget_serves_fallback() {
    let config = GeneratorConfig {
        max_goal_attempts: 0,
        ..GeneratorConfig::default()
    };
    let generator = match PuzzleGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => panic!("valid config rejected: {}", e),
    };
    let puzzle = generator.generate_with_rng(&mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(puzzle, Puzzle::fallback());
    assert_eq!(puzzle.goal, 24);
    assert_eq!(puzzle.cards, vec![1, 2, 3, 4]);
    assert_eq!(puzzle.n, 4);
}

#[test]
fn test_invalid_goal_range() {
    let config = GeneratorConfig {
        min_goal: 50,
        max_goal: 10,
        ..GeneratorConfig::default()
    };
    assert_eq!(
        PuzzleGenerator::new(config).err(),
        Some(GeneratorError::InvalidGoalRange { min: 50, max: 10 })
    );

    let zero = GeneratorConfig {
        min_goal: 0,
        ..GeneratorConfig::default()
    };
    assert!(zero.validate().is_err());
}

#[test]
fn test_puzzle_json_shape() {
    let puzzle = Puzzle::new(24, vec![1, 2, 3, 4]);
    let json = serde_json::to_string(&puzzle).unwrap_or_default();
    assert_eq!(json, r#"{"goal":24,"cards":[1,2,3,4],"n":4}"#);

    let parsed: Result<Puzzle, _> = serde_json::from_str(&json);
    assert!(matches!(parsed, Ok(p) if p == puzzle));
}
