use cardgoal::{
    GeneratorConfig, PuzzleGenerator, Rational, canonical_key, generate_puzzle, has_solution,
    parse, rational_compare, rational_equals, rational_to_string, solve, validate_final_expr,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::collections::HashSet;

const HANDS: &[(&[u32], i64)] = &[
    (&[1, 2, 3, 4], 24),
    (&[1, 2, 3, 4], 10),
    (&[6, 6, 5, 1], 24),
    (&[1, 5, 5, 5], 24),
    (&[3, 3, 8, 8], 24),
    (&[1, 1, 1, 1], 200),
    (&[13, 12, 11, 10], 1),
    (&[2, 4, 6, 8, 10], 100),
];

#[test]
fn test_existence_matches_enumeration() {
    for &(cards, goal) in HANDS {
        assert_eq!(
            has_solution(cards, goal),
            !solve(cards, goal).is_empty(),
            "{:?} -> {}",
            cards,
            goal
        );
    }
}

#[test]
fn test_every_display_is_a_valid_answer() {
    for &(cards, goal) in HANDS {
        for display in solve(cards, goal) {
            assert!(
                validate_final_expr(&display, cards, goal),
                "{} does not solve {:?} -> {}",
                display,
                cards,
                goal
            );
        }
    }
}

#[test]
fn test_no_two_solutions_share_a_key() {
    let five_card_hands: &[(&[u32], i64)] = &[
        (&[7, 7, 3, 3, 1], 50),
        (&[1, 1, 2, 2, 3], 6),
        (&[2, 3, 3, 5, 5], 30),
    ];
    for &(cards, goal) in HANDS.iter().chain(five_card_hands) {
        let mut keys = HashSet::new();
        for display in solve(cards, goal) {
            let key = parse(&display).ok().and_then(|e| canonical_key(&e).ok());
            assert!(key.is_some(), "no key for {}", display);
            if let Some(key) = key {
                assert!(
                    keys.insert(key.clone()),
                    "{} repeats key {} for {:?} -> {}",
                    display,
                    key,
                    cards,
                    goal
                );
            }
        }
    }
    assert!(!solve(&[7, 7, 3, 3, 1], 50).is_empty());
}

#[test]
fn test_enumeration_is_deterministic() {
    let first = solve(&[2, 4, 6, 8, 10], 100);
    let second = solve(&[2, 4, 6, 8, 10], 100);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_card_order_does_not_change_solvability() {
    assert!(has_solution(&[8, 3, 8, 3], 24));
    assert_eq!(
        solve(&[4, 3, 2, 1], 10).len(),
        solve(&[1, 2, 3, 4], 10).len()
    );
}

#[test]
fn test_equivalent_answers_share_a_key() {
    let keys: Vec<String> = ["(1 + 2) * (3 + 5)", "(5 + 3) * (2 + 1)", "(3 + 5) * (1 + 2)"]
        .iter()
        .filter_map(|s| parse(s).ok())
        .filter_map(|e| canonical_key(&e).ok())
        .collect();
    assert_eq!(keys.len(), 3);
    assert!(keys.iter().all(|k| k == &keys[0]));
}

#[test]
fn test_generated_puzzles_are_solvable() {
    let config = GeneratorConfig {
        max_goal: 60,
        ..GeneratorConfig::default()
    };
    let generator = match PuzzleGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => panic!("valid config rejected: {}", e),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..3 {
        let puzzle = generator.generate_with_rng(&mut rng);
        assert_eq!(puzzle.cards.len(), 4);
        assert!(!solve(&puzzle.cards, i64::from(puzzle.goal)).is_empty());
    }
}

#[test]
#[ignore = "default goals reach six-card hands; slow in debug builds"]
fn test_default_generator() {
    let puzzle = generate_puzzle();
    assert!(has_solution(&puzzle.cards, i64::from(puzzle.goal)));
}

#[test]
fn test_rational_utilities() {
    let half = Rational::new(2, 4).ok();
    let other = Rational::new(-3, -6).ok();
    assert!(half.is_some() && other.is_some());
    if let (Some(half), Some(other)) = (half, other) {
        assert_eq!(rational_to_string(&half), "1/2");
        assert!(rational_equals(&half, &other));
        assert_eq!(
            rational_compare(&half, &Rational::from_integer(1)),
            Ordering::Less
        );
    }
    assert!(Rational::new(1, 0).is_err());
}
