use crate::solver::{
    PuzzleSolver, SolverError, ValidationError, check_final_expr, validate_final_expr,
};

#[test]
fn test_single_card() {
    let solver = PuzzleSolver::new();
    assert!(solver.has_solution(&[5], 5));
    assert!(!solver.has_solution(&[5], 6));
    assert_eq!(solver.solve(&[5], 5), vec!["5".to_string()]);
}

#[test]
fn test_two_cards_keep_discovery_order() {
    let solver = PuzzleSolver::new();
    assert_eq!(solver.solve(&[6, 4], 2), vec!["6 − 4".to_string()]);
    assert_eq!(
        solver.solve(&[2, 2], 4),
        vec!["2 + 2".to_string(), "2 × 2".to_string()]
    );
}

#[test]
fn test_commuted_sum_reported_once() {
    let solver = PuzzleSolver::new();
    let solutions = solver.solve(&[1, 2, 3, 4], 10);
    assert!(solutions.contains(&"4 + 3 + 2 + 1".to_string()));
    assert!(!solutions.contains(&"1 + 2 + 3 + 4".to_string()));
    for s in &solutions {
        assert!(validate_final_expr(s, &[1, 2, 3, 4], 10), "invalid: {}", s);
    }
}

#[test]
fn test_every_solution_validates() {
    let solver = PuzzleSolver::new();
    let solutions = solver.solve(&[6, 6, 5, 1], 24);
    assert!(!solutions.is_empty());
    for s in &solutions {
        assert!(validate_final_expr(s, &[6, 6, 5, 1], 24), "invalid: {}", s);
    }
}

#[test]
fn test_fractional_intermediates() {
    let solver = PuzzleSolver::new();
    // 5 × (5 − 1 ÷ 5)
    assert!(solver.has_solution(&[1, 5, 5, 5], 24));
    // 8 ÷ (3 − 8 ÷ 3)
    assert!(solver.has_solution(&[3, 3, 8, 8], 24));

    let solutions = solver.solve(&[3, 3, 8, 8], 24);
    assert!(!solutions.is_empty());
    for s in &solutions {
        assert!(validate_final_expr(s, &[3, 3, 8, 8], 24), "invalid: {}", s);
    }
}

#[test]
fn test_unreachable_goal() {
    let solver = PuzzleSolver::new();
    assert!(!solver.has_solution(&[1, 1, 1, 1], 200));
    assert!(solver.solve(&[1, 1, 1, 1], 200).is_empty());
}

#[test]
fn test_existence_agrees_with_enumeration() {
    let solver = PuzzleSolver::new();
    for (cards, goal) in [
        (vec![1, 2, 3, 4], 24),
        (vec![4, 4, 10, 10], 24),
        (vec![1, 1, 2, 2], 17),
        (vec![13, 13, 13, 13], 1),
        (vec![2, 7, 9], 11),
    ] {
        assert_eq!(
            solver.has_solution(&cards, goal),
            !solver.solve(&cards, goal).is_empty(),
            "{:?} -> {}",
            cards,
            goal
        );
    }
}

#[test]
fn test_check_cards() {
    assert_eq!(PuzzleSolver::check_cards(&[]), Err(SolverError::EmptyCards));
    assert_eq!(
        PuzzleSolver::check_cards(&[1, 2, 3, 4, 5, 6, 7]),
        Err(SolverError::TooManyCards { count: 7, max: 6 })
    );
    assert_eq!(
        PuzzleSolver::check_cards(&[0, 1]),
        Err(SolverError::InvalidCard(0))
    );
    assert_eq!(
        PuzzleSolver::check_cards(&[3, 14]),
        Err(SolverError::InvalidCard(14))
    );
    assert_eq!(PuzzleSolver::check_cards(&[1, 13, 7, 7]), Ok(()));
}

#[test]
fn test_unsupported_cards_do_not_panic() {
    let solver = PuzzleSolver::new();
    assert!(!solver.has_solution(&[], 0));
    assert!(solver.solve(&[], 0).is_empty());
    assert!(solver.try_solve(&[1, 2, 3, 4, 5, 6, 7], 28).is_err());
}

#[test]
fn test_validate_final_expr() {
    assert!(validate_final_expr("(2 + 3) * 4", &[2, 3, 4], 20));
    assert!(validate_final_expr("(2 + 3) × 4", &[4, 3, 2], 20));
    assert!(!validate_final_expr("(2 + 3) * 4", &[2, 3, 5], 20));
    assert!(!validate_final_expr("2 + 3 * 4", &[2, 3, 4], 20));
    assert!(!validate_final_expr("", &[2, 3, 4], 20));
}

#[test]
fn test_check_final_expr_reasons() {
    assert!(matches!(
        check_final_expr("(2 + 3) * 4", &[2, 3, 5], 20),
        Err(ValidationError::CardMismatch { .. })
    ));
    assert_eq!(
        check_final_expr("2 + 3 * 4", &[2, 3, 4], 20),
        Err(ValidationError::WrongValue {
            value: "14".to_string(),
            goal: 20
        })
    );
    assert!(matches!(
        check_final_expr("1 / (2 - 2)", &[1, 2, 2], 0),
        Err(ValidationError::Evaluation(_))
    ));
    assert!(matches!(
        check_final_expr("2 +", &[2], 2),
        Err(ValidationError::Parse(_))
    ));
}

#[test]
fn test_fraction_goal_must_be_exact() {
    // 7 / 2 is not 3
    assert!(!validate_final_expr("7 / 2", &[7, 2], 3));
    assert!(validate_final_expr("(7 - 1) / 2", &[7, 1, 2], 3));
}
