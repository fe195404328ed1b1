//! Tests for the decision engine against whole games.

use strictly_tictactoe::{
    BoardState, DecisionEngine, NoLegalMove, Outcome, Player, Strategy, play_match,
};

fn board(rows: &str) -> BoardState {
    rows.parse().unwrap()
}

fn perfect(player: Player) -> DecisionEngine {
    DecisionEngine::new(Strategy::ExhaustiveSearch, player)
}

#[test]
fn test_opening_move_is_theoretical_draw() {
    let mut engine = perfect(Player::PlayerA);
    let decision = engine.decide_with_evaluation(&BoardState::new()).unwrap();

    assert_eq!(decision.evaluation, Some(0));
    assert!(decision.row < 3 && decision.col < 3);
}

#[test]
fn test_completes_diagonal() {
    let mut engine = perfect(Player::PlayerA);
    let decision = engine.decide_with_evaluation(&board("XO./.X./...")).unwrap();

    assert_eq!(decision.coord(), (2, 2));
    assert_eq!(decision.evaluation, Some(1));
}

#[test]
fn test_blocks_row_threat() {
    let mut engine = perfect(Player::PlayerA);
    let decision = engine.decide_with_evaluation(&board(".X./.X./OO.")).unwrap();

    assert_eq!(decision.coord(), (2, 2));
    assert_eq!(decision.evaluation, Some(0));
}

#[test]
fn test_circles_take_immediate_win() {
    let mut engine = perfect(Player::PlayerB);
    let decision = engine.decide_with_evaluation(&board("XX./OO./X..")).unwrap();

    assert_eq!(decision.coord(), (1, 2));
    assert_eq!(decision.evaluation, Some(-1));
}

#[test]
fn test_decide_on_won_board_fails() {
    let won = board("XXX/OO./...");
    for strategy in [Strategy::Random, Strategy::ExhaustiveSearch] {
        let mut engine = DecisionEngine::new(strategy, Player::PlayerB);
        assert_eq!(
            engine.decide(&won),
            Err(NoLegalMove::Terminal(Outcome::Win(Player::PlayerA)))
        );
    }
}

#[test]
fn test_search_is_deterministic() {
    let position = board("X../.O./...");
    let first = perfect(Player::PlayerA).decide(&position).unwrap();
    for _ in 0..3 {
        assert_eq!(perfect(Player::PlayerA).decide(&position).unwrap(), first);
    }
}

#[test]
fn test_decide_does_not_mutate_board() {
    let position = board("X../.O./...");
    let before = position.clone();
    perfect(Player::PlayerA).decide(&position).unwrap();
    assert_eq!(position, before);
}

#[test]
fn test_random_picks_only_empty_cells() {
    let position = board("XOX/.O./X..");
    for seed in 0..50 {
        let mut engine = DecisionEngine::with_seed(Strategy::Random, Player::PlayerB, seed);
        let (row, col) = engine.decide(&position).unwrap();
        assert!(position.is_empty_cell(row, col), "seed {} picked ({}, {})", seed, row, col);
    }
}

#[test]
fn test_seeded_random_repeats() {
    let position = BoardState::new();
    let picks = |seed| {
        let mut engine = DecisionEngine::with_seed(Strategy::Random, Player::PlayerA, seed);
        (0..5)
            .map(|_| engine.decide(&position).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(99), picks(99));
}

#[test]
fn test_perfect_self_play_draws() {
    let mut crosses = perfect(Player::PlayerA);
    let mut circles = perfect(Player::PlayerB);
    let record = play_match(&mut crosses, &mut circles).unwrap();

    assert_eq!(record.outcome, Outcome::Draw);
    assert_eq!(record.moves.len(), 9);
}

#[test]
fn test_perfect_beats_or_draws_random() {
    for seed in 0..10 {
        let mut crosses = perfect(Player::PlayerA);
        let mut circles = DecisionEngine::with_seed(Strategy::Random, Player::PlayerB, seed);
        let record = play_match(&mut crosses, &mut circles).unwrap();
        assert_ne!(record.outcome, Outcome::Win(Player::PlayerB), "seed {}", seed);
    }
}

/// Plays every possible reply against the engine and returns the worst
/// result seen from the engine's side.
fn worst_result(board: &BoardState, to_move: Player, engine: &mut DecisionEngine) -> Outcome {
    let outcome = board.evaluate();
    if outcome.is_terminal() {
        return outcome;
    }

    if to_move == engine.acting_player() {
        let (row, col) = engine.decide(board).unwrap();
        let mut next = board.clone();
        next.mark(row, col, to_move).unwrap();
        return worst_result(&next, to_move.opponent(), engine);
    }

    let mut worst = Outcome::Win(engine.acting_player());
    for (row, col) in board.empty_cells() {
        let mut next = board.clone();
        next.mark(row, col, to_move).unwrap();
        match worst_result(&next, to_move.opponent(), engine) {
            loss @ Outcome::Win(winner) if winner == to_move => return loss,
            Outcome::Draw => worst = Outcome::Draw,
            _ => {}
        }
    }
    worst
}

#[test]
fn test_crosses_never_lose() {
    let mut engine = perfect(Player::PlayerA);
    let worst = worst_result(&BoardState::new(), Player::PlayerA, &mut engine);
    assert_ne!(worst, Outcome::Win(Player::PlayerB));
}

#[test]
fn test_circles_never_lose() {
    let mut engine = perfect(Player::PlayerB);
    let worst = worst_result(&BoardState::new(), Player::PlayerA, &mut engine);
    assert_ne!(worst, Outcome::Win(Player::PlayerA));
}
