use super::*;
use engine_core::{LOSS_POINTS, WIN_POINTS};

#[test]
fn test_initial_state() {
    let state = State::new();
    assert_eq!(state.board, [None; NUM_CELLS]);
    assert_eq!(state.to_move(), Mark::X);
    assert_eq!(state.status(), Status::InProgress);
    assert!(!state.is_done());
}

#[test]
fn test_legal_moves() {
    let state = State::new();
    let legal = state.legal_moves();
    assert_eq!(legal, (0..9).collect::<Vec<_>>());

    // After one move
    let state = state.make_move(4); // Center
    let legal = state.legal_moves();
    assert_eq!(legal.len(), 8);
    assert!(!legal.contains(&4));
}

#[test]
fn test_make_move() {
    let state = State::new();
    let new_state = state.make_move(4); // X places in center

    assert_eq!(new_state.cell(4), Some(Mark::X));
    assert_eq!(new_state.to_move(), Mark::O); // Now O's turn
    assert!(!new_state.is_done());
}

#[test]
fn test_invalid_move() {
    let state = State::new();
    let state_with_move = state.make_move(4);

    // Try to place in same position
    let invalid_state = state_with_move.make_move(4);
    assert_eq!(invalid_state, state_with_move); // Should be unchanged

    // Off the board
    assert_eq!(state.make_move(9), state);
}

#[test]
fn test_winning_game() {
    // X wins with top row
    let state = State::from_moves(&[0, 3, 1, 4, 2]);

    assert_eq!(state.status(), Status::Won(Mark::X));
    assert!(state.is_done());
    assert!(state.legal_moves().is_empty());
    // Winner stays on move once the game is over
    assert_eq!(state.to_move(), Mark::X);
}

#[test]
fn test_draw_game() {
    // X O X / X O O / O X X
    let state = State::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(state.status(), Status::Draw);
    assert!(state.is_done());
    assert_eq!(state.moves_played(), 9);
}

#[test]
fn test_rules_transitions() {
    let rules = TicTacToe::new();
    let state = rules.starting_state();

    assert_eq!(rules.legal_actions(&state).len(), 9);
    assert_eq!(rules.current_player(&state), Mark::X);

    let next = rules.next_state(&state, &Action::Place(0));
    assert_eq!(rules.current_player(&next), Mark::O);
    assert!(!rules.is_legal(&next, &Action::Place(0)));
    assert!(rules.is_legal(&next, &Action::Place(1)));
    assert!(!rules.is_legal(&next, &Action::Place(12)));
}

#[test]
fn test_next_state_does_not_mutate_input() {
    let rules = TicTacToe::new();
    let state = rules.starting_state();
    let _ = rules.next_state(&state, &Action::Place(4));

    assert_eq!(state, State::new());
}

#[test]
fn test_points_values_for_win() {
    let rules = TicTacToe::new();
    // O wins the middle column
    let state = State::from_moves(&[0, 1, 2, 4, 3, 7]);

    let payoffs = rules.points_values(&state).unwrap();
    assert_eq!(payoffs.points(Mark::O), Some(WIN_POINTS));
    assert_eq!(payoffs.points(Mark::X), Some(LOSS_POINTS));
    assert_eq!(payoffs.winner(), Some(Mark::O));
}

#[test]
fn test_points_values_for_draw() {
    let rules = TicTacToe::new();
    let state = State::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let payoffs = rules.points_values(&state).unwrap();
    assert_eq!(payoffs.winner(), None);
    assert!(!payoffs.is_win_for(Mark::X));
    assert!(!payoffs.is_win_for(Mark::O));
}

#[test]
fn test_points_values_on_unfinished_game() {
    let rules = TicTacToe::new();
    let state = State::from_moves(&[4]);

    assert!(matches!(
        rules.points_values(&state),
        Err(RulesError::NotTerminal(_))
    ));
}

#[test]
fn test_display() {
    let state = State::from_moves(&[0, 4, 8]);
    assert_eq!(state.to_string(), "X..\n.O.\n..X");
    assert_eq!(Action::Place(3).to_string(), "place@3");
}
