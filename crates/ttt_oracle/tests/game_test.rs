//! End-to-end sessions as a front end would drive them.

mod common;

use common::reachable_boards;
use ttt_oracle::{
    Board, Game, IllegalMoveKind, Move, Outcome, Player, is_terminal, legal_moves, search,
};

#[test]
fn test_human_opens_engine_replies() {
    let mut game = Game::new();
    assert_eq!(game.play(Move::new(0, 0)), Ok(Outcome::InProgress));

    let (reply, outcome) = game.play_engine().expect("game continues");
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(game.board().marks(), 2);
    assert_eq!(game.history(), &[Move::new(0, 0), reply]);
    assert_eq!(game.to_move(), Some(Player::X));
}

#[test]
fn test_engine_punishes_a_blunder() {
    // X opens in the corner, O answers on the edge and loses by force.
    let mut game = Game::replay(&[Move::new(0, 0), Move::new(0, 1)]).unwrap();

    while let Some((_, outcome)) = game.play_engine() {
        if outcome.is_over() {
            break;
        }
        // The human takes the first open cell.
        let mv = legal_moves(game.board())[0];
        if game.play(mv).unwrap().is_over() {
            break;
        }
    }

    assert_eq!(game.outcome(), Outcome::Win(Player::X));
}

#[test]
fn test_rejected_moves_do_not_advance_the_game() {
    let mut game = Game::new();
    game.play(Move::new(1, 1)).unwrap();

    let err = game.play(Move::new(9, 9)).unwrap_err();
    assert_eq!(err.kind, IllegalMoveKind::OutOfBounds);
    assert_eq!(game.to_move(), Some(Player::O));
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_results_serialize() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let json = serde_json::to_value(search(&board)).unwrap();
    assert_eq!(json["value"], 1);
    assert_eq!(json["best_move"]["row"], 0);
    assert_eq!(json["best_move"]["col"], 2);

    let round_trip: Board = serde_json::from_str(&serde_json::to_string(&board).unwrap()).unwrap();
    assert_eq!(round_trip, board);
}

#[test]
fn test_engine_always_moves_on_a_live_board() {
    for board in reachable_boards() {
        let mut game = Game::from_board(board);
        match game.play_engine() {
            Some((mv, outcome)) => {
                assert!(!is_terminal(&board), "{board}");
                assert!(legal_moves(&board).contains(&mv), "{board}: {mv}");
                assert_eq!(game.history(), &[mv]);
                assert_eq!(game.board().marks(), board.marks() + 1);
                assert_eq!(game.outcome(), outcome);
            }
            None => {
                assert!(is_terminal(&board), "{board}");
                assert_eq!(game.board(), &board);
            }
        }
    }
}
