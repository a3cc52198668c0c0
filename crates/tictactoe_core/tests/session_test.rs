//! Tests for the play session and its game-over flow.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::{Cell, LineDirection, Mark, Outcome, Placement, Session};

#[test]
fn seeded_rng_fixes_the_first_turn() {
    let mut a = Session::new();
    let mut b = Session::new();
    a.start_game(&mut StdRng::seed_from_u64(42));
    b.start_game(&mut StdRng::seed_from_u64(42));

    assert!(a.game().ongoing());
    assert_eq!(a.game().turn(), b.game().turn());
    assert_eq!(a.game().turn_count(), 1);
}

#[test]
fn placement_refused_before_a_game_starts() {
    let mut session = Session::new();
    assert_eq!(session.place_mark(4), Placement::Refused);
    assert!(!session.game().ongoing());
}

#[test]
fn placement_refused_out_of_bounds() {
    let mut session = Session::new();
    session.start_game_as(Mark::X);
    assert_eq!(session.place_mark(9), Placement::Refused);
    assert_eq!(session.game().turn_count(), 1);
}

#[test]
fn occupied_cell_is_a_quiet_no_op() {
    let mut session = Session::new();
    session.start_game_as(Mark::X);

    assert_eq!(session.place_mark(4), Placement::Marked { mark: Mark::X });
    let board_before = session.game().board().clone();

    // Same cell again: nothing moves.
    assert_eq!(session.place_mark(4), Placement::Refused);
    assert_eq!(session.game().board(), &board_before);
    assert_eq!(session.game().turn(), Some(Mark::O));
    assert_eq!(session.game().turn_count(), 2);
}

#[test]
fn turn_count_tracks_occupied_cells_plus_one() {
    let mut session = Session::new();
    session.start_game_as(Mark::O);

    for (i, pos) in [4, 0, 5, 1].into_iter().enumerate() {
        assert!(matches!(session.place_mark(pos), Placement::Marked { .. }));
        let occupied = session
            .game()
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();
        assert_eq!(occupied, i + 1);
        assert_eq!(session.game().turn_count() as usize, occupied + 1);
    }
}

#[test]
fn winning_records_an_entry_and_resets_the_board() {
    let mut session = Session::new();
    session.start_game_as(Mark::X);

    session.place_mark(0);
    session.place_mark(3);
    session.place_mark(1);
    session.place_mark(4);
    let placement = session.place_mark(2);

    let Placement::Finished { entry, win } = placement else {
        panic!("Expected the game to finish, got {placement:?}");
    };
    assert_eq!(entry.outcome(), Outcome::Winner(Mark::X));
    assert_eq!(entry.turn_count(), 5);
    let line = win.expect("a win carries its line");
    assert_eq!(line.center(), 1);
    assert_eq!(line.direction(), LineDirection::Horizontal);

    // The entry snapshots the final position.
    assert_eq!(entry.final_board().get(0), Some(Cell::Occupied(Mark::X)));
    assert_eq!(entry.final_board().get(3), Some(Cell::Occupied(Mark::O)));

    // The live game is reset and idle.
    assert!(!session.game().ongoing());
    assert_eq!(session.game().turn(), None);
    assert_eq!(session.game().turn_count(), 1);
    assert!(session.game().board().cells().iter().all(|c| *c == Cell::Empty));

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().get(0), Some(&entry));
}

#[test]
fn tie_records_an_entry_with_nine_turns() {
    let mut session = Session::new();
    session.start_game_as(Mark::X);

    // X: 0,1,5,6,7  O: 2,3,4,8 — board fills with no line.
    for pos in [0, 2, 1, 3, 5, 4, 6, 8] {
        assert!(matches!(session.place_mark(pos), Placement::Marked { .. }));
    }
    let placement = session.place_mark(7);

    let Placement::Finished { entry, win } = placement else {
        panic!("Expected a tie, got {placement:?}");
    };
    assert_eq!(entry.outcome(), Outcome::Tie);
    assert_eq!(entry.turn_count(), 9);
    assert!(win.is_none());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn restart_discards_a_game_in_play() {
    let mut session = Session::new();
    session.start_game_as(Mark::X);
    session.place_mark(4);
    session.place_mark(0);

    session.start_game_as(Mark::O);
    assert!(session.game().ongoing());
    assert_eq!(session.game().turn(), Some(Mark::O));
    assert_eq!(session.game().turn_count(), 1);
    assert!(session.game().board().is_empty(4));
    // Abandoned games are not recorded.
    assert!(session.history().is_empty());
}

#[test]
fn games_accumulate_in_order() {
    let mut session = Session::new();

    // First game: X wins the top row.
    session.start_game_as(Mark::X);
    for pos in [0, 3, 1, 4, 2] {
        session.place_mark(pos);
    }
    // Second game: O wins the left column.
    session.start_game_as(Mark::O);
    for pos in [0, 1, 3, 2, 6] {
        session.place_mark(pos);
    }

    assert_eq!(session.history().len(), 2);
    let window = session.history().visible_window();
    assert_eq!(window[0].outcome(), Outcome::Winner(Mark::O));
    assert_eq!(window[1].outcome(), Outcome::Winner(Mark::X));
}
