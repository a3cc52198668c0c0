//! Tests for the game history log and its scroll window.

use tictactoe_core::{Board, Cell, HistoryEntry, HistoryLog, Mark, Outcome, VISIBLE_SLOTS};

fn entry(turns: u32) -> HistoryEntry {
    let mut board = Board::new();
    board.set(0, Cell::Occupied(Mark::X));
    HistoryEntry::new(board, Outcome::Winner(Mark::X), turns)
}

fn log_with(count: u32) -> HistoryLog {
    let mut log = HistoryLog::new();
    for i in 0..count {
        log.record(entry(i + 1));
    }
    log
}

#[test]
fn window_lists_most_recent_first() {
    let log = log_with(7);
    let window = log.window_at(0);
    let turns: Vec<u32> = window.iter().map(|e| e.turn_count()).collect();
    assert_eq!(turns, vec![7, 6, 5, 4, 3]);
}

#[test]
fn window_is_idempotent_without_new_records() {
    let log = log_with(3);
    assert_eq!(log.window_at(0), log.window_at(0));
    assert_eq!(log.visible_window(), log.visible_window());
}

#[test]
fn short_history_yields_short_window() {
    let log = log_with(2);
    assert_eq!(log.window_at(0).len(), 2);
    assert!(log_with(0).window_at(0).is_empty());
}

#[test]
fn window_walks_back_with_the_offset() {
    let log = log_with(7);
    let turns: Vec<u32> = log.window_at(2).iter().map(|e| e.turn_count()).collect();
    assert_eq!(turns, vec![5, 4, 3, 2, 1]);
    // Past the oldest entry the window runs dry.
    assert_eq!(log.window_at(6).len(), 1);
    assert!(log.window_at(7).is_empty());
}

#[test]
fn scroll_newer_is_floored_at_the_most_recent_page() {
    let mut log = log_with(3);
    assert_eq!(log.cursor(), 0);
    log.scroll_newer();
    assert_eq!(log.cursor(), 0);

    log.scroll_older();
    log.scroll_older();
    assert_eq!(log.cursor(), 2);
    log.scroll_newer();
    assert_eq!(log.cursor(), 1);
}

#[test]
fn scroll_older_has_no_upper_bound() {
    let mut log = log_with(1);
    for _ in 0..10 {
        log.scroll_older();
    }
    assert_eq!(log.cursor(), 10);
    assert!(log.visible_window().is_empty());

    log.reset_cursor();
    assert_eq!(log.visible_window().len(), 1);
}

#[test]
fn slot_index_resolves_visible_slots_to_entries() {
    let mut log = log_with(7);
    // Most recent page: slot 0 is the newest entry (index 6).
    assert_eq!(log.slot_index(0), Some(6));
    assert_eq!(log.slot_index(4), Some(2));
    assert_eq!(log.slot_index(VISIBLE_SLOTS), None);

    log.scroll_older();
    assert_eq!(log.slot_index(0), Some(5));

    // A window shorter than five slots leaves the tail unoccupied.
    let short = log_with(2);
    assert_eq!(short.slot_index(1), Some(0));
    assert_eq!(short.slot_index(2), None);
}

#[test]
fn entries_round_trip_through_serde() {
    let entry = entry(9);
    let json = serde_json::to_string(&entry).expect("serializes");
    let back: HistoryEntry = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(entry, back);
}
