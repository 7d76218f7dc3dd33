//! End-to-end play through the public `Session` API.

use ttt_rewind::{Board, Mark, Session, Status};

fn session_after(moves: &[usize]) -> Session {
    let session = Session::new();
    for &index in moves {
        session.apply_move(index);
    }
    session
}

#[test]
fn top_row_wins_for_x() {
    let session = session_after(&[0, 4, 1, 5, 2]);

    assert_eq!(session.board().winner(), Some(Mark::X));
    assert_eq!(session.status(), Status::Winner(Mark::X));
    assert_eq!(session.status().to_string(), "Winner: X");
    assert_eq!(session.timeline().len(), 6);
}

#[test]
fn jump_to_start_on_a_fresh_game() {
    let session = Session::new();
    session.jump_to(0);

    assert_eq!(session.board(), Board::new());
    assert_eq!(session.status().to_string(), "Next player: X");
    assert_eq!(session.timeline().len(), 1);
}

#[test]
fn jump_out_of_range_is_ignored() {
    let session = Session::new();
    let before = session.timeline();

    session.jump_to(99);

    assert_eq!(session.timeline(), before);
}

#[test]
fn jumping_twice_equals_jumping_once() {
    let once = session_after(&[0, 4, 1]);
    once.jump_to(1);

    let twice = session_after(&[0, 4, 1]);
    twice.jump_to(1);
    twice.jump_to(1);

    assert_eq!(once.timeline(), twice.timeline());
    assert_eq!(once.status(), twice.status());
}

#[test]
fn moving_after_a_jump_discards_the_future() {
    let session = session_after(&[0, 4, 1, 5]);
    let history = session.timeline().boards().to_vec();
    assert_eq!(history.len(), 5);

    session.jump_to(1);
    session.apply_move(8);

    let timeline = session.timeline();
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline.step(), 2);
    assert_eq!(timeline.boards()[..2], history[..2]);
    assert_eq!(timeline.boards()[2], history[1].mark(8, Mark::O));
}

#[test]
fn occupied_cell_is_a_no_op() {
    let session = session_after(&[4]);
    let before = session.timeline();

    session.apply_move(4);

    assert_eq!(session.timeline(), before);
    assert_eq!(session.game().turn.sample(), Mark::O);
}

#[test]
fn nothing_moves_once_someone_has_won() {
    let session = session_after(&[0, 4, 1, 5, 2]);
    let before = session.timeline();

    for index in [3, 6, 7, 8] {
        session.apply_move(index);
    }

    assert_eq!(session.timeline(), before);
}

#[test]
fn jumping_back_before_a_win_reopens_play() {
    let session = session_after(&[0, 4, 1, 5, 2]);
    session.jump_to(4);
    assert_eq!(session.status(), Status::NextPlayer(Mark::X));

    session.apply_move(3);

    assert_eq!(session.status(), Status::NextPlayer(Mark::O));
    assert_eq!(session.timeline().len(), 6);
    assert_eq!(session.board().get(3), Some(Mark::X));
    assert_eq!(session.board().get(2), None);
}

#[test]
fn move_list_labels_follow_history() {
    let session = session_after(&[0, 4]);
    let labels: Vec<String> = session.moves().iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        ["Go to game start", "Go to move #1", "Go to move #2"]
    );

    // Jumping keeps every entry in the list
    session.jump_to(0);
    assert_eq!(session.moves().len(), 3);
}
