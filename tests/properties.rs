//! Property-based tests for the win evaluator and the history invariants.

use proptest::prelude::*;
use ttt_rewind::{Board, Mark, Session, Timeline, CELLS};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug)]
enum Input {
    Move(usize),
    Jump(usize),
}

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop::option::of(arb_mark())).prop_map(Board::from_squares)
}

/// Clicks on cells (including a few off-board indices) and history entries
/// (including steps that don't exist yet).
fn arb_inputs() -> impl Strategy<Value = Vec<Input>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0usize..CELLS + 2).prop_map(Input::Move),
            1 => (0usize..12).prop_map(Input::Jump),
        ],
        0..40,
    )
}

fn reference_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(mark)
    })
}

fn check_history(timeline: &Timeline) -> Result<(), TestCaseError> {
    let boards = timeline.boards();
    prop_assert_eq!(boards[0], Board::new());
    prop_assert!(timeline.step() < boards.len());

    for (k, pair) in boards.windows(2).enumerate() {
        let k = k + 1;
        let changed: Vec<usize> = (0..CELLS)
            .filter(|&i| pair[0].get(i) != pair[1].get(i))
            .collect();
        prop_assert_eq!(changed.len(), 1, "entry {} changes one cell", k);
        let cell = changed[0];
        prop_assert!(pair[0].is_empty_at(cell));
        let expected = if k % 2 == 1 { Mark::X } else { Mark::O };
        prop_assert_eq!(pair[1].get(cell), Some(expected));
        prop_assert_eq!(pair[0].winner(), None, "no move after a win");
    }
    Ok(())
}

proptest! {
    #[test]
    fn winner_matches_first_complete_line(board in arb_board()) {
        prop_assert_eq!(board.winner(), reference_winner(&board));
    }

    #[test]
    fn completed_line_is_reported(line in 0usize..8, mark in arb_mark(), board in arb_board()) {
        let board = LINES[line].iter().fold(board, |board, &i| board.mark(i, mark));
        // An earlier line may win first, otherwise this line must
        let earlier = LINES[..line].iter().find_map(|&[a, b, c]| {
            let first = board.get(a)?;
            (board.get(b) == Some(first) && board.get(c) == Some(first)).then_some(first)
        });
        prop_assert_eq!(board.winner(), Some(earlier.unwrap_or(mark)));
    }

    #[test]
    fn history_invariants_hold(inputs in arb_inputs()) {
        let session = Session::new();
        for input in inputs {
            match input {
                Input::Move(index) => session.apply_move(index),
                Input::Jump(step) => session.jump_to(step),
            }
            let timeline = session.timeline();
            check_history(&timeline)?;
            prop_assert_eq!(session.game().turn.sample(), Mark::for_step(timeline.step()));
            prop_assert_eq!(session.board(), timeline.current());
        }
    }

    #[test]
    fn rejected_moves_leave_state_unchanged(inputs in arb_inputs(), cell in 0usize..CELLS) {
        let session = Session::new();
        for input in inputs {
            match input {
                Input::Move(index) => session.apply_move(index),
                Input::Jump(step) => session.jump_to(step),
            }
        }

        let before = session.timeline();
        let board = before.current();
        if board.winner().is_some() || !board.is_empty_at(cell) {
            session.apply_move(cell);
            prop_assert_eq!(session.timeline(), before);
        } else {
            session.apply_move(cell);
            let after = session.timeline();
            prop_assert_eq!(after.len(), before.step() + 2);
            prop_assert_eq!(after.step(), before.step() + 1);
            prop_assert_eq!(&after.boards()[..=before.step()], &before.boards()[..=before.step()]);
        }
    }

    #[test]
    fn jump_is_idempotent(moves in prop::collection::vec(0usize..CELLS, 0..9), step in 0usize..10) {
        let once = Session::new();
        let twice = Session::new();
        for &index in &moves {
            once.apply_move(index);
            twice.apply_move(index);
        }

        once.jump_to(step);
        twice.jump_to(step);
        twice.jump_to(step);

        prop_assert_eq!(once.timeline(), twice.timeline());
    }
}
