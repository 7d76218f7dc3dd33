use sodium::{Cell, CellLoop, Listener, SodiumCtx, Stream, StreamSink};
use tracing::{debug, instrument};

use crate::board::{Board, Mark};
use crate::timeline::{MoveEntry, Status, Timeline};
use crate::Error;

/// The reactive game network.
///
/// `timeline` is the only state; everything else is derived from it and
/// recomputed whenever it changes.
pub struct Game {
    pub timeline: Cell<Timeline>,
    pub board: Cell<Board>,
    pub turn: Cell<Mark>,
    pub winner: Cell<Option<Mark>>,
    pub status: Cell<Status>,
    pub moves: Cell<Vec<MoveEntry>>,
    pub placed: Stream<(usize, Mark)>,
    pub rejected: Stream<Error>,
}

struct Outcomes {
    accepted: Stream<Timeline>,
    rejected: Stream<Error>,
}

impl Game {
    pub fn new(
        ctx: &SodiumCtx,
        cell_clicks: &Stream<usize>,
        history_clicks: &Stream<usize>,
    ) -> Game {
        ctx.transaction(|| {
            let timeline_loop: CellLoop<Timeline> = ctx.new_cell_loop();
            let timeline_fwd = timeline_loop.cell();

            let Outcomes {
                accepted: moved,
                rejected: bad_moves,
            } = Outcomes::new(
                &cell_clicks.snapshot(&timeline_fwd, |index: &usize, timeline: &Timeline| {
                    timeline.play(*index)
                }),
            );

            // Selecting the step that is already displayed is not an event at all
            let Outcomes {
                accepted: jumped,
                rejected: bad_jumps,
            } = Outcomes::new(
                &history_clicks
                    .snapshot(&timeline_fwd, |step: &usize, timeline: &Timeline| {
                        (*step != timeline.step()).then(|| timeline.jump(*step))
                    })
                    .filter_option(),
            );

            let placed = moved
                .map(|timeline: &Timeline| timeline.last_move())
                .filter_option();

            let timeline = moved.or_else(&jumped).hold(Timeline::new());
            timeline_loop.loop_(&timeline);

            Game {
                board: timeline.map(|timeline: &Timeline| timeline.current()),
                turn: timeline.map(|timeline: &Timeline| timeline.turn()),
                winner: timeline.map(|timeline: &Timeline| timeline.winner()),
                status: timeline.map(|timeline: &Timeline| timeline.status()),
                moves: timeline.map(|timeline: &Timeline| timeline.entries()),
                timeline,
                placed,
                rejected: bad_moves.or_else(&bad_jumps),
            }
        })
    }
}

impl Outcomes {
    fn new(results: &Stream<Result<Timeline, Error>>) -> Outcomes {
        let accepted = results
            .map(|result: &Result<Timeline, Error>| result.as_ref().ok().cloned())
            .filter_option();
        let rejected = results
            .map(|result: &Result<Timeline, Error>| result.as_ref().err().cloned())
            .filter_option();
        Outcomes { accepted, rejected }
    }
}

/// Owns a [`Game`] together with the sinks that feed it.
///
/// Front-ends call [`Session::apply_move`] and [`Session::jump_to`] and read
/// the derived cells through [`Session::game`].
pub struct Session {
    cell_clicks: StreamSink<usize>,
    history_clicks: StreamSink<usize>,
    game: Game,
    _listeners: Vec<Listener>,
}

impl Session {
    pub fn new() -> Session {
        let ctx = SodiumCtx::new();

        ctx.transaction(|| {
            let cell_clicks: StreamSink<usize> = ctx.new_stream_sink();
            let history_clicks: StreamSink<usize> = ctx.new_stream_sink();

            let game = Game::new(&ctx, &cell_clicks.stream(), &history_clicks.stream());

            let listeners = vec![
                game.placed.listen(|(index, mark): &(usize, Mark)| {
                    debug!(index, %mark, "move placed")
                }),
                game.timeline.updates().listen(|timeline: &Timeline| {
                    debug!(
                        step = timeline.step(),
                        len = timeline.len(),
                        "timeline updated"
                    )
                }),
                game.rejected.listen(|err: &Error| debug!(%err, "input ignored")),
            ];

            Session {
                cell_clicks,
                history_clicks,
                game,
                _listeners: listeners,
            }
        })
    }

    /// Request a mark at `index`. Illegal requests are ignored.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) {
        self.cell_clicks.send(index);
    }

    /// Display the board as it was after `step` moves. Unknown steps are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) {
        self.history_clicks.send(step);
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn timeline(&self) -> Timeline {
        self.game.timeline.sample()
    }

    pub fn board(&self) -> Board {
        self.game.board.sample()
    }

    pub fn status(&self) -> Status {
        self.game.status.sample()
    }

    pub fn moves(&self) -> Vec<MoveEntry> {
        self.game.moves.sample()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
