use std::{io, path::Path};

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{error, info};
use ttt_rewind::{
    config::Config,
    view::{BoardView, Frames, HistoryView, Screen, StatusView},
    Command, Session,
};
use tui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};

const DEFAULT_LOG_FILE: &str = "ttt-rewind.log";

fn main() -> io::Result<()> {
    let config = Config::parse();
    // Logging to the terminal would scribble over the UI
    config.init_logging(Some(Path::new(DEFAULT_LOG_FILE)), "info")?;
    info!("starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = Session::new();
    let res = run(&mut terminal, &session);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(%err, "terminal UI failed");
    }
    info!("exiting terminal UI");
    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, session: &Session) -> io::Result<()> {
    let ui = Ui { session };

    loop {
        let screen = Screen::new(terminal.size()?);
        terminal.draw(|f| ui.draw(f, &screen))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let command = Command::from_key(key.code, &session.timeline());
                if let Some(command) = command {
                    if !command.dispatch(session) {
                        return Ok(());
                    }
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => ui.click(&screen, column, row),
            _ => {}
        }
    }
}

struct Ui<'a> {
    session: &'a Session,
}

impl Ui<'_> {
    fn draw<B: Backend>(&self, f: &mut Frame<B>, screen: &Screen) {
        let session = self.session;

        let area = f.size();
        f.render_widget(Frames, area);
        f.render_widget(
            &BoardView::new(session.board(), |_: usize| {}),
            screen.board,
        );
        f.render_widget(StatusView(session.status()), screen.status);
        f.render_widget(
            &HistoryView::new(session.timeline(), |_: usize| {}),
            screen.history,
        );
    }

    fn click(&self, screen: &Screen, column: u16, row: u16) {
        let session = self.session;

        let mut board = BoardView::new(session.board(), |index: usize| {
            session.apply_move(index)
        });
        if board.click(screen.board, column, row) {
            return;
        }
        let mut history = HistoryView::new(session.timeline(), |step: usize| {
            session.jump_to(step)
        });
        history.click(screen.history, column, row);
    }
}
