//! Terminal views. Views own no game state: each one is built from a snapshot
//! plus a callback, drawn, and thrown away.

use crossterm::event::KeyCode;
use tui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{Board, Command, Mark, Status, Timeline, CELLS};

impl Command {
    /// Keyboard bindings: `1`-`9` play, `[` and `]` step through history,
    /// `q` or `Esc` quit.
    pub fn from_key(code: KeyCode, timeline: &Timeline) -> Option<Command> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char(c @ '1'..='9') => Some(Command::Place(c as usize - '1' as usize)),
            KeyCode::Char('[') => timeline.step().checked_sub(1).map(Command::Jump),
            // Past the newest entry the controller ignores the jump
            KeyCode::Char(']') => Some(Command::Jump(timeline.step() + 1)),
            _ => None,
        }
    }
}

/// Where each part of the screen goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub board_frame: Rect,
    pub board: Rect,
    pub status: Rect,
    pub history: Rect,
}

impl Screen {
    pub fn new(area: Rect) -> Screen {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
            .split(area);
        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)].as_ref())
            .split(chunks[1]);

        Screen {
            board_frame: chunks[0],
            board: board_block().inner(chunks[0]),
            status: info[0],
            history: info[1],
        }
    }
}

fn board_block() -> Block<'static> {
    Block::default().title("Board").borders(Borders::ALL)
}

/// Draws the frame around the board panel.
pub struct Frames;

impl Widget for Frames {
    fn render(self, area: Rect, buf: &mut Buffer) {
        board_block().render(Screen::new(area).board_frame, buf);
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.left() && column < area.right() && row >= area.top() && row < area.bottom()
}

/// The 3x3 grid. Clicking a cell asks `on_click` to play there; the view does
/// not decide whether the move is legal.
pub struct BoardView<F> {
    board: Board,
    on_click: F,
}

impl<F> BoardView<F> {
    pub fn new(board: Board, on_click: F) -> Self {
        BoardView { board, on_click }
    }

    pub fn cell_areas(area: Rect) -> [Rect; CELLS] {
        let thirds = [
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(thirds.as_ref())
            .split(area);

        let mut cells = [Rect::default(); CELLS];
        for (r, row) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(thirds.as_ref())
                .split(*row);
            for (c, column) in columns.iter().enumerate() {
                cells[r * 3 + c] = *column;
            }
        }
        cells
    }

    pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
        Self::cell_areas(area)
            .iter()
            .position(|cell| contains(*cell, column, row))
    }

    // Only the inner grid lines are drawn
    fn cell_borders(index: usize) -> Borders {
        match index {
            0 => Borders::RIGHT | Borders::BOTTOM,
            1 => Borders::ALL ^ Borders::TOP,
            2 => Borders::LEFT | Borders::BOTTOM,
            3 => Borders::ALL ^ Borders::LEFT,
            4 => Borders::ALL,
            5 => Borders::ALL ^ Borders::RIGHT,
            6 => Borders::RIGHT | Borders::TOP,
            7 => Borders::ALL ^ Borders::BOTTOM,
            _ => Borders::LEFT | Borders::TOP,
        }
    }
}

impl<F: FnMut(usize)> BoardView<F> {
    /// Returns whether the click landed on a cell.
    pub fn click(&mut self, area: Rect, column: u16, row: u16) -> bool {
        match Self::cell_at(area, column, row) {
            Some(index) => {
                (self.on_click)(index);
                true
            }
            None => false,
        }
    }
}

impl<F> Widget for &BoardView<F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = BoardView::<F>::cell_areas(area);
        for (index, chunk) in cells.into_iter().enumerate() {
            let block = Block::default().borders(BoardView::<F>::cell_borders(index));
            RenderMark(self.board.get(index)).render(block.inner(chunk), buf);
            block.render(chunk, buf);
        }
    }
}

struct RenderMark(Option<Mark>);

impl Widget for RenderMark {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.0 {
            Some(Mark::X) => render_x(area, buf),
            Some(Mark::O) => render_o(area, buf),
            None => {}
        }
    }
}

fn render_x(area: Rect, buf: &mut Buffer) {
    let style = Style::default().add_modifier(Modifier::BOLD);
    let last_row = area.height.saturating_sub(1).max(1);
    let span = area.width - 1;
    for y in 0..area.height {
        let x = y * span / last_row;
        buf.set_string(area.x + x, area.y + y, "\\", style);
        buf.set_string(area.x + span - x, area.y + y, "/", style);
    }
}

fn render_o(area: Rect, buf: &mut Buffer) {
    const POINTS: u16 = 64;

    // Terminal cells are about twice as tall as wide, so trace an ellipse
    let radius_x = f32::from(area.width - 1) / 2.0;
    let radius_y = f32::from(area.height - 1) / 2.0;
    let center_x = f32::from(area.x) + radius_x;
    let center_y = f32::from(area.y) + radius_y;

    for point in 0..POINTS {
        let angle = f32::from(point) * std::f32::consts::TAU / f32::from(POINTS);
        let (sin, cos) = angle.sin_cos();
        let x = (center_x + radius_x * cos).round() as u16;
        let y = (center_y + radius_y * sin).round() as u16;
        if contains(area, x, y) {
            buf.get_mut(x, y).set_char('@');
        }
    }
}

/// One line of status text.
pub struct StatusView(pub Status);

impl Widget for StatusView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.0.to_string())
            .block(Block::default().title("Game Info").borders(Borders::ALL))
            .render(area, buf);
    }
}

/// The move list. Clicking an entry asks `on_jump` to show that step.
pub struct HistoryView<F> {
    timeline: Timeline,
    on_jump: F,
}

impl<F> HistoryView<F> {
    pub fn new(timeline: Timeline, on_jump: F) -> Self {
        HistoryView { timeline, on_jump }
    }

    fn block() -> Block<'static> {
        Block::default().title("History").borders(Borders::ALL)
    }

    // Keeps the newest entries in view once the list outgrows the panel
    fn first_visible(&self, inner: Rect) -> usize {
        self.timeline
            .len()
            .saturating_sub(usize::from(inner.height))
    }

    pub fn entry_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let inner = Self::block().inner(area);
        if !contains(inner, column, row) {
            return None;
        }
        let step = self.first_visible(inner) + usize::from(row - inner.y);
        (step < self.timeline.len()).then_some(step)
    }
}

impl<F: FnMut(usize)> HistoryView<F> {
    /// Returns whether the click landed on an entry.
    pub fn click(&mut self, area: Rect, column: u16, row: u16) -> bool {
        match self.entry_at(area, column, row) {
            Some(step) => {
                (self.on_jump)(step);
                true
            }
            None => false,
        }
    }
}

impl<F> Widget for &HistoryView<F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = HistoryView::<F>::block();
        let inner = block.inner(area);
        block.render(area, buf);

        let first = self.first_visible(inner);
        let entries = self.timeline.entries().into_iter().skip(first);
        for (y, entry) in (inner.y..inner.bottom()).zip(entries) {
            let style = if entry.step == self.timeline.step() {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            buf.set_stringn(
                inner.x,
                y,
                format!("{}. {}", entry.step + 1, entry),
                usize::from(inner.width),
                style,
            );
        }
    }
}
