//! Crossterm terminal driver.
//!
//! The grid is drawn landscape: grid rows run along the screen's x axis and
//! grid columns along its y axis, below a one-line help bar. The status line
//! sits under the grid.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{Node, Point};

use crate::app::{App, HELP, Input};
use crate::timeline::Mark;

/// Screen rows above the grid.
const TOP: u16 = 1;

/// Glyph and colours for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

/// How `node` is drawn given its current highlight.
///
/// Endpoints win over walls and highlights; walls win over highlights.
pub fn cell_style(node: &Node, mark: Option<Mark>) -> CellStyle {
    let (ch, fg, bg) = if node.is_start() {
        ('S', Color::Black, Color::Green)
    } else if node.is_finish() {
        ('F', Color::Black, Color::Red)
    } else if node.is_wall() {
        ('#', Color::Grey, Color::DarkGrey)
    } else {
        match mark {
            Some(Mark::Path) => ('*', Color::Black, Color::Yellow),
            Some(Mark::Visited) => ('.', Color::White, Color::DarkCyan),
            None => ('·', Color::DarkGrey, Color::Reset),
        }
    };
    CellStyle { ch, fg, bg }
}

/// Grid cell under the screen position (`column`, `row`).
pub fn screen_to_grid(column: u16, row: u16) -> Point {
    Point::at(column as i32, row as i32 - TOP as i32)
}

/// Screen position (`column`, `row`) of grid cell `p`.
pub fn grid_to_screen(p: Point) -> (u16, u16) {
    (p.row().max(0) as u16, (p.col().max(0) as u16) + TOP)
}

fn to_input(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Input::Escape)
            }
            KeyCode::Char(c) => Some(Input::Key(c.to_ascii_lowercase())),
            KeyCode::Enter => Some(Input::Enter),
            KeyCode::Esc => Some(Input::Escape),
            _ => None,
        },
        Event::Mouse(me) => {
            let pos = screen_to_grid(me.column, me.row);
            match me.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Input::MouseDown(pos)),
                MouseEventKind::Drag(MouseButton::Left) => Some(Input::MouseDrag(pos)),
                MouseEventKind::Up(MouseButton::Left) => Some(Input::MouseUp),
                _ => None,
            }
        }
        Event::Resize(..) | Event::FocusGained => Some(Input::Redraw),
        _ => None,
    }
}

/// Owns the terminal while the visualizer runs.
pub struct Terminal {
    stdout: Stdout,
    active: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            active: false,
        }
    }

    /// Enter raw mode and the alternate screen, with mouse capture.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("term: initialized");
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(
            self.stdout,
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        log::debug!("term: closed");
        Ok(())
    }

    /// Wait up to `timeout` for the next relevant input.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(to_input(event::read()?))
    }

    /// Redraw the whole screen from `app`.
    pub fn draw(&mut self, app: &App) -> io::Result<()> {
        let grid = app.session().grid();
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::White),
            SetBackgroundColor(Color::Reset),
            Print(HELP)
        )?;

        for node in grid.iter() {
            let (x, y) = grid_to_screen(node.pos());
            let st = cell_style(node, app.mark(node.pos()));
            queue!(
                self.stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(st.fg),
                SetBackgroundColor(st.bg),
                Print(st.ch)
            )?;
        }

        let status_row = grid.cols() as u16 + TOP;
        queue!(
            self.stdout,
            ResetColor,
            cursor::MoveTo(0, status_row),
            terminal::Clear(ClearType::CurrentLine),
            Print(app.status())
        )?;
        self.stdout.flush()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
