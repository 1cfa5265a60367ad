//! Terminal backend built on crossterm
//!
//! Each grid cell is two columns wide. Row 0 holds the status line, the
//! board starts on row 1.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
        disable_raw_mode, enable_raw_mode,
    },
};

use super::{InputEvent, InputSource, Key};
use crate::renderer::{Color, Renderer, palette};
use crate::sim::{Cell, Grid};

const CELL_COLUMNS: u16 = 2;
const BOARD_TOP: u16 = 1;

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Raw mode and the alternate screen, restored on drop
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        log::debug!("Terminal session started");
        Ok(Self { _private: () })
    }

    /// Fail early when the board can't fit
    pub fn check_fits(grid: &Grid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let need_cols = grid.width as u32 * u32::from(CELL_COLUMNS);
        let need_rows = grid.height as u32 + u32::from(BOARD_TOP);
        if u32::from(cols) < need_cols || u32::from(rows) < need_rows {
            return Err(io::Error::other(format!(
                "terminal is {cols}x{rows}, board needs {need_cols}x{need_rows}"
            )));
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        log::debug!("Terminal session restored");
    }
}

/// Paints the board with background colors
pub struct TerminalRenderer<W: Write> {
    out: W,
    grid: Grid,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, grid: Grid) -> Self {
        Self { out, grid }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn move_to(&mut self, cell: Cell) -> io::Result<()> {
        let col = cell.x as u16 * CELL_COLUMNS;
        let row = cell.y as u16 + BOARD_TOP;
        queue!(self.out, MoveTo(col, row))
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_cell(&mut self, cell: Cell, color: Color) -> io::Result<()> {
        if !self.grid.contains(cell) {
            return Ok(());
        }
        self.move_to(cell)?;
        if color == palette::BOARD_BACKGROUND {
            queue!(self.out, SetBackgroundColor(term_color(color)), Print("  "))?;
        } else {
            queue!(
                self.out,
                SetBackgroundColor(term_color(color)),
                SetForegroundColor(term_color(palette::FRAME)),
                Print("[]")
            )?;
        }
        queue!(self.out, ResetColor)
    }

    fn clear(&mut self, color: Color) -> io::Result<()> {
        let row = " ".repeat(self.grid.width as usize * CELL_COLUMNS as usize);
        queue!(self.out, SetBackgroundColor(term_color(color)))?;
        for y in 0..self.grid.height {
            queue!(self.out, MoveTo(0, y as u16 + BOARD_TOP), Print(&row))?;
        }
        queue!(self.out, ResetColor)
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn set_caption(&mut self, caption: &str) -> io::Result<()> {
        queue!(
            self.out,
            SetTitle(caption),
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            Print(caption)
        )
    }
}

/// Non-blocking keyboard reader
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = translate_key(key) {
                    events.push(event);
                }
            }
        }
        Ok(events)
    }
}

/// Translate a crossterm key press; releases and repeats are dropped
pub fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    let key = match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(InputEvent::KeyDown(key))
}
