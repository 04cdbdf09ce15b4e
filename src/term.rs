use crate::{Cell, board::Board, draw::Surface};
use std::{io::{self, Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

const CELL_GLYPH: &str = "[]";
const CELL_COLUMNS: u16 = 2; // Terminal characters are about twice as tall as wide

pub struct TermManager {
    board: Board,
    stdout: Stdout,
    origin: (u16, u16),
}

impl TermManager {
    /// Fails if the terminal can't fit the whole board.
    pub fn new(board: Board) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let needed = (board.columns() as u16 * CELL_COLUMNS, board.rows() as u16);

        if width < needed.0 || height < needed.1 {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "terminal is {}x{}, the board needs at least {}x{}",
                    width, height, needed.0, needed.1
                ),
            ));
        }

        let origin = ((width - needed.0) / 2, (height - needed.1) / 2);
        Ok(TermManager { board, stdout: stdout(), origin })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            cursor::Hide,
            cursor::DisableBlinking,
            terminal::Clear(ClearType::All)
        )
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
    }

    /// Every key event queued since the last call, without blocking.
    pub fn read_key_events_queue(&self) -> io::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO)? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    fn screen_pos(&self, cell: Cell) -> (u16, u16) {
        let (col, row) = self.board.grid_index(cell);
        (self.origin.0 + col as u16 * CELL_COLUMNS, self.origin.1 + row as u16)
    }
}

impl Surface for TermManager {
    fn fill(&mut self, color: Color) -> io::Result<()> {
        let blank = " ".repeat((self.board.columns() as u16 * CELL_COLUMNS) as usize);
        queue!(self.stdout, style::SetBackgroundColor(color))?;

        for row in 0..self.board.rows() as u16 {
            let y = self.origin.1 + row;
            queue!(self.stdout, cursor::MoveTo(self.origin.0, y), style::Print(&blank))?;
        }

        Ok(())
    }

    fn draw_cell(&mut self, cell: Cell, fill: Color, border: Color) -> io::Result<()> {
        let (x, y) = self.screen_pos(cell);
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::SetBackgroundColor(fill),
            style::SetForegroundColor(border),
            style::Print(CELL_GLYPH)
        )
    }

    fn present(&mut self) -> io::Result<()> {
        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()
    }
}
