use std::io;

use crossterm::style::Color;

use crate::Cell;

/// Something cells can be painted on. A frame is a `fill`, any number of
/// `draw_cell` calls, then `present`.
pub trait Surface {
    fn fill(&mut self, color: Color) -> io::Result<()>;
    fn draw_cell(&mut self, cell: Cell, fill: Color, border: Color) -> io::Result<()>;
    fn present(&mut self) -> io::Result<()>;
}

/// An entity living on the board.
pub trait GameObject {
    /// The cell that identifies the object (the head, for the snake).
    fn position(&self) -> Cell;

    /// Every cell the object covers.
    fn occupied(&self) -> &[Cell];

    fn body_color(&self) -> Color;

    fn draw(&self, surface: &mut dyn Surface) -> io::Result<()>;
}
