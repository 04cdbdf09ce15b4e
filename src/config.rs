use crossterm::style::Color;
use log::LevelFilter;

use crate::Cell;
use crate::board::Board;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;

pub const TICKS_PER_SECOND: u32 = 10;
pub const SNAKE_START: Cell = (CELL_SIZE, CELL_SIZE);

pub const BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
pub const APPLE_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };

pub const LOG_FILE: &str = "snake.log";

/// Everything the game needs to know about its board, pace and looks.
#[derive(Clone, Debug)]
pub struct Settings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_size: i32,
    pub ticks_per_second: u32,
    pub snake_start: Cell,
    pub background: Color,
    pub border: Color,
    pub apple_color: Color,
    pub snake_color: Color,
    pub log_file: &'static str,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn board(&self) -> Board {
        Board::new(self.screen_width, self.screen_height, self.cell_size)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            snake_start: SNAKE_START,
            background: BACKGROUND_COLOR,
            border: BORDER_COLOR,
            apple_color: APPLE_COLOR,
            snake_color: SNAKE_COLOR,
            log_file: LOG_FILE,
            log_level: LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_32_by_24() {
        let board = Settings::default().board();
        assert_eq!((board.columns(), board.rows()), (32, 24));
    }

    #[test]
    fn start_cell_is_on_the_grid() {
        let settings = Settings::default();
        assert!(settings.board().contains(settings.snake_start));
    }
}
