mod apple;
mod board;
mod clock;
mod config;
mod draw;
mod game;
mod input;
mod snake;
mod term;

use std::{fs::File, io};

use log::{error, info};
use simplelog::WriteLogger;

use crate::config::Settings;
use crate::game::SnakeGame;
use crate::term::TermManager;

/// Pixel coordinates of a grid cell, always multiples of the cell size.
pub type Cell = (i32, i32);

fn main() -> io::Result<()> {
    let settings = Settings::default();

    // The screen belongs to the game, so logs go to a file
    let log_file = File::create(settings.log_file)?;
    WriteLogger::init(settings.log_level, simplelog::Config::default(), log_file)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    info!("Starting snake on a {}x{} board", settings.board().columns(), settings.board().rows());

    let mut term = TermManager::new(settings.board())?;
    let mut game = SnakeGame::new(settings);
    let res = term.setup().and_then(|_| game.run(&mut term));

    if let Err(e) = &res {
        error!("Game loop failed: {}", e);
    }

    // Restore the terminal no matter how the loop ended, but report the
    // loop's own error first
    let restored = term.restore();
    res.and(restored)
}
