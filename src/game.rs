use std::io;

use crossterm::event::KeyEvent;
use log::{debug, info, warn};
use rand::{Rng, rngs::ThreadRng, thread_rng};

use crate::Cell;
use crate::apple::Apple;
use crate::board::Board;
use crate::clock::Clock;
use crate::config::Settings;
use crate::draw::{GameObject, Surface};
use crate::input::Command;
use crate::snake::{Snake, MoveResult::*};
use crate::term::TermManager;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// The apple was eaten and has been moved to `apple`.
    Ate { apple: Cell },
    /// The snake bit itself and started over.
    Reset { length: usize },
}

pub struct SnakeGame<R = ThreadRng> {
    settings: Settings,
    board: Board,
    snake: Snake,
    apple: Apple,
    rng: R,
}

impl SnakeGame<ThreadRng> {
    pub fn new(settings: Settings) -> Self {
        SnakeGame::with_rng(settings, thread_rng())
    }
}

impl<R: Rng> SnakeGame<R> {
    pub fn with_rng(settings: Settings, mut rng: R) -> Self {
        let board = settings.board();
        if !board.contains(settings.snake_start) {
            warn!("Snake start {:?} is not a cell of the board", settings.snake_start);
        }

        let snake = Snake::new(settings.snake_start, settings.snake_color, settings.border);
        let mut apple = Apple::new(&board, &mut rng, settings.apple_color, settings.border);
        apple.randomize_position(&board, &mut rng, snake.body());

        SnakeGame { settings, board, snake, apple, rng }
    }

    /// Runs until the player quits. Only terminal failures end it with an error.
    pub fn run(&mut self, term: &mut TermManager) -> io::Result<()> {
        let mut clock = Clock::new(self.settings.ticks_per_second);
        info!("Ticking every {:?}", clock.interval());

        loop {
            clock.tick();

            let events = term.read_key_events_queue()?;
            if self.handle_keys(&events) == Flow::Quit {
                info!("Quit requested, snake length {}", self.snake.len());
                return Ok(());
            }

            self.step();
            self.draw(term)?;
        }
    }

    /// Applies a tick's worth of key presses. Turns only land in the
    /// snake's pending slot; nothing moves until `step`.
    pub fn handle_keys(&mut self, events: &[KeyEvent]) -> Flow {
        for ev in events {
            match Command::from_key_event(ev) {
                Some(Command::Quit) => return Flow::Quit,
                Some(Command::Turn(dir)) => {
                    if !self.snake.queue_direction(dir) {
                        debug!(
                            "Ignoring turn to {:?} while heading {:?}",
                            dir,
                            self.snake.direction()
                        );
                    }
                },
                None => {}
            }
        }

        Flow::Continue
    }

    pub fn step(&mut self) -> StepOutcome {
        self.snake.update_direction();

        match self.snake.move_step(&self.board) {
            Crashed { length } => {
                info!("Snake bit itself at length {}, starting over", length);

                // The fresh snake may have landed on the apple
                if self.snake.occupied().contains(&self.apple.position()) {
                    let occupied = self.snake.occupied();
                    self.apple.randomize_position(&self.board, &mut self.rng, occupied);
                }

                StepOutcome::Reset { length }
            },
            Moved { new_head, old_tail } => {
                if new_head != self.apple.position() {
                    return StepOutcome::Moved;
                }

                self.snake.grow();

                // Keep the apple off the cell the tail just left as well,
                // unless that cell is the only free one
                let mut excluded = self.snake.occupied().to_vec();
                if excluded.len() + 1 < self.board.cell_count() {
                    excluded.extend(old_tail);
                }
                self.apple.randomize_position(&self.board, &mut self.rng, &excluded);

                debug!("Apple eaten at {:?}, next one at {:?}", new_head, self.apple.position());
                StepOutcome::Ate { apple: self.apple.position() }
            },
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> io::Result<()> {
        surface.fill(self.settings.background)?;

        let objects: [&dyn GameObject; 2] = [&self.apple, &self.snake];
        for obj in objects.iter() {
            obj.draw(surface)?;
        }

        surface.present()
    }
}
