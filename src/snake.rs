use std::io;

use crossterm::style::Color;

use crate::Cell;
use crate::board::Board;
use crate::draw::{GameObject, Surface};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit step in grid columns and rows.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_tail: Option<Cell> },
    /// The head ran into the body. The snake has already been reset;
    /// `length` is how long it was when it crashed.
    Crashed { length: usize },
}

#[derive(Debug)]
pub struct Snake {
    body: Vec<Cell>, // Head first
    direction: Direction,
    next_direction: Option<Direction>,
    grow_next_move: bool,
    start: Cell,
    color: Color,
    border: Color,
}

impl Snake {
    pub fn new(start: Cell, color: Color, border: Color) -> Self {
        Snake {
            body: vec![start],
            direction: Right,
            next_direction: None,
            grow_next_move: false,
            start,
            color,
            border,
        }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Queues a turn for the next tick. Turning straight back onto the
    /// current heading is refused and leaves the queue untouched.
    pub fn queue_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }

        self.next_direction = Some(new_direction);
        true
    }

    pub fn update_direction(&mut self) {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }
    }

    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }

    pub fn move_step(&mut self, board: &Board) -> MoveResult {
        let new_head = board.step(self.head(), self.direction);

        self.body.insert(0, new_head);

        let old_tail = if self.grow_next_move {
            self.grow_next_move = false;
            None
        } else {
            self.body.pop()
        };

        if self.body[1..].contains(&new_head) {
            let length = self.body.len();
            self.reset();
            return Crashed { length };
        }

        Moved { new_head, old_tail }
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push(self.start);
        self.direction = Right;
        self.next_direction = None;
        self.grow_next_move = false;
    }
}

#[cfg(test)]
impl Snake {
    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    pub fn is_growing(&self) -> bool {
        self.grow_next_move
    }

    pub fn from_body(body: Vec<Cell>, direction: Direction) -> Self {
        let mut snake = Snake::new(body[0], Color::Green, Color::Cyan);
        snake.body = body;
        snake.direction = direction;
        snake
    }
}

impl GameObject for Snake {
    fn position(&self) -> Cell {
        self.head()
    }

    fn occupied(&self) -> &[Cell] {
        &self.body
    }

    fn body_color(&self) -> Color {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface) -> io::Result<()> {
        for pos in &self.body {
            surface.draw_cell(*pos, self.body_color(), self.border)?;
        }

        Ok(())
    }
}
