use std::{io, slice};

use crossterm::style::Color;
use log::warn;
use rand::Rng;

use crate::Cell;
use crate::board::Board;
use crate::draw::{GameObject, Surface};

#[derive(Debug)]
pub struct Apple {
    position: Cell,
    color: Color,
    border: Color,
}

impl Apple {
    pub fn new<R: Rng>(board: &Board, rng: &mut R, color: Color, border: Color) -> Self {
        let mut apple = Apple::at((0, 0), color, border);
        apple.randomize_position(board, rng, &[]);
        apple
    }

    pub fn at(position: Cell, color: Color, border: Color) -> Self {
        Apple { position, color, border }
    }

    /// Moves the apple to a uniformly random cell outside `excluded`.
    /// Returns `false`, leaving the apple where it was, if there is no
    /// such cell.
    pub fn randomize_position<R: Rng>(
        &mut self,
        board: &Board,
        rng: &mut R,
        excluded: &[Cell],
    ) -> bool {
        if excluded.len() >= board.cell_count() {
            warn!("No free cell left for the apple, keeping it at {:?}", self.position);
            return false;
        }

        loop {
            let col = rng.gen_range(0..board.columns());
            let row = rng.gen_range(0..board.rows());
            let candidate = board.cell_at(col, row);
            if !excluded.contains(&candidate) {
                self.position = candidate;
                return true;
            }
        }
    }
}

impl GameObject for Apple {
    fn position(&self) -> Cell {
        self.position
    }

    fn occupied(&self) -> &[Cell] {
        slice::from_ref(&self.position)
    }

    fn body_color(&self) -> Color {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface) -> io::Result<()> {
        surface.draw_cell(self.position, self.color, self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::tests::{Op, Recorder};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const RNG_SEED: u64 = 0x5EED_5A4E;

    fn board() -> Board {
        Board::new(640, 480, 20)
    }

    fn all_cells(b: &Board) -> Vec<Cell> {
        (0..b.rows())
            .flat_map(|row| (0..b.columns()).map(move |col| (col, row)))
            .map(|(col, row)| b.cell_at(col, row))
            .collect()
    }

    #[test]
    fn new_apple_is_on_the_board() {
        let b = board();
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        for _ in 0..100 {
            let apple = Apple::new(&b, &mut rng, Color::Red, Color::Cyan);
            assert!(b.contains(apple.position()));
        }
    }

    #[test]
    fn never_lands_on_an_excluded_cell() {
        let b = board();
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let excluded: Vec<Cell> = all_cells(&b).into_iter().filter(|&(x, _)| x < 600).collect();
        let mut apple = Apple::at((0, 0), Color::Red, Color::Cyan);

        for _ in 0..200 {
            assert!(apple.randomize_position(&b, &mut rng, &excluded));
            assert!(!excluded.contains(&apple.position()));
            assert!(apple.position().0 >= 600);
        }
    }

    #[test]
    fn finds_the_single_free_cell() {
        let b = board();
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let excluded: Vec<Cell> = all_cells(&b).into_iter().filter(|&c| c != (300, 200)).collect();
        let mut apple = Apple::at((0, 0), Color::Red, Color::Cyan);

        assert!(apple.randomize_position(&b, &mut rng, &excluded));
        assert_eq!(apple.position(), (300, 200));
    }

    #[test]
    fn full_board_keeps_the_old_position() {
        let b = board();
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let mut apple = Apple::at((40, 40), Color::Red, Color::Cyan);

        assert!(!apple.randomize_position(&b, &mut rng, &all_cells(&b)));
        assert_eq!(apple.position(), (40, 40));
    }

    #[test]
    fn draws_a_single_bordered_cell() {
        let apple = Apple::at((60, 80), Color::Red, Color::Cyan);
        let mut rec = Recorder::default();
        apple.draw(&mut rec).unwrap();
        assert_eq!(rec.ops, vec![Op::Cell((60, 80), Color::Red, Color::Cyan)]);
        assert_eq!(apple.occupied(), &[(60, 80)]);
    }
}
