use rand_distr::{Bernoulli, Distribution};

use super::*;

/// Generator for random 0/1 grids: `1` is a wall, `0` is free.
///
/// The top-left and bottom-right cells are always free so they can serve as start and goal.
#[derive(Debug, Copy, Clone)]
pub struct RandomMaze {
    rows: usize,
    cols: usize,
    wall_prob: f64,
}

impl Default for RandomMaze {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            wall_prob: 0.3,
        }
    }
}

impl RandomMaze {
    /// Creates a `1 x 1` maze generator with wall probability `0.3`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Sets the number of rows
    pub fn rows(mut self, rows: usize) -> Self {
        self.set_rows(rows);
        self
    }

    /// Sets the number of columns
    pub fn set_cols(&mut self, cols: usize) {
        self.cols = cols;
    }

    /// Sets the number of columns
    pub fn cols(mut self, cols: usize) -> Self {
        self.set_cols(cols);
        self
    }

    /// Sets the probability of a cell being a wall
    /// ** Panics if `p` is not a valid probability **
    pub fn set_wall_prob(&mut self, p: f64) {
        assert!(p.is_valid_probability());
        self.wall_prob = p;
    }

    /// Sets the probability of a cell being a wall
    /// ** Panics if `p` is not a valid probability **
    pub fn wall_prob(mut self, p: f64) -> Self {
        self.set_wall_prob(p);
        self
    }

    /// Draws a grid of `rows x cols` cells
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Vec<u8>> {
        let mut grid = vec![vec![0u8; self.cols]; self.rows];
        let Ok(wall) = Bernoulli::new(self.wall_prob) else {
            return grid;
        };

        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = wall.sample(rng) as u8;
            }
        }

        if let Some(first) = grid.first_mut().and_then(|row| row.first_mut()) {
            *first = 0;
        }
        if let Some(last) = grid.last_mut().and_then(|row| row.last_mut()) {
            *last = 0;
        }

        grid
    }
}
