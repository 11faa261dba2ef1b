use std::{cmp::Reverse, collections::BinaryHeap};

use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use super::*;

/// A\* search on 0/1 grids with unit step costs.
///
/// Without diagonal moves, the heuristic is the Manhattan distance; with diagonal moves (which
/// also cost `1`) it is the Chebyshev distance. Both are admissible, so returned paths are shortest.
/// Among cells with equal priority, the one discovered first is expanded first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {
    diagonal: bool,
}

/// Open-list entry: `(f = g + h, insertion counter, cell)`
type OpenEntry = Reverse<(usize, usize, Cell)>;

struct AStarSearch<'a> {
    config: AStar,
    grid: &'a [Vec<u8>],
    goal: Cell,
    open: BinaryHeap<OpenEntry>,
    costs: FxHashMap<Cell, usize>,
    parents: FxHashMap<Cell, Cell>,
    closed: FxHashSet<Cell>,
    counter: usize,
}

impl AStar {
    /// Creates a search restricted to the 4-neighborhood
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows diagonal moves if `diagonal` is *true*
    pub fn set_diagonal(&mut self, diagonal: bool) {
        self.diagonal = diagonal;
    }

    /// Allows diagonal moves if `diagonal` is *true*
    pub fn diagonal(mut self, diagonal: bool) -> Self {
        self.set_diagonal(diagonal);
        self
    }

    /// Returns the moves allowed in this configuration
    pub fn moves(&self) -> Vec<(isize, isize)> {
        let mut moves = ORTHOGONAL_MOVES.to_vec();
        if self.diagonal {
            moves.extend_from_slice(&DIAGONAL_MOVES);
        }
        moves
    }

    /// Lower bound on the number of steps between `a` and `b`
    pub fn heuristic(&self, a: Cell, b: Cell) -> usize {
        let d_row = a.0.abs_diff(b.0);
        let d_col = a.1.abs_diff(b.1);
        if self.diagonal {
            d_row.max(d_col)
        } else {
            d_row + d_col
        }
    }

    /// Returns a shortest path from `start` to `goal` (both inclusive) or `None` if
    /// there is none.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::grid::*;
    ///
    /// let grid = vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 0, 0]];
    /// assert_eq!(AStar::new().search(&grid, (0, 0), (2, 0)), None);
    /// assert_eq!(AStar::new().search(&grid, (2, 2), (2, 2)), Some(vec![(2, 2)]));
    /// ```
    pub fn search(&self, grid: &[Vec<u8>], start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        let mut search = AStarSearch::new(*self, grid, start, goal)?;
        while let Some(found) = search.expand_next() {
            if found {
                return Some(search.path());
            }
        }
        debug!(?start, ?goal, closed = search.closed.len(), "a* found no path");
        None
    }

    /// Same as [`AStar::search`], but the expansions are driven by recursion: the budget of
    /// remaining expansions is split in halves, so the recursion depth stays logarithmic in it
    pub fn search_recursive(
        &self,
        grid: &[Vec<u8>],
        start: Cell,
        goal: Cell,
    ) -> Option<Vec<Cell>> {
        let mut search = AStarSearch::new(*self, grid, start, goal)?;
        let found = search.expand_recursive(usize::MAX) == Some(true);
        if !found {
            debug!(?start, ?goal, closed = search.closed.len(), "a* found no path");
        }
        found.then(|| search.path())
    }
}

impl<'a> AStarSearch<'a> {
    /// Returns `None` if start or goal are blocked or outside of the grid
    fn new(config: AStar, grid: &'a [Vec<u8>], start: Cell, goal: Cell) -> Option<Self> {
        if !is_open(grid, start) || !is_open(grid, goal) {
            debug!(?start, ?goal, "start or goal blocked");
            return None;
        }

        let mut search = Self {
            config,
            grid,
            goal,
            open: BinaryHeap::new(),
            costs: FxHashMap::default(),
            parents: FxHashMap::default(),
            closed: FxHashSet::default(),
            counter: 0,
        };
        search.costs.insert(start, 0);
        search.push(start, 0);
        Some(search)
    }

    fn push(&mut self, cell: Cell, cost: usize) {
        let f = cost + self.config.heuristic(cell, self.goal);
        self.open.push(Reverse((f, self.counter, cell)));
        self.counter += 1;
    }

    /// Expands the open cell with smallest priority.
    /// Returns `None` if the open list is exhausted and `Some(true)` if the goal was reached.
    fn expand_next(&mut self) -> Option<bool> {
        let Reverse((_, _, cell)) = self.open.pop()?;
        if cell == self.goal {
            return Some(true);
        }
        if !self.closed.insert(cell) {
            return Some(false);
        }

        let cost = self.costs.get(&cell).copied().unwrap_or_default() + 1;
        let moves = self.config.moves();
        let neighbors: Vec<Cell> = open_neighbors(self.grid, cell, &moves).collect();

        for next in neighbors {
            if self.closed.contains(&next) {
                continue;
            }
            if self.costs.get(&next).is_none_or(|&c| cost < c) {
                trace!(?cell, ?next, cost, "relax");
                self.costs.insert(next, cost);
                self.parents.insert(next, cell);
                self.push(next, cost);
            }
        }

        Some(false)
    }

    /// Performs at most `budget` expansions. Returns `Some(found)` once the search is decided
    /// and `None` if the budget ran out first.
    fn expand_recursive(&mut self, budget: usize) -> Option<bool> {
        if budget <= 1 {
            return match self.expand_next() {
                None => Some(false),
                Some(true) => Some(true),
                Some(false) => None,
            };
        }

        let half = budget / 2;
        self.expand_recursive(half)
            .or_else(|| self.expand_recursive(budget - half))
    }

    fn path(&self) -> Vec<Cell> {
        let path = trace_back(&self.parents, self.goal);
        debug!(length = path.len(), closed = self.closed.len(), "a* found path");
        path
    }
}
