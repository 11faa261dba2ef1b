/*!
# Grid Exercises

Path finding on 0/1 grids given as `&[Vec<u8>]`: `0` is a free cell, anything else is a wall.
Cells are addressed as `(row, col)`; rows may have different lengths, cells outside of a row
count as walls.

- [`AStar`]: shortest paths with a Manhattan (or, with diagonal moves, Chebyshev) heuristic,
- [`MazeSolver`]: BFS (shortest) or DFS (any) paths.

Both return `None` if there is no path, including if start or goal is blocked or out of bounds.

```
use algo_classics::grid::*;

let grid = vec![
    vec![0, 0, 0],
    vec![1, 1, 0],
    vec![0, 0, 0],
];

let path = AStar::new().search(&grid, (0, 0), (2, 0)).unwrap();
assert_eq!(path.len(), 7);

let path = MazeSolver::new().strategy(Strategy::Bfs).solve(&grid, (0, 0), (2, 0));
assert_eq!(path.map(|p| p.len()), Some(7));
```
*/

use fxhash::FxHashMap;

mod astar;
mod maze;

pub use astar::*;
pub use maze::*;

/// A grid cell `(row, col)`
pub type Cell = (usize, usize);

/// Moves to the right, left, down and up neighbor
pub const ORTHOGONAL_MOVES: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Moves to the four diagonal neighbors
pub const DIAGONAL_MOVES: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Returns *true* if `cell` lies within the grid and is not a wall
pub fn is_open(grid: &[Vec<u8>], (row, col): Cell) -> bool {
    grid.get(row)
        .and_then(|cells| cells.get(col))
        .is_some_and(|&c| c == 0)
}

/// Returns the cell reached from `cell` by `(d_row, d_col)` if it is open
fn step(grid: &[Vec<u8>], (row, col): Cell, (d_row, d_col): (isize, isize)) -> Option<Cell> {
    let next = (row.checked_add_signed(d_row)?, col.checked_add_signed(d_col)?);
    is_open(grid, next).then_some(next)
}

/// Returns all open cells reachable from `cell` with one of the given moves, in the order of `moves`
fn open_neighbors<'a>(
    grid: &'a [Vec<u8>],
    cell: Cell,
    moves: impl IntoIterator<Item = &'a (isize, isize)> + 'a,
) -> impl Iterator<Item = Cell> + 'a {
    moves.into_iter().filter_map(move |&d| step(grid, cell, d))
}

/// Follows the parent links from `goal` back to the cell without parent and returns the path
/// from there to `goal`
fn trace_back(parents: &FxHashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cell = goal;
    while let Some(&parent) = parents.get(&cell) {
        path.push(parent);
        cell = parent;
    }
    path.reverse();
    path
}

/// Returns *true* if `path` consists of open cells where consecutive cells are one of `moves` apart
#[cfg(test)]
pub(crate) fn is_valid_path(grid: &[Vec<u8>], path: &[Cell], moves: &[(isize, isize)]) -> bool {
    use itertools::Itertools;

    path.iter().all(|&c| is_open(grid, c))
        && path
            .iter()
            .tuple_windows()
            .all(|(&a, &b)| moves.iter().any(|&d| step(grid, a, d) == Some(b)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn open_cells() {
        let grid = vec![vec![0, 1], vec![0]];
        assert!(is_open(&grid, (0, 0)));
        assert!(!is_open(&grid, (0, 1)));
        assert!(!is_open(&grid, (1, 1)));
        assert!(!is_open(&grid, (2, 0)));
    }

    #[test]
    fn neighbors_stay_inside() {
        let grid = vec![vec![0, 0], vec![0, 1]];
        let nbs: Vec<Cell> = open_neighbors(&grid, (0, 0), &ORTHOGONAL_MOVES).collect();
        assert_eq!(nbs, vec![(0, 1), (1, 0)]);

        let nbs: Vec<Cell> =
            open_neighbors(&grid, (1, 0), ORTHOGONAL_MOVES.iter().chain(&DIAGONAL_MOVES)).collect();
        assert_eq!(nbs, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn parents_to_path() {
        let parents: FxHashMap<Cell, Cell> =
            [((0, 1), (0, 0)), ((1, 1), (0, 1))].into_iter().collect();
        assert_eq!(trace_back(&parents, (1, 1)), vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(trace_back(&parents, (0, 0)), vec![(0, 0)]);
    }
}
