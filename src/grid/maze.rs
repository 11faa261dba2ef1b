use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::*;

/// Order in which both strategies try moves: up, down, left, right
const MAZE_MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Search strategy of the [`MazeSolver`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first search; paths are shortest
    #[default]
    Bfs,
    /// Depth-first backtracking; paths are simple but not necessarily shortest
    Dfs,
}

/// Finds a path through a 0/1 maze using orthogonal moves only
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeSolver {
    strategy: Strategy,
}

impl MazeSolver {
    /// Creates a BFS solver
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search strategy
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Sets the search strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Returns a path from `start` to `end` (both inclusive) or `None` if `end` cannot be reached
    /// or one of the endpoints is a wall or outside of the maze.
    ///
    /// # Examples
    /// ```
    /// use algo_classics::grid::*;
    ///
    /// let maze = vec![vec![0, 1], vec![0, 0]];
    /// let path = MazeSolver::new().solve(&maze, (0, 0), (1, 1));
    /// assert_eq!(path, Some(vec![(0, 0), (1, 0), (1, 1)]));
    /// ```
    pub fn solve(&self, maze: &[Vec<u8>], start: Cell, end: Cell) -> Option<Vec<Cell>> {
        if !is_open(maze, start) || !is_open(maze, end) {
            debug!(?start, ?end, "start or end is a wall");
            return None;
        }

        let path = match self.strategy {
            Strategy::Bfs => solve_bfs(maze, start, end),
            Strategy::Dfs => solve_dfs(maze, start, end),
        };

        debug!(
            strategy = ?self.strategy,
            length = ?path.as_ref().map(Vec::len),
            "maze solved"
        );
        path
    }
}

fn solve_bfs(maze: &[Vec<u8>], start: Cell, end: Cell) -> Option<Vec<Cell>> {
    let mut parents: FxHashMap<Cell, Cell> = FxHashMap::default();
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        if cell == end {
            return Some(trace_back(&parents, end));
        }

        for next in open_neighbors(maze, cell, &MAZE_MOVES) {
            if next != start && !parents.contains_key(&next) {
                parents.insert(next, cell);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Backtracking search with an explicit stack of `(cell, index of the next move to try)`;
/// the cells on the stack form the current path
fn solve_dfs(maze: &[Vec<u8>], start: Cell, end: Cell) -> Option<Vec<Cell>> {
    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut stack = vec![(start, 0usize)];

    while let Some((cell, next_move)) = stack.pop() {
        if cell == end {
            let mut path: Vec<Cell> = stack.into_iter().map(|(cell, _)| cell).collect();
            path.push(cell);
            return Some(path);
        }

        let Some(&d) = MAZE_MOVES.get(next_move) else {
            continue;
        };
        stack.push((cell, next_move + 1));

        if let Some(next) = step(maze, cell, d) {
            if visited.insert(next) {
                stack.push((next, 0));
            }
        }
    }

    None
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::RandomMaze;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    fn complex_maze() -> Vec<Vec<u8>> {
        vec![
            vec![0, 1, 0, 0, 0, 0],
            vec![0, 1, 0, 1, 1, 0],
            vec![0, 0, 0, 1, 0, 0],
            vec![1, 1, 1, 1, 0, 1],
            vec![0, 0, 0, 0, 0, 0],
            vec![1, 0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0, 0],
        ]
    }

    #[rstest]
    #[case(
        vec![
            vec![0, 0, 0, 0, 0],
            vec![1, 1, 0, 1, 1],
            vec![0, 0, 0, 0, 0],
            vec![1, 1, 0, 1, 1],
            vec![0, 0, 0, 0, 0],
        ],
        (0, 0),
        (4, 4),
        Some(9)
    )]
    #[case(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]], (0, 0), (0, 2), None)]
    #[case(vec![vec![0, 1], vec![0, 0]], (0, 0), (1, 1), Some(3))]
    #[case(vec![vec![0]], (0, 0), (0, 0), Some(1))]
    #[case(complex_maze(), (0, 0), (6, 5), Some(18))]
    #[case(vec![vec![1, 0], vec![0, 0]], (0, 0), (1, 1), None)]
    #[case(vec![vec![0, 0], vec![0, 0]], (0, 0), (3, 3), None)]
    fn bfs_fixtures(
        #[case] maze: Vec<Vec<u8>>,
        #[case] start: Cell,
        #[case] end: Cell,
        #[case] length: Option<usize>,
    ) {
        let path = MazeSolver::new().strategy(Strategy::Bfs).solve(&maze, start, end);
        assert_eq!(path.as_ref().map(Vec::len), length);

        let dfs_path = MazeSolver::new().strategy(Strategy::Dfs).solve(&maze, start, end);
        assert_eq!(dfs_path.is_some(), length.is_some());

        for path in [path, dfs_path].into_iter().flatten() {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert!(is_valid_path(&maze, &path, &ORTHOGONAL_MOVES));
        }
    }

    #[test]
    fn start_is_end() {
        let maze = complex_maze();
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let path = MazeSolver::new().strategy(strategy).solve(&maze, (2, 2), (2, 2));
            assert_eq!(path, Some(vec![(2, 2)]));
        }
    }

    #[test]
    fn dfs_prefers_going_down() {
        let maze = vec![vec![0; 3]; 3];
        let path = MazeSolver::new()
            .strategy(Strategy::Dfs)
            .solve(&maze, (0, 0), (0, 1))
            .unwrap();
        assert_eq!(path[1], (1, 0));
        assert_eq!(path.last(), Some(&(0, 1)));
    }

    #[test]
    fn bfs_breaks_ties_by_move_order() {
        let maze = vec![vec![0; 2]; 2];
        let path = MazeSolver::new().solve(&maze, (0, 0), (1, 1));
        assert_eq!(path, Some(vec![(0, 0), (1, 0), (1, 1)]));

        let path = MazeSolver::new().solve(&maze, (1, 1), (0, 0));
        assert_eq!(path, Some(vec![(1, 1), (0, 1), (0, 0)]));
    }

    #[test]
    fn large_open_maze() {
        let maze = vec![vec![0; 400]; 400];
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let path = MazeSolver::new()
                .strategy(strategy)
                .solve(&maze, (0, 0), (399, 399))
                .unwrap();
            assert_eq!(path.first(), Some(&(0, 0)));
            assert_eq!(path.last(), Some(&(399, 399)));
            assert!(is_valid_path(&maze, &path, &ORTHOGONAL_MOVES));
        }
    }

    #[test]
    fn dfs_never_shorter_than_bfs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for _ in 0..100 {
            let maze = RandomMaze::new().rows(10).cols(10).wall_prob(0.3).generate(rng);
            let bfs = MazeSolver::new().solve(&maze, (0, 0), (9, 9));
            let dfs = MazeSolver::new().strategy(Strategy::Dfs).solve(&maze, (0, 0), (9, 9));

            assert_eq!(bfs.is_some(), dfs.is_some());
            if let (Some(bfs), Some(dfs)) = (bfs, dfs) {
                assert!(bfs.len() <= dfs.len());
                let distinct: FxHashSet<Cell> = dfs.iter().copied().collect();
                assert_eq!(distinct.len(), dfs.len());
            }
        }
    }
}
