use fxhash::FxHashMap;
use tracing::debug;

use super::*;

/// How [`Knapsack`] evaluates its sub-problems
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KnapsackStrategy {
    /// Recursion from the full problem down, caching results in a hash map
    #[default]
    Memoized,
    /// Fills the complete `(items + 1) x (capacity + 1)` table from the last item backwards
    Tabulated,
}

/// 0/1 knapsack: every item is either taken completely or not at all.
///
/// # Examples
/// ```
/// use algo_classics::dp::{Knapsack, KnapsackStrategy};
///
/// let weights = [1, 3, 4, 5];
/// let values = [1, 4, 5, 7];
///
/// let knapsack = Knapsack::new(7);
/// assert_eq!(knapsack.solve(&weights, &values), Ok(9));
///
/// let knapsack = Knapsack::new(7).strategy(KnapsackStrategy::Tabulated);
/// assert_eq!(knapsack.solve_with_items(&weights, &values), Ok((9, vec![1, 2])));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Knapsack {
    capacity: usize,
    strategy: KnapsackStrategy,
}

/// Sub-problem `best(i, c)`: the largest value achievable with items `i..` and capacity `c`
trait BestValue {
    fn best(&mut self, i: usize, c: usize) -> u64;
}

struct MemoSearch<'a> {
    weights: &'a [usize],
    values: &'a [u64],
    memo: FxHashMap<(usize, usize), u64>,
}

impl<'a> MemoSearch<'a> {
    fn new(weights: &'a [usize], values: &'a [u64]) -> Self {
        Self {
            weights,
            values,
            memo: FxHashMap::default(),
        }
    }
}

impl BestValue for MemoSearch<'_> {
    fn best(&mut self, i: usize, c: usize) -> u64 {
        if i == self.weights.len() {
            return 0;
        }
        if let Some(&value) = self.memo.get(&(i, c)) {
            return value;
        }

        let skip = self.best(i + 1, c);
        let value = if self.weights[i] <= c {
            skip.max(self.values[i] + self.best(i + 1, c - self.weights[i]))
        } else {
            skip
        };

        self.memo.insert((i, c), value);
        value
    }
}

struct Table {
    /// row `i` holds `best(i, 0..=capacity)`
    rows: Vec<Vec<u64>>,
}

impl Table {
    fn new(weights: &[usize], values: &[u64], capacity: usize) -> Self {
        let n = weights.len();
        let mut rows = vec![vec![0; capacity + 1]; n + 1];

        for i in (0..n).rev() {
            for c in 0..=capacity {
                let skip = rows[i + 1][c];
                rows[i][c] = if weights[i] <= c {
                    skip.max(values[i] + rows[i + 1][c - weights[i]])
                } else {
                    skip
                };
            }
        }
        Self { rows }
    }
}

impl BestValue for Table {
    fn best(&mut self, i: usize, c: usize) -> u64 {
        self.rows[i][c]
    }
}

impl Knapsack {
    /// Creates a knapsack holding a total weight of at most `capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            strategy: KnapsackStrategy::default(),
        }
    }

    /// Sets the strategy for evaluating sub-problems
    pub fn set_strategy(&mut self, strategy: KnapsackStrategy) {
        self.strategy = strategy;
    }

    /// Sets the strategy for evaluating sub-problems
    pub fn strategy(mut self, strategy: KnapsackStrategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    fn sub_problems<'a>(
        &self,
        weights: &'a [usize],
        values: &'a [u64],
    ) -> Result<Box<dyn BestValue + 'a>> {
        if weights.len() != values.len() {
            return Err(Error::MismatchedLengths {
                left: weights.len(),
                right: values.len(),
            });
        }

        Ok(match self.strategy {
            KnapsackStrategy::Memoized => Box::new(MemoSearch::new(weights, values)),
            KnapsackStrategy::Tabulated => Box::new(Table::new(weights, values, self.capacity)),
        })
    }

    /// Returns the largest total value of items whose total weight fits into the knapsack.
    /// Fails with [`Error::MismatchedLengths`] if `weights` and `values` differ in length.
    pub fn solve(&self, weights: &[usize], values: &[u64]) -> Result<u64> {
        let best = self.sub_problems(weights, values)?.best(0, self.capacity);
        debug!(n = weights.len(), capacity = self.capacity, best, "solved knapsack");
        Ok(best)
    }

    /// Same as [`Knapsack::solve`] but also returns the indices of the chosen items (ascending)
    pub fn solve_with_items(&self, weights: &[usize], values: &[u64]) -> Result<(u64, Vec<usize>)> {
        let mut sub_problems = self.sub_problems(weights, values)?;
        let best = sub_problems.best(0, self.capacity);

        let mut items = Vec::new();
        let mut c = self.capacity;
        for i in 0..weights.len() {
            if weights[i] <= c
                && sub_problems.best(i + 1, c - weights[i]) + values[i] == sub_problems.best(i, c)
            {
                items.push(i);
                c -= weights[i];
            }
        }

        Ok((best, items))
    }
}
