/*!
# Greedy Algorithms

Exercises where a locally optimal choice leads to a global optimum:
- [`select_activities`]: earliest finishing time first,
- [`sequence_jobs`]: highest profit first, scheduled as late as possible,
- [`fractional_knapsack`]: best value per weight first,
- [`huffman_codes`]: merge the two rarest subtrees first.
*/

mod activity;
mod fractional_knapsack;
mod huffman;
mod jobs;

pub use activity::*;
pub use fractional_knapsack::*;
pub use huffman::*;
pub use jobs::*;
