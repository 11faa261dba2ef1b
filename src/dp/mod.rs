/*!
# Dynamic Programming

[`Knapsack`] solves the 0/1 knapsack problem either top-down with a memo table or bottom-up with
a full table; both compute the same sub-problem values and therefore also agree on the chosen
items.
*/

use crate::error::*;

mod knapsack;

pub use knapsack::*;
