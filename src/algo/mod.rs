/*!
# Graph Algorithms

The graph exercises of the catalogue, built on top of the representations in [`repr`](crate::repr).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use algo_classics::algo::*;
```
and gain access to traversals, cycle detection, articulation points, shortest paths, spanning
trees, topological sorting and Hamiltonian paths/cycles.
Most exercises are extension traits implemented for every fitting graph; if possible, results are
provided as **iterators**, making it easy to consume them lazily.
*/

mod articulation;
mod cycle;
mod hamiltonian;
mod shortest_path;
mod spanning_tree;
mod topo;
pub mod traversal;

use crate::{prelude::*, utils::*};

pub use articulation::*;
pub use cycle::*;
pub use hamiltonian::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use topo::*;
pub use traversal::*;
