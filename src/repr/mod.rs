/*!
# Graph Representations

- [`DirectedGraph`] / [`UndirectedGraph`] are parameterized by a [`Neighborhood`] which controls
  how adjacency is stored:
  - [`AdjArray`] / [`AdjArrayUndir`]: `Vec<Node>` per node, neighbors kept in insertion order,
  - [`SparseAdjArray`] / [`SparseAdjArrayUndir`]: inline small vectors, insertion order,
  - [`AdjMatrix`] / [`AdjMatrixUndir`]: one bit row per node, neighbors in ascending order.
- [`WeightedAdjArray`] / [`WeightedAdjArrayUndir`] store a weight with every edge.
- [`LabeledGraph`] wraps any of the above and translates between user labels and nodes.
*/

use crate::{edge::*, error::*, node::*, ops::*};

mod directed;
mod labeled;
mod neighborhood;
mod undirected;
mod weighted;

pub use directed::*;
pub use labeled::*;
pub use neighborhood::*;
pub use undirected::*;
pub use weighted::*;
