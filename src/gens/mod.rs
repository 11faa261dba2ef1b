/*!
# Random Generators

Random instances for the randomized cross-checks of the exercises:
- [`WeightedGnp`]: `G(n,p)` graphs with uniform integer edge weights, optionally made connected,
- [`Mst`]: uniform-ish random spanning trees used to connect graphs,
- [`RandomMaze`]: 0/1 grids with a configurable wall probability.

All generators are configured with the *builder / setter* pattern and draw from any [`rand::Rng`]:

```
use algo_classics::{prelude::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand::rngs::StdRng::seed_from_u64(1);
let graph: WeightedAdjArrayUndir<u64> = WeightedGnp::new()
    .nodes(10)
    .prob(0.3)
    .weights(1..=9)
    .connected(true)
    .weighted(rng);

assert_eq!(graph.number_of_nodes(), 10);
```
*/

use rand::Rng;

use crate::{prelude::*, utils::*};

mod gnp;
mod maze;
mod mst;

pub use gnp::*;
pub use maze::*;
pub use mst::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}
