mod dijkstra;

pub use dijkstra::Dijkstra;

use crate::error::Error;
use crate::graph::Graph;
use crate::id::NodeId;
use crate::path::Path;
use crate::weight::Weight;

/// A single-pair shortest path algorithm.
pub trait ShortestPath {
    /// Finds a shortest path from `source` to `target`.
    ///
    /// Fails with `Error::UnknownNode` if either node is not in `graph` and with
    /// `Error::Unreachable` if no path connects them.
    fn shortest_path<N, W>(
        &self,
        graph: &Graph<N, W>,
        source: &N,
        target: &N,
    ) -> Result<Path<N, W>, Error>
    where
        N: NodeId,
        W: Weight;
}
