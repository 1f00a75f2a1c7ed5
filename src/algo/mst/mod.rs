mod boruvka;
mod kruskal;
mod prim;

pub use boruvka::Boruvka;
pub use kruskal::Kruskal;
pub use prim::Prim;

use crate::error::Error;
use crate::graph::{Graph, IndexedEdge};
use crate::id::NodeId;
use crate::tree::SpanningTree;
use crate::weight::Weight;

/// A minimum spanning tree algorithm.
pub trait MinSpanningTree {
    /// Computes a minimum spanning tree of `graph`.
    ///
    /// Fails with `Error::Disconnected` rather than returning a spanning forest when no single
    /// tree reaches every node.
    fn min_spanning_tree<N, W>(&self, graph: &Graph<N, W>) -> Result<SpanningTree<N, W>, Error>
    where
        N: NodeId,
        W: Weight;
}

fn complete<N, W>(graph: &Graph<N, W>, picked: &[IndexedEdge<W>]) -> Result<SpanningTree<N, W>, Error>
where
    N: NodeId,
    W: Weight,
{
    let expected = graph.node_count().saturating_sub(1);
    if picked.len() < expected {
        log::debug!("spanning tree stopped at {} of {expected} edges", picked.len());
        return Err(Error::Disconnected {
            found: picked.len(),
            expected,
        });
    }

    SpanningTree::from_indexed(graph, picked)
}
