use alloc::vec::Vec;

use itertools::Itertools;

use super::{complete, MinSpanningTree};
use crate::algo::disjoint_set::DisjointSet;
use crate::error::Error;
use crate::graph::Graph;
use crate::id::NodeId;
use crate::tree::SpanningTree;
use crate::weight::{self, Weight};

/// Kruskal's algorithm: scan the edges by ascending weight and keep every edge that joins two
/// different components.
///
/// Edges of equal weight are taken in input order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kruskal;

impl MinSpanningTree for Kruskal {
    fn min_spanning_tree<N, W>(&self, graph: &Graph<N, W>) -> Result<SpanningTree<N, W>, Error>
    where
        N: NodeId,
        W: Weight,
    {
        let expected = graph.node_count().saturating_sub(1);
        let mut components = DisjointSet::new(graph.node_count());
        let mut picked = Vec::with_capacity(expected);

        for e in graph
            .indexed_edges()
            .iter()
            .sorted_by(|a, b| weight::cmp(&a.weight, &b.weight))
        {
            if picked.len() == expected {
                break;
            }
            if components.union(e.source, e.target) {
                log::trace!(
                    "{:?} -- {:?} ({})",
                    graph.node(e.source),
                    graph.node(e.target),
                    e.weight
                );
                picked.push(*e);
            }
        }

        complete(graph, &picked)
    }
}
