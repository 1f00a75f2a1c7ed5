use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;

use super::{complete, MinSpanningTree};
use crate::algo::scored::MinScored;
use crate::error::Error;
use crate::graph::{Graph, IndexedEdge};
use crate::id::NodeId;
use crate::tree::SpanningTree;
use crate::weight::Weight;

/// Prim's algorithm: grow a single tree from the first node, always crossing the cheapest edge
/// out of it.
///
/// Tree edges are oriented from the node already in the tree to the node it reaches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Prim;

impl MinSpanningTree for Prim {
    fn min_spanning_tree<N, W>(&self, graph: &Graph<N, W>) -> Result<SpanningTree<N, W>, Error>
    where
        N: NodeId,
        W: Weight,
    {
        let expected = graph.node_count().saturating_sub(1);
        let mut picked = Vec::with_capacity(expected);
        if graph.is_empty() {
            return complete(graph, &picked);
        }

        let mut visited = vec![false; graph.node_count()];
        let mut frontier = BinaryHeap::new();
        visited[0] = true;
        push_frontier(graph, 0, &visited, &mut frontier);

        while let Some(MinScored(weight, (from, to))) = frontier.pop() {
            // the frontier may hold several edges into the same node
            if visited[to] {
                continue;
            }

            log::trace!("{:?} -- {:?} ({weight})", graph.node(from), graph.node(to));
            visited[to] = true;
            picked.push(IndexedEdge {
                source: from,
                target: to,
                weight,
            });
            if picked.len() == expected {
                break;
            }
            push_frontier(graph, to, &visited, &mut frontier);
        }

        complete(graph, &picked)
    }
}

fn push_frontier<N, W>(
    graph: &Graph<N, W>,
    node: usize,
    visited: &[bool],
    frontier: &mut BinaryHeap<MinScored<W, (usize, usize)>>,
) where
    N: NodeId,
    W: Weight,
{
    graph
        .adjacent(node)
        .iter()
        .filter(|&&(next, _)| !visited[next])
        .for_each(|&(next, weight)| frontier.push(MinScored(weight, (node, next))));
}
