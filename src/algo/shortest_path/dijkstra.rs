use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;

use super::ShortestPath;
use crate::algo::scored::MinScored;
use crate::error::Error;
use crate::graph::Graph;
use crate::id::NodeId;
use crate::path::{Path, ShortestPathTree};
use crate::weight::{self, Weight};

/// Dijkstra's label-setting shortest path algorithm.
///
/// Weights must be non-negative, which `Graph` already guarantees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl Dijkstra {
    /// Computes shortest distances and predecessors from `source` to every node of `graph`.
    pub fn shortest_path_tree<'a, N, W>(
        &self,
        graph: &'a Graph<N, W>,
        source: &N,
    ) -> Result<ShortestPathTree<'a, N, W>, Error>
    where
        N: NodeId,
        W: Weight,
    {
        let source = graph.index_of(source)?;
        let (distances, predecessors) = run(graph, source, None)?;
        Ok(ShortestPathTree::new(graph, source, distances, predecessors))
    }
}

impl ShortestPath for Dijkstra {
    fn shortest_path<N, W>(
        &self,
        graph: &Graph<N, W>,
        source: &N,
        target: &N,
    ) -> Result<Path<N, W>, Error>
    where
        N: NodeId,
        W: Weight,
    {
        let source = graph.index_of(source)?;
        let target = graph.index_of(target)?;
        let (distances, predecessors) = run(graph, source, Some(target))?;
        Path::from_predecessors(graph, &distances, &predecessors, target)
    }
}

/// Returns the distance (`None` for infinity) and predecessor of every node. Stops as soon as
/// `target` is settled, in which case only the entries along its path are final.
///
/// A relaxation whose sum does not fit in `W` is skipped, since any representable distance is
/// shorter. A node that is only reachable through such sums fails with `ArithmeticOverflow`.
fn run<N, W>(
    graph: &Graph<N, W>,
    source: usize,
    target: Option<usize>,
) -> Result<(Vec<Option<W>>, Vec<Option<usize>>), Error>
where
    N: NodeId,
    W: Weight,
{
    let mut distances = vec![None; graph.node_count()];
    let mut predecessors = vec![None; graph.node_count()];
    let mut settled = vec![false; graph.node_count()];
    let mut overflowed = vec![false; graph.node_count()];
    let mut queue = BinaryHeap::new();

    distances[source] = Some(W::zero());
    queue.push(MinScored(W::zero(), source));

    while let Some(MinScored(distance, node)) = queue.pop() {
        // stale entry, the node was settled through a shorter path
        if settled[node] {
            continue;
        }
        settled[node] = true;
        if Some(node) == target {
            break;
        }

        for &(next, weight) in graph.adjacent(node) {
            if settled[next] {
                continue;
            }
            let Ok(candidate) = weight::add(distance, weight) else {
                overflowed[next] = true;
                continue;
            };
            if distances[next].map_or(true, |known| candidate < known) {
                log::trace!(
                    "relax {:?} -> {:?}: {candidate}",
                    graph.node(node),
                    graph.node(next)
                );
                distances[next] = Some(candidate);
                predecessors[next] = Some(node);
                queue.push(MinScored(candidate, next));
            }
        }
    }

    log::debug!(
        "settled {} of {} nodes",
        settled.iter().filter(|&&s| s).count(),
        graph.node_count()
    );

    let unrepresentable = |idx: usize| distances[idx].is_none() && overflowed[idx];
    let failed = match target {
        Some(target) => unrepresentable(target),
        None => (0..graph.node_count()).any(unrepresentable),
    };
    if failed {
        return Err(Error::ArithmeticOverflow);
    }

    Ok((distances, predecessors))
}
