use alloc::vec;
use alloc::vec::Vec;

use super::{complete, MinSpanningTree};
use crate::algo::disjoint_set::DisjointSet;
use crate::error::Error;
use crate::graph::Graph;
use crate::id::NodeId;
use crate::tree::SpanningTree;
use crate::weight::Weight;

/// Borůvka's algorithm: in every round each component picks its cheapest outgoing edge, and all
/// picked edges are added at once.
///
/// Ties are broken by input order, so the picked edges never form a cycle and every round at
/// least halves the number of components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boruvka;

impl MinSpanningTree for Boruvka {
    fn min_spanning_tree<N, W>(&self, graph: &Graph<N, W>) -> Result<SpanningTree<N, W>, Error>
    where
        N: NodeId,
        W: Weight,
    {
        let edges = graph.indexed_edges();
        let mut components = DisjointSet::new(graph.node_count());
        let mut picked = Vec::with_capacity(graph.node_count().saturating_sub(1));
        let mut round = 0;

        while components.components() > 1 {
            round += 1;

            // index of the cheapest edge leaving each component, keyed by its representative
            let mut cheapest: Vec<Option<usize>> = vec![None; graph.node_count()];
            for (idx, e) in edges.iter().enumerate() {
                let (a, b) = (components.find(e.source), components.find(e.target));
                if a == b {
                    continue;
                }
                for root in [a, b] {
                    if cheapest[root].map_or(true, |best| e.weight < edges[best].weight) {
                        cheapest[root] = Some(idx);
                    }
                }
            }

            let before = components.components();
            // an edge picked by both of its components is only added once
            for e in cheapest.into_iter().flatten().map(|idx| &edges[idx]) {
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

            log::debug!(
                "round {round}: {before} -> {} components",
                components.components()
            );
            if components.components() == before {
                // no edge leaves any component
                break;
            }
        }

        complete(graph, &picked)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::edge::{Edge, SimpleEdge};
    use crate::graph::tests::example;

    #[test]
    fn finishes_example_in_one_round() {
        let tree = Boruvka.min_spanning_tree(&example()).unwrap();
        let edges: Vec<_> = tree
            .edges()
            .iter()
            .map(|e| (*e.source(), *e.target(), e.weight()))
            .collect();
        assert_eq!(
            edges,
            [(1, 3, 2), (1, 2, 3), (3, 4, 1), (4, 5, 2), (4, 6, 3), (5, 7, 3)]
        );
        assert_eq!(tree.total_weight(), 14);
    }

    #[test]
    fn needs_several_rounds_on_a_path() {
        // 1 -1- 2 -5- 3 -1- 4 -5- 5 -1- 6: the light edges pair up the nodes in the first
        // round, the heavy ones join the pairs in the second
        let g = Graph::from_edges((1..6).map(|i| {
            let w: u32 = if i % 2 == 1 { 1 } else { 5 };
            SimpleEdge::new(i, i + 1, w).unwrap()
        }))
        .unwrap();
        let tree = Boruvka.min_spanning_tree(&g).unwrap();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.total_weight(), 13);
        assert_eq!(tree.check(&g), Ok(()));
    }

    #[test]
    fn tied_weights_do_not_form_cycles() {
        let g = Graph::from_edges([
            SimpleEdge::new(0, 1, 2).unwrap(),
            SimpleEdge::new(1, 2, 2).unwrap(),
            SimpleEdge::new(2, 0, 2).unwrap(),
            SimpleEdge::new(2, 3, 2).unwrap(),
        ])
        .unwrap();
        let tree = Boruvka.min_spanning_tree(&g).unwrap();
        assert_eq!(tree.total_weight(), 6);
        assert_eq!(tree.check(&g), Ok(()));
    }
}
