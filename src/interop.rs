//! Conversions between `Graph` and petgraph's `UnGraphMap`, for callers that render graphs or
//! run petgraph's own algorithms on them.

use core::hash::Hash;

use petgraph::graphmap::UnGraphMap;

use crate::edge::SimpleEdge;
use crate::error::Error;
use crate::graph::Graph;
use crate::id::NodeId;
use crate::weight::Weight;

impl<N, W> Graph<N, W>
where
    N: NodeId + Copy + Hash,
    W: Weight,
{
    /// Copies the graph into an `UnGraphMap`, keeping node and edge order.
    ///
    /// `UnGraphMap` stores every edge with its endpoints in ascending order, so an edge given as
    /// `(2, 1)` comes back from `from_graph_map` as `(1, 2)`.
    pub fn to_graph_map(&self) -> UnGraphMap<N, W> {
        let mut map = UnGraphMap::with_capacity(self.node_count(), self.edge_count());
        for &n in self.nodes() {
            map.add_node(n);
        }
        for e in self.indexed_edges() {
            map.add_edge(*self.node(e.source), *self.node(e.target), e.weight);
        }
        map
    }

    /// Builds a graph from an `UnGraphMap`, validating it like any other input.
    pub fn from_graph_map(map: &UnGraphMap<N, W>) -> Result<Self, Error> {
        Self::new(
            map.nodes(),
            map.all_edges()
                .map(|(a, b, &w)| SimpleEdge::new_unchecked(a, b, w)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::example;

    #[test]
    fn round_trips_through_graph_map() {
        let g = example();
        let map = g.to_graph_map();
        assert_eq!(map.node_count(), 7);
        assert_eq!(map.edge_count(), 10);
        assert_eq!(map.edge_weight(4, 3), Some(&1));

        let back = Graph::from_graph_map(&map).unwrap();
        assert_eq!(back.nodes(), g.nodes());
        assert!(back.edges().eq(g.edges()));
    }

    #[test]
    fn graph_map_sorts_edge_endpoints() {
        let g = Graph::from_edges([SimpleEdge::new(2, 1, 7).unwrap()]).unwrap();
        let back = Graph::from_graph_map(&g.to_graph_map()).unwrap();
        assert_eq!(back.nodes(), &[2, 1]);
        assert_eq!(
            back.edges().collect::<alloc::vec::Vec<_>>(),
            [SimpleEdge::new(1, 2, 7).unwrap()]
        );
        assert_eq!(back.edge_weight(&2, &1), Some(7));
    }

    #[test]
    fn rejects_self_loops_from_graph_map() {
        let mut map = UnGraphMap::<u32, f64>::new();
        map.add_edge(1, 1, 0.5);
        assert_eq!(Graph::from_graph_map(&map).unwrap_err(), Error::SelfLoop);
    }
}
