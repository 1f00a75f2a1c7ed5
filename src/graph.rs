use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::vec::Vec;

use crate::edge::{Edge, SimpleEdge};
use crate::error::Error;
use crate::id::NodeId;
use crate::weight::{self, Weight};

/// An edge stored by the contiguous indices of its endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct IndexedEdge<W> {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) weight: W,
}

/// A finite weighted undirected graph without self-loops or parallel edges.
///
/// Nodes are mapped to contiguous indices in the order they were given, so the algorithms can
/// work on flat arrays. Edges keep their input order and orientation, which makes the output of
/// every algorithm reproducible.
#[derive(Clone, Debug)]
pub struct Graph<N, W> {
    nodes: Vec<N>,
    indices: BTreeMap<N, usize>,
    edges: Vec<IndexedEdge<W>>,
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<N, W> Graph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Builds a graph from an explicit node list and a list of edges between those nodes.
    pub fn new<NI, EI, E>(nodes: NI, edges: EI) -> Result<Self, Error>
    where
        NI: IntoIterator<Item = N>,
        EI: IntoIterator<Item = E>,
        E: Edge<NodeId = N, Weight = W>,
    {
        let mut graph = Self {
            nodes: Vec::new(),
            indices: BTreeMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        };

        for n in nodes {
            if graph.indices.contains_key(&n) {
                return Err(Error::DuplicateNode(format!("{n:?}")));
            }
            graph.indices.insert(n.clone(), graph.nodes.len());
            graph.nodes.push(n);
            graph.adjacency.push(Vec::new());
        }

        for e in edges {
            graph.insert_edge(e.source(), e.target(), e.weight())?;
        }

        log::trace!(
            "graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Builds a graph whose node set is every endpoint of `edges`, in first-seen order.
    pub fn from_edges<EI, E>(edges: EI) -> Result<Self, Error>
    where
        EI: IntoIterator<Item = E>,
        E: Edge<NodeId = N, Weight = W>,
    {
        let edges: Vec<E> = edges.into_iter().collect();
        let (nodes, _) = edges.iter().fold(
            (Vec::new(), BTreeSet::new()),
            |(mut nodes, mut seen), e| {
                for n in [e.source(), e.target()] {
                    if seen.insert(n.clone()) {
                        nodes.push(n.clone());
                    }
                }
                (nodes, seen)
            },
        );

        Self::new(nodes, edges)
    }

    fn insert_edge(&mut self, source: &N, target: &N, weight: W) -> Result<(), Error> {
        let u = self.index_of(source)?;
        let v = self.index_of(target)?;
        if u == v {
            return Err(Error::SelfLoop);
        }
        let weight = weight::validate(weight)?;
        if self.adjacency[u].iter().any(|&(n, _)| n == v) {
            return Err(Error::ParallelEdge(format!("{source:?} and {target:?}")));
        }

        self.edges.push(IndexedEdge {
            source: u,
            target: v,
            weight,
        });
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.indices.contains_key(node)
    }

    /// All edges in input order and orientation.
    pub fn edges(&self) -> impl Iterator<Item = SimpleEdge<N, W>> + '_ {
        self.edges.iter().map(|e| self.edge_at(e))
    }

    /// The weight of the edge between `a` and `b`, in either orientation.
    pub fn edge_weight(&self, a: &N, b: &N) -> Option<W> {
        let u = *self.indices.get(a)?;
        let v = *self.indices.get(b)?;
        self.adjacency[u]
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, w)| w)
    }

    /// The neighbors of `node` along with the weight of the connecting edge.
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = (&N, W)> + '_, Error> {
        let u = self.index_of(node)?;
        Ok(self.adjacency[u].iter().map(|&(v, w)| (&self.nodes[v], w)))
    }

    pub(crate) fn index_of(&self, node: &N) -> Result<usize, Error> {
        self.indices
            .get(node)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{node:?}")))
    }

    pub(crate) fn node(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub(crate) fn indexed_edges(&self) -> &[IndexedEdge<W>] {
        &self.edges
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[(usize, W)] {
        &self.adjacency[idx]
    }

    pub(crate) fn edge_at(&self, e: &IndexedEdge<W>) -> SimpleEdge<N, W> {
        SimpleEdge::new_unchecked(
            self.nodes[e.source].clone(),
            self.nodes[e.target].clone(),
            e.weight,
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    /// The seven node example network used across the test suite.
    pub(crate) fn example() -> Graph<i32, i32> {
        Graph::new(1..=7, example_edges()).unwrap()
    }

    pub(crate) fn example_edges() -> Vec<SimpleEdge<i32, i32>> {
        [
            (1, 2, 3),
            (1, 3, 2),
            (2, 4, 6),
            (2, 5, 5),
            (3, 4, 1),
            (3, 6, 4),
            (4, 5, 2),
            (5, 7, 3),
            (6, 7, 4),
            (4, 6, 3),
        ]
        .into_iter()
        .map(|(a, b, w)| SimpleEdge::new(a, b, w).unwrap())
        .collect()
    }

    #[test]
    fn builds_index_and_adjacency() {
        let g = example();
        assert_eq!(g.node_count(), 7);
        assert_eq!(g.edge_count(), 10);
        assert_eq!(g.edge_weight(&4, &3), Some(1));
        assert_eq!(g.edge_weight(&1, &7), None);
        assert_eq!(g.edge_weight(&1, &42), None);

        let mut nbrs: Vec<_> = g.neighbors(&4).unwrap().map(|(n, w)| (*n, w)).collect();
        nbrs.sort();
        assert_eq!(nbrs, vec![(2, 6), (3, 1), (5, 2), (6, 3)]);
        assert_eq!(g.edges().next(), Some(SimpleEdge::new(1, 2, 3).unwrap()));
    }

    #[test]
    fn from_edges_infers_nodes_in_first_seen_order() {
        let g = Graph::from_edges(example_edges()).unwrap();
        assert_eq!(g.nodes(), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            Graph::<i32, i32>::new([1, 2, 1], Vec::<SimpleEdge<i32, i32>>::new()).unwrap_err(),
            Error::DuplicateNode("1".into())
        );
        assert_eq!(
            Graph::new([1, 2], [SimpleEdge::new(1, 3, 1).unwrap()]).unwrap_err(),
            Error::UnknownNode("3".into())
        );
        assert_eq!(
            Graph::new(
                [1, 2],
                [
                    SimpleEdge::new(1, 2, 1).unwrap(),
                    SimpleEdge::new(2, 1, 5).unwrap()
                ]
            )
            .unwrap_err(),
            Error::ParallelEdge("2 and 1".into())
        );
        assert_eq!(
            Graph::from_edges([SimpleEdge::new_unchecked(1, 2, -4)]).unwrap_err(),
            Error::NegativeWeight
        );
    }
}
