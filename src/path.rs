use alloc::collections::BTreeMap;
use alloc::format;
use alloc::vec::Vec;

use itertools::Itertools;
use serde::Serialize;

use crate::error::Error;
use crate::graph::Graph;
use crate::id::NodeId;
use crate::weight::{self, Weight};

/// A path through a graph: the visited nodes from source to target and its length.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Path<N, W> {
    nodes: Vec<N>,
    distance: W,
}

impl<N, W> Path<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Walks the predecessor links back from `target` and reverses them into a path.
    pub(crate) fn from_predecessors(
        graph: &Graph<N, W>,
        distances: &[Option<W>],
        predecessors: &[Option<usize>],
        target: usize,
    ) -> Result<Self, Error> {
        let distance =
            distances[target].ok_or_else(|| Error::Unreachable(format!("{:?}", graph.node(target))))?;

        let mut nodes = Vec::new();
        let mut current = Some(target);
        while let Some(idx) = current {
            nodes.push(graph.node(idx).clone());
            current = predecessors[idx];
        }
        nodes.reverse();

        Ok(Self { nodes, distance })
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn distance(&self) -> W {
        self.distance
    }

    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Verifies that consecutive nodes are adjacent in `graph` and that the edge weights along the
    /// path add up to the reported distance.
    pub fn check(&self, graph: &Graph<N, W>) -> Result<(), Error> {
        if self.nodes.is_empty() {
            return Err(Error::CheckFailed("path has no nodes".into()));
        }

        let length = self
            .nodes
            .iter()
            .tuple_windows()
            .try_fold(W::zero(), |acc, (a, b)| {
                let w = graph
                    .edge_weight(a, b)
                    .ok_or_else(|| Error::CheckFailed(format!("no edge {a:?} -- {b:?}")))?;
                weight::add(acc, w)
            })?;

        if length != self.distance {
            return Err(Error::CheckFailed(format!(
                "edge weights sum to {length}, not {}",
                self.distance
            )));
        }

        log::debug!("    hops: {}", self.hops());
        log::debug!("distance: {}", self.distance);

        Ok(())
    }
}

/// The result of a single-source shortest path run over the whole graph.
#[derive(Clone, Debug)]
pub struct ShortestPathTree<'a, N, W> {
    graph: &'a Graph<N, W>,
    source: usize,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<usize>>,
}

impl<'a, N, W> ShortestPathTree<'a, N, W>
where
    N: NodeId,
    W: Weight,
{
    pub(crate) fn new(
        graph: &'a Graph<N, W>,
        source: usize,
        distances: Vec<Option<W>>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        Self {
            graph,
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> &N {
        self.graph.node(self.source)
    }

    /// The shortest distance to `node`, or `None` if it is unreachable or not in the graph.
    pub fn distance(&self, node: &N) -> Option<W> {
        let idx = self.graph.index_of(node).ok()?;
        self.distances[idx]
    }

    /// The node preceding `node` on its shortest path.
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        let idx = self.graph.index_of(node).ok()?;
        self.predecessors[idx].map(|p| self.graph.node(p))
    }

    /// Distances to every reachable node, the source included.
    pub fn distances(&self) -> BTreeMap<N, W> {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(idx, d)| d.map(|d| (self.graph.node(idx).clone(), d)))
            .collect()
    }

    pub fn path_to(&self, target: &N) -> Result<Path<N, W>, Error> {
        let target = self.graph.index_of(target)?;
        Path::from_predecessors(self.graph, &self.distances, &self.predecessors, target)
    }
}
