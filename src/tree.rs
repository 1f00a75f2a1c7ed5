use alloc::format;
use alloc::vec::Vec;

use serde::Serialize;

use crate::algo::disjoint_set::DisjointSet;
use crate::edge::{Edge, SimpleEdge};
use crate::error::Error;
use crate::graph::{Graph, IndexedEdge};
use crate::id::NodeId;
use crate::weight::{self, Weight};

/// A minimum spanning tree: its edges in the order they were selected and their total weight.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpanningTree<N, W> {
    edges: Vec<SimpleEdge<N, W>>,
    total_weight: W,
}

impl<N, W> SpanningTree<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub(crate) fn from_indexed(
        graph: &Graph<N, W>,
        edges: &[IndexedEdge<W>],
    ) -> Result<Self, Error> {
        Ok(Self {
            edges: edges.iter().map(|e| graph.edge_at(e)).collect(),
            total_weight: weight::sum(edges.iter().map(|e| e.weight))?,
        })
    }

    pub fn edges(&self) -> &[SimpleEdge<N, W>] {
        &self.edges
    }

    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_edges(self) -> Vec<SimpleEdge<N, W>> {
        self.edges
    }

    /// Verifies that this is a spanning tree of `graph`: one edge less than there are nodes, every
    /// edge taken from the graph with its weight, no cycles, and a consistent total weight.
    pub fn check(&self, graph: &Graph<N, W>) -> Result<(), Error> {
        let expected = graph.node_count().saturating_sub(1);
        if self.edges.len() != expected {
            return Err(Error::CheckFailed(format!(
                "expected {expected} edges, found {}",
                self.edges.len()
            )));
        }

        let mut components = DisjointSet::new(graph.node_count());
        for e in &self.edges {
            let (s, t) = (e.source(), e.target());
            match graph.edge_weight(s, t) {
                None => {
                    return Err(Error::CheckFailed(format!(
                        "edge {s:?} -- {t:?} is not in the graph"
                    )))
                }
                Some(w) if w != e.weight() => {
                    return Err(Error::CheckFailed(format!(
                        "edge {s:?} -- {t:?} has weight {w}, not {}",
                        e.weight()
                    )))
                }
                Some(_) => {}
            }
            if !components.union(graph.index_of(s)?, graph.index_of(t)?) {
                return Err(Error::CheckFailed(format!(
                    "edge {s:?} -- {t:?} closes a cycle"
                )));
            }
        }

        let total = weight::sum(self.edges.iter().map(|e| e.weight()))?;
        if total != self.total_weight {
            return Err(Error::CheckFailed(format!(
                "edge weights sum to {total}, not {}",
                self.total_weight
            )));
        }

        log::debug!("           nodes: {}", graph.node_count());
        log::debug!("           edges: {}", graph.edge_count());
        log::debug!("      tree edges: {}", self.edges.len());
        log::debug!("    total weight: {}", self.total_weight);

        Ok(())
    }
}
