use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::weight::{self, Weight};

/// A weighted undirected edge.
pub trait Edge {
    type NodeId;
    type Weight;

    fn source(&self) -> &Self::NodeId;
    fn target(&self) -> &Self::NodeId;
    fn weight(&self) -> Self::Weight;
}

#[derive(Clone, Debug, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(
    try_from = "RawEdge<N, W>",
    bound(deserialize = "N: PartialEq + Deserialize<'de>, \
                    W: Weight + Deserialize<'de>")
)]
pub struct SimpleEdge<N, W> {
    source: N,
    target: N,
    weight: W,
}

impl<N, W> SimpleEdge<N, W>
where
    N: PartialEq,
    W: Weight,
{
    pub fn new(source: N, target: N, weight: W) -> Result<Self, Error> {
        if source == target {
            return Err(Error::SelfLoop);
        }
        Ok(Self {
            source,
            target,
            weight: weight::validate(weight)?,
        })
    }
}

impl<N, W> SimpleEdge<N, W> {
    /// Builds an edge that was already validated, e.g. one taken from a `Graph`.
    pub(crate) fn new_unchecked(source: N, target: N, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<N, W> Edge for SimpleEdge<N, W>
where
    W: Copy,
{
    type NodeId = N;
    type Weight = W;

    fn source(&self) -> &Self::NodeId {
        &self.source
    }

    fn target(&self) -> &Self::NodeId {
        &self.target
    }

    fn weight(&self) -> Self::Weight {
        self.weight
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct RawEdge<N, W> {
    pub source: N,
    pub target: N,
    pub weight: W,
}

impl<N, W> TryFrom<RawEdge<N, W>> for SimpleEdge<N, W>
where
    N: PartialEq,
    W: Weight,
{
    type Error = Error;

    fn try_from(e: RawEdge<N, W>) -> Result<Self, Self::Error> {
        Self::new(e.source, e.target, e.weight)
    }
}

impl<N, W> From<SimpleEdge<N, W>> for RawEdge<N, W> {
    fn from(e: SimpleEdge<N, W>) -> Self {
        Self {
            source: e.source,
            target: e.target,
            weight: e.weight,
        }
    }
}
