//! Classic combinatorial optimization algorithms over small weighted networks.
//!
//! The core covers minimum spanning trees ([`Kruskal`], [`Prim`], [`Boruvka`]) and single-source
//! shortest paths ([`Dijkstra`]) on an undirected [`Graph`], plus the greedy construction
//! heuristics for the travelling salesman ([`tsp`]) and knapsack ([`knapsack`]) problems.
//!
//! Every input is validated when it is built, and every algorithm returns an explicit [`Error`]
//! instead of a partial result when the input does not admit a solution.

#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
mod edge;
mod error;
mod graph;
mod id;
mod interop;
mod path;
mod tree;
mod weight;

pub use algo::disjoint_set::DisjointSet;
pub use algo::knapsack;
pub use algo::mst::{Boruvka, Kruskal, MinSpanningTree, Prim};
pub use algo::shortest_path::{Dijkstra, ShortestPath};
pub use algo::tsp;
pub use edge::{Edge, RawEdge, SimpleEdge};
pub use error::Error;
pub use graph::Graph;
pub use id::NodeId;
pub use path::{Path, ShortestPathTree};
pub use tree::SpanningTree;
pub use weight::Weight;
