pub mod disjoint_set;
pub mod knapsack;
pub mod mst;
pub(crate) mod scored;
pub mod shortest_path;
pub mod tsp;
