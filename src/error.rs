use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    /// Invalid edge where source and target are the same node
    SelfLoop,
    /// Invalid edge weight, expected non-negative value
    NegativeWeight,
    /// Invalid weight that cannot be compared (NaN)
    IncomparableWeight,
    /// Node {0} is listed more than once
    DuplicateNode(String),
    /// Unknown node {0}
    UnknownNode(String),
    /// Parallel edge between {0}
    ParallelEdge(String),
    /// Graph is disconnected: found {found} of {expected} spanning tree edges
    Disconnected { found: usize, expected: usize },
    /// Target {0} is unreachable from the source
    Unreachable(String),
    /// Distance matrix is empty
    EmptyMatrix,
    /// Distance matrix is not square
    NonSquareMatrix,
    /// Invalid item weight, expected positive value
    NonPositiveItemWeight,
    /// Invalid item value, expected non-negative value
    NegativeItemValue,
    /// Invalid knapsack capacity, expected non-negative value
    NegativeCapacity,
    /// Arithmetic overflow while adding weights
    ArithmeticOverflow,
    /// Result check failed: {0}
    CheckFailed(String),
}

impl core::error::Error for Error {}
