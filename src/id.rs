use alloc::string::String;
use core::fmt::Debug;

/// A trait representing a node identifier.
pub trait NodeId: Clone + Ord + Debug {}

impl NodeId for i32 {}

impl NodeId for i64 {}

impl NodeId for u32 {}

impl NodeId for u64 {}

impl NodeId for usize {}

impl NodeId for char {}

impl NodeId for String {}

impl NodeId for &str {}
