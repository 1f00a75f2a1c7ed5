use core::cmp::Ordering;

use crate::weight::{self, Weight};

/// A binary heap entry ordered so that `BinaryHeap` pops the smallest score first.
///
/// Entries with the same score are popped in ascending order of their payload, which keeps the
/// algorithms deterministic under tied weights.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MinScored<W, T>(pub W, pub T);

impl<W: Weight, T: Ord> PartialEq for MinScored<W, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight, T: Ord> Eq for MinScored<W, T> {}

impl<W: Weight, T: Ord> PartialOrd for MinScored<W, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight, T: Ord> Ord for MinScored<W, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        weight::cmp(&other.0, &self.0).then_with(|| other.1.cmp(&self.1))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BinaryHeap;

    use super::*;

    #[test]
    fn pops_minimum_then_lowest_payload() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(3.0, (0, 1)));
        heap.push(MinScored(1.5, (4, 2)));
        heap.push(MinScored(3.0, (0, 0)));
        heap.push(MinScored(0.5, (9, 9)));

        let order: alloc::vec::Vec<_> = core::iter::from_fn(|| heap.pop())
            .map(|MinScored(w, p)| (w, p))
            .collect();
        assert_eq!(
            order,
            [(0.5, (9, 9)), (1.5, (4, 2)), (3.0, (0, 0)), (3.0, (0, 1))]
        );
    }
}
