use alloc::vec::Vec;

/// A disjoint-set (union-find) forest over the indices `0..len`.
///
/// `find` compresses paths by pointing every node it walks through straight at the root, and
/// `union` attaches the root of the second set under the root of the first one.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            components: len,
        }
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Panics if `node` is out of bounds.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they already were one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        self.parent[root_b] = root_a;
        self.components -= 1;
        true
    }

    pub fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets left.
    pub fn components(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.components(), 4);
        for i in 0..4 {
            assert_eq!(ds.find(i), i);
        }
    }

    #[test]
    fn union_joins_and_is_idempotent() {
        let mut ds = DisjointSet::new(5);
        assert!(ds.union(0, 1));
        assert!(ds.union(1, 2));
        assert!(ds.same(0, 2));
        assert_eq!(ds.find(2), ds.find(2));
        assert_eq!(ds.components(), 3);

        let roots: Vec<_> = (0..5).map(|i| ds.find(i)).collect();
        assert!(!ds.union(2, 0));
        assert_eq!(ds.components(), 3);
        assert_eq!((0..5).map(|i| ds.find(i)).collect::<Vec<_>>(), roots);
        assert!(!ds.same(0, 3));
        assert!(!ds.same(3, 4));
    }

    #[test]
    fn find_compresses_the_whole_path() {
        let mut ds = DisjointSet::new(5);
        // builds the chain 0 -> 1 -> 2 -> 3 -> 4
        for i in 0..4 {
            ds.union(i + 1, i);
        }
        assert_eq!(ds.parent, [1, 2, 3, 4, 4]);
        assert_eq!(ds.find(0), 4);
        assert!(ds.parent.iter().all(|&p| p == 4));
    }
}
