//! Disjoint-set (union-find) with union by size and path compression.
//!
//! Tracks equivalence classes over a fixed range of indices. Each slot of the
//! backing array either is a root holding the negated size of its group, or a
//! child holding its parent's index. With the size-balanced union and full
//! path compression combined, any sequence of m operations on n elements runs
//! in O(m log n) amortized.

use std::fmt;

/// A disjoint-set structure over the indices `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Negative at a root (negated group size), parent index otherwise.
    items: Vec<isize>,
    /// Number of distinct groups currently alive.
    groups: usize,
}

impl UnionFind {
    /// Creates `n` singleton groups. Capacity is fixed for the structure's
    /// lifetime.
    pub fn new(n: usize) -> Self {
        Self {
            items: vec![-1; n],
            groups: n,
        }
    }

    /// Number of elements the structure was created with.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct groups. O(1).
    pub fn count_groups(&self) -> usize {
        self.groups
    }

    /// Returns the root index of the group containing `idx`, or `None` for an
    /// out-of-range index.
    ///
    /// Performs full path compression: every element visited on the walk up
    /// is relinked directly to the discovered root. Compression changes only
    /// the internal links, never which root an element maps to.
    pub fn find(&mut self, idx: usize) -> Option<usize> {
        if idx >= self.items.len() {
            return None;
        }

        // Walk up to the root; roots hold their group size, negated.
        let mut root = idx;
        while self.items[root] >= 0 {
            root = self.items[root] as usize;
        }

        // Second pass: point everything on the walk directly at the root.
        let mut cur = idx;
        while self.items[cur] >= 0 {
            let parent = self.items[cur] as usize;
            self.items[cur] = root as isize;
            cur = parent;
        }

        Some(root)
    }

    /// Merges the groups containing `a` and `b`.
    ///
    /// Returns `false` and leaves the state untouched when either index is
    /// out of range or both already share a root. Otherwise the smaller
    /// group's root is linked under the larger group's root (ties link `b`'s
    /// root under `a`'s), the group counter drops by one, and `true` comes
    /// back.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }

        // Sizes are stored negated, so the more negative root owns the
        // larger group.
        if self.items[root_b] < self.items[root_a] {
            self.items[root_b] += self.items[root_a];
            self.items[root_a] = root_b as isize;
        } else {
            self.items[root_a] += self.items[root_b];
            self.items[root_b] = root_a as isize;
        }

        self.groups -= 1;
        true
    }

    /// True if `a` and `b` belong to the same group; `false` as well when
    /// either index is out of range.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Groups: {}\n[", self.groups)?;
        for (i, item) in self.items.iter().enumerate() {
            write!(f, "({} : {})", i, item)?;
            if i != self.items.len() - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, "]")
    }
}
