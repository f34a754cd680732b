//! Generic binary min-heap.
//!
//! Ascending extraction only: `push` and `pop`, no decrease-key. Prim's
//! algorithm inserts candidate edges and never updates them in place, so this
//! is all the priority queue it needs. Ties between equal keys are broken
//! arbitrarily.

/// A priority queue implemented with a binary min-heap over a `Vec`.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A reference to the smallest element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element. O(log n).
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest element, or `None` on an empty heap.
    /// O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx] >= self.data[parent] {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.data[right] < self.data[left] {
                smallest = right;
            }
            if self.data[idx] <= self.data[smallest] {
                break;
            }
            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
