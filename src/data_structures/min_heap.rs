use std::fmt::Debug;

/// A binary min-heap of `(vertex, priority)` entries used as the priority
/// queue for shortest path computation.
///
/// There is no decrease-key operation: when a vertex's tentative distance
/// improves, the caller pushes a fresh entry and the outdated ones stay in
/// the heap. The consumer is expected to filter those stale entries at pop
/// time (by checking its visited set), so the same vertex may legitimately
/// appear here more than once.
#[derive(Debug, Clone)]
pub struct MinHeap<W>
where
    W: Copy + Ord + Debug,
{
    /// Entries in heap order: every parent's priority is <= its children's
    entries: Vec<(usize, W)>,
}

impl<W> MinHeap<W>
where
    W: Copy + Ord + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Creates a heap with pre-allocated room for `capacity` entries.
    ///
    /// The backing store still grows on demand; in the shortest path loop a
    /// capacity of one entry per edge plus one per vertex covers the worst
    /// case of duplicate pushes without reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries, counting duplicates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pushes an entry, sifting it up while it is strictly smaller than its
    /// parent
    pub fn push(&mut self, vertex: usize, priority: W) {
        self.entries.push((vertex, priority));
        let mut i = self.entries.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if priority < self.entries[parent].1 {
                self.entries.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Removes and returns the minimum-priority entry, or `None` if the
    /// heap is empty.
    ///
    /// Ties between children during the sift-down resolve to the left child
    /// unless the left priority is strictly greater than the right, which
    /// fixes the drain order among equal priorities.
    pub fn pop(&mut self) -> Option<(usize, W)> {
        if self.entries.is_empty() {
            return None;
        }
        let min = self.entries.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    /// Returns the minimum-priority entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.entries.first().copied()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.entries[left].1 > self.entries[right].1 {
                child = right;
            }
            if self.entries[child].1 < self.entries[i].1 {
                self.entries.swap(i, child);
                i = child;
            } else {
                break;
            }
        }
    }
}

impl<W> Default for MinHeap<W>
where
    W: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
