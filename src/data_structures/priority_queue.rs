use std::fmt::Debug;

use crate::{Error, Result};

/// A single queue slot: an item and the priority it was inserted with
#[derive(Debug, Clone)]
struct HeapEntry<P, T> {
    priority: P,
    item: T,
}

/// Array-backed binary min-heap used as the frontier in shortest path searches
///
/// There is no decrease-key operation. Callers that need to lower an item's
/// priority insert a fresh entry and discard the older one when it surfaces.
/// Entries with equal priorities come out in no particular order.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<P, T>
where
    P: PartialOrd + Copy + Debug,
    T: Debug,
{
    /// Heap-ordered entries: entries[i] <= entries[2i + 1], entries[2i + 2]
    entries: Vec<HeapEntry<P, T>>,
}

impl<P, T> MinPriorityQueue<P, T>
where
    P: PartialOrd + Copy + Debug,
    T: Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            entries: Vec::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Alias of [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an item with the given priority in O(log n)
    pub fn insert(&mut self, priority: P, item: T) {
        self.entries.push(HeapEntry { priority, item });
        self.bubble_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority in O(log n)
    pub fn extract_min(&mut self) -> Result<(P, T)> {
        self.pop().ok_or(Error::EmptyQueue)
    }

    /// Like [`extract_min`](Self::extract_min) but returns `None` on an empty queue
    pub fn pop(&mut self) -> Option<(P, T)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop()?;

        if !self.entries.is_empty() {
            self.bubble_down(0);
        }

        Some((min.priority, min.item))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Result<(&P, &T)> {
        self.entries
            .first()
            .map(|entry| (&entry.priority, &entry.item))
            .ok_or(Error::EmptyQueue)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].priority < self.entries[parent].priority {
                self.entries.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut smaller = left;
            if right < len && self.entries[right].priority < self.entries[left].priority {
                smaller = right;
            }

            // Heap property holds once the parent is no larger than its smaller child
            if self.entries[smaller].priority < self.entries[index].priority {
                self.entries.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<P, T> Default for MinPriorityQueue<P, T>
where
    P: PartialOrd + Copy + Debug,
    T: Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
