//! Frontier data structures for the search engine.
//!
//! A frontier is the open set of not-yet-expanded nodes. The traversal
//! order of each search algorithm falls out of the frontier it uses:
//!
//! - `StackFrontier` (LIFO) drives depth-first search
//! - `QueueFrontier` (FIFO) drives breadth-first search
//! - `PriorityFrontier` (stable min-heap) drives uniform-cost and A*
//!
//! Stack and queue ignore the priority argument entirely; the priority
//! queue breaks ties by insertion order via a monotonic sequence number,
//! so equal-priority pops are deterministic.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Frontier trait shared by all three orderings.
pub trait Frontier<T> {
    /// Push an item. `priority` is only meaningful for priority frontiers;
    /// lower priorities pop first.
    fn push(&mut self, item: T, priority: f64);

    /// Pop the next item under this frontier's ordering.
    fn pop(&mut self) -> Option<T>;

    /// Number of items currently held.
    fn len(&self) -> usize;

    /// Whether the frontier is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO frontier: pops the most recently pushed item.
#[derive(Clone, Debug, Default)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    /// Create an empty stack frontier.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// FIFO frontier: pops the earliest pushed item.
#[derive(Clone, Debug, Default)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    /// Create an empty queue frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Heap entry: priority plus insertion sequence for stable tie-breaking.
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the lowest priority wins,
        // then the lowest sequence number (earliest insertion).
        // Undefined comparisons (NaN priorities) fall back to insertion order.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Stable min-priority frontier.
///
/// Pops the item with the lowest priority; insertion order breaks ties.
#[derive(Default)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> PriorityFrontier<T> {
    /// Create an empty priority frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
