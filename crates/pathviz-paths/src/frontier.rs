//! Frontier disciplines: a cost-sorted list for A*, a FIFO queue for
//! Dijkstra and a LIFO stack for DFS.

use std::collections::{BinaryHeap, VecDeque};

use pathviz_core::Point;

use crate::algorithm::Algorithm;

/// A frontier entry. `key` is the metric the cell had when it was enqueued;
/// `seq` orders entries that were enqueued with equal keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) pos: Point,
    pub(crate) key: i32,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first, and
        // among equal keys the one enqueued first.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
enum Entries {
    Sorted(BinaryHeap<Entry>),
    Fifo(VecDeque<Entry>),
    Lifo(Vec<Entry>),
}

/// The discovered-but-not-expanded cells of one search.
///
/// Entries are never removed when a cell is re-enqueued with a better key;
/// the engine skips stale entries as they are popped.
#[derive(Debug)]
pub(crate) struct Frontier {
    entries: Entries,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        let entries = match algorithm {
            Algorithm::BestFirst => Entries::Sorted(BinaryHeap::new()),
            Algorithm::UniformCost => Entries::Fifo(VecDeque::new()),
            Algorithm::DepthFirst => Entries::Lifo(Vec::new()),
        };
        Self {
            entries,
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, pos: Point, key: i32) {
        let entry = Entry {
            pos,
            key,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        match &mut self.entries {
            Entries::Sorted(heap) => heap.push(entry),
            Entries::Fifo(queue) => queue.push_back(entry),
            Entries::Lifo(stack) => stack.push(entry),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        match &mut self.entries {
            Entries::Sorted(heap) => heap.pop(),
            Entries::Fifo(queue) => queue.pop_front(),
            Entries::Lifo(stack) => stack.pop(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match &self.entries {
            Entries::Sorted(heap) => heap.len(),
            Entries::Fifo(queue) => queue.len(),
            Entries::Lifo(stack) => stack.len(),
        }
    }
}
