use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use gridpath_core::Cell;

use crate::strategy::FrontierKind;

/// A frontier entry: a cell and the cost at which it was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) cell: Cell,
    pub(crate) idx: usize,
    pub(crate) g: i32,
}

/// Heap entry ordered by `(key, cell)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Keyed {
    key: (i32, i32),
    entry: Entry,
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        (other.key, other.entry.cell).cmp(&(self.key, self.entry.cell))
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Discovered-but-not-yet-expanded cells.
pub(crate) enum Frontier {
    Heap(BinaryHeap<Keyed>),
    Fifo(VecDeque<Entry>),
    Lifo(Vec<Entry>),
}

impl Frontier {
    pub(crate) fn new(kind: FrontierKind) -> Self {
        match kind {
            FrontierKind::Heap => Self::Heap(BinaryHeap::new()),
            FrontierKind::Fifo => Self::Fifo(VecDeque::new()),
            FrontierKind::Lifo => Self::Lifo(Vec::new()),
        }
    }

    /// Add an entry. `key` is ignored by the queue and stack variants.
    #[inline]
    pub(crate) fn push(&mut self, key: (i32, i32), entry: Entry) {
        match self {
            Self::Heap(h) => h.push(Keyed { key, entry }),
            Self::Fifo(q) => q.push_back(entry),
            Self::Lifo(s) => s.push(entry),
        }
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        match self {
            Self::Heap(h) => h.pop().map(|k| k.entry),
            Self::Fifo(q) => q.pop_front(),
            Self::Lifo(s) => s.pop(),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Heap(h) => h.len(),
            Self::Fifo(q) => q.len(),
            Self::Lifo(s) => s.len(),
        }
    }
}
