// SPDX-License-Identifier: MIT OR Apache-2.0
//! Min-priority frontier shared by best-first search and Prim's algorithm.
//!
//! Entries are ordered by `(priority, sequence)`, where `sequence` is assigned
//! at push time. Equal priorities therefore pop in insertion order and the
//! payload never has to be comparable.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

struct FrontierEntry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> FrontierEntry<T> {
    fn key(&self) -> (f64, u64) {
        (self.priority, self.sequence)
    }
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (p, s) = self.key();
        let (op, os) = other.key();
        p.total_cmp(&op).then(s.cmp(&os))
    }
}

pub(crate) struct Frontier<T> {
    heap: BinaryHeap<Reverse<FrontierEntry<T>>>,
    next_sequence: u64,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub(crate) fn push(&mut self, priority: f64, item: T) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            sequence,
            item,
        }));
    }

    /// Smallest `(priority, sequence)` entry.
    pub(crate) fn pop(&mut self) -> Option<(f64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.item))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
