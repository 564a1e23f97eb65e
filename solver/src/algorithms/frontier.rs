//! Ordering policies for the search frontier.
//!
//! Every search pushes `(key, item)` pairs and pops items back out; the
//! policy alone decides which item comes next. An empty pop means the
//! frontier is exhausted, which is a normal end of search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

pub trait Frontier<T> {
    fn push(&mut self, key: usize, item: T);

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// first in, first out; the key is ignored
pub struct Fifo<T> {
    queue: VecDeque<T>,
}

impl<T> Fifo<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Fifo<T> {
    fn push(&mut self, _key: usize, item: T) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// last in, first out; the key is ignored
pub struct Lifo<T> {
    stack: Vec<T>,
}

impl<T> Lifo<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Lifo<T> {
    fn push(&mut self, _key: usize, item: T) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

struct Keyed<T> {
    key: usize,
    seq: u64,
    item: T,
}

// ordered on (key, seq) only, reversed so the max-heap pops the smallest
impl<T> Ord for Keyed<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Keyed<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Keyed<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for Keyed<T> {}

/// Min-heap on the key. Equal keys pop in insertion order.
pub struct Priority<T> {
    heap: BinaryHeap<Keyed<T>>,
    next_seq: u64,
}

impl<T> Priority<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Default for Priority<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Priority<T> {
    fn push(&mut self, key: usize, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Keyed { key, seq, item });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|keyed| keyed.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
