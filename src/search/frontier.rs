//! Containers of pending search nodes. Each search engine pairs one of these
//! with a [`crate::search::SearchSpace`]; the containers themselves know
//! nothing about states or plans.

use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

/// A frontier whose order is fixed by insertion alone.
pub trait Frontier<T> {
    fn push(&mut self, item: T);

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First in, first out.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Min-priority frontier holding each item at most once. Pushing an item
/// that is already present lowers its priority if the new one is smaller
/// (decrease-key) and is ignored otherwise. Equal priorities pop in the
/// order they were last pushed.
#[derive(Debug)]
pub struct PriorityFrontier<I, P>
where
    I: Hash + Eq,
    P: Ord + Copy,
{
    queue: PriorityQueue<I, Reverse<(P, u64)>>,
    next_sequence: u64,
}

impl<I, P> PriorityFrontier<I, P>
where
    I: Hash + Eq,
    P: Ord + Copy,
{
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    /// Returns whether the item was inserted or its priority lowered.
    pub fn push(&mut self, item: I, priority: P) -> bool {
        let current = self
            .queue
            .get_priority(&item)
            .map(|Reverse((current, _))| *current);
        match current {
            Some(current) if current <= priority => false,
            Some(_) => {
                let sequence = self.sequence();
                self.queue
                    .change_priority(&item, Reverse((priority, sequence)));
                true
            }
            None => {
                let sequence = self.sequence();
                self.queue.push(item, Reverse((priority, sequence)));
                true
            }
        }
    }

    pub fn pop(&mut self) -> Option<(I, P)> {
        self.queue
            .pop()
            .map(|(item, Reverse((priority, _)))| (item, priority))
    }

    pub fn priority(&self, item: &I) -> Option<P> {
        self.queue
            .get_priority(item)
            .map(|Reverse((priority, _))| *priority)
    }

    pub fn contains(&self, item: &I) -> bool {
        self.queue.get(item).is_some()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }
}

impl<I, P> Default for PriorityFrontier<I, P>
where
    I: Hash + Eq,
    P: Ord + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Min-priority frontier that keeps duplicates. Callers skip entries that
/// have gone stale when they pop them. Equal priorities pop in insertion
/// order.
#[derive(Debug)]
pub struct HeapFrontier<I: Ord, P: Ord> {
    heap: BinaryHeap<Reverse<(P, u64, I)>>,
    next_sequence: u64,
}

impl<I: Ord, P: Ord> HeapFrontier<I, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: I, priority: P) {
        self.heap
            .push(Reverse((priority, self.next_sequence, item)));
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<(I, P)> {
        self.heap
            .pop()
            .map(|Reverse((priority, _, item))| (item, priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<I: Ord, P: Ord> Default for HeapFrontier<I, P> {
    fn default() -> Self {
        Self::new()
    }
}
