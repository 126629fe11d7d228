//! Frontier containers holding discovered-but-unprocessed vertices
//! during a single traversal. Created and dropped within one call.
use std::collections::VecDeque;

/// A LIFO frontier. Depth-first traversals pop the most recently
/// discovered vertex first.
#[derive(Debug, Default)]
pub struct Stack<T>(Vec<T>);

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}

/// A FIFO frontier. Breadth-first traversals dequeue the earliest
/// discovered vertex first.
#[derive(Debug, Default)]
pub struct Queue<T>(VecDeque<T>);

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    pub fn enqueue(&mut self, item: T) {
        self.0.push_back(item)
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}
