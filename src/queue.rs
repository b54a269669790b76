//! Mutex-guarded FIFO of pending work indices.

use std::collections::VecDeque;
use std::sync::Mutex;

/// Shared queue of pending indices, preloaded with `0..n`. `try_pop` performs
/// the empty check and the pop under one lock acquisition, so every index is
/// handed to exactly one caller exactly once and never revisited.
pub struct IndexQueue {
    pending: Mutex<VecDeque<usize>>,
}

impl IndexQueue {
    pub fn new(n: usize) -> Self {
        Self {
            pending: Mutex::new((0..n).collect()),
        }
    }

    /// Pop the front index, or `None` once the queue is drained. Callers run
    /// their work after this returns; nothing executes while the lock is held.
    pub fn try_pop(&self) -> Option<usize> {
        self.pending.lock().expect("index queue lock").pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().expect("index queue lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
