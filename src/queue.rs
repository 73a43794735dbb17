//! The suspended-request queue.
//!
//! An ordered, append-only-until-flush buffer of `(Request, Origin)` pairs
//! accumulated while the gate is paused. Replay order is exactly insertion
//! order. Duplicates are tolerated without corrupting order; the admission
//! check normally prevents the same in-flight item from being enqueued
//! twice, but the caller's retry behavior is not otherwise constrained.

use crate::request::{Origin, Request};
use std::collections::VecDeque;

/// FIFO buffer of requests parked during a pause.
#[derive(Debug, Default)]
pub struct SuspendedQueue {
    entries: VecDeque<(Request, Origin)>,
}

impl SuspendedQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        SuspendedQueue::default()
    }

    /// Appends a request and its origin.
    pub fn enqueue(&mut self, request: Request, origin: Origin) {
        self.entries.push_back((request, origin));
    }

    /// Returns all entries in insertion order and empties the queue.
    pub fn flush(&mut self) -> Vec<(Request, Origin)> {
        self.entries.drain(..).collect()
    }

    /// Empties the queue without returning entries.
    pub fn discard(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of parked requests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
