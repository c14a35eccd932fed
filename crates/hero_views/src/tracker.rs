//! Tracking of in-flight requests so late answers can be dropped.

use std::cell::Cell;
use std::rc::Rc;

/// Hands out tickets; only the most recent one is current.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
}

/// Proof that a request was started at a given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    /// Whether no newer request was started since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Invalidate every outstanding ticket.
    pub fn cancel(&self) {
        self.begin();
    }
}
