// src/client/ordering.rs
use std::sync::atomic::{AtomicU64, Ordering};

/// What to do with a response that arrives after a newer one of the same kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Apply every response as it arrives; the last one to land wins.
    Arrival,
    /// Apply a response only if nothing newer has been applied or cleared.
    #[default]
    Latest,
}

/// Monotonic request tickets for one kind of query.
#[derive(Debug, Default)]
pub struct Tickets {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl Tickets {
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Marks `ticket` as applied. Returns false if a newer ticket already was.
    pub fn accept(&self, ticket: u64) -> bool {
        self.applied.fetch_max(ticket, Ordering::SeqCst) < ticket
    }

    /// Supersedes every ticket issued so far.
    pub fn invalidate(&self) {
        let ticket = self.issue();
        self.applied.fetch_max(ticket, Ordering::SeqCst);
    }
}
