//! Request generation tagging
//!
//! Each load takes a ticket before it is issued. When the response arrives,
//! the ticket is checked against the counter; a ticket is stale once a newer
//! load was started for the same target, and its response must be dropped.

use std::cell::Cell;
use std::rc::Rc;

/// Shared counter for one kind of load
#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    latest: Rc<Cell<u64>>,
}

/// Proof of which load a response belongs to
#[derive(Clone, Debug)]
pub struct RequestTicket {
    generation: u64,
    latest: Rc<Cell<u64>>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, invalidating every earlier ticket
    pub fn next(&self) -> RequestTicket {
        let generation = self.latest.get().wrapping_add(1);
        self.latest.set(generation);
        RequestTicket {
            generation,
            latest: self.latest.clone(),
        }
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_invalidates_older() {
        let generation = RequestGeneration::new();
        let first = generation.next();
        assert!(first.is_current());

        let second = generation.next();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_counters_are_independent() {
        let owners = RequestGeneration::new();
        let groups = RequestGeneration::new();
        let owner_ticket = owners.next();
        let _ = groups.next();
        assert!(owner_ticket.is_current());
    }
}
