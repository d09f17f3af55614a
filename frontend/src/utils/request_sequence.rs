use std::{cell::Cell, rc::Rc};

/// Hands out one ticket per request; only the newest ticket may write view
/// state. Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Retires every outstanding ticket, e.g. when the owning view unmounts.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get().wrapping_add(1));
    }
}
