//! Trailing-edge debounce bookkeeping.
//!
//! The timer itself lives in the caller (a `gloo_timers` timeout on wasm, a
//! simulated queue in tests). Every push hands out a [`Ticket`]; when a timer
//! fires it redeems its ticket, and only the newest ticket yields the pending
//! arguments. Older timers that were not cancelled in time come back empty.

/// Handle returned by [`Debouncer::push`], redeemed when the wait elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Debouncer<A> {
    wait_ms: u32,
    generation: u64,
    pending: Option<A>,
}

impl<A> Debouncer<A> {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, generation: 0, pending: None }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Record an invocation. Replaces any arguments still waiting.
    pub fn push(&mut self, args: A) -> Ticket {
        self.generation += 1;
        self.pending = Some(args);
        Ticket(self.generation)
    }

    /// Take the pending arguments if `ticket` is the latest one issued.
    pub fn redeem(&mut self, ticket: Ticket) -> Option<A> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
