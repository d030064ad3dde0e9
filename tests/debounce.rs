use folio_wasm::debounce::{Debouncer, Ticket};

/// Minimal stand-in for the browser timer queue: every call schedules a
/// redeem `wait` ms later, timers fire in due order.
struct Harness {
    debouncer: Debouncer<u32>,
    timers: Vec<(u32, Ticket)>,
}

impl Harness {
    fn new(wait_ms: u32) -> Self {
        Harness { debouncer: Debouncer::new(wait_ms), timers: Vec::new() }
    }

    fn call(&mut self, at: u32, arg: u32) {
        let ticket = self.debouncer.push(arg);
        self.timers.push((at + self.debouncer.wait_ms(), ticket));
    }

    fn run(mut self) -> Vec<(u32, u32)> {
        self.timers.sort_by_key(|(due, _)| *due);
        let mut fired = Vec::new();
        for (due, ticket) in self.timers {
            if let Some(arg) = self.debouncer.redeem(ticket) {
                fired.push((due, arg));
            }
        }
        fired
    }
}

#[test]
fn burst_collapses_to_last_arguments() {
    let mut h = Harness::new(100);
    h.call(0, 1);
    h.call(30, 2);
    h.call(60, 3);
    h.call(90, 4);
    assert_eq!(h.run(), vec![(190, 4)]);
}

#[test]
fn quiet_gaps_let_every_call_through() {
    let mut h = Harness::new(10);
    h.call(0, 1);
    let fired_first = h.debouncer.redeem(h.timers[0].1);
    assert_eq!(fired_first, Some(1));
    h.call(50, 2);
    let second = h.timers[1].1;
    assert_eq!(h.debouncer.redeem(second), Some(2));
}

#[test]
fn redeeming_twice_yields_nothing() {
    let mut debouncer = Debouncer::new(50);
    let ticket = debouncer.push("scroll");
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.redeem(ticket), Some("scroll"));
    assert_eq!(debouncer.redeem(ticket), None);
    assert!(!debouncer.is_pending());
}

#[test]
fn stale_ticket_does_not_steal_newer_arguments() {
    let mut debouncer = Debouncer::new(50);
    let old = debouncer.push(1);
    let new = debouncer.push(2);
    assert_eq!(debouncer.redeem(old), None);
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.redeem(new), Some(2));
}
