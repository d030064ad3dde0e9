//! Timer plumbing on top of `gloo_timers`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::debounce::Debouncer;

/// Run `callback` once after `millis`, without keeping a handle.
pub fn after<F>(millis: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, callback).forget();
}

/// Trailing-edge debounce: the returned function forwards only the last
/// arguments of a burst, `wait_ms` after the burst ends.
pub fn debounce<A, F>(wait_ms: u32, callback: F) -> impl FnMut(A)
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    let state = Rc::new(RefCell::new(Debouncer::new(wait_ms)));
    let callback = Rc::new(RefCell::new(callback));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move |args: A| {
        let ticket = state.borrow_mut().push(args);
        let state = state.clone();
        let callback = callback.clone();
        let timeout = Timeout::new(wait_ms, move || {
            let due = state.borrow_mut().redeem(ticket);
            if let Some(args) = due {
                (&mut *callback.borrow_mut())(args);
            }
        });
        // Replacing the previous timeout drops it, which cancels it.
        *pending.borrow_mut() = Some(timeout);
    }
}
