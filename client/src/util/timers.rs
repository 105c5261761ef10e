//! Delayed tasks with a single active handle per purpose.
//!
//! Every timer in the widget (resize debounce, status-text resets,
//! notice auto-dismiss) goes through [`Debounce`]: scheduling a new run
//! drops — and thereby cancels — any pending one, so a purpose can never
//! have two timers in flight.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// A cancelable delayed task. Cloning shares the handle.
#[derive(Clone, Default)]
pub struct Debounce {
    handle: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay_ms`, superseding any pending run.
    pub fn schedule<F>(&self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        let handle = Rc::clone(&self.handle);
        let timeout = Timeout::new(delay_ms, move || {
            handle.borrow_mut().take();
            task();
        });
        // Dropping the previous Timeout cancels it.
        *self.handle.borrow_mut() = Some(timeout);
    }
}
