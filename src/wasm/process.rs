use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Event;

use super::dom::{self, Page};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::process::{parse_step, StepCycle};

/// Self-advancing step indicator. Hovering any step pauses it; leaving
/// starts a fresh interval rather than finishing the interrupted one.
pub struct ProcessSteps {
    page: Rc<Page>,
    cycle: Cell<StepCycle>,
    interval_ms: u32,
    timer: RefCell<Option<Interval>>,
}

impl ProcessSteps {
    pub fn new(page: Rc<Page>, config: &SiteConfig) -> Result<Rc<Self>, SiteError> {
        let steps = Rc::new(ProcessSteps {
            cycle: Cell::new(StepCycle::new(page.process_steps.len())),
            page,
            interval_ms: config.step_interval_ms,
            timer: RefCell::new(None),
        });

        for step in &steps.page.process_steps {
            let this = steps.clone();
            dom::listen(step, "click", move |event| this.handle_click(&event))?;
            let this = steps.clone();
            dom::listen(step, "mouseenter", move |_| this.pause())?;
            let this = steps.clone();
            dom::listen(step, "mouseleave", move |_| this.resume())?;
        }
        steps.resume();
        Ok(steps)
    }

    pub fn current_step(&self) -> usize {
        self.cycle.get().current()
    }

    fn handle_click(&self, event: &Event) {
        let step = dom::event_current_target(event)
            .and_then(|el| el.get_attribute("data-step"))
            .as_deref()
            .and_then(parse_step);
        if let Some(step) = step {
            self.set_active_step(step);
        }
    }

    pub fn set_active_step(&self, step: usize) {
        let mut cycle = self.cycle.get();
        if !cycle.jump(step) {
            return;
        }
        self.cycle.set(cycle);
        self.render();
    }

    fn advance(&self) {
        let mut cycle = self.cycle.get();
        cycle.advance();
        self.cycle.set(cycle);
        self.render();
    }

    fn render(&self) {
        let wanted = self.current_step().to_string();
        for step in &self.page.process_steps {
            let active = step.get_attribute("data-step").as_deref() == Some(wanted.as_str());
            dom::set_class(step, "active", active);
        }
    }

    pub fn pause(&self) {
        self.timer.borrow_mut().take();
    }

    pub fn resume(self: &Rc<Self>) {
        if self.cycle.get().total() == 0 {
            return;
        }
        let weak = Rc::downgrade(self);
        let interval = Interval::new(self.interval_ms, move || {
            if let Some(steps) = weak.upgrade() {
                steps.advance();
            }
        });
        // Dropping a running interval clears it.
        *self.timer.borrow_mut() = Some(interval);
    }
}
