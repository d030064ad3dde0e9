//! Reveal-on-scroll, skill-bar fill and stat count-up.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::dom::{self, Page};
use super::timing::{after, debounce};
use crate::animation::{
    parse_target, skill_bar_delays, CountUp, RevealTracker, REVEAL_SELECTOR, REVEAL_TABLE,
};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::viewport::is_partially_in_viewport;

pub struct AnimationController {
    page: Rc<Page>,
    tagged: Vec<Element>,
    revealed: RefCell<RevealTracker<usize>>,
    counted: RefCell<RevealTracker<usize>>,
    skill_bar_stagger_ms: u32,
    count_up_duration_ms: u32,
    count_up_tick_ms: u32,
}

impl AnimationController {
    pub fn new(page: Rc<Page>, config: &SiteConfig) -> Result<Rc<Self>, SiteError> {
        for (selector, kind) in REVEAL_TABLE {
            for el in dom::query_all(&page.document, selector)? {
                dom::add_class(&el, kind.class_name());
            }
        }
        let tagged = dom::query_all(&page.document, REVEAL_SELECTOR)?;
        log::debug!("tagged {} elements for reveal", tagged.len());

        let controller = Rc::new(AnimationController {
            page,
            tagged,
            revealed: RefCell::new(RevealTracker::default()),
            counted: RefCell::new(RevealTracker::default()),
            skill_bar_stagger_ms: config.skill_bar_stagger_ms,
            count_up_duration_ms: config.count_up_duration_ms,
            count_up_tick_ms: config.count_up_tick_ms,
        });

        controller.handle_scroll();
        let this = controller.clone();
        let mut on_scroll =
            debounce(config.reveal_scroll_debounce_ms, move |()| this.handle_scroll());
        dom::listen(&controller.page.window, "scroll", move |_| on_scroll(()))?;
        Ok(controller)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.borrow().len()
    }

    pub fn handle_scroll(&self) {
        let viewport = self.page.viewport();
        for (index, el) in self.tagged.iter().enumerate() {
            if self.revealed.borrow().contains(&index) {
                continue;
            }
            if !is_partially_in_viewport(&dom::rect(el), &viewport) {
                continue;
            }
            dom::add_class(el, "visible");
            self.revealed.borrow_mut().mark(index);

            if within(el, ".skills") {
                self.animate_skill_bars();
            }
            if within(el, ".stats") {
                self.animate_stat_numbers();
            }
        }
    }

    fn animate_skill_bars(&self) {
        let delays = skill_bar_delays(self.page.skill_bars.len(), self.skill_bar_stagger_ms);
        for (bar, delay) in self.page.skill_bars.iter().zip(delays) {
            let bar = bar.clone();
            after(delay, move || {
                let width = bar.get_attribute("data-width");
                if let Some(width) = width.as_deref() {
                    dom::set_style(&bar, "width", Some(width));
                }
                dom::add_class(&bar, "animate");
            });
        }
    }

    fn animate_stat_numbers(&self) {
        for (index, stat) in self.page.stat_numbers.iter().enumerate() {
            // Marked before the first tick so a mid-count scroll cannot restart it.
            if !self.counted.borrow_mut().mark(index) {
                continue;
            }
            let target = stat.get_attribute("data-target").as_deref().and_then(parse_target);
            let Some(target) = target else {
                log::warn!("stat #{index} has no numeric data-target");
                continue;
            };
            let counter = CountUp::new(target, self.count_up_duration_ms, self.count_up_tick_ms);
            count_up(stat.clone(), counter);
        }
    }
}

fn within(el: &Element, selector: &str) -> bool {
    matches!(el.closest(selector), Ok(Some(_)))
}

fn count_up(stat: Element, mut counter: CountUp) {
    after(counter.tick_ms(), move || {
        let value = counter.tick();
        stat.set_text_content(Some(&value.to_string()));
        if !counter.is_done() {
            count_up(stat, counter);
        }
    });
}
