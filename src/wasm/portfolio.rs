use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event};

use super::dom::{self, Page};
use super::timing::after;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::portfolio::{self, FilterState};

/// Filter buttons over the staggered portfolio grid.
pub struct PortfolioFilter {
    page: Rc<Page>,
    state: RefCell<FilterState>,
    stagger_ms: u32,
}

impl PortfolioFilter {
    pub fn new(page: Rc<Page>, config: &SiteConfig) -> Result<Rc<Self>, SiteError> {
        let filter = Rc::new(PortfolioFilter {
            page,
            state: RefCell::new(FilterState::default()),
            stagger_ms: config.filter_stagger_ms,
        });
        for button in &filter.page.filter_buttons {
            let this = filter.clone();
            dom::listen(button, "click", move |event| this.handle_click(&event))?;
        }
        Ok(filter)
    }

    pub fn active_filter(&self) -> String {
        self.state.borrow().active().to_string()
    }

    fn handle_click(&self, event: &Event) {
        let Some(button) = dom::event_current_target(event) else {
            return;
        };
        let Some(filter) = button.get_attribute("data-filter") else {
            return;
        };
        self.select(&button, &filter);
    }

    /// Apply `filter` as if `button` had been clicked.
    pub fn select(&self, button: &Element, filter: &str) {
        if !self.state.borrow_mut().select(filter) {
            return;
        }
        for other in &self.page.filter_buttons {
            dom::remove_class(other, "active");
        }
        dom::add_class(button, "active");
        self.filter_items(filter);
    }

    fn filter_items(&self, filter: &str) {
        let items = &self.page.portfolio_items;
        let categories: Vec<Option<String>> = items
            .iter()
            .map(|item| item.get_attribute("data-category"))
            .collect();
        let changes = portfolio::plan(
            filter,
            categories.iter().map(Option::as_deref),
            self.stagger_ms,
        );

        for change in changes {
            let item = items[change.index].clone();
            after(change.delay_ms, move || {
                dom::set_class(&item, "hidden", !change.visible);
                dom::set_class(&item, "visible", change.visible);
            });
        }
    }
}
