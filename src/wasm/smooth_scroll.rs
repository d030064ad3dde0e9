use std::rc::Rc;

use web_sys::{Element, Event};

use super::dom::{self, Page};
use crate::error::SiteError;
use crate::navigation::{fragment_id, scroll_target};

/// Smooth scrolling for every same-page anchor and the hero scroll indicator.
pub struct SmoothScroll {
    page: Rc<Page>,
}

impl SmoothScroll {
    pub fn new(page: Rc<Page>) -> Result<Rc<Self>, SiteError> {
        let scroll = Rc::new(SmoothScroll { page });

        for link in dom::query_all(&scroll.page.document, "a[href^=\"#\"]")? {
            let this = scroll.clone();
            dom::listen(&link, "click", move |event| this.handle_click(&event))?;
        }

        if let Ok(Some(indicator)) = scroll.page.document.query_selector(".scroll-indicator") {
            let this = scroll.clone();
            dom::listen(&indicator, "click", move |_| {
                if let Some(about) = dom::by_id(&this.page.document, "about") {
                    this.scroll_to(&about);
                }
            })?;
        }
        Ok(scroll)
    }

    fn handle_click(&self, event: &Event) {
        event.prevent_default();
        let target = dom::event_current_target(event)
            .and_then(|link| link.get_attribute("href"))
            .and_then(|href| fragment_id(&href).and_then(|id| dom::by_id(&self.page.document, id)));
        if let Some(target) = target {
            self.scroll_to(&target);
        }
    }

    pub fn scroll_to(&self, element: &Element) {
        if let Some(top) = dom::offset_top(element) {
            dom::smooth_scroll_to(&self.page.window, scroll_target(top, self.page.header_height()));
        }
    }
}
