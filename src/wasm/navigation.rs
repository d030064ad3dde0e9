//! Hamburger menu, header look, active-link tracking and in-page scrolling.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, Event};

use super::dom::{self, Page};
use super::timing::debounce;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::navigation::{
    active_section, bar_style, fragment_id, scroll_target, HeaderLook, MenuState, SectionSpan,
};

pub struct Navigation {
    page: Rc<Page>,
    menu: Cell<MenuState>,
    solid_after_px: f64,
    section_offset_px: f64,
}

impl Navigation {
    pub fn new(page: Rc<Page>, config: &SiteConfig) -> Result<Rc<Self>, SiteError> {
        let nav = Rc::new(Navigation {
            page,
            menu: Cell::new(MenuState::default()),
            solid_after_px: config.header_solid_after_px,
            section_offset_px: config.active_section_offset_px,
        });
        nav.bind(config.nav_scroll_debounce_ms)?;
        nav.handle_scroll();
        Ok(nav)
    }

    fn bind(self: &Rc<Self>, scroll_debounce_ms: u32) -> Result<(), SiteError> {
        if let Some(hamburger) = &self.page.hamburger {
            let nav = self.clone();
            dom::listen(hamburger, "click", move |_| nav.toggle_menu())?;
        }

        for link in &self.page.nav_links {
            let nav = self.clone();
            dom::listen(link, "click", move |event| nav.handle_nav_click(&event))?;
        }

        let nav = self.clone();
        let mut on_scroll = debounce(scroll_debounce_ms, move |()| nav.handle_scroll());
        dom::listen(&self.page.window, "scroll", move |_| on_scroll(()))?;

        let nav = self.clone();
        dom::listen(&self.page.document, "click", move |event| {
            nav.handle_outside_click(&event)
        })?;
        Ok(())
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.get().is_open()
    }

    pub fn toggle_menu(&self) {
        let mut menu = self.menu.get();
        let open = menu.toggle();
        self.menu.set(menu);

        if let Some(nav_menu) = &self.page.nav_menu {
            dom::set_class(nav_menu, "active", open);
        }
        let Some(hamburger) = &self.page.hamburger else {
            return;
        };
        dom::set_class(hamburger, "active", open);

        let bars = dom::query_all_in(hamburger, "span").unwrap_or_default();
        for (index, bar) in bars.iter().enumerate() {
            let style = bar_style(open, index);
            if open {
                if let Some(transform) = style.transform {
                    dom::set_style(bar, "transform", Some(transform));
                }
                if let Some(opacity) = style.opacity {
                    dom::set_style(bar, "opacity", Some(opacity));
                }
            } else {
                dom::set_style(bar, "transform", None);
                dom::set_style(bar, "opacity", None);
            }
        }
    }

    pub fn handle_nav_click(&self, event: &Event) {
        event.prevent_default();
        let href = dom::event_current_target(event).and_then(|link| link.get_attribute("href"));
        if let Some(target) = href.as_deref().and_then(|href| self.resolve(href)) {
            self.scroll_to(&target);
        }
        if self.is_menu_open() {
            self.toggle_menu();
        }
    }

    fn resolve(&self, href: &str) -> Option<Element> {
        fragment_id(href).and_then(|id| dom::by_id(&self.page.document, id))
    }

    fn scroll_to(&self, target: &Element) {
        if let Some(top) = dom::offset_top(target) {
            let top = scroll_target(top, self.page.header_height());
            dom::smooth_scroll_to(&self.page.window, top);
        }
    }

    pub fn handle_scroll(&self) {
        let Some(header) = &self.page.header else {
            return;
        };
        let scroll_y = self.page.scroll_y();
        let look = HeaderLook::for_scroll(scroll_y, self.solid_after_px);
        dom::set_style(header, "background", Some(look.background()));
        dom::set_style(header, "box-shadow", look.box_shadow());

        self.update_active_link(scroll_y);
    }

    fn update_active_link(&self, scroll_y: f64) {
        let sections = dom::query_all(&self.page.document, "section[id]").unwrap_or_default();
        let spans: Vec<SectionSpan> = sections
            .iter()
            .map(|section| SectionSpan {
                id: section.id(),
                top: dom::offset_top(section).unwrap_or(0.0),
                height: dom::offset_height(section).unwrap_or(0.0),
            })
            .collect();

        let Some(index) = active_section(&spans, scroll_y, self.section_offset_px) else {
            return;
        };
        let wanted = format!("#{}", spans[index].id);
        for link in &self.page.nav_links {
            let is_active = link.get_attribute("href").as_deref() == Some(wanted.as_str());
            dom::set_class(link, "active", is_active);
        }
    }

    pub fn handle_outside_click(&self, event: &Event) {
        let target = dom::event_target(event);
        let inside_menu = dom::contains(self.page.nav_menu.as_ref(), target.as_ref());
        let inside_hamburger = dom::contains(self.page.hamburger.as_ref(), target.as_ref());
        if self.menu.get().closes_on_outside_click(inside_menu, inside_hamburger) {
            self.toggle_menu();
        }
    }
}
