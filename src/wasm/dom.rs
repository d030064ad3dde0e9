//! Typed lookups and small mutation helpers over `web_sys`.
//!
//! Everything the controllers touch is resolved once into a [`Page`]. Handles
//! that markup may omit are `Option`s, repeated ones are (possibly empty)
//! vectors, so "element may not exist" is visible in the types.

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, NodeList,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::SiteError;
use crate::viewport::{Rect, Viewport};

pub struct Page {
    pub window: Window,
    pub document: Document,
    pub header: Option<HtmlElement>,
    pub hamburger: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub filter_buttons: Vec<Element>,
    pub portfolio_items: Vec<Element>,
    pub process_steps: Vec<Element>,
    pub skill_bars: Vec<Element>,
    pub stat_numbers: Vec<Element>,
}

impl Page {
    pub fn bind(window: Window, document: Document) -> Result<Self, SiteError> {
        Ok(Page {
            header: by_id(&document, "header").and_then(|el| el.dyn_into().ok()),
            hamburger: by_id(&document, "hamburger"),
            nav_menu: by_id(&document, "nav-menu"),
            nav_links: query_all(&document, ".nav-link")?,
            contact_form: by_id(&document, "contact-form").and_then(|el| el.dyn_into().ok()),
            filter_buttons: query_all(&document, ".filter-btn")?,
            portfolio_items: query_all(&document, ".portfolio-item")?,
            process_steps: query_all(&document, ".process-step")?,
            skill_bars: query_all(&document, ".skill-progress")?,
            stat_numbers: query_all(&document, ".stat-number")?,
            window,
            document,
        })
    }

    pub fn header_height(&self) -> Option<f64> {
        self.header.as_ref().map(|header| f64::from(header.offset_height()))
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn viewport(&self) -> Viewport {
        viewport(&self.window, &self.document)
    }
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(root.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set an inline style property, or clear it with `None`.
pub fn set_style(el: &Element, property: &str, value: Option<&str>) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
}

pub fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        set_style(el, property, Some(value));
    }
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Offset of an element from the top of the document.
pub fn offset_top(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>()
        .map(|html| f64::from(html.offset_top()))
}

pub fn offset_height(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>()
        .map(|html| f64::from(html.offset_height()))
}

pub fn rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.top(), r.left(), r.bottom(), r.right())
}

/// Window size, falling back to the root element's client size.
pub fn viewport(window: &Window, document: &Document) -> Viewport {
    let root = document.document_element();
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .or_else(|| root.as_ref().map(|r| f64::from(r.client_width())))
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .or_else(|| root.as_ref().map(|r| f64::from(r.client_height())))
        .unwrap_or(0.0);
    Viewport { width, height }
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Attach `handler` for the page's lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Element the event was dispatched to, if it is an element.
pub fn event_target(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Element the listener is attached to.
pub fn event_current_target(event: &Event) -> Option<Element> {
    event.current_target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Whether `node` sits inside `container` (inclusive).
pub fn contains(container: Option<&Element>, node: Option<&Element>) -> bool {
    match (container, node) {
        (Some(container), Some(node)) => container.contains(Some(node)),
        _ => false,
    }
}
