use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::dom::{self, Page};
use crate::error::SiteError;
use crate::theme::{Theme, TOGGLE_LABEL, TOGGLE_STYLE};

/// Session-only light/dark switch with a floating toggle button.
pub struct ThemeController {
    page: Rc<Page>,
    current: Cell<Theme>,
    button: RefCell<Option<Element>>,
}

impl ThemeController {
    pub fn new(page: Rc<Page>) -> Result<Rc<Self>, SiteError> {
        let controller = Rc::new(ThemeController {
            page,
            current: Cell::new(Theme::default()),
            button: RefCell::new(None),
        });
        controller.apply();
        controller.create_toggle()?;
        Ok(controller)
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle(&self) {
        self.set(self.current().toggled());
    }

    /// Force a theme, keeping the toggle glyph in sync.
    pub fn set(&self, theme: Theme) {
        self.current.set(theme);
        self.apply();
        if let Some(button) = self.button.borrow().as_ref() {
            button.set_text_content(Some(theme.toggle_glyph()));
        }
    }

    fn apply(&self) {
        let Some(root) = self
            .page
            .document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let style = root.style();
        for (property, value) in self.current().palette() {
            let _ = style.set_property(property, value);
        }
    }

    fn create_toggle(self: &Rc<Self>) -> Result<(), SiteError> {
        let button = self.page.document.create_element("button")?;
        button.set_class_name("theme-toggle");
        button.set_text_content(Some(self.current().toggle_glyph()));
        button.set_attribute("aria-label", TOGGLE_LABEL)?;
        dom::set_styles(&button, &TOGGLE_STYLE);

        let this = self.clone();
        dom::listen(&button, "click", move |_| this.toggle())?;
        let hovered = button.clone();
        dom::listen(&button, "mouseenter", move |_| {
            dom::set_style(&hovered, "transform", Some("scale(1.1)"));
        })?;
        let hovered = button.clone();
        dom::listen(&button, "mouseleave", move |_| {
            dom::set_style(&hovered, "transform", Some("scale(1)"));
        })?;

        if let Some(body) = self.page.document.body() {
            body.append_child(&button)?;
        }
        *self.button.borrow_mut() = Some(button);
        Ok(())
    }
}
