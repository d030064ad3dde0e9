//! Contact form: inline validation, simulated submit and toast notifications.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use super::dom::{self, Page};
use super::timing::after;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::form::{
    phase_changes, validate, FieldError, FieldInput, SubmitPhase, ERROR_COLOR, SUCCESS_MESSAGE,
};
use crate::notification::{NotificationKind, NotificationSlot, Timeline, BASE_STYLE, OFFSCREEN};

const FIELD_SELECTOR: &str = "input, textarea, select";
const ERROR_CLASS: &str = "field-error";

pub struct ContactForm {
    form: HtmlFormElement,
    notifier: Notifier,
    latency_ms: u32,
    success_hold_ms: u32,
}

impl ContactForm {
    /// `None` when the page has no contact form.
    pub fn new(page: Rc<Page>, config: &SiteConfig) -> Result<Option<Rc<Self>>, SiteError> {
        let Some(form) = page.contact_form.clone() else {
            return Ok(None);
        };
        let controller = Rc::new(ContactForm {
            form,
            notifier: Notifier::new(page.document.clone(), config),
            latency_ms: config.submit_latency_ms,
            success_hold_ms: config.submit_success_hold_ms,
        });

        let this = controller.clone();
        dom::listen(&controller.form, "submit", move |event| this.handle_submit(&event))?;

        for field in controller.fields() {
            let this = controller.clone();
            dom::listen(&field, "blur", move |event| {
                if let Some(field) = dom::event_target(&event) {
                    this.validate_field(&field);
                }
            })?;
            dom::listen(&field, "input", move |event| {
                if let Some(field) = dom::event_target(&event) {
                    clear_field_error(&field);
                }
            })?;
        }
        Ok(Some(controller))
    }

    fn fields(&self) -> Vec<Element> {
        dom::query_all_in(&self.form, FIELD_SELECTOR).unwrap_or_default()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn handle_submit(&self, event: &Event) {
        event.prevent_default();
        if !self.validate_form() {
            return;
        }
        log::debug!("contact form valid, simulating send");

        if let Some(button) = self.submit_button() {
            apply_phase(&button, SubmitPhase::Sending);
            for (at, phase) in phase_changes(self.latency_ms, self.success_hold_ms) {
                let button = button.clone();
                after(at, move || apply_phase(&button, phase));
            }
        }

        let form = self.form.clone();
        let notifier = self.notifier.clone();
        after(self.latency_ms, move || {
            notifier.show(SUCCESS_MESSAGE, NotificationKind::Success);
            reset_form(&form);
        });
    }

    /// Validate every `[required]` control, marking all failures.
    pub fn validate_form(&self) -> bool {
        let required = dom::query_all_in(&self.form, "[required]").unwrap_or_default();
        required
            .iter()
            .map(|field| self.validate_field(field))
            .fold(true, |all, ok| all && ok)
    }

    pub fn validate_field(&self, field: &Element) -> bool {
        let (name, value) = name_and_value(field);
        let outcome = validate(FieldInput {
            name: &name,
            value: &value,
            required: field.has_attribute("required"),
        });
        update_field_error(field, outcome.err());
        outcome.is_ok()
    }

    fn submit_button(&self) -> Option<Element> {
        self.form.query_selector("[type=\"submit\"]").ok().flatten()
    }
}

fn name_and_value(field: &Element) -> (String, String) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        (area.name(), area.value())
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        (select.name(), select.value())
    } else {
        (field.get_attribute("name").unwrap_or_default(), String::new())
    }
}

fn existing_error(field: &Element) -> Option<Element> {
    field
        .parent_element()
        .and_then(|parent| parent.query_selector(&format!(".{ERROR_CLASS}")).ok().flatten())
}

fn update_field_error(field: &Element, error: Option<FieldError>) {
    if let Some(existing) = existing_error(field) {
        existing.remove();
    }
    let Some(error) = error else {
        dom::set_style(field, "border-color", None);
        return;
    };
    let (Some(parent), Some(document)) = (field.parent_element(), field.owner_document()) else {
        return;
    };
    let Ok(node) = document.create_element("span") else {
        return;
    };
    node.set_class_name(ERROR_CLASS);
    node.set_text_content(Some(&error.to_string()));
    dom::set_styles(
        &node,
        &[
            ("color", ERROR_COLOR),
            ("font-size", "0.875rem"),
            ("margin-top", "4px"),
            ("display", "block"),
        ],
    );
    let _ = parent.append_child(&node);
    dom::set_style(field, "border-color", Some(ERROR_COLOR));
}

fn clear_field_error(field: &Element) {
    if let Some(existing) = existing_error(field) {
        existing.remove();
        dom::set_style(field, "border-color", None);
    }
}

fn apply_phase(button: &Element, phase: SubmitPhase) {
    button.set_text_content(Some(phase.label()));
    match button.dyn_ref::<HtmlButtonElement>() {
        Some(button) => button.set_disabled(phase.disabled()),
        None if phase.disabled() => {
            let _ = button.set_attribute("disabled", "");
        }
        None => {
            let _ = button.remove_attribute("disabled");
        }
    }
    dom::set_style(button, "opacity", phase.opacity());
    dom::set_style(button, "background", phase.background());
}

fn reset_form(form: &HtmlFormElement) {
    form.reset();
    for error in dom::query_all_in(form, &format!(".{ERROR_CLASS}")).unwrap_or_default() {
        error.remove();
    }
    for field in dom::query_all_in(form, FIELD_SELECTOR).unwrap_or_default() {
        dom::set_style(&field, "border-color", None);
    }
}

/// Single-slot toast banner in the top-right corner.
#[derive(Clone)]
pub struct Notifier {
    document: Document,
    slot: Rc<RefCell<NotificationSlot>>,
    timeline: Timeline,
}

impl Notifier {
    pub fn new(document: Document, config: &SiteConfig) -> Self {
        Notifier {
            document,
            slot: Rc::new(RefCell::new(NotificationSlot::default())),
            timeline: Timeline::new(
                config.notification_enter_delay_ms,
                config.notification_ttl_ms,
                config.notification_exit_ms,
            ),
        }
    }

    pub fn show(&self, message: &str, kind: NotificationKind) {
        if let Ok(Some(existing)) = self.document.query_selector(".notification") {
            existing.remove();
        }
        let (id, displaced) = self.slot.borrow_mut().show();
        if let Some(displaced) = displaced {
            log::debug!("notification {displaced} displaced by {id}");
        }

        let Ok(toast) = self.document.create_element("div") else {
            return;
        };
        toast.set_class_name(&kind.class_name());
        toast.set_text_content(Some(message));
        dom::set_styles(&toast, &BASE_STYLE);
        dom::set_style(&toast, "transform", Some(OFFSCREEN));
        dom::set_style(&toast, "background", Some(kind.background()));

        let Some(body) = self.document.body() else {
            return;
        };
        if body.append_child(&toast).is_err() {
            return;
        }

        // Timers of a displaced toast find the slot taken and stop.
        for at in self.timeline.moments() {
            let toast = toast.clone();
            let slot = self.slot.clone();
            let timeline = self.timeline;
            after(at, move || {
                if !slot.borrow().is_current(id) {
                    return;
                }
                match timeline.transform_at(at) {
                    Some(transform) => dom::set_style(&toast, "transform", Some(transform)),
                    None => {
                        slot.borrow_mut().dismiss(id);
                        toast.remove();
                    }
                }
            });
        }
    }

    pub fn is_showing(&self) -> bool {
        self.document
            .query_selector(".notification")
            .ok()
            .flatten()
            .is_some()
    }
}
