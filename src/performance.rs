//! Lazy images, resource preloading and rendering hints.

/// Attribute carrying the deferred image source.
pub const DEFERRED_SRC_ATTR: &str = "data-src";
pub const LAZY_CLASS: &str = "lazy";

/// Resources worth a `<link rel="preload">`. Nothing is critical yet.
pub const CRITICAL_RESOURCES: &[&str] = &[];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preload {
    pub href: String,
    pub as_: &'static str,
    pub cross_origin: Option<&'static str>,
}

impl Preload {
    pub fn for_resource(href: &str) -> Self {
        if href.contains(".woff") {
            Preload { href: href.to_string(), as_: "font", cross_origin: Some("anonymous") }
        } else {
            Preload { href: href.to_string(), as_: "image", cross_origin: None }
        }
    }
}

pub fn preloads(resources: &[&str]) -> Vec<Preload> {
    resources.iter().map(|href| Preload::for_resource(href)).collect()
}

pub const WILL_CHANGE_ACTIVE: &str = "transform, opacity";
pub const WILL_CHANGE_IDLE: &str = "auto";

/// Events that raise the `will-change` hint, then the ones that drop it.
pub const HINT_START_EVENTS: [&str; 2] = ["transitionstart", "animationstart"];
pub const HINT_END_EVENTS: [&str; 2] = ["transitionend", "animationend"];

/// `will-change` value to apply for a given event, if any.
pub fn will_change_for(event_type: &str) -> Option<&'static str> {
    if HINT_START_EVENTS.contains(&event_type) {
        Some(WILL_CHANGE_ACTIVE)
    } else if HINT_END_EVENTS.contains(&event_type) {
        Some(WILL_CHANGE_IDLE)
    } else {
        None
    }
}

/// Whether a long-task entry deserves a warning.
pub fn is_long_task(duration_ms: f64, threshold_ms: f64) -> bool {
    duration_ms > threshold_ms
}
