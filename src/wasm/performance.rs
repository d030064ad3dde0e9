//! Lazy images, preload links, `will-change` hints and timing diagnostics.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, HtmlImageElement, HtmlLinkElement, IntersectionObserver,
    IntersectionObserverEntry, PerformanceEntry, PerformanceObserver, PerformanceObserverEntryList,
    PerformanceObserverInit, Window,
};

use super::dom::{self, Page};
use crate::animation::REVEAL_SELECTOR;
use crate::error::SiteError;
use crate::performance::{
    is_long_task, preloads, will_change_for, Preload, CRITICAL_RESOURCES, DEFERRED_SRC_ATTR,
    HINT_END_EVENTS, HINT_START_EVENTS, LAZY_CLASS,
};

pub struct PerformanceOptimizer {
    image_observer: Option<IntersectionObserver>,
}

impl PerformanceOptimizer {
    pub fn new(page: Rc<Page>) -> Result<Rc<Self>, SiteError> {
        let image_observer = lazy_load_images(&page)?;
        preload_critical_resources(&page, CRITICAL_RESOURCES);
        hint_animations(&page)?;
        Ok(Rc::new(PerformanceOptimizer { image_observer }))
    }

    pub fn observes_images(&self) -> bool {
        self.image_observer.is_some()
    }
}

fn supports(window: &Window, api: &str) -> bool {
    Reflect::has(window, &JsValue::from_str(api)).unwrap_or(false)
}

/// Swap `data-src` into `src` the first time each image shows up.
fn lazy_load_images(page: &Page) -> Result<Option<IntersectionObserver>, SiteError> {
    if !supports(&page.window, "IntersectionObserver") {
        log::info!("IntersectionObserver unavailable, images load eagerly via markup");
        return Ok(None);
    }
    let images = dom::query_all(&page.document, &format!("img[{DEFERRED_SRC_ATTR}]"))?;

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                load_deferred(&target);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for image in &images {
        observer.observe(image);
    }
    log::debug!("lazy loading {} images", images.len());
    Ok(Some(observer))
}

fn load_deferred(target: &Element) {
    let Some(src) = target.get_attribute(DEFERRED_SRC_ATTR) else {
        return;
    };
    match target.dyn_ref::<HtmlImageElement>() {
        Some(image) => image.set_src(&src),
        None => {
            let _ = target.set_attribute("src", &src);
        }
    }
    dom::remove_class(target, LAZY_CLASS);
}

fn preload_critical_resources(page: &Page, resources: &[&str]) {
    let Some(head) = page.document.head() else {
        return;
    };
    for preload in preloads(resources) {
        if let Err(err) = append_preload(page, &head, &preload) {
            log::warn!("failed to preload {}: {err}", preload.href);
        }
    }
}

fn append_preload(page: &Page, head: &Element, preload: &Preload) -> Result<(), SiteError> {
    let link: HtmlLinkElement = page
        .document
        .create_element("link")?
        .dyn_into()
        .map_err(JsValue::from)?;
    link.set_rel("preload");
    link.set_href(&preload.href);
    link.set_as(preload.as_);
    link.set_cross_origin(preload.cross_origin);
    head.append_child(&link)?;
    Ok(())
}

/// Raise `will-change` only while a reveal transition or animation runs.
fn hint_animations(page: &Page) -> Result<(), SiteError> {
    for el in dom::query_all(&page.document, REVEAL_SELECTOR)? {
        for event_name in HINT_START_EVENTS.iter().chain(HINT_END_EVENTS.iter()) {
            let target = el.clone();
            let fired = Cell::new(false);
            dom::listen(&el, event_name, move |event| {
                if fired.replace(true) {
                    return;
                }
                if let Some(value) = will_change_for(&event.type_()) {
                    dom::set_style(&target, "will-change", Some(value));
                }
            })?;
        }
    }
    Ok(())
}

/// How [`measure_page_load`] got hold of the timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTiming {
    /// `load` had already fired, timing was logged on the spot.
    Logged,
    /// Logged later from a `load` listener.
    Deferred,
}

/// Log page-load timing, now if the document has finished loading,
/// otherwise once `load` fires.
pub fn measure_page_load(window: &Window) -> Result<LoadTiming, SiteError> {
    let complete = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        log_page_load(window);
        return Ok(LoadTiming::Logged);
    }
    let win = window.clone();
    dom::listen(window, "load", move |_| log_page_load(&win))?;
    Ok(LoadTiming::Deferred)
}

fn log_page_load(window: &Window) {
    let Some(performance) = window.performance() else {
        log::info!("⚡ ページが読み込まれました");
        return;
    };
    log::info!("⚡ ページロード時間: {:.2}ms", performance.now());
    let navigation = performance.get_entries_by_type("navigation");
    if navigation.length() > 0 {
        if let Ok(entry) = navigation.get(0).dyn_into::<PerformanceEntry>() {
            log::info!(
                "📊 ナビゲーション情報: {} ({:.2}ms)",
                entry.name(),
                entry.duration()
            );
        }
    }
}

/// Warn about long tasks when the host can report them.
pub fn watch_long_tasks(window: &Window, threshold_ms: f64) {
    if !supports(window, "PerformanceObserver") {
        log::info!("📊 PerformanceObserver は利用できません");
        return;
    }
    if let Err(err) = observe_long_tasks(threshold_ms) {
        log::info!("📊 PerformanceObserver は利用できません: {err}");
    }
}

fn observe_long_tasks(threshold_ms: f64) -> Result<(), SiteError> {
    let callback = Closure::wrap(Box::new(
        move |list: PerformanceObserverEntryList, _observer: PerformanceObserver| {
            for entry in list.get_entries().iter() {
                let Ok(entry) = entry.dyn_into::<PerformanceEntry>() else {
                    continue;
                };
                if is_long_task(entry.duration(), threshold_ms) {
                    log::warn!("⚠️ 長時間実行タスク検出: {:.2}ms", entry.duration());
                }
            }
        },
    ) as Box<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>);
    let observer = PerformanceObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    let options = PerformanceObserverInit::new(&Array::of1(&JsValue::from_str("longtask")));
    observer.observe(&options);
    Ok(())
}
