//! Bootstrapper: waits for the DOM, builds every controller in order and
//! installs page-level diagnostics.

use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, ErrorEvent, PromiseRejectionEvent, Window};

use super::animation::AnimationController;
use super::console;
use super::contact::ContactForm;
use super::dom::{self, Page};
use super::navigation::Navigation;
use super::performance::{self, PerformanceOptimizer};
use super::portfolio::PortfolioFilter;
use super::process::ProcessSteps;
use super::smooth_scroll::SmoothScroll;
use super::theme::ThemeController;

use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::error::SiteError;
use crate::theme::Theme;

pub struct App {
    pub config: SiteConfig,
    pub navigation: Rc<Navigation>,
    pub portfolio: Rc<PortfolioFilter>,
    pub animation: Rc<AnimationController>,
    pub process: Rc<ProcessSteps>,
    pub contact: Option<Rc<ContactForm>>,
    pub smooth_scroll: Rc<SmoothScroll>,
    pub performance: Rc<PerformanceOptimizer>,
    pub theme: Rc<ThemeController>,
}

impl App {
    /// Construct controllers one after another; the first failure stops the rest.
    pub fn initialize(
        window: Window,
        document: Document,
        config: SiteConfig,
    ) -> Result<Rc<Self>, SiteError> {
        let page = Rc::new(Page::bind(window, document)?);

        let navigation = Navigation::new(page.clone(), &config)?;
        let portfolio = PortfolioFilter::new(page.clone(), &config)?;
        let animation = AnimationController::new(page.clone(), &config)?;
        let process = ProcessSteps::new(page.clone(), &config)?;
        let contact = ContactForm::new(page.clone(), &config)?;
        let smooth_scroll = SmoothScroll::new(page.clone())?;
        let performance = PerformanceOptimizer::new(page.clone())?;
        let theme = ThemeController::new(page)?;

        Ok(Rc::new(App {
            config,
            navigation,
            portfolio,
            animation,
            process,
            contact,
            smooth_scroll,
            performance,
            theme,
        }))
    }

    /// Inspectable state of each controller, keyed by component name.
    pub fn snapshot(&self) -> Result<Object, JsValue> {
        let components = Object::new();
        let add = |name: &str, fields: &[(&str, JsValue)]| -> Result<(), JsValue> {
            let component = Object::new();
            for (key, value) in fields {
                Reflect::set(&component, &JsValue::from_str(key), value)?;
            }
            Reflect::set(&components, &JsValue::from_str(name), &component)?;
            Ok(())
        };

        add(
            "navigation",
            &[("menuOpen", JsValue::from(self.navigation.is_menu_open()))],
        )?;
        add(
            "portfolioFilter",
            &[("activeFilter", JsValue::from(self.portfolio.active_filter()))],
        )?;
        add(
            "animationController",
            &[("revealed", JsValue::from(self.animation.revealed_count() as u32))],
        )?;
        add(
            "processStepController",
            &[("currentStep", JsValue::from(self.process.current_step() as u32))],
        )?;
        if let Some(contact) = &self.contact {
            add(
                "contactFormController",
                &[("notificationShowing", JsValue::from(contact.notifier().is_showing()))],
            )?;
        }
        add("smoothScrollController", &[])?;
        add(
            "performanceOptimizer",
            &[("observesImages", JsValue::from(self.performance.observes_images()))],
        )?;
        add(
            "themeController",
            &[("theme", JsValue::from_str(self.theme.current().as_str()))],
        )?;
        Ok(components)
    }
}

/// Entry point used by `#[wasm_bindgen(start)]`.
pub fn boot(window: Window, document: Document) -> Result<(), SiteError> {
    log_global_errors(&window)?;

    if document.ready_state() == "loading" {
        let mut pending = Some((window, document.clone()));
        dom::listen(&document, "DOMContentLoaded", move |_| {
            if let Some((window, document)) = pending.take() {
                start(window, document);
            }
        })?;
    } else {
        start(window, document);
    }
    Ok(())
}

fn start(window: Window, document: Document) {
    let dev = console::is_dev(&window);
    let config = load_config(&document);
    performance::watch_long_tasks(&window, config.long_task_threshold_ms);

    match App::initialize(window.clone(), document, config) {
        Ok(app) => {
            log::info!("🎉 フリーランスWebデザイナーサイトが正常に初期化されました");
            if let Err(err) = performance::measure_page_load(&window) {
                log::warn!("page load timing unavailable: {err}");
            }
            if dev {
                match expose_debug_handle(&window, app) {
                    Ok(()) => log::info!("🔧 開発者モード: window.debugApp でデバッグ機能を利用できます"),
                    Err(err) => log::warn!("debug handle not installed: {err}"),
                }
            }
        }
        Err(err) => log::error!("❌ 初期化中にエラーが発生しました: {err}"),
    }
}

/// Read the optional JSON override block, falling back to defaults.
pub fn load_config(document: &Document) -> SiteConfig {
    let Some(text) = dom::by_id(document, CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&text) {
        Ok(config) => {
            log::debug!("site config override applied");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            SiteConfig::default()
        }
    }
}

fn log_global_errors(window: &Window) -> Result<(), SiteError> {
    dom::listen(window, "error", |event| {
        let detail = event
            .dyn_ref::<ErrorEvent>()
            .map(|err| err.message())
            .unwrap_or_else(|| event.type_());
        log::error!("💥 JavaScript エラー: {detail}");
    })?;
    dom::listen(window, "unhandledrejection", |event| {
        let reason = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map(|rejection| describe(&rejection.reason()))
            .unwrap_or_default();
        log::error!("💥 未処理のPromise拒否: {reason}");
    })?;
    Ok(())
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.debugApp` for local and development hosts.
fn expose_debug_handle(window: &Window, app: Rc<App>) -> Result<(), SiteError> {
    let handle = Object::new();

    let state = app.clone();
    let components = Closure::wrap(Box::new(move || match state.snapshot() {
        Ok(snapshot) => snapshot.into(),
        Err(err) => {
            log::warn!("debugApp.components: {}", describe(&err));
            JsValue::UNDEFINED
        }
    }) as Box<dyn FnMut() -> JsValue>);
    Reflect::set(&handle, &"components".into(), components.as_ref())?;
    components.forget();

    let win = window.clone();
    let timing = Closure::wrap(Box::new(move || {
        win.performance()
            .map(|performance| performance.get_entries_by_type("navigation"))
            .unwrap_or_else(Array::new)
    }) as Box<dyn FnMut() -> Array>);
    Reflect::set(&handle, &"performance".into(), timing.as_ref())?;
    timing.forget();

    let theme = app.theme.clone();
    let force_theme = Closure::wrap(Box::new(move |name: String| match name.parse::<Theme>() {
        Ok(wanted) => theme.set(wanted),
        Err(err) => log::warn!("debugApp.theme: {err}"),
    }) as Box<dyn FnMut(String)>);
    Reflect::set(&handle, &"theme".into(), force_theme.as_ref())?;
    force_theme.forget();

    Reflect::set(window, &"debugApp".into(), &handle)?;
    Ok(())
}
