#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use std::cell::RefCell;

use folio_wasm::config::SiteConfig;
use folio_wasm::notification::NotificationKind;
use folio_wasm::theme::Theme;
use folio_wasm::wasm::animation::AnimationController;
use folio_wasm::wasm::app::App;
use folio_wasm::wasm::contact::{ContactForm, Notifier};
use folio_wasm::wasm::dom::Page;
use folio_wasm::wasm::navigation::Navigation;
use folio_wasm::wasm::console;
use folio_wasm::wasm::performance::{
    measure_page_load, watch_long_tasks, LoadTiming, PerformanceOptimizer,
};
use folio_wasm::wasm::portfolio::PortfolioFilter;
use folio_wasm::wasm::process::ProcessSteps;
use folio_wasm::wasm::smooth_scroll::SmoothScroll;
use folio_wasm::wasm::theme::ThemeController;
use folio_wasm::wasm::timing::debounce;
use gloo_timers::future::TimeoutFuture;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Markup mounted into `<body>` for one test and removed afterwards.
struct Fixture {
    root: Element,
}

impl Fixture {
    fn mount(html: &str) -> Self {
        let root = document().create_element("div").unwrap();
        root.set_inner_html(html);
        document().body().unwrap().append_child(&root).unwrap();
        Fixture { root }
    }

    /// Like [`Fixture::mount`], but fixed to the top-left corner so the
    /// markup is inside the viewport whatever the runner page holds.
    fn pinned(html: &str) -> Self {
        let fx = Fixture::mount(html);
        fx.root
            .set_attribute("style", "position:fixed;top:0;left:0;width:100%;z-index:1")
            .unwrap();
        fx
    }

    fn page(&self) -> Rc<Page> {
        let window = web_sys::window().unwrap();
        Rc::new(Page::bind(window, document()).unwrap())
    }

    fn find(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("{selector} missing from fixture"))
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn inline(el: &Element, property: &str) -> String {
    el.dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[wasm_bindgen_test]
fn menu_toggle_round_trip() {
    let fx = Fixture::mount(
        r#"<ul id="nav-menu"></ul>
           <div id="hamburger"><span></span><span></span><span></span></div>"#,
    );
    let nav = Navigation::new(fx.page(), &SiteConfig::default()).unwrap();
    let menu = fx.find("#nav-menu");
    let first_bar = fx.find("#hamburger span:nth-child(1)");
    let middle_bar = fx.find("#hamburger span:nth-child(2)");

    nav.toggle_menu();
    assert!(nav.is_menu_open());
    assert!(has_class(&menu, "active"));
    assert_eq!(inline(&middle_bar, "opacity"), "0");
    assert!(inline(&first_bar, "transform").starts_with("rotate(45deg)"));

    nav.toggle_menu();
    assert!(!nav.is_menu_open());
    assert!(!has_class(&menu, "active"));
    assert_eq!(inline(&middle_bar, "opacity"), "");
    assert_eq!(inline(&first_bar, "transform"), "");
}

#[wasm_bindgen_test(async)]
async fn portfolio_filter_hides_other_categories() {
    let fx = Fixture::mount(
        r#"<button class="filter-btn active" data-filter="all"></button>
           <button class="filter-btn" data-filter="web"></button>
           <div class="portfolio-item" data-category="web"></div>
           <div class="portfolio-item" data-category="logo"></div>"#,
    );
    let filter = PortfolioFilter::new(fx.page(), &SiteConfig::default()).unwrap();
    let web = fx.find(r#"[data-filter="web"]"#);
    web.dyn_ref::<HtmlElement>().unwrap().click();

    assert_eq!(filter.active_filter(), "web");
    assert!(has_class(&web, "active"));
    assert!(!has_class(&fx.find(r#"[data-filter="all"]"#), "active"));

    TimeoutFuture::new(250).await;
    let web_item = fx.find(r#"[data-category="web"]"#);
    let logo_item = fx.find(r#"[data-category="logo"]"#);
    assert!(has_class(&web_item, "visible"));
    assert!(has_class(&logo_item, "hidden"));
    assert!(!has_class(&logo_item, "visible"));
}

#[wasm_bindgen_test]
fn clicking_a_step_marks_only_that_step() {
    let fx = Fixture::mount(
        r#"<div class="process-step active" data-step="1"></div>
           <div class="process-step" data-step="2"></div>
           <div class="process-step" data-step="3"></div>"#,
    );
    let steps = ProcessSteps::new(fx.page(), &SiteConfig::default()).unwrap();
    fx.find(r#"[data-step="3"]"#)
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .click();

    assert_eq!(steps.current_step(), 3);
    let active = fx.root.query_selector_all(".process-step.active").unwrap();
    assert_eq!(active.length(), 1);
    assert!(has_class(&fx.find(r#"[data-step="3"]"#), "active"));
    steps.pause();
}

const FORM: &str = r#"
    <form id="contact-form">
      <div><input name="name" required></div>
      <div><input name="email" required></div>
      <button type="submit">メッセージを送信</button>
    </form>"#;

fn set_value(fx: &Fixture, selector: &str, value: &str) {
    fx.find(selector)
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_value(value);
}

#[wasm_bindgen_test]
fn contact_form_reports_field_errors() {
    let fx = Fixture::mount(FORM);
    let form = ContactForm::new(fx.page(), &SiteConfig::default())
        .unwrap()
        .expect("form present");

    assert!(!form.validate_form());
    let errors = fx.root.query_selector_all(".field-error").unwrap();
    assert_eq!(errors.length(), 2);
    assert_eq!(
        fx.find(".field-error").text_content().as_deref(),
        Some("この項目は必須です")
    );

    set_value(&fx, "[name=name]", "Hana");
    set_value(&fx, "[name=email]", "not-an-email");
    assert!(!form.validate_form());
    let errors = fx.root.query_selector_all(".field-error").unwrap();
    assert_eq!(errors.length(), 1);
    assert_eq!(
        fx.find(".field-error").text_content().as_deref(),
        Some("正しいメールアドレスを入力してください")
    );

    // Editing clears the message without revalidating.
    let email = fx.find("[name=email]");
    email.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(fx.root.query_selector_all(".field-error").unwrap().length(), 0);
    assert_eq!(inline(&email, "border-color"), "");
}

#[wasm_bindgen_test(async)]
async fn valid_submission_runs_send_sequence() {
    let fx = Fixture::mount(FORM);
    let config = SiteConfig {
        submit_latency_ms: 50,
        submit_success_hold_ms: 100,
        ..SiteConfig::default()
    };
    let form = ContactForm::new(fx.page(), &config)
        .unwrap()
        .expect("form present");
    set_value(&fx, "[name=name]", "Hana");
    set_value(&fx, "[name=email]", "hana@example.jp");

    let button: HtmlButtonElement = fx.find("button").dyn_into().unwrap();
    fx.find("form")
        .dispatch_event(&Event::new("submit").unwrap())
        .unwrap();
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("送信中..."));

    TimeoutFuture::new(80).await;
    assert_eq!(button.text_content().as_deref(), Some("送信完了！"));
    let name: HtmlInputElement = fx.find("[name=name]").dyn_into().unwrap();
    assert_eq!(name.value(), "");
    assert!(document().query_selector(".notification-success").unwrap().is_some());
    assert!(form.notifier().is_showing());

    TimeoutFuture::new(120).await;
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("メッセージを送信"));

    if let Some(toast) = document().query_selector(".notification").unwrap() {
        toast.remove();
    }
}

fn remove_all(selector: &str) {
    let nodes = document().query_selector_all(selector).unwrap();
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            el.remove();
        }
    }
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test(async)]
async fn debounce_forwards_only_the_last_call_of_a_burst() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut debounced = debounce(40, move |n: u32| sink.borrow_mut().push(n));

    for n in 1..=4 {
        debounced(n);
    }
    assert!(seen.borrow().is_empty());

    TimeoutFuture::new(120).await;
    assert_eq!(*seen.borrow(), vec![4]);

    debounced(5);
    TimeoutFuture::new(120).await;
    assert_eq!(*seen.borrow(), vec![4, 5]);
}

#[wasm_bindgen_test(async)]
async fn reveal_fills_skill_bars_and_counts_stats_once() {
    let fx = Fixture::pinned(
        r#"<div class="skills">
             <div class="skill-category">
               <div class="skill-progress" data-width="80%"></div>
             </div>
           </div>
           <div class="stats">
             <h3 class="section-title">Stats</h3>
             <span class="stat-number" data-target="150+">0</span>
           </div>"#,
    );
    let config = SiteConfig {
        skill_bar_stagger_ms: 10,
        count_up_duration_ms: 160,
        count_up_tick_ms: 16,
        ..SiteConfig::default()
    };
    let animation = AnimationController::new(fx.page(), &config).unwrap();

    let category = fx.find(".skill-category");
    assert!(has_class(&category, "fade-in"));
    assert!(has_class(&category, "visible"));
    assert_eq!(animation.revealed_count(), 2);

    TimeoutFuture::new(600).await;
    let bar = fx.find(".skill-progress");
    assert_eq!(inline(&bar, "width"), "80%");
    assert!(has_class(&bar, "animate"));
    let stat = fx.find(".stat-number");
    assert_eq!(stat.text_content().as_deref(), Some("150"));

    // Scrolling again neither re-reveals nor restarts the count.
    animation.handle_scroll();
    assert_eq!(animation.revealed_count(), 2);
    TimeoutFuture::new(40).await;
    assert_eq!(stat.text_content().as_deref(), Some("150"));
}

#[wasm_bindgen_test(async)]
async fn steps_advance_and_wrap_on_the_interval() {
    let fx = Fixture::mount(
        r#"<div class="process-step active" data-step="1"></div>
           <div class="process-step" data-step="2"></div>"#,
    );
    let config = SiteConfig {
        step_interval_ms: 100,
        ..SiteConfig::default()
    };
    let steps = ProcessSteps::new(fx.page(), &config).unwrap();
    assert_eq!(steps.current_step(), 1);

    TimeoutFuture::new(150).await;
    assert_eq!(steps.current_step(), 2);
    assert!(has_class(&fx.find(r#"[data-step="2"]"#), "active"));
    assert!(!has_class(&fx.find(r#"[data-step="1"]"#), "active"));

    TimeoutFuture::new(100).await;
    assert_eq!(steps.current_step(), 1);
    steps.pause();
}

#[wasm_bindgen_test(async)]
async fn hovering_a_step_pauses_and_leaving_restarts() {
    let fx = Fixture::mount(
        r#"<div class="process-step active" data-step="1"></div>
           <div class="process-step" data-step="2"></div>"#,
    );
    let config = SiteConfig {
        step_interval_ms: 100,
        ..SiteConfig::default()
    };
    let steps = ProcessSteps::new(fx.page(), &config).unwrap();
    let first = fx.find(r#"[data-step="1"]"#);

    first.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    TimeoutFuture::new(250).await;
    assert_eq!(steps.current_step(), 1);

    first.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    // A fresh interval: nothing happens before a full period has passed.
    TimeoutFuture::new(50).await;
    assert_eq!(steps.current_step(), 1);
    TimeoutFuture::new(100).await;
    assert_eq!(steps.current_step(), 2);
    steps.pause();
}

#[wasm_bindgen_test(async)]
async fn new_notification_replaces_the_current_one() {
    let config = SiteConfig {
        notification_enter_delay_ms: 10,
        notification_ttl_ms: 300,
        notification_exit_ms: 50,
        ..SiteConfig::default()
    };
    let notifier = Notifier::new(document(), &config);

    notifier.show("first", NotificationKind::Info);
    assert!(notifier.is_showing());
    TimeoutFuture::new(200).await;

    notifier.show("second", NotificationKind::Error);
    let toasts = document().query_selector_all(".notification").unwrap();
    assert_eq!(toasts.length(), 1);
    let toast = document().query_selector(".notification").unwrap().unwrap();
    assert!(has_class(&toast, "notification-error"));
    assert_eq!(toast.text_content().as_deref(), Some("second"));

    // The first toast's removal time passes without touching the second.
    TimeoutFuture::new(225).await;
    assert!(notifier.is_showing());
    assert!(!inline(&toast, "transform").contains("100%"));

    TimeoutFuture::new(200).await;
    assert!(!notifier.is_showing());
}

#[wasm_bindgen_test]
fn anchor_clicks_do_not_touch_the_location_hash() {
    let fx = Fixture::mount(
        r##"<a class="jump" href="#smooth-target">jump</a>
            <div id="smooth-target"></div>"##,
    );
    SmoothScroll::new(fx.page()).unwrap();
    click(&fx.find(".jump"));

    let hash = web_sys::window().unwrap().location().hash().unwrap();
    assert_ne!(hash, "#smooth-target");
}

#[wasm_bindgen_test(async)]
async fn scroll_indicator_scrolls_to_about() {
    let fx = Fixture::mount(
        r#"<div class="scroll-indicator">more</div>
           <div style="height:3000px"></div>
           <section id="about" style="height:200px"></section>
           <div style="height:3000px"></div>"#,
    );
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    SmoothScroll::new(fx.page()).unwrap();

    click(&fx.find(".scroll-indicator"));
    TimeoutFuture::new(1500).await;
    assert!(window.scroll_y().unwrap() > 0.0);

    window.scroll_to_with_x_and_y(0.0, 0.0);
}

const PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[wasm_bindgen_test(async)]
async fn deferred_images_load_when_visible() {
    let fx = Fixture::pinned(&format!(
        r#"<img class="lazy" data-src="{PIXEL}" style="width:10px;height:10px">"#
    ));
    let optimizer = PerformanceOptimizer::new(fx.page()).unwrap();
    assert!(optimizer.observes_images());

    TimeoutFuture::new(300).await;
    let image = fx.find("img");
    assert_eq!(image.get_attribute("src").as_deref(), Some(PIXEL));
    assert!(!has_class(&image, "lazy"));
}

#[wasm_bindgen_test]
fn page_load_timing_is_not_lost_after_load() {
    let window = web_sys::window().unwrap();
    let complete = document().ready_state() == "complete";
    let timing = measure_page_load(&window).unwrap();
    let expected = if complete {
        LoadTiming::Logged
    } else {
        LoadTiming::Deferred
    };
    assert_eq!(timing, expected);
}

#[wasm_bindgen_test]
fn console_logger_installs_once() {
    let window = web_sys::window().unwrap();
    console::init(&window);
    console::init(&window);
    assert!(log::max_level() >= log::LevelFilter::Info);
    log::info!("console logger ready");
}

#[wasm_bindgen_test(async)]
async fn long_task_watcher_survives_a_busy_frame() {
    let window = web_sys::window().unwrap();
    watch_long_tasks(&window, 50.0);

    let performance = window.performance().unwrap();
    let start = performance.now();
    while performance.now() - start < 80.0 {}
    TimeoutFuture::new(50).await;
}

fn field(object: &JsValue, path: &[&str]) -> JsValue {
    path.iter().fold(object.clone(), |value, key| {
        Reflect::get(&value, &JsValue::from_str(key)).unwrap()
    })
}

#[wasm_bindgen_test]
fn snapshot_reports_controller_state() {
    let fx = Fixture::mount(
        r#"<ul id="nav-menu"></ul>
           <div id="hamburger"><span></span></div>
           <div class="process-step active" data-step="1"></div>
           <div class="process-step" data-step="2"></div>"#,
    );
    let window = web_sys::window().unwrap();
    let app = App::initialize(window, document(), SiteConfig::default()).unwrap();
    app.navigation.toggle_menu();
    app.process.set_active_step(2);
    app.theme.set(Theme::Dark);

    let snapshot: JsValue = app.snapshot().unwrap().into();
    assert_eq!(field(&snapshot, &["navigation", "menuOpen"]), JsValue::TRUE);
    assert_eq!(
        field(&snapshot, &["portfolioFilter", "activeFilter"]).as_string(),
        Some("all".to_string())
    );
    assert_eq!(
        field(&snapshot, &["processStepController", "currentStep"]).as_f64(),
        Some(2.0)
    );
    assert_eq!(
        field(&snapshot, &["themeController", "theme"]).as_string(),
        Some("dark".to_string())
    );
    assert!(field(&snapshot, &["contactFormController"]).is_undefined());

    app.process.pause();
    app.theme.set(Theme::Light);
    drop(fx);
    remove_all(".theme-toggle");
}

#[wasm_bindgen_test]
fn theme_toggle_round_trip() {
    let fx = Fixture::mount("");
    let root: HtmlElement = document().document_element().unwrap().dyn_into().unwrap();
    let read = || {
        Theme::Light
            .palette()
            .iter()
            .map(|(property, _)| root.style().get_property_value(property).unwrap())
            .collect::<Vec<_>>()
    };

    let theme = ThemeController::new(fx.page()).unwrap();
    let before = read();
    assert_eq!(before[0], "#1f2937");

    theme.toggle();
    assert_eq!(theme.current(), Theme::Dark);
    assert_ne!(read(), before);

    theme.toggle();
    assert_eq!(read(), before);

    remove_all(".theme-toggle");
}
