// Behavior that does not touch the DOM compiles everywhere so it can be
// tested on the host.

pub mod animation;
pub mod config;
pub mod debounce;
pub mod error;
pub mod form;
pub mod navigation;
pub mod notification;
pub mod performance;
pub mod portfolio;
pub mod process;
pub mod theme;
pub mod viewport;

pub use config::SiteConfig;
pub use error::SiteError;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod animation;
    pub mod app;
    pub mod console;
    pub mod contact;
    pub mod dom;
    pub mod navigation;
    pub mod performance;
    pub mod portfolio;
    pub mod process;
    pub mod smooth_scroll;
    pub mod theme;
    pub mod timing;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        console::init(&window);

        app::boot(window, document)?;
        Ok(())
    }
}
