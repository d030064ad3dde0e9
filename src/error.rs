use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Failures that stop the bootstrapper.
///
/// Absent optional elements are not errors; controllers simply skip them.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("javascript exception: {0}")]
    Js(String),
    #[error("invalid site config: {0}")]
    Config(String),
    #[error("invalid site config json: {0}")]
    ConfigJson(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        SiteError::Js(text)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(err: SiteError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

