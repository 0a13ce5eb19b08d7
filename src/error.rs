//! Binder Errors

use wasm_bindgen::{JsCast, JsValue};

/// Result type for binding operations
pub type BindResult<T> = Result<T, BindError>;

/// Errors raised while attaching behavior to the page
#[derive(Debug, Clone, PartialEq)]
pub enum BindError {
    NoWindow,
    NoDocument,
    /// A configured selector was rejected by the DOM
    Selector(String),
    /// The embedded configuration could not be parsed
    Config(String),
    Js(String),
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindError::NoWindow => write!(f, "No window available"),
            BindError::NoDocument => write!(f, "No document available"),
            BindError::Selector(sel) => write!(f, "Invalid selector: {}", sel),
            BindError::Config(msg) => write!(f, "Invalid config: {}", msg),
            BindError::Js(msg) => write!(f, "JS error: {}", msg),
        }
    }
}

impl std::error::Error for BindError {}

impl From<serde_json::Error> for BindError {
    fn from(err: serde_json::Error) -> Self {
        BindError::Config(err.to_string())
    }
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        let msg = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        BindError::Js(msg)
    }
}
