// Error types for the page components.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("no element with id #{0}")]
    MissingElement(String),

    #[error("#{0} is not a canvas element")]
    NotACanvas(String),

    #[error("canvas did not provide a 2d context")]
    NoContext,

    #[error("no global window or document")]
    NoWindow,

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        FieldError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FieldError>;
