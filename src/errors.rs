use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum HeaderError {
    WindowUnavailable { message: &'static str },
    InvalidInput { message: String },
    JsError(String),
}

impl HeaderError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        HeaderError::InvalidInput {
            message: message.into(),
        }
    }
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::WindowUnavailable { message } => {
                write!(f, "Window unavailable: {message}")
            }
            HeaderError::InvalidInput { message } => write!(f, "Invalid input: {message}"),
            HeaderError::JsError(msg) => write!(f, "JavaScript Error: {msg}"),
        }
    }
}

impl std::error::Error for HeaderError {}

impl From<JsValue> for HeaderError {
    fn from(err: JsValue) -> Self {
        HeaderError::JsError(
            err.as_string()
                .unwrap_or_else(|| "Unknown JS error".to_string()),
        )
    }
}

impl From<HeaderError> for JsValue {
    fn from(error: HeaderError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
