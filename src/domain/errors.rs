use wasm_bindgen::JsValue;

/// Errors raised by browser adapters. None of them reach the page user:
/// callers log and fall back to a placeholder or default.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ElementNotFound(String),
    BrowserApi(String),
    Config(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ElementNotFound(what) => write!(f, "Element not found: {}", what),
            AppError::BrowserApi(msg) => write!(f, "Browser API error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Wrap a JS exception with the name of the call that raised it.
pub fn browser_error(context: &str, err: JsValue) -> AppError {
    AppError::BrowserApi(format!("{}: {:?}", context, err))
}

pub type AppResult<T> = Result<T, AppError>;
