//! Errors raised while building panels in the DOM.

use thiserror::Error;

/// DOM binding errors.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("No global window")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type for DOM operations.
pub type PanelResult<T> = Result<T, PanelError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PanelError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}
