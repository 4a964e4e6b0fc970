//! FloatPanel browser bindings
//!
//! Builds the debug panel and floating window in the DOM and routes
//! mouse/touch events into the core drag controller.

mod error;

pub use error::{PanelError, PanelResult};

#[cfg(target_arch = "wasm32")]
mod debug_panel;
#[cfg(target_arch = "wasm32")]
mod desk;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod floating_window;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{make_draggable, mount_all, mount_floating_window, run_wasm};

/// Tag name of the floating window host element.
pub const FLOATING_WINDOW_TAG: &str = "floating-window";

/// Attribute holding the text shown inside a panel.
pub const INFORMATION_ATTRIBUTE: &str = "data-information";

/// Attribute holding an optional JSON [`floatpanel_core::PanelConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Selectors used by pages that embed the debug panel markup directly.
pub mod debug_selectors {
    pub const HANDLE: &str = "[data-lc-moveHeader]";
    pub const BODY: &str = "[data-lc-moveBody]";
    pub const CONTENT: &str = "[data-lc-content]";
}
