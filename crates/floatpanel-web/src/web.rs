//! WebAssembly entry point and exported functions.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::{debug_panel, debug_selectors, dom, floating_window, FLOATING_WINDOW_TAG};

/// Make existing markup draggable as a debug panel.
///
/// Missing elements are logged and otherwise ignored.
#[wasm_bindgen(js_name = makeDraggable)]
pub fn make_draggable(handle: &str, target: &str, content: &str) {
    if let Err(err) = debug_panel::attach(handle, target, content) {
        log::warn!("Debug panel not attached: {}", err);
    }
}

/// Mount a floating window into `host`. Returns the window number.
#[wasm_bindgen(js_name = mountFloatingWindow)]
pub fn mount_floating_window(host: &Element) -> Option<u32> {
    match floating_window::mount(host) {
        Ok(id) => Some(id.0),
        Err(err) => {
            log::warn!("Floating window not mounted: {}", err);
            None
        }
    }
}

/// Mount every `tag` element on the page. Returns how many were mounted.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all(tag: &str) -> u32 {
    floating_window::mount_all(tag).unwrap_or_else(|err| {
        log::warn!("Could not scan for <{}>: {}", tag, err);
        0
    })
}

/// Initialize logging and mount the panels present in the page.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    let windows = mount_all(FLOATING_WINDOW_TAG);
    log::info!("Mounted {} floating window(s)", windows);

    // Pages that ship the debug panel markup get it wired automatically.
    let has_debug_markup = dom::document()
        .ok()
        .and_then(|document| document.query_selector(debug_selectors::HANDLE).ok().flatten())
        .is_some();
    if has_debug_markup {
        make_draggable(
            debug_selectors::HANDLE,
            debug_selectors::BODY,
            debug_selectors::CONTENT,
        );
    }
}
