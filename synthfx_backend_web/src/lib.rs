// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser integration for synthfx.
//!
//! This crate wires the pure logic from `synthfx_core` to the live page:
//!
//! - [`WebSessionStore`]: `sessionStorage`-backed session clock storage
//! - [`Ripples`]: click-ripple attacher with a dynamic-subtree watcher
//! - [`SubtreeWatcher`]: `MutationObserver` subscription for inserted nodes
//! - [`init`]: one-shot initialization of both effects
//!
//! The module start hook runs [`init`] at DOM-ready, so loading the wasm
//! module from a page is all the integration a theme needs.

mod continuity;
mod ripple;
mod storage;
mod style;
mod watcher;

pub use ripple::Ripples;
pub use storage::WebSessionStore;
pub use watcher::SubtreeWatcher;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Module start hook: installs diagnostics and schedules [`init`] for
/// DOM-ready.
///
/// Runs [`init`] immediately if the document has already finished parsing,
/// otherwise on `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed; keep that one.
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    on_dom_ready(&document)
}

/// Dispatches `init` now or at `DOMContentLoaded`, depending on
/// `document.readyState`.
fn on_dom_ready(document: &Document) -> Result<(), JsValue> {
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let once = Closure::once_into_js(move || {
            if let Err(err) = init(&doc) {
                log::error!("synthfx init failed: {err:?}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", once.unchecked_ref())
    } else {
        init(document)
    }
}

/// Initializes both effects on `document`.
///
/// Background continuity is best-effort: storage failures are logged and
/// swallowed, and ripple installation proceeds regardless. Style injection
/// is idempotent, but each call installs an independent ripple handler, so
/// call this once per page load (the start hook already does).
///
/// # Errors
///
/// Returns an error only for structural DOM failures (no `<head>`, no
/// `<body>`).
pub fn init(document: &Document) -> Result<(), JsValue> {
    continuity::apply(document);
    let fx = Ripples::install(document)?;
    fx.forget();
    Ok(())
}
