// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-ripple attachment and overlay lifecycle.
//!
//! One shared click closure is attached to every element matching
//! [`css::BUTTON_SELECTOR`], present at install time or inserted later (via
//! [`SubtreeWatcher`]). Sharing a single JS function reference makes
//! re-attachment idempotent: `addEventListener` ignores duplicate
//! registrations of the same function on the same target.
//!
//! Each click appends one overlay `<span>` to the button and schedules its
//! unconditional removal after [`RIPPLE_DURATION_MS`]. Rapid clicks stack
//! independent overlays, each on its own removal timer.

use std::rc::Rc;

use kurbo::{Point, Rect};
use synthfx_core::css;
use synthfx_core::ripple::{RIPPLE_DURATION_MS, ripple_geometry};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, Node, NodeList};

use crate::style;
use crate::watcher::SubtreeWatcher;

/// Element id of the one-time keyframe `<style>`.
const KEYFRAMES_STYLE_ID: &str = "synthfx-ripple-keyframes";

type ClickClosure = Closure<dyn FnMut(MouseEvent)>;

/// Installs and owns the ripple machinery for one document.
///
/// Dropping disconnects the subtree watcher and invalidates the click
/// handler; call [`forget`](Self::forget) for the normal page-lifetime
/// install.
pub struct Ripples {
    click: Rc<ClickClosure>,
    watcher: SubtreeWatcher,
}

impl Ripples {
    /// Injects the ripple keyframes and wires every current and future
    /// match of [`css::BUTTON_SELECTOR`].
    ///
    /// # Errors
    ///
    /// Returns an error when the document has no `<head>`/`<body>` or the
    /// observer cannot be registered.
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        style::ensure(document, KEYFRAMES_STYLE_ID, css::RIPPLE_KEYFRAMES)?;

        let click: Rc<ClickClosure> =
            Rc::new(Closure::wrap(Box::new(on_click) as Box<dyn FnMut(MouseEvent)>));

        attach_all(&document.query_selector_all(css::BUTTON_SELECTOR)?, &click);

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
        let handler = Rc::clone(&click);
        let watcher = SubtreeWatcher::observe(&body, move |inserted| {
            // Selector matching runs over descendants of the inserted root
            // only; a root that itself matches is not wired here.
            if let Ok(found) = inserted.query_selector_all(css::BUTTON_SELECTOR) {
                attach_all(&found, &handler);
            }
        })?;

        Ok(Self { click, watcher })
    }

    /// Consumes the installer, leaking its JS closures so the handlers stay
    /// valid for the lifetime of the page.
    pub fn forget(self) {
        self.watcher.forget();
        std::mem::forget(self.click);
    }
}

impl std::fmt::Debug for Ripples {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ripples")
            .field("click", &self.click)
            .field("watcher", &self.watcher)
            .finish()
    }
}

/// Attaches the shared ripple handler to every node in a query result.
///
/// Called both at install time (over the whole document) and from the
/// subtree watcher (over an inserted subtree). Listener registration on a
/// live node does not fail in practice; errors are discarded.
fn attach_all(matches: &NodeList, click: &ClickClosure) {
    for i in 0..matches.length() {
        if let Some(node) = matches.item(i) {
            let _ = attach(&node, click);
        }
    }
}

/// Attaches the shared ripple handler to one matched node.
fn attach(node: &Node, click: &ClickClosure) -> Result<(), JsValue> {
    node.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
}

/// Builds and appends one overlay, scheduling its removal.
fn on_click(event: MouseEvent) {
    let Some(button) = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let rect = button.get_bounding_client_rect();
    let bounds = Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom());
    let point = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    let geometry = ripple_geometry(bounds, point);

    let Some(doc) = button.owner_document() else {
        return;
    };
    let Ok(el) = doc.create_element("span") else {
        return;
    };
    let overlay: HtmlElement = el.unchecked_into();
    overlay.style().set_css_text(&css::overlay_css(geometry));

    // The overlay positions against the button and must not spill past its
    // visible bounds.
    let s = button.style();
    let _ = s.set_property("position", "relative");
    let _ = s.set_property("overflow", "hidden");

    let _ = button.append_child(&overlay);
    schedule_removal(overlay, RIPPLE_DURATION_MS);
}

/// Removes `overlay` after `delay_ms` via a one-shot timeout whose JS
/// closure frees itself after firing.
fn schedule_removal(overlay: HtmlElement, delay_ms: u64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(move || overlay.remove());
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    );
}
