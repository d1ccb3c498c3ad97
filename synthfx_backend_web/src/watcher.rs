// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural mutation subscription.
//!
//! [`SubtreeWatcher`] wraps a `MutationObserver` configured for `childList`
//! mutations over a whole subtree and delivers every inserted element node
//! to a callback. Construction registers the observation; [`Drop`]
//! disconnects it; [`forget`](SubtreeWatcher::forget) leaks the JS callback
//! for page-lifetime subscriptions.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// Watches a DOM subtree for inserted elements.
pub struct SubtreeWatcher {
    observer: MutationObserver,
    closure: ObserverClosure,
}

impl SubtreeWatcher {
    /// Starts observing `root`'s subtree.
    ///
    /// `on_inserted` receives each added node that is an element; text and
    /// comment nodes are filtered out before the callback runs.
    ///
    /// # Errors
    ///
    /// Propagates observer construction/registration failures from the
    /// browser.
    pub fn observe(
        root: &Element,
        mut on_inserted: impl FnMut(&Element) + 'static,
    ) -> Result<Self, JsValue> {
        let closure: ObserverClosure = Closure::wrap(Box::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                for record in records.iter() {
                    let record: MutationRecord = record.unchecked_into();
                    let added = record.added_nodes();
                    for i in 0..added.length() {
                        if let Some(node) = added.item(i)
                            && let Some(element) = node.dyn_ref::<Element>()
                        {
                            on_inserted(element);
                        }
                    }
                }
            },
        ));

        let observer = MutationObserver::new(closure.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(root, &init)?;

        Ok(Self { observer, closure })
    }

    /// Stops delivering notifications. Also runs on [`Drop`].
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }

    /// Leaks the JS callback so the subscription lives for the page.
    pub fn forget(self) {
        // Skips Drop: the observer stays connected and the closure is never
        // invalidated.
        std::mem::forget(self);
    }
}

impl Drop for SubtreeWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl std::fmt::Debug for SubtreeWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubtreeWatcher")
            .field("observer", &"MutationObserver")
            .field("closure", &self.closure)
            .finish()
    }
}
