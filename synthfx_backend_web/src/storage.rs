// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `sessionStorage`-backed [`SessionStore`].

use synthfx_core::continuity::{SessionStore, StoreError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`SessionStore`] over the window's `sessionStorage`.
///
/// Acquisition is itself fallible: browsers surface disabled storage either
/// as an absent object or by throwing on property access, and both map to
/// [`StoreError`] here.
#[derive(Clone, Debug)]
pub struct WebSessionStore {
    storage: Storage,
}

impl WebSessionStore {
    /// Acquires the window's session storage.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] when no window or storage object exists;
    /// [`StoreError::Denied`] when the property access throws (privacy
    /// settings).
    pub fn acquire() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = window
            .session_storage()
            .map_err(|err| denied(&err))?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl SessionStore for WebSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|err| denied(&err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|err| denied(&err))
    }
}

/// Wraps a thrown JS value as a [`StoreError::Denied`] with a readable
/// reason.
fn denied(err: &JsValue) -> StoreError {
    StoreError::Denied {
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}
