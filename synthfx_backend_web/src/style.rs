// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Idempotent stylesheet injection.

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlElement};

/// Ensures a `<style id="...">` element with the given CSS is present in
/// `<head>`.
///
/// A second call with the same id is a no-op, so re-initialization never
/// stacks duplicate rules.
pub(crate) fn ensure(document: &Document, id: &str, css: &str) -> Result<(), JsValue> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let el: HtmlElement = document.create_element("style")?.unchecked_into();
    el.set_id(id);
    el.set_text_content(Some(css));
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&el)?;
    Ok(())
}
