// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session-synced background continuity.
//!
//! Reads (or bootstraps) the session start timestamp, folds the elapsed
//! time into both background cycles, and injects the resulting
//! `animation-delay` override. Visual polish only: every failure degrades
//! to "the background restarts at phase zero" with one diagnostic line.

use synthfx_core::continuity::{DelayOffsets, StoreError, delay_offsets, session_elapsed_ms};
use synthfx_core::css;
use web_sys::Document;

use crate::storage::WebSessionStore;
use crate::style;

/// Element id of the injected override `<style>`.
const CONTINUITY_STYLE_ID: &str = "synthfx-continuity";

/// Applies the delay override for this page load, best-effort.
pub(crate) fn apply(document: &Document) {
    match offsets_now() {
        Ok(offsets) => {
            let rule = css::continuity_override(offsets);
            if let Err(err) = style::ensure(document, CONTINUITY_STYLE_ID, &rule) {
                log::warn!("background continuity: style injection failed: {err:?}");
            }
        }
        Err(err) => {
            log::warn!("background continuity disabled: {err}");
        }
    }
}

/// Computes the current page load's delay offsets from session storage and
/// the wall clock.
fn offsets_now() -> Result<DelayOffsets, StoreError> {
    let store = WebSessionStore::acquire()?;
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Date.now() is a positive epoch-milliseconds f64; it fits in u64"
    )]
    let now_ms = js_sys::Date::now() as u64;
    let elapsed = session_elapsed_ms(&store, now_ms)?;
    Ok(delay_offsets(elapsed))
}
