// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure logic for the synthfx page-effects layer.
//!
//! synthfx adds two pieces of visual polish to a themed page: the looping
//! background animations keep their phase across page navigations within a
//! browsing session, and buttons play a circular ripple at the click point.
//! This crate holds everything that can be computed without a browser:
//!
//! **[`continuity`]** — Session-anchored animation phase. Bootstraps a
//! per-session start timestamp through the [`SessionStore`] capability and
//! derives the negative `animation-delay` offsets that fast-forward the
//! background cycles.
//!
//! **[`ripple`]** — Overlay placement math for the click ripple.
//!
//! **[`css`]** — Stylesheet fragment builders: the delay override rule, the
//! ripple keyframes, and the overlay's inline style.
//!
//! The browser integration lives in `synthfx_backend_web`, which implements
//! [`SessionStore`] over `sessionStorage` and applies the fragments built
//! here to the live document.
//!
//! [`SessionStore`]: continuity::SessionStore

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod continuity;
pub mod css;
pub mod ripple;
