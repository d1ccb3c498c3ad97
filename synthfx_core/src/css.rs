// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stylesheet fragment builders.
//!
//! All CSS the effect layer injects is assembled here as plain strings so
//! the exact output is testable natively. The web backend only decides
//! *where* the fragments go (a one-time keyframe `<style>`, a per-load
//! override `<style>`, or an overlay's inline `cssText`).

use alloc::format;
use alloc::string::String;

use crate::continuity::DelayOffsets;
use crate::ripple::RippleGeometry;

/// Selector for the animated page background.
pub const BACKGROUND_SELECTOR: &str = ".synth-bg";

/// Selector matching ripple-enabled buttons.
pub const BUTTON_SELECTOR: &str = ".btn";

/// Name of the injected ripple keyframe animation.
pub const RIPPLE_ANIMATION: &str = "synthfx-ripple";

/// One-time keyframe definition for the ripple expand-and-fade.
pub const RIPPLE_KEYFRAMES: &str =
    "@keyframes synthfx-ripple { to { transform: scale(2); opacity: 0; } }";

/// Builds the per-page-load override that fast-forwards both background
/// cycles.
///
/// Marked `!important` so it wins over the theme stylesheet's own
/// `animation` shorthand.
#[must_use]
pub fn continuity_override(offsets: DelayOffsets) -> String {
    format!(
        "{sel}::before {{ animation-delay: {glow}ms !important; }}\n\
         {sel}::after {{ animation-delay: {stars}ms !important; }}\n",
        sel = BACKGROUND_SELECTOR,
        glow = offsets.glow_ms,
        stars = offsets.stars_ms,
    )
}

/// Builds the inline `cssText` for one ripple overlay.
///
/// The overlay is absolutely positioned inside the button (which the caller
/// forces to `position: relative; overflow: hidden`), ignores pointer
/// events, and starts at scale zero so the keyframes drive the whole
/// expansion.
#[must_use]
pub fn overlay_css(geometry: RippleGeometry) -> String {
    format!(
        "position: absolute; \
         background: rgba(255, 255, 255, 0.4); \
         border-radius: 50%; \
         pointer-events: none; \
         transform: scale(0); \
         animation: {RIPPLE_ANIMATION} 0.6s ease-out; \
         width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
        size = geometry.size,
        left = geometry.left,
        top = geometry.top,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuity_override_formats_both_rules() {
        let css = continuity_override(DelayOffsets {
            glow_ms: -1234,
            stars_ms: -9876,
        });
        assert_eq!(
            css,
            ".synth-bg::before { animation-delay: -1234ms !important; }\n\
             .synth-bg::after { animation-delay: -9876ms !important; }\n"
        );
    }

    #[test]
    fn continuity_override_zero_phase() {
        let css = continuity_override(DelayOffsets {
            glow_ms: 0,
            stars_ms: 0,
        });
        assert!(
            css.contains("animation-delay: 0ms !important"),
            "zero offset still emits an explicit override"
        );
    }

    #[test]
    fn overlay_css_places_and_sizes() {
        let css = overlay_css(RippleGeometry {
            size: 100.0,
            left: -10.0,
            top: -40.0,
        });
        assert!(css.contains("width: 100px; height: 100px;"));
        assert!(css.contains("left: -10px; top: -40px;"));
        assert!(css.contains("transform: scale(0)"));
        assert!(css.contains("animation: synthfx-ripple 0.6s ease-out"));
        assert!(css.contains("pointer-events: none"));
    }

    #[test]
    fn keyframes_match_animation_name() {
        assert!(
            RIPPLE_KEYFRAMES.contains(RIPPLE_ANIMATION),
            "keyframes must define the animation the overlay references"
        );
    }
}
