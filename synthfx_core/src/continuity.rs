// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session-anchored animation phase.
//!
//! The theme's background runs two CSS-driven loops (a glow pulse and a
//! rising starfield). Without intervention each page load restarts both at
//! phase zero, which makes navigation visibly "reset" the background. This
//! module anchors the phase to a timestamp stored once per browsing session:
//! on every load the elapsed session time is folded into each cycle's period
//! and applied as a negative `animation-delay`, so the browser renders the
//! loop as already in progress.
//!
//! Storage is abstracted behind [`SessionStore`] so the bootstrap logic is
//! testable without a browser. The whole feature is best-effort: callers
//! catch [`StoreError`] at the init boundary and simply skip the override.

use alloc::string::{String, ToString};

use thiserror::Error;

/// Storage key holding the session start timestamp (epoch milliseconds,
/// string-encoded).
pub const SESSION_START_KEY: &str = "synthfx_start_time";

/// Nominal period of the background glow cycle (`.synth-bg::before`).
pub const GLOW_PERIOD_MS: u64 = 8000;

/// Nominal period of the starfield rise cycle (`.synth-bg::after`).
pub const STARFIELD_PERIOD_MS: u64 = 12_000;

/// Session-scoped key-value storage capability.
///
/// The web backend implements this over `sessionStorage`; tests use
/// in-memory fakes. Both operations are fallible because browsers can
/// disable storage outright (privacy modes) or reject individual accesses.
pub trait SessionStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Failure accessing session-scoped storage.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No storage object exists in this context.
    #[error("session storage is unavailable")]
    Unavailable,
    /// The browser rejected the access (privacy settings, quota).
    #[error("session storage access denied: {reason}")]
    Denied {
        /// Platform-provided description of the rejection.
        reason: String,
    },
}

/// Returns the session start timestamp, writing `now_ms` on first access.
///
/// A stored value that does not parse as a `u64` is treated as absent and
/// rewritten; feeding garbage through would disable the animations entirely
/// (`NaN` delays), which is worse than restarting the cycle once.
pub fn session_start_ms(store: &impl SessionStore, now_ms: u64) -> Result<u64, StoreError> {
    if let Some(raw) = store.get(SESSION_START_KEY)?
        && let Ok(start) = raw.trim().parse::<u64>()
    {
        return Ok(start);
    }
    store.set(SESSION_START_KEY, &now_ms.to_string())?;
    Ok(now_ms)
}

/// Milliseconds elapsed since the session started.
///
/// Clamps to zero if the stored start is in the future (the wall clock can
/// move backwards mid-session).
pub fn session_elapsed_ms(store: &impl SessionStore, now_ms: u64) -> Result<u64, StoreError> {
    let start = session_start_ms(store, now_ms)?;
    Ok(now_ms.saturating_sub(start))
}

/// Negative delay that fast-forwards a looping animation of `period_ms` to
/// the phase it would have reached after `elapsed_ms`.
///
/// The result is always in `(-period_ms, 0]`.
///
/// # Panics
///
/// Panics in debug builds if `period_ms` is zero; both callers pass the
/// fixed nonzero periods above.
#[must_use]
pub const fn phase_offset_ms(elapsed_ms: u64, period_ms: u64) -> i64 {
    debug_assert!(period_ms > 0, "animation period must be nonzero");
    // The remainder is < period_ms <= 12_000, so the cast cannot wrap.
    -((elapsed_ms % period_ms) as i64)
}

/// Per-cycle delay offsets applied on each page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayOffsets {
    /// Offset for the glow cycle, in `(-8000, 0]` milliseconds.
    pub glow_ms: i64,
    /// Offset for the starfield cycle, in `(-12000, 0]` milliseconds.
    pub stars_ms: i64,
}

/// Computes the offsets for both background cycles from the elapsed session
/// time.
#[must_use]
pub const fn delay_offsets(elapsed_ms: u64) -> DelayOffsets {
    DelayOffsets {
        glow_ms: phase_offset_ms(elapsed_ms, GLOW_PERIOD_MS),
        stars_ms: phase_offset_ms(elapsed_ms, STARFIELD_PERIOD_MS),
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::ToOwned;
    use alloc::collections::BTreeMap;
    use core::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemStore {
        map: RefCell<BTreeMap<String, String>>,
    }

    impl SessionStore for MemStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.map.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.map
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    struct FailingStore;

    impl SessionStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn first_access_writes_now() {
        let store = MemStore::default();
        let start = session_start_ms(&store, 1_700_000_000_000).unwrap();
        assert_eq!(start, 1_700_000_000_000);
        assert_eq!(
            store.get(SESSION_START_KEY).unwrap().as_deref(),
            Some("1700000000000")
        );
    }

    #[test]
    fn later_access_keeps_first_start() {
        let store = MemStore::default();
        let _ = session_start_ms(&store, 1000).unwrap();
        // A later page load in the same session must not overwrite.
        let start = session_start_ms(&store, 9000).unwrap();
        assert_eq!(start, 1000);
        assert_eq!(session_elapsed_ms(&store, 9000).unwrap(), 8000);
    }

    #[test]
    fn garbage_value_is_rewritten() {
        let store = MemStore::default();
        store.set(SESSION_START_KEY, "not a number").unwrap();
        let start = session_start_ms(&store, 5000).unwrap();
        assert_eq!(start, 5000);
        assert_eq!(
            store.get(SESSION_START_KEY).unwrap().as_deref(),
            Some("5000")
        );
    }

    #[test]
    fn future_start_clamps_elapsed_to_zero() {
        let store = MemStore::default();
        store.set(SESSION_START_KEY, "10000").unwrap();
        assert_eq!(session_elapsed_ms(&store, 4000).unwrap(), 0);
    }

    #[test]
    fn failing_store_surfaces_error() {
        assert_eq!(
            session_elapsed_ms(&FailingStore, 1000),
            Err(StoreError::Unavailable)
        );
    }

    #[test]
    fn phase_offset_exact_values() {
        assert_eq!(phase_offset_ms(0, GLOW_PERIOD_MS), 0);
        assert_eq!(phase_offset_ms(1, GLOW_PERIOD_MS), -1);
        assert_eq!(phase_offset_ms(7999, GLOW_PERIOD_MS), -7999);
        assert_eq!(phase_offset_ms(8000, GLOW_PERIOD_MS), 0);
        assert_eq!(phase_offset_ms(20_000, STARFIELD_PERIOD_MS), -8000);
    }

    #[test]
    fn phase_offset_stays_in_range() {
        for &elapsed in &[0_u64, 1, 4000, 7999, 8000, 12_000, 1_234_567, u64::MAX] {
            for &period in &[GLOW_PERIOD_MS, STARFIELD_PERIOD_MS] {
                let off = phase_offset_ms(elapsed, period);
                assert!(off <= 0, "offset {off} must not be positive");
                assert!(
                    off > -(period as i64),
                    "offset {off} must exceed -{period}"
                );
            }
        }
    }

    #[test]
    fn offsets_cover_both_cycles() {
        let offsets = delay_offsets(20_000);
        assert_eq!(offsets.glow_ms, -4000);
        assert_eq!(offsets.stars_ms, -8000);
    }
}
