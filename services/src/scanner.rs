//! Scan intake: the seam between the camera pipeline and the claim flow.
//!
//! The capture pipeline is a black box that delivers either decoded text or a
//! categorized [`CaptureError`]. Decodes land here as a pending candidate;
//! committing the claim requires the user's explicit confirmation, so
//! scanning alone never marks attendance. One candidate is in flight at a
//! time: decodes arriving while one is pending (or mid-processing) are
//! dropped, which keeps rapid repeat scans of the same frame from racing a
//! duplicate claim.

use crate::error::CaptureError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
pub struct ScanIntake {
    pending: Mutex<Option<String>>,
    in_flight: AtomicBool,
}

impl ScanIntake {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Accepts a decoded payload as the pending candidate. Returns `false`
    /// when the decode is dropped: blank payload, a candidate already
    /// pending, or another decode still being processed.
    pub fn on_decoded(&self, payload: &str) -> bool {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            log::debug!("decode dropped: another decode is in flight");
            return false;
        }

        let accepted = {
            let mut pending = self.lock();
            let text = payload.trim();
            if pending.is_some() {
                log::debug!("decode dropped: a candidate is already pending");
                false
            } else if text.is_empty() {
                false
            } else {
                *pending = Some(text.to_owned());
                true
            }
        };

        self.in_flight.store(false, Ordering::SeqCst);
        accepted
    }

    /// Surfaces a capture failure as its user-facing message. Persisted
    /// state is never touched; the user re-invokes scanning when ready.
    pub fn on_capture_error(&self, error: CaptureError) -> String {
        log::warn!("capture pipeline failure: {error:?}");
        error.to_string()
    }

    /// The candidate awaiting confirmation, if any.
    pub fn pending(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Takes the candidate for the confirmed claim, clearing the intake for
    /// the next scan.
    pub fn confirm(&self) -> Option<String> {
        self.lock().take()
    }

    /// Discards the candidate ("scan again").
    pub fn clear(&self) {
        self.lock().take();
    }
}
