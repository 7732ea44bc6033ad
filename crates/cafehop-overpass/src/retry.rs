//! Retry policy for transient Overpass failures.
//!
//! A transient failure (rate limiting, gateway errors, client timeout) is
//! retried against the same mirror after a linear backoff; anything else
//! abandons the mirror so the client can fail over to the next one.

use std::time::Duration;

use crate::error::OverpassError;

/// HTTP statuses worth retrying in place before failing over.
const TRANSIENT_STATUSES: &[u16] = &[429, 502, 503, 504];

/// Attempt and backoff bounds for a single mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per mirror, including the first.
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    /// Added to the base once per completed attempt.
    pub step_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            base_delay_ms: 400,
            step_ms: 300,
        }
    }
}

impl RetryPolicy {
    /// Backoff before the retry that follows `completed_attempts` failures
    /// on the current mirror.
    #[must_use]
    pub fn delay_after(&self, completed_attempts: u32) -> Duration {
        let ms = self
            .base_delay_ms
            .saturating_add(self.step_ms.saturating_mul(u64::from(completed_attempts)));
        Duration::from_millis(ms)
    }
}

/// Returns `true` for failures likely to succeed on an immediate retry of
/// the same mirror.
#[must_use]
pub fn is_transient(err: &OverpassError) -> bool {
    match err {
        OverpassError::Http(e) => {
            e.is_timeout()
                || e.is_connect()
                || e.status()
                    .is_some_and(|s| TRANSIENT_STATUSES.contains(&s.as_u16()))
        }
        OverpassError::InvalidMirror { .. } | OverpassError::MirrorsExhausted => false,
    }
}
