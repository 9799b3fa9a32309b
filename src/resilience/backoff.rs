//! Poll schedule for waiting on remote chain state.
//!
//! Delays double from `base` up to `cap`. Jitter only shortens a delay, so
//! the cap is a hard upper bound and a long wait never overshoots the
//! configured polling ceiling.

use rand::Rng;
use std::time::Duration;

/// Delay before poll number `attempt` (1-based; 0 is treated as 1).
///
/// Up to 10% of the delay is shaved off at random so that several waiters
/// started together drift apart.
pub fn poll_backoff(attempt: u32, base: Duration, cap: Duration) -> Duration {
    let doublings = attempt.saturating_sub(1).min(31);
    let delay = base.saturating_mul(1u32 << doublings).min(cap);

    let jitter_ms = (delay.as_millis() / 10) as u64;
    if jitter_ms == 0 {
        return delay;
    }
    delay - Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
}
