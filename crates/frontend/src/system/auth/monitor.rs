//! Periodic local expiry check for the active session token
//!
//! Runs entirely on the client: every tick re-reads the token's `exp`
//! claim and tears the session down when it has passed, instead of waiting
//! for the next request to come back 401.

use std::cell::Cell;
use std::rc::Rc;

use contracts::system::token;
use gloo_timers::callback::Interval;

/// Tokens are valid for 24 hours, so up to a minute of detection latency
/// is acceptable and keeps wakeups rare.
const CHECK_PERIOD_MS: u32 = 60_000;

/// Cancellation handle for a running expiry watch.
///
/// A tick that races a stop checks the liveness flag first, so firing
/// after [`ExpiryMonitor::stop`] is a guaranteed no-op.
pub struct ExpiryMonitor {
    alive: Rc<Cell<bool>>,
    interval: Option<Interval>,
}

impl ExpiryMonitor {
    /// Start watching `token`. `on_expired` runs at most once, on the first
    /// tick that finds the token expired (undecodable counts as expired).
    pub fn start(token: String, on_expired: impl Fn() + 'static) -> Self {
        let alive = Rc::new(Cell::new(true));
        let guard = Rc::clone(&alive);
        let interval = Interval::new(CHECK_PERIOD_MS, move || {
            if !guard.get() {
                return;
            }
            if token::is_expired(&token) {
                guard.set(false);
                on_expired();
            }
        });
        Self {
            alive,
            interval: Some(interval),
        }
    }

    /// Idempotent; safe to call on an already-stopped monitor.
    pub fn stop(&mut self) {
        self.alive.set(false);
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }
}

impl Drop for ExpiryMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
