//! Process-wide request quota.
//!
//! The API grants a fixed number of requests per second to an API key,
//! regardless of how many requests are in flight. [`QuotaLimiter`] hands out
//! that budget one slot at a time, refilling it once per one-second window.

use std::num::NonZeroU32;
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

use crate::{ErrorKind, Result};

/// Length of a quota window
const WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct Window {
    /// Requests still admissible in the current window
    remaining: u32,
    /// When the current window was opened, `None` before the first request
    started: Option<Instant>,
}

/// Gate that admits at most `capacity` requests per one-second window.
///
/// Every caller of [`QuotaLimiter::acquire`] goes through one mutex. When
/// the window is exhausted, the caller holding the mutex sleeps until the
/// window rolls over *without* releasing it, and the other callers queue up
/// behind the sleeper.
#[derive(Debug)]
pub struct QuotaLimiter {
    capacity: NonZeroU32,
    window: Mutex<Window>,
}

impl QuotaLimiter {
    /// Create a limiter admitting `capacity` requests per second.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidQpsLimit`] if `capacity` is zero.
    pub fn new(capacity: u32) -> Result<Self> {
        let capacity = NonZeroU32::new(capacity).ok_or(ErrorKind::InvalidQpsLimit(capacity))?;
        Ok(Self {
            capacity,
            window: Mutex::new(Window {
                remaining: 0,
                started: None,
            }),
        })
    }

    /// Number of requests admitted per window
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity.get()
    }

    /// Requests still admissible in the current window
    pub async fn remaining(&self) -> u32 {
        self.window.lock().await.remaining
    }

    /// Wait until one more request may be issued and consume its slot.
    pub async fn acquire(&self) {
        let mut window = self.window.lock().await;

        if window.remaining == 0 {
            if let Some(started) = window.started {
                let rollover = started + WINDOW;
                let now = Instant::now();
                if now < rollover {
                    debug!(
                        "Request quota of {}/s exhausted, waiting {}ms",
                        self.capacity,
                        (rollover - now).as_millis()
                    );
                    sleep_until(rollover).await;
                }
            }
            window.started = Some(Instant::now());
            window.remaining = self.capacity.get();
        }

        window.remaining -= 1;
    }
}
