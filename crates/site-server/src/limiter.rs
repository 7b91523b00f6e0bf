//! Fixed-window request limiter keyed by client IP.

use fnv::FnvHashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

// Stale windows are swept once the table grows past this many clients
const PRUNE_THRESHOLD: usize = 4096;

#[derive(Clone, Copy, Debug)]
struct Window {
    start: Instant,
    count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

pub struct RateLimiter {
    max: u32,
    window: Duration,
    windows: Mutex<FnvHashMap<IpAddr, Window>>,
}

impl RateLimiter {
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            windows: Mutex::new(FnvHashMap::default()),
        }
    }

    pub fn limit(&self) -> u32 {
        self.max
    }

    pub fn check(&self, ip: IpAddr) -> RateDecision {
        self.check_at(ip, Instant::now())
    }

    /// Count one request from `ip` at `now`.
    pub fn check_at(&self, ip: IpAddr, now: Instant) -> RateDecision {
        // a poisoned table is still a valid table
        let mut windows = self.windows.lock().unwrap_or_else(|p| p.into_inner());
        if windows.len() >= PRUNE_THRESHOLD {
            let span = self.window;
            windows.retain(|_, w| now.saturating_duration_since(w.start) < span);
        }

        let w = windows.entry(ip).or_insert(Window { start: now, count: 0 });
        let age = now.saturating_duration_since(w.start);
        if age >= self.window {
            *w = Window { start: now, count: 0 };
        }
        if w.count >= self.max {
            return RateDecision::Limited {
                retry_after: self.window.saturating_sub(now.saturating_duration_since(w.start)),
            };
        }
        w.count += 1;
        RateDecision::Allowed {
            remaining: self.max - w.count,
        }
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().map(|w| w.len()).unwrap_or(0)
    }
}

/// Whole seconds for a `Retry-After` header, rounded up.
pub fn retry_after_secs(d: Duration) -> u64 {
    let secs = d.as_secs();
    if d.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
