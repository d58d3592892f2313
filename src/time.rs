//! Cancellable periodic tasks driven by wall-clock milliseconds.
//!
//! `draw_web()` calls at ~60fps. Instead of registering browser intervals,
//! each simulator owns a `PeriodicTask` that the render loop polls with the
//! current time. This keeps scheduling deterministic and testable without a
//! browser.

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodicTask {
    /// Milliseconds between fires.
    period_ms: f64,
    /// Next due timestamp (ms). `None` while stopped.
    next_due: Option<f64>,
    /// Total fires since creation.
    pub fires: u64,
}

impl PeriodicTask {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            next_due: None,
            fires: 0,
        }
    }

    /// Arm the task. The first fire is one period after `now_ms`.
    /// Restarting an armed task reschedules it.
    pub fn start(&mut self, now_ms: f64) {
        self.next_due = Some(now_ms + self.period_ms);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when the task is due at `now_ms`.
    ///
    /// Missed periods (backgrounded tab, suspended laptop) collapse into a
    /// single fire, like a browser interval does; the next fire is scheduled
    /// one full period after `now_ms` in that case.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let due = match self.next_due {
            Some(due) if now_ms >= due => due,
            _ => return false,
        };
        let mut next = due + self.period_ms;
        if next <= now_ms {
            next = now_ms + self.period_ms;
        }
        self.next_due = Some(next);
        self.fires += 1;
        true
    }
}
