//! Single-slot tick scheduling.
//!
//! The scheduler does not own a clock. It records which tick is pending and
//! how long to wait for it; the front end turns that into a real timer and
//! hands the token back when the timer fires. Any token other than the one
//! currently pending is stale and must be ignored.

use std::time::Duration;

/// Identifies one armed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

/// The tick waiting to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTick {
    pub token: TickToken,
    pub delay: Duration,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
    pending: Option<PendingTick>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a tick after `delay`, replacing any pending one
    pub fn arm(&mut self, delay: Duration) -> TickToken {
        self.generation += 1;
        let token = TickToken(self.generation);
        self.pending = Some(PendingTick { token, delay });
        token
    }

    /// Cancel the pending tick, if any
    pub fn disarm(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<PendingTick> {
        self.pending
    }

    /// Consume the pending tick if `token` is the one armed.
    ///
    /// Returns false for stale or cancelled tokens.
    pub fn fire(&mut self, token: TickToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_and_fire() {
        let mut scheduler = Scheduler::new();
        let token = scheduler.arm(Duration::from_millis(170));

        assert_eq!(
            scheduler.pending(),
            Some(PendingTick {
                token,
                delay: Duration::from_millis(170)
            })
        );
        assert!(scheduler.fire(token));
        assert_eq!(scheduler.pending(), None);
        assert!(!scheduler.fire(token));
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.arm(Duration::from_millis(170));
        let second = scheduler.arm(Duration::from_millis(163));

        assert_ne!(first, second);
        assert!(!scheduler.fire(first));
        assert!(scheduler.fire(second));
    }

    #[test]
    fn test_disarm_invalidates_token() {
        let mut scheduler = Scheduler::new();
        let token = scheduler.arm(Duration::from_millis(170));
        scheduler.disarm();

        assert!(!scheduler.fire(token));
        assert_eq!(scheduler.pending(), None);
    }

    #[test]
    fn test_token_not_reused_after_disarm() {
        let mut scheduler = Scheduler::new();
        let old = scheduler.arm(Duration::from_millis(170));
        scheduler.disarm();
        let new = scheduler.arm(Duration::from_millis(170));

        assert_ne!(old, new);
        assert!(!scheduler.fire(old));
        assert!(scheduler.fire(new));
    }
}
