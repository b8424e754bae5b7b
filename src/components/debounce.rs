//! Trailing-Edge Debounce
//!
//! Buffers a burst of events and runs the action only after the interval
//! passes without a newer event. Each schedule bumps a generation counter;
//! a sleeping task that wakes to a newer generation drops its action. A
//! task that wakes after the owning component unmounted finds the counter
//! gone and drops its action the same way.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay applied to search input before it reaches the controller
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Clone, Copy)]
pub struct Debouncer {
    generation: StoredValue<u32>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: StoredValue::new(0),
            delay_ms,
        }
    }

    /// Schedule `action`, superseding any pending one.
    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let this = *self;
        let scheduled = self.arm();
        spawn_local(async move {
            TimeoutFuture::new(this.delay_ms).await;
            if this.should_fire(scheduled) {
                action();
            }
        });
    }

    /// Drop any pending action without scheduling a new one.
    pub fn cancel(&self) {
        self.generation.update_value(|g| *g += 1);
    }

    fn arm(&self) -> u32 {
        let scheduled = self.generation.get_value() + 1;
        self.generation.set_value(scheduled);
        scheduled
    }

    fn should_fire(&self, scheduled: u32) -> bool {
        self.generation.try_get_value() == Some(scheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_newer_schedule_supersedes_pending_one() {
        let owner = Owner::new();
        let debouncer = owner.with(|| Debouncer::new(SEARCH_DEBOUNCE_MS));
        let first = debouncer.arm();
        let second = debouncer.arm();
        assert!(!debouncer.should_fire(first));
        assert!(debouncer.should_fire(second));
        drop(owner);
    }

    #[test]
    fn test_cancel_drops_pending_action() {
        let owner = Owner::new();
        let debouncer = owner.with(|| Debouncer::new(SEARCH_DEBOUNCE_MS));
        let pending = debouncer.arm();
        debouncer.cancel();
        assert!(!debouncer.should_fire(pending));
        drop(owner);
    }

    #[test]
    fn test_unmounted_owner_reads_as_cancelled() {
        let owner = Owner::new();
        let debouncer = owner.with(|| Debouncer::new(SEARCH_DEBOUNCE_MS));
        let pending = debouncer.arm();
        drop(owner);
        assert!(!debouncer.should_fire(pending));
    }
}
