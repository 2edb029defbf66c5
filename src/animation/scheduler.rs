//! Frame and interval scheduling for the page's animations.
//!
//! The terminal has no `requestAnimationFrame` or `setInterval`, so the
//! runtime owns a [`Scheduler`] and calls [`Scheduler::advance`] once per
//! frame. Components subscribe for every frame or for a fixed interval and
//! must cancel what they subscribed when they unmount or restart.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a live subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Fires on every frame.
    EveryFrame,
    /// Fires on the first frame at or after each due time.
    Every(Duration),
}

#[derive(Debug, Clone)]
struct Subscription {
    cadence: Cadence,
    next_due: Duration,
}

/// Subscriptions that fired on one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fired {
    now: Duration,
    ids: Vec<SubscriptionId>,
}

impl Fired {
    /// Scheduler time of the frame.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// True when `id` is set and fired on this frame.
    pub fn hit(&self, id: Option<SubscriptionId>) -> bool {
        id.is_some_and(|id| self.contains(id))
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    subscriptions: BTreeMap<SubscriptionId, Subscription>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live subscriptions.
    pub fn active(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn request_frames(&mut self) -> SubscriptionId {
        self.subscribe(Cadence::EveryFrame)
    }

    /// Subscribe to a fixed-interval timer. The first tick is due one
    /// period from now.
    pub fn set_interval(&mut self, period: Duration) -> SubscriptionId {
        self.subscribe(Cadence::Every(period))
    }

    pub fn subscribe(&mut self, cadence: Cadence) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let next_due = match cadence {
            Cadence::EveryFrame => self.now,
            Cadence::Every(period) => self.now + period,
        };
        self.subscriptions
            .insert(id, Subscription { cadence, next_due });
        id
    }

    /// Release a subscription. Returns false if it was not live.
    pub fn cancel(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    /// Cancel the subscription held in `slot`, leaving it empty.
    pub fn cancel_slot(&mut self, slot: &mut Option<SubscriptionId>) {
        if let Some(id) = slot.take() {
            self.cancel(id);
        }
    }

    /// Run one frame at `now`. Time never moves backwards; an earlier
    /// `now` is treated as the current time.
    pub fn advance(&mut self, now: Duration) -> Fired {
        self.now = self.now.max(now);
        let mut ids = Vec::new();
        for (id, subscription) in self.subscriptions.iter_mut() {
            if self.now < subscription.next_due {
                continue;
            }
            ids.push(*id);
            if let Cadence::Every(period) = subscription.cadence {
                subscription.next_due = self.now + period;
            }
        }
        Fired { now: self.now, ids }
    }

    /// Advance by `step` from the current time.
    pub fn advance_by(&mut self, step: Duration) -> Fired {
        let now = self.now + step;
        self.advance(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn frame_subscription_fires_every_frame() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.request_frames();
        for _ in 0..3 {
            assert!(scheduler.advance_by(16 * MS).contains(id));
        }
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_interval(20 * MS);
        assert!(!scheduler.advance(10 * MS).contains(id));
        assert!(scheduler.advance(20 * MS).contains(id));
        assert!(!scheduler.advance(30 * MS).contains(id));
        assert!(scheduler.advance(40 * MS).contains(id));
    }

    #[test]
    fn late_frame_fires_interval_once_without_catch_up() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_interval(20 * MS);
        assert!(scheduler.advance(100 * MS).contains(id));
        assert!(!scheduler.advance(110 * MS).contains(id));
        assert!(scheduler.advance(120 * MS).contains(id));
    }

    #[test]
    fn cancelled_subscription_never_fires() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.request_frames();
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance_by(16 * MS).is_empty());
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn clock_does_not_run_backwards() {
        let mut scheduler = Scheduler::new();
        scheduler.advance(50 * MS);
        let fired = scheduler.advance(10 * MS);
        assert_eq!(fired.now(), 50 * MS);
    }

    #[test]
    fn cancel_slot_empties_slot() {
        let mut scheduler = Scheduler::new();
        let mut slot = Some(scheduler.request_frames());
        scheduler.cancel_slot(&mut slot);
        assert!(slot.is_none());
        assert_eq!(scheduler.active(), 0);
    }
}
