//! Count-up: interpolates a displayed integer from 0 to a target.

use std::time::Duration;

use super::mvi::{dispatch, Intent, Reducer, UiState};
use super::scheduler::{Fired, Scheduler, SubscriptionId};
use super::Component;

pub const DEFAULT_COUNT_UP_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountState {
    target: u64,
    duration: Duration,
    elapsed: Duration,
    displayed: u64,
}

impl UiState for CountState {}

impl CountState {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            elapsed: Duration::ZERO,
            displayed: 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// `floor(target * min(elapsed / duration, 1))`, in integer arithmetic so
/// the last frame lands exactly on `target`.
pub fn interpolate(target: u64, elapsed: Duration, duration: Duration) -> u64 {
    if elapsed >= duration {
        return target;
    }
    let scaled = u128::from(target) * elapsed.as_nanos() / duration.as_nanos();
    scaled as u64
}

#[derive(Debug)]
pub enum CountIntent {
    Restart { target: u64, duration: Duration },
    /// Animation frame, `elapsed` measured from the first frame.
    Frame { elapsed: Duration },
}

impl Intent for CountIntent {}

pub struct CountReducer;

impl Reducer for CountReducer {
    type State = CountState;
    type Intent = CountIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CountIntent::Restart { target, duration } => CountState::new(target, duration),
            CountIntent::Frame { .. } if state.is_complete() && state.displayed == state.target => {
                state
            }
            CountIntent::Frame { elapsed } => {
                let elapsed = elapsed.max(state.elapsed);
                let value = interpolate(state.target, elapsed, state.duration);
                CountState {
                    elapsed,
                    displayed: value.max(state.displayed),
                    ..state
                }
            }
        }
    }
}

/// Mounted count-up driven by per-frame callbacks.
#[derive(Debug)]
pub struct CountUp {
    state: CountState,
    frames: Option<SubscriptionId>,
    started_at: Option<Duration>,
}

impl CountUp {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            state: CountState::new(target, duration),
            frames: None,
            started_at: None,
        }
    }

    pub fn state(&self) -> &CountState {
        &self.state
    }

    pub fn displayed(&self) -> u64 {
        self.state.displayed()
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_some()
    }

    /// Restart from zero if `target` or `duration` differ from the current
    /// configuration. Returns true when a restart happened.
    pub fn reconfigure(
        &mut self,
        target: u64,
        duration: Duration,
        scheduler: &mut Scheduler,
    ) -> bool {
        if target == self.state.target() && duration == self.state.duration() {
            return false;
        }
        self.restart(target, duration, scheduler);
        true
    }

    pub fn restart(&mut self, target: u64, duration: Duration, scheduler: &mut Scheduler) {
        scheduler.cancel_slot(&mut self.frames);
        self.started_at = None;
        dispatch::<CountReducer>(&mut self.state, CountIntent::Restart { target, duration });
        self.frames = Some(scheduler.request_frames());
    }
}

impl Component for CountUp {
    fn mount(&mut self, scheduler: &mut Scheduler) {
        let (target, duration) = (self.state.target(), self.state.duration());
        self.restart(target, duration, scheduler);
    }

    fn unmount(&mut self, scheduler: &mut Scheduler) {
        scheduler.cancel_slot(&mut self.frames);
        self.started_at = None;
    }

    fn on_frame(&mut self, fired: &Fired, scheduler: &mut Scheduler) -> bool {
        if !fired.hit(self.frames) {
            return false;
        }
        let start = *self.started_at.get_or_insert(fired.now());
        let elapsed = fired.now().saturating_sub(start);
        let changed = dispatch::<CountReducer>(&mut self.state, CountIntent::Frame { elapsed });
        if self.state.is_complete() {
            scheduler.cancel_slot(&mut self.frames);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn interpolate_is_linear_and_floored() {
        assert_eq!(interpolate(100, 0 * MS, 1000 * MS), 0);
        assert_eq!(interpolate(100, 333 * MS, 1000 * MS), 33);
        assert_eq!(interpolate(100, 999 * MS, 1000 * MS), 99);
        assert_eq!(interpolate(100, 1000 * MS, 1000 * MS), 100);
        assert_eq!(interpolate(100, 5000 * MS, 1000 * MS), 100);
    }

    #[test]
    fn zero_duration_completes_on_first_frame() {
        let state = CountReducer::reduce(
            CountState::new(7, Duration::ZERO),
            CountIntent::Frame { elapsed: Duration::ZERO },
        );
        assert_eq!(state.displayed(), 7);
        assert!(state.is_complete());
    }

    #[test]
    fn frame_never_regresses() {
        let state = CountReducer::reduce(
            CountState::new(100, 1000 * MS),
            CountIntent::Frame { elapsed: 500 * MS },
        );
        let state = CountReducer::reduce(state, CountIntent::Frame { elapsed: 100 * MS });
        assert_eq!(state.displayed(), 50);
    }

    #[test]
    fn reconfigure_with_same_values_keeps_progress() {
        let mut scheduler = Scheduler::new();
        let mut count = CountUp::new(10, 100 * MS);
        count.mount(&mut scheduler);
        assert!(!count.reconfigure(10, 100 * MS, &mut scheduler));
        assert_eq!(scheduler.active(), 1);
    }
}
