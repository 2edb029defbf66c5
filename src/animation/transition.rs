//! Declarative enter/exit transitions (fade-in, slide-up, in-view reveal).

use std::time::Duration;

use super::scheduler::{Fired, Scheduler, SubscriptionId};
use super::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub delay: Duration,
}

impl TransitionSpec {
    pub const fn new(duration_ms: u64, delay_ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Entering { started: Option<Duration>, from: f32 },
    Exiting { started: Option<Duration>, from: f32 },
}

/// Progress from hidden (0.0) to shown (1.0), eased out.
///
/// `enter` and `exit` can interrupt each other; the new run starts from
/// the current progress so the element never jumps.
#[derive(Debug)]
pub struct Transition {
    spec: TransitionSpec,
    progress: f32,
    phase: Phase,
    frames: Option<SubscriptionId>,
    /// Enter only the first time (scroll-triggered reveals).
    once: bool,
    entered: bool,
}

impl Transition {
    pub fn new(spec: TransitionSpec) -> Self {
        Self {
            spec,
            progress: 0.0,
            phase: Phase::Idle,
            frames: None,
            once: false,
            entered: false,
        }
    }

    /// A transition that plays its entrance at most once.
    pub fn once(spec: TransitionSpec) -> Self {
        Self {
            once: true,
            ..Self::new(spec)
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Eased progress, for placement and opacity.
    pub fn eased(&self) -> f32 {
        ease_out(self.progress)
    }

    pub fn is_visible(&self) -> bool {
        self.progress > 0.0
    }

    pub fn is_animating(&self) -> bool {
        self.frames.is_some()
    }

    pub fn enter(&mut self, scheduler: &mut Scheduler) {
        if self.once && self.entered {
            return;
        }
        if matches!(self.phase, Phase::Entering { .. }) {
            return;
        }
        if self.progress >= 1.0 {
            // An exit requested since the last frame has not moved anything yet.
            self.settle(scheduler);
            return;
        }
        self.entered = true;
        self.phase = Phase::Entering {
            started: None,
            from: self.progress,
        };
        self.ensure_frames(scheduler);
    }

    pub fn exit(&mut self, scheduler: &mut Scheduler) {
        if self.once || matches!(self.phase, Phase::Exiting { .. }) {
            return;
        }
        if self.progress <= 0.0 {
            self.settle(scheduler);
            return;
        }
        self.phase = Phase::Exiting {
            started: None,
            from: self.progress,
        };
        self.ensure_frames(scheduler);
    }

    fn ensure_frames(&mut self, scheduler: &mut Scheduler) {
        if self.frames.is_none() {
            self.frames = Some(scheduler.request_frames());
        }
    }

    /// Drop a pending run and stay where the progress already is.
    fn settle(&mut self, scheduler: &mut Scheduler) {
        self.phase = Phase::Idle;
        scheduler.cancel_slot(&mut self.frames);
    }

    fn finish(&mut self, progress: f32, scheduler: &mut Scheduler) {
        self.progress = progress;
        self.phase = Phase::Idle;
        scheduler.cancel_slot(&mut self.frames);
    }

    /// Fraction of the run completed at `now`, after the delay.
    fn run_fraction(&self, started: Duration, now: Duration, distance: f32) -> f32 {
        let elapsed = now.saturating_sub(started);
        let delay = self.spec.delay;
        if elapsed < delay {
            return 0.0;
        }
        let span = self.spec.duration.mul_f32(distance.max(f32::EPSILON));
        if span.is_zero() {
            return 1.0;
        }
        ((elapsed - delay).as_secs_f32() / span.as_secs_f32()).min(1.0)
    }
}

impl Component for Transition {
    /// Mounting does not start anything; call [`Transition::enter`].
    fn mount(&mut self, _scheduler: &mut Scheduler) {}

    fn unmount(&mut self, scheduler: &mut Scheduler) {
        scheduler.cancel_slot(&mut self.frames);
        self.phase = Phase::Idle;
    }

    fn on_frame(&mut self, fired: &Fired, scheduler: &mut Scheduler) -> bool {
        if !fired.hit(self.frames) {
            return false;
        }
        let now = fired.now();
        let before = self.progress;
        match self.phase {
            Phase::Idle => scheduler.cancel_slot(&mut self.frames),
            Phase::Entering { started, from } => {
                let started = started.unwrap_or(now);
                self.phase = Phase::Entering {
                    started: Some(started),
                    from,
                };
                let fraction = self.run_fraction(started, now, 1.0 - from);
                self.progress = from + (1.0 - from) * fraction;
                if fraction >= 1.0 {
                    self.finish(1.0, scheduler);
                }
            }
            Phase::Exiting { started, from } => {
                let started = started.unwrap_or(now);
                self.phase = Phase::Exiting {
                    started: Some(started),
                    from,
                };
                let fraction = self.run_fraction(started, now, from);
                self.progress = from * (1.0 - fraction);
                if fraction >= 1.0 {
                    self.finish(0.0, scheduler);
                }
            }
        }
        self.progress != before
    }
}

/// Cubic ease-out.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn enter_reaches_full_progress_and_releases_frames() {
        let mut scheduler = Scheduler::new();
        let mut transition = Transition::new(TransitionSpec::new(300, 0));
        transition.enter(&mut scheduler);
        let fired = scheduler.advance_by(MS);
        transition.on_frame(&fired, &mut scheduler);
        assert_eq!(transition.progress(), 0.0);
        let fired = scheduler.advance_by(300 * MS);
        transition.on_frame(&fired, &mut scheduler);
        assert_eq!(transition.progress(), 1.0);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn delay_holds_progress_at_zero() {
        let mut scheduler = Scheduler::new();
        let mut transition = Transition::new(TransitionSpec::new(100, 200));
        transition.enter(&mut scheduler);
        for _ in 0..10 {
            let fired = scheduler.advance_by(10 * MS);
            transition.on_frame(&fired, &mut scheduler);
        }
        assert_eq!(transition.progress(), 0.0);
        assert!(transition.is_animating());
    }

    #[test]
    fn once_transition_ignores_exit() {
        let mut scheduler = Scheduler::new();
        let mut transition = Transition::once(TransitionSpec::new(0, 0));
        transition.enter(&mut scheduler);
        let fired = scheduler.advance_by(MS);
        transition.on_frame(&fired, &mut scheduler);
        transition.exit(&mut scheduler);
        assert_eq!(transition.progress(), 1.0);
        assert!(!transition.is_animating());
    }

    #[test]
    fn exit_before_first_frame_cancels_pending_entrance() {
        let mut scheduler = Scheduler::new();
        let mut transition = Transition::new(TransitionSpec::new(300, 0));
        transition.enter(&mut scheduler);
        transition.exit(&mut scheduler);
        assert!(!transition.is_animating());
        assert_eq!(scheduler.active(), 0);
        let fired = scheduler.advance_by(500 * MS);
        transition.on_frame(&fired, &mut scheduler);
        assert_eq!(transition.progress(), 0.0);
    }

    #[test]
    fn enter_before_first_frame_cancels_pending_exit() {
        let mut scheduler = Scheduler::new();
        let mut transition = Transition::new(TransitionSpec::new(0, 0));
        transition.enter(&mut scheduler);
        let fired = scheduler.advance_by(MS);
        transition.on_frame(&fired, &mut scheduler);
        assert_eq!(transition.progress(), 1.0);

        transition.exit(&mut scheduler);
        transition.enter(&mut scheduler);
        assert!(!transition.is_animating());
        let fired = scheduler.advance_by(MS);
        transition.on_frame(&fired, &mut scheduler);
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn ease_out_is_clamped() {
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(2.0), 1.0);
    }
}
