//! Character-by-character text reveal on a fixed interval.

use std::time::Duration;

use super::mvi::{dispatch, Intent, Reducer, UiState};
use super::scheduler::{Scheduler, SubscriptionId};
use super::Component;

pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealState {
    source: String,
    /// Revealed prefix length, in chars.
    shown: usize,
}

impl UiState for RevealState {}

impl RevealState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            shown: 0,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn total_len(&self) -> usize {
        self.source.chars().count()
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.total_len()
    }

    /// The revealed prefix. Never splits a character.
    pub fn visible(&self) -> &str {
        match self.source.char_indices().nth(self.shown) {
            Some((end, _)) => &self.source[..end],
            None => &self.source,
        }
    }
}

#[derive(Debug)]
pub enum RevealIntent {
    /// Replace the source and start over from an empty prefix.
    Restart { source: String },
    /// One timer tick: reveal one more character.
    Tick,
}

impl Intent for RevealIntent {}

pub struct RevealReducer;

impl Reducer for RevealReducer {
    type State = RevealState;
    type Intent = RevealIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RevealIntent::Restart { source } => RevealState::new(source),
            RevealIntent::Tick if state.is_complete() => state,
            RevealIntent::Tick => RevealState {
                shown: state.shown + 1,
                ..state
            },
        }
    }
}

/// Mounted text reveal: owns the interval timer that drives the reducer.
#[derive(Debug)]
pub struct TextReveal {
    state: RevealState,
    interval: Duration,
    timer: Option<SubscriptionId>,
}

impl TextReveal {
    pub fn new(source: impl Into<String>, interval: Duration) -> Self {
        Self {
            state: RevealState::new(source),
            interval,
            timer: None,
        }
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn visible(&self) -> &str {
        self.state.visible()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Start over with a new source. The previous timer is released first.
    pub fn restart(&mut self, source: impl Into<String>, scheduler: &mut Scheduler) {
        scheduler.cancel_slot(&mut self.timer);
        dispatch::<RevealReducer>(
            &mut self.state,
            RevealIntent::Restart {
                source: source.into(),
            },
        );
        self.start(scheduler);
    }

    fn start(&mut self, scheduler: &mut Scheduler) {
        if self.state.is_complete() {
            return;
        }
        self.timer = Some(scheduler.set_interval(self.interval));
    }
}

impl Component for TextReveal {
    fn mount(&mut self, scheduler: &mut Scheduler) {
        let source = self.state.source().to_string();
        self.restart(source, scheduler);
    }

    fn unmount(&mut self, scheduler: &mut Scheduler) {
        scheduler.cancel_slot(&mut self.timer);
    }

    fn on_frame(&mut self, fired: &super::Fired, scheduler: &mut Scheduler) -> bool {
        if !fired.hit(self.timer) {
            return false;
        }
        let changed = dispatch::<RevealReducer>(&mut self.state, RevealIntent::Tick);
        if self.state.is_complete() {
            scheduler.cancel_slot(&mut self.timer);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reveals_one_char() {
        let state = RevealReducer::reduce(RevealState::new("Hi"), RevealIntent::Tick);
        assert_eq!(state.visible(), "H");
    }

    #[test]
    fn tick_after_completion_is_noop() {
        let state = RevealState::new("a");
        let state = RevealReducer::reduce(state, RevealIntent::Tick);
        let again = RevealReducer::reduce(state.clone(), RevealIntent::Tick);
        assert_eq!(state, again);
    }

    #[test]
    fn visible_respects_multibyte_chars() {
        let mut state = RevealState::new("héllo");
        state = RevealReducer::reduce(state, RevealIntent::Tick);
        state = RevealReducer::reduce(state, RevealIntent::Tick);
        assert_eq!(state.visible(), "hé");
    }

    #[test]
    fn restart_resets_progress() {
        let state = RevealReducer::reduce(RevealState::new("abc"), RevealIntent::Tick);
        let state = RevealReducer::reduce(
            state,
            RevealIntent::Restart {
                source: "xyz".into(),
            },
        );
        assert_eq!(state.visible(), "");
        assert_eq!(state.source(), "xyz");
    }

    #[test]
    fn empty_source_mounts_without_timer() {
        let mut scheduler = Scheduler::new();
        let mut reveal = TextReveal::new("", DEFAULT_REVEAL_INTERVAL);
        reveal.mount(&mut scheduler);
        assert!(reveal.is_complete());
        assert!(!reveal.is_running());
        assert_eq!(scheduler.active(), 0);
    }
}
