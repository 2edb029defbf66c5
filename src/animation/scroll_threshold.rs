//! Boolean "scrolled past" state derived from the page scroll position.

use super::mvi::{dispatch, Intent, Reducer, UiState};

pub const DEFAULT_SCROLL_THRESHOLD: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollThreshold {
    threshold: u16,
    position: u16,
}

impl UiState for ScrollThreshold {}

impl ScrollThreshold {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            position: 0,
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn position(&self) -> u16 {
        self.position
    }

    /// Strictly past the threshold; not a latch.
    pub fn is_past_threshold(&self) -> bool {
        self.position > self.threshold
    }
}

#[derive(Debug)]
pub enum ScrollIntent {
    ScrollTo { position: u16 },
}

impl Intent for ScrollIntent {}

pub struct ScrollReducer;

impl Reducer for ScrollReducer {
    type State = ScrollThreshold;
    type Intent = ScrollIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScrollIntent::ScrollTo { position } => ScrollThreshold { position, ..state },
        }
    }
}

/// Subscribed view over the page scroll position.
///
/// Subscription is owned by the page: it calls [`observe`](Self::observe)
/// on every scroll change between mount and unmount.
#[derive(Debug, Default)]
pub struct ScrollThresholdObserver {
    state: ScrollThreshold,
    subscribed: bool,
}

impl ScrollThresholdObserver {
    pub fn new(threshold: u16) -> Self {
        Self {
            state: ScrollThreshold::new(threshold),
            subscribed: false,
        }
    }

    pub fn subscribe(&mut self, position: u16) {
        self.subscribed = true;
        self.observe(position);
    }

    pub fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn is_past_threshold(&self) -> bool {
        self.state.is_past_threshold()
    }

    /// Feed a new scroll position. Returns true when the boolean flipped.
    /// Ignored while unsubscribed.
    pub fn observe(&mut self, position: u16) -> bool {
        if !self.subscribed {
            return false;
        }
        let before = self.state.is_past_threshold();
        dispatch::<ScrollReducer>(&mut self.state, ScrollIntent::ScrollTo { position });
        before != self.state.is_past_threshold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let state = ScrollThreshold::new(10);
        let at = ScrollReducer::reduce(state, ScrollIntent::ScrollTo { position: 10 });
        assert!(!at.is_past_threshold());
        let past = ScrollReducer::reduce(at, ScrollIntent::ScrollTo { position: 11 });
        assert!(past.is_past_threshold());
    }

    #[test]
    fn unsubscribed_observer_ignores_positions() {
        let mut observer = ScrollThresholdObserver::new(2);
        assert!(!observer.observe(50));
        assert!(!observer.is_past_threshold());
    }
}
