//! Seamlessly looping horizontal marquee.
//!
//! The item sequence is laid out as one strip of cells (each item followed
//! by `gap` blank cells). Rendering repeats the strip enough times that a
//! viewport starting anywhere inside the first copy is fully covered, so
//! wrapping the offset by one strip width never changes what is visible.

use serde::{Deserialize, Serialize};

use super::mvi::{dispatch, Intent, Reducer, UiState};
use super::scheduler::{Fired, Scheduler, SubscriptionId};
use super::Component;

pub const DEFAULT_MARQUEE_GAP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Content travels right-to-left; the offset grows.
    #[default]
    Left,
    /// Content travels left-to-right; the offset shrinks.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarqueeOptions {
    /// Cells advanced per frame.
    pub speed: usize,
    pub direction: Direction,
    /// Blank cells after each item.
    pub gap: usize,
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            speed: 1,
            direction: Direction::Left,
            gap: DEFAULT_MARQUEE_GAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarqueeState {
    /// One copy of the item sequence, as cells.
    strip: Vec<char>,
    /// Start of the viewport inside the strip, in `[0, strip.len())`.
    offset: usize,
    paused: bool,
}

impl UiState for MarqueeState {}

impl MarqueeState {
    pub fn new(items: &[String], gap: usize) -> Self {
        let mut strip = Vec::new();
        for item in items {
            strip.extend(item.chars());
            strip.extend(std::iter::repeat_n(' ', gap));
        }
        Self {
            strip,
            offset: 0,
            paused: false,
        }
    }

    /// Width of one un-duplicated copy.
    pub fn content_width(&self) -> usize {
        self.strip.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_empty(&self) -> bool {
        self.strip.is_empty()
    }

    /// Copies needed so a viewport of `viewport` cells never runs off the
    /// end. Always at least two.
    pub fn copies_for(&self, viewport: usize) -> usize {
        let width = self.content_width();
        if width == 0 {
            return 0;
        }
        (width + viewport).div_ceil(width).max(2)
    }

    /// The duplicated strip as rendered.
    pub fn rendered(&self, viewport: usize) -> String {
        let copies = self.copies_for(viewport);
        let mut out = String::with_capacity(self.strip.len() * copies);
        for _ in 0..copies {
            out.extend(self.strip.iter());
        }
        out
    }

    /// `viewport` cells of the rendered strip starting at the offset.
    pub fn visible(&self, viewport: usize) -> String {
        let width = self.content_width();
        if width == 0 {
            return String::new();
        }
        (0..viewport)
            .map(|i| self.strip[(self.offset + i) % width])
            .collect()
    }

    fn wrapped(&self, offset: i64) -> usize {
        let width = self.content_width() as i64;
        if width == 0 {
            return 0;
        }
        offset.rem_euclid(width) as usize
    }
}

#[derive(Debug)]
pub enum MarqueeIntent {
    /// Advance by `cells` in `direction`, unless paused.
    Frame { cells: usize, direction: Direction },
    PointerEnter,
    PointerLeave,
    /// Manual scroll; wraps at both ends regardless of pause.
    ScrollBy { delta: i64 },
}

impl Intent for MarqueeIntent {}

pub struct MarqueeReducer;

impl Reducer for MarqueeReducer {
    type State = MarqueeState;
    type Intent = MarqueeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MarqueeIntent::Frame { .. } if state.paused || state.is_empty() => state,
            MarqueeIntent::Frame { cells, direction } => {
                let step = cells as i64;
                let raw = match direction {
                    Direction::Left => state.offset as i64 + step,
                    Direction::Right => state.offset as i64 - step,
                };
                MarqueeState {
                    offset: state.wrapped(raw),
                    ..state
                }
            }
            MarqueeIntent::PointerEnter => MarqueeState {
                paused: true,
                ..state
            },
            MarqueeIntent::PointerLeave => MarqueeState {
                paused: false,
                ..state
            },
            MarqueeIntent::ScrollBy { delta } => MarqueeState {
                offset: state.wrapped(state.offset as i64 + delta),
                ..state
            },
        }
    }
}

/// Mounted marquee, advancing once per frame for its whole lifetime.
#[derive(Debug)]
pub struct Marquee {
    state: MarqueeState,
    options: MarqueeOptions,
    frames: Option<SubscriptionId>,
    hovered: bool,
}

impl Marquee {
    pub fn new(items: &[String], options: MarqueeOptions) -> Self {
        Self {
            state: MarqueeState::new(items, options.gap),
            options,
            frames: None,
            hovered: false,
        }
    }

    pub fn state(&self) -> &MarqueeState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_some()
    }

    pub fn visible(&self, viewport: usize) -> String {
        self.state.visible(viewport)
    }

    /// Track the pointer; entering pauses and leaving resumes from the
    /// same offset.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if hovered == self.hovered {
            return false;
        }
        self.hovered = hovered;
        let intent = if hovered {
            MarqueeIntent::PointerEnter
        } else {
            MarqueeIntent::PointerLeave
        };
        dispatch::<MarqueeReducer>(&mut self.state, intent)
    }

    pub fn scroll_by(&mut self, delta: i64) -> bool {
        dispatch::<MarqueeReducer>(&mut self.state, MarqueeIntent::ScrollBy { delta })
    }

    /// Advance one frame without a scheduler; used by [`Component::on_frame`].
    pub fn step(&mut self) -> bool {
        dispatch::<MarqueeReducer>(
            &mut self.state,
            MarqueeIntent::Frame {
                cells: self.options.speed,
                direction: self.options.direction,
            },
        )
    }
}

impl Component for Marquee {
    fn mount(&mut self, scheduler: &mut Scheduler) {
        scheduler.cancel_slot(&mut self.frames);
        if self.state.is_empty() {
            return;
        }
        self.frames = Some(scheduler.request_frames());
    }

    fn unmount(&mut self, scheduler: &mut Scheduler) {
        scheduler.cancel_slot(&mut self.frames);
    }

    fn on_frame(&mut self, fired: &Fired, _scheduler: &mut Scheduler) -> bool {
        if !fired.hit(self.frames) {
            return false;
        }
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strip_includes_gap_after_each_item() {
        let state = MarqueeState::new(&items(&["ab", "c"]), 1);
        assert_eq!(state.content_width(), 5);
        assert_eq!(state.rendered(0), "ab c ab c ");
    }

    #[test]
    fn right_direction_wraps_to_far_end() {
        let state = MarqueeState::new(&items(&["A", "B"]), 0);
        let state = MarqueeReducer::reduce(
            state,
            MarqueeIntent::Frame {
                cells: 1,
                direction: Direction::Right,
            },
        );
        assert_eq!(state.offset(), 1);
    }

    #[test]
    fn paused_frame_is_noop() {
        let state = MarqueeState::new(&items(&["A"]), 2);
        let state = MarqueeReducer::reduce(state, MarqueeIntent::PointerEnter);
        let next = MarqueeReducer::reduce(
            state.clone(),
            MarqueeIntent::Frame {
                cells: 1,
                direction: Direction::Left,
            },
        );
        assert_eq!(state, next);
    }

    #[test]
    fn copies_cover_wide_viewports() {
        let state = MarqueeState::new(&items(&["A", "B"]), 0);
        assert_eq!(state.copies_for(1), 2);
        assert_eq!(state.copies_for(7), 5);
    }
}
