//! Falling-glyph backdrop behind the hero section.
//!
//! The surface is split into fixed-width columns, each with its own drop
//! row. Every tick fades the previous frame, paints one glyph per column at
//! its drop, and moves every drop down one row. A drop below the bottom
//! only restarts at row 0 when a random draw lands above the reset
//! threshold, so columns restart at staggered times.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::scheduler::{Fired, Scheduler, SubscriptionId};
use super::Component;

pub const DEFAULT_RAIN_TICK: Duration = Duration::from_millis(33);
pub const DEFAULT_RESET_PROBABILITY: f64 = 0.025;
pub const DEFAULT_COLUMN_WIDTH: u16 = 2;
/// Intensity lost per tick by every lit cell.
pub const DEFAULT_FADE_STEP: u8 = 24;

const START_ROW: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainOptions {
    pub tick: Duration,
    pub column_width: u16,
    /// Chance per tick that an off-screen drop restarts.
    pub reset_probability: f64,
    pub fade_step: u8,
}

impl Default for RainOptions {
    fn default() -> Self {
        Self {
            tick: DEFAULT_RAIN_TICK,
            column_width: DEFAULT_COLUMN_WIDTH,
            reset_probability: DEFAULT_RESET_PROBABILITY,
            fade_step: DEFAULT_FADE_STEP,
        }
    }
}

/// One painted cell of the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainCell {
    pub glyph: char,
    /// 255 = freshly painted, 0 = gone.
    pub intensity: u8,
}

#[derive(Debug)]
pub struct RainGrid {
    options: RainOptions,
    width: u16,
    height: u16,
    drops: Vec<u16>,
    cells: Vec<Option<RainCell>>,
    rng: StdRng,
    timer: Option<SubscriptionId>,
    mounted: bool,
}

impl RainGrid {
    pub fn new(options: RainOptions) -> Self {
        Self::with_rng(options, StdRng::from_os_rng())
    }

    /// Deterministic grid for tests and reproducible captures.
    pub fn seeded(options: RainOptions, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    fn with_rng(options: RainOptions, rng: StdRng) -> Self {
        Self {
            options,
            width: 0,
            height: 0,
            drops: Vec::new(),
            cells: Vec::new(),
            rng,
            timer: None,
            mounted: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Current drop row per column.
    pub fn drops(&self) -> &[u16] {
        &self.drops
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<RainCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)]
    }

    /// Attach to a drawing surface of `width` x `height` cells. Re-seeds the
    /// columns when the size changes. A zero-area surface stops the effect.
    pub fn resize(&mut self, width: u16, height: u16, scheduler: &mut Scheduler) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        let columns = usize::from(width / self.options.column_width.max(1));
        self.drops = vec![START_ROW; columns];
        self.cells = vec![None; usize::from(width) * usize::from(height)];
        if self.mounted {
            self.sync_timer(scheduler);
        }
    }

    fn has_surface(&self) -> bool {
        self.width > 0 && self.height > 0 && !self.drops.is_empty()
    }

    fn sync_timer(&mut self, scheduler: &mut Scheduler) {
        match (self.has_surface(), self.timer.is_some()) {
            (true, false) => {
                self.timer = Some(scheduler.set_interval(self.options.tick));
                tracing::debug!(
                    columns = self.drops.len(),
                    rows = self.height,
                    "rain started"
                );
            }
            (false, true) => scheduler.cancel_slot(&mut self.timer),
            _ => {}
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    /// Paint one frame and advance every drop.
    pub fn tick(&mut self) {
        if !self.has_surface() {
            return;
        }
        let fade = self.options.fade_step;
        for slot in self.cells.iter_mut() {
            *slot = (*slot).and_then(|cell| {
                let intensity = cell.intensity.saturating_sub(fade);
                (intensity > 0).then_some(RainCell { intensity, ..cell })
            });
        }

        let reset_above = 1.0 - self.options.reset_probability;
        for column in 0..self.drops.len() {
            let row = self.drops[column];
            let x = column as u16 * self.options.column_width.max(1);
            if row < self.height && x < self.width {
                let glyph = char::from(self.rng.random_range(33u8..127));
                let index = self.index(x, row);
                self.cells[index] = Some(RainCell {
                    glyph,
                    intensity: u8::MAX,
                });
            }

            if row > self.height && self.rng.random::<f64>() > reset_above {
                self.drops[column] = 0;
            }
            self.drops[column] = self.drops[column].saturating_add(1);
        }
    }
}

impl Component for RainGrid {
    fn mount(&mut self, scheduler: &mut Scheduler) {
        self.mounted = true;
        self.sync_timer(scheduler);
    }

    fn unmount(&mut self, scheduler: &mut Scheduler) {
        self.mounted = false;
        scheduler.cancel_slot(&mut self.timer);
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    fn on_frame(&mut self, fired: &Fired, _scheduler: &mut Scheduler) -> bool {
        if !fired.hit(self.timer) {
            return false;
        }
        self.tick();
        true
    }
}
