use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::count_up::DEFAULT_COUNT_UP_DURATION;
use crate::animation::marquee::{Direction, MarqueeOptions, DEFAULT_MARQUEE_GAP};
use crate::animation::rain::{
    RainOptions, DEFAULT_COLUMN_WIDTH, DEFAULT_FADE_STEP, DEFAULT_RAIN_TICK,
    DEFAULT_RESET_PROBABILITY,
};
use crate::animation::reveal::DEFAULT_REVEAL_INTERVAL;
use crate::animation::scroll_threshold::DEFAULT_SCROLL_THRESHOLD;
use crate::ui::theme::ColorMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Page-level rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Frames per second of the render loop.
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Colour mode applied once at startup.
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Scroll position (rows) past which the floating call-to-action shows.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_rows: u16,
}

/// Timing of the animation primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Per-character delay of the headline reveal.
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,
    /// Duration of the statistic count-ups.
    #[serde(default = "default_count_up_duration_ms")]
    pub count_up_duration_ms: u64,
    /// Team marquee speed in cells per frame.
    #[serde(default = "default_marquee_speed")]
    pub marquee_speed: usize,
    #[serde(default)]
    pub marquee_direction: Direction,
    /// Blank cells between marquee items.
    #[serde(default = "default_marquee_gap")]
    pub marquee_gap: usize,
    /// Draw the falling-glyph backdrop.
    #[serde(default = "default_true")]
    pub rain: bool,
    #[serde(default = "default_rain_tick_ms")]
    pub rain_tick_ms: u64,
    #[serde(default = "default_rain_column_width")]
    pub rain_column_width: u16,
    /// Chance per tick that an off-screen column restarts.
    #[serde(default = "default_rain_reset_probability")]
    pub rain_reset_probability: f64,
    #[serde(default = "default_rain_fade_step")]
    pub rain_fade_step: u8,
}

/// Outbound navigation targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Fellowship application form.
    #[serde(default = "default_apply_url")]
    pub apply_url: String,
    /// General contact address.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default)]
    pub partnership: PartnershipMail,
}

/// Pre-filled partnership enquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnershipMail {
    #[serde(default = "default_partnership_to")]
    pub to: String,
    #[serde(default = "default_partnership_cc")]
    pub cc: Vec<String>,
    #[serde(default = "default_partnership_subject")]
    pub subject: String,
    #[serde(default = "default_partnership_body")]
    pub body: String,
}

/// File logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to `<cache dir>/ventured/ventured.log`.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_fps() -> u32 {
    30
}

fn default_scroll_threshold() -> u16 {
    DEFAULT_SCROLL_THRESHOLD
}

fn default_reveal_interval_ms() -> u64 {
    DEFAULT_REVEAL_INTERVAL.as_millis() as u64
}

fn default_count_up_duration_ms() -> u64 {
    DEFAULT_COUNT_UP_DURATION.as_millis() as u64
}

fn default_marquee_speed() -> usize {
    1
}

fn default_marquee_gap() -> usize {
    DEFAULT_MARQUEE_GAP
}

fn default_rain_tick_ms() -> u64 {
    DEFAULT_RAIN_TICK.as_millis() as u64
}

fn default_rain_column_width() -> u16 {
    DEFAULT_COLUMN_WIDTH
}

fn default_rain_reset_probability() -> f64 {
    DEFAULT_RESET_PROBABILITY
}

fn default_rain_fade_step() -> u8 {
    DEFAULT_FADE_STEP
}

fn default_apply_url() -> String {
    "https://apply.venturedglobal.org".to_string()
}

fn default_contact_email() -> String {
    "contact@venturedglobal.org".to_string()
}

fn default_partnership_to() -> String {
    "partnerships@venturedglobal.org".to_string()
}

fn default_partnership_cc() -> Vec<String> {
    vec![
        "kofi@venturedglobal.org".to_string(),
        "smyan@venturedglobal.org".to_string(),
        "rashi@venturedglobal.org".to_string(),
    ]
}

fn default_partnership_subject() -> String {
    "[YOUR COMPANY NAME] X VenturEd".to_string()
}

fn default_partnership_body() -> String {
    [
        "Hi VenturEd Team,",
        "",
        "I'm [YOUR NAME], [TITLE] at [COMPANY NAME]. ",
        "",
        "After looking over your fellowship program, we are excited about the potential collaboration.",
        "",
        "We're currently looking to [specific challenge you're facing - e.g., start a short-form content strategy] and need your help for [Skill gap or support needed - e.g., a TikTok marketing channel] to [Strategic growth area - e.g., expand our product's user acquisition channels].",
        "",
        "We are especially interested in Fellows who can [technical skill - e.g., analyze data with Python], and are [Soft skill - e.g., fast decision-makers]. They should [Domain expertise - e.g., understand startup growth mechanics].",
        "",
        "A bit about our company:",
        "",
        "We [Brief company description]. Specifically, we are unique because [Unique value proposition]. Currently, we are at [Current stage/funding].",
        "",
        "Would love to schedule a 15-minute call to discuss potential partnership details.",
        "",
        "Thanks, ",
        "[YOUR NAME] [CONTACT INFORMATION]",
    ]
    .join("\n")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            color_mode: ColorMode::default(),
            scroll_threshold_rows: default_scroll_threshold(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: default_reveal_interval_ms(),
            count_up_duration_ms: default_count_up_duration_ms(),
            marquee_speed: default_marquee_speed(),
            marquee_direction: Direction::default(),
            marquee_gap: default_marquee_gap(),
            rain: true,
            rain_tick_ms: default_rain_tick_ms(),
            rain_column_width: default_rain_column_width(),
            rain_reset_probability: default_rain_reset_probability(),
            rain_fade_step: default_rain_fade_step(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            apply_url: default_apply_url(),
            contact_email: default_contact_email(),
            partnership: PartnershipMail::default(),
        }
    }
}

impl Default for PartnershipMail {
    fn default() -> Self {
        Self {
            to: default_partnership_to(),
            cc: default_partnership_cc(),
            subject: default_partnership_subject(),
            body: default_partnership_body(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            file: None,
        }
    }
}

impl AnimationConfig {
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn count_up_duration(&self) -> Duration {
        Duration::from_millis(self.count_up_duration_ms)
    }

    pub fn marquee_options(&self) -> MarqueeOptions {
        MarqueeOptions {
            speed: self.marquee_speed,
            direction: self.marquee_direction,
            gap: self.marquee_gap,
        }
    }

    pub fn rain_options(&self) -> RainOptions {
        RainOptions {
            tick: Duration::from_millis(self.rain_tick_ms),
            column_width: self.rain_column_width,
            reset_probability: self.rain_reset_probability,
            fade_step: self.rain_fade_step,
        }
    }
}

impl PageConfig {
    /// Time between frames of the render loop.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
