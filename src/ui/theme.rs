//! Colours, and the process-wide colour mode.
//!
//! The mode is applied once at startup ([`apply`]) and read by every draw.
//! Re-applying is harmless and nothing tears it down.

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const BRAND: Color = Color::Rgb(0x46, 0x46, 0xe0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ColorMode {
    #[default]
    Dark = 0,
    Light = 1,
}

static MODE: AtomicU8 = AtomicU8::new(ColorMode::Dark as u8);

/// Set the process-wide colour mode.
pub fn apply(mode: ColorMode) {
    MODE.store(mode as u8, Ordering::Relaxed);
}

pub fn mode() -> ColorMode {
    match MODE.load(Ordering::Relaxed) {
        1 => ColorMode::Light,
        _ => ColorMode::Dark,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub card: Color,
    pub accent: Color,
    /// `(r, g, b)` the rain fades from, towards `background`.
    pub rain: (u8, u8, u8),
    pub rain_floor: (u8, u8, u8),
}

const DARK: Palette = Palette {
    background: Color::Rgb(0x0a, 0x0a, 0x0a),
    foreground: Color::Rgb(0xfa, 0xfa, 0xfa),
    muted: Color::Rgb(0xa1, 0xa1, 0xaa),
    border: Color::Rgb(0x27, 0x27, 0x2a),
    card: Color::Rgb(0x18, 0x18, 0x1b),
    accent: BRAND,
    rain: (0x46, 0x46, 0xe0),
    rain_floor: (0x0a, 0x0a, 0x0a),
};

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xff, 0xff, 0xff),
    foreground: Color::Rgb(0x09, 0x09, 0x0b),
    muted: Color::Rgb(0x71, 0x71, 0x7a),
    border: Color::Rgb(0xe4, 0xe4, 0xe7),
    card: Color::Rgb(0xf4, 0xf4, 0xf5),
    accent: BRAND,
    rain: (0x46, 0x46, 0xe0),
    rain_floor: (0xff, 0xff, 0xff),
};

/// Palette of the active mode.
pub fn palette() -> Palette {
    match mode() {
        ColorMode::Dark => DARK,
        ColorMode::Light => LIGHT,
    }
}

fn mix(from: (u8, u8, u8), to: (u8, u8, u8), weight: u8) -> Color {
    let blend = |a: u8, b: u8| -> u8 {
        let t = u16::from(weight);
        ((u16::from(a) * t + u16::from(b) * (255 - t)) / 255) as u8
    };
    Color::Rgb(blend(from.0, to.0), blend(from.1, to.1), blend(from.2, to.2))
}

/// Blend the rain colour towards the floor by `intensity` (255 = full).
pub fn rain_color(palette: &Palette, intensity: u8) -> Color {
    mix(palette.rain, palette.rain_floor, intensity)
}

/// `color` at `opacity` over the page background. Colours without RGB
/// components snap to either end.
pub fn fade(palette: &Palette, color: Color, opacity: f32) -> Color {
    let weight = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    match (color, palette.background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => mix((r, g, b), (br, bg, bb), weight),
        _ if weight >= 128 => color,
        _ => palette.background,
    }
}
