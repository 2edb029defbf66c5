//! Where the clickable parts of the page sit.
//!
//! Rendering and mouse hit-testing both read these, so a button is always
//! clicked where it is drawn.

use ratatui::layout::Rect;

use crate::page::content::{APPLY_LABEL, CONTACT_LABEL, PARTNER_LABEL};
use crate::page::{PageLayout, Section};
use crate::ui::input::Action;

/// Rows taken by title, tagline and call-to-action row.
pub const HERO_BLOCK_HEIGHT: u16 = 5;
pub const FLOATING_BAR_HEIGHT: u16 = 3;
/// Row of the contact button inside its section.
pub const CONTACT_BUTTON_ROW: u16 = 2;
const BUTTON_GAP: u16 = 2;

/// Hero rows, relative to the top of the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRows {
    pub title: u16,
    pub tagline: u16,
    pub actions: u16,
}

pub fn hero_rows(hero_height: u16) -> HeroRows {
    let top = hero_height.saturating_sub(HERO_BLOCK_HEIGHT) / 2;
    HeroRows {
        title: top,
        tagline: top + 2,
        actions: top + 4,
    }
}

/// Width of `[ label ]`.
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// One-row buttons centred on row `y` of a `width`-wide strip.
pub fn button_row(labels: &[&str], width: u16, y: u16) -> Vec<Rect> {
    let widths: Vec<u16> = labels.iter().map(|label| button_width(label)).collect();
    let gaps = BUTTON_GAP * labels.len().saturating_sub(1) as u16;
    let total = widths.iter().sum::<u16>() + gaps;
    let mut x = width.saturating_sub(total) / 2;
    widths
        .into_iter()
        .map(|w| {
            let rect = Rect::new(x, y, w.min(width.saturating_sub(x)), 1);
            x = x.saturating_add(w + BUTTON_GAP);
            rect
        })
        .collect()
}

/// The floating bar, slid up from the bottom edge of `area` by `eased`.
pub fn floating_bar(area: Rect, eased: f32) -> Option<Rect> {
    let shown = (f32::from(FLOATING_BAR_HEIGHT) * eased.clamp(0.0, 1.0)).round() as u16;
    let shown = shown.min(area.height);
    if shown == 0 {
        return None;
    }
    Some(Rect::new(area.x, area.bottom() - shown, area.width, shown))
}

/// Labels and actions of the floating bar buttons, left to right.
pub const FLOATING_BUTTONS: [(&str, Action); 2] = [
    (APPLY_LABEL, Action::OpenApplication),
    (PARTNER_LABEL, Action::ComposePartnership),
];

/// Buttons on row `y` of the floating bar, in screen coordinates.
pub fn floating_button_row(bar: Rect, y: u16) -> Vec<Rect> {
    let labels = FLOATING_BUTTONS.map(|(label, _)| label);
    button_row(&labels, bar.width, y)
        .into_iter()
        .map(|rect| Rect { x: bar.x + rect.x, ..rect })
        .collect()
}

/// The buttons inside a fully shown floating bar. Empty while it slides.
pub fn floating_buttons(bar: Rect) -> Vec<Rect> {
    if bar.height < FLOATING_BAR_HEIGHT {
        return Vec::new();
    }
    floating_button_row(bar, bar.y + 1)
}

/// A screen region that performs `action` when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    pub area: Rect,
    pub action: Action,
}

fn on_screen(rect: Rect, scroll: u16, viewport: u16) -> Option<Rect> {
    if rect.y < scroll || rect.y - scroll >= viewport {
        return None;
    }
    Some(Rect {
        y: rect.y - scroll,
        ..rect
    })
}

/// Clickable regions in screen coordinates, topmost first.
pub fn hotspots(layout: &PageLayout, width: u16, scroll: u16, bar_eased: f32) -> Vec<Hotspot> {
    let viewport = layout.viewport();
    let mut spots = Vec::new();

    let screen = Rect::new(0, 0, width, viewport);
    if let Some(bar) = floating_bar(screen, bar_eased) {
        let actions = FLOATING_BUTTONS.map(|(_, action)| action);
        for (area, action) in floating_buttons(bar).into_iter().zip(actions) {
            spots.push(Hotspot { area, action });
        }
    }

    let hero = layout.span(Section::Hero);
    let actions_row = hero.top + hero_rows(hero.height).actions;
    let hero_buttons = button_row(&[APPLY_LABEL, PARTNER_LABEL], width, actions_row);
    let hero_actions = [Action::OpenApplication, Action::ComposePartnership];
    for (rect, action) in hero_buttons.into_iter().zip(hero_actions) {
        if let Some(area) = on_screen(rect, scroll, viewport) {
            spots.push(Hotspot { area, action });
        }
    }

    let contact = layout.span(Section::Contact);
    let contact_row = contact.top + CONTACT_BUTTON_ROW;
    for rect in button_row(&[CONTACT_LABEL], width, contact_row) {
        if let Some(area) = on_screen(rect, scroll, viewport) {
            spots.push(Hotspot {
                area,
                action: Action::ComposeContact,
            });
        }
    }
    spots
}

/// Action under the screen cell `(column, row)`.
pub fn hit_test(spots: &[Hotspot], column: u16, row: u16) -> Option<Action> {
    spots
        .iter()
        .find(|spot| {
            let area = spot.area;
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
        })
        .map(|spot| spot.action)
}
