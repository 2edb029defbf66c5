//! Draws the founder's letter and measures how far it scrolls.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::page::letter::{LETTER, LETTER_HEADING};
use crate::ui::theme::{self, Palette};

const COLUMN_WIDTH: u16 = 64;
const TOP_MARGIN: u16 = 1;
const HINTS: &str = "esc: Back │ j/k: Scroll │ q: Quit";

/// The text column, leaving the top margin and the hint row free.
fn column(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(COLUMN_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + TOP_MARGIN,
        width,
        height: area.height.saturating_sub(TOP_MARGIN + 1),
    }
}

fn body(palette: &Palette) -> Paragraph<'static> {
    let heading = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(palette.foreground);
    let mut lines = vec![Line::styled(LETTER_HEADING, heading).centered()];
    for paragraph in LETTER {
        lines.push(Line::default());
        lines.push(Line::styled(paragraph, text));
    }
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Rows the letter takes once wrapped for a terminal `width` columns wide.
pub fn content_height(width: u16) -> u16 {
    let column = column(Rect::new(0, 0, width, 0));
    let rows = body(&theme::palette()).line_count(column.width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Furthest the letter scrolls in a `width` x `height` terminal.
pub fn max_scroll(width: u16, height: u16) -> u16 {
    let visible = column(Rect::new(0, 0, width, height)).height;
    content_height(width).saturating_sub(visible)
}

pub fn render(buf: &mut Buffer, area: Rect, scroll: u16, palette: &Palette) {
    body(palette)
        .scroll((scroll, 0))
        .render(column(area), buf);
    if area.height == 0 {
        return;
    }
    let hints = Rect {
        y: area.bottom() - 1,
        height: 1,
        ..area
    };
    Paragraph::new(Line::styled(
        HINTS,
        Style::default()
            .fg(palette.muted)
            .add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(hints, buf);
}
