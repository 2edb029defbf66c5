//! Draws the page.
//!
//! Each section is rendered into its own off-screen buffer at full height,
//! then the rows inside the viewport are copied to the frame. Sections
//! never need to know how far they are scrolled.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::animation::Transition;
use crate::page::content::{
    APPLY_LABEL, CONTACT_LABEL, FELLOWSHIP_HEADING, FELLOWSHIP_INTRO, PARTNERS_HEADING,
    PARTNERS_INTRO, PARTNER_LABEL, PARTNER_TILES, STATS, STEPS, TEAM_HEADING, TEAM_INTRO,
};
use crate::page::sections::TEAM_MARQUEE_ROW;
use crate::page::{Section, SectionSpan};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::{
    button_row, floating_bar, floating_button_row, hero_rows, CONTACT_BUTTON_ROW, FLOATING_BUTTONS,
};
use crate::ui::letter;
use crate::ui::theme::{self, fade, rain_color, Palette};

/// Rows a card travels while sliding in.
const SLIDE_ROWS: f32 = 2.0;
/// Columns a panel travels while sliding in from the side.
const SLIDE_COLUMNS: f32 = 4.0;
const TEXT_WIDTH: u16 = 72;
const PARTNER_COLUMNS: usize = 4;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = theme::palette();
    let base = Style::default().bg(palette.background).fg(palette.foreground);
    frame.buffer_mut().set_style(area, base);
    if let Some(scroll) = app.letter_scroll() {
        letter::render(frame.buffer_mut(), area, scroll, &palette);
        return;
    }

    let scroll = app.scroll();
    for span in app.layout().spans() {
        if span.height == 0 || !span.intersects(scroll, area.height) {
            continue;
        }
        let mut section = Buffer::empty(Rect::new(0, 0, area.width, span.height));
        section.set_style(section.area, base);
        render_section(&mut section, *span, app, &palette);
        blit(&section, span.top, scroll, area, frame.buffer_mut());
    }

    if let Some(bar) = floating_bar(area, app.floating_bar().eased()) {
        render_floating_bar(frame, bar, app.floating_bar(), &palette);
    }
}

/// Copy the visible rows of a section buffer onto the frame.
fn blit(section: &Buffer, top: u16, scroll: u16, area: Rect, out: &mut Buffer) {
    for row in 0..section.area.height {
        let page_row = top.saturating_add(row);
        if page_row < scroll {
            continue;
        }
        let y = page_row - scroll;
        if y >= area.height {
            break;
        }
        for x in 0..section.area.width.min(area.width) {
            let Some(source) = section.cell((x, row)) else {
                continue;
            };
            if let Some(target) = out.cell_mut((area.x + x, area.y + y)) {
                *target = source.clone();
            }
        }
    }
}

fn render_section(buf: &mut Buffer, span: SectionSpan, app: &App, palette: &Palette) {
    let area = buf.area;
    match span.section {
        Section::Hero => render_hero(buf, area, app, palette),
        Section::Stats => render_stats(buf, area, app, palette),
        Section::Fellowship => render_fellowship(buf, area, app, palette),
        Section::Team => render_team(buf, area, app, palette),
        Section::Partners => render_partners(buf, area, app, palette),
        Section::Contact => render_contact(buf, area, palette),
        Section::Footer => Footer::new(*palette).widget(area).render(area, buf),
    }
}

fn row(area: Rect, y: u16) -> Option<Rect> {
    (y < area.height).then(|| Rect::new(area.x, area.y + y, area.width, 1))
}

/// Horizontally centred column at most `TEXT_WIDTH` wide.
fn text_column(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(TEXT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn centered_line(buf: &mut Buffer, area: Rect, y: u16, line: Line<'_>) {
    if let Some(rect) = row(area, y) {
        Paragraph::new(line).alignment(Alignment::Center).render(rect, buf);
    }
}

fn render_button(buf: &mut Buffer, rect: Rect, label: &str, style: Style) {
    buf.set_stringn(rect.x, rect.y, format!("[ {label} ]"), rect.width as usize, style);
}

fn render_hero(buf: &mut Buffer, area: Rect, app: &App, palette: &Palette) {
    if let Some(rain) = app.rain() {
        for y in 0..rain.height().min(area.height) {
            for x in 0..rain.width().min(area.width) {
                let Some(drop) = rain.cell(x, y) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(drop.glyph)
                        .set_fg(rain_color(palette, drop.intensity));
                }
            }
        }
    }

    let rows = hero_rows(area.height);
    let opacity = app.hero().eased();
    let title_style = Style::default()
        .fg(fade(palette, palette.accent, opacity))
        .add_modifier(Modifier::BOLD);
    centered_line(
        buf,
        area,
        rows.title,
        Line::styled(app.title().visible().to_string(), title_style),
    );
    let tagline_style = Style::default().fg(fade(palette, palette.foreground, opacity));
    centered_line(
        buf,
        area,
        rows.tagline,
        Line::styled(app.tagline().visible().to_string(), tagline_style),
    );

    if rows.actions >= area.height {
        return;
    }
    let cta = app.cta().eased();
    let buttons = button_row(&[APPLY_LABEL, PARTNER_LABEL], area.width, rows.actions);
    let styles = [
        Style::default()
            .fg(fade(palette, palette.background, cta))
            .bg(fade(palette, palette.accent, cta))
            .add_modifier(Modifier::BOLD),
        Style::default().fg(fade(palette, palette.accent, cta)),
    ];
    for ((rect, label), style) in buttons
        .into_iter()
        .zip([APPLY_LABEL, PARTNER_LABEL])
        .zip(styles)
    {
        render_button(buf, rect, label, style);
    }
}

/// `rect` pushed down by the unplayed part of a slide-up entrance.
fn slid(rect: Rect, transition: &Transition, bounds: Rect) -> Rect {
    let offset = ((1.0 - transition.eased()) * SLIDE_ROWS).round() as u16;
    let y = rect.y.saturating_add(offset);
    let height = rect.height.min(bounds.bottom().saturating_sub(y));
    Rect { y, height, ..rect }
}

/// `rect` pushed towards `side` (-1 left, 1 right) by the unplayed part of
/// a sideways entrance, clipped to `bounds`.
fn slid_sideways(rect: Rect, transition: &Transition, side: i8, bounds: Rect) -> Rect {
    let offset = ((1.0 - transition.eased()) * SLIDE_COLUMNS).round() as u16;
    let x = if side < 0 {
        rect.x.saturating_sub(offset).max(bounds.x)
    } else {
        rect.x.saturating_add(offset)
    };
    let width = rect.width.min(bounds.right().saturating_sub(x));
    Rect { x, width, ..rect }
}

fn render_stats(buf: &mut Buffer, area: Rect, app: &App, palette: &Palette) {
    let inner = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(2),
        ..text_column(area)
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .spacing(1)
        .split(inner);

    for (i, stat) in STATS.iter().enumerate() {
        let (Some(card), Some(counter)) = (app.stat_cards().get(i), app.counters().get(i)) else {
            continue;
        };
        if !card.is_visible() {
            continue;
        }
        let opacity = card.eased();
        let rect = slid(columns[i], card, area);
        let value = Line::styled(
            format!("{}{}", counter.displayed(), stat.suffix),
            Style::default()
                .fg(fade(palette, palette.accent, opacity))
                .add_modifier(Modifier::BOLD),
        );
        let caption = Line::styled(
            stat.caption,
            Style::default().fg(fade(palette, palette.muted, opacity)),
        );
        Paragraph::new(vec![value, Line::default(), caption])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(fade(palette, palette.border, opacity))),
            )
            .render(rect, buf);
    }
}

fn render_fellowship(buf: &mut Buffer, area: Rect, app: &App, palette: &Palette) {
    let heading = Style::default()
        .fg(palette.foreground)
        .add_modifier(Modifier::BOLD);
    centered_line(buf, area, 1, Line::styled(FELLOWSHIP_HEADING, heading));

    let column = text_column(area);
    let intro = Rect {
        y: area.y + 3,
        height: 4.min(area.height.saturating_sub(3)),
        ..column
    };
    Paragraph::new(FELLOWSHIP_INTRO)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(intro, buf);

    let body = Rect {
        y: area.y + 8,
        height: 8.min(area.height.saturating_sub(8)),
        ..column
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .spacing(2)
        .split(body);
    let [steps, panel] = app.fellowship_panels();

    if steps.is_visible() {
        let opacity = steps.eased();
        let mut lines = Vec::new();
        for (i, step) in STEPS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::styled(
                step.title,
                Style::default()
                    .fg(fade(palette, palette.foreground, opacity))
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::styled(
                step.detail,
                Style::default().fg(fade(palette, palette.muted, opacity)),
            ));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(slid_sideways(halves[0], steps, -1, area), buf);
    }

    if panel.is_visible() {
        let opacity = panel.eased();
        let rect = slid_sideways(halves[1], panel, 1, area);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(fade(palette, palette.border, opacity)))
            .style(Style::default().bg(palette.card));
        let inner = block.inner(rect);
        block.render(rect, buf);
        let dots = Style::default().fg(fade(palette, palette.border, opacity));
        for y in inner.top()..inner.bottom() {
            for x in (inner.left()..inner.right()).step_by(2) {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('·').set_style(dots);
                }
            }
        }
    }
}

fn render_team(buf: &mut Buffer, area: Rect, app: &App, palette: &Palette) {
    let heading = Style::default()
        .fg(palette.foreground)
        .add_modifier(Modifier::BOLD);
    centered_line(buf, area, 1, Line::styled(TEAM_HEADING, heading));
    centered_line(
        buf,
        area,
        2,
        Line::styled(TEAM_INTRO, Style::default().fg(palette.muted)),
    );

    let Some(strip) = row(area, TEAM_MARQUEE_ROW) else {
        return;
    };
    let rule = Style::default().fg(palette.border);
    for y in [TEAM_MARQUEE_ROW - 1, TEAM_MARQUEE_ROW + 1] {
        if let Some(line) = row(area, y) {
            buf.set_string(line.x, line.y, "─".repeat(line.width as usize), rule);
        }
    }
    let style = Style::default().fg(palette.foreground).bg(palette.card);
    buf.set_style(strip, style);
    let text = app.team().visible(strip.width as usize);
    buf.set_stringn(strip.x, strip.y, text, strip.width as usize, style);
}

fn render_partners(buf: &mut Buffer, area: Rect, app: &App, palette: &Palette) {
    let heading = Style::default()
        .fg(palette.foreground)
        .add_modifier(Modifier::BOLD);
    centered_line(buf, area, 1, Line::styled(PARTNERS_HEADING, heading));
    centered_line(
        buf,
        area,
        2,
        Line::styled(PARTNERS_INTRO, Style::default().fg(palette.muted)),
    );

    let grid = Rect {
        y: area.y + 4,
        height: area.height.saturating_sub(5),
        ..text_column(area)
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .spacing(1)
        .split(grid);
    for (i, tile) in app.partner_tiles().iter().enumerate().take(PARTNER_TILES) {
        if !tile.is_visible() {
            continue;
        }
        let Some(band) = rows.get(i / PARTNER_COLUMNS) else {
            continue;
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, PARTNER_COLUMNS as u32); PARTNER_COLUMNS])
            .spacing(1)
            .split(*band);
        let opacity = tile.eased();
        Paragraph::new(Span::styled(
            "◆",
            Style::default().fg(fade(palette, palette.accent, opacity)),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_style(Style::default().fg(fade(palette, palette.border, opacity))),
        )
        .render(cells[i % PARTNER_COLUMNS], buf);
    }
}

fn render_contact(buf: &mut Buffer, area: Rect, palette: &Palette) {
    if CONTACT_BUTTON_ROW >= area.height {
        return;
    }
    let style = Style::default()
        .fg(palette.background)
        .bg(palette.accent)
        .add_modifier(Modifier::BOLD);
    for rect in button_row(&[CONTACT_LABEL], area.width, CONTACT_BUTTON_ROW) {
        render_button(buf, rect, CONTACT_LABEL, style);
    }
}

fn render_floating_bar(frame: &mut Frame<'_>, bar: Rect, transition: &Transition, palette: &Palette) {
    let opacity = transition.eased();
    frame.render_widget(Clear, bar);
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(fade(palette, palette.accent, opacity)))
        .style(Style::default().bg(palette.card));
    let inner = block.inner(bar);
    frame.render_widget(block, bar);
    if inner.height == 0 {
        return;
    }
    let accent = fade(palette, palette.accent, opacity);
    let styles = [
        Style::default()
            .fg(palette.background)
            .bg(accent)
            .add_modifier(Modifier::BOLD),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ];
    let buttons = floating_button_row(bar, inner.y);
    let buf = frame.buffer_mut();
    for ((rect, (label, _)), style) in buttons.iter().zip(FLOATING_BUTTONS).zip(styles) {
        render_button(buf, *rect, label, style);
    }
    let Some(last) = buttons.last() else {
        return;
    };
    let hint_x = last.right().saturating_add(2);
    if hint_x < bar.right() {
        let room = (bar.right() - hint_x) as usize;
        buf.set_stringn(hint_x, last.y, "f / p", room, Style::default().fg(palette.muted));
    }
}
