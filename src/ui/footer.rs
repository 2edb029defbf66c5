use crate::page::content::FOOTER;
use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " f: Apply │ p: Partner │ c: Contact │ 1-3: Jump │ a: Letter │ j/k: Scroll │ q: Quit";

pub struct Footer {
    palette: Palette,
}

impl Footer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let credit = format!(" {FOOTER}");
        let version = format!("v{VERSION} ");

        // Pad by char count, not byte count.
        let content_width = area.width as usize;
        let padding = content_width
            .saturating_sub(credit.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(self.palette.muted);
        let hint_style = text_style.add_modifier(Modifier::DIM);

        let lines = vec![
            Line::from(vec![
                Span::styled(credit, text_style),
                Span::styled(" ".repeat(padding), text_style),
                Span::styled(version, hint_style),
            ]),
            Line::from(Span::styled(HINTS, hint_style)),
        ];

        Paragraph::new(lines)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(self.palette.border)),
            )
    }
}
