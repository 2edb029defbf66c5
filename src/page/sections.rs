//! Vertical layout of the page in rows, and its anchors.

/// Page sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Stats,
    Fellowship,
    Team,
    Partners,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Stats,
        Section::Fellowship,
        Section::Team,
        Section::Partners,
        Section::Contact,
        Section::Footer,
    ];

    /// In-page anchor id, for sections that have one.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Fellowship => Some("fellowship"),
            Section::Team => Some("team"),
            Section::Partners => Some("partners"),
            _ => None,
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == Some(anchor))
    }

    fn fixed_height(self) -> u16 {
        match self {
            Section::Hero => MIN_HERO_HEIGHT,
            Section::Stats => 9,
            Section::Fellowship => 17,
            Section::Team => 9,
            Section::Partners => 12,
            Section::Contact => 5,
            Section::Footer => 4,
        }
    }
}

/// The hero fills the viewport, but never less than this.
pub const MIN_HERO_HEIGHT: u16 = 14;

/// Row of the marquee strip inside the team section.
pub const TEAM_MARQUEE_ROW: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }

    /// True when any row of the span is inside `[scroll, scroll + rows)`.
    pub fn intersects(&self, scroll: u16, rows: u16) -> bool {
        self.top < scroll.saturating_add(rows) && self.bottom() > scroll
    }
}

/// Section placement for a given viewport height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
    viewport: u16,
}

impl PageLayout {
    pub fn new(viewport: u16) -> Self {
        let mut top = 0u16;
        let spans = Section::ALL
            .into_iter()
            .map(|section| {
                let height = match section {
                    Section::Hero => viewport.max(MIN_HERO_HEIGHT),
                    other => other.fixed_height(),
                };
                let span = SectionSpan {
                    section,
                    top,
                    height,
                };
                top = top.saturating_add(height);
                span
            })
            .collect();
        Self { spans, viewport }
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    pub fn span(&self, section: Section) -> SectionSpan {
        self.spans
            .iter()
            .copied()
            .find(|span| span.section == section)
            .unwrap_or(SectionSpan {
                section,
                top: 0,
                height: 0,
            })
    }

    pub fn total_height(&self) -> u16 {
        self.spans.last().map(SectionSpan::bottom).unwrap_or(0)
    }

    /// Largest scroll position that still fills the viewport.
    pub fn max_scroll(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport)
    }

    pub fn clamp_scroll(&self, scroll: i32) -> u16 {
        scroll.clamp(0, i32::from(self.max_scroll())) as u16
    }

    /// Scroll position that brings `anchor` to the top, if it exists.
    pub fn anchor_scroll(&self, anchor: &str) -> Option<u16> {
        let section = Section::from_anchor(anchor)?;
        Some(self.clamp_scroll(i32::from(self.span(section).top)))
    }
}
