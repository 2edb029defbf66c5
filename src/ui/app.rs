use std::time::Duration;

use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::animation::{
    Component, CountUp, Marquee, RainGrid, Scheduler, ScrollThresholdObserver, TextReveal,
    Transition, TransitionSpec,
};
use crate::config::Config;
use crate::links::{Links, NavigationTarget};
use crate::navigate::NavigationSender;
use crate::page::content::{self, PARTNER_TILES, STATS};
use crate::page::sections::TEAM_MARQUEE_ROW;
use crate::page::{PageLayout, Section};
use crate::ui::input::{Action, InputRouter, Keymap, LayerId};
use crate::ui::{layout, letter};

const HERO_FADE: TransitionSpec = TransitionSpec::new(500, 0);
const CTA_FADE: TransitionSpec = TransitionSpec::new(500, 200);
const FLOATING_BAR_SLIDE: TransitionSpec = TransitionSpec::new(300, 0);
const STAT_CARD_MS: u64 = 500;
const STAT_CARD_STAGGER_MS: u64 = 200;
/// Steps column and decorative panel of the fellowship section.
const FELLOWSHIP_SLIDE: TransitionSpec = TransitionSpec::new(500, 0);
const PARTNER_TILE_MS: u64 = 400;
const PARTNER_TILE_STAGGER_MS: u64 = 100;

/// Rows per wheel notch.
const WHEEL_ROWS: i32 = 3;
/// Marquee cells per wheel notch.
const MARQUEE_WHEEL_CELLS: i64 = 4;

/// The open letter view: its key layer and how far it is scrolled.
#[derive(Debug, Clone, Copy)]
struct LetterView {
    keys: LayerId,
    scroll: u16,
}

/// The landing page: every animated element, the scroll position, and the
/// scheduler that drives them.
pub struct App {
    scheduler: Scheduler,
    router: InputRouter,
    page_keys: Option<LayerId>,
    links: Links,
    navigator: Option<NavigationSender>,
    title: TextReveal,
    tagline: TextReveal,
    hero: Transition,
    cta: Transition,
    counters: Vec<CountUp>,
    stat_cards: Vec<Transition>,
    fellowship_panels: [Transition; 2],
    team: Marquee,
    partner_tiles: Vec<Transition>,
    rain: Option<RainGrid>,
    floating_bar: Transition,
    threshold: ScrollThresholdObserver,
    letter: Option<LetterView>,
    layout: PageLayout,
    width: u16,
    scroll: u16,
    pointer: Option<(u16, u16)>,
    mounted: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, navigator: Option<NavigationSender>) -> Self {
        let animation = &config.animation;
        let reveal_interval = animation.reveal_interval();
        let count_duration = animation.count_up_duration();
        Self {
            scheduler: Scheduler::new(),
            router: InputRouter::new(),
            page_keys: None,
            links: Links::from(&config.links),
            navigator,
            title: TextReveal::new(content::TITLE, reveal_interval),
            tagline: TextReveal::new(content::TAGLINE, reveal_interval),
            hero: Transition::new(HERO_FADE),
            cta: Transition::new(CTA_FADE),
            counters: STATS
                .iter()
                .map(|stat| CountUp::new(stat.value, count_duration))
                .collect(),
            stat_cards: (0..STATS.len() as u64)
                .map(|i| Transition::once(TransitionSpec::new(STAT_CARD_MS, i * STAT_CARD_STAGGER_MS)))
                .collect(),
            fellowship_panels: [
                Transition::once(FELLOWSHIP_SLIDE),
                Transition::once(FELLOWSHIP_SLIDE),
            ],
            team: Marquee::new(&content::team_items(), animation.marquee_options()),
            partner_tiles: (0..PARTNER_TILES as u64)
                .map(|i| {
                    Transition::once(TransitionSpec::new(
                        PARTNER_TILE_MS,
                        i * PARTNER_TILE_STAGGER_MS,
                    ))
                })
                .collect(),
            rain: animation
                .rain
                .then(|| RainGrid::new(animation.rain_options())),
            floating_bar: Transition::new(FLOATING_BAR_SLIDE),
            threshold: ScrollThresholdObserver::new(config.page.scroll_threshold_rows),
            letter: None,
            layout: PageLayout::new(0),
            width: 0,
            scroll: 0,
            pointer: None,
            mounted: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn title(&self) -> &TextReveal {
        &self.title
    }

    pub fn tagline(&self) -> &TextReveal {
        &self.tagline
    }

    pub fn hero(&self) -> &Transition {
        &self.hero
    }

    pub fn cta(&self) -> &Transition {
        &self.cta
    }

    pub fn counters(&self) -> &[CountUp] {
        &self.counters
    }

    pub fn stat_cards(&self) -> &[Transition] {
        &self.stat_cards
    }

    /// Left steps column, then the right-hand panel.
    pub fn fellowship_panels(&self) -> &[Transition; 2] {
        &self.fellowship_panels
    }

    pub fn team(&self) -> &Marquee {
        &self.team
    }

    pub fn partner_tiles(&self) -> &[Transition] {
        &self.partner_tiles
    }

    pub fn rain(&self) -> Option<&RainGrid> {
        self.rain.as_ref()
    }

    pub fn floating_bar(&self) -> &Transition {
        &self.floating_bar
    }

    pub fn is_past_threshold(&self) -> bool {
        self.threshold.is_past_threshold()
    }

    /// Scroll row of the letter view, while it is open.
    pub fn letter_scroll(&self) -> Option<u16> {
        self.letter.map(|view| view.scroll)
    }

    fn each_component(&mut self, mut f: impl FnMut(&mut dyn Component, &mut Scheduler)) {
        let Self {
            scheduler,
            title,
            tagline,
            hero,
            cta,
            counters,
            stat_cards,
            fellowship_panels,
            team,
            partner_tiles,
            rain,
            floating_bar,
            ..
        } = self;

        let mut components: Vec<&mut dyn Component> = vec![
            title as &mut dyn Component,
            tagline as &mut dyn Component,
            hero as &mut dyn Component,
            cta as &mut dyn Component,
            team as &mut dyn Component,
            floating_bar as &mut dyn Component,
        ];
        components.extend(counters.iter_mut().map(|c| c as &mut dyn Component));
        components.extend(stat_cards.iter_mut().map(|c| c as &mut dyn Component));
        components.extend(fellowship_panels.iter_mut().map(|c| c as &mut dyn Component));
        components.extend(partner_tiles.iter_mut().map(|c| c as &mut dyn Component));
        if let Some(rain) = rain.as_mut() {
            components.push(rain as &mut dyn Component);
        }
        for component in components {
            f(component, scheduler);
        }
    }

    /// Start every animation and register the page shortcuts.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.page_keys = Some(self.router.register(Keymap::page()));
        self.threshold.subscribe(self.scroll);
        self.each_component(|component, scheduler| component.mount(scheduler));
        self.hero.enter(&mut self.scheduler);
        self.cta.enter(&mut self.scheduler);
        if self.threshold.is_past_threshold() {
            self.floating_bar.enter(&mut self.scheduler);
        }
        self.sync_in_view();
        tracing::debug!(subscriptions = self.scheduler.active(), "page mounted");
    }

    /// Stop every animation and release every subscription and listener.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.close_letter();
        if let Some(layer) = self.page_keys.take() {
            self.router.deregister(layer);
        }
        self.threshold.unsubscribe();
        self.each_component(|component, scheduler| component.unmount(scheduler));
        tracing::debug!(subscriptions = self.scheduler.active(), "page unmounted");
    }

    /// Advance the clock to `now` (time since the loop started). Returns
    /// true when something visible changed.
    pub fn on_frame(&mut self, now: Duration) -> bool {
        let fired = self.scheduler.advance(now);
        if fired.is_empty() {
            return false;
        }
        let mut changed = false;
        self.each_component(|component, scheduler| {
            changed |= component.on_frame(&fired, scheduler);
        });
        changed
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.layout = PageLayout::new(height);
        let hero_height = self.layout.span(Section::Hero).height;
        if let Some(rain) = self.rain.as_mut() {
            rain.resize(width, hero_height, &mut self.scheduler);
        }
        self.scroll = self.layout.clamp_scroll(i32::from(self.scroll));
        self.after_scroll();
        if let Some(scroll) = self.letter_scroll() {
            self.scroll_letter_to(i32::from(scroll));
        }
    }

    pub fn on_key(&mut self, key: &KeyEvent) -> bool {
        match self.router.resolve(key) {
            Some(action) => self.perform(action),
            None => false,
        }
    }

    pub fn on_mouse(&mut self, mouse: &MouseEvent) -> bool {
        self.pointer = Some((mouse.column, mouse.row));
        if self.letter.is_some() {
            return match mouse.kind {
                MouseEventKind::ScrollDown => self.perform(Action::ScrollBy(WHEEL_ROWS)),
                MouseEventKind::ScrollUp => self.perform(Action::ScrollBy(-WHEEL_ROWS)),
                _ => false,
            };
        }
        let on_marquee = self.marquee_screen_row() == Some(mouse.row);
        let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.team.set_hovered(on_marquee),
            MouseEventKind::ScrollRight if on_marquee => self.team.scroll_by(MARQUEE_WHEEL_CELLS),
            MouseEventKind::ScrollLeft if on_marquee => self.team.scroll_by(-MARQUEE_WHEEL_CELLS),
            MouseEventKind::ScrollDown if on_marquee && shift => {
                self.team.scroll_by(MARQUEE_WHEEL_CELLS)
            }
            MouseEventKind::ScrollUp if on_marquee && shift => {
                self.team.scroll_by(-MARQUEE_WHEEL_CELLS)
            }
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_ROWS),
            MouseEventKind::Down(MouseButton::Left) => {
                let spots = layout::hotspots(
                    &self.layout,
                    self.width,
                    self.scroll,
                    self.floating_bar.eased(),
                );
                match layout::hit_test(&spots, mouse.column, mouse.row) {
                    Some(action) => self.perform(action),
                    None => false,
                }
            }
            _ => false,
        }
    }

    pub fn perform(&mut self, action: Action) -> bool {
        if self.letter.is_some() {
            return self.perform_on_letter(action);
        }
        match action {
            Action::OpenApplication => {
                self.navigate(self.links.apply.clone());
                false
            }
            Action::ComposePartnership => {
                self.navigate(self.links.partnership.clone());
                false
            }
            Action::ComposeContact => {
                self.navigate(self.links.contact.clone());
                false
            }
            Action::JumpTo(anchor) => self.jump_to(anchor),
            Action::ScrollBy(rows) => self.scroll_by(rows),
            Action::ScrollPages(pages) => self.scroll_by(pages * self.page_rows()),
            Action::ScrollToTop => self.scroll_to(0),
            Action::ScrollToBottom => self.scroll_to(i32::from(self.layout.max_scroll())),
            Action::OpenLetter => self.open_letter(),
            Action::CloseLetter => false,
            Action::Quit => {
                self.request_quit();
                true
            }
        }
    }

    /// While the letter is open only scrolling, closing and quitting apply.
    fn perform_on_letter(&mut self, action: Action) -> bool {
        match action {
            Action::CloseLetter => self.close_letter(),
            Action::ScrollBy(rows) => self.scroll_letter_by(rows),
            Action::ScrollPages(pages) => self.scroll_letter_by(pages * self.page_rows()),
            Action::ScrollToTop => self.scroll_letter_to(0),
            Action::ScrollToBottom => self.scroll_letter_to(i32::MAX),
            Action::Quit => {
                self.request_quit();
                true
            }
            _ => false,
        }
    }

    /// Rows moved by one page scroll.
    fn page_rows(&self) -> i32 {
        i32::from(self.layout.viewport().saturating_sub(2).max(1))
    }

    /// Show the founder's letter. Its keys go on top of the page keys
    /// until it closes.
    pub fn open_letter(&mut self) -> bool {
        if !self.mounted || self.letter.is_some() {
            return false;
        }
        let keys = self.router.register(Keymap::letter());
        self.letter = Some(LetterView { keys, scroll: 0 });
        true
    }

    pub fn close_letter(&mut self) -> bool {
        let Some(view) = self.letter.take() else {
            return false;
        };
        self.router.deregister(view.keys);
        true
    }

    fn scroll_letter_by(&mut self, rows: i32) -> bool {
        match self.letter_scroll() {
            Some(scroll) => self.scroll_letter_to(i32::from(scroll).saturating_add(rows)),
            None => false,
        }
    }

    fn scroll_letter_to(&mut self, row: i32) -> bool {
        let max = letter::max_scroll(self.width, self.layout.viewport());
        let Some(view) = self.letter.as_mut() else {
            return false;
        };
        let next = row.clamp(0, i32::from(max)) as u16;
        if next == view.scroll {
            return false;
        }
        view.scroll = next;
        true
    }

    /// Scroll so the anchored section is at the top. Unknown anchors are
    /// ignored.
    pub fn jump_to(&mut self, anchor: &str) -> bool {
        match self.layout.anchor_scroll(anchor) {
            Some(row) => self.scroll_to(i32::from(row)),
            None => {
                tracing::debug!(anchor, "unknown anchor");
                false
            }
        }
    }

    pub fn scroll_by(&mut self, rows: i32) -> bool {
        self.scroll_to(i32::from(self.scroll) + rows)
    }

    pub fn scroll_to(&mut self, row: i32) -> bool {
        let next = self.layout.clamp_scroll(row);
        if next == self.scroll {
            return false;
        }
        self.scroll = next;
        self.after_scroll();
        true
    }

    fn after_scroll(&mut self) {
        if self.threshold.observe(self.scroll) {
            if self.threshold.is_past_threshold() {
                self.floating_bar.enter(&mut self.scheduler);
            } else {
                self.floating_bar.exit(&mut self.scheduler);
            }
        }
        self.sync_in_view();
        if let Some((_, row)) = self.pointer {
            let on_marquee = self.marquee_screen_row() == Some(row);
            self.team.set_hovered(on_marquee);
        }
    }

    /// Play the scroll-triggered entrances of sections now on screen.
    fn sync_in_view(&mut self) {
        if !self.mounted {
            return;
        }
        let rows = self.layout.viewport();
        if self.layout.span(Section::Stats).intersects(self.scroll, rows) {
            for card in &mut self.stat_cards {
                card.enter(&mut self.scheduler);
            }
        }
        if self.layout.span(Section::Fellowship).intersects(self.scroll, rows) {
            for panel in &mut self.fellowship_panels {
                panel.enter(&mut self.scheduler);
            }
        }
        if self.layout.span(Section::Partners).intersects(self.scroll, rows) {
            for tile in &mut self.partner_tiles {
                tile.enter(&mut self.scheduler);
            }
        }
    }

    /// Screen row of the team marquee, when it is on screen.
    pub fn marquee_screen_row(&self) -> Option<u16> {
        let row = self.layout.span(Section::Team).top + TEAM_MARQUEE_ROW;
        let viewport = self.layout.viewport();
        (row >= self.scroll && row - self.scroll < viewport).then(|| row - self.scroll)
    }

    fn navigate(&self, target: NavigationTarget) {
        let Some(sender) = &self.navigator else {
            tracing::debug!(target = %target, "no navigator attached");
            return;
        };
        if let Err(err) = sender.try_send(target) {
            tracing::warn!(error = %err, "navigation request dropped");
        }
    }
}
