mod common;

use common::{char_key, mounted_app, mouse, quiet_config, MS};
use crossterm::event::{MouseButton, MouseEventKind};
use std::time::Duration;
use ventured::config::Config;
use ventured::navigate;
use ventured::page::sections::TEAM_MARQUEE_ROW;
use ventured::page::Section;
use ventured::ui::app::App;
use ratatui::layout::Rect;
use ventured::ui::layout::{button_width, floating_bar, floating_buttons, hero_rows};

/// Run frames every 16ms from `start` for `span`.
fn play(app: &mut App, start: Duration, span: Duration) -> Duration {
    let mut now = start;
    while now < start + span {
        now += 16 * MS;
        app.on_frame(now);
    }
    now
}

#[test]
fn unmount_releases_every_subscription() {
    let config = Config::default();
    let mut app = App::new(&config, None);
    app.on_resize(80, 24);
    assert_eq!(app.scheduler().active(), 0);

    app.mount();
    assert!(app.scheduler().active() > 0);
    assert_eq!(app.router().layers(), 1);

    play(&mut app, Duration::ZERO, 100 * MS);
    app.unmount();
    assert_eq!(app.scheduler().active(), 0);
    assert_eq!(app.router().layers(), 0);
}

#[test]
fn remount_does_not_leak() {
    let config = Config::default();
    let mut app = App::new(&config, None);
    app.on_resize(80, 24);
    for _ in 0..3 {
        app.mount();
        let start = app.scheduler().now();
        play(&mut app, start, 50 * MS);
        app.unmount();
    }
    assert_eq!(app.scheduler().active(), 0);
}

#[test]
fn hero_animations_settle() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    play(&mut app, Duration::ZERO, 3000 * MS);
    assert_eq!(app.title().visible(), "VenturEd");
    assert!(app.tagline().is_complete());
    assert_eq!(app.hero().progress(), 1.0);
    assert_eq!(app.cta().progress(), 1.0);
    let counted: Vec<u64> = app.counters().iter().map(|c| c.displayed()).collect();
    assert_eq!(counted, vec![80, 2, 100]);
}

#[test]
fn idle_page_only_keeps_marquee_running() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    play(&mut app, Duration::ZERO, 3000 * MS);
    assert_eq!(app.scheduler().active(), 1);
    assert!(app.team().is_running());
}

#[test]
fn floating_bar_follows_scroll_threshold() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    let now = play(&mut app, Duration::ZERO, 100 * MS);
    assert!(!app.floating_bar().is_visible());

    app.scroll_to(9);
    assert!(app.is_past_threshold());
    let now = play(&mut app, now, 400 * MS);
    assert_eq!(app.floating_bar().progress(), 1.0);

    app.scroll_to(8);
    assert!(!app.is_past_threshold());
    play(&mut app, now, 400 * MS);
    assert!(!app.floating_bar().is_visible());
}

#[test]
fn floating_bar_stays_hidden_after_quick_round_trip() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    let now = play(&mut app, Duration::ZERO, 100 * MS);

    app.scroll_to(9);
    app.scroll_to(8);
    assert!(!app.is_past_threshold());
    play(&mut app, now, 1000 * MS);
    assert!(!app.floating_bar().is_visible());
    assert!(!app.floating_bar().is_animating());
}

#[test]
fn floating_bar_stays_shown_after_quick_round_trip() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    app.scroll_to(9);
    let now = play(&mut app, Duration::ZERO, 400 * MS);
    assert_eq!(app.floating_bar().progress(), 1.0);

    app.scroll_to(8);
    app.scroll_to(9);
    assert!(app.is_past_threshold());
    play(&mut app, now, 1000 * MS);
    assert_eq!(app.floating_bar().progress(), 1.0);
}

#[test]
fn stat_cards_enter_once_scrolled_into_view() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    assert!(app.stat_cards().iter().all(|card| !card.is_animating()));

    app.scroll_by(1);
    assert!(app.stat_cards().iter().all(|card| card.is_animating()));
    let now = play(&mut app, Duration::ZERO, 1500 * MS);
    assert!(app.stat_cards().iter().all(|card| card.progress() == 1.0));

    app.scroll_to(0);
    play(&mut app, now, 500 * MS);
    assert!(app.stat_cards().iter().all(|card| card.progress() == 1.0));
}

#[test]
fn fellowship_panels_slide_in_once_in_view() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    assert!(app
        .fellowship_panels()
        .iter()
        .all(|panel| !panel.is_visible() && !panel.is_animating()));

    assert!(app.jump_to("fellowship"));
    assert!(app.fellowship_panels().iter().all(|panel| panel.is_animating()));
    let now = play(&mut app, Duration::ZERO, 1000 * MS);
    assert!(app
        .fellowship_panels()
        .iter()
        .all(|panel| panel.progress() == 1.0));

    app.scroll_to(0);
    play(&mut app, now, 500 * MS);
    assert!(app
        .fellowship_panels()
        .iter()
        .all(|panel| panel.progress() == 1.0 && !panel.is_animating()));
}

#[test]
fn anchors_and_scroll_are_clamped() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    assert!(app.jump_to("fellowship"));
    assert_eq!(app.scroll(), app.layout().span(Section::Fellowship).top);
    assert!(!app.jump_to("nowhere"));

    app.on_key(&char_key('k'));
    app.scroll_to(-10);
    assert_eq!(app.scroll(), 0);
    app.scroll_to(10_000);
    assert_eq!(app.scroll(), app.layout().max_scroll());
}

#[test]
fn hovering_marquee_row_pauses_it() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    app.jump_to("team");
    let row = app.marquee_screen_row();
    let team_top = app.layout().span(Section::Team).top;
    assert_eq!(row, Some(team_top + TEAM_MARQUEE_ROW - app.scroll()));
    let Some(row) = row else {
        return;
    };

    app.on_mouse(&mouse(MouseEventKind::Moved, 10, row));
    assert!(app.team().state().is_paused());
    app.on_mouse(&mouse(MouseEventKind::Moved, 10, row + 2));
    assert!(!app.team().state().is_paused());
}

#[test]
fn clicking_hero_button_opens_application() {
    let config = quiet_config();
    let (tx, mut rx) = navigate::channel();
    let mut app = App::new(&config, Some(tx));
    app.on_resize(80, 24);
    app.mount();

    let rows = hero_rows(24);
    let apply = button_width("Become a Fellow");
    let partner = button_width("Become a Partner");
    let left = (80 - (apply + partner + 2)) / 2;
    app.on_mouse(&mouse(
        MouseEventKind::Down(MouseButton::Left),
        left + 1,
        rows.actions,
    ));
    assert_eq!(
        rx.try_recv().ok().map(|target| target.href()),
        Some("https://apply.venturedglobal.org".to_string())
    );
}

#[test]
fn clicking_floating_bar_buttons() {
    let config = quiet_config();
    let (tx, mut rx) = navigate::channel();
    let mut app = App::new(&config, Some(tx));
    app.on_resize(80, 24);
    app.mount();
    app.scroll_to(9);
    play(&mut app, Duration::ZERO, 400 * MS);

    let buttons = floating_bar(Rect::new(0, 0, 80, 24), app.floating_bar().eased())
        .map(floating_buttons)
        .unwrap_or_default();
    assert_eq!(buttons.len(), 2);

    let click = |button: Rect| mouse(MouseEventKind::Down(MouseButton::Left), button.x + 1, button.y);
    app.on_mouse(&click(buttons[1]));
    assert_eq!(
        rx.try_recv().ok().map(|target| target.href()),
        Some(app.links().partnership.href())
    );
    app.on_mouse(&click(buttons[0]));
    assert_eq!(
        rx.try_recv().ok().map(|target| target.href()),
        Some("https://apply.venturedglobal.org".to_string())
    );
}

#[test]
fn wheel_scrolls_page() {
    let mut app = mounted_app(&quiet_config(), 80, 24);
    assert!(app.on_mouse(&mouse(MouseEventKind::ScrollDown, 0, 0)));
    assert_eq!(app.scroll(), 3);
}
