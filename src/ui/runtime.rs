use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

use crate::config::Config;
use crate::navigate::NavigationSender;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the page until the user quits or shutdown is signalled.
///
/// Blocks the calling thread; the terminal is restored before returning.
pub fn run(config: &Config, navigator: NavigationSender, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, _guard) = setup_terminal()?;
    let frame_interval = config.page.frame_interval();

    let mut app = App::new(config, Some(navigator));
    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);
    app.mount();

    let events = EventHandler::new(frame_interval, shutdown.clone());
    let clock = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| draw(frame, &app))?;
            dirty = false;
        }
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(frame_interval) {
            Ok(AppEvent::Key(key)) => dirty |= app.on_key(&key),
            Ok(AppEvent::Mouse(mouse)) => dirty |= app.on_mouse(&mouse),
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(cols, rows);
                dirty = true;
            }
            Ok(AppEvent::Frame) => dirty |= app.on_frame(clock.elapsed()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.unmount();
    shutdown.signal();
    Ok(())
}
