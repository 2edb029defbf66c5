use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;

/// Longest the reader blocks before re-checking the shutdown flag.
const POLL_CAP: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// A frame is due.
    Frame,
}

/// Reads terminal input on its own thread and interleaves frame ticks.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(frame_interval: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_frame = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    break;
                }

                let timeout = frame_interval
                    .saturating_sub(last_frame.elapsed())
                    .min(POLL_CAP);

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                        Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                        Ok(_) => None,
                        Err(err) => {
                            tracing::error!(error = %err, "terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => None,
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        break;
                    }
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }

                if last_frame.elapsed() >= frame_interval {
                    if tx.send(AppEvent::Frame).is_err() {
                        break;
                    }
                    last_frame = Instant::now();
                }
            }
            tracing::debug!("event reader stopped");
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
