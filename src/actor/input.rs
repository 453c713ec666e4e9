//! Input Actor: Dedicated thread for polling terminal events.
//!
//! Runs crossterm's event polling on its own thread and forwards keyboard,
//! mouse and resize events to the main loop.

use super::messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};
use crossbeam_channel::{SendTimeoutError, Sender, TrySendError};
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
#[derive(Debug)]
pub struct InputActor {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// checking the shutdown flag.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("rolodex-input".to_string())
            .spawn(move || Self::run_loop(&sender, &shutdown_clone, poll_timeout))?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.try_send(InputEvent::Shutdown);
                break;
            }

            let event = match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => convert_event(event),
                    Err(e) => Some(InputEvent::Error(e.to_string())),
                },
                Ok(false) => None,
                Err(e) => Some(InputEvent::Error(e.to_string())),
            };

            if let Some(event) = event {
                if deliver(sender, event, shutdown, poll_timeout) == Delivery::Closed {
                    // Receiver dropped
                    break;
                }
            }
        }
        log::debug!("Input thread stopped");
    }
}

/// What happened to one event handed to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Sent,
    Dropped,
    Closed,
}

/// Forward `event`, waiting for queue space unless it is a bare move.
///
/// Pointer moves are superseded by the next one and are dropped when the
/// queue is full. Everything else (presses, releases, keys, resizes) waits,
/// re-checking `shutdown` every `retry`, so a release always ends its drag.
fn deliver(sender: &Sender<InputEvent>, event: InputEvent, shutdown: &AtomicBool, retry: Duration) -> Delivery {
    if matches!(event, InputEvent::MouseMove(_)) {
        return match sender.try_send(event) {
            Ok(()) => Delivery::Sent,
            Err(TrySendError::Full(_)) => Delivery::Dropped,
            Err(TrySendError::Disconnected(_)) => Delivery::Closed,
        };
    }

    let retry = retry.max(Duration::from_millis(1));
    let mut pending = event;
    loop {
        match sender.send_timeout(pending, retry) {
            Ok(()) => return Delivery::Sent,
            Err(SendTimeoutError::Disconnected(_)) => return Delivery::Closed,
            Err(SendTimeoutError::Timeout(event)) => {
                if shutdown.load(Ordering::Relaxed) {
                    log::debug!("Shutting down with {event:?} undelivered");
                    return Delivery::Dropped;
                }
                pending = event;
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event to our `InputEvent`.
fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let code = match key.code {
                event::KeyCode::Char(c) => KeyCode::Char(c),
                event::KeyCode::Esc => KeyCode::Esc,
                _ => return None,
            };
            Some(InputEvent::Key {
                code,
                modifiers: convert_modifiers(key.modifiers),
            })
        }
        Event::Mouse(mouse) => convert_mouse_event(mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}

fn convert_mouse_event(mouse: event::MouseEvent) -> Option<InputEvent> {
    let (x, y) = (mouse.column, mouse.row);
    let at = |button| MouseEvent { x, y, button };

    Some(match mouse.kind {
        MouseEventKind::Down(button) => InputEvent::MouseDown(at(Some(convert_button(button)))),
        MouseEventKind::Up(button) => InputEvent::MouseUp(at(Some(convert_button(button)))),
        MouseEventKind::Drag(button) => InputEvent::MouseMove(at(Some(convert_button(button)))),
        MouseEventKind::Moved => InputEvent::MouseMove(at(None)),
        MouseEventKind::ScrollUp => InputEvent::MouseScroll { x, y, delta: 1 },
        MouseEventKind::ScrollDown => InputEvent::MouseScroll { x, y, delta: -1 },
        _ => return None,
    })
}

const fn convert_button(button: event::MouseButton) -> MouseButton {
    match button {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use crossterm::event::{KeyEvent, KeyEventState};
    use std::time::Instant;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(event::MouseEvent {
            kind,
            column,
            row,
            modifiers: event::KeyModifiers::NONE,
        })
    }

    fn moved(x: u16) -> InputEvent {
        InputEvent::MouseMove(MouseEvent::left(x, 0))
    }

    #[test]
    fn test_full_queue_drops_moves_only() {
        let (tx, rx) = bounded(1);
        let shutdown = AtomicBool::new(false);
        let retry = Duration::from_millis(5);

        assert_eq!(deliver(&tx, moved(1), &shutdown, retry), Delivery::Sent);
        assert_eq!(deliver(&tx, moved(2), &shutdown, retry), Delivery::Dropped);

        // The release waits for the main loop to catch up
        let drain = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            let first = rx.recv().unwrap();
            let second = rx.recv_timeout(Duration::from_secs(1)).unwrap();
            (first, second)
        });
        let release = InputEvent::MouseUp(MouseEvent::left(2, 0));
        assert_eq!(deliver(&tx, release.clone(), &shutdown, retry), Delivery::Sent);

        let (first, second) = drain.join().unwrap();
        assert_eq!(first, moved(1));
        assert_eq!(second, release);
    }

    #[test]
    fn test_blocked_delivery_gives_up_on_shutdown() {
        let (tx, _rx) = bounded(1);
        let shutdown = AtomicBool::new(false);
        let retry = Duration::from_millis(5);
        assert_eq!(deliver(&tx, moved(1), &shutdown, retry), Delivery::Sent);

        shutdown.store(true, Ordering::Relaxed);
        let start = Instant::now();
        let release = InputEvent::MouseUp(MouseEvent::left(1, 0));
        assert_eq!(deliver(&tx, release, &shutdown, retry), Delivery::Dropped);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_delivery_reports_closed_receiver() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let shutdown = AtomicBool::new(false);
        let key = InputEvent::Key {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(deliver(&tx, key, &shutdown, Duration::from_millis(5)), Delivery::Closed);
        assert_eq!(deliver(&tx, moved(1), &shutdown, Duration::from_millis(5)), Delivery::Closed);
    }

    #[test]
    fn test_convert_drag_is_move_with_button() {
        let converted = convert_event(mouse(MouseEventKind::Drag(event::MouseButton::Left), 3, 7));
        assert_eq!(converted, Some(InputEvent::MouseMove(MouseEvent::left(3, 7))));
    }

    #[test]
    fn test_convert_scroll_direction() {
        assert_eq!(
            convert_event(mouse(MouseEventKind::ScrollDown, 1, 2)),
            Some(InputEvent::MouseScroll { x: 1, y: 2, delta: -1 })
        );
        assert_eq!(
            convert_event(mouse(MouseEventKind::ScrollUp, 1, 2)),
            Some(InputEvent::MouseScroll { x: 1, y: 2, delta: 1 })
        );
    }

    #[test]
    fn test_convert_key_press_only() {
        let mut key = KeyEvent::new(event::KeyCode::Char('c'), event::KeyModifiers::CONTROL);
        assert_eq!(
            convert_event(Event::Key(key)),
            Some(InputEvent::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers {
                    control: true,
                    ..KeyModifiers::NONE
                },
            })
        );

        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        assert_eq!(convert_event(Event::Key(key)), None);
        assert_eq!(
            convert_event(Event::Key(KeyEvent::from(event::KeyCode::Tab))),
            None
        );
    }
}
