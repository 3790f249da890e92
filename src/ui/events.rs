use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
}

/// Reads terminal input on a background thread and forwards it, interleaved
/// with ticks, to the main loop. All state lives on the main loop.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        if let Err(err) = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(tx, tick_rate))
        {
            tracing::error!("Failed to spawn input thread: {}", err);
        }

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn input_loop(tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!("Terminal read error: {}", err);
                    break;
                }
            },
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::error!("Terminal poll error: {}", err);
                break;
            }
        };
        // Receiver gone: the main loop has exited.
        if forwarded.is_err() {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
