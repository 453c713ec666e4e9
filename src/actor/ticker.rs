//! Ticker Actor: Dedicated thread that paces animation frames.
//!
//! The ticker is the frame scheduler: each tick asks the main loop to run
//! one frame of every animated widget. Ticks never queue up; if the main
//! loop falls behind, surplus ticks are dropped.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Frame number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Ticker actor that generates regular timing events.
#[derive(Debug)]
pub struct TickerActor {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    tick_rx: Receiver<Tick>,
}

impl TickerActor {
    /// Spawn a ticker firing every `interval`.
    pub fn spawn(interval: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Small buffer: a slow receiver should skip ticks, not replay them
        let (tick_tx, tick_rx) = bounded(2);

        let handle = thread::Builder::new()
            .name("rolodex-ticker".to_string())
            .spawn(move || Self::run_loop(&tick_tx, &shutdown_clone, interval))?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            tick_rx,
        })
    }

    /// Spawn a ticker for the given frame rate (at least 1 fps).
    pub fn at_fps(fps: u32) -> io::Result<Self> {
        Self::spawn(Duration::from_secs(1) / fps.max(1))
    }

    /// The tick receiver, for use with `select!`.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &AtomicBool, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        while !shutdown.load(Ordering::Relaxed) {
            let now = Instant::now();
            if now < next_tick {
                thread::sleep((next_tick - now).min(Duration::from_millis(1)));
                continue;
            }

            // Full buffer means the receiver is behind; drop this tick
            let _ = tick_tx.try_send(Tick {
                frame,
                elapsed: now - start,
            });

            frame += 1;
            next_tick += interval;
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
