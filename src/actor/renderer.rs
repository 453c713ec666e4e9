//! Renderer Actor: Dedicated thread for rendering to the terminal.
//!
//! Owns the on-screen copy of the buffer. Each frame from the main loop is
//! diffed against it and the resulting commands are flushed in one write.

use super::messages::RenderCommand;
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::Buffer;
use crossbeam_channel::Receiver;
use std::io::{self, Write};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Total cells changed across all diffed frames.
    pub cells_changed: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Smoothed render time in microseconds.
    pub avg_render_us: u64,
}

/// Diffing state for one output stream.
struct Renderer<W: Write> {
    /// What is currently on screen.
    current: Buffer,
    diff_state: DiffState,
    output: Vec<u8>,
    out: W,
    stats: RenderStats,
    needs_full_redraw: bool,
}

impl<W: Write> Renderer<W> {
    fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            current: Buffer::new(width, height),
            diff_state: DiffState::new(),
            output: Vec::with_capacity(65536),
            out,
            stats: RenderStats::default(),
            needs_full_redraw: true,
        }
    }

    /// Bring the screen in line with `next`.
    fn render(&mut self, next: Buffer) -> io::Result<()> {
        let start = Instant::now();
        self.output.clear();

        // A frame sized for an old terminal size cannot be diffed
        if next.width() != self.current.width() || next.height() != self.current.height() {
            self.needs_full_redraw = true;
        }

        if self.needs_full_redraw {
            render_full(&next, &mut self.output, &mut self.diff_state)?;
            self.needs_full_redraw = false;
        } else {
            let result = render_diff(&self.current, &next, &mut self.output, &mut self.diff_state)?;
            self.stats.cells_changed += result.cells_changed as u64;
        }

        if !self.output.is_empty() {
            self.out.write_all(&self.output)?;
            self.out.flush()?;
        }
        self.current = next;

        let elapsed = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.avg_render_us = if self.stats.avg_render_us == 0 {
            elapsed
        } else {
            (self.stats.avg_render_us * 15 + elapsed) / 16
        };
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.current.resize(width, height);
        self.needs_full_redraw = true;
    }

    /// Handle one command. Returns `false` on shutdown.
    fn handle(&mut self, command: RenderCommand) -> io::Result<bool> {
        match command {
            RenderCommand::FullRedraw(buffer) => {
                self.needs_full_redraw = true;
                self.render(*buffer)?;
            }
            RenderCommand::Update(buffer) => self.render(*buffer)?,
            RenderCommand::Resize { width, height } => self.resize(width, height),
            RenderCommand::Shutdown => return Ok(false),
        }
        Ok(true)
    }
}

/// Renderer actor that handles terminal output.
#[derive(Debug)]
pub struct RendererActor {
    handle: Option<JoinHandle<()>>,
}

impl RendererActor {
    /// Spawn the renderer thread writing to stdout.
    ///
    /// The thread exits on [`RenderCommand::Shutdown`] or when every sender
    /// is dropped.
    pub fn spawn(receiver: Receiver<RenderCommand>, width: u16, height: u16) -> io::Result<Self> {
        let handle = thread::Builder::new()
            .name("rolodex-render".to_string())
            .spawn(move || {
                let mut renderer = Renderer::new(io::stdout(), width, height);
                match Self::run_loop(&receiver, &mut renderer) {
                    Ok(()) => log::debug!("Render thread stopped: {:?}", renderer.stats),
                    Err(e) => log::error!("Render thread error: {e}"),
                }
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the render thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop<W: Write>(
        receiver: &Receiver<RenderCommand>,
        renderer: &mut Renderer<W>,
    ) -> io::Result<()> {
        for command in receiver {
            if !renderer.handle(command)? {
                break;
            }
        }
        Ok(())
    }
}
