//! Engine: Main coordinator that ties actors together.
//!
//! The Engine owns the terminal session: it switches to raw mode, captures
//! the mouse, spawns the input and render actors and restores everything on
//! drop. Applications draw into [`Engine::buffer_mut`] and call
//! [`Engine::present`] once per frame.

use super::messages::{InputEvent, RenderCommand};
use super::{InputActor, RendererActor};
use crate::buffer::Buffer;
use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to enable mouse capture.
    pub enable_mouse: bool,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            input_poll_timeout: Duration::from_millis(10),
            enable_mouse: true,
            alternate_screen: true,
        }
    }
}

/// The terminal session.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    input_rx: Receiver<InputEvent>,
    render_tx: Sender<RenderCommand>,
    input_actor: Option<InputActor>,
    renderer_actor: Option<RendererActor>,
    buffer: Buffer,
    running: bool,
}

impl Engine {
    /// Create a new engine with default configuration.
    pub fn new() -> io::Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails or an actor thread cannot
    /// be spawned.
    pub fn with_config(config: EngineConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.enable_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        execute!(stdout, cursor::Hide)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let (render_tx, render_rx) = bounded::<RenderCommand>(16);

        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout)?;
        let renderer_actor = RendererActor::spawn(render_rx, width, height)?;
        log::info!("Engine started at {width}x{height}");

        Ok(Self {
            config,
            input_rx,
            render_tx,
            input_actor: Some(input_actor),
            renderer_actor: Some(renderer_actor),
            buffer: Buffer::new(width.max(1), height.max(1)),
            running: true,
        })
    }

    /// The configuration this engine was started with.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Get a mutable reference to the frame buffer.
    pub const fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Get the input receiver for event-driven loops.
    pub const fn input_receiver(&self) -> &Receiver<InputEvent> {
        &self.input_rx
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Send the current buffer to the renderer as a diff.
    pub fn present(&self) {
        let _ = self.render_tx.send(RenderCommand::Update(Box::new(self.buffer.clone())));
    }

    /// Send the current buffer to the renderer as a full redraw.
    pub fn redraw(&self) {
        let _ = self.render_tx.send(RenderCommand::FullRedraw(Box::new(self.buffer.clone())));
    }

    /// Handle a resize event.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let (width, height) = (width.max(1), height.max(1));
        self.buffer.resize(width, height);
        let _ = self.render_tx.send(RenderCommand::Resize { width, height });
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        let _ = self.render_tx.send(RenderCommand::Shutdown);
        if let Some(actor) = self.renderer_actor.take() {
            actor.join();
        }

        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.enable_mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        log::info!("Engine stopped");
    }
}
