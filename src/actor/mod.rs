//! Actor Model: Message-passing concurrency for the terminal front end.
//!
//! Three threads cooperate over crossbeam channels:
//! - **Input Actor**: Polls terminal events, forwards to main loop
//! - **Render Actor**: Receives frames, diffs and flushes
//! - **Ticker Actor**: Paces the animation frames
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │              │
//! ┌──────────────┐        Tick         │  Main Loop   │
//! │Ticker Thread │ ─────────────────▶  │  (widgets)   │
//! └──────────────┘                     │              │
//! ┌──────────────┐    RenderCommand    │              │
//! │Render Thread │ ◀─────────────────  │              │
//! └──────────────┘                     └──────────────┘
//! ```

mod engine;
mod input;
mod messages;
mod renderer;
mod ticker;

pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent, RenderCommand};
pub use renderer::{RenderStats, RendererActor};
pub use ticker::{Tick, TickerActor};
