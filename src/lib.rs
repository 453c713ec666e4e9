//! # Rolodex
//!
//! A cylinder-scroll list for the terminal.
//!
//! Items sit at fixed angles around a virtual cylinder. Mouse wheel and drag
//! input rotate it, a released drag snaps to the nearest item, and every
//! frame eases the drawn rotation toward its target and hides items facing
//! away from the viewer.
//!
//! ## Core Concepts
//!
//! - **Scroll state machine** ([`wheel`]): pure, owned state driven by typed
//!   [`ScrollEvent`]s and stepped by a [`FrameLoop`]
//! - **Double-buffered rendering**: Current and Next buffers with minimal diff
//! - **Actor model**: Isolated threads for input, frame pacing and rendering
//! - **Regions**: widgets mount into named [`Layout`] regions
//!
//! ## Example
//!
//! ```rust
//! use rolodex::{Layout, Rect, RegionId, Rolodex, Settings, Widget};
//!
//! let mut layout = Layout::new(80, 41);
//! layout.insert(RegionId(1), Rect::new(0, 0, 80, 41));
//!
//! let mut wheel = Rolodex::mount(&layout, RegionId(1), &Settings::default().rolodex);
//! wheel.tick();
//! assert_eq!(wheel.front_item().map(|item| item.code()), Some("FL-001"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod buffer;
pub mod config;
pub mod error;
pub mod layout;
pub mod wheel;
pub mod widget;

// Re-exports for convenience
pub use actor::{
    Engine, EngineConfig, InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent, RenderCommand, Tick,
    TickerActor,
};
pub use buffer::{Buffer, Cell, CellFlags, Modifiers, Rgb, Style};
pub use config::Settings;
pub use error::{ConfigError, Error};
pub use layout::{Layout, Rect, Region, RegionId};
pub use wheel::{FrameLoop, Item, ItemLayout, ScrollEvent, ScrollState};
pub use widget::{Activation, Rolodex, StatusBar, Widget};
