//! Wheel: the cylinder-scroll state machine behind the Rolodex widget.
//!
//! Four pieces cooperate around one owned [`ScrollState`]:
//!
//! - **Item layout** ([`ItemLayout`]): fixed angle per item, computed once.
//! - **Input controller** ([`ScrollEvent`], [`ScrollState::apply`]): wheel and
//!   drag input move the target angle, always clamped.
//! - **Snap resolver** ([`snap_to_step`]): a released drag rounds to the
//!   nearest item.
//! - **Render loop** ([`FrameLoop`]): eases the drawn angle toward the target
//!   and culls items facing away.
//!
//! ```text
//!  ScrollEvent ──▶ apply() ──▶ target_angle ──▶ FrameLoop::step() ──▶ Frame
//!                     │              ▲                 │
//!                     └─ snap() ─────┘        current_angle
//! ```
//!
//! Nothing here touches the terminal, so every transition is unit-testable.

mod controller;
mod frame;
mod items;
mod snap;
mod state;

pub use controller::ScrollEvent;
pub use frame::{ease_toward, is_visible, Frame, FrameLoop, VISIBILITY_LIMIT};
pub use items::{CylinderGeometry, Entry, Item, ItemLayout, Link};
pub use snap::snap_to_step;
pub use state::{DragAnchor, ScrollBounds, ScrollState, ScrollTuning};
