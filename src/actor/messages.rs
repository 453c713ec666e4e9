//! Message types for actor communication.
//!
//! These enums define the protocol between actors in the system.

use crate::buffer::Buffer;

/// Key codes for keyboard input.
///
/// Only the keys the application reacts to; everything else is dropped by
/// the input actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

/// Mouse event details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
    /// Mouse button involved (if any).
    pub button: Option<MouseButton>,
}

impl MouseEvent {
    /// A left-button event at (x, y).
    pub const fn left(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            button: Some(MouseButton::Left),
        }
    }
}

/// Events from the input thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// Mouse button pressed.
    MouseDown(MouseEvent),

    /// Mouse button released.
    MouseUp(MouseEvent),

    /// Mouse moved; `button` is set while a button is held (a drag).
    MouseMove(MouseEvent),

    /// Mouse wheel turned by one notch.
    MouseScroll {
        /// X coordinate.
        x: u16,
        /// Y coordinate.
        y: u16,
        /// Scroll delta (positive = up, negative = down).
        delta: i16,
    },

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

/// Commands sent to the render thread.
#[derive(Debug)]
pub enum RenderCommand {
    /// Redraw every cell from this buffer.
    FullRedraw(Box<Buffer>),

    /// Diff this buffer against what is on screen.
    Update(Box<Buffer>),

    /// Resize the buffers; the next frame is a full redraw.
    Resize {
        /// New width.
        width: u16,
        /// New height.
        height: u16,
    },

    /// Shutdown the render thread.
    Shutdown,
}
