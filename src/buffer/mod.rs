//! Buffer module: Core data structures for the double-buffer rendering system.
//!
//! This module contains:
//! - [`Cell`]: The atomic unit of display
//! - [`Buffer`]: A grid of cells representing the terminal screen
//! - [`Rgb`]: True-color representation
//! - [`Modifiers`]: Text style bitflags
//! - [`diff`]: Diffing engine that turns buffer changes into terminal commands

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
pub mod diff;

pub use cell::{Cell, CellFlags, Modifiers, Rgb};
pub use buffer::{Buffer, Style};
