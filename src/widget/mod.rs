//! Widgets: components the main loop renders and routes input to.
//!
//! - [`Rolodex`]: the cylinder-scroll list.
//! - [`StatusBar`]: a one-line footer.

mod rolodex;
mod status_bar;
mod traits;

pub use rolodex::{Activation, Rolodex};
pub use status_bar::{StatusBar, StatusBarConfig};
pub use traits::Widget;
