//! Layout module: Named static regions computed once per terminal size.
//!
//! There is no tree traversal at render time - just a flat list of regions
//! that widgets look up by id when they mount.

mod rect;
mod region;

pub use rect::Rect;
pub use region::{Layout, Region, RegionId};
