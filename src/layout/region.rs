//! Region and Layout: Named screen areas that widgets mount into.

use super::rect::Rect;

/// Unique identifier for a layout region.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RegionId(pub u16);

impl RegionId {
    /// Create a new region ID.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// A named rectangle on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Unique identifier.
    pub id: RegionId,
    /// Position and size.
    pub rect: Rect,
}

/// Flat set of regions, recomputed on terminal resize.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    regions: Vec<Region>,
    terminal_size: (u16, u16),
}

impl Layout {
    /// Create an empty layout for the given terminal size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            regions: Vec::new(),
            terminal_size: (width, height),
        }
    }

    /// The terminal size this layout was computed for.
    pub const fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Insert a region, replacing any region with the same id.
    pub fn insert(&mut self, id: RegionId, rect: Rect) {
        if let Some(region) = self.regions.iter_mut().find(|r| r.id == id) {
            region.rect = rect;
        } else {
            self.regions.push(Region { id, rect });
        }
    }

    /// Look up a region's rectangle.
    pub fn get(&self, id: RegionId) -> Option<Rect> {
        self.regions.iter().find(|r| r.id == id).map(|r| r.rect)
    }

    /// All regions in insertion order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}
