//! Item layout: fixed angular positions around the cylinder.
//!
//! Items are laid out once. Item `i` sits at `-i * step_angle` degrees, so
//! item 0 faces the viewer at rotation 0 and later items hang below it.

use serde::{Deserialize, Serialize};

/// A configured `{title, url}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display title.
    pub title: String,
    /// Link target.
    pub url: String,
}

impl Entry {
    /// Create an entry.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Where an item points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// A real navigation target.
    Url(String),
    /// Filler entry; activation is suppressed.
    Placeholder,
}

/// Cylinder dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderGeometry {
    /// Number of items on the cylinder (at least 1).
    pub item_count: usize,
    /// Arc length between adjacent items.
    pub item_height: f64,
    /// Cylinder radius.
    pub radius: f64,
}

impl CylinderGeometry {
    /// Angular spacing between adjacent items, in degrees.
    ///
    /// Treats `item_height` as arc length, which is close enough to the chord
    /// for the small angles involved.
    pub fn step_angle(&self) -> f64 {
        (self.item_height / self.radius).to_degrees()
    }

    /// Largest reachable rotation: the last item facing the viewer.
    #[allow(clippy::cast_precision_loss)]
    pub fn max_scroll(&self) -> f64 {
        self.item_count.saturating_sub(1) as f64 * self.step_angle()
    }
}

/// One entry on the cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    index: usize,
    code: String,
    title: String,
    link: Link,
    angle: f64,
}

impl Item {
    /// 0-based position in the list.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Short code such as `FL-007`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Code and title as one line.
    pub fn label(&self) -> String {
        format!("{}  {}", self.code, self.title)
    }

    /// Link target.
    pub const fn link(&self) -> &Link {
        &self.link
    }

    /// Whether this is a filler entry.
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.link, Link::Placeholder)
    }

    /// Fixed angle on the cylinder, in degrees (never positive).
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Resolve a click on this item.
    ///
    /// Placeholders swallow the click and return `None`.
    pub fn activate(&self) -> Option<&str> {
        match &self.link {
            Link::Url(url) => Some(url),
            Link::Placeholder => {
                log::debug!("Clicked placeholder {}", self.index);
                None
            }
        }
    }
}

/// The laid-out cylinder: step angle plus every item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    step_angle: f64,
    items: Vec<Item>,
}

impl ItemLayout {
    /// Lay out `geometry.item_count` items.
    ///
    /// The first `entries.len()` items take real content; the rest are
    /// numbered placeholders. Surplus entries are ignored.
    pub fn generate(geometry: &CylinderGeometry, entries: &[Entry], code_prefix: &str) -> Self {
        let step_angle = geometry.step_angle();

        let items = (0..geometry.item_count)
            .map(|index| {
                let (title, link) = entries.get(index).map_or_else(
                    || (format!("Placeholder Fable #{}", index + 1), Link::Placeholder),
                    |entry| (entry.title.clone(), Link::Url(entry.url.clone())),
                );

                #[allow(clippy::cast_precision_loss)]
                let angle = -(index as f64) * step_angle;

                Item {
                    index,
                    code: format!("{code_prefix}-{:03}", index + 1),
                    title,
                    link,
                    angle,
                }
            })
            .collect();

        Self { step_angle, items }
    }

    /// Angular spacing between adjacent items, in degrees.
    pub const fn step_angle(&self) -> f64 {
        self.step_angle
    }

    /// All items in index order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items (only for an unmounted widget).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item by index.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(item_count: usize) -> CylinderGeometry {
        CylinderGeometry {
            item_count,
            item_height: 60.0,
            radius: 400.0,
        }
    }

    fn fables() -> Vec<Entry> {
        vec![
            Entry::new("The Tortoise and the Hare", "fables/title1.html"),
            Entry::new("The Boy Who Cried Wolf", "fables/title2.html"),
            Entry::new("The Fox and the Grapes", "fables/title3.html"),
        ]
    }

    #[test]
    fn test_step_angle_is_arc_length_in_degrees() {
        let step = geometry(60).step_angle();
        let expected = (60.0_f64 / 400.0) * (180.0 / std::f64::consts::PI);
        assert!((step - expected).abs() < 1e-12);
        assert!((geometry(60).max_scroll() - 59.0 * expected).abs() < 1e-9);
    }

    #[test]
    fn test_item_angles_are_deterministic() {
        for (count, height, radius) in [(1, 10.0, 10.0), (7, 33.0, 250.0), (60, 60.0, 400.0)] {
            let geometry = CylinderGeometry {
                item_count: count,
                item_height: height,
                radius,
            };
            let layout = ItemLayout::generate(&geometry, &[], "FL");
            let step = (height / radius) * (180.0 / std::f64::consts::PI);

            assert_eq!(layout.len(), count);
            for (i, item) in layout.items().iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let expected = -(i as f64) * step;
                assert!((item.angle() - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_angles_strictly_decrease() {
        let layout = ItemLayout::generate(&geometry(10), &fables(), "FL");
        assert!(layout
            .items()
            .windows(2)
            .all(|pair| pair[1].angle() < pair[0].angle()));
    }

    #[test]
    fn test_real_entries_then_placeholders() {
        let layout = ItemLayout::generate(&geometry(60), &fables(), "FL");

        let first = layout.get(0).unwrap();
        assert_eq!(first.code(), "FL-001");
        assert_eq!(first.title(), "The Tortoise and the Hare");
        assert_eq!(first.activate(), Some("fables/title1.html"));

        let filler = layout.get(3).unwrap();
        assert!(filler.is_placeholder());
        assert_eq!(filler.code(), "FL-004");
        assert_eq!(filler.title(), "Placeholder Fable #4");
        assert_eq!(filler.activate(), None);

        assert_eq!(layout.get(59).unwrap().label(), "FL-060  Placeholder Fable #60");
    }

    #[test]
    fn test_surplus_entries_ignored() {
        let layout = ItemLayout::generate(&geometry(2), &fables(), "X");
        assert_eq!(layout.len(), 2);
        assert_eq!(layout.get(1).unwrap().code(), "X-002");
        assert!(!layout.get(1).unwrap().is_placeholder());
    }
}
