//! Status Bar Widget: one-line footer with a left and a right section.
//!
//! The demo uses it for key hints on the left and the last activated link
//! on the right.

use super::traits::Widget;
use crate::actor::InputEvent;
use crate::buffer::{Buffer, Cell, Rgb, Style};
use crate::layout::Rect;

/// Colours for the status bar.
#[derive(Debug, Clone, Copy)]
pub struct StatusBarConfig {
    /// Background color.
    pub bg: Rgb,
    /// Left section text color.
    pub left_fg: Rgb,
    /// Right section text color.
    pub right_fg: Rgb,
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            bg: Rgb::new(40, 40, 40),
            left_fg: Rgb::new(150, 150, 150),
            right_fg: Rgb::new(100, 200, 100),
        }
    }
}

/// A one-line status bar.
#[derive(Debug)]
pub struct StatusBar {
    left: String,
    right: String,
    bounds: Rect,
    config: StatusBarConfig,
    dirty: bool,
}

impl StatusBar {
    /// Create a new status bar with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, StatusBarConfig::default())
    }

    /// Create a new status bar with custom colours.
    pub const fn with_config(bounds: Rect, config: StatusBarConfig) -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            bounds,
            config,
            dirty: true,
        }
    }

    /// Set the left section content.
    pub fn set_left(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.left {
            self.left = text;
            self.dirty = true;
        }
    }

    /// Set the right section content.
    pub fn set_right(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.right {
            self.right = text;
            self.dirty = true;
        }
    }

    /// Get the left section content.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Get the right section content.
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl Widget for StatusBar {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        if self.bounds.is_empty() {
            return;
        }
        let line = Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, 1);
        buffer.fill_rect(line, Cell::new(' ').with_bg(self.config.bg));

        let left_style = Style::new(self.config.left_fg, self.config.bg);
        let used = buffer.draw_text(line.x + 1, line.y, line.right(), &self.left, left_style);

        // Right-aligned, but never over the left section
        let right_width = u16::try_from(unicode_width::UnicodeWidthStr::width(self.right.as_str()))
            .unwrap_or(u16::MAX);
        let start = line
            .right()
            .saturating_sub(right_width.saturating_add(1))
            .max(line.x + 1 + used + 1);
        let right_style = Style::new(self.config.right_fg, self.config.bg);
        buffer.draw_text(start, line.y, line.right(), &self.right, right_style);
    }

    fn handle_input(&mut self, _event: &InputEvent) -> bool {
        false
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_sections() {
        let mut bar = StatusBar::new(Rect::new(0, 0, 30, 1));
        bar.set_left("q quit");
        bar.set_right("opened x.html");

        let mut buffer = Buffer::new(30, 1);
        bar.render(&mut buffer);
        let row = buffer.row_text(0);
        assert!(row.starts_with(" q quit"));
        assert!(row.ends_with("opened x.html "));
    }

    #[test]
    fn test_unchanged_text_keeps_clean() {
        let mut bar = StatusBar::new(Rect::new(0, 0, 30, 1));
        bar.set_left("hint");
        bar.clear_redraw();

        bar.set_left("hint");
        assert!(!bar.needs_redraw());
        bar.set_right("new");
        assert!(bar.needs_redraw());
    }

    #[test]
    fn test_right_never_overlaps_left() {
        let mut bar = StatusBar::new(Rect::new(0, 0, 12, 1));
        bar.set_left("abcdef");
        bar.set_right("0123456789");

        let mut buffer = Buffer::new(12, 1);
        bar.render(&mut buffer);
        assert!(buffer.row_text(0).starts_with(" abcdef 0123"));
    }
}
