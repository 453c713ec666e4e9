//! Cell: The atomic unit of terminal display.
//!
//! A cell holds one displayable character plus its colours and style.
//! Wide characters (CJK) occupy two columns: the leading cell carries the
//! character and the trailing cell is a `WIDE_CONTINUATION` marker.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// # Example
    /// ```
    /// use rolodex::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::REVERSED;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

bitflags! {
    /// Cell-level flags for special states.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct CellFlags: u8 {
        /// This cell is the trailing half of a wide character
        const WIDE_CONTINUATION = 0b0000_0001;
    }
}

/// A single terminal cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    symbol: char,
    display_width: u8,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
    flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        symbol: ' ',
        display_width: 1,
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
        flags: CellFlags::empty(),
    };

    /// Create a cell holding `c` with default colors.
    ///
    /// Zero-width and control characters are stored with width 1 so the
    /// cursor always advances.
    #[inline]
    pub fn new(c: char) -> Self {
        let width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(1);
        Self {
            symbol: c,
            display_width: if width >= 2 { 2 } else { 1 },
            ..Self::EMPTY
        }
    }

    /// Create the trailing half of a wide character.
    #[inline]
    pub const fn wide_continuation() -> Self {
        Self {
            symbol: ' ',
            display_width: 0,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
            flags: CellFlags::WIDE_CONTINUATION,
        }
    }

    /// The character stored in this cell.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.flags.contains(CellFlags::WIDE_CONTINUATION)
    }

    /// Get the display width (0, 1, or 2).
    #[inline]
    pub const fn display_width(&self) -> u8 {
        self.display_width
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let rgb = Rgb::from_u32(0xFF8000);
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_cell_widths() {
        assert_eq!(Cell::new('A').display_width(), 1);
        assert_eq!(Cell::new('日').display_width(), 2);
        assert_eq!(Cell::wide_continuation().display_width(), 0);
        assert!(Cell::wide_continuation().is_wide_continuation());
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::new('X')
            .with_fg(Rgb::new(255, 0, 0))
            .with_bg(Rgb::new(0, 0, 255))
            .with_modifiers(Modifiers::BOLD | Modifiers::REVERSED);

        assert_eq!(cell.symbol(), 'X');
        assert_eq!(cell.fg(), Rgb::new(255, 0, 0));
        assert_eq!(cell.bg(), Rgb::new(0, 0, 255));
        assert!(cell.modifiers().contains(Modifiers::REVERSED));
        assert_ne!(cell, Cell::new('X'));
    }
}
