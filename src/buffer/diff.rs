//! Diffing Engine: Generate minimal terminal commands from buffer changes.
//!
//! The current and next buffers are compared cell by cell; only changed
//! cells are emitted. Cursor position, colours and modifiers are tracked so
//! redundant commands are skipped. All output is queued into a single byte
//! buffer that the renderer flushes with one write.

use super::{Buffer, Cell, Modifiers, Rgb};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use std::io;

/// Last known terminal state, used to skip redundant commands.
#[derive(Debug, Clone, Default)]
pub struct DiffState {
    cursor: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
}

impl DiffState {
    /// Create a new diff state with unknown terminal state.
    pub const fn new() -> Self {
        Self {
            cursor: None,
            fg: None,
            bg: None,
            modifiers: None,
        }
    }

    /// Forget everything (e.g., after a full redraw or resize).
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of cells that were different.
    pub cells_changed: usize,
    /// Number of cursor move commands emitted.
    pub cursor_moves: usize,
    /// Number of colour change commands emitted.
    pub color_changes: usize,
}

/// Queue commands that turn `current` into `next`.
///
/// Both buffers must have the same dimensions.
pub fn render_diff(
    current: &Buffer,
    next: &Buffer,
    output: &mut Vec<u8>,
    state: &mut DiffState,
) -> io::Result<DiffResult> {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut result = DiffResult::default();
    let width = usize::from(next.width());

    for (idx, (old, new)) in current.cells().iter().zip(next.cells()).enumerate() {
        if old == new || new.is_wide_continuation() {
            continue;
        }
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = ((idx % width) as u16, (idx / width) as u16);

        result.cells_changed += 1;
        if state.cursor != Some((x, y)) {
            queue!(output, MoveTo(x, y))?;
            result.cursor_moves += 1;
        }
        emit_cell(output, new, state, &mut result)?;
        state.cursor = Some((x + u16::from(new.display_width().max(1)), y));
    }

    Ok(result)
}

/// Queue a full redraw of `buffer` (no diffing).
///
/// Used for the first frame and whenever the screen contents are unknown.
pub fn render_full(buffer: &Buffer, output: &mut Vec<u8>, state: &mut DiffState) -> io::Result<()> {
    state.reset();
    let mut result = DiffResult::default();

    for y in 0..buffer.height() {
        queue!(output, MoveTo(0, y))?;
        for x in 0..buffer.width() {
            let Some(cell) = buffer.get(x, y) else {
                continue;
            };
            if cell.is_wide_continuation() {
                continue;
            }
            emit_cell(output, cell, state, &mut result)?;
        }
    }
    state.cursor = None;
    Ok(())
}

/// Emit style changes and the cell's character.
fn emit_cell(
    output: &mut Vec<u8>,
    cell: &Cell,
    state: &mut DiffState,
    result: &mut DiffResult,
) -> io::Result<()> {
    // A reset clears colours too, so modifiers go first.
    if state.modifiers != Some(cell.modifiers()) {
        queue!(output, SetAttribute(Attribute::Reset))?;
        state.fg = None;
        state.bg = None;
        emit_modifiers(output, cell.modifiers())?;
        state.modifiers = Some(cell.modifiers());
    }

    if state.fg != Some(cell.fg()) {
        queue!(output, SetForegroundColor(cell.fg().into()))?;
        state.fg = Some(cell.fg());
        result.color_changes += 1;
    }
    if state.bg != Some(cell.bg()) {
        queue!(output, SetBackgroundColor(cell.bg().into()))?;
        state.bg = Some(cell.bg());
        result.color_changes += 1;
    }

    queue!(output, Print(cell.symbol()))
}

fn emit_modifiers(output: &mut Vec<u8>, modifiers: Modifiers) -> io::Result<()> {
    const ATTRIBUTES: [(Modifiers, Attribute); 5] = [
        (Modifiers::BOLD, Attribute::Bold),
        (Modifiers::DIM, Attribute::Dim),
        (Modifiers::ITALIC, Attribute::Italic),
        (Modifiers::UNDERLINE, Attribute::Underlined),
        (Modifiers::REVERSED, Attribute::Reverse),
    ];

    for (flag, attribute) in ATTRIBUTES {
        if modifiers.contains(flag) {
            queue!(output, SetAttribute(attribute))?;
        }
    }
    Ok(())
}
