//! Rolodex Widget: the scroll cylinder drawn into a terminal region.
//!
//! Pointer input is converted to pixel units (`row_height_px` per row,
//! `wheel_notch_px` per wheel notch) and fed to the [`ScrollState`] as
//! [`ScrollEvent`]s. Every tick runs one [`FrameLoop`] step and projects the
//! visible items onto rows: an item at relative angle `a` lands
//! `round(radius_rows * sin(a))` rows above the centre row.

use super::traits::Widget;
use crate::actor::{InputEvent, MouseButton, MouseEvent};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb, Style};
use crate::config::RolodexConfig;
use crate::layout::{Layout, Rect, RegionId};
use crate::wheel::{
    CylinderGeometry, Frame, FrameLoop, Item, ItemLayout, ScrollBounds, ScrollEvent, ScrollState,
};

const BG: Rgb = Rgb::new(18, 18, 26);
const FG: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(110, 110, 125);
const FRONT_BG: Rgb = Rgb::new(60, 70, 120);
const CODE_FG: Rgb = Rgb::new(240, 190, 90);

/// A link chosen by clicking an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Index of the clicked item.
    pub index: usize,
    /// Item code, e.g. `FL-002`.
    pub code: String,
    /// Item title.
    pub title: String,
    /// Navigation target.
    pub url: String,
}

/// Where one item landed this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    row: u16,
    index: usize,
    /// Relative angle; 0 is facing the viewer.
    depth: f64,
}

/// A pointer press that may turn into a click.
#[derive(Debug, Clone, Copy)]
struct Press {
    x: u16,
    y: u16,
    /// Item under the pointer when pressed.
    index: Option<usize>,
    moved: bool,
}

/// The rolodex widget.
#[derive(Debug)]
pub struct Rolodex {
    region: RegionId,
    mounted: bool,
    bounds: Rect,
    items: ItemLayout,
    state: ScrollState,
    frames: FrameLoop,
    /// Cylinder radius in rows.
    radius_rows: f64,
    row_height_px: f64,
    wheel_notch_px: f64,
    placements: Vec<Placement>,
    front: Option<usize>,
    press: Option<Press>,
    activation: Option<Activation>,
    dirty: bool,
}

impl Rolodex {
    /// Mount the widget into `region` of `layout`.
    ///
    /// Never fails: without the region the widget is inert, holding no
    /// items, ignoring input and producing no frames.
    pub fn mount(layout: &Layout, region: RegionId, config: &RolodexConfig) -> Self {
        let bounds = layout.get(region);
        let geometry = match bounds {
            Some(_) => config.geometry(),
            None => {
                log::debug!("Region {region:?} not in layout; rolodex is inert");
                CylinderGeometry {
                    item_count: 0,
                    ..config.geometry()
                }
            }
        };

        let items = ItemLayout::generate(&geometry, &config.entries, &config.code_prefix);
        let state = ScrollState::new(
            items.step_angle(),
            ScrollBounds::up_to(geometry.max_scroll()),
            config.tuning(),
        );
        let mut frames = FrameLoop::new();
        if bounds.is_none() {
            frames.stop();
        }

        let mut rolodex = Self {
            region,
            mounted: bounds.is_some(),
            bounds: bounds.unwrap_or(Rect::ZERO),
            items,
            state,
            frames,
            radius_rows: radius_in_rows(config),
            row_height_px: config.row_height_px,
            wheel_notch_px: config.wheel_notch_px,
            placements: Vec::new(),
            front: None,
            press: None,
            activation: None,
            dirty: true,
        };
        rolodex.tick();
        rolodex
    }

    /// Follow the region after the layout changed.
    pub fn remount(&mut self, layout: &Layout) {
        if !self.mounted {
            return;
        }
        match layout.get(self.region) {
            Some(rect) => self.set_bounds(rect),
            None => log::warn!("Region {:?} vanished from layout", self.region),
        }
    }

    /// Whether the widget found its region.
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The laid-out items.
    pub const fn items(&self) -> &ItemLayout {
        &self.items
    }

    /// Scroll state (angles, drag anchor).
    pub const fn state(&self) -> &ScrollState {
        &self.state
    }

    /// The frame driver.
    pub const fn frame_loop(&self) -> &FrameLoop {
        &self.frames
    }

    /// Stop or resume animation.
    pub fn set_running(&mut self, running: bool) {
        if !self.mounted {
            return;
        }
        if running {
            self.frames.resume();
        } else {
            self.frames.stop();
        }
    }

    /// Feed one event to the scroll state (ignored when inert).
    pub fn apply(&mut self, event: ScrollEvent) {
        if self.mounted {
            self.state.apply(event);
        }
    }

    /// The item facing the viewer, if any is on screen.
    pub fn front_item(&self) -> Option<&Item> {
        self.front.and_then(|index| self.items.get(index))
    }

    /// The item drawn on `row`, if any.
    pub fn item_at_row(&self, row: u16) -> Option<&Item> {
        self.placements
            .iter()
            .find(|placement| placement.row == row)
            .and_then(|placement| self.items.get(placement.index))
    }

    /// The last activation, cleared on read.
    pub fn take_activation(&mut self) -> Option<Activation> {
        self.activation.take()
    }

    fn to_px(&self, row: u16) -> f64 {
        f64::from(row) * self.row_height_px
    }

    fn reproject(&mut self) {
        let (placements, front) = project(self.frames.last(), &self.items, self.bounds, self.radius_rows);
        self.placements = placements;
        self.front = front;
        self.dirty = true;
    }

    fn click(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        if let Some(url) = item.activate() {
            log::info!("Activated {} -> {url}", item.code());
            self.activation = Some(Activation {
                index,
                code: item.code().to_string(),
                title: item.title().to_string(),
                url: url.to_string(),
            });
        }
    }

    fn on_press(&mut self, x: u16, y: u16) {
        let index = self
            .placements
            .iter()
            .find(|placement| placement.row == y)
            .map(|placement| placement.index);
        self.press = Some(Press {
            x,
            y,
            index,
            moved: false,
        });
        self.state.apply(ScrollEvent::DragStarted(self.to_px(y)));
    }

    fn on_move(&mut self, x: u16, y: u16) {
        if let Some(press) = self.press.as_mut() {
            press.moved |= (x, y) != (press.x, press.y);
        }
        self.state.apply(ScrollEvent::DragMoved(self.to_px(y)));
    }

    fn on_release(&mut self) {
        self.state.apply(ScrollEvent::DragReleased);
        if let Some(Press {
            index: Some(index),
            moved: false,
            ..
        }) = self.press.take()
        {
            self.click(index);
        }
    }
}

/// Cylinder radius in terminal rows.
///
/// Geometry that yields no finite row count draws every item on the centre
/// row instead of failing.
fn radius_in_rows(config: &RolodexConfig) -> f64 {
    let rows = config.radius / config.row_height_px;
    if config.row_height_px > 0.0 && rows.is_finite() {
        rows
    } else {
        log::warn!(
            "Radius {} over row height {} is not a row count; drawing flat",
            config.radius,
            config.row_height_px
        );
        0.0
    }
}

/// Project the visible items of `frame` onto rows of `bounds`.
///
/// When two items round to the same row the one nearer the front wins.
/// Returns the placements in row order and the front-most item.
fn project(frame: &Frame, items: &ItemLayout, bounds: Rect, radius_rows: f64) -> (Vec<Placement>, Option<usize>) {
    let mut slots: Vec<Option<Placement>> = vec![None; usize::from(bounds.height)];
    let center = f64::from(bounds.center_row());

    for index in frame.visible_indices() {
        let Some(item) = items.get(index) else {
            continue;
        };
        let depth = item.angle() + frame.rotation;
        let row = center - (radius_rows * depth.to_radians().sin()).round();
        if !row.is_finite() || row < f64::from(bounds.y) || row >= f64::from(bounds.bottom()) {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = row as u16;

        let slot = &mut slots[usize::from(row - bounds.y)];
        if slot.map_or(true, |taken| depth.abs() < taken.depth.abs()) {
            *slot = Some(Placement { row, index, depth });
        }
    }

    let placements: Vec<Placement> = slots.into_iter().flatten().collect();
    let front = placements
        .iter()
        .min_by(|a, b| a.depth.abs().total_cmp(&b.depth.abs()))
        .map(|placement| placement.index);
    (placements, front)
}

impl Widget for Rolodex {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        if !self.mounted {
            return;
        }
        self.bounds = bounds;
        self.reproject();
    }

    fn render(&self, buffer: &mut Buffer) {
        if !self.mounted || self.bounds.is_empty() {
            return;
        }
        buffer.fill_rect(self.bounds, Cell::new(' ').with_bg(BG));

        let left = self.bounds.x.saturating_add(2);
        let right = self.bounds.right();
        for placement in &self.placements {
            let Some(item) = self.items.get(placement.index) else {
                continue;
            };
            let is_front = self.front == Some(placement.index);
            let bg = if is_front { FRONT_BG } else { BG };
            if is_front {
                let row = Rect::new(self.bounds.x, placement.row, self.bounds.width, 1);
                buffer.fill_rect(row, Cell::new(' ').with_bg(bg));
            }

            let mut code_style = Style::new(CODE_FG, bg);
            let mut title_style = Style::new(if item.is_placeholder() { MUTED } else { FG }, bg);
            if is_front {
                code_style = code_style.with_modifiers(Modifiers::BOLD);
                title_style = title_style.with_modifiers(Modifiers::BOLD);
            }

            let used = buffer.draw_text(left, placement.row, right, item.code(), code_style);
            let title_x = left.saturating_add(used).saturating_add(2);
            buffer.draw_text(title_x, placement.row, right, item.title(), title_style);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.mounted {
            return false;
        }
        match *event {
            InputEvent::MouseScroll { x, y, delta } if self.bounds.contains(x, y) => {
                // Notches are positive upwards; pixel deltas grow downwards
                let pixels = -f64::from(delta) * self.wheel_notch_px;
                self.state.apply(ScrollEvent::WheelScrolled(pixels));
                true
            }
            InputEvent::MouseDown(MouseEvent {
                x,
                y,
                button: Some(MouseButton::Left),
            }) if self.bounds.contains(x, y) => {
                self.on_press(x, y);
                true
            }
            // Once a drag has started it follows the pointer anywhere
            InputEvent::MouseMove(MouseEvent { x, y, .. }) if self.state.is_dragging() => {
                self.on_move(x, y);
                true
            }
            InputEvent::MouseUp(_) if self.state.is_dragging() => {
                self.on_release();
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self) {
        if self.frames.step(&mut self.state, &self.items).is_some() {
            self.reproject();
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
