//! Core types and constructors for WindowManager.

use aurora_common::types::{Point, Size, WindowId};

use crate::window::WindowEntity;

/// Default size for windows opened without an explicit one.
pub const DEFAULT_WINDOW_SIZE: Size = Size {
    width: 640.0,
    height: 420.0,
};

/// Authoritative owner of the set of open windows and their stacking order.
///
/// Windows are kept in creation order; stacking is carried entirely by each
/// entity's `z_index`, fed from a monotonic counter that is never reused or
/// decremented. The focused window is a derivation (highest z among
/// non-minimized), not a stored field.
pub struct WindowManager {
    /// Open windows in creation order.
    pub(super) windows: Vec<WindowEntity>,
    /// Monotonic stacking counter; bumped on every open and focus.
    pub(super) z_counter: u64,
    /// Next window id. Ids are session-unique and never reused.
    pub(super) next_id: u64,
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            z_counter: 0,
            next_id: 1,
        }
    }

    // -- Accessors --

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowEntity> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub(super) fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowEntity> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Windows in creation order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowEntity> {
        self.windows.iter()
    }

    /// Window ids in stacking order, bottom-most first.
    pub fn render_order(&self) -> Vec<WindowId> {
        let mut ids: Vec<_> = self.windows.iter().map(|w| (w.z_index, w.id)).collect();
        ids.sort_by_key(|(z, _)| *z);
        ids.into_iter().map(|(_, id)| id).collect()
    }

    /// First open window hosting the given app key, if any.
    pub fn window_for_app(&self, app: &str) -> Option<WindowId> {
        self.windows.iter().find(|w| w.app == app).map(|w| w.id)
    }

    /// Cascaded default position for the next open, so stacked fresh
    /// windows do not land exactly on top of each other.
    pub(super) fn cascade_position(&self) -> Point {
        let step = (self.next_id - 1) % 8;
        Point::new(120.0 + 32.0 * step as f64, 96.0 + 28.0 * step as f64)
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
