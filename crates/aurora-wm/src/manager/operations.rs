//! Open, close, minimize, maximize, move, and resize operations.
//!
//! Every operation on a stale or unknown id is a silent no-op: a dock click
//! can race an in-flight close animation, and the manager must shrug that
//! off rather than surface an error.

use aurora_common::types::{Point, Size, WindowId};

use crate::window::{WindowDescriptor, WindowEntity};

use super::{WindowManager, DEFAULT_WINDOW_SIZE};

impl WindowManager {
    /// Open a new window. It receives a fresh id, the descriptor's geometry
    /// (or cascaded defaults), and becomes the focused, topmost window.
    pub fn open(&mut self, descriptor: WindowDescriptor) -> WindowId {
        let position = descriptor.position.unwrap_or_else(|| self.cascade_position());
        let size = descriptor.size.unwrap_or(DEFAULT_WINDOW_SIZE);

        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.z_counter += 1;

        self.windows.push(WindowEntity {
            id,
            title: descriptor.title,
            app: descriptor.app,
            position,
            size,
            z_index: self.z_counter,
            is_minimized: false,
            is_maximized: false,
        });
        id
    }

    /// Remove a window. Idempotent; closing the focused window leaves focus
    /// undefined until the next interaction.
    pub fn close(&mut self, id: WindowId) {
        self.windows.retain(|w| w.id != id);
    }

    /// Hide a window, keeping its stored geometry for a lossless restore.
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(w) = self.get_mut(id) {
            w.is_minimized = true;
        }
    }

    /// Bring a minimized window back and give it focus. A window that is
    /// not minimized is simply focused.
    pub fn restore(&mut self, id: WindowId) {
        if let Some(w) = self.get_mut(id) {
            w.is_minimized = false;
        }
        self.focus(id);
    }

    /// Toggle the full-viewport override. The stored position/size are left
    /// alone so toggling twice restores them exactly.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        if let Some(w) = self.get_mut(id) {
            w.is_maximized = !w.is_maximized;
        }
    }

    /// Update the stored position. Ignored while maximized (drag handlers
    /// are expected not to call this then, and tolerated when they do) and
    /// while minimized, so restore always returns to the pre-minimize spot.
    pub fn move_to(&mut self, id: WindowId, position: Point) {
        if let Some(w) = self.get_mut(id) {
            if !w.is_maximized && !w.is_minimized {
                w.position = position;
            }
        }
    }

    /// Update the stored size. Minimum-dimension policy belongs to the
    /// caller; no geometry validation happens here.
    pub fn resize(&mut self, id: WindowId, size: Size) {
        if let Some(w) = self.get_mut(id) {
            w.size = size;
        }
    }
}
