//! Read-only projections of manager state for rendering and hit testing.

use aurora_common::types::{Point, Rect, WindowId};
use serde::Serialize;

use super::WindowManager;

/// One window's render-ready state: effective geometry plus the flags the
/// view layer derives visuals from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub app: String,
    pub title: String,
    pub rect: Rect,
    pub z_index: u64,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub focused: bool,
}

impl WindowManager {
    /// Effective display geometry for one window (maximize override
    /// applied), or `None` for an unknown id.
    pub fn effective_rect(&self, id: WindowId, viewport: Rect) -> Option<Rect> {
        self.get(id).map(|w| w.effective_rect(viewport))
    }

    /// All windows in stacking order, bottom-most first, with the focused
    /// flag re-derived from z-indices.
    pub fn snapshot(&self, viewport: Rect) -> Vec<WindowSnapshot> {
        let focused = self.focused_id();
        let mut shots: Vec<_> = self
            .windows
            .iter()
            .map(|w| WindowSnapshot {
                id: w.id,
                app: w.app.clone(),
                title: w.title.clone(),
                rect: w.effective_rect(viewport),
                z_index: w.z_index,
                is_minimized: w.is_minimized,
                is_maximized: w.is_maximized,
                focused: focused == Some(w.id),
            })
            .collect();
        shots.sort_by_key(|s| s.z_index);
        shots
    }

    /// Topmost non-minimized window under the pointer. Minimized windows
    /// are input-transparent and never hit.
    pub fn window_at(&self, viewport: Rect, point: Point) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized && w.effective_rect(viewport).contains(point))
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }
}
