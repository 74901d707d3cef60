use aurora_common::types::{Point, Rect, Size, WindowId};
use serde::{Deserialize, Serialize};

use crate::chrome::MENU_BAR_HEIGHT;

/// State of one open window.
///
/// Owned and mutated exclusively by the [`WindowManager`](crate::manager::WindowManager);
/// everything else reads snapshots. `position`/`size` are the *stored*
/// geometry — while maximized they survive untouched underneath the
/// viewport override so the un-maximize round trip is lossless, and while
/// minimized they are what restore returns to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowEntity {
    pub id: WindowId,
    pub title: String,
    /// Opaque handle to the hosted content (an app key). The manager never
    /// interprets it.
    pub app: String,
    pub position: Point,
    pub size: Size,
    /// Stacking order. Strictly increases every time the window gains focus.
    pub z_index: u64,
    pub is_minimized: bool,
    pub is_maximized: bool,
}

impl WindowEntity {
    /// Geometry the window is displayed at: the stored rect, or the
    /// full-viewport override (minus the menu bar inset) while maximized.
    pub fn effective_rect(&self, viewport: Rect) -> Rect {
        if self.is_maximized {
            Rect::new(
                viewport.x,
                viewport.y + MENU_BAR_HEIGHT,
                viewport.width,
                viewport.height - MENU_BAR_HEIGHT,
            )
        } else {
            Rect::from_parts(self.position, self.size)
        }
    }
}

/// Open request carried from the shell into the manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub title: String,
    pub app: String,
    /// Initial position; cascaded from the open count when absent.
    pub position: Option<Point>,
    /// Initial size; the manager default when absent.
    pub size: Option<Size>,
}

impl WindowDescriptor {
    pub fn new(app: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            app: app.into(),
            position: None,
            size: None,
        }
    }

    pub fn at(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn sized(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}
