//! Pointer routing and the drag-to-move state machine.
//!
//! A drag is a scoped resource: acquired by a pointer-down on a title bar,
//! released unconditionally by pointer-up anywhere. While dragging, moves
//! are processed globally — the pointer outruns the window element during a
//! fast drag, so the controller cannot rely on staying "over" the window.

use aurora_common::types::{Point, Rect, WindowId};

use crate::chrome::{self, Control, Region, MENU_BAR_HEIGHT};
use crate::manager::WindowManager;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging {
        id: WindowId,
        /// Pointer offset from the window's top-left corner, captured on
        /// pointer-down so the grab point stays under the cursor.
        offset: Point,
    },
}

/// What a pointer-down resolved to, for the shell to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty desktop; nothing was hit.
    Desktop,
    /// A window body or title bar. The window has already been focused.
    Window(WindowId),
    /// A title-bar control button. The window has already been focused;
    /// the control's action is the shell's to apply.
    Control(WindowId, Control),
}

#[derive(Debug, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl Default for DragPhase {
    fn default() -> Self {
        DragPhase::Idle
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Route a pointer-down. Hits the topmost non-minimized window under
    /// the pointer, focuses it, and — when the hit is in the title bar
    /// outside the controls and the window is not maximized — begins a
    /// drag with the grab offset captured from the stored position.
    pub fn pointer_down(
        &mut self,
        manager: &mut WindowManager,
        viewport: Rect,
        point: Point,
    ) -> PointerTarget {
        let Some(id) = manager.window_at(viewport, point) else {
            return PointerTarget::Desktop;
        };
        let Some(rect) = manager.effective_rect(id, viewport) else {
            return PointerTarget::Desktop;
        };

        // Clicking anywhere in a window brings it to front, drag or not.
        manager.focus(id);

        match chrome::hit_test(rect, point) {
            Region::Control(control) => PointerTarget::Control(id, control),
            Region::TitleBar => {
                if let Some(w) = manager.get(id) {
                    if !w.is_maximized {
                        self.phase = DragPhase::Dragging {
                            id,
                            offset: point - w.position,
                        };
                    }
                }
                PointerTarget::Window(id)
            }
            _ => PointerTarget::Window(id),
        }
    }

    /// Route a pointer-move. Only meaningful while dragging: the new
    /// position is pointer − offset with `y` clamped below the menu bar.
    /// Maximized and vanished windows are tolerated as no-ops.
    pub fn pointer_move(&mut self, manager: &mut WindowManager, point: Point) {
        if let DragPhase::Dragging { id, offset } = self.phase {
            let position = Point::new(
                point.x - offset.x,
                (point.y - offset.y).max(MENU_BAR_HEIGHT),
            );
            manager.move_to(id, position);
        }
    }

    /// Pointer-up anywhere ends the drag.
    pub fn pointer_up(&mut self) {
        self.phase = DragPhase::Idle;
    }
}
