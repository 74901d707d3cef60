//! Focus handling: z-order bumps and the focused-window derivation.

use aurora_common::types::WindowId;

use super::WindowManager;

impl WindowManager {
    /// Raise a window to the top of the stack. No-op when the window is
    /// minimized (it is not focusable until restored) or unknown. Untouched
    /// windows keep their relative order because the counter only grows.
    pub fn focus(&mut self, id: WindowId) {
        let next = self.z_counter + 1;
        if let Some(w) = self.get_mut(id) {
            if !w.is_minimized {
                w.z_index = next;
                self.z_counter = next;
            }
        }
    }

    /// The focused window: highest z-index among non-minimized windows.
    /// `None` when nothing is open, everything is minimized, or the focused
    /// window was just closed and no interaction has happened since.
    pub fn focused_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    pub fn is_focused(&self, id: WindowId) -> bool {
        self.focused_id() == Some(id)
    }
}
