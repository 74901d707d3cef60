use aurora_common::types::{Point, Size, WindowId};
use serde::{Deserialize, Serialize};

use crate::manager::WindowManager;
use crate::window::WindowDescriptor;

/// Serializable form of every manager operation. Shell actions, scripted
/// sessions, and tests all resolve to one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowCommand {
    Open(WindowDescriptor),
    Close(WindowId),
    Focus(WindowId),
    Minimize(WindowId),
    Restore(WindowId),
    ToggleMaximize(WindowId),
    Move(WindowId, Point),
    Resize(WindowId, Size),
}

impl WindowManager {
    /// Apply one command. Returns the id the command landed on, or `None`
    /// when it referenced a window that no longer exists (stale ids are
    /// tolerated, not errors).
    pub fn execute(&mut self, command: WindowCommand) -> Option<WindowId> {
        match command {
            WindowCommand::Open(descriptor) => Some(self.open(descriptor)),
            WindowCommand::Close(id) => {
                let known = self.contains(id);
                self.close(id);
                known.then_some(id)
            }
            WindowCommand::Focus(id) => {
                self.focus(id);
                self.contains(id).then_some(id)
            }
            WindowCommand::Minimize(id) => {
                self.minimize(id);
                self.contains(id).then_some(id)
            }
            WindowCommand::Restore(id) => {
                self.restore(id);
                self.contains(id).then_some(id)
            }
            WindowCommand::ToggleMaximize(id) => {
                self.toggle_maximize(id);
                self.contains(id).then_some(id)
            }
            WindowCommand::Move(id, position) => {
                self.move_to(id, position);
                self.contains(id).then_some(id)
            }
            WindowCommand::Resize(id, size) => {
                self.resize(id, size);
                self.contains(id).then_some(id)
            }
        }
    }
}
