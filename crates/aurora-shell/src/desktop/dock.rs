//! Dock activation: open, focus, or restore.

use aurora_common::Event;
use tracing::warn;

use super::{apps, Desktop};

impl Desktop {
    /// Activate a dock item. An app with no window gets one; an existing
    /// window is focused; a minimized one is restored and focused.
    pub(super) fn activate_dock_item(&mut self, key: &str) {
        if apps::find(key).is_none() {
            warn!("unknown dock item: {key}");
            return;
        }
        self.feedback.click();

        match self.manager.window_for_app(key) {
            Some(id)
                if self
                    .manager
                    .get(id)
                    .map_or(false, |w| w.is_minimized) =>
            {
                self.manager.restore(id);
                self.events.publish(Event::WindowRestored(id));
            }
            Some(id) => {
                self.manager.focus(id);
                self.events.publish(Event::WindowRaised(id));
            }
            None => self.open_app(key),
        }
    }
}
