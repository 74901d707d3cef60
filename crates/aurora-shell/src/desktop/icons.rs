//! Desktop icon interaction.

use aurora_common::types::{Point, Size};
use aurora_common::Event;
use aurora_settings::schema::IconKind;
use aurora_wm::WindowDescriptor;
use tracing::warn;

use super::{apps, Desktop};

impl Desktop {
    /// Open the window an icon stands for: folders open a Finder window
    /// named after the folder, files open in the previewer, app icons
    /// launch their app.
    pub(super) fn open_icon(&mut self, icon_id: &str) {
        let Some(icon) = self.icons.iter().find(|i| i.id == icon_id).cloned() else {
            warn!("unknown desktop icon: {icon_id}");
            return;
        };
        self.feedback.click();

        let descriptor = match icon.kind {
            IconKind::Folder => match apps::find("finder") {
                Some(finder) => finder.descriptor_titled(icon.name),
                None => WindowDescriptor::new("finder", icon.name),
            },
            IconKind::File => WindowDescriptor::new("preview", icon.name)
                .sized(Size::new(520.0, 400.0)),
            IconKind::App => {
                self.open_app(&icon.name.to_lowercase());
                return;
            }
        };
        let id = self.manager.open(descriptor);
        self.events.publish(Event::WindowOpened(id));
    }

    /// Reposition an icon and persist the list. Unknown ids are ignored.
    pub(super) fn move_icon(&mut self, icon_id: &str, position: Point) {
        let Some(icon) = self.icons.iter_mut().find(|i| i.id == icon_id) else {
            return;
        };
        icon.position = position;
        self.persist_icons();
    }
}
