use aurora_common::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Folder,
    File,
    App,
}

/// One desktop icon. The ordered list is persisted under
/// `aurora-os-desktop-icons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IconKind,
    pub position: Point,
}

impl DesktopIcon {
    pub fn new(name: impl Into<String>, kind: IconKind, position: Point) -> Self {
        Self {
            id: aurora_common::new_id(),
            name: name.into(),
            kind,
            position,
        }
    }
}

/// Icons a fresh desktop boots with.
pub fn default_icons() -> Vec<DesktopIcon> {
    vec![
        DesktopIcon::new("Documents", IconKind::Folder, Point::new(32.0, 64.0)),
        DesktopIcon::new("Pictures", IconKind::Folder, Point::new(32.0, 160.0)),
        DesktopIcon::new("readme.txt", IconKind::File, Point::new(32.0, 256.0)),
    ]
}
