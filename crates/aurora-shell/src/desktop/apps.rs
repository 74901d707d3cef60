//! Built-in app registry.
//!
//! The window manager treats app keys as opaque content handles; this
//! table is what the dock launches from.

use aurora_common::types::Size;
use aurora_wm::WindowDescriptor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub size: Size,
}

impl AppSpec {
    pub fn descriptor(&self) -> WindowDescriptor {
        WindowDescriptor::new(self.key, self.title).sized(self.size)
    }

    /// Descriptor with a custom title (a Finder window named after the
    /// folder it shows, for example).
    pub fn descriptor_titled(&self, title: impl Into<String>) -> WindowDescriptor {
        WindowDescriptor::new(self.key, title).sized(self.size)
    }
}

/// Apps pinned to the dock, in dock order.
pub const DOCK_APPS: &[AppSpec] = &[
    AppSpec {
        key: "finder",
        title: "Finder",
        size: Size {
            width: 720.0,
            height: 460.0,
        },
    },
    AppSpec {
        key: "mail",
        title: "Mail",
        size: Size {
            width: 680.0,
            height: 500.0,
        },
    },
    AppSpec {
        key: "photos",
        title: "Photos",
        size: Size {
            width: 760.0,
            height: 520.0,
        },
    },
    AppSpec {
        key: "music",
        title: "Music",
        size: Size {
            width: 520.0,
            height: 420.0,
        },
    },
    AppSpec {
        key: "terminal",
        title: "Terminal",
        size: Size {
            width: 640.0,
            height: 400.0,
        },
    },
    AppSpec {
        key: "settings",
        title: "Settings",
        size: Size {
            width: 560.0,
            height: 480.0,
        },
    },
];

pub fn find(key: &str) -> Option<&'static AppSpec> {
    DOCK_APPS.iter().find(|app| app.key == key)
}
