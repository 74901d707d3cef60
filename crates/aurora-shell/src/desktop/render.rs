//! Render-ready projection of the whole desktop.
//!
//! A frame is what a renderer (or the demo dump) consumes: windows in
//! stacking order with their visual targets, the dock with running
//! markers, the icon list, and the derived chrome colors.

use aurora_common::types::{Rect, WindowId};
use aurora_settings::schema::DesktopIcon;
use aurora_wm::{visual_state, WindowVisual};
use serde::Serialize;

use super::{apps::DOCK_APPS, Desktop};

#[derive(Debug, Clone, Serialize)]
pub struct WindowFrame {
    pub id: WindowId,
    pub app: String,
    pub title: String,
    pub focused: bool,
    pub visual: WindowVisual,
}

#[derive(Debug, Clone, Serialize)]
pub struct DockItem {
    pub key: &'static str,
    pub title: &'static str,
    /// Whether a window for this app is currently open.
    pub running: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DesktopFrame {
    pub viewport: Rect,
    pub title_bar_background: String,
    pub dock_background: String,
    pub windows: Vec<WindowFrame>,
    pub dock: Vec<DockItem>,
    pub icons: Vec<DesktopIcon>,
    pub onboarding_active: bool,
}

impl Desktop {
    pub fn dock_items(&self) -> Vec<DockItem> {
        DOCK_APPS
            .iter()
            .map(|app| DockItem {
                key: app.key,
                title: app.title,
                running: self.manager.window_for_app(app.key).is_some(),
            })
            .collect()
    }

    /// Snapshot the whole desktop, windows bottom-most first.
    pub fn frame(&self) -> DesktopFrame {
        let prefs = self.visual_prefs();
        let focused = self.manager.focused_id();

        let mut windows: Vec<WindowFrame> = self
            .manager
            .windows()
            .map(|w| WindowFrame {
                id: w.id,
                app: w.app.clone(),
                title: w.title.clone(),
                focused: focused == Some(w.id),
                visual: visual_state(w, focused == Some(w.id), self.viewport, prefs),
            })
            .collect();
        windows.sort_by_key(|f| f.visual.z_index);

        DesktopFrame {
            viewport: self.viewport,
            title_bar_background: self.theme.title_bar_background.clone(),
            dock_background: self.theme.dock_background.clone(),
            windows,
            dock: self.dock_items(),
            icons: self.icons.clone(),
            onboarding_active: self.onboarding.is_some(),
        }
    }
}
