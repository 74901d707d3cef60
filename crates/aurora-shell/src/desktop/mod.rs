//! The desktop: composition root for the window manager, dock, icons,
//! settings, and the onboarding overlay.

mod actions;
mod apps;
mod dock;
mod icons;
mod render;

pub use actions::ShellAction;
pub use apps::{AppSpec, DOCK_APPS};
pub use render::{DesktopFrame, DockItem, WindowFrame};

use aurora_common::types::Rect;
use aurora_common::{Event, EventBus};
use aurora_fs::FileSystem;
use aurora_settings::schema::DesktopIcon;
use aurora_settings::store::{self, Storage, FILESYSTEM_KEY, ICONS_KEY, SETTINGS_KEY};
use aurora_settings::{Settings, ThemeColors};
use aurora_wm::{DragController, VisualPrefs, WindowManager};
use tracing::warn;

use crate::feedback::Feedback;
use crate::onboarding::Onboarding;
use crate::session::SessionStore;

pub struct Desktop {
    pub(crate) manager: WindowManager,
    pub(crate) drag: DragController,
    pub(crate) settings: Settings,
    pub(crate) theme: ThemeColors,
    pub(crate) icons: Vec<DesktopIcon>,
    pub(crate) filesystem: FileSystem,
    pub(crate) store: Box<dyn Storage>,
    pub(crate) events: EventBus,
    pub(crate) feedback: Box<dyn Feedback>,
    pub(crate) session: SessionStore,
    /// `Some` until a language is chosen; the overlay swallows all other
    /// input while present.
    pub(crate) onboarding: Option<Onboarding>,
    pub(crate) viewport: Rect,
}

impl Desktop {
    // -- Accessors --
    //
    // State is read through these; mutations go through `dispatch` so
    // persistence and events stay consistent.

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn theme(&self) -> &ThemeColors {
        &self.theme
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    pub fn filesystem(&self) -> &FileSystem {
        &self.filesystem
    }

    pub fn onboarding(&self) -> Option<&Onboarding> {
        self.onboarding.as_ref()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn visual_prefs(&self) -> VisualPrefs {
        VisualPrefs {
            reduce_motion: self.settings.reduce_motion,
            disable_shadows: self.settings.disable_shadows,
        }
    }

    pub fn language(&self) -> &str {
        self.session
            .get_or(crate::session::LANGUAGE_KEY, crate::session::DEFAULT_LANGUAGE)
    }

    // -- Persistence --

    pub(crate) fn persist_settings(&mut self) {
        if let Err(e) = store::save(self.store.as_mut(), SETTINGS_KEY, &self.settings) {
            warn!("failed to persist settings: {e}");
        }
        self.events.publish(Event::SettingsChanged);
    }

    pub(crate) fn persist_icons(&mut self) {
        if let Err(e) = store::save(self.store.as_mut(), ICONS_KEY, &self.icons) {
            warn!("failed to persist desktop icons: {e}");
        }
        self.events.publish(Event::IconsChanged);
    }

    pub(crate) fn persist_filesystem(&mut self) {
        if let Err(e) = store::save(self.store.as_mut(), FILESYSTEM_KEY, &self.filesystem) {
            warn!("failed to persist filesystem: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boot;
    use aurora_common::types::{Point, Size};
    use aurora_settings::schema::{IconKind, ThemeMode};
    use aurora_settings::MemoryStore;
    use aurora_wm::chrome;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1440.0, 900.0)
    }

    /// Boot from an empty store and get past onboarding.
    fn desktop() -> Desktop {
        let mut desktop = boot::boot(Box::new(MemoryStore::new()), viewport());
        desktop.dispatch(ShellAction::SelectLanguage("en".into()));
        desktop
    }

    #[test]
    fn boot_with_corrupt_settings_uses_defaults() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "not-json").unwrap();
        let desktop = boot::boot(Box::new(store), viewport());
        assert_eq!(desktop.settings(), &Settings::default());
    }

    #[test]
    fn boot_loads_saved_settings() {
        let mut store = MemoryStore::new();
        store
            .set(
                SETTINGS_KEY,
                r##"{"accentColor":"#ff0000","themeMode":"contrast","reduceMotion":true}"##,
            )
            .unwrap();
        let desktop = boot::boot(Box::new(store), viewport());
        assert_eq!(desktop.settings().accent_color, "#ff0000");
        assert_eq!(desktop.settings().theme_mode, ThemeMode::Contrast);
        assert!(desktop.visual_prefs().reduce_motion);
        // Theme was derived from the loaded settings.
        assert_eq!(desktop.theme().title_bar_background, "#000000");
    }

    #[test]
    fn boot_seeds_default_icons_when_none_saved() {
        let desktop = boot::boot(Box::new(MemoryStore::new()), viewport());
        assert!(desktop.icons().iter().any(|i| i.name == "Documents"));
    }

    #[test]
    fn boot_keeps_saved_icons_even_when_empty() {
        let mut store = MemoryStore::new();
        store.set(ICONS_KEY, "[]").unwrap();
        let desktop = boot::boot(Box::new(store), viewport());
        assert!(desktop.icons().is_empty());
    }

    #[test]
    fn boot_with_corrupt_icons_reseeds_defaults() {
        let mut store = MemoryStore::new();
        store.set(ICONS_KEY, "{{nope").unwrap();
        let desktop = boot::boot(Box::new(store), viewport());
        assert!(desktop.icons().iter().any(|i| i.name == "Documents"));
    }

    #[test]
    fn boot_with_corrupt_filesystem_uses_default_tree() {
        let mut store = MemoryStore::new();
        store.set(FILESYSTEM_KEY, "not-json").unwrap();
        let desktop = boot::boot(Box::new(store), viewport());
        assert!(desktop.filesystem().node(&["Documents"]).is_some());
    }

    #[test]
    fn onboarding_gates_desktop_input() {
        let mut desktop = boot::boot(Box::new(MemoryStore::new()), viewport());
        assert!(desktop.onboarding().is_some());

        desktop.dispatch(ShellAction::ActivateDockItem("finder".into()));
        assert!(desktop.manager().is_empty());

        desktop.dispatch(ShellAction::SelectLanguage("en".into()));
        assert!(desktop.onboarding().is_none());

        desktop.dispatch(ShellAction::ActivateDockItem("finder".into()));
        assert_eq!(desktop.manager().window_count(), 1);
    }

    #[test]
    fn selecting_disabled_language_keeps_onboarding() {
        let mut desktop = boot::boot(Box::new(MemoryStore::new()), viewport());
        desktop.dispatch(ShellAction::SelectLanguage("es".into()));
        assert!(desktop.onboarding().is_some());
        assert_eq!(desktop.language(), "en");
    }

    #[test]
    fn selecting_language_sets_session_and_emits_event() {
        let mut desktop = boot::boot(Box::new(MemoryStore::new()), viewport());
        let mut rx = desktop.events().subscribe();
        desktop.dispatch(ShellAction::SelectLanguage("en".into()));
        assert_eq!(desktop.language(), "en");
        let event = rx.try_recv().unwrap();
        assert!(matches!(event, Event::OnboardingComplete { ref language } if language == "en"));
    }

    #[test]
    fn dock_opens_then_focuses_then_restores() {
        let mut desktop = desktop();

        desktop.dispatch(ShellAction::ActivateDockItem("finder".into()));
        let finder = desktop.manager().window_for_app("finder").unwrap();
        assert_eq!(desktop.manager().focused_id(), Some(finder));

        // A second activation focuses the existing window instead of
        // spawning another.
        desktop.dispatch(ShellAction::ActivateDockItem("mail".into()));
        desktop.dispatch(ShellAction::ActivateDockItem("finder".into()));
        assert_eq!(desktop.manager().window_count(), 2);
        assert_eq!(desktop.manager().focused_id(), Some(finder));

        // Minimized windows come back through the dock.
        desktop.dispatch(ShellAction::MinimizeWindow(finder));
        assert!(desktop.manager().get(finder).unwrap().is_minimized);
        desktop.dispatch(ShellAction::ActivateDockItem("finder".into()));
        assert!(!desktop.manager().get(finder).unwrap().is_minimized);
        assert_eq!(desktop.manager().focused_id(), Some(finder));
    }

    #[test]
    fn unknown_dock_key_is_ignored() {
        let mut desktop = desktop();
        desktop.dispatch(ShellAction::ActivateDockItem("solitaire".into()));
        assert!(desktop.manager().is_empty());
    }

    #[test]
    fn window_lifecycle_events_flow() {
        let mut desktop = desktop();
        let mut rx = desktop.events().subscribe();

        desktop.dispatch(ShellAction::OpenApp("mail".into()));
        let id = desktop.manager().window_for_app("mail").unwrap();
        assert!(matches!(rx.try_recv().unwrap(), Event::WindowOpened(i) if i == id));

        desktop.dispatch(ShellAction::MinimizeWindow(id));
        assert!(matches!(rx.try_recv().unwrap(), Event::WindowMinimized(i) if i == id));

        desktop.dispatch(ShellAction::ToggleMaximizeWindow(id));
        assert!(matches!(
            rx.try_recv().unwrap(),
            Event::WindowMaximized { id: i, maximized: true } if i == id
        ));

        desktop.dispatch(ShellAction::CloseWindow(id));
        assert!(matches!(rx.try_recv().unwrap(), Event::WindowClosed(i) if i == id));
    }

    #[test]
    fn pointer_drag_moves_window() {
        let mut desktop = desktop();
        desktop.dispatch(ShellAction::OpenApp("finder".into()));
        let id = desktop.manager().window_for_app("finder").unwrap();
        let start = desktop.manager().get(id).unwrap().position;

        // Grab the title bar right of the controls and pull down-right.
        let grab = Point::new(start.x + 200.0, start.y + 20.0);
        desktop.dispatch(ShellAction::PointerDown(grab));
        desktop.dispatch(ShellAction::PointerMove(Point::new(
            grab.x + 40.0,
            grab.y + 25.0,
        )));
        desktop.dispatch(ShellAction::PointerUp);

        let end = desktop.manager().get(id).unwrap().position;
        assert_eq!(end, Point::new(start.x + 40.0, start.y + 25.0));
    }

    #[test]
    fn close_control_closes_window() {
        let mut desktop = desktop();
        desktop.dispatch(ShellAction::OpenApp("finder".into()));
        let id = desktop.manager().window_for_app("finder").unwrap();
        let rect = desktop
            .manager()
            .effective_rect(id, desktop.viewport())
            .unwrap();
        let close = chrome::control_rect(rect, chrome::Control::Close);

        desktop.dispatch(ShellAction::PointerDown(Point::new(
            close.x + 6.0,
            close.y + 6.0,
        )));
        desktop.dispatch(ShellAction::PointerUp);
        assert!(desktop.manager().is_empty());
    }

    #[test]
    fn minimize_control_hides_window() {
        let mut desktop = desktop();
        desktop.dispatch(ShellAction::OpenApp("music".into()));
        let id = desktop.manager().window_for_app("music").unwrap();
        let rect = desktop
            .manager()
            .effective_rect(id, desktop.viewport())
            .unwrap();
        let btn = chrome::control_rect(rect, chrome::Control::Minimize);

        desktop.dispatch(ShellAction::PointerDown(Point::new(
            btn.x + 6.0,
            btn.y + 6.0,
        )));
        desktop.dispatch(ShellAction::PointerUp);
        assert!(desktop.manager().get(id).unwrap().is_minimized);
    }

    #[test]
    fn restore_action_unminimizes_and_focuses() {
        let mut desktop = desktop();
        desktop.dispatch(ShellAction::OpenApp("mail".into()));
        desktop.dispatch(ShellAction::OpenApp("photos".into()));
        let mail = desktop.manager().window_for_app("mail").unwrap();

        desktop.dispatch(ShellAction::MinimizeWindow(mail));
        desktop.dispatch(ShellAction::RestoreWindow(mail));

        let window = desktop.manager().get(mail).unwrap();
        assert!(!window.is_minimized);
        assert_eq!(desktop.manager().focused_id(), Some(mail));
    }

    #[test]
    fn settings_update_persists_and_rederives_theme() {
        let mut desktop = desktop();
        let mut rx = desktop.events().subscribe();

        let mut settings = desktop.settings().clone();
        settings.accent_color = "#ff0000".into();
        settings.disable_shadows = true;
        desktop.dispatch(ShellAction::UpdateSettings(settings));

        assert_eq!(desktop.theme().title_bar_background, "rgba(255,0,0,0.40)");
        assert!(desktop.visual_prefs().disable_shadows);
        assert!(matches!(rx.try_recv().unwrap(), Event::SettingsChanged));

        // Saved: a re-boot from the same store sees the new accent.
        let raw = desktop.store.get(SETTINGS_KEY).unwrap();
        assert!(raw.contains("#ff0000"));
    }

    #[test]
    fn icon_move_updates_position_and_persists() {
        let mut desktop = desktop();
        let id = desktop.icons()[0].id.clone();
        let mut rx = desktop.events().subscribe();

        desktop.dispatch(ShellAction::MoveIcon {
            id: id.clone(),
            position: Point::new(300.0, 220.0),
        });

        let icon = desktop.icons().iter().find(|i| i.id == id).unwrap();
        assert_eq!(icon.position, Point::new(300.0, 220.0));
        assert!(matches!(rx.try_recv().unwrap(), Event::IconsChanged));
        assert!(desktop.store.get(ICONS_KEY).unwrap().contains("300"));
    }

    #[test]
    fn move_unknown_icon_is_ignored() {
        let mut desktop = desktop();
        let before = desktop.icons().to_vec();
        desktop.dispatch(ShellAction::MoveIcon {
            id: "ghost".into(),
            position: Point::new(1.0, 1.0),
        });
        assert_eq!(desktop.icons(), &before[..]);
    }

    #[test]
    fn opening_folder_icon_spawns_finder_window() {
        let mut desktop = desktop();
        let docs = desktop
            .icons()
            .iter()
            .find(|i| i.kind == IconKind::Folder)
            .unwrap()
            .clone();

        desktop.dispatch(ShellAction::OpenIcon(docs.id.clone()));
        let id = desktop.manager().window_for_app("finder").unwrap();
        assert_eq!(desktop.manager().get(id).unwrap().title, docs.name);
    }

    #[test]
    fn create_folder_persists_filesystem() {
        let mut desktop = desktop();
        desktop.dispatch(ShellAction::CreateFolder {
            parent: vec!["Documents".into()],
            name: "Work".into(),
        });
        assert!(desktop
            .filesystem()
            .node(&["Documents", "Work"])
            .is_some());
        assert!(desktop.store.get(FILESYSTEM_KEY).unwrap().contains("Work"));

        // A duplicate is rejected by the tree and must not panic the shell.
        desktop.dispatch(ShellAction::CreateFolder {
            parent: vec!["Documents".into()],
            name: "Work".into(),
        });
    }

    #[test]
    fn explicit_geometry_open_is_respected() {
        let mut desktop = desktop();
        desktop.dispatch(ShellAction::OpenWindow(
            aurora_wm::WindowDescriptor::new("finder", "Finder")
                .at(Point::new(100.0, 100.0))
                .sized(Size::new(300.0, 200.0)),
        ));
        let id = desktop.manager().window_for_app("finder").unwrap();
        let w = desktop.manager().get(id).unwrap();
        assert_eq!(w.position, Point::new(100.0, 100.0));
        assert_eq!(w.size, Size::new(300.0, 200.0));
    }
}
