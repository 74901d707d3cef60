//! Shell actions and the dispatcher.
//!
//! Every user-triggerable interaction resolves to a [`ShellAction`];
//! `dispatch` routes it into the window manager, persistence, and the
//! event bus. All transitions run synchronously inside the dispatching
//! input handler — by the time `dispatch` returns, logical state is final.

use aurora_common::types::{Point, WindowId};
use aurora_common::Event;
use aurora_settings::{Settings, ThemeColors};
use aurora_wm::chrome::Control;
use aurora_wm::{PointerTarget, WindowDescriptor};
use tracing::{debug, warn};

use crate::session::LANGUAGE_KEY;

use super::{apps, Desktop};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellAction {
    /// Launch a registered app in a new window.
    OpenApp(String),
    /// Open a window from an explicit descriptor (apps spawning
    /// sub-windows with their own geometry).
    OpenWindow(WindowDescriptor),
    ActivateDockItem(String),
    /// Activate a desktop icon by id.
    OpenIcon(String),
    CloseWindow(WindowId),
    FocusWindow(WindowId),
    MinimizeWindow(WindowId),
    RestoreWindow(WindowId),
    ToggleMaximizeWindow(WindowId),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    MoveIcon { id: String, position: Point },
    /// Create a folder in the simulated filesystem (Finder's "New Folder").
    CreateFolder { parent: Vec<String>, name: String },
    UpdateSettings(Settings),
    HoverLanguage(usize),
    SelectLanguage(String),
}

impl Desktop {
    pub fn dispatch(&mut self, action: ShellAction) {
        // The onboarding overlay sits above everything and swallows all
        // input except its own.
        if self.onboarding.is_some() {
            match &action {
                ShellAction::HoverLanguage(_) | ShellAction::SelectLanguage(_) => {}
                other => {
                    debug!("ignoring {other:?} during onboarding");
                    return;
                }
            }
        }

        match action {
            ShellAction::OpenApp(key) => self.open_app(&key),
            ShellAction::OpenWindow(descriptor) => {
                let id = self.manager.open(descriptor);
                self.events.publish(Event::WindowOpened(id));
            }
            ShellAction::ActivateDockItem(key) => self.activate_dock_item(&key),
            ShellAction::OpenIcon(id) => self.open_icon(&id),
            ShellAction::CloseWindow(id) => self.close_window(id),
            ShellAction::FocusWindow(id) => {
                self.manager.focus(id);
                if self.manager.contains(id) {
                    self.events.publish(Event::WindowRaised(id));
                }
            }
            ShellAction::MinimizeWindow(id) => self.minimize_window(id),
            ShellAction::RestoreWindow(id) => {
                if self.manager.contains(id) {
                    self.manager.restore(id);
                    self.events.publish(Event::WindowRestored(id));
                }
            }
            ShellAction::ToggleMaximizeWindow(id) => self.toggle_maximize_window(id),
            ShellAction::PointerDown(point) => self.pointer_down(point),
            ShellAction::PointerMove(point) => self.drag.pointer_move(&mut self.manager, point),
            ShellAction::PointerUp => self.drag.pointer_up(),
            ShellAction::MoveIcon { id, position } => self.move_icon(&id, position),
            ShellAction::CreateFolder { parent, name } => self.create_folder(&parent, &name),
            ShellAction::UpdateSettings(settings) => self.update_settings(settings),
            ShellAction::HoverLanguage(index) => {
                if let Some(onboarding) = &mut self.onboarding {
                    onboarding.hover(index, self.feedback.as_ref());
                }
            }
            ShellAction::SelectLanguage(language) => self.select_language(&language),
        }
    }

    pub(super) fn open_app(&mut self, key: &str) {
        let Some(app) = apps::find(key) else {
            warn!("unknown app key: {key}");
            return;
        };
        let id = self.manager.open(app.descriptor());
        self.events.publish(Event::WindowOpened(id));
    }

    fn close_window(&mut self, id: WindowId) {
        if self.manager.contains(id) {
            self.manager.close(id);
            self.events.publish(Event::WindowClosed(id));
        }
    }

    fn minimize_window(&mut self, id: WindowId) {
        if self.manager.contains(id) {
            self.manager.minimize(id);
            self.events.publish(Event::WindowMinimized(id));
        }
    }

    fn toggle_maximize_window(&mut self, id: WindowId) {
        self.manager.toggle_maximize(id);
        if let Some(window) = self.manager.get(id) {
            self.events.publish(Event::WindowMaximized {
                id,
                maximized: window.is_maximized,
            });
        }
    }

    fn pointer_down(&mut self, point: Point) {
        match self
            .drag
            .pointer_down(&mut self.manager, self.viewport, point)
        {
            PointerTarget::Desktop => {}
            PointerTarget::Window(id) => {
                self.events.publish(Event::WindowRaised(id));
            }
            PointerTarget::Control(id, control) => {
                self.events.publish(Event::WindowRaised(id));
                self.feedback.click();
                match control {
                    Control::Close => self.close_window(id),
                    Control::Minimize => self.minimize_window(id),
                    Control::Maximize => self.toggle_maximize_window(id),
                }
            }
        }
    }

    fn create_folder(&mut self, parent: &[String], name: &str) {
        let path: Vec<&str> = parent.iter().map(String::as_str).collect();
        match self.filesystem.create_folder(&path, name) {
            Ok(()) => self.persist_filesystem(),
            Err(e) => warn!("create folder failed: {e}"),
        }
    }

    fn update_settings(&mut self, settings: Settings) {
        if let Err(e) = aurora_settings::validation::validate(&settings) {
            // The theme derivation falls back on its own; keep the rest.
            warn!("settings validation warning: {e}");
        }
        self.settings = settings;
        self.theme = ThemeColors::derive(&self.settings);
        self.persist_settings();
    }

    fn select_language(&mut self, language: &str) {
        let Some(onboarding) = &mut self.onboarding else {
            return;
        };
        if let Some(chosen) = onboarding.choose(language, self.feedback.as_ref()) {
            self.session.set(LANGUAGE_KEY, chosen);
            self.onboarding = None;
            self.events.publish(Event::OnboardingComplete {
                language: chosen.into(),
            });
            tracing::info!("onboarding complete (language: {chosen})");
        }
    }
}
