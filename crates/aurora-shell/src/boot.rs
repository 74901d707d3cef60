//! Boot sequence: load persisted state, derive the theme, compose the
//! desktop. Every load is independently corrupt-tolerant — a broken store
//! yields a default desktop, never a failed boot.

use aurora_common::types::Rect;
use aurora_common::EventBus;
use aurora_fs::FileSystem;
use aurora_settings::schema::{default_icons, DesktopIcon};
use aurora_settings::store::{self, Storage, FILESYSTEM_KEY, ICONS_KEY, SETTINGS_KEY};
use aurora_settings::{validation, Settings, ThemeColors};
use aurora_wm::{DragController, WindowManager};
use tracing::{info, warn};

use crate::desktop::Desktop;
use crate::feedback::SilentFeedback;
use crate::onboarding::Onboarding;
use crate::session::SessionStore;

/// Viewport the shell renders into when the host does not say otherwise.
pub const DEFAULT_VIEWPORT: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1440.0,
    height: 900.0,
};

/// Event bus capacity; the shell is single-threaded, so consumers lag
/// only if they never drain.
const EVENT_CAPACITY: usize = 64;

pub fn boot(store: Box<dyn Storage>, viewport: Rect) -> Desktop {
    let settings: Settings = store::load_or_default(store.as_ref(), SETTINGS_KEY);
    if let Err(e) = validation::validate(&settings) {
        warn!("settings validation warning: {e}");
    }

    // A store that never saved icons gets the default set; an explicitly
    // saved empty list stays empty.
    let icons: Vec<DesktopIcon> = store::load_or(store.as_ref(), ICONS_KEY, default_icons);
    let filesystem: FileSystem = store::load_or_default(store.as_ref(), FILESYSTEM_KEY);

    let theme = ThemeColors::derive(&settings);

    info!(
        "desktop ready ({} icons, accent {})",
        icons.len(),
        settings.accent_color
    );

    Desktop {
        manager: WindowManager::new(),
        drag: DragController::new(),
        settings,
        theme,
        icons,
        filesystem,
        store,
        events: EventBus::new(EVENT_CAPACITY),
        feedback: Box::new(SilentFeedback),
        session: SessionStore::new(),
        onboarding: Some(Onboarding::new()),
        viewport,
    }
}
