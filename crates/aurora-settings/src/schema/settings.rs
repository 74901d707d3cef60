use serde::{Deserialize, Serialize};

/// Default accent when none is saved or the saved one fails validation.
pub const DEFAULT_ACCENT: &str = "#3b82f6";

/// Overall theme behavior. `Contrast` trades the glassy chrome for solid
/// high-contrast surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Default,
    Contrast,
}

/// User settings, persisted under `aurora-os-settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Accent color as a hex string.
    pub accent_color: String,
    pub theme_mode: ThemeMode,
    /// Translucent, blurred chrome on focused surfaces.
    pub blur_enabled: bool,
    /// Make all transitions instantaneous and suppress travel offsets.
    pub reduce_motion: bool,
    /// Omit drop shadows.
    pub disable_shadows: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT.into(),
            theme_mode: ThemeMode::Default,
            blur_enabled: true,
            reduce_motion: false,
            disable_shadows: false,
        }
    }
}
