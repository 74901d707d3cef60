//! Derived theme values.
//!
//! The window manager and views never read raw settings for colors; they
//! consume this derived snapshot. Recomputed whenever settings change.

use aurora_common::types::Color;
use tracing::warn;

use crate::schema::{Settings, ThemeMode, DEFAULT_ACCENT};
use crate::validation::is_valid_accent;

/// Neutral dark surface the accent is grounded on when blur is off.
const SURFACE: Color = Color {
    r: 23,
    g: 23,
    b: 23,
    a: 255,
};

/// Alpha of glassy chrome when blur is enabled.
const GLASS_ALPHA: f64 = 0.4;

/// How far an opaque title bar leans toward the neutral surface.
const SURFACE_BLEND: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub accent: Color,
    /// CSS color string for window title bars.
    pub title_bar_background: String,
    /// CSS color string for the dock surface.
    pub dock_background: String,
}

impl ThemeColors {
    /// Compute the derived colors for the given settings. An accent that
    /// fails validation falls back to the default at derivation time.
    pub fn derive(settings: &Settings) -> Self {
        let accent = if is_valid_accent(&settings.accent_color) {
            Color::from_hex(&settings.accent_color)
        } else {
            warn!(
                "invalid accent color {:?}, using default",
                settings.accent_color
            );
            None
        }
        .or_else(|| Color::from_hex(DEFAULT_ACCENT))
        .unwrap_or(SURFACE);

        let (title_bar_background, dock_background) = match settings.theme_mode {
            // High contrast drops the tinted chrome entirely.
            ThemeMode::Contrast => ("#000000".to_string(), "#000000".to_string()),
            ThemeMode::Default if settings.blur_enabled => (
                accent.with_alpha(GLASS_ALPHA).to_css(),
                accent.with_alpha(GLASS_ALPHA / 2.0).to_css(),
            ),
            ThemeMode::Default => {
                let solid = accent.blend(SURFACE, SURFACE_BLEND);
                (solid.to_hex(), solid.to_hex())
            }
        };

        Self {
            accent,
            title_bar_background,
            dock_background,
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::derive(&Settings::default())
    }
}
