//! Settings validation.

use std::sync::LazyLock;

use aurora_common::SettingsError;
use regex::Regex;

use crate::schema::Settings;

/// Accent colors must be full hex: #RRGGBB or #RRGGBBAA.
pub static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

pub fn is_valid_accent(value: &str) -> bool {
    HEX_RE.is_match(value)
}

/// Check a settings value before saving it. Loading never validates —
/// corrupt persisted state falls back field-by-field instead.
pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
    if !is_valid_accent(&settings.accent_color) {
        return Err(SettingsError::InvalidColor(settings.accent_color.clone()));
    }
    Ok(())
}
