//! Aurora settings and persistence.
//!
//! User settings, desktop icons, and the filesystem blob are persisted as
//! independent JSON values in a key-value store. Every persisted struct
//! uses `serde(default)` so partial payloads degrade field-by-field, and
//! every load falls back to defaults on a corrupt value — a broken store
//! must never break boot.
//!
//! # Quick Start
//!
//! ```rust
//! use aurora_settings::schema::Settings;
//! use aurora_settings::store::{self, MemoryStore, SETTINGS_KEY};
//!
//! let store = MemoryStore::new();
//! let settings: Settings = store::load_or_default(&store, SETTINGS_KEY);
//! assert!(settings.blur_enabled);
//! ```

pub mod schema;
pub mod store;
pub mod theme;
pub mod validation;

pub use schema::{DesktopIcon, IconKind, Settings, ThemeMode};
pub use store::{FileStore, MemoryStore, Storage};
pub use theme::ThemeColors;
