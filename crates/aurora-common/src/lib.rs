pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{AuroraError, SettingsError, StorageError};
pub use events::{Event, EventBus};
pub use id::new_id;
pub use types::{Color, Point, Rect, Size, WindowId};

pub type Result<T> = std::result::Result<T, AuroraError>;
