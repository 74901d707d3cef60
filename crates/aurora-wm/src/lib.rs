pub mod chrome;
pub mod commands;
pub mod drag;
pub mod manager;
pub mod visual;
pub mod window;

pub use commands::WindowCommand;
pub use drag::{DragController, DragPhase, PointerTarget};
pub use manager::{WindowManager, WindowSnapshot};
pub use visual::{visual_state, VisualPrefs, WindowVisual};
pub use window::{WindowDescriptor, WindowEntity};
