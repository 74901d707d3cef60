//! The WindowManager owns window lifecycle, stacking, and geometry.

mod focus;
mod operations;
mod snapshot;
mod types;

pub use snapshot::WindowSnapshot;
pub use types::*;
