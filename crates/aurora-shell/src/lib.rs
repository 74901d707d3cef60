//! Aurora desktop shell: composes the window manager with the dock,
//! desktop icons, settings, the simulated filesystem, and the onboarding
//! flow. The `aurora` binary is a thin wrapper around this crate.

pub mod boot;
pub mod cli;
pub mod demo;
pub mod desktop;
pub mod feedback;
pub mod onboarding;
pub mod session;

pub use desktop::{Desktop, ShellAction};
