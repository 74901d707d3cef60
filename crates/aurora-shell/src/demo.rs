//! Scripted interactive session for `aurora --demo`.
//!
//! Drives the desktop through the core interactions — onboarding, dock
//! launches, a title-bar drag, minimize to dock, restore, maximize — and
//! dumps the resulting frame as JSON after each step.

use aurora_common::types::Point;
use tracing::info;

use crate::desktop::{Desktop, ShellAction};

fn dump(desktop: &Desktop, step: &str) {
    info!("demo step: {step}");
    match serde_json::to_string_pretty(&desktop.frame()) {
        Ok(json) => println!("--- {step}\n{json}"),
        Err(e) => println!("--- {step}: frame serialization failed: {e}"),
    }
}

pub fn run(desktop: &mut Desktop) {
    dump(desktop, "boot (onboarding)");

    desktop.dispatch(ShellAction::HoverLanguage(0));
    desktop.dispatch(ShellAction::SelectLanguage("en".into()));
    dump(desktop, "onboarding complete");

    desktop.dispatch(ShellAction::ActivateDockItem("finder".into()));
    desktop.dispatch(ShellAction::ActivateDockItem("mail".into()));
    dump(desktop, "finder and mail open");

    // Drag Finder by its title bar, 120 px right and 60 px down.
    if let Some(finder) = desktop.manager().window_for_app("finder") {
        if let Some(rect) = desktop.manager().effective_rect(finder, desktop.viewport()) {
            let grab = Point::new(rect.x + 200.0, rect.y + 20.0);
            desktop.dispatch(ShellAction::PointerDown(grab));
            desktop.dispatch(ShellAction::PointerMove(Point::new(
                grab.x + 120.0,
                grab.y + 60.0,
            )));
            desktop.dispatch(ShellAction::PointerUp);
        }
        dump(desktop, "finder dragged");

        desktop.dispatch(ShellAction::MinimizeWindow(finder));
        dump(desktop, "finder minimized");

        desktop.dispatch(ShellAction::ActivateDockItem("finder".into()));
        dump(desktop, "finder restored from dock");
    }

    if let Some(mail) = desktop.manager().window_for_app("mail") {
        desktop.dispatch(ShellAction::ToggleMaximizeWindow(mail));
        dump(desktop, "mail maximized");

        desktop.dispatch(ShellAction::ToggleMaximizeWindow(mail));
        dump(desktop, "mail restored");
    }

    info!("demo complete");
}
