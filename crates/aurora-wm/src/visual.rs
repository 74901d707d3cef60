//! Declarative mapping from window state to render targets.
//!
//! Manager operations are synchronous and final; animation is a trailing
//! cosmetic effect. This module is the pure function an animation engine
//! interpolates toward: given a window, its focus flag, the viewport, and
//! the motion preferences, it produces the target geometry, opacity, and
//! transition parameters. Nothing here is awaited by application logic.

use aurora_common::types::{Point, Rect};
use serde::Serialize;

use crate::window::WindowEntity;

/// Horizontal anchor the minimize animation travels toward: the dock sits
/// at the left screen edge (16 px inset, ~64 px wide), centered near x 48.
pub const DOCK_CENTER_X: f64 = 48.0;

/// Scale a minimized window shrinks to before fading out entirely.
pub const MINIMIZED_SCALE: f64 = 0.2;

/// Scale/opacity a freshly opened window enters from.
pub const ENTRY_SCALE: f64 = 0.95;

/// Brightness applied to unfocused windows.
pub const UNFOCUSED_BRIGHTNESS: f64 = 0.75;

/// Saturation applied to unfocused windows.
pub const UNFOCUSED_SATURATION: f64 = 0.5;

/// Background forced behind unfocused windows so the desktop does not
/// bleed through a glassy, translucent surface that is not on top.
pub const UNFOCUSED_BACKGROUND: &str = "#171717";

/// Transition length in seconds when motion is enabled.
pub const TRANSITION_SECS: f64 = 0.3;

/// Cubic-bezier easing for all window transitions.
pub const EASE: [f64; 4] = [0.32, 0.72, 0.0, 1.0];

/// Motion/visual preference flags the views consume. Read-only, broadcast
/// state: the preferences owner mutates, everyone else copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisualPrefs {
    pub reduce_motion: bool,
    pub disable_shadows: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: f64,
    pub ease: [f64; 4],
}

/// Render target for one window. An animation engine tweens the previous
/// visual toward this one; with `transition.duration` zero it snaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowVisual {
    /// Effective geometry (maximize override applied).
    pub rect: Rect,
    /// Translation away from `rect` — the travel toward the dock anchor
    /// while minimizing. Zero whenever the window is visible.
    pub translate: Point,
    pub scale: f64,
    pub opacity: f64,
    pub brightness: f64,
    pub saturation: f64,
    /// Force an opaque backdrop (translucency is a focused-only privilege).
    pub opaque_background: bool,
    pub shadow: bool,
    /// False while minimized: the window is input-transparent.
    pub interactive: bool,
    pub z_index: u64,
    pub transition: Transition,
}

/// Map one window's state to its render target.
pub fn visual_state(
    window: &WindowEntity,
    focused: bool,
    viewport: Rect,
    prefs: VisualPrefs,
) -> WindowVisual {
    let rect = window.effective_rect(viewport);
    let minimized = window.is_minimized;

    // Travel toward the dock: horizontally to the dock column, vertically
    // to the viewport center. Suppressed under reduce-motion, where the
    // window simply disappears in place.
    let translate = if minimized && !prefs.reduce_motion {
        Point::new(
            DOCK_CENTER_X - rect.x,
            viewport.height / 2.0 - rect.y - window.size.height / 2.0,
        )
    } else {
        Point::new(0.0, 0.0)
    };

    let scale = if minimized {
        if prefs.reduce_motion {
            0.0
        } else {
            MINIMIZED_SCALE
        }
    } else {
        1.0
    };

    let dimmed = !focused && !minimized;

    WindowVisual {
        rect,
        translate,
        scale,
        opacity: if minimized { 0.0 } else { 1.0 },
        brightness: if dimmed { UNFOCUSED_BRIGHTNESS } else { 1.0 },
        saturation: if dimmed { UNFOCUSED_SATURATION } else { 1.0 },
        opaque_background: !focused,
        shadow: !prefs.disable_shadows,
        interactive: !minimized,
        z_index: window.z_index,
        transition: transition(prefs),
    }
}

/// Scale/opacity a window mounts at before its first transition.
pub fn entry_visual(prefs: VisualPrefs) -> (f64, f64) {
    if prefs.reduce_motion {
        (1.0, 1.0)
    } else {
        (ENTRY_SCALE, 0.0)
    }
}

fn transition(prefs: VisualPrefs) -> Transition {
    Transition {
        duration: if prefs.reduce_motion {
            0.0
        } else {
            TRANSITION_SECS
        },
        ease: EASE,
    }
}
