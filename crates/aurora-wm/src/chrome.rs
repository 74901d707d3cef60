//! Window chrome metrics and pointer hit testing.
//!
//! The numbers mirror the rendered chrome: a 28 px menu bar across the top
//! of the screen, a 44 px title bar per window, and three 12 px control
//! buttons inset from the left of the title bar.

use aurora_common::types::{Point, Rect};

/// Height of the top menu/status bar. Window title bars may never be
/// dragged above this line, and the maximize override starts below it.
pub const MENU_BAR_HEIGHT: f64 = 28.0;

/// Height of a window's title bar.
pub const TITLE_BAR_HEIGHT: f64 = 44.0;

/// Diameter of one control button.
pub const CONTROL_DIAMETER: f64 = 12.0;

/// Gap between control buttons.
pub const CONTROL_GAP: f64 = 8.0;

/// Left inset of the first control button.
pub const CONTROL_INSET: f64 = 16.0;

/// The three title-bar buttons, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Close,
    Minimize,
    Maximize,
}

/// Where a pointer landed relative to one window's effective rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Control(Control),
    /// Title bar outside the control cluster — the drag handle.
    TitleBar,
    Content,
    Outside,
}

/// Bounding box of a control button within the window's effective rect.
pub fn control_rect(window: Rect, control: Control) -> Rect {
    let index = match control {
        Control::Close => 0.0,
        Control::Minimize => 1.0,
        Control::Maximize => 2.0,
    };
    Rect::new(
        window.x + CONTROL_INSET + index * (CONTROL_DIAMETER + CONTROL_GAP),
        window.y + (TITLE_BAR_HEIGHT - CONTROL_DIAMETER) / 2.0,
        CONTROL_DIAMETER,
        CONTROL_DIAMETER,
    )
}

/// Resolve a pointer position against one window's effective rect.
pub fn hit_test(window: Rect, point: Point) -> Region {
    if !window.contains(point) {
        return Region::Outside;
    }
    if point.y < window.y + TITLE_BAR_HEIGHT {
        for control in [Control::Close, Control::Minimize, Control::Maximize] {
            if control_rect(window, control).contains(point) {
                return Region::Control(control);
            }
        }
        return Region::TitleBar;
    }
    Region::Content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Rect {
        Rect::new(100.0, 100.0, 300.0, 200.0)
    }

    #[test]
    fn outside_misses() {
        assert_eq!(hit_test(window(), Point::new(50.0, 50.0)), Region::Outside);
        assert_eq!(
            hit_test(window(), Point::new(450.0, 150.0)),
            Region::Outside
        );
    }

    #[test]
    fn title_bar_band() {
        // Centered in the title bar, right of the controls.
        assert_eq!(
            hit_test(window(), Point::new(250.0, 120.0)),
            Region::TitleBar
        );
        // Last title-bar row.
        assert_eq!(
            hit_test(window(), Point::new(250.0, 143.9)),
            Region::TitleBar
        );
    }

    #[test]
    fn content_below_title_bar() {
        assert_eq!(
            hit_test(window(), Point::new(250.0, 144.0)),
            Region::Content
        );
        assert_eq!(
            hit_test(window(), Point::new(250.0, 250.0)),
            Region::Content
        );
    }

    #[test]
    fn control_buttons_left_to_right() {
        // Close is centered at inset + 6 = x 122, y 116.
        assert_eq!(
            hit_test(window(), Point::new(122.0, 116.0)),
            Region::Control(Control::Close)
        );
        assert_eq!(
            hit_test(window(), Point::new(142.0, 116.0)),
            Region::Control(Control::Minimize)
        );
        assert_eq!(
            hit_test(window(), Point::new(162.0, 116.0)),
            Region::Control(Control::Maximize)
        );
    }

    #[test]
    fn gap_between_controls_is_title_bar() {
        // x 130..132 falls between close and minimize.
        assert_eq!(
            hit_test(window(), Point::new(131.0, 116.0)),
            Region::TitleBar
        );
    }

    #[test]
    fn control_rect_geometry() {
        let r = control_rect(window(), Control::Close);
        assert_eq!(r, Rect::new(116.0, 116.0, 12.0, 12.0));
        let r = control_rect(window(), Control::Maximize);
        assert_eq!(r.x, 156.0);
    }
}
