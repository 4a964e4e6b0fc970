//! egui renditions of the floating panels.
//!
//! - **DebugPanel**: drag handle over preformatted text
//! - **FloatingWindow**: header with window number and minimize/maximize/close buttons
//!
//! Both are driven by the drag controller and window lifecycle from
//! `floatpanel-core`, so they behave like the browser versions.

pub mod debug_panel;
pub mod drag;
pub mod floating_window;

pub use debug_panel::{DebugPanel, DebugPanelState};
pub use drag::{DragPhase, drag_step};
pub use floating_window::{FloatingWindow, FloatingWindowState, WindowResponse};

/// Conversions between the core's kurbo/peniko types and egui.
pub mod theme {
    use egui::{Color32, Pos2, pos2};
    use kurbo::Point;
    use peniko::Color;

    pub fn color32(color: Color) -> Color32 {
        let rgba = color.to_rgba8();
        Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
    }

    pub fn to_pos2(point: Point) -> Pos2 {
        pos2(point.x as f32, point.y as f32)
    }

    pub fn to_point(pos: Pos2) -> Point {
        Point::new(pos.x as f64, pos.y as f64)
    }
}
