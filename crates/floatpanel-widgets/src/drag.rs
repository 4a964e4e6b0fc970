//! Bridge between egui drag responses and the core drag controller.

use egui::{Context, Response};
use floatpanel_core::{DragController, MemorySurface, PointerEvent, PointerKind};
use kurbo::Point;

use crate::theme::to_point;

/// Drag progress reported by egui for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    /// Pointer went down on the handle at this position.
    Started { kind: PointerKind, press: Point, now: Point },
    Dragged { kind: PointerKind, position: Point },
    Stopped,
}

impl DragPhase {
    /// Read the phase of a handle response, if it is being dragged.
    pub fn from_response(ctx: &Context, response: &Response) -> Option<Self> {
        let (press, current, touch) = ctx.input(|i| {
            (i.pointer.press_origin(), i.pointer.interact_pos(), i.any_touches())
        });
        let kind = if touch { PointerKind::Touch } else { PointerKind::Mouse };

        if response.drag_stopped() {
            Some(Self::Stopped)
        } else if response.drag_started() {
            let now = to_point(current?);
            Some(Self::Started {
                kind,
                press: press.map(to_point).unwrap_or(now),
                now,
            })
        } else if response.dragged() {
            Some(Self::Dragged { kind, position: to_point(current?) })
        } else {
            None
        }
    }
}

/// Feed one frame of drag progress to the controller.
///
/// egui reports a drag only after the pointer passed its threshold, so a
/// start both captures the offset at the press origin and applies the
/// first move. Returns the new top-left when the surface moved.
pub fn drag_step(
    drag: &mut DragController<MemorySurface>,
    surface: &MemorySurface,
    phase: DragPhase,
) -> Option<Point> {
    match phase {
        DragPhase::Started { kind, press, now } => {
            drag.begin_drag(surface.clone(), &PointerEvent::Press { kind, position: press })?;
            drag.on_drag_move(&PointerEvent::Move { kind, position: now })
        }
        DragPhase::Dragged { kind, position } => {
            drag.on_drag_move(&PointerEvent::Move { kind, position })
        }
        DragPhase::Stopped => {
            drag.end_drag(&PointerEvent::Release {
                kind: PointerKind::Mouse,
                position: Point::ZERO,
            });
            None
        }
    }
}
