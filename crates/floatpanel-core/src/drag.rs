//! Drag controller: repositions an absolutely-positioned surface while a
//! pointer is held down on its handle.
//!
//! The controller never touches listeners itself. Each transition reports
//! which move stream the host has to start or stop listening to, so the
//! same logic drives DOM elements and immediate-mode widgets alike.

use kurbo::{Point, Rect, Vec2};

use crate::input::{PointerEvent, PointerKind};

/// Something that can be moved by a drag.
pub trait DragSurface {
    /// Take the surface out of normal layout flow so `left`/`top` apply.
    fn set_absolute(&self);

    /// Current bounding rectangle in viewport coordinates.
    ///
    /// `None` means the surface is missing or detached.
    fn bounding_rect(&self) -> Option<Rect>;

    /// Place the surface's top-left corner at `position`.
    fn set_position(&self, position: Point);
}

/// State of a drag between press and release.
#[derive(Debug, Clone)]
pub struct DragSession<S> {
    target: S,
    /// Pointer position minus the surface's top-left, captured at press.
    offset: Vec2,
    kind: PointerKind,
}

impl<S> DragSession<S> {
    pub fn target(&self) -> &S {
        &self.target
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }
}

/// Listener changes requested by [`DragController::begin_drag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStart {
    /// Move stream to listen to for the new session.
    pub listen: PointerKind,
    /// Move stream of a stale session that was overwritten, if any.
    pub replaced: Option<PointerKind>,
}

/// Owns at most one active drag session.
#[derive(Debug, Clone)]
pub struct DragController<S> {
    session: Option<DragSession<S>>,
}

impl<S> Default for DragController<S> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<S: DragSurface> DragController<S> {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `target` from a press event.
    ///
    /// Non-press events and surfaces without a bounding rect are ignored.
    /// A session left over from a missed release is overwritten.
    pub fn begin_drag(&mut self, target: S, event: &PointerEvent) -> Option<DragStart> {
        let PointerEvent::Press { kind, position } = *event else {
            return None;
        };

        target.set_absolute();
        let Some(rect) = target.bounding_rect() else {
            log::debug!("Ignoring press on detached drag target");
            return None;
        };

        let offset = position - rect.origin();
        let replaced = self
            .session
            .replace(DragSession { target, offset, kind })
            .map(|stale| stale.kind);

        log::debug!(
            "Drag started ({:?}) with offset ({}, {})",
            kind,
            offset.x,
            offset.y
        );

        Some(DragStart { listen: kind, replaced })
    }

    /// Follow a move event, returning the new top-left of the target.
    ///
    /// No-op while idle or when the move comes from the other modality.
    pub fn on_drag_move(&mut self, event: &PointerEvent) -> Option<Point> {
        let PointerEvent::Move { kind, position } = *event else {
            return None;
        };
        let session = self.session.as_ref()?;
        if session.kind != kind {
            return None;
        }

        let new_position = position - session.offset;
        session.target.set_position(new_position);
        Some(new_position)
    }

    /// End the active drag, returning the move stream to stop listening to.
    ///
    /// Any release ends the drag regardless of where it happened.
    pub fn end_drag(&mut self, _event: &PointerEvent) -> Option<PointerKind> {
        let session = self.session.take()?;
        log::debug!("Drag ended ({:?})", session.kind);
        Some(session.kind)
    }
}

impl<S> DragController<S> {
    /// Abandon the active drag if its target matches, returning the move
    /// stream to stop listening to.
    pub fn cancel_if(&mut self, matches: impl FnOnce(&S) -> bool) -> Option<PointerKind> {
        if !matches(&self.session.as_ref()?.target) {
            return None;
        }
        let session = self.session.take()?;
        log::debug!("Drag cancelled ({:?})", session.kind);
        Some(session.kind)
    }
}

impl<S> DragController<S> {
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession<S>> {
        self.session.as_ref()
    }

    /// Offset captured by the active session.
    pub fn offset(&self) -> Option<Vec2> {
        self.session.as_ref().map(|s| s.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use kurbo::Size;

    fn press(kind: PointerKind, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Press { kind, position: Point::new(x, y) }
    }

    fn moved(kind: PointerKind, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move { kind, position: Point::new(x, y) }
    }

    fn release(kind: PointerKind) -> PointerEvent {
        PointerEvent::Release { kind, position: Point::ZERO }
    }

    fn body_at(x: f64, y: f64) -> MemorySurface {
        MemorySurface::new(Point::new(x, y), Size::new(200.0, 120.0))
    }

    #[test]
    fn test_press_move_scenario() {
        let body = body_at(80.0, 90.0);
        let mut drag = DragController::new();

        let start = drag.begin_drag(body.clone(), &press(PointerKind::Mouse, 100.0, 100.0));
        assert_eq!(
            start,
            Some(DragStart { listen: PointerKind::Mouse, replaced: None })
        );
        let offset = drag.offset().unwrap();
        assert!((offset.x - 20.0).abs() < f64::EPSILON);
        assert!((offset.y - 10.0).abs() < f64::EPSILON);

        let pos = drag.on_drag_move(&moved(PointerKind::Mouse, 150.0, 140.0)).unwrap();
        assert!((pos.x - 130.0).abs() < f64::EPSILON);
        assert!((pos.y - 130.0).abs() < f64::EPSILON);
        assert_eq!(body.position(), Point::new(130.0, 130.0));
        assert!(body.is_absolute());
    }

    #[test]
    fn test_position_independent_of_move_frequency() {
        let coarse = body_at(10.0, 10.0);
        let fine = body_at(10.0, 10.0);
        let mut a = DragController::new();
        let mut b = DragController::new();

        a.begin_drag(coarse.clone(), &press(PointerKind::Mouse, 15.0, 12.0));
        b.begin_drag(fine.clone(), &press(PointerKind::Mouse, 15.0, 12.0));

        a.on_drag_move(&moved(PointerKind::Mouse, 300.0, 250.0));
        for step in 1..=50 {
            let t = step as f64 / 50.0;
            b.on_drag_move(&moved(PointerKind::Mouse, 15.0 + 285.0 * t, 12.0 + 238.0 * t));
        }

        assert!((coarse.position().x - fine.position().x).abs() < 1e-9);
        assert!((coarse.position().y - fine.position().y).abs() < 1e-9);
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut drag: DragController<MemorySurface> = DragController::new();
        assert_eq!(drag.end_drag(&release(PointerKind::Mouse)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_move_without_session_is_noop() {
        let mut drag: DragController<MemorySurface> = DragController::new();
        assert!(drag.on_drag_move(&moved(PointerKind::Mouse, 5.0, 5.0)).is_none());
    }

    #[test]
    fn test_move_after_release_is_ignored() {
        let body = body_at(0.0, 0.0);
        let mut drag = DragController::new();
        drag.begin_drag(body.clone(), &press(PointerKind::Mouse, 5.0, 5.0));
        assert_eq!(drag.end_drag(&release(PointerKind::Mouse)), Some(PointerKind::Mouse));

        assert!(drag.on_drag_move(&moved(PointerKind::Mouse, 100.0, 100.0)).is_none());
        assert_eq!(body.position(), Point::ZERO);
        assert_eq!(drag.end_drag(&release(PointerKind::Mouse)), None);
    }

    #[test]
    fn test_consecutive_drags_capture_fresh_offset() {
        let body = body_at(0.0, 0.0);
        let mut drag = DragController::new();

        drag.begin_drag(body.clone(), &press(PointerKind::Mouse, 10.0, 10.0));
        drag.on_drag_move(&moved(PointerKind::Mouse, 110.0, 60.0));
        drag.end_drag(&release(PointerKind::Mouse));
        assert_eq!(body.position(), Point::new(100.0, 50.0));

        // Grab the body at a different point this time.
        drag.begin_drag(body.clone(), &press(PointerKind::Mouse, 150.0, 55.0));
        let offset = drag.offset().unwrap();
        assert!((offset.x - 50.0).abs() < f64::EPSILON);
        assert!((offset.y - 5.0).abs() < f64::EPSILON);

        drag.on_drag_move(&moved(PointerKind::Mouse, 160.0, 65.0));
        assert_eq!(body.position(), Point::new(110.0, 60.0));
    }

    #[test]
    fn test_touch_drag() {
        let body = body_at(50.0, 50.0);
        let mut drag = DragController::new();

        let start = drag.begin_drag(body.clone(), &press(PointerKind::Touch, 60.0, 70.0)).unwrap();
        assert_eq!(start.listen, PointerKind::Touch);

        // Mouse moves do not drive a touch drag.
        assert!(drag.on_drag_move(&moved(PointerKind::Mouse, 0.0, 0.0)).is_none());

        drag.on_drag_move(&moved(PointerKind::Touch, 80.0, 90.0));
        assert_eq!(body.position(), Point::new(70.0, 70.0));

        assert_eq!(drag.end_drag(&release(PointerKind::Touch)), Some(PointerKind::Touch));
    }

    #[test]
    fn test_mouse_release_ends_touch_drag() {
        let body = body_at(0.0, 0.0);
        let mut drag = DragController::new();
        drag.begin_drag(body, &press(PointerKind::Touch, 1.0, 1.0));

        assert_eq!(drag.end_drag(&release(PointerKind::Mouse)), Some(PointerKind::Touch));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_reentry_overwrites_stale_session() {
        let first = body_at(0.0, 0.0);
        let second = body_at(300.0, 300.0);
        let mut drag = DragController::new();

        drag.begin_drag(first.clone(), &press(PointerKind::Touch, 5.0, 5.0));
        let start = drag
            .begin_drag(second.clone(), &press(PointerKind::Mouse, 310.0, 305.0))
            .unwrap();
        assert_eq!(start.replaced, Some(PointerKind::Touch));

        drag.on_drag_move(&moved(PointerKind::Mouse, 20.0, 15.0));
        assert_eq!(first.position(), Point::ZERO);
        assert_eq!(second.position(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_detached_target_is_noop() {
        let body = body_at(0.0, 0.0);
        body.detach();
        let mut drag = DragController::new();

        assert!(drag.begin_drag(body, &press(PointerKind::Mouse, 1.0, 1.0)).is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_non_press_does_not_begin() {
        let mut drag = DragController::new();
        assert!(drag.begin_drag(body_at(0.0, 0.0), &moved(PointerKind::Mouse, 1.0, 1.0)).is_none());
        assert!(drag.session().is_none());
    }

    #[test]
    fn test_cancel_matching_target() {
        let body = body_at(80.0, 90.0);
        let mut drag = DragController::new();
        drag.begin_drag(body.clone(), &press(PointerKind::Touch, 100.0, 100.0));

        let other = body_at(0.0, 0.0);
        assert_eq!(drag.cancel_if(|target| target.same_as(&other)), None);
        assert!(drag.is_dragging());

        assert_eq!(drag.cancel_if(|target| target.same_as(&body)), Some(PointerKind::Touch));
        assert!(!drag.is_dragging());
        assert_eq!(drag.on_drag_move(&moved(PointerKind::Touch, 150.0, 140.0)), None);
        assert_eq!(body.position(), Point::new(80.0, 90.0));
    }

    #[test]
    fn test_cancel_while_idle() {
        let mut drag: DragController<MemorySurface> = DragController::new();
        assert_eq!(drag.cancel_if(|_| true), None);
    }
}
