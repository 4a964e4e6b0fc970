//! In-memory drag surface.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};

use crate::drag::DragSurface;

#[derive(Debug)]
struct SurfaceCell {
    rect: Cell<Rect>,
    absolute: Cell<bool>,
    attached: Cell<bool>,
}

/// A rectangle held in memory that behaves like a positioned element.
///
/// Clones share the same rectangle, so a controller can hold one handle
/// while the renderer reads another.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    inner: Rc<SurfaceCell>,
}

impl MemorySurface {
    /// Create an attached surface in normal flow.
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            inner: Rc::new(SurfaceCell {
                rect: Cell::new(Rect::from_origin_size(origin, size)),
                absolute: Cell::new(false),
                attached: Cell::new(true),
            }),
        }
    }

    pub fn rect(&self) -> Rect {
        self.inner.rect.get()
    }

    pub fn position(&self) -> Point {
        self.rect().origin()
    }

    pub fn size(&self) -> Size {
        self.rect().size()
    }

    /// Resize while keeping the top-left corner.
    pub fn set_size(&self, size: Size) {
        let origin = self.position();
        self.inner.rect.set(Rect::from_origin_size(origin, size));
    }

    pub fn is_absolute(&self) -> bool {
        self.inner.absolute.get()
    }

    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }

    /// Mark the surface as removed; it stops reporting a bounding rect.
    pub fn detach(&self) {
        self.inner.attached.set(false);
    }

    /// Whether two handles refer to the same surface.
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl DragSurface for MemorySurface {
    fn set_absolute(&self) {
        self.inner.absolute.set(true);
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.is_attached().then(|| self.rect())
    }

    fn set_position(&self, position: Point) {
        let size = self.size();
        self.inner.rect.set(Rect::from_origin_size(position, size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_rect() {
        let surface = MemorySurface::new(Point::new(1.0, 2.0), Size::new(10.0, 20.0));
        let other = surface.clone();
        other.set_position(Point::new(5.0, 6.0));

        assert_eq!(surface.position(), Point::new(5.0, 6.0));
        assert_eq!(surface.size(), Size::new(10.0, 20.0));
        assert!(surface.same_as(&other));
    }

    #[test]
    fn test_detached_has_no_rect() {
        let surface = MemorySurface::new(Point::ZERO, Size::new(1.0, 1.0));
        assert!(surface.bounding_rect().is_some());
        surface.detach();
        assert!(surface.bounding_rect().is_none());
    }

    #[test]
    fn test_set_size_keeps_origin() {
        let surface = MemorySurface::new(Point::new(3.0, 4.0), Size::new(1.0, 1.0));
        surface.set_size(Size::new(50.0, 60.0));
        assert_eq!(surface.rect(), Rect::new(3.0, 4.0, 53.0, 64.0));
    }
}
