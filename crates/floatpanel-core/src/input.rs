//! Pointer input model for unified mouse/touch handling.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Input modality that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    /// DOM event name that carries moves for this modality.
    pub fn move_event_type(self) -> &'static str {
        match self {
            Self::Mouse => "mousemove",
            Self::Touch => "touchmove",
        }
    }

    /// DOM event name that starts an interaction for this modality.
    pub fn press_event_type(self) -> &'static str {
        match self {
            Self::Mouse => "mousedown",
            Self::Touch => "touchstart",
        }
    }
}

/// Pointer event in viewport coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Press {
        kind: PointerKind,
        position: Point,
    },
    Move {
        kind: PointerKind,
        position: Point,
    },
    Release {
        kind: PointerKind,
        position: Point,
    },
}

impl PointerEvent {
    /// Build an event from a DOM event type string.
    ///
    /// Returns `None` for event types that are not part of a drag gesture.
    pub fn from_dom(event_type: &str, position: Point) -> Option<Self> {
        let event = match event_type {
            "mousedown" => Self::Press { kind: PointerKind::Mouse, position },
            "touchstart" => Self::Press { kind: PointerKind::Touch, position },
            "mousemove" => Self::Move { kind: PointerKind::Mouse, position },
            "touchmove" => Self::Move { kind: PointerKind::Touch, position },
            "mouseup" => Self::Release { kind: PointerKind::Mouse, position },
            "touchend" | "touchcancel" => Self::Release { kind: PointerKind::Touch, position },
            _ => return None,
        };
        Some(event)
    }

    /// Pointer position in viewport coordinates.
    pub fn position(&self) -> Point {
        match self {
            Self::Press { position, .. }
            | Self::Move { position, .. }
            | Self::Release { position, .. } => *position,
        }
    }

    /// Modality of the event.
    pub fn kind(&self) -> PointerKind {
        match self {
            Self::Press { kind, .. } | Self::Move { kind, .. } | Self::Release { kind, .. } => {
                *kind
            }
        }
    }

    pub fn is_press(&self) -> bool {
        matches!(self, Self::Press { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom_mouse() {
        let pos = Point::new(10.0, 20.0);
        assert_eq!(
            PointerEvent::from_dom("mousedown", pos),
            Some(PointerEvent::Press { kind: PointerKind::Mouse, position: pos })
        );
        assert_eq!(
            PointerEvent::from_dom("mousemove", pos),
            Some(PointerEvent::Move { kind: PointerKind::Mouse, position: pos })
        );
        assert_eq!(
            PointerEvent::from_dom("mouseup", pos),
            Some(PointerEvent::Release { kind: PointerKind::Mouse, position: pos })
        );
    }

    #[test]
    fn test_from_dom_touch() {
        let pos = Point::new(3.0, 4.0);
        let press = PointerEvent::from_dom("touchstart", pos).unwrap();
        assert!(press.is_press());
        assert_eq!(press.kind(), PointerKind::Touch);

        let cancel = PointerEvent::from_dom("touchcancel", pos).unwrap();
        assert!(matches!(cancel, PointerEvent::Release { kind: PointerKind::Touch, .. }));
    }

    #[test]
    fn test_from_dom_unknown() {
        assert!(PointerEvent::from_dom("click", Point::ZERO).is_none());
        assert!(PointerEvent::from_dom("", Point::ZERO).is_none());
    }

    #[test]
    fn test_position_accessor() {
        let event = PointerEvent::Move {
            kind: PointerKind::Touch,
            position: Point::new(150.0, 140.0),
        };
        assert!((event.position().x - 150.0).abs() < f64::EPSILON);
        assert!((event.position().y - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_event_type_names() {
        assert_eq!(PointerKind::Mouse.move_event_type(), "mousemove");
        assert_eq!(PointerKind::Touch.move_event_type(), "touchmove");
        assert_eq!(PointerKind::Touch.press_event_type(), "touchstart");
    }
}
