//! Thin helpers over `web-sys` used by both panel variants.

use floatpanel_core::style::Declarations;
use floatpanel_core::{px, DragSurface, PanelId, PointerEvent, PointerKind};
use kurbo::{Point, Rect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, MouseEvent,
    TouchEvent,
};

use crate::error::{PanelError, PanelResult};

pub fn window() -> PanelResult<web_sys::Window> {
    web_sys::window().ok_or(PanelError::NoWindow)
}

pub fn document() -> PanelResult<Document> {
    window()?.document().ok_or(PanelError::NoDocument)
}

/// Find an element by selector, failing with the selector in the error.
pub fn query(document: &Document, selector: &str) -> PanelResult<HtmlElement> {
    document
        .query_selector(selector)?
        .ok_or_else(|| PanelError::ElementNotFound(selector.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PanelError::ElementNotFound(selector.to_string()))
}

/// Create an element with a class attribute.
pub fn create(document: &Document, tag: &str, class: &str) -> PanelResult<HtmlElement> {
    let element = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PanelError::Dom(format!("<{tag}> is not an HtmlElement")))?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

pub fn apply_styles(element: &HtmlElement, declarations: &Declarations) -> PanelResult<()> {
    let style = element.style();
    for (property, value) in declarations {
        style.set_property(property, value)?;
    }
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) -> PanelResult<()> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

/// Convert a DOM mouse/touch event into a pointer event.
///
/// Touch positions come from the first target touch, falling back to the
/// first changed touch for `touchend`.
pub fn pointer_event(event: &Event) -> Option<PointerEvent> {
    let position = if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        Point::new(mouse.client_x() as f64, mouse.client_y() as f64)
    } else if let Some(touch) = event.dyn_ref::<TouchEvent>() {
        touch
            .target_touches()
            .get(0)
            .or_else(|| touch.changed_touches().get(0))
            .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
            .unwrap_or(Point::ZERO)
    } else {
        return None;
    };
    PointerEvent::from_dom(&event.type_(), position)
}

/// A panel body that the drag controller moves.
#[derive(Debug, Clone)]
pub struct ElementSurface {
    pub element: HtmlElement,
    pub panel: PanelId,
}

impl DragSurface for ElementSurface {
    fn set_absolute(&self) {
        if self.element.style().set_property("position", "absolute").is_err() {
            log::warn!("Could not position panel {} absolutely", self.panel);
        }
    }

    fn bounding_rect(&self) -> Option<Rect> {
        if !self.element.is_connected() {
            return None;
        }
        let rect = self.element.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom()))
    }

    fn set_position(&self, position: Point) {
        let style = self.element.style();
        let result = style
            .set_property("left", &px(position.x))
            .and_then(|_| style.set_property("top", &px(position.y)));
        if result.is_err() {
            log::warn!("Could not move panel {}", self.panel);
        }
    }
}

/// An event listener registered in the capturing phase.
pub struct Listener {
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(event_type: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        Self {
            event_type,
            closure: Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>),
        }
    }

    /// Listener for the move stream of a pointer modality.
    pub fn for_moves(kind: PointerKind, handler: impl FnMut(Event) + 'static) -> Self {
        Self::new(kind.move_event_type(), handler)
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }

    pub fn attach(&self, target: &EventTarget) -> PanelResult<()> {
        // Non-passive so touch handlers may call preventDefault.
        let options = AddEventListenerOptions::new();
        options.set_capture(true);
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(())
    }

    pub fn detach(&self, target: &EventTarget) -> PanelResult<()> {
        target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
            true,
        )?;
        Ok(())
    }
}

/// Listeners wired while a panel is mounted.
///
/// They are only kept for the page's life once the whole mount succeeded;
/// a failed mount detaches whatever was already attached.
#[derive(Default)]
pub struct ListenerSet {
    attached: Vec<(Listener, EventTarget)>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, listener: Listener, target: &EventTarget) -> PanelResult<()> {
        listener.attach(target)?;
        self.attached.push((listener, target.clone()));
        Ok(())
    }

    /// Keep every listener for the rest of the page's life.
    pub fn forget(self) {
        for (listener, _) in self.attached {
            listener.closure.forget();
        }
    }

    /// Detach every listener attached so far.
    pub fn rollback(self) {
        for (listener, target) in &self.attached {
            if let Err(err) = listener.detach(target) {
                log::warn!("Could not detach {} listener: {}", listener.event_type(), err);
            }
        }
    }
}
