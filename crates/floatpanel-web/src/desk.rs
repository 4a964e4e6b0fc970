//! Page-wide drag state.
//!
//! Every panel on the page shares one [`Desk`]: a single drag controller,
//! one set of move listeners installed only while a drag is active, and
//! one capturing release listener on `window`.

use std::cell::RefCell;

use floatpanel_core::{
    DragController, PanelConfig, PanelId, PanelRegistry, PointerEvent, PointerKind, WindowClasses,
    WindowControl,
};
use kurbo::Point;
use web_sys::{Event, HtmlElement};

use crate::dom::{self, ElementSurface, Listener};
use crate::error::PanelResult;

const RELEASE_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

thread_local! {
    static DESK: RefCell<Desk> = RefCell::new(Desk::new());
}

/// Run `f` against the page's desk.
///
/// Returns `None` if the desk is already borrowed, which only happens when
/// a handler is re-entered from inside another handler.
pub fn with_desk<R>(f: impl FnOnce(&mut Desk) -> R) -> Option<R> {
    DESK.with(|desk| match desk.try_borrow_mut() {
        Ok(mut desk) => Some(f(&mut desk)),
        Err(_) => {
            log::warn!("Panel event dropped: handler re-entered");
            None
        }
    })
}

pub struct Desk {
    pub registry: PanelRegistry,
    pub config: PanelConfig,
    drag: DragController<ElementSurface>,
    mouse_move: Listener,
    touch_move: Listener,
    release: Vec<Listener>,
    release_installed: bool,
}

impl Desk {
    fn new() -> Self {
        let on_move = |event: Event| {
            with_desk(|desk| desk.drag_move(&event));
        };
        Self {
            registry: PanelRegistry::new(),
            config: PanelConfig::default(),
            drag: DragController::new(),
            mouse_move: Listener::for_moves(PointerKind::Mouse, on_move),
            touch_move: Listener::for_moves(PointerKind::Touch, on_move),
            release: RELEASE_EVENTS
                .into_iter()
                .map(|event_type| {
                    Listener::new(event_type, |event: Event| {
                        with_desk(|desk| desk.release(&event));
                    })
                })
                .collect(),
            release_installed: false,
        }
    }

    /// Install the shared release listener once per page.
    pub fn ensure_release_listener(&mut self) -> PanelResult<()> {
        if self.release_installed {
            return Ok(());
        }
        let window = dom::window()?;
        for listener in &self.release {
            listener.attach(&window)?;
        }
        self.release_installed = true;
        Ok(())
    }

    fn move_listener(&self, kind: PointerKind) -> &Listener {
        match kind {
            PointerKind::Mouse => &self.mouse_move,
            PointerKind::Touch => &self.touch_move,
        }
    }

    fn listen_for_moves(&self, kind: PointerKind, on: bool) {
        let result = dom::window().and_then(|window| {
            let listener = self.move_listener(kind);
            if on {
                listener.attach(&window)
            } else {
                listener.detach(&window)
            }
        });
        if let Err(err) = result {
            log::warn!("Could not update {} listener: {}", kind.move_event_type(), err);
        }
    }

    /// Handle a press on a panel's drag handle.
    pub fn press(&mut self, panel: PanelId, body: &HtmlElement, event: &Event) {
        if !self.registry.accepts_drag(panel) {
            return;
        }
        event.prevent_default();
        event.stop_propagation();

        let Some(pointer) = dom::pointer_event(event) else {
            return;
        };
        let surface = ElementSurface {
            element: body.clone(),
            panel,
        };
        if let Some(start) = self.drag.begin_drag(surface, &pointer) {
            if let Some(stale) = start.replaced {
                self.listen_for_moves(stale, false);
            }
            self.listen_for_moves(start.listen, true);
        }
    }

    fn drag_move(&mut self, event: &Event) {
        event.prevent_default();
        event.stop_propagation();

        if let Some(pointer) = dom::pointer_event(event) {
            self.drag.on_drag_move(&pointer);
        }
    }

    fn release(&mut self, event: &Event) {
        let pointer = dom::pointer_event(event).unwrap_or(PointerEvent::Release {
            kind: PointerKind::Mouse,
            position: Point::ZERO,
        });
        if let Some(kind) = self.drag.end_drag(&pointer) {
            self.listen_for_moves(kind, false);
        }
    }

    /// Apply a header control and sync the presentation classes.
    pub fn control(
        &mut self,
        panel: PanelId,
        control: WindowControl,
        body: &HtmlElement,
        content: &HtmlElement,
    ) -> PanelResult<()> {
        if !self.registry.apply_control(panel, control) {
            return Ok(());
        }
        let Some(classes) = self.registry.get(panel).map(|p| p.lifecycle.classes()) else {
            return Ok(());
        };
        log::debug!("Panel {} -> {:?}", panel, control);

        if classes.closed {
            if let Some(kind) = self.drag.cancel_if(|target| target.panel == panel) {
                self.listen_for_moves(kind, false);
            }
        }

        dom::set_class(body, WindowClasses::MAXIMIZED, classes.maximized)?;
        dom::set_class(content, WindowClasses::MINIMIZED, classes.minimized)?;
        dom::set_class(body, WindowClasses::CLOSED, classes.closed)?;
        Ok(())
    }
}
