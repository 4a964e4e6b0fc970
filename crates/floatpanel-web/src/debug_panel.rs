//! Lightweight debug panel: existing markup made draggable by its handle.

use floatpanel_core::{debug_inline_styles, DebugStyles, PanelId, PanelVariant, PointerKind};
use web_sys::{Event, HtmlElement};

use crate::desk::with_desk;
use crate::dom::{self, Listener, ListenerSet};
use crate::error::{PanelError, PanelResult};

/// Style the handle/body/content elements and wire the drag.
pub fn attach(handle: &str, target: &str, content: &str) -> PanelResult<PanelId> {
    let document = dom::document()?;
    let handle_element = dom::query(&document, handle)?;
    let body_element = dom::query(&document, target)?;
    let content_element = dom::query(&document, content)?;

    let information = content_element.text_content();
    let (id, styles) = with_desk(|desk| {
        desk.ensure_release_listener()?;
        let id = desk.registry.create(PanelVariant::Debug, information.as_deref());
        Ok::<_, PanelError>((id, debug_inline_styles(&desk.config)))
    })
    .ok_or_else(|| PanelError::Dom("panel desk busy".to_string()))??;

    let mut listeners = ListenerSet::new();
    let wired = wire(&mut listeners, id, &styles, &handle_element, &body_element, &content_element);
    if let Err(err) = wired {
        listeners.rollback();
        with_desk(|desk| desk.registry.discard(id));
        return Err(err);
    }
    listeners.forget();

    log::info!("Debug panel {} attached to {}", id, target);
    Ok(id)
}

fn wire(
    listeners: &mut ListenerSet,
    id: PanelId,
    styles: &DebugStyles,
    handle: &HtmlElement,
    body: &HtmlElement,
    content: &HtmlElement,
) -> PanelResult<()> {
    dom::apply_styles(handle, &styles.handle)?;
    dom::apply_styles(body, &styles.body)?;
    dom::apply_styles(content, &styles.content)?;

    for kind in [PointerKind::Mouse, PointerKind::Touch] {
        let body = body.clone();
        let press = Listener::new(kind.press_event_type(), move |event: Event| {
            with_desk(|desk| desk.press(id, &body, &event));
        });
        listeners.attach(press, handle)?;
    }
    Ok(())
}
