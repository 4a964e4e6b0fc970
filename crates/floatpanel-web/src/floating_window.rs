//! Floating window: shadow-DOM panel with minimize/maximize/close controls.

use floatpanel_core::{
    window_stylesheet, PanelConfig, PanelId, PanelVariant, PointerKind, WindowControl,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, ShadowRootInit, ShadowRootMode};

use crate::desk::with_desk;
use crate::dom::{self, Listener, ListenerSet};
use crate::error::{PanelError, PanelResult};
use crate::{CONFIG_ATTRIBUTE, INFORMATION_ATTRIBUTE};

/// Elements of a mounted window that handlers need to reach.
struct WindowParts {
    body: HtmlElement,
    header: HtmlElement,
    content: HtmlElement,
    buttons: Vec<(WindowControl, HtmlElement)>,
}

fn host_config(host: &Element, fallback: &PanelConfig) -> PanelConfig {
    let Some(json) = host.get_attribute(CONFIG_ATTRIBUTE) else {
        return fallback.clone();
    };
    PanelConfig::from_json(&json).unwrap_or_else(|err| {
        log::warn!("Ignoring {}: {}", CONFIG_ATTRIBUTE, err);
        fallback.clone()
    })
}

fn build(
    host: &Element,
    title: &str,
    information: &str,
    config: &PanelConfig,
) -> PanelResult<WindowParts> {
    let document = host.owner_document().ok_or(PanelError::NoDocument)?;
    let shadow = host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?;

    let style = dom::create(&document, "style", "")?;
    style.set_text_content(Some(&window_stylesheet(config)));

    let body = dom::create(&document, "div", "dragBody")?;
    let header = dom::create(&document, "div", "dragHeader")?;
    let counter = dom::create(&document, "span", "windowCounterSpan")?;
    counter.set_text_content(Some(title));

    shadow.append_child(&style)?;
    shadow.append_child(&body)?;
    body.append_child(&header)?;
    header.append_child(&counter)?;

    let mut buttons = Vec::with_capacity(WindowControl::ALL.len());
    for control in WindowControl::ALL {
        let button = dom::create(&document, "button", control.class_name())?;
        header.append_child(&button)?;
        buttons.push((control, button));
    }

    let container = dom::create(&document, "div", "dragContentContainer")?;
    let content = dom::create(&document, "pre", "dragContent")?;
    content.set_text_content(Some(information));
    // Children of the host are projected after the text.
    content.append_child(&document.create_element("slot")?)?;
    body.append_child(&container)?;
    container.append_child(&content)?;

    Ok(WindowParts { body, header, content, buttons })
}

/// Mount a floating window into `host`'s shadow root.
pub fn mount(host: &Element) -> PanelResult<PanelId> {
    if host.shadow_root().is_some() {
        return Err(PanelError::Dom("host already has a shadow root".to_string()));
    }
    let information = host.get_attribute(INFORMATION_ATTRIBUTE);

    let (id, config) = with_desk(|desk| {
        desk.ensure_release_listener()?;
        let config = host_config(host, &desk.config);
        let id = desk.registry.create(PanelVariant::Window, information.as_deref());
        Ok::<_, PanelError>((id, config))
    })
    .ok_or_else(|| PanelError::Dom("panel desk busy".to_string()))??;

    let title = id.title();
    let built = build(host, &title, information.as_deref().unwrap_or_default(), &config);
    let mut listeners = ListenerSet::new();
    if let Err(err) = built.and_then(|parts| wire(&mut listeners, id, &parts)) {
        listeners.rollback();
        with_desk(|desk| desk.registry.discard(id));
        return Err(err);
    }
    listeners.forget();

    log::info!("Mounted floating window {}", id);
    Ok(id)
}

/// Attach the drag and control handlers of a built window.
fn wire(listeners: &mut ListenerSet, id: PanelId, parts: &WindowParts) -> PanelResult<()> {
    for kind in [PointerKind::Mouse, PointerKind::Touch] {
        let body = parts.body.clone();
        let press = Listener::new(kind.press_event_type(), move |event: Event| {
            with_desk(|desk| desk.press(id, &body, &event));
        });
        listeners.attach(press, &parts.header)?;
    }

    for (control, button) in &parts.buttons {
        let control = *control;
        let body = parts.body.clone();
        let content = parts.content.clone();
        let click = Listener::new("click", move |_event: Event| {
            if let Some(Err(err)) = with_desk(|desk| desk.control(id, control, &body, &content)) {
                log::warn!("Panel {} control failed: {}", id, err);
            }
        });
        listeners.attach(click, button)?;
    }
    Ok(())
}

/// Mount every `tag` element in the document that has no window yet.
pub fn mount_all(tag: &str) -> PanelResult<u32> {
    let document = dom::document()?;
    let hosts = document.query_selector_all(tag)?;
    let mut mounted = 0;
    for index in 0..hosts.length() {
        let Some(host) = hosts.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if host.shadow_root().is_some() {
            continue;
        }
        match mount(&host) {
            Ok(_) => mounted += 1,
            Err(err) => log::warn!("Skipping <{}>: {}", tag, err),
        }
    }
    Ok(mounted)
}
