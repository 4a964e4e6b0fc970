//! Panel registry for tracking the floating widgets on a page.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::window::{WindowControl, WindowLifecycle};

/// Identity of a panel. Ids start at 1 and increase per registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PanelId(pub u32);

impl PanelId {
    /// Label shown in a floating window's header.
    pub fn title(self) -> String {
        format!("Window {}", self.0)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which widget flavour a panel is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelVariant {
    /// Lightweight debug panel: drag handle only.
    Debug,
    /// Full window with minimize/maximize/close controls.
    Window,
}

impl PanelVariant {
    pub fn has_controls(self) -> bool {
        matches!(self, Self::Window)
    }
}

/// A draggable widget.
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: PanelId,
    pub variant: PanelVariant,
    /// Text rendered verbatim as preformatted content.
    pub information: String,
    pub lifecycle: WindowLifecycle,
}

impl Panel {
    pub fn title(&self) -> String {
        self.id.title()
    }

    /// Whether the panel still takes drags.
    pub fn accepts_drag(&self) -> bool {
        self.lifecycle.is_interactive()
    }
}

/// Owns every panel created on a page.
#[derive(Debug, Clone)]
pub struct PanelRegistry {
    panels: BTreeMap<PanelId, Panel>,
    next_id: u32,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self {
            panels: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a new panel. Missing information renders as empty text.
    pub fn create(&mut self, variant: PanelVariant, information: Option<&str>) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;

        self.panels.insert(
            id,
            Panel {
                id,
                variant,
                information: information.unwrap_or_default().to_string(),
                lifecycle: WindowLifecycle::new(),
            },
        );
        log::debug!("Created {:?} panel {}", variant, id);
        id
    }

    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(&id)
    }

    /// Forget a panel whose mount failed.
    ///
    /// If it was the last panel created, its number is handed out again so
    /// the window titles on the page stay contiguous.
    pub fn discard(&mut self, id: PanelId) -> Option<Panel> {
        let panel = self.panels.remove(&id)?;
        if id.0 + 1 == self.next_id {
            self.next_id = id.0;
        }
        log::debug!("Discarded panel {}", id);
        Some(panel)
    }

    /// Apply a header control. Unknown ids and debug panels are no-ops.
    pub fn apply_control(&mut self, id: PanelId, control: WindowControl) -> bool {
        match self.panels.get_mut(&id) {
            Some(panel) if panel.variant.has_controls() => panel.lifecycle.apply(control),
            _ => false,
        }
    }

    pub fn accepts_drag(&self, id: PanelId) -> bool {
        self.get(id).is_some_and(Panel::accepts_drag)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowState;

    #[test]
    fn test_ids_increment() {
        let mut registry = PanelRegistry::new();
        let a = registry.create(PanelVariant::Window, Some("a"));
        let b = registry.create(PanelVariant::Window, Some("b"));

        assert_eq!(a, PanelId(1));
        assert_eq!(b, PanelId(2));
        assert_eq!(registry.get(b).unwrap().title(), "Window 2");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_missing_information_is_empty() {
        let mut registry = PanelRegistry::new();
        let id = registry.create(PanelVariant::Debug, None);
        assert_eq!(registry.get(id).unwrap().information, "");
    }

    #[test]
    fn test_discard_last_panel_reuses_number() {
        let mut registry = PanelRegistry::new();
        let first = registry.create(PanelVariant::Window, Some("a"));
        let failed = registry.create(PanelVariant::Window, Some("b"));

        assert!(registry.discard(failed).is_some());
        assert!(registry.get(failed).is_none());
        assert_eq!(registry.len(), 1);

        let next = registry.create(PanelVariant::Window, Some("c"));
        assert_eq!(next, PanelId(2));
        assert_eq!(registry.get(next).unwrap().title(), "Window 2");
        assert_ne!(next, first);
    }

    #[test]
    fn test_discard_earlier_panel_keeps_counter() {
        let mut registry = PanelRegistry::new();
        let a = registry.create(PanelVariant::Window, None);
        let _b = registry.create(PanelVariant::Window, None);
        registry.discard(a);
        let c = registry.create(PanelVariant::Window, None);

        assert_eq!(c, PanelId(3));
        assert!(registry.get(a).is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_discard_unknown_id() {
        let mut registry = PanelRegistry::new();
        let a = registry.create(PanelVariant::Debug, None);
        assert!(registry.discard(PanelId(7)).is_none());
        assert_eq!(registry.create(PanelVariant::Debug, None), PanelId(a.0 + 1));
    }

    #[test]
    fn test_controls_only_on_windows() {
        let mut registry = PanelRegistry::new();
        let debug = registry.create(PanelVariant::Debug, Some("x"));
        let window = registry.create(PanelVariant::Window, Some("y"));

        assert!(!registry.apply_control(debug, WindowControl::Close));
        assert!(registry.accepts_drag(debug));

        assert!(registry.apply_control(window, WindowControl::Close));
        assert_eq!(registry.get(window).unwrap().lifecycle.state(), WindowState::Closed);
        assert!(!registry.accepts_drag(window));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut registry = PanelRegistry::new();
        assert!(!registry.apply_control(PanelId(42), WindowControl::Maximize));
        assert!(!registry.accepts_drag(PanelId(42)));
        assert!(registry.is_empty());
    }
}
