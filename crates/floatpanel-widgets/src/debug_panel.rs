//! Lightweight debug panel: a drag handle over preformatted text.

use egui::{Context, CornerRadius, Id, Margin, Order, RichText, Sense, Stroke, vec2};
use floatpanel_core::{DragController, MemorySurface, PanelConfig, PanelId};
use kurbo::{Point, Size};

use crate::drag::{DragPhase, drag_step};
use crate::theme::{color32, to_pos2};

#[derive(Debug)]
pub struct DebugPanelState {
    pub id: PanelId,
    surface: MemorySurface,
    drag: DragController<MemorySurface>,
}

impl DebugPanelState {
    pub fn new(id: PanelId, position: Point) -> Self {
        Self {
            id,
            surface: MemorySurface::new(position, Size::ZERO),
            drag: DragController::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.surface.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }
}

/// Debug panel widget. The panel is as wide as its text.
pub struct DebugPanel<'a> {
    state: &'a mut DebugPanelState,
    information: &'a str,
    config: Option<&'a PanelConfig>,
}

impl<'a> DebugPanel<'a> {
    pub fn new(state: &'a mut DebugPanelState, information: &'a str) -> Self {
        Self {
            state,
            information,
            config: None,
        }
    }

    pub fn config(mut self, config: &'a PanelConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Show the panel, returning its new top-left if it was dragged.
    pub fn show(self, ctx: &Context) -> Option<Point> {
        let default_config = PanelConfig::default();
        let config = self.config.unwrap_or(&default_config);
        let palette = config.palette;
        let information = self.information;
        let state = self.state;
        let mut moved_to = None;

        let area = egui::Area::new(Id::new(("floatpanel-debug", state.id.0)))
            .fixed_pos(to_pos2(state.surface.position()))
            .order(Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(color32(palette.background))
                    .stroke(Stroke::new(config.border_width as f32, color32(palette.border)))
                    .corner_radius(CornerRadius::same(config.corner_radius as u8))
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing = vec2(0.0, 0.0);
                        let (_, slot) = ui.allocate_space(vec2(0.0, config.handle_height as f32));

                        egui::Frame::new()
                            .inner_margin(Margin::symmetric(5, 2))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(information)
                                        .monospace()
                                        .color(color32(palette.accent_text)),
                                );
                            });

                        // The handle spans the width the text ended up taking.
                        let handle_rect = egui::Rect::from_min_size(
                            slot.min,
                            vec2(ui.min_rect().width().max(60.0), config.handle_height as f32),
                        );
                        let handle_id = ui.id().with("handle");
                        let handle = ui.interact(handle_rect, handle_id, Sense::drag());
                        ui.painter()
                            .rect_filled(handle_rect, CornerRadius::ZERO, color32(palette.header));

                        if let Some(phase) = DragPhase::from_response(ctx, &handle) {
                            moved_to = drag_step(&mut state.drag, &state.surface, phase);
                        }
                    });
            });

        let rect = area.response.rect;
        state
            .surface
            .set_size(Size::new(rect.width() as f64, rect.height() as f64));

        moved_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_without_drag() {
        let ctx = Context::default();
        let mut state = DebugPanelState::new(PanelId(1), Point::new(10.0, 20.0));
        let mut moved = Some(Point::ZERO);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            moved = DebugPanel::new(&mut state, "x = 42").show(ctx);
        });

        assert_eq!(moved, None);
        assert!(!state.is_dragging());
        assert_eq!(state.position(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_empty_information_renders() {
        let ctx = Context::default();
        let mut state = DebugPanelState::new(PanelId(2), Point::ZERO);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            DebugPanel::new(&mut state, "").show(ctx);
        });
        assert_eq!(state.id, PanelId(2));
    }
}
