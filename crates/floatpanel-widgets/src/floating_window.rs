//! Floating window with minimize/maximize/close controls.

use egui::{
    Align2, Color32, Context, CornerRadius, FontId, Id, Margin, Order, RichText, Sense, Stroke, Ui,
    Vec2, vec2,
};
use floatpanel_core::{
    DragController, MemorySurface, PanelConfig, PanelId, WindowControl, WindowLifecycle,
    WindowState,
};
use kurbo::{Point, Size};

use crate::drag::{DragPhase, drag_step};
use crate::theme::{color32, to_pos2};

/// Persistent state of one floating window, kept by the caller across frames.
#[derive(Debug)]
pub struct FloatingWindowState {
    pub id: PanelId,
    lifecycle: WindowLifecycle,
    surface: MemorySurface,
    drag: DragController<MemorySurface>,
    /// Size in the normal state; maximize never overwrites it.
    normal_size: Size,
}

impl FloatingWindowState {
    pub fn new(id: PanelId, position: Point, size: Size) -> Self {
        Self {
            id,
            lifecycle: WindowLifecycle::new(),
            surface: MemorySurface::new(position, size),
            drag: DragController::new(),
            normal_size: size,
        }
    }

    pub fn lifecycle(&self) -> &WindowLifecycle {
        &self.lifecycle
    }

    pub fn state(&self) -> WindowState {
        self.lifecycle.state()
    }

    pub fn position(&self) -> Point {
        self.surface.position()
    }

    pub fn normal_size(&self) -> Size {
        self.normal_size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Apply a header control; closing also abandons a drag in progress.
    pub fn apply(&mut self, control: WindowControl) -> bool {
        let changed = self.lifecycle.apply(control);
        if changed && self.lifecycle.is_closed() {
            drag_step(&mut self.drag, &self.surface, DragPhase::Stopped);
        }
        changed
    }

    /// Size the window occupies for a given screen size.
    pub fn display_size(&self, screen: Size, config: &PanelConfig) -> Size {
        match self.lifecycle.state() {
            WindowState::Maximized => Size::new(
                screen.width * config.maximized_fraction,
                screen.height * config.maximized_fraction,
            ),
            WindowState::Minimized => Size::new(self.normal_size.width, config.header_height),
            _ => self.normal_size,
        }
    }
}

/// What happened to a window during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowResponse {
    /// Control clicked this frame, if it changed the state.
    pub control: Option<WindowControl>,
    /// New top-left after a drag this frame.
    pub moved_to: Option<Point>,
    pub visible: bool,
}

/// A floating window widget.
pub struct FloatingWindow<'a> {
    state: &'a mut FloatingWindowState,
    information: &'a str,
    config: Option<&'a PanelConfig>,
}

impl<'a> FloatingWindow<'a> {
    pub fn new(state: &'a mut FloatingWindowState, information: &'a str) -> Self {
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

    /// Show the window. `add_contents` renders below the information text.
    pub fn show(self, ctx: &Context, add_contents: impl FnOnce(&mut Ui)) -> WindowResponse {
        let default_config = PanelConfig::default();
        let config = self.config.unwrap_or(&default_config);
        let information = self.information;
        let state = self.state;

        if !state.lifecycle.is_visible() {
            return WindowResponse::default();
        }

        let palette = config.palette;
        let screen = ctx.content_rect();
        let size = state.display_size(
            Size::new(screen.width() as f64, screen.height() as f64),
            config,
        );
        let id = Id::new(("floatpanel-window", state.id.0));
        let minimized = state.lifecycle.state() == WindowState::Minimized;

        let mut response = WindowResponse {
            visible: true,
            ..Default::default()
        };

        let area = egui::Area::new(id)
            .fixed_pos(to_pos2(state.surface.position()))
            .order(Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(color32(palette.background))
                    .stroke(Stroke::new(config.border_width as f32, color32(palette.border)))
                    .corner_radius(CornerRadius::same(config.corner_radius as u8))
                    .show(ui, |ui| {
                        ui.set_width(size.width as f32);
                        if !minimized {
                            ui.set_min_height(size.height as f32);
                        }
                        ui.spacing_mut().item_spacing = vec2(0.0, 0.0);

                        let (header_rect, header) = ui.allocate_exact_size(
                            vec2(size.width as f32, config.header_height as f32),
                            Sense::click_and_drag(),
                        );
                        let painter = ui.painter();
                        let header_fill = color32(palette.header);
                        painter.rect_filled(header_rect, CornerRadius::ZERO, header_fill);

                        let radius = config.button_size as f32 / 2.0;
                        let step = config.button_size as f32 + config.button_gap as f32;
                        let controls_width = step * WindowControl::ALL.len() as f32;
                        let title_center = egui::pos2(
                            header_rect.left() + (header_rect.width() - controls_width) / 2.0,
                            header_rect.center().y,
                        );
                        painter.text(
                            title_center,
                            Align2::CENTER_CENTER,
                            state.id.title(),
                            FontId::monospace(13.0),
                            color32(palette.title_text),
                        );

                        for (index, control) in WindowControl::ALL.into_iter().enumerate() {
                            let left = header_rect.right() - controls_width + step * index as f32;
                            let center = egui::pos2(left + radius, header_rect.center().y);
                            let diameter = Vec2::splat(2.0 * radius);
                            let rect = egui::Rect::from_center_size(center, diameter);
                            let button = ui.interact(rect, id.with(control), Sense::click());
                            let fill = match control {
                                WindowControl::Minimize => palette.minimize,
                                WindowControl::Maximize => palette.maximize,
                                WindowControl::Close => palette.close,
                            };
                            let outline = if button.hovered() {
                                Color32::WHITE
                            } else {
                                color32(palette.border)
                            };
                            ui.painter().circle(
                                center,
                                radius,
                                color32(fill),
                                Stroke::new(config.border_width as f32, outline),
                            );
                            if button.clicked() {
                                response.control = Some(control);
                            }
                        }

                        if let Some(phase) = DragPhase::from_response(ctx, &header) {
                            response.moved_to = drag_step(&mut state.drag, &state.surface, phase);
                        }

                        if !minimized {
                            egui::Frame::new().inner_margin(Margin::same(5)).show(ui, |ui| {
                                ui.label(
                                    RichText::new(information)
                                        .monospace()
                                        .size(config.font_size as f32)
                                        .color(color32(palette.accent_text)),
                                );
                                add_contents(ui);
                            });
                        }
                    });
            });

        if !minimized {
            let rect = area.response.rect;
            state
                .surface
                .set_size(Size::new(rect.width() as f64, rect.height() as f64));
        }

        if let Some(control) = response.control {
            if state.apply(control) {
                log::debug!("Window {} -> {:?}", state.id, state.state());
            } else {
                response.control = None;
            }
        }

        response
    }
}
